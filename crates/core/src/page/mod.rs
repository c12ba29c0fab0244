//! Pagination bounds for list endpoints.
//!
//! Raw `limit`/`offset` query strings are parsed individually, then checked
//! together against the configured result window.

mod calculate;
mod error;
mod types;

pub use calculate::{calculate_limit, calculate_offset, calculate_page};
pub use error::{PageError, PageParameter};
pub use types::{Page, PageConfig, PageVariables, DEFAULT_LIMIT, DEFAULT_MAX_RESULTS};
