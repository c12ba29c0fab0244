//! Functional core for the food recipes API.
//!
//! Everything in this crate is pure: validators take their input and an explicit
//! configuration value and return either a normalized result or the full list of
//! failures. The HTTP shell lives in the `food_recipes` crate.

pub mod error;
pub mod page;
pub mod patch;
pub mod recipe;
pub mod serde;
pub mod storage;

pub use error::{ApiError, ErrorObject, ErrorResponse};
