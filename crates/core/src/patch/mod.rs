//! JSON Patch (RFC 6902) request documents.
//!
//! A patch body is first parsed into a list of [`PatchOperation`]s, which fails
//! fast on structural problems. Each operation is then validated against the
//! rules for its declared [`Operation`] and an optional per-resource allow-list.

mod error;
mod operation;
mod parse;
mod validation;

pub use error::{PatchBodyError, PatchValidationError, PatchViolation};
pub use operation::{Operation, PatchOperation, Requirements};
pub use parse::parse_patches;
pub use validation::validate_patches;
