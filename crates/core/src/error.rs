//! Wire shape for error responses.
//!
//! Every failure the API reports is an [`ErrorObject`]: a human readable message
//! plus a map of the field values that caused it. Domain error enums implement
//! [`ApiError`] to describe how they are rendered.

use std::collections::BTreeMap;
use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A single reported failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorObject {
    pub error: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub error_values: BTreeMap<String, String>,
}

impl ErrorObject {
    /// Create an error object without any values.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            error_values: BTreeMap::new(),
        }
    }

    /// Attach a field value.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.error_values.insert(key.into(), value.into());
        self
    }
}

/// Body returned for an unsuccessful request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub errors: Vec<ErrorObject>,
}

impl ErrorResponse {
    /// Build a response from any collection of domain errors.
    pub fn from_errors<'a, E, I>(errors: I) -> Self
    where
        E: ApiError + 'a,
        I: IntoIterator<Item = &'a E>,
    {
        Self {
            errors: errors.into_iter().map(ApiError::to_error_object).collect(),
        }
    }

    /// Build a response holding a single plain message.
    pub fn message(error: impl Into<String>) -> Self {
        Self {
            errors: vec![ErrorObject::new(error)],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl From<Vec<ErrorObject>> for ErrorResponse {
    fn from(errors: Vec<ErrorObject>) -> Self {
        Self { errors }
    }
}

/// A domain error that can be reported to API callers.
///
/// The `Display` output becomes the `error` message and [`ApiError::error_values`]
/// supplies the offending values.
pub trait ApiError: Display {
    fn error_values(&self) -> BTreeMap<String, String>;

    fn to_error_object(&self) -> ErrorObject {
        ErrorObject {
            error: self.to_string(),
            error_values: self.error_values(),
        }
    }
}
