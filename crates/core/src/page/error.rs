use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use crate::error::ApiError;

/// The query parameter an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageParameter {
    Limit,
    Offset,
}

impl PageParameter {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageParameter::Limit => "limit",
            PageParameter::Offset => "offset",
        }
    }
}

impl fmt::Display for PageParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced while normalizing pagination parameters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PageError {
    #[error("{parameter} value needs to be a number")]
    InvalidParameterType {
        parameter: PageParameter,
        value: String,
    },
    #[error("{parameter} needs to be a positive number, {parameter} cannot be lower than 0")]
    NegativeValue {
        parameter: PageParameter,
        value: String,
    },
    #[error("limit exceeded maximum value, limit cannot be greater than [{maximum}]")]
    LimitExceeded { value: String, maximum: usize },
    #[error("the maximum offset has been reached, the offset cannot be more than {maximum}")]
    OffsetExceedsMaximum { offset: usize, maximum: usize },
}

impl PageError {
    /// The parameter the caller needs to fix.
    pub fn parameter(&self) -> PageParameter {
        match self {
            PageError::InvalidParameterType { parameter, .. }
            | PageError::NegativeValue { parameter, .. } => *parameter,
            PageError::LimitExceeded { .. } => PageParameter::Limit,
            PageError::OffsetExceedsMaximum { .. } => PageParameter::Offset,
        }
    }
}

impl ApiError for PageError {
    fn error_values(&self) -> BTreeMap<String, String> {
        let value = match self {
            PageError::InvalidParameterType { value, .. }
            | PageError::NegativeValue { value, .. }
            | PageError::LimitExceeded { value, .. } => value.clone(),
            PageError::OffsetExceedsMaximum { offset, .. } => offset.to_string(),
        };
        BTreeMap::from([(self.parameter().to_string(), value)])
    }
}
