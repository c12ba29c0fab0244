use std::collections::BTreeMap;

use thiserror::Error;

use crate::error::ApiError;

/// The patch body could not be turned into a list of operations.
#[derive(Debug, Error)]
pub enum PatchBodyError {
    #[error("empty request body given")]
    EmptyBody,
    #[error("failed to unmarshal patch request body")]
    Malformed(#[source] serde_json::Error),
    #[error("no patches given in request body")]
    NoPatches,
}

/// A rule a single patch operation failed.
///
/// Messages name the offending field and the rule tag, so callers can match on
/// the trailing `'<tag>' tag`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatchValidationError {
    #[error("Key: 'Patch.Op' Error:Field validation for 'Op' failed on the 'required' tag")]
    MissingOp,
    #[error("Key: 'Patch.Op' Error:Field validation for 'Op' failed on the 'supportedops' tag")]
    UnsupportedOperation(String),
    #[error("Key: 'Patch.Op' Error:Field validation for 'Op' failed on the 'oneof' tag")]
    UnrecognizedOperation(String),
    #[error(
        "Key: 'Patch.Op' Error:Field validation for 'Op' failed on the 'requirevalueifopis' tag"
    )]
    MissingValue,
    #[error(
        "Key: 'Patch.Op' Error:Field validation for 'Op' failed on the 'requirefromifopis' tag"
    )]
    MissingFrom,
    #[error("Key: 'Patch.Path' Error:Field validation for 'Path' failed on the 'required' tag")]
    MissingPath,
    #[error("Key: 'Patch.From' Error:Field validation for 'From' failed on the 'nefield' tag")]
    FromEqualsPath(String),
}

impl PatchValidationError {
    /// The rule tag that failed.
    pub fn tag(&self) -> &'static str {
        match self {
            PatchValidationError::MissingOp | PatchValidationError::MissingPath => "required",
            PatchValidationError::UnsupportedOperation(_) => "supportedops",
            PatchValidationError::UnrecognizedOperation(_) => "oneof",
            PatchValidationError::MissingValue => "requirevalueifopis",
            PatchValidationError::MissingFrom => "requirefromifopis",
            PatchValidationError::FromEqualsPath(_) => "nefield",
        }
    }
}

/// A failed rule, located by the operation's index in the document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{error}")]
pub struct PatchViolation {
    pub index: usize,
    pub error: PatchValidationError,
}

impl ApiError for PatchViolation {
    fn error_values(&self) -> BTreeMap<String, String> {
        let key = |field: &str| format!("[{}].{field}", self.index);

        match &self.error {
            PatchValidationError::MissingOp => BTreeMap::from([(key("op"), String::new())]),
            PatchValidationError::UnsupportedOperation(op)
            | PatchValidationError::UnrecognizedOperation(op) => {
                BTreeMap::from([(key("op"), op.clone())])
            }
            PatchValidationError::MissingValue => BTreeMap::from([(key("value"), String::new())]),
            PatchValidationError::MissingFrom => BTreeMap::from([(key("from"), String::new())]),
            PatchValidationError::MissingPath => BTreeMap::from([(key("path"), String::new())]),
            PatchValidationError::FromEqualsPath(path) => BTreeMap::from([
                (key("from"), path.clone()),
                (key("path"), path.clone()),
            ]),
        }
    }
}
