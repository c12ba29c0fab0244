use super::{Operation, PatchOperation, PatchValidationError, PatchViolation};

impl PatchOperation {
    /// Check this operation against RFC 6902 and an optional allow-list.
    ///
    /// All rules are evaluated; the error list holds every rule that failed.
    pub fn validate(&self, supported: Option<&[Operation]>) -> Result<(), Vec<PatchValidationError>> {
        let mut errors = Vec::new();
        let operation = self.operation();

        if self.op.is_empty() {
            errors.push(PatchValidationError::MissingOp);
        } else {
            if let Some(supported) = supported {
                if !operation.is_some_and(|op| supported.contains(&op)) {
                    errors.push(PatchValidationError::UnsupportedOperation(self.op.clone()));
                }
            }
            if operation.is_none() {
                errors.push(PatchValidationError::UnrecognizedOperation(self.op.clone()));
            }
        }

        if let Some(requirements) = operation.map(Operation::requirements) {
            if requirements.value && self.value.is_none() {
                errors.push(PatchValidationError::MissingValue);
            }
            if requirements.from && self.from_path().is_empty() {
                errors.push(PatchValidationError::MissingFrom);
            }
        }

        if self.path.is_empty() {
            errors.push(PatchValidationError::MissingPath);
        }

        let from = self.from_path();
        if !from.is_empty() && !self.path.is_empty() && from == self.path {
            errors.push(PatchValidationError::FromEqualsPath(from.to_string()));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Validate every operation in a patch document.
///
/// `supported` restricts which operations the target resource accepts; `None`
/// allows all six.
pub fn validate_patches(
    patches: &[PatchOperation],
    supported: Option<&[Operation]>,
) -> Result<(), Vec<PatchViolation>> {
    let violations: Vec<PatchViolation> = patches
        .iter()
        .enumerate()
        .filter_map(|(index, patch)| patch.validate(supported).err().map(|errors| (index, errors)))
        .flat_map(|(index, errors)| {
            errors
                .into_iter()
                .map(move |error| PatchViolation { index, error })
        })
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}
