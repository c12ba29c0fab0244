use thiserror::Error;

/// Errors that can occur during repository operations.
///
/// Storage failures that are not about a particular recipe are an internal
/// error for the caller, so backends report them through `anyhow` instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("{entity_type} already exists: {id}")]
    AlreadyExists {
        entity_type: &'static str,
        id: String,
    },
}

impl RepositoryError {
    /// A missing recipe.
    pub fn recipe_not_found(id: impl Into<String>) -> Self {
        RepositoryError::NotFound {
            entity_type: "Recipe",
            id: id.into(),
        }
    }

    /// A recipe whose id is already taken.
    pub fn recipe_already_exists(id: impl Into<String>) -> Self {
        RepositoryError::AlreadyExists {
            entity_type: "Recipe",
            id: id.into(),
        }
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_not_found_display() {
        assert_eq!(
            RepositoryError::recipe_not_found("chicken-pie").to_string(),
            "Recipe not found: chicken-pie"
        );
    }

    #[test]
    fn test_repository_error_already_exists_display() {
        assert_eq!(
            RepositoryError::recipe_already_exists("chicken-pie").to_string(),
            "Recipe already exists: chicken-pie"
        );
    }
}
