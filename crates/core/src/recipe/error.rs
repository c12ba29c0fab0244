use std::collections::BTreeMap;

use thiserror::Error;

use crate::error::ApiError;

/// Why a recipe location was rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LocationConflict {
    #[error("invalid location, cannot have both a cook book reference and a link")]
    Both,
    #[error("missing location, requires either a cook book and page or a link")]
    Neither,
    #[error("invalid location, a cook book reference requires both a cook book and a page")]
    PartialCookBook,
}

/// Errors reported by recipe validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecipeError {
    /// Every required field that was absent or zero, grouped into one error.
    #[error("missing mandatory fields")]
    MissingFields(Vec<String>),
    #[error("invalid difficulty for recipe")]
    InvalidDifficulty(String),
    #[error("invalid units for ingredient")]
    InvalidUnit { field: String, unit: String },
    #[error("invalid portion size, cannot be less than 1")]
    InvalidPortionSize(i64),
    #[error("{conflict}")]
    InvalidLocation {
        conflict: LocationConflict,
        cook_book: String,
        page: i64,
        link: String,
    },
    #[error("not allowed to change the existing title for recipe")]
    TitleImmutable(String),
}

impl ApiError for RecipeError {
    fn error_values(&self) -> BTreeMap<String, String> {
        match self {
            RecipeError::MissingFields(fields) => fields
                .iter()
                .map(|field| (field.clone(), String::new()))
                .collect(),
            RecipeError::InvalidDifficulty(value) => {
                BTreeMap::from([("difficulty".to_string(), value.clone())])
            }
            RecipeError::InvalidUnit { field, unit } => {
                BTreeMap::from([(field.clone(), unit.clone())])
            }
            RecipeError::InvalidPortionSize(size) => {
                BTreeMap::from([("portion_size".to_string(), size.to_string())])
            }
            RecipeError::InvalidLocation {
                cook_book,
                page,
                link,
                ..
            } => BTreeMap::from([
                ("location.cook_book".to_string(), cook_book.clone()),
                ("location.page".to_string(), page.to_string()),
                ("location.link".to_string(), link.clone()),
            ]),
            RecipeError::TitleImmutable(title) => {
                BTreeMap::from([("title".to_string(), title.clone())])
            }
        }
    }
}
