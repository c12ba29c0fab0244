use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::serde::null_as_default;

/// Units an ingredient quantity may be expressed in.
pub const RECOGNISED_UNITS: [&str; 8] = ["ml", "l", "g", "kg", "lbs", "cups", "tbsp", "tsp"];

/// How hard a recipe is to make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Moderate,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Moderate, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Moderate => "moderate",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    /// Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Difficulty::ALL
            .into_iter()
            .find(|difficulty| difficulty.as_str() == lower)
            .ok_or(lower)
    }
}

/// One line of a recipe's ingredient list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(default, deserialize_with = "null_as_default")]
    pub item: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub quantity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl Ingredient {
    pub fn new(item: impl Into<String>, quantity: i64) -> Self {
        Self {
            item: item.into(),
            quantity,
            unit: None,
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }
}

/// Where the full recipe can be found: a page in a cook book, or a link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cook_book: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Location {
    /// A reference to a page in a cook book.
    pub fn in_cook_book(cook_book: impl Into<String>, page: i64) -> Self {
        Self {
            cook_book: Some(cook_book.into()),
            page: Some(page),
            link: None,
        }
    }

    /// A reference to an online recipe.
    pub fn at_link(link: impl Into<String>) -> Self {
        Self {
            cook_book: None,
            page: None,
            link: Some(link.into()),
        }
    }

    pub fn cook_book(&self) -> &str {
        self.cook_book.as_deref().unwrap_or_default()
    }

    pub fn link(&self) -> &str {
        self.link.as_deref().unwrap_or_default()
    }

    /// Page number, with an absent page reading as zero.
    pub fn page_number(&self) -> i64 {
        self.page.unwrap_or_default()
    }
}

/// A stored recipe, or a candidate one from a request body.
///
/// Every field defaults when absent or `null` so that missing values surface
/// as validation errors rather than as parse failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cook_time: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub difficulty: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub extra_ingredients: Vec<Ingredient>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub favourite: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ingredients: Vec<Ingredient>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: Location,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub portion_size: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
}

impl Recipe {
    /// Set `id` from the current title.
    pub fn assign_id(&mut self) {
        self.id = recipe_id_from_title(&self.title);
    }
}

/// Derive a recipe's identity from its title: lower-case it and turn every space
/// into a hyphen. Nothing else is touched.
pub fn recipe_id_from_title(title: &str) -> String {
    title.to_lowercase().replace(' ', "-")
}

/// A page of recipes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeList {
    pub count: usize,
    pub items: Vec<Recipe>,
    pub limit: usize,
    pub offset: usize,
    pub total_count: usize,
}
