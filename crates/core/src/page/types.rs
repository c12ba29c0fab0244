use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::PageError;

/// Limit used when the caller does not ask for one.
pub const DEFAULT_LIMIT: usize = 20;

/// Default size of the result window (`offset + limit`).
pub const DEFAULT_MAX_RESULTS: usize = 50;

/// Pagination settings for a list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageConfig {
    pub default_limit: usize,
    pub max_results: usize,
}

impl PageConfig {
    pub fn new(default_limit: usize, max_results: usize) -> Self {
        Self {
            default_limit,
            max_results,
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT, DEFAULT_MAX_RESULTS)
    }
}

/// A normalized `(limit, offset)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub limit: usize,
    pub offset: usize,
}

impl Page {
    pub fn new(limit: usize, offset: usize) -> Self {
        Self { limit, offset }
    }

    /// Index range this page covers in a collection of `len` items.
    pub fn bounds(&self, len: usize) -> Range<usize> {
        let start = self.offset.min(len);
        let end = self.offset.saturating_add(self.limit).min(len);
        start..end
    }
}

/// Individually valid limit and offset, not yet checked against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageVariables {
    pub default_max_results: usize,
    pub limit: usize,
    pub offset: usize,
}

impl PageVariables {
    /// Check the pair against the result window.
    ///
    /// An offset at or past the window is rejected. A limit that runs past the
    /// end of the window is truncated so that `offset + limit == default_max_results`.
    pub fn validate(self) -> Result<Page, PageError> {
        if self.offset >= self.default_max_results {
            return Err(PageError::OffsetExceedsMaximum {
                offset: self.offset,
                maximum: self.default_max_results,
            });
        }

        let limit = if self.offset.saturating_add(self.limit) > self.default_max_results {
            self.default_max_results - self.offset
        } else {
            self.limit
        };

        Ok(Page::new(limit, self.offset))
    }
}
