use core::fmt;

use crate::highlight::fold_case;

/// A normalized search query: trimmed, then lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub struct Query {
    normalized: String,
}

impl Query {
    /// Normalizes raw input from the search field.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self {
            normalized: fold_case(raw.trim()),
        }
    }

    /// The empty query, which shows every item.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            normalized: String::new(),
        }
    }

    /// Returns `true` when the query shows every item and renders no summary.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }

    /// The normalized text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.normalized
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}

impl From<&str> for Query {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
