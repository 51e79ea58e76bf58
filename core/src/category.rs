use crate::highlight::{contains_folded, fold_case};

/// Category restriction requested by `filterReviews`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Show every card.
    #[default]
    All,
    /// Show cards whose category label contains this lower-cased text.
    Containing(String),
}

impl CategoryFilter {
    /// Parses the argument passed by page markup.
    ///
    /// A missing or blank name, or `all` in any casing, shows everything.
    #[must_use]
    pub fn new(name: Option<&str>) -> Self {
        match name.map(str::trim) {
            None | Some("") => Self::All,
            Some(name) if name.eq_ignore_ascii_case("all") => Self::All,
            Some(name) => Self::Containing(fold_case(name)),
        }
    }

    /// Whether a card with the given category label stays visible.
    #[must_use]
    pub fn admits(&self, label: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Containing(needle) => {
                label.is_some_and(|label| contains_folded(label, needle))
            }
        }
    }
}

/// Shorthand for `CategoryFilter::new(name).admits(label)`.
#[must_use]
pub fn matches_category(label: Option<&str>, name: Option<&str>) -> bool {
    CategoryFilter::new(name).admits(label)
}
