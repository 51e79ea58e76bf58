use core::fmt;

use crate::highlight;

/// Position of a review card in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(usize);

impl ItemId {
    /// Creates an id from a document-order index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the document-order index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One listing entry as read from the page markup.
///
/// Records are snapshots: the filter only reads them, the page stays the source of truth.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemRecord {
    title: String,
    description: String,
    url: String,
    category: Option<String>,
}

impl ItemRecord {
    /// Creates a record without a category label.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            url: url.into(),
            category: None,
        }
    }

    /// Attaches the card's category label.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Title text of the card link.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Description paragraph of the card.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Detail page link.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Category label, when the card carries one.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Whether the title or description contains `needle`, ignoring case.
    ///
    /// `needle` must already be folded, as [`Query`](crate::Query) does.
    pub(crate) fn contains_folded(&self, needle: &str) -> bool {
        highlight::contains_folded(&self.title, needle)
            || highlight::contains_folded(&self.description, needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_checks_title_and_description() {
        let item = ItemRecord::new("Chromatin Loops", "Cohesin extrusion", "/a");
        assert!(item.contains_folded("chromatin"));
        assert!(item.contains_folded("extrusion"));
        assert!(!item.contains_folded("lamina"));
    }

    #[test]
    fn category_is_optional() {
        let item = ItemRecord::new("t", "d", "/u");
        assert_eq!(item.category(), None);
        assert_eq!(item.with_category("Structure").category(), Some("Structure"));
    }

    #[test]
    fn id_display() {
        assert_eq!(ItemId::new(3).to_string(), "#3");
    }
}
