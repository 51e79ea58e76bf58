use crate::{ItemId, ItemRecord, Query};

/// Largest match count that still gets a highlighted preview list.
pub const DEFAULT_PREVIEW_LIMIT: usize = 10;

/// Result of running a query over the page's items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome<'a> {
    query: Query,
    visible: Vec<ItemId>,
    matches: Vec<&'a ItemRecord>,
    count: usize,
    preview_limit: usize,
}

impl<'a> FilterOutcome<'a> {
    /// The query this outcome was computed for.
    #[must_use]
    pub const fn query(&self) -> &Query {
        &self.query
    }

    /// Ids of the items that stay visible, in document order.
    #[must_use]
    pub fn visible(&self) -> &[ItemId] {
        &self.visible
    }

    /// Whether the item at `id` stays visible.
    #[must_use]
    pub fn is_visible(&self, id: ItemId) -> bool {
        self.visible.binary_search(&id).is_ok()
    }

    /// Untruncated number of visible items.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// The first matches, truncated to the preview limit.
    ///
    /// Empty for the empty query.
    #[must_use]
    pub fn matches(&self) -> &[&'a ItemRecord] {
        &self.matches
    }

    /// Entries for the highlighted preview list.
    ///
    /// Only populated when the full match count fits within the preview limit.
    #[must_use]
    pub fn preview(&self) -> &[&'a ItemRecord] {
        if self.count <= self.preview_limit {
            &self.matches
        } else {
            &[]
        }
    }

    /// Whether a results summary should be rendered.
    #[must_use]
    pub fn has_summary(&self) -> bool {
        !self.query.is_empty()
    }
}

/// Filters `items` with the default preview limit.
#[must_use]
pub fn filter<'a>(items: &'a [ItemRecord], query: &Query) -> FilterOutcome<'a> {
    filter_with_limit(items, query, DEFAULT_PREVIEW_LIMIT)
}

/// Keeps every item whose title or description contains the query, ignoring case.
///
/// The empty query keeps everything and collects no matches.
#[must_use]
pub fn filter_with_limit<'a>(
    items: &'a [ItemRecord],
    query: &Query,
    preview_limit: usize,
) -> FilterOutcome<'a> {
    let needle = query.as_str();
    let mut visible = Vec::with_capacity(items.len());
    let mut matches = Vec::new();

    for (index, item) in items.iter().enumerate() {
        if needle.is_empty() {
            visible.push(ItemId::new(index));
            continue;
        }
        if item.contains_folded(needle) {
            visible.push(ItemId::new(index));
            if matches.len() < preview_limit {
                matches.push(item);
            }
        }
    }

    FilterOutcome {
        query: query.clone(),
        count: visible.len(),
        visible,
        matches,
        preview_limit,
    }
}
