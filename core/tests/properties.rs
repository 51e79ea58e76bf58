//! Universal properties of filtering and highlighting.

use proptest::prelude::*;
use reviewkit_core::{ItemId, ItemRecord, Query, SearchResults, filter, highlight};

fn item() -> impl Strategy<Value = ItemRecord> {
    ("[A-Za-z ]{0,24}", "[A-Za-z .]{0,48}")
        .prop_map(|(title, description)| ItemRecord::new(title, description, "/r"))
}

proptest! {
    #[test]
    fn empty_query_shows_everything(items in prop::collection::vec(item(), 0..20), blank in "[ \t]{0,3}") {
        let outcome = filter(&items, &Query::new(&blank));
        prop_assert_eq!(outcome.count(), items.len());
        prop_assert!(outcome.matches().is_empty());
        prop_assert_eq!(SearchResults::new(&outcome).to_html(), "");
    }

    #[test]
    fn visible_set_is_exactly_the_containing_items(
        items in prop::collection::vec(item(), 0..20),
        raw in "[A-Za-z]{1,4}",
    ) {
        let query = Query::new(&raw);
        let outcome = filter(&items, &query);
        let needle = raw.to_lowercase();
        let expected: Vec<ItemId> = items
            .iter()
            .enumerate()
            .filter(|(_, item)| {
                item.title().to_lowercase().contains(&needle)
                    || item.description().to_lowercase().contains(&needle)
            })
            .map(|(index, _)| ItemId::new(index))
            .collect();
        prop_assert_eq!(outcome.visible(), expected.as_slice());
        prop_assert_eq!(outcome.count(), expected.len());
    }

    #[test]
    fn preview_is_bounded(items in prop::collection::vec(item(), 0..30), raw in "[a-e]{1,2}") {
        let outcome = filter(&items, &Query::new(&raw));
        prop_assert!(outcome.preview().len() <= 10);
        prop_assert!(outcome.matches().len() <= 10);
        if outcome.count() > 10 {
            prop_assert!(outcome.preview().is_empty());
        } else {
            prop_assert_eq!(outcome.preview().len(), outcome.count());
        }
    }

    #[test]
    fn every_previewed_item_is_marked(
        titles in prop::collection::vec("[A-Za-zΣσςΟΔοδİi ]{0,12}", 0..12),
        raw in "[A-Za-zΣσςΟΔοδİi]{1,3}",
    ) {
        let items: Vec<ItemRecord> = titles
            .into_iter()
            .map(|title| ItemRecord::new(title, "", "/r"))
            .collect();
        let query = Query::new(&raw);
        let outcome = filter(&items, &query);
        for item in outcome.preview() {
            prop_assert!(highlight(item.title(), query.as_str()).is_marked());
        }
    }

    #[test]
    fn highlighting_without_occurrence_is_identity(text in "[a-m ]{0,40}", needle in "[n-z]{1,5}") {
        let highlighted = highlight(&text, &needle);
        prop_assert!(!highlighted.is_marked());
        prop_assert_eq!(highlighted.to_string(), text);
    }

    #[test]
    fn highlighting_preserves_text(text in "\\PC{0,40}", needle in "\\PC{0,4}") {
        prop_assert_eq!(highlight(&text, &needle).to_string(), text);
    }
}
