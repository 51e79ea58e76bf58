//! Markup for the search results container.

use maud::{Markup, Render, html};

use crate::{FilterOutcome, highlight};

/// The summary block and preview list shown above the review grid.
///
/// Renders nothing for the empty query so the container is cleared.
#[derive(Debug, Clone, Copy)]
pub struct SearchResults<'o, 'a> {
    outcome: &'o FilterOutcome<'a>,
}

impl<'o, 'a> SearchResults<'o, 'a> {
    /// Wraps a filter outcome for rendering.
    #[must_use]
    pub const fn new(outcome: &'o FilterOutcome<'a>) -> Self {
        Self { outcome }
    }

    /// Renders the container's inner HTML.
    #[must_use]
    pub fn to_html(&self) -> String {
        self.render().into_string()
    }
}

impl Render for SearchResults<'_, '_> {
    fn render(&self) -> Markup {
        let outcome = self.outcome;
        if !outcome.has_summary() {
            return html! {};
        }
        let needle = outcome.query().as_str();
        let preview = outcome.preview();

        html! {
            div class="search-summary" {
                h3 { "Search Results" }
                p {
                    "Found " strong { (outcome.count()) } " reviews matching \""
                    strong { (needle) } "\""
                }
            }
            @if !preview.is_empty() {
                div class="search-matches" {
                    @for item in preview {
                        div class="search-match" {
                            h4 { a href=(item.url()) { (highlight(item.title(), needle)) } }
                            p { (highlight(item.description(), needle)) }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ItemRecord, Query, filter};

    #[test]
    fn empty_query_renders_nothing() {
        let items = vec![ItemRecord::new("A", "b", "/a")];
        let outcome = filter(&items, &Query::empty());
        assert_eq!(SearchResults::new(&outcome).to_html(), "");
    }

    #[test]
    fn summary_escapes_query() {
        let items = vec![ItemRecord::new("A", "b", "/a")];
        let outcome = filter(&items, &Query::new("<script>"));
        let html = SearchResults::new(&outcome).to_html();
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn preview_links_to_detail_page() {
        let items = vec![ItemRecord::new("Lamin B", "lamina", "/reviews/lamin.html")];
        let outcome = filter(&items, &Query::new("lamin"));
        let html = SearchResults::new(&outcome).to_html();
        assert!(html.contains(r#"<a href="/reviews/lamin.html"><mark>Lamin</mark> B</a>"#));
        assert!(html.contains("<p><mark>lamin</mark>a</p>"));
    }
}
