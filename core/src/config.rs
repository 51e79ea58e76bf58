//! Page configuration: where things live in the markup and how eagerly to react.
//!
//! Every field has a default matching the stock review listing page, so a
//! partial JSON object (with the `serde` feature) only overrides what it names.

use core::time::Duration;

use crate::{DEFAULT_PREVIEW_LIMIT, nav::DEFAULT_LOOKAHEAD};

/// CSS selectors for the page elements the enhancements touch.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct Selectors {
    /// Text field holding the query.
    pub search_input: String,
    /// Optional explicit submit control.
    pub search_button: String,
    /// Container receiving the results summary.
    pub results: String,
    /// Container holding the review cards.
    pub grid: String,
    /// One review card, looked up inside `grid`.
    pub card: String,
    /// Title link inside a card.
    pub card_title: String,
    /// Description paragraph inside a card.
    pub card_description: String,
    /// Optional category label inside a card.
    pub card_category: String,
    /// Region scrolled into view after a search.
    pub results_region: String,
    /// Sections tracked by the navigation highlighter.
    pub sections: String,
    /// Navigation links that reference sections.
    pub nav_links: String,
    /// In-page anchors that scroll smoothly.
    pub anchors: String,
    /// Elements that fade in when they enter the viewport.
    pub animated: String,
    /// Menu toggled by `toggleMobileMenu`.
    pub nav_menu: String,
    /// Hamburger button of the header template.
    pub mobile_menu_button: String,
    /// Collapsible menu of the header template.
    pub mobile_menu: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            search_input: "#searchInput".into(),
            search_button: ".search-button".into(),
            results: "#searchResults".into(),
            grid: "#reviewsGrid".into(),
            card: ".review-card".into(),
            card_title: "h3 a".into(),
            card_description: ".review-description".into(),
            card_category: ".review-category".into(),
            results_region: "#reviews".into(),
            sections: "section[id]".into(),
            nav_links: r##".nav-link[href^="#"]"##.into(),
            anchors: r##"a[href^="#"]"##.into(),
            animated: ".review-card, .feature".into(),
            nav_menu: ".nav-menu".into(),
            mobile_menu_button: "#mobile-menu-btn".into(),
            mobile_menu: "#mobile-menu".into(),
        }
    }
}

/// Class names toggled on page elements.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct ClassNames {
    /// Added to cards that are shown or scrolled into view.
    pub fade_in: String,
    /// Marks the navigation link of the current section.
    pub active: String,
    /// Toggled on the nav menu by `toggleMobileMenu`.
    pub mobile_active: String,
    /// Toggled on the header template's collapsible menu.
    pub hidden: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            fade_in: "fade-in".into(),
            active: "active".into(),
            mobile_active: "mobile-active".into(),
            hidden: "hidden".into(),
        }
    }
}

/// Full configuration of the page enhancements.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct PageConfig {
    /// Element selectors.
    pub selectors: Selectors,
    /// Class names.
    pub classes: ClassNames,
    /// Idle time after typing before the filter runs, in milliseconds.
    pub search_debounce_ms: u32,
    /// Quiet period after scrolling before nav sync runs, in milliseconds.
    pub scroll_debounce_ms: u32,
    /// Distance ahead of the viewport at which a section becomes active.
    pub nav_lookahead: f64,
    /// Largest match count that still gets a preview list.
    pub preview_limit: usize,
    /// Visible fraction that triggers the fade-in animation.
    pub animation_threshold: f64,
    /// Root margin handed to the intersection observer.
    pub animation_root_margin: String,
    /// Host names on which load and search timings are logged.
    pub performance_hosts: Vec<String>,
    /// `tracing` filter directives for the console logger.
    pub log_filter: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            classes: ClassNames::default(),
            search_debounce_ms: 300,
            scroll_debounce_ms: 100,
            nav_lookahead: DEFAULT_LOOKAHEAD,
            preview_limit: DEFAULT_PREVIEW_LIMIT,
            animation_threshold: 0.1,
            animation_root_margin: "50px".into(),
            performance_hosts: vec!["localhost".into(), "127.0.0.1".into()],
            log_filter: "info".into(),
        }
    }
}

impl PageConfig {
    /// Creates the stock configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the element selectors.
    #[must_use]
    pub fn with_selectors(mut self, selectors: Selectors) -> Self {
        self.selectors = selectors;
        self
    }

    /// Sets the typing debounce window.
    #[must_use]
    pub fn with_search_debounce(mut self, window: Duration) -> Self {
        self.search_debounce_ms = duration_ms(window);
        self
    }

    /// Sets the scroll debounce window.
    #[must_use]
    pub fn with_scroll_debounce(mut self, window: Duration) -> Self {
        self.scroll_debounce_ms = duration_ms(window);
        self
    }

    /// Sets the navigation lookahead margin.
    #[must_use]
    pub const fn with_nav_lookahead(mut self, lookahead: f64) -> Self {
        self.nav_lookahead = lookahead;
        self
    }

    /// Sets the preview limit.
    #[must_use]
    pub const fn with_preview_limit(mut self, limit: usize) -> Self {
        self.preview_limit = limit;
        self
    }

    /// Sets the console log filter.
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Typing debounce window.
    #[must_use]
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms.into())
    }

    /// Scroll debounce window.
    #[must_use]
    pub fn scroll_debounce(&self) -> Duration {
        Duration::from_millis(self.scroll_debounce_ms.into())
    }

    /// Whether timings should be logged when served from `host`.
    #[must_use]
    pub fn measures_performance(&self, host: &str) -> bool {
        self.performance_hosts.iter().any(|candidate| candidate == host)
    }
}

fn duration_ms(window: Duration) -> u32 {
    u32::try_from(window.as_millis()).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_page() {
        let config = PageConfig::new();
        assert_eq!(config.search_debounce(), Duration::from_millis(300));
        assert_eq!(config.scroll_debounce(), Duration::from_millis(100));
        assert!((config.nav_lookahead - 200.0).abs() < f64::EPSILON);
        assert_eq!(config.preview_limit, 10);
        assert_eq!(config.selectors.search_input, "#searchInput");
        assert_eq!(config.classes.fade_in, "fade-in");
    }

    #[test]
    fn builder_overrides() {
        let config = PageConfig::new()
            .with_search_debounce(Duration::from_millis(150))
            .with_preview_limit(5)
            .with_log_filter("reviewkit=debug");
        assert_eq!(config.search_debounce_ms, 150);
        assert_eq!(config.preview_limit, 5);
        assert_eq!(config.log_filter, "reviewkit=debug");
    }

    #[test]
    fn performance_only_on_listed_hosts() {
        let config = PageConfig::new();
        assert!(config.measures_performance("localhost"));
        assert!(config.measures_performance("127.0.0.1"));
        assert!(!config.measures_performance("www.cellnucleus.com"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_keeps_defaults() {
        let config: PageConfig = serde_json::from_str(
            r##"{ "search_debounce_ms": 500, "selectors": { "grid": "#grid" } }"##,
        )
        .unwrap();
        assert_eq!(config.search_debounce_ms, 500);
        assert_eq!(config.selectors.grid, "#grid");
        assert_eq!(config.selectors.card, ".review-card");
        assert_eq!(config.scroll_debounce_ms, 100);
    }
}
