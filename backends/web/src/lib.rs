#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Web/WASM backend for reviewkit.
//!
//! This crate binds the DOM-free logic of [`reviewkit_core`] to a static review
//! listing page. [`ReviewApp`] reads the review cards from the markup, wires the
//! search field, scroll tracking, fade-in animation and keyboard shortcuts, and
//! keeps its listeners alive for as long as it is installed.
//!
//! With the `autostart` feature the stock configuration mounts itself on
//! `DOMContentLoaded`. Markup can also call the exported globals directly:
//! `searchReviews()`, `clearSearch()`, `filterReviews(category)`,
//! `toggleMobileMenu()` and `trackEvent(category, action, label)`. Each of
//! them is a silent no-op when the page lacks the elements it needs.

mod animation;
mod app;
mod dom;
mod error;
mod events;
mod logging;
mod menu;
mod navigation;
mod perf;
mod search;
mod timer;

pub use app::{ReviewApp, ReviewAppBuilder, ReviewAppState};
pub use dom::Page;
pub use error::WebError;
pub use navigation::NavController;
pub use search::SearchController;
pub use timer::{BrowserScheduler, Debounced};

use wasm_bindgen::prelude::*;

use crate::error::report;

/// Runs the search immediately with the current field contents.
#[wasm_bindgen(js_name = searchReviews)]
pub fn search_reviews() {
    let result = app::installed_search().map(|(search, typing)| match typing {
        Some(typing) => typing.run_now(),
        None => report("searchReviews", search.run()),
    });
    report("searchReviews", result);
}

/// Empties the search field and shows every review again.
#[wasm_bindgen(js_name = clearSearch)]
pub fn clear_search() {
    let result = app::installed_search().and_then(|(search, _)| search.clear());
    report("clearSearch", result);
}

/// Shows only the reviews whose category label contains `category`.
///
/// `all`, an empty string or no argument shows every review.
#[wasm_bindgen(js_name = filterReviews)]
pub fn filter_reviews(category: Option<String>) {
    let result =
        app::installed_search().and_then(|(search, _)| search.filter_category(category.as_deref()));
    report("filterReviews", result);
}

/// Opens or closes the responsive navigation menu.
#[wasm_bindgen(js_name = toggleMobileMenu)]
pub fn toggle_mobile_menu() {
    let result =
        app::installed_page().and_then(|(page, config)| menu::toggle_mobile_menu(&page, &config));
    report("toggleMobileMenu", result);
}

/// Records an analytics event in the log.
#[wasm_bindgen(js_name = trackEvent)]
pub fn track_event(category: &str, action: &str, label: Option<String>) {
    tracing::info!(
        target: "reviewkit::analytics",
        category,
        action,
        label = label.as_deref(),
        "track"
    );
}

/// Installs logging and mounts the stock configuration once the DOM is ready.
#[cfg(feature = "autostart")]
#[wasm_bindgen(start)]
pub fn start() {
    use wasm_bindgen::{JsCast, closure::Closure};

    logging::install_panic_hook();

    let page = match Page::current() {
        Ok(page) => page,
        Err(error) => return report("start", Err(error)),
    };
    if !dom::still_parsing(&page.document().ready_state()) {
        app::mount_default();
        return;
    }

    let on_ready = Closure::once_into_js(app::mount_default);
    let result = page
        .document()
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
        .map_err(WebError::from);
    report("start", result);
}
