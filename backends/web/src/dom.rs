use crate::error::WebError;

use wasm_bindgen::JsCast;

use web_sys::{
    Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    Window,
};

/// Handle to the hosting window and document.
#[derive(Debug, Clone)]
pub struct Page {
    window: Window,
    document: Document,
}

impl Page {
    /// Locates the current browsing context.
    pub fn current() -> Result<Self, WebError> {
        let window: Window = web_sys::window().ok_or(WebError::DomUnavailable)?;
        let document: Document = window.document().ok_or(WebError::DomUnavailable)?;
        Ok(Self { window, document })
    }

    /// Returns the window.
    #[must_use]
    pub const fn window(&self) -> &Window {
        &self.window
    }

    /// Returns the owning document.
    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// First element matching `selector`, or [`WebError::MissingElement`].
    pub fn require(&self, selector: &str) -> Result<Element, WebError> {
        self.find(selector)?
            .ok_or_else(|| WebError::missing(selector))
    }

    /// First element matching `selector`, if any.
    pub fn find(&self, selector: &str) -> Result<Option<Element>, WebError> {
        Ok(self.document.query_selector(selector)?)
    }

    /// Every element matching `selector`, in document order.
    pub fn find_all(&self, selector: &str) -> Result<Vec<Element>, WebError> {
        Ok(collect(&self.document.query_selector_all(selector)?))
    }

    /// Like [`Self::require`], cast to a concrete element type.
    pub fn require_as<T: JsCast>(&self, selector: &str) -> Result<T, WebError> {
        self.require(selector)?
            .dyn_into::<T>()
            .map_err(|_| WebError::missing(selector))
    }

    /// Current vertical scroll offset.
    pub fn scroll_y(&self) -> Result<f64, WebError> {
        Ok(self.window.scroll_y()?)
    }

    /// Host name of the page URL.
    pub fn hostname(&self) -> Result<String, WebError> {
        Ok(self.window.location().hostname()?)
    }
}

/// Every descendant of `root` matching `selector`.
pub fn find_all_in(root: &Element, selector: &str) -> Result<Vec<Element>, WebError> {
    Ok(collect(&root.query_selector_all(selector)?))
}

/// Text of the first descendant of `root` matching `selector`.
pub fn text_in(root: &Element, selector: &str) -> Result<Option<String>, WebError> {
    Ok(root
        .query_selector(selector)?
        .and_then(|element| element.text_content()))
}

fn collect(nodes: &web_sys::NodeList) -> Vec<Element> {
    (0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Shows or hides an element through its inline `display` style.
pub fn set_displayed(element: &Element, displayed: bool) -> Result<(), WebError> {
    let Some(html) = element.dyn_ref::<HtmlElement>() else {
        return Ok(());
    };
    let value = if displayed { "block" } else { "none" };
    html.style().set_property("display", value)?;
    Ok(())
}

/// Adds or removes `class` on `element`.
pub fn set_class(element: &Element, class: &str, present: bool) -> Result<(), WebError> {
    let list = element.class_list();
    if present {
        list.add_1(class)?;
    } else {
        list.remove_1(class)?;
    }
    Ok(())
}

/// Smoothly scrolls `element` to the top of the viewport.
pub fn scroll_to_start(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Whether a `document.readyState` value means parsing is still underway.
#[must_use]
pub fn still_parsing(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Whether a `document.readyState` value means the `load` event has fired.
#[must_use]
pub fn fully_loaded(ready_state: &str) -> bool {
    ready_state == "complete"
}

/// The selector an in-page link scrolls to, or `None` for a bare `#`.
#[must_use]
pub fn scroll_target(href: &str) -> Option<&str> {
    (href.starts_with('#') && href.len() > 1).then_some(href)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ready_states() {
        assert!(still_parsing("loading"));
        assert!(!still_parsing("interactive"));
        assert!(!fully_loaded("interactive"));
        assert!(fully_loaded("complete"));
    }

    #[test]
    fn bare_hash_has_no_target() {
        assert_eq!(scroll_target("#"), None);
        assert_eq!(scroll_target(""), None);
        assert_eq!(scroll_target("#about"), Some("#about"));
        assert_eq!(scroll_target("/reviews/x.html"), None);
    }
}
