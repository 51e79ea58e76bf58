use std::cell::RefCell;
use std::rc::Rc;

use reviewkit_core::{NavSync, NavUpdate, PageConfig, Section, nav::links_to};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::{
    dom::{self, Page},
    error::WebError,
};

/// Keeps the navigation link of the section in view marked active.
#[derive(Debug)]
pub struct NavController {
    page: Page,
    config: Rc<PageConfig>,
    sync: RefCell<NavSync>,
}

impl NavController {
    /// Creates a controller that has not touched the links yet.
    #[must_use]
    pub fn new(page: Page, config: Rc<PageConfig>) -> Self {
        let sync = RefCell::new(NavSync::new(config.nav_lookahead));
        Self { page, config, sync }
    }

    /// Recomputes the active section for the current scroll offset.
    pub fn update(&self) -> Result<(), WebError> {
        let sections = self.sections()?;
        let scroll_y = self.page.scroll_y()?;
        let mut sync = self.sync.borrow_mut();
        let active = match sync.update(&sections, scroll_y) {
            NavUpdate::Unchanged => return Ok(()),
            NavUpdate::Activate(id) => Some(id),
            NavUpdate::Clear => None,
        };

        if let Err(error) = self.mark_links(active) {
            sync.reset();
            return Err(error);
        }
        tracing::debug!(target: "reviewkit::nav", section = active, scroll_y, "active section");
        Ok(())
    }

    fn mark_links(&self, active: Option<&str>) -> Result<(), WebError> {
        let class = &self.config.classes.active;
        for link in self.page.find_all(&self.config.selectors.nav_links)? {
            let href = link.get_attribute("href").unwrap_or_default();
            let marked = active.is_some_and(|id| links_to(&href, id));
            dom::set_class(&link, class, marked)?;
        }
        Ok(())
    }

    fn sections(&self) -> Result<Vec<Section>, WebError> {
        Ok(self
            .page
            .find_all(&self.config.selectors.sections)?
            .into_iter()
            .filter_map(|element| {
                let top = element.dyn_ref::<HtmlElement>()?.offset_top();
                Some(Section::new(element.id(), f64::from(top)))
            })
            .collect())
    }
}
