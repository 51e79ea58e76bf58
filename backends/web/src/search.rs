use std::rc::Rc;

use reviewkit_core::{
    CategoryFilter, ItemId, ItemRecord, PageConfig, Query, SearchResults, filter_with_limit,
};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlAnchorElement, HtmlInputElement};

use crate::{
    dom::{self, Page},
    error::WebError,
};

/// Reads the review grid, applies queries to it and renders the results summary.
#[derive(Debug, Clone)]
pub struct SearchController {
    page: Page,
    config: Rc<PageConfig>,
    measure: bool,
}

impl SearchController {
    /// Creates a controller for `page`.
    ///
    /// With `measure` set, each run logs how long it took.
    #[must_use]
    pub const fn new(page: Page, config: Rc<PageConfig>, measure: bool) -> Self {
        Self {
            page,
            config,
            measure,
        }
    }

    fn input(&self) -> Result<HtmlInputElement, WebError> {
        self.page
            .require_as::<HtmlInputElement>(&self.config.selectors.search_input)
    }

    /// Filters the grid by the current contents of the search field.
    pub fn run(&self) -> Result<(), WebError> {
        let selectors = &self.config.selectors;
        let input = self.input()?;
        let grid = self.page.require(&selectors.grid)?;
        let started = self.now();

        let query = Query::new(&input.value());
        let (cards, items) = self.read_cards(&grid)?;
        let outcome = filter_with_limit(&items, &query, self.config.preview_limit);

        for (index, card) in cards.iter().enumerate() {
            let visible = outcome.is_visible(ItemId::new(index));
            dom::set_displayed(card, visible)?;
            dom::set_class(card, &self.config.classes.fade_in, visible)?;
        }

        match self.page.find(&selectors.results)? {
            Some(results) => results.set_inner_html(&SearchResults::new(&outcome).to_html()),
            None => tracing::debug!(
                target: "reviewkit::search",
                selector = %selectors.results,
                "no results container"
            ),
        }

        if !query.is_empty()
            && let Some(region) = self.page.find(&selectors.results_region)?
        {
            dom::scroll_to_start(&region);
        }

        tracing::debug!(
            target: "reviewkit::search",
            query = %query,
            count = outcome.count(),
            "filtered reviews"
        );
        if let (Some(started), Some(finished)) = (started, self.now()) {
            tracing::info!(target: "reviewkit::perf", elapsed_ms = finished - started, "search time");
        }
        Ok(())
    }

    /// Empties the search field and shows every review again.
    pub fn clear(&self) -> Result<(), WebError> {
        self.input()?.set_value("");
        self.run()
    }

    /// Focuses the search field and selects its contents.
    pub fn focus(&self) -> Result<(), WebError> {
        let input = self.input()?;
        input.focus()?;
        input.select();
        Ok(())
    }

    /// Shows only the cards whose category label contains `name`.
    pub fn filter_category(&self, name: Option<&str>) -> Result<(), WebError> {
        let selectors = &self.config.selectors;
        let category = CategoryFilter::new(name);
        for card in self.page.find_all(&selectors.card)? {
            let label = dom::text_in(&card, &selectors.card_category)?;
            dom::set_displayed(&card, category.admits(label.as_deref()))?;
        }
        tracing::debug!(target: "reviewkit::search", ?category, "filtered by category");
        Ok(())
    }

    fn read_cards(&self, grid: &Element) -> Result<(Vec<Element>, Vec<ItemRecord>), WebError> {
        let selectors = &self.config.selectors;
        let cards = dom::find_all_in(grid, &selectors.card)?;
        let mut items = Vec::with_capacity(cards.len());
        for card in &cards {
            let link = card.query_selector(&selectors.card_title)?;
            let title = link
                .as_ref()
                .and_then(|link| link.text_content())
                .unwrap_or_default();
            let url = link.as_ref().map(link_target).unwrap_or_default();
            let description =
                dom::text_in(card, &selectors.card_description)?.unwrap_or_default();
            let mut item = ItemRecord::new(title, description, url);
            if let Some(category) = dom::text_in(card, &selectors.card_category)? {
                item = item.with_category(category);
            }
            items.push(item);
        }
        Ok((cards, items))
    }

    fn now(&self) -> Option<f64> {
        if !self.measure {
            return None;
        }
        self.page.window().performance().map(|performance| performance.now())
    }
}

fn link_target(link: &Element) -> String {
    link.dyn_ref::<HtmlAnchorElement>().map_or_else(
        || link.get_attribute("href").unwrap_or_default(),
        HtmlAnchorElement::href,
    )
}
