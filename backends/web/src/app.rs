use std::cell::RefCell;
use std::rc::Rc;

use reviewkit_core::{PageConfig, Shortcut};
use wasm_bindgen::{JsCast, prelude::*};
use web_sys::{Event, HtmlInputElement, KeyboardEvent};

use crate::{
    animation::FadeIn,
    dom::{self, Page},
    error::{WebError, report},
    events::Listener,
    logging, menu,
    navigation::NavController,
    perf,
    search::SearchController,
    timer::Debounced,
};

thread_local! {
    static INSTALLED: RefCell<Option<ReviewApp>> = const { RefCell::new(None) };
}

/// Builder for [`ReviewApp`].
#[derive(Debug, Default, Clone)]
pub struct ReviewAppBuilder {
    config: PageConfig,
}

impl ReviewAppBuilder {
    /// Creates a new builder with the stock page configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the page configuration.
    #[must_use]
    pub fn with_config(mut self, config: PageConfig) -> Self {
        self.config = config;
        self
    }

    /// Parses a (possibly partial) JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`WebError::Config`] if the JSON is malformed.
    pub fn with_config_json(self, json: &str) -> Result<Self, WebError> {
        Ok(self.with_config(serde_json::from_str(json)?))
    }

    /// Finalises the builder and creates a [`ReviewApp`].
    ///
    /// # Errors
    ///
    /// Returns an error if no browser document is available.
    pub fn build(self) -> Result<ReviewApp, WebError> {
        ReviewApp::new_with_options(self)
    }
}

/// Lifecycle of a [`ReviewApp`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ReviewAppState {
    /// Created, no listeners attached yet.
    #[default]
    Initialising,
    /// Listeners are attached to the page.
    Mounted,
}

/// The page enhancements: live search, navigation sync, animations and shortcuts.
///
/// Dropping a mounted app detaches every listener it registered.
#[wasm_bindgen]
#[derive(Debug)]
pub struct ReviewApp {
    page: Page,
    config: Rc<PageConfig>,
    search: SearchController,
    typing: Option<Debounced>,
    scrolling: Option<Debounced>,
    fade_in: Option<FadeIn>,
    listeners: Vec<Listener>,
    measure: bool,
    state: ReviewAppState,
}

impl ReviewApp {
    #[allow(clippy::needless_pass_by_value)]
    fn new_with_options(builder: ReviewAppBuilder) -> Result<Self, WebError> {
        let page = Page::current()?;
        let config = Rc::new(builder.config);
        let measure = page
            .hostname()
            .is_ok_and(|host| config.measures_performance(&host));
        let search = SearchController::new(page.clone(), Rc::clone(&config), measure);
        Ok(Self {
            page,
            config,
            search,
            typing: None,
            scrolling: None,
            fade_in: None,
            listeners: Vec::new(),
            measure,
            state: ReviewAppState::Initialising,
        })
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> ReviewAppState {
        self.state
    }

    /// Returns the page configuration.
    #[must_use]
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Attaches every enhancement to the page.
    ///
    /// Each part is skipped on its own when the elements it needs are absent.
    pub fn attach(&mut self) {
        if self.state == ReviewAppState::Mounted {
            return;
        }
        logging::install(&self.config.log_filter);

        let result = self.attach_search();
        report("search", result);
        let result = self.attach_smooth_scroll();
        report("smooth scroll", result);
        let result = self.attach_animations();
        report("animations", result);
        let result = self.attach_navigation();
        report("navigation", result);
        let result = self.attach_shortcuts();
        report("shortcuts", result);
        let result = self.attach_header_menu();
        report("header menu", result);
        if self.measure {
            let result = self.attach_load_timing();
            report("load timing", result);
        }

        self.state = ReviewAppState::Mounted;
        tracing::info!(
            target: "reviewkit::app",
            listeners = self.listeners.len(),
            "review page enhancements initialized"
        );
    }

    /// Runs the search immediately, superseding any pending typed search.
    pub fn search_now(&self) {
        match &self.typing {
            Some(typing) => typing.run_now(),
            None => report("search", self.search.run()),
        }
    }

    /// The search controller bound to this page.
    #[must_use]
    pub const fn search_controller(&self) -> &SearchController {
        &self.search
    }

    fn attach_search(&mut self) -> Result<(), WebError> {
        let selectors = &self.config.selectors;
        let input: HtmlInputElement = self.page.require_as(&selectors.search_input)?;
        self.page.require(&selectors.grid)?;

        let search = self.search.clone();
        let typing = Debounced::new(self.page.window(), self.config.search_debounce(), move || {
            report("search", search.run());
        });

        let on_input = typing.clone();
        self.listeners.push(Listener::attach(&input, "input", move |_| {
            report("search", on_input.trigger());
        })?);

        let on_enter = typing.clone();
        self.listeners.push(Listener::attach(&input, "keypress", move |event: Event| {
            if event
                .dyn_ref::<KeyboardEvent>()
                .is_some_and(|key| key.key() == "Enter")
            {
                on_enter.run_now();
            }
        })?);

        if let Some(button) = self.page.find(&selectors.search_button)? {
            let on_click = typing.clone();
            self.listeners.push(Listener::attach(&button, "click", move |_| {
                on_click.run_now();
            })?);
        }

        self.typing = Some(typing);
        Ok(())
    }

    fn attach_smooth_scroll(&mut self) -> Result<(), WebError> {
        for anchor in self.page.find_all(&self.config.selectors.anchors)? {
            let page = self.page.clone();
            let link = anchor.clone();
            self.listeners.push(Listener::attach(&anchor, "click", move |event: Event| {
                event.prevent_default();
                let href = link.get_attribute("href").unwrap_or_default();
                let Some(selector) = dom::scroll_target(&href) else {
                    return;
                };
                match page.find(selector) {
                    Ok(Some(target)) => dom::scroll_to_start(&target),
                    Ok(None) => {}
                    Err(error) => report("smooth scroll", Err(error)),
                }
            })?);
        }
        Ok(())
    }

    fn attach_animations(&mut self) -> Result<(), WebError> {
        self.fade_in = FadeIn::observe(&self.page, &self.config)?;
        Ok(())
    }

    fn attach_navigation(&mut self) -> Result<(), WebError> {
        let nav = Rc::new(NavController::new(self.page.clone(), Rc::clone(&self.config)));

        let on_settle = Rc::clone(&nav);
        let scrolling = Debounced::new(self.page.window(), self.config.scroll_debounce(), move || {
            report("navigation", on_settle.update());
        });

        let on_scroll = scrolling.clone();
        self.listeners.push(Listener::attach(self.page.window(), "scroll", move |_| {
            report("navigation", on_scroll.trigger());
        })?);
        self.scrolling = Some(scrolling);

        nav.update()
    }

    fn attach_shortcuts(&mut self) -> Result<(), WebError> {
        let search = self.search.clone();
        self.listeners.push(Listener::attach(self.page.document(), "keydown", move |event: Event| {
            let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let Some(shortcut) = Shortcut::from_key(&key.key(), key.ctrl_key(), key.meta_key())
            else {
                return;
            };
            if shortcut.prevents_default() {
                event.prevent_default();
            }
            let result = match shortcut {
                Shortcut::ClearSearch => search.clear(),
                Shortcut::FocusSearch => search.focus(),
            };
            report("shortcut", result);
        })?);
        Ok(())
    }

    fn attach_header_menu(&mut self) -> Result<(), WebError> {
        let button = self.page.require(&self.config.selectors.mobile_menu_button)?;
        self.page.require(&self.config.selectors.mobile_menu)?;
        let page = self.page.clone();
        let config = Rc::clone(&self.config);
        self.listeners.push(Listener::attach(&button, "click", move |_| {
            report("header menu", menu::toggle_header_menu(&page, &config));
        })?);
        Ok(())
    }

    fn attach_load_timing(&mut self) -> Result<(), WebError> {
        if let Some(listener) = perf::log_page_load(&self.page)? {
            self.listeners.push(listener);
        }
        Ok(())
    }

    /// Makes this app the one the global entry points talk to.
    ///
    /// A previously installed app is dropped, detaching its listeners.
    pub fn install(self) {
        let previous = INSTALLED.with(|slot| slot.borrow_mut().replace(self));
        drop(previous);
    }
}

#[wasm_bindgen]
impl ReviewApp {
    /// Creates an app using the stock configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if no browser document is available.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<Self, WebError> {
        ReviewAppBuilder::new().build()
    }

    /// Creates an app from a JSON configuration; omitted fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or no browser document is available.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(json: &str) -> Result<Self, WebError> {
        ReviewAppBuilder::new().with_config_json(json)?.build()
    }

    /// Attaches the enhancements and installs the app for the page's lifetime.
    ///
    /// The JavaScript handle is consumed; use the global entry points afterwards.
    #[wasm_bindgen]
    pub fn mount(mut self) {
        self.attach();
        self.install();
    }

    /// Runs the search once with the current field contents.
    #[wasm_bindgen]
    pub fn search(&self) {
        self.search_now();
    }
}

/// Clones the installed app's search handles, or builds one-off handles from defaults.
pub(crate) fn installed_search() -> Result<(SearchController, Option<Debounced>), WebError> {
    let installed = INSTALLED.with(|slot| {
        slot.borrow()
            .as_ref()
            .map(|app| (app.search.clone(), app.typing.clone()))
    });
    match installed {
        Some(handles) => Ok(handles),
        None => {
            tracing::debug!(target: "reviewkit::app", "not mounted, using stock configuration");
            let page = Page::current()?;
            Ok((
                SearchController::new(page, Rc::new(PageConfig::default()), false),
                None,
            ))
        }
    }
}

/// The installed app's page and configuration, or the stock ones.
pub(crate) fn installed_page() -> Result<(Page, Rc<PageConfig>), WebError> {
    let installed = INSTALLED.with(|slot| {
        slot.borrow()
            .as_ref()
            .map(|app| (app.page.clone(), Rc::clone(&app.config)))
    });
    match installed {
        Some(handles) => Ok(handles),
        None => Ok((Page::current()?, Rc::new(PageConfig::default()))),
    }
}

/// Mounts the stock configuration, unless an app is already installed.
pub(crate) fn mount_default() {
    if INSTALLED.with(|slot| slot.borrow().is_some()) {
        return;
    }
    match ReviewApp::new() {
        Ok(app) => app.mount(),
        Err(error) => report("mount", Err(error)),
    }
}
