use core::fmt;

use js_sys::{Array, Reflect};
use reviewkit_core::PageConfig;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::{
    dom::{self, Page},
    error::{WebError, report},
};

/// Adds the fade-in class to elements as they scroll into view.
pub struct FadeIn {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl fmt::Debug for FadeIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FadeIn").finish_non_exhaustive()
    }
}

impl FadeIn {
    /// Starts observing the configured elements.
    ///
    /// Returns `None` on browsers without `IntersectionObserver`.
    pub fn observe(page: &Page, config: &PageConfig) -> Result<Option<Self>, WebError> {
        let supported = Reflect::has(page.window(), &JsValue::from_str("IntersectionObserver"))?;
        if !supported {
            tracing::debug!(target: "reviewkit::animation", "IntersectionObserver unavailable");
            return Ok(None);
        }

        let class = config.classes.fade_in.clone();
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        report("fade-in", dom::set_class(&entry.target(), &class, true));
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config.animation_threshold));
        options.set_root_margin(&config.animation_root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        let targets = page.find_all(&config.selectors.animated)?;
        for element in &targets {
            observer.observe(element);
        }
        tracing::debug!(target: "reviewkit::animation", observed = targets.len(), "fade-in armed");

        Ok(Some(Self {
            observer,
            _callback: callback,
        }))
    }
}

impl Drop for FadeIn {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
