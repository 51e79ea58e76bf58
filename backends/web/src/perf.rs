use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::PerformanceNavigationTiming;

use crate::{
    dom::{self, Page},
    error::{WebError, report},
    events::Listener,
};

/// Logs the page load time once loading has finished.
///
/// Returns the pending `load` listener when the page is still loading.
pub fn log_page_load(page: &Page) -> Result<Option<Listener>, WebError> {
    if dom::fully_loaded(&page.document().ready_state()) {
        log_load_time(page);
        return Ok(None);
    }

    let deferred = page.clone();
    let listener = Listener::attach(page.window(), "load", move |_| {
        // loadEventEnd is only recorded after the load handlers return.
        let page = deferred.clone();
        let log = Closure::once_into_js(move || log_load_time(&page));
        let scheduled = deferred
            .window()
            .set_timeout_with_callback_and_timeout_and_arguments_0(log.unchecked_ref(), 0);
        report("page load timing", scheduled.map(drop).map_err(WebError::from));
    })?;
    Ok(Some(listener))
}

fn log_load_time(page: &Page) {
    let Some(performance) = page.window().performance() else {
        return;
    };
    let Some(timing) = performance
        .get_entries_by_type("navigation")
        .get(0)
        .dyn_into::<PerformanceNavigationTiming>()
        .ok()
    else {
        return;
    };
    let elapsed_ms = timing.load_event_end() - timing.load_event_start();
    tracing::info!(target: "reviewkit::perf", elapsed_ms, "page load time");
}
