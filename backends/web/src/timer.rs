//! `setTimeout`-driven debouncing.

use core::fmt;
use core::time::Duration;
use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Function;
use reviewkit_debounce::{Debouncer, Scheduler};
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::Window;

use crate::error::WebError;

/// Scheduler whose timers all invoke one shared callback.
pub struct BrowserScheduler {
    window: Window,
    callback: Function,
}

impl fmt::Debug for BrowserScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrowserScheduler").finish_non_exhaustive()
    }
}

impl Scheduler for BrowserScheduler {
    type Handle = i32;
    type Error = WebError;

    fn schedule(&mut self, delay: Duration) -> Result<i32, WebError> {
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        Ok(self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(&self.callback, millis)?)
    }

    fn cancel(&mut self, handle: i32) {
        self.window.clear_timeout_with_handle(handle);
    }
}

struct Inner {
    debouncer: RefCell<Debouncer<BrowserScheduler>>,
    action: Box<dyn Fn()>,
    // Referenced by every armed timer; lives as long as the action.
    _tick: Closure<dyn FnMut()>,
}

impl Inner {
    fn elapsed(&self) {
        let fired = self.debouncer.borrow_mut().fire();
        if fired.is_some() {
            (self.action)();
        }
    }
}

/// An action that runs once per quiet period after its last trigger.
#[derive(Clone)]
pub struct Debounced {
    inner: Rc<Inner>,
}

impl fmt::Debug for Debounced {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debounced")
            .field("debouncer", &self.inner.debouncer)
            .finish_non_exhaustive()
    }
}

impl Debounced {
    /// Wraps `action` so it runs `delay` after the most recent trigger.
    pub fn new(window: &Window, delay: Duration, action: impl Fn() + 'static) -> Self {
        let inner = Rc::new_cyclic(|weak: &std::rc::Weak<Inner>| {
            let weak = weak.clone();
            let tick = Closure::<dyn FnMut()>::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.elapsed();
                }
            });
            let callback = tick.as_ref().unchecked_ref::<Function>().clone();
            let scheduler = BrowserScheduler {
                window: window.clone(),
                callback,
            };
            Inner {
                debouncer: RefCell::new(Debouncer::new(scheduler, delay)),
                action: Box::new(action),
                _tick: tick,
            }
        });
        Self { inner }
    }

    /// Restarts the quiet period, superseding any pending run.
    pub fn trigger(&self) -> Result<(), WebError> {
        self.inner.debouncer.borrow_mut().trigger(())
    }

    /// Cancels the pending run, if any, and runs the action right away.
    pub fn run_now(&self) {
        let _ = self.inner.debouncer.borrow_mut().cancel();
        (self.inner.action)();
    }
}
