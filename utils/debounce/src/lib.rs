//! # reviewkit debounce
//!
//! A debouncer keeps at most one call outstanding. Each trigger cancels the
//! pending timer and schedules a fresh one, so the action runs once per quiet
//! period and only ever sees the latest argument.
//!
//! Timers come from a [`Scheduler`], which lets the browser backend use
//! `setTimeout` while tests drive a virtual clock. The owner of the scheduler
//! calls [`Debouncer::fire`] when the scheduled timer elapses.

use core::fmt;
use core::time::Duration;

/// Source of one-shot timers.
pub trait Scheduler {
    /// Identifies a scheduled timer so it can be cancelled.
    type Handle;
    /// Error raised when a timer cannot be scheduled.
    type Error;

    /// Arms a timer that elapses after `delay`.
    ///
    /// # Errors
    ///
    /// Returns an error if the host refuses to schedule the timer.
    fn schedule(&mut self, delay: Duration) -> Result<Self::Handle, Self::Error>;

    /// Disarms a timer that has not elapsed yet.
    fn cancel(&mut self, handle: Self::Handle);
}

struct Pending<H, A> {
    handle: H,
    arg: A,
}

/// Cancel-and-reschedule wrapper around a single pending timer.
pub struct Debouncer<S: Scheduler, A = ()> {
    scheduler: S,
    window: Duration,
    pending: Option<Pending<S::Handle, A>>,
}

impl<S: Scheduler, A> fmt::Debug for Debouncer<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debouncer")
            .field("window", &self.window)
            .field("pending", &self.pending.is_some())
            .finish_non_exhaustive()
    }
}

impl<S: Scheduler, A> Debouncer<S, A> {
    /// Creates an idle debouncer with the given quiet period.
    pub const fn new(scheduler: S, window: Duration) -> Self {
        Self {
            scheduler,
            window,
            pending: None,
        }
    }

    /// The quiet period.
    pub const fn window(&self) -> Duration {
        self.window
    }

    /// Whether a call is waiting for its timer.
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Access to the underlying scheduler.
    pub const fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Records a new triggering event, superseding any pending call.
    ///
    /// # Errors
    ///
    /// Returns the scheduler's error if the replacement timer cannot be armed.
    /// The previous call stays cancelled in that case.
    pub fn trigger(&mut self, arg: A) -> Result<(), S::Error> {
        if let Some(previous) = self.pending.take() {
            self.scheduler.cancel(previous.handle);
            tracing::trace!(target: "reviewkit::debounce", "superseded pending call");
        }
        let handle = self.scheduler.schedule(self.window)?;
        self.pending = Some(Pending { handle, arg });
        Ok(())
    }

    /// Takes the pending argument once its timer has elapsed.
    ///
    /// Returns `None` when nothing is pending, e.g. after [`Self::cancel`].
    pub fn fire(&mut self) -> Option<A> {
        self.pending.take().map(|pending| pending.arg)
    }

    /// Disarms the pending timer and hands back its argument.
    ///
    /// Explicit submits use this to run immediately instead of waiting.
    pub fn cancel(&mut self) -> Option<A> {
        self.pending.take().map(|pending| {
            self.scheduler.cancel(pending.handle);
            pending.arg
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;

    #[derive(Default)]
    struct Counting {
        scheduled: usize,
        cancelled: usize,
    }

    impl Scheduler for Counting {
        type Handle = usize;
        type Error = Infallible;

        fn schedule(&mut self, _delay: Duration) -> Result<usize, Infallible> {
            self.scheduled += 1;
            Ok(self.scheduled)
        }

        fn cancel(&mut self, _handle: usize) {
            self.cancelled += 1;
        }
    }

    #[test]
    fn trigger_cancels_previous_timer() {
        let mut debouncer = Debouncer::new(Counting::default(), Duration::from_millis(300));
        debouncer.trigger("a").unwrap();
        debouncer.trigger("b").unwrap();
        assert_eq!(debouncer.scheduler().scheduled, 2);
        assert_eq!(debouncer.scheduler().cancelled, 1);
        assert_eq!(debouncer.fire(), Some("b"));
        assert_eq!(debouncer.fire(), None);
    }

    #[test]
    fn cancel_returns_argument_and_disarms() {
        let mut debouncer = Debouncer::new(Counting::default(), Duration::from_millis(100));
        debouncer.trigger(7).unwrap();
        assert!(debouncer.is_pending());
        assert_eq!(debouncer.cancel(), Some(7));
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.scheduler().cancelled, 1);
        assert_eq!(debouncer.cancel(), None);
    }

    #[test]
    fn debug_hides_scheduler() {
        let debouncer: Debouncer<Counting> =
            Debouncer::new(Counting::default(), Duration::from_millis(100));
        assert_eq!(
            format!("{debouncer:?}"),
            "Debouncer { window: 100ms, pending: false, .. }"
        );
    }
}
