//! Debounce timing checked against a virtual clock.

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;
use std::time::Duration;

use reviewkit_debounce::{Debouncer, Scheduler};
use rstest::rstest;

#[derive(Default)]
struct ClockState {
    now: Duration,
    next_id: u64,
    timers: Vec<(u64, Duration)>,
}

/// Shared handle to a manually advanced clock.
#[derive(Clone, Default)]
struct VirtualClock(Rc<RefCell<ClockState>>);

impl VirtualClock {
    /// Moves time forward and returns how many timers elapsed.
    fn advance(&self, by: Duration) -> usize {
        let mut state = self.0.borrow_mut();
        state.now += by;
        let now = state.now;
        let before = state.timers.len();
        state.timers.retain(|(_, due)| *due > now);
        before - state.timers.len()
    }

    fn armed(&self) -> usize {
        self.0.borrow().timers.len()
    }
}

impl Scheduler for VirtualClock {
    type Handle = u64;
    type Error = Infallible;

    fn schedule(&mut self, delay: Duration) -> Result<u64, Infallible> {
        let mut state = self.0.borrow_mut();
        state.next_id += 1;
        let id = state.next_id;
        let due = state.now + delay;
        state.timers.push((id, due));
        Ok(id)
    }

    fn cancel(&mut self, handle: u64) {
        self.0.borrow_mut().timers.retain(|(id, _)| *id != handle);
    }
}

/// Advances in small steps, running the action each time a timer elapses.
fn run_for(
    clock: &VirtualClock,
    debouncer: &mut Debouncer<VirtualClock, String>,
    total: Duration,
    executed: &mut Vec<String>,
) {
    let step = Duration::from_millis(10);
    let mut elapsed = Duration::ZERO;
    while elapsed < total {
        for _ in 0..clock.advance(step) {
            if let Some(query) = debouncer.fire() {
                executed.push(query);
            }
        }
        elapsed += step;
    }
}

#[test]
fn rapid_typing_runs_once_with_last_value() {
    let clock = VirtualClock::default();
    let mut debouncer = Debouncer::new(clock.clone(), Duration::from_millis(300));
    let mut executed = Vec::new();

    for text in ["f", "fi", "fis", "fiss", "fission"] {
        debouncer.trigger(text.to_owned()).unwrap();
        run_for(&clock, &mut debouncer, Duration::from_millis(50), &mut executed);
    }
    assert!(executed.is_empty());
    assert_eq!(clock.armed(), 1);

    run_for(&clock, &mut debouncer, Duration::from_millis(400), &mut executed);
    assert_eq!(executed, vec!["fission".to_owned()]);
    assert_eq!(clock.armed(), 0);
}

#[rstest]
#[case::scroll(100)]
#[case::search(300)]
fn separated_bursts_each_run(#[case] window_ms: u64) {
    let clock = VirtualClock::default();
    let window = Duration::from_millis(window_ms);
    let mut debouncer = Debouncer::new(clock.clone(), window);
    let mut executed = Vec::new();

    debouncer.trigger("first".to_owned()).unwrap();
    run_for(&clock, &mut debouncer, window * 2, &mut executed);
    debouncer.trigger("second".to_owned()).unwrap();
    run_for(&clock, &mut debouncer, window * 2, &mut executed);

    assert_eq!(executed, vec!["first".to_owned(), "second".to_owned()]);
}

#[test]
fn does_not_fire_before_window() {
    let clock = VirtualClock::default();
    let mut debouncer = Debouncer::new(clock.clone(), Duration::from_millis(300));
    let mut executed = Vec::new();

    debouncer.trigger("lamina".to_owned()).unwrap();
    run_for(&clock, &mut debouncer, Duration::from_millis(290), &mut executed);
    assert!(executed.is_empty());
    run_for(&clock, &mut debouncer, Duration::from_millis(20), &mut executed);
    assert_eq!(executed, vec!["lamina".to_owned()]);
}

#[test]
fn explicit_submit_bypasses_pending_timer() {
    let clock = VirtualClock::default();
    let mut debouncer = Debouncer::new(clock.clone(), Duration::from_millis(300));
    let mut executed = Vec::new();

    debouncer.trigger("chromatin".to_owned()).unwrap();
    if let Some(query) = debouncer.cancel() {
        executed.push(query);
    }
    assert_eq!(clock.armed(), 0);

    run_for(&clock, &mut debouncer, Duration::from_millis(400), &mut executed);
    assert_eq!(executed, vec!["chromatin".to_owned()]);
}
