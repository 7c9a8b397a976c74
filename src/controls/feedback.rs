//! Ephemeral feedback state machine
//!
//! Turns a user action (copy to clipboard, submit a form) into a short,
//! self-reverting acknowledgment.
//!
//! ```text
//!            trigger (async)          settle Ok
//!   Idle ─────────────────▶ Pending ─────────────▶ Success
//!    ▲ │                       │                      │
//!    │ │  run_sync Ok          │ settle Err           │ poll after deadline
//!    │ └───────────────────────┼─────────────────────▶│
//!    └─────────────────────────┴──────────────────────┘
//! ```
//!
//! The controller is time-agnostic: callers pass `Instant`s and schedule
//! their own timer for [`FeedbackController::time_until_revert`]. The GPUI
//! components retain that timer as a `Task` so dropping the component
//! cancels it.

use std::time::{Duration, Instant};

use crate::error::{Error, Result};

/// Visible phase of the acknowledgment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FeedbackPhase {
    /// Nothing shown; accepts triggers
    #[default]
    Idle,
    /// Async action in flight
    Pending,
    /// Acknowledgment visible until the revert deadline
    Success,
}

/// A phase change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: FeedbackPhase,
    pub to: FeedbackPhase,
}

impl Transition {
    /// True for the `Success -> Idle` edge that caller reset policies hang off
    pub fn is_revert(&self) -> bool {
        self.from == FeedbackPhase::Success && self.to == FeedbackPhase::Idle
    }
}

/// Identifies one feedback cycle so stale settlements can be ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CycleId(u64);

/// Result of a trigger request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// A cycle was already in flight; nothing happened
    Rejected,
    /// Entered `Pending`; settle with this id
    Started(CycleId),
}

/// Text clipboard the copy feedback writes to
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

type TransitionObserver = Box<dyn FnMut(&Transition) + 'static>;

/// At-most-one-in-flight feedback cycle with automatic revert
pub struct FeedbackController {
    phase: FeedbackPhase,
    display: Duration,
    triggered_at: Option<Instant>,
    revert_at: Option<Instant>,
    cycle: u64,
    observer: Option<TransitionObserver>,
}

impl FeedbackController {
    /// Create an idle controller whose acknowledgment lasts `display`
    pub fn new(display: Duration) -> Self {
        Self {
            phase: FeedbackPhase::Idle,
            display,
            triggered_at: None,
            revert_at: None,
            cycle: 0,
            observer: None,
        }
    }

    /// Observe every phase change
    pub fn on_transition(mut self, observer: impl FnMut(&Transition) + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn phase(&self) -> FeedbackPhase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == FeedbackPhase::Idle
    }

    pub fn is_pending(&self) -> bool {
        self.phase == FeedbackPhase::Pending
    }

    pub fn is_success(&self) -> bool {
        self.phase == FeedbackPhase::Success
    }

    pub fn display(&self) -> Duration {
        self.display
    }

    /// When the current cycle was triggered
    pub fn triggered_at(&self) -> Option<Instant> {
        self.triggered_at
    }

    /// Start an async cycle: `Idle -> Pending`
    pub fn trigger(&mut self, now: Instant) -> Trigger {
        if !self.is_idle() {
            tracing::debug!(phase = ?self.phase, "Feedback trigger ignored, cycle in flight");
            return Trigger::Rejected;
        }

        self.cycle += 1;
        self.triggered_at = Some(now);
        self.transition(FeedbackPhase::Pending);
        Trigger::Started(CycleId(self.cycle))
    }

    /// Settle the async action started by `trigger`.
    ///
    /// `Ok` moves to `Success` and arms the revert deadline. `Err` moves back
    /// to `Idle` and hands the error back unchanged. Settlements for an older
    /// cycle, or arriving after `cancel`, are ignored and return `Ok`.
    pub fn settle<E>(
        &mut self,
        cycle: CycleId,
        outcome: std::result::Result<(), E>,
        now: Instant,
    ) -> std::result::Result<(), E> {
        if !self.is_pending() || cycle.0 != self.cycle {
            tracing::debug!(?cycle, current = self.cycle, "Ignoring stale feedback settlement");
            return Ok(());
        }

        match outcome {
            Ok(()) => {
                self.succeed(now);
                Ok(())
            }
            Err(e) => {
                self.reset();
                Err(e)
            }
        }
    }

    /// Run a synchronous action: `Idle -> Success`, skipping `Pending`.
    ///
    /// Returns `Ok(false)` when a cycle was already in flight and the action
    /// was not run. A failing action leaves the controller `Idle`.
    pub fn run_sync<E>(
        &mut self,
        now: Instant,
        action: impl FnOnce() -> std::result::Result<(), E>,
    ) -> std::result::Result<bool, E> {
        if !self.is_idle() {
            tracing::debug!(phase = ?self.phase, "Feedback trigger ignored, cycle in flight");
            return Ok(false);
        }

        action()?;
        self.cycle += 1;
        self.triggered_at = Some(now);
        self.succeed(now);
        Ok(true)
    }

    /// Copy `text` and acknowledge on success
    pub fn copy(&mut self, clipboard: &mut impl Clipboard, text: &str, now: Instant) -> Result<bool> {
        self.run_sync(now, || clipboard.write_text(text))
    }

    /// Remaining time until the acknowledgment reverts, if one is showing
    pub fn time_until_revert(&self, now: Instant) -> Option<Duration> {
        self.revert_at.map(|at| at.saturating_duration_since(now))
    }

    /// Fire the `Success -> Idle` edge once the deadline has passed
    pub fn poll(&mut self, now: Instant) -> Option<Transition> {
        match self.revert_at {
            Some(at) if self.is_success() && now >= at => Some(self.reset()),
            _ => None,
        }
    }

    /// Drop the current cycle without firing the revert edge.
    ///
    /// Called when the owner is torn down.
    pub fn cancel(&mut self) {
        self.revert_at = None;
        self.triggered_at = None;
        self.phase = FeedbackPhase::Idle;
        // Invalidate any in-flight settlement.
        self.cycle += 1;
    }

    fn succeed(&mut self, now: Instant) {
        self.revert_at = Some(now + self.display);
        self.transition(FeedbackPhase::Success);
    }

    fn reset(&mut self) -> Transition {
        self.revert_at = None;
        self.triggered_at = None;
        self.transition(FeedbackPhase::Idle)
    }

    fn transition(&mut self, to: FeedbackPhase) -> Transition {
        let transition = Transition {
            from: self.phase,
            to,
        };
        self.phase = to;
        tracing::debug!(from = ?transition.from, to = ?transition.to, "Feedback transition");
        if let Some(observer) = self.observer.as_mut() {
            observer(&transition);
        }
        transition
    }
}

impl std::fmt::Debug for FeedbackController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedbackController")
            .field("phase", &self.phase)
            .field("display", &self.display)
            .field("revert_at", &self.revert_at)
            .field("cycle", &self.cycle)
            .finish()
    }
}

/// Turn a rejected submit into the crate error
pub fn submit_error(err: impl std::fmt::Display) -> Error {
    Error::Submit {
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    const COPY_DELAY: Duration = Duration::from_millis(1400);

    type Log = Rc<RefCell<Vec<Transition>>>;

    fn observed(display: Duration) -> (FeedbackController, Log) {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        let controller =
            FeedbackController::new(display).on_transition(move |t| sink.borrow_mut().push(*t));
        (controller, log)
    }

    fn phases(log: &Log) -> Vec<(FeedbackPhase, FeedbackPhase)> {
        log.borrow().iter().map(|t| (t.from, t.to)).collect()
    }

    struct MockClipboard {
        contents: Option<String>,
        fail: bool,
    }

    impl Clipboard for MockClipboard {
        fn write_text(&mut self, text: &str) -> Result<()> {
            if self.fail {
                return Err(Error::Clipboard {
                    message: "permission denied".to_string(),
                });
            }
            self.contents = Some(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_copy_scenario() {
        use FeedbackPhase::*;

        let (mut controller, log) = observed(COPY_DELAY);
        let mut clipboard = MockClipboard { contents: None, fail: false };
        let start = Instant::now();

        assert!(controller.copy(&mut clipboard, "hello@example.com", start).expect("copied"));
        assert_eq!(clipboard.contents.as_deref(), Some("hello@example.com"));
        assert_eq!(controller.phase(), Success);
        assert_eq!(controller.time_until_revert(start), Some(COPY_DELAY));

        assert_eq!(controller.poll(start + Duration::from_millis(700)), None);
        let revert = controller.poll(start + Duration::from_millis(1500)).expect("reverted");
        assert!(revert.is_revert());
        assert_eq!(controller.phase(), Idle);

        assert_eq!(phases(&log), vec![(Idle, Success), (Success, Idle)]);
    }

    #[test]
    fn test_second_trigger_is_ignored() {
        use FeedbackPhase::*;

        let (mut controller, log) = observed(COPY_DELAY);
        let now = Instant::now();

        let first = controller.trigger(now);
        assert!(matches!(first, Trigger::Started(_)));
        assert_eq!(controller.trigger(now), Trigger::Rejected);

        let Trigger::Started(cycle) = first else { unreachable!() };
        controller.settle::<Error>(cycle, Ok(()), now).expect("settled");
        assert_eq!(controller.trigger(now), Trigger::Rejected);
        assert!(!controller.run_sync::<Error>(now, || Ok(())).expect("guarded"));

        controller.poll(now + COPY_DELAY);
        assert_eq!(phases(&log), vec![(Idle, Pending), (Pending, Success), (Success, Idle)]);
    }

    #[test]
    fn test_sync_double_trigger_runs_action_once() {
        let (mut controller, log) = observed(COPY_DELAY);
        let mut clipboard = MockClipboard { contents: None, fail: false };
        let now = Instant::now();

        assert!(controller.copy(&mut clipboard, "a", now).expect("first"));
        assert!(!controller.copy(&mut clipboard, "b", now).expect("second"));
        assert_eq!(clipboard.contents.as_deref(), Some("a"));
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn test_auto_revert_needs_no_input() {
        let mut controller = FeedbackController::new(Duration::from_secs(3));
        let now = Instant::now();
        let Trigger::Started(cycle) = controller.trigger(now) else {
            panic!("idle controller must start");
        };
        controller.settle::<Error>(cycle, Ok(()), now).expect("settled");

        let later = now + Duration::from_secs(3);
        assert_eq!(controller.time_until_revert(later), Some(Duration::ZERO));
        assert!(controller.poll(later).is_some());
        assert!(controller.is_idle());
        assert_eq!(controller.poll(later), None);
    }

    #[test]
    fn test_failure_path_returns_to_idle() {
        use FeedbackPhase::*;

        let (mut controller, log) = observed(Duration::from_secs(3));
        let now = Instant::now();
        let Trigger::Started(cycle) = controller.trigger(now) else {
            panic!("idle controller must start");
        };

        let err = controller
            .settle(cycle, Err(submit_error("503 Service Unavailable")), now)
            .expect_err("rejection surfaces");
        assert!(err.to_string().contains("503"));
        assert!(controller.is_idle());
        assert_eq!(controller.time_until_revert(now), None);
        assert_eq!(phases(&log), vec![(Idle, Pending), (Pending, Idle)]);

        // Available for a manual retry.
        assert!(matches!(controller.trigger(now), Trigger::Started(_)));
    }

    #[test]
    fn test_clipboard_failure_stays_idle() {
        let (mut controller, log) = observed(COPY_DELAY);
        let mut clipboard = MockClipboard { contents: None, fail: true };

        let err = controller
            .copy(&mut clipboard, "hello@example.com", Instant::now())
            .expect_err("clipboard failure surfaces");
        assert!(matches!(err, Error::Clipboard { .. }));
        assert!(controller.is_idle());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_stale_settlement_ignored() {
        let mut controller = FeedbackController::new(COPY_DELAY);
        let now = Instant::now();
        let Trigger::Started(old) = controller.trigger(now) else {
            panic!("idle controller must start");
        };
        controller.cancel();

        let Trigger::Started(current) = controller.trigger(now) else {
            panic!("cancelled controller must start");
        };
        controller.settle::<Error>(old, Ok(()), now).expect("ignored");
        assert!(controller.is_pending());

        controller.settle::<Error>(current, Ok(()), now).expect("settled");
        assert!(controller.is_success());
    }

    #[test]
    fn test_cancel_suppresses_revert_edge() {
        let (mut controller, log) = observed(COPY_DELAY);
        let now = Instant::now();
        controller.run_sync::<Error>(now, || Ok(())).expect("copied");

        controller.cancel();
        assert_eq!(controller.poll(now + COPY_DELAY * 2), None);
        assert_eq!(log.borrow().len(), 1);
        assert!(controller.triggered_at().is_none());
    }

    #[test]
    fn test_async_submit_round() {
        use futures::executor::block_on;

        async fn submit(email: &str) -> anyhow::Result<()> {
            if email.contains('@') {
                Ok(())
            } else {
                anyhow::bail!("rejected {email}")
            }
        }

        let mut controller = FeedbackController::new(Duration::from_secs(3));
        let now = Instant::now();

        let Trigger::Started(cycle) = controller.trigger(now) else {
            panic!("idle controller must start");
        };
        let outcome = block_on(submit("nope")).map_err(submit_error);
        assert!(controller.settle(cycle, outcome, now).is_err());
        assert!(controller.is_idle());

        let Trigger::Started(cycle) = controller.trigger(now) else {
            panic!("retry must start");
        };
        let outcome = block_on(submit("ada@example.com")).map_err(submit_error);
        controller.settle(cycle, outcome, now).expect("accepted");
        assert!(controller.is_success());
    }
}
