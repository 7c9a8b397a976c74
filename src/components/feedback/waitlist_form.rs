//! WaitlistForm Component
//!
//! Email field plus a join button. Submission is an injected async function;
//! the form goes `Idle -> Pending -> Success` and, when the acknowledgment
//! reverts, clears the email field. A failed submit returns to `Idle` with
//! the error shown under the field.

use std::rc::Rc;
use std::time::{Duration, Instant};

use futures::future::LocalBoxFuture;
use gpui::{
    div, prelude::*, px, ClickEvent, Context, Entity, EventEmitter, IntoElement, ParentElement,
    Render, SharedString, Styled, Subscription, Task, Window,
};
use gpui_component::{
    input::{Input, InputEvent, InputState},
    ActiveTheme,
};

use crate::components::primitives::button::Button;
use crate::constants::WAITLIST_FEEDBACK_MS;
use crate::controls::feedback::{submit_error, CycleId, FeedbackController, Trigger};
use crate::controls::variant::Tint;
use crate::error::Result;

/// Async submit function: receives the trimmed email
pub type SubmitFn = Rc<dyn Fn(String) -> LocalBoxFuture<'static, anyhow::Result<()>>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaitlistEvent {
    Joined(String),
    Failed(String),
}

/// Trimmed email, `None` when there is nothing to submit
pub fn normalize_email(raw: &str) -> Option<String> {
    let email = raw.trim();
    (!email.is_empty()).then(|| email.to_string())
}

/// Waitlist sign-up form
pub struct WaitlistForm {
    email: Entity<InputState>,
    submit: SubmitFn,
    feedback: FeedbackController,
    error: Option<SharedString>,
    pending_task: Option<Task<()>>,
    revert_task: Option<Task<()>>,
    _subscriptions: Vec<Subscription>,
}

impl WaitlistForm {
    pub fn new(submit: SubmitFn, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let email = cx.new(|cx| InputState::new(window, cx).placeholder("you@example.com"));

        let subscriptions = vec![cx.subscribe_in(
            &email,
            window,
            |this, _state, event: &InputEvent, window, cx| match event {
                InputEvent::PressEnter { .. } => this.submit(window, cx),
                InputEvent::Change => {
                    if this.error.take().is_some() {
                        cx.notify();
                    }
                }
                _ => {}
            },
        )];

        Self {
            email,
            submit,
            feedback: FeedbackController::new(Duration::from_millis(WAITLIST_FEEDBACK_MS)),
            error: None,
            pending_task: None,
            revert_task: None,
            _subscriptions: subscriptions,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.feedback.is_pending()
    }

    pub fn is_joined(&self) -> bool {
        self.feedback.is_success()
    }

    pub fn submit(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let Some(email) = normalize_email(&self.email.read(cx).value()) else {
            return;
        };
        let Trigger::Started(cycle) = self.feedback.trigger(Instant::now()) else {
            return;
        };

        tracing::info!(cycle = ?cycle, "Submitting waitlist email");
        self.error = None;
        let request = (self.submit)(email.clone());

        self.pending_task = Some(cx.spawn_in(window, async move |this, cx| {
            let outcome = request.await.map_err(submit_error);
            let _ = this.update_in(cx, |this, window, cx| {
                this.settle(cycle, outcome, email, window, cx);
            });
        }));
        cx.notify();
    }

    fn settle(
        &mut self,
        cycle: CycleId,
        outcome: Result<()>,
        email: String,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        match self.feedback.settle(cycle, outcome, Instant::now()) {
            Ok(()) if self.feedback.is_success() => {
                tracing::info!(cycle = ?cycle, "Joined waitlist");
                cx.emit(WaitlistEvent::Joined(email));
                self.schedule_revert(window, cx);
            }
            Ok(()) => {}
            Err(e) => {
                tracing::warn!(error = %e, cycle = ?cycle, "Waitlist submit failed");
                self.error = Some(e.to_string().into());
                cx.emit(WaitlistEvent::Failed(e.to_string()));
            }
        }
        cx.notify();
    }

    fn schedule_revert(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let Some(delay) = self.feedback.time_until_revert(Instant::now()) else {
            self.revert_task = None;
            return;
        };

        self.revert_task = Some(cx.spawn_in(window, async move |this, cx| {
            cx.background_executor().timer(delay).await;
            let _ = this.update_in(cx, |this, window, cx| this.revert(window, cx));
        }));
    }

    fn revert(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        match self.feedback.poll(Instant::now()) {
            Some(transition) if transition.is_revert() => {
                self.email
                    .update(cx, |state, cx| state.set_value("", window, cx));
                cx.notify();
            }
            Some(_) => cx.notify(),
            None if self.feedback.is_success() => self.schedule_revert(window, cx),
            None => {}
        }
    }
}

impl EventEmitter<WaitlistEvent> for WaitlistForm {}

impl Render for WaitlistForm {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let joined = self.is_joined();
        let pending = self.is_pending();

        let action = if joined {
            Button::new("waitlist-join", "You're on the list")
                .icon("✓")
                .tint(Tint::Emerald)
        } else {
            Button::primary("waitlist-join", "Join waitlist")
                .loading(pending)
                .on_click(cx.listener(|this, _: &ClickEvent, window, cx| this.submit(window, cx)))
        };

        div()
            .flex()
            .flex_col()
            .gap_2()
            .w(px(380.0))
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(div().flex_1().child(Input::new(&self.email)))
                    .child(action),
            )
            .when_some(self.error.clone(), |this, error| {
                this.child(
                    div()
                        .text_xs()
                        .text_color(cx.theme().danger)
                        .child(error),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email_trims() {
        assert_eq!(normalize_email("  ada@example.com \n"), Some("ada@example.com".to_string()));
    }

    #[test]
    fn test_normalize_email_rejects_blank() {
        assert_eq!(normalize_email(""), None);
        assert_eq!(normalize_email("   \t"), None);
    }
}
