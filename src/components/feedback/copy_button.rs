//! CopyButton Component
//!
//! Copies a fixed text to the system clipboard and shows "Copied" for a short
//! while. The revert timer is a retained `Task`; dropping the button cancels it.

use std::time::{Duration, Instant};

use gpui::{
    App, ClickEvent, ClipboardItem, Context, ElementId, EventEmitter, IntoElement, Render,
    SharedString, Task, Window,
};

use crate::components::primitives::button::{Button, ButtonVariant};
use crate::constants::COPY_FEEDBACK_MS;
use crate::controls::feedback::{Clipboard, FeedbackController};
use crate::controls::variant::{Size, Tint};
use crate::error::Result;

/// System clipboard through the app context
pub struct AppClipboard<'a>(pub &'a mut App);

impl Clipboard for AppClipboard<'_> {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.0
            .write_to_clipboard(ClipboardItem::new_string(text.to_string()));
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyEvent {
    Copied,
    Failed(String),
}

/// Copy-to-clipboard button with a self-reverting acknowledgment
pub struct CopyButton {
    id: ElementId,
    text: SharedString,
    label: SharedString,
    size: Size,
    feedback: FeedbackController,
    revert_task: Option<Task<()>>,
}

impl CopyButton {
    pub fn new(id: impl Into<ElementId>, text: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            label: "Copy".into(),
            size: Size::Small,
            feedback: FeedbackController::new(Duration::from_millis(COPY_FEEDBACK_MS)),
            revert_task: None,
        }
    }

    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = label.into();
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn is_copied(&self) -> bool {
        self.feedback.is_success()
    }

    /// Replace the copied text; any visible acknowledgment is dropped
    pub fn set_text(&mut self, text: impl Into<SharedString>, cx: &mut Context<Self>) {
        self.text = text.into();
        self.feedback.cancel();
        self.revert_task = None;
        cx.notify();
    }

    pub fn copy(&mut self, cx: &mut Context<Self>) {
        let text = self.text.clone();
        let copied = {
            let mut clipboard = AppClipboard(cx);
            self.feedback.copy(&mut clipboard, &text, Instant::now())
        };

        match copied {
            Ok(true) => {
                tracing::debug!(id = ?self.id, len = text.len(), "Copied to clipboard");
                cx.emit(CopyEvent::Copied);
                self.schedule_revert(cx);
                cx.notify();
            }
            // Still showing the previous acknowledgment
            Ok(false) => {}
            Err(e) => {
                tracing::error!(error = %e, id = ?self.id, "Copy to clipboard failed");
                cx.emit(CopyEvent::Failed(e.to_string()));
            }
        }
    }

    fn schedule_revert(&mut self, cx: &mut Context<Self>) {
        let Some(delay) = self.feedback.time_until_revert(Instant::now()) else {
            self.revert_task = None;
            return;
        };

        self.revert_task = Some(cx.spawn(async move |this, cx| {
            cx.background_executor().timer(delay).await;
            let _ = this.update(cx, |this, cx| this.revert(cx));
        }));
    }

    fn revert(&mut self, cx: &mut Context<Self>) {
        if self.feedback.poll(Instant::now()).is_some() {
            cx.notify();
        } else if self.feedback.is_success() {
            // Timer fired early
            self.schedule_revert(cx);
        }
    }
}

impl EventEmitter<CopyEvent> for CopyButton {}

impl Render for CopyButton {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let copied = self.is_copied();

        let label = if copied {
            SharedString::from("Copied")
        } else {
            self.label.clone()
        };

        Button::new(self.id.clone(), label)
            .variant(if copied { ButtonVariant::Glass } else { ButtonVariant::Ghost })
            .tint(if copied { Tint::Emerald } else { Tint::Neutral })
            .size(self.size)
            .icon(if copied { "✓" } else { "⧉" })
            .on_click(cx.listener(|this, _: &ClickEvent, _window, cx| this.copy(cx)))
    }
}
