//! Feedback Components
//!
//! Controls that acknowledge an action for a short while and then revert.

pub mod copy_button;
pub mod waitlist_form;

pub use copy_button::{CopyButton, CopyEvent};
pub use waitlist_form::{SubmitFn, WaitlistEvent, WaitlistForm};
