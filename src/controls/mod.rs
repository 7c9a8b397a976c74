//! Controls - Toolkit-Independent Interaction Logic
//!
//! The state behind the interactive components: dual-mode (controlled or
//! uncontrolled) values and ephemeral feedback cycles. Nothing here touches
//! GPUI, so every transition is unit-testable.

pub mod feedback;
pub mod mode;
pub mod selector;
pub mod theme;
pub mod toggle;
pub mod variant;

pub use feedback::{Clipboard, CycleId, FeedbackController, FeedbackPhase, Transition, Trigger};
pub use mode::{DualMode, Mode};
pub use selector::{Selector, SelectorOption};
pub use theme::{Appearance, ThemeSwitch};
pub use toggle::{Role, SwitchSemantics, Toggle};
pub use variant::{Intensity, Size, SizeMetrics, Tint};
