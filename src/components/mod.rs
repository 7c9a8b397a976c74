//! Components - Reusable UI Components
//!
//! GPUI renderers over the toolkit-independent `controls` state. They own no
//! cross-cutting state and do no I/O beyond the clipboard and injected
//! callbacks.

pub mod feedback;
pub mod primitives;
