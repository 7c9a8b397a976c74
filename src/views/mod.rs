//! View Components
//!
//! The gallery window.
//!
//! ## Layout Structure
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 TitleBar (theme menu + switch)              │
//! ├──────────┬──────────────────────────────────────────────────┤
//! │          │  Header                                          │
//! │ Side     │  PreviewStage                                    │
//! │ bar      │  Installation                      [Copy]        │
//! │ (220px)  │  Usage                             [Copy]        │
//! │          │                                                  │
//! └──────────┴──────────────────────────────────────────────────┘
//! ```

mod content;
mod preview;
mod sidebar;
mod title_bar;

pub use content::*;
pub use preview::*;
pub use sidebar::*;
pub use title_bar::*;
