//! State Management Layer
//!
//! Global gallery state using GPUI's Entity system.
//!
//! ```text
//! UI Action → State Method → notify → UI Refresh
//!                  └──────→ background save
//! ```

mod app;

pub use app::*;
