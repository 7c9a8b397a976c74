//! Service Layer
//!
//! Async plumbing behind the gallery: the tokio bridge and the demo
//! endpoint the waitlist page submits to.

mod runtime;
mod waitlist;

pub use runtime::*;
pub use waitlist::*;
