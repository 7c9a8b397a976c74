//! Application Layer
//!
//! Contains app initialization, window management, navigation and the
//! workspace shell.

pub mod application;
pub mod navigation;
pub mod workspace;
