//! Mono UI Gallery Library
//!
//! Liquid glass components for GPUI and the catalog application that shows
//! them. The reusable behavior lives in [`controls`]: dual-mode
//! (controlled/uncontrolled) toggles and selectors, and the self-reverting
//! feedback controller. [`components`] wraps them as GPUI elements.

pub mod app;
pub mod assets;
pub mod components;
pub mod constants;
pub mod controls;
pub mod error;
pub mod helpers;
pub mod services;
pub mod states;
pub mod theme;
pub mod views;
