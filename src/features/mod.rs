//! Independent page behaviors, each installed once when the page is ready.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every module exposes an `install` function that looks up its hooks,
//! registers handlers through [`crate::dom::Dom::listen`], and quietly does
//! nothing when its hooks are absent. Handler bodies are plain functions so
//! tests can call them directly.

pub mod blur;
pub mod confirm;
pub mod flash;
pub mod menu;
pub mod scroll;
pub mod theme;
pub mod theme_mode;
pub mod validation;
