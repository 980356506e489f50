//! # page-enhance
//!
//! WASM page enhancements for server-rendered pages: flash-message dismissal,
//! destructive-action confirmation, inline form validation, smooth anchor
//! scrolling, the responsive menu, and light/dark theme plus blur-effect
//! preferences persisted to `localStorage` and synced to the server.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every feature is written against the [`dom::Dom`] seam plus a preference
//! store, a scheduler, and a best-effort sync sink. The `hydrate` feature
//! supplies browser implementations and the `#[wasm_bindgen(start)]` entry
//! point in [`boot`]; native builds run the same features against
//! [`dom::MemoryDom`].

pub mod config;
pub mod dom;
pub mod enhance;
pub mod features;
pub mod prefs;
pub mod schedule;
pub mod store;
pub mod sync;

#[cfg(feature = "hydrate")]
pub mod boot;

#[cfg(test)]
mod testing;
