//! Frosted-glass blur effect toggle.
//!
//! Mirrors the theme switch: body class `no-blur-effect`, checkbox
//! `#blur-effect-toggle`, and stored `blurEffect` move together. After a
//! toggle every glass surface is hidden and restored on the next tick so the
//! new backdrop filter paints immediately.

#[cfg(test)]
#[path = "blur_test.rs"]
mod blur_test;

use crate::config::{BLUR_TOGGLE_ID, NO_BLUR_CLASS, glass_selector};
use crate::dom::{Dom, EventVerdict};
use crate::prefs::{BLUR_EFFECT_KEY, blur_enabled_from_stored, blur_stored_value};
use crate::schedule::Scheduler;
use crate::store::PreferenceStore;
use crate::sync::{PreferenceSync, PreferenceUpdate};

#[derive(Clone)]
pub struct BlurToggle<D: Dom, P, Y, S> {
    dom: D,
    store: P,
    sync: Y,
    scheduler: S,
    toggle: Option<D::Node>,
}

impl<D: Dom, P: PreferenceStore, Y: PreferenceSync, S: Scheduler> BlurToggle<D, P, Y, S> {
    pub fn new(dom: D, store: P, sync: Y, scheduler: S) -> Self {
        let toggle = dom.element_by_id(BLUR_TOGGLE_ID);
        Self { dom, store, sync, scheduler, toggle }
    }

    pub fn has_toggle(&self) -> bool {
        self.toggle.is_some()
    }

    pub fn initial_enabled(&self) -> bool {
        blur_enabled_from_stored(self.store.get(BLUR_EFFECT_KEY).as_deref())
    }

    pub fn apply(&self, enabled: bool) {
        if let Some(body) = self.dom.body() {
            if enabled {
                self.dom.remove_class(&body, NO_BLUR_CLASS);
            } else {
                self.dom.add_class(&body, NO_BLUR_CLASS);
            }
        }
        if let Some(toggle) = &self.toggle {
            self.dom.set_checked(toggle, enabled);
        }
    }

    pub fn init(&self) -> bool {
        let enabled = self.initial_enabled();
        self.apply(enabled);
        enabled
    }

    /// Change handler for the toggle checkbox.
    pub fn on_toggle(&self) -> bool {
        let enabled = self.toggle.as_ref().is_some_and(|t| self.dom.is_checked(t));
        self.apply(enabled);
        self.store.set(BLUR_EFFECT_KEY, blur_stored_value(enabled));
        self.force_reflow();
        self.sync.push(PreferenceUpdate::BlurEffect { blur_effect: enabled });
        enabled
    }

    /// Hide every glass surface now and restore its inline `display` next tick.
    pub fn force_reflow(&self) -> usize {
        let surfaces = self.dom.query_all(&glass_selector());
        for surface in &surfaces {
            let original = self.dom.style(surface, "display");
            self.dom.set_style(surface, "display", "none");
            let dom = self.dom.clone();
            let surface = surface.clone();
            self.scheduler
                .defer(0, Box::new(move || dom.set_style(&surface, "display", &original)));
        }
        surfaces.len()
    }
}

/// Apply the stored blur preference and wire the toggle, if present.
pub fn install<D: Dom, P: PreferenceStore, Y: PreferenceSync, S: Scheduler>(
    blur: &BlurToggle<D, P, Y, S>,
) -> bool {
    let enabled = blur.init();
    if let Some(toggle) = &blur.toggle {
        let handler_blur = blur.clone();
        blur.dom.listen(
            toggle,
            "change",
            Box::new(move || {
                handler_blur.on_toggle();
                EventVerdict::Proceed
            }),
        );
    } else {
        log::debug!("no #{BLUR_TOGGLE_ID} on page");
    }
    enabled
}
