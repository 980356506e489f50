//! Light/dark theme switch.
//!
//! The body's `dark-theme` class, the `#theme-toggle` checkbox, and the stored
//! `theme` value are written together by [`ThemeSwitch::set_theme`], which
//! every write path goes through. On load the stored value wins; without one
//! the OS color scheme decides and nothing is written.
//!
//! Remote sync is best-effort and never rolls back the local change.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::config::{DARK_THEME_CLASS, THEME_TOGGLE_ID};
use crate::dom::{Dom, EventVerdict};
use crate::prefs::{THEME_KEY, Theme};
use crate::store::PreferenceStore;
use crate::sync::{PreferenceSync, PreferenceUpdate};

#[derive(Clone)]
pub struct ThemeSwitch<D: Dom, P, Y> {
    dom: D,
    store: P,
    sync: Y,
    toggle: Option<D::Node>,
}

impl<D: Dom, P: PreferenceStore, Y: PreferenceSync> ThemeSwitch<D, P, Y> {
    pub fn new(dom: D, store: P, sync: Y) -> Self {
        let toggle = dom.element_by_id(THEME_TOGGLE_ID);
        Self { dom, store, sync, toggle }
    }

    pub fn has_toggle(&self) -> bool {
        self.toggle.is_some()
    }

    /// Theme implied by storage, falling back to the OS color scheme.
    pub fn initial_theme(&self) -> Theme {
        Theme::from_stored(self.store.get(THEME_KEY).as_deref(), || self.dom.prefers_dark_scheme())
    }

    /// Reflect `theme` on the body class and the toggle without persisting it.
    pub fn apply(&self, theme: Theme) {
        if let Some(body) = self.dom.body() {
            if theme.is_dark() {
                self.dom.add_class(&body, DARK_THEME_CLASS);
            } else {
                self.dom.remove_class(&body, DARK_THEME_CLASS);
            }
        }
        if let Some(toggle) = &self.toggle {
            self.dom.set_checked(toggle, theme.is_dark());
        }
    }

    /// Apply the initial theme on page load.
    pub fn init(&self) -> Theme {
        let theme = self.initial_theme();
        self.apply(theme);
        theme
    }

    /// Apply and persist `theme` locally.
    pub fn set_theme(&self, theme: Theme) {
        self.apply(theme);
        self.store.set(THEME_KEY, theme.as_str());
    }

    /// Change handler for the toggle checkbox.
    pub fn on_toggle(&self) -> Theme {
        let dark = self.toggle.as_ref().is_some_and(|t| self.dom.is_checked(t));
        let theme = Theme::from_dark(dark);
        self.set_theme(theme);
        self.sync.push(PreferenceUpdate::Theme { theme });
        theme
    }

    pub(crate) fn dom(&self) -> &D {
        &self.dom
    }

    pub(crate) fn store(&self) -> &P {
        &self.store
    }

    pub(crate) fn sync(&self) -> &Y {
        &self.sync
    }
}

/// Apply the initial theme and wire the toggle, if present.
pub fn install<D: Dom, P: PreferenceStore, Y: PreferenceSync>(switch: &ThemeSwitch<D, P, Y>) -> Theme {
    let theme = switch.init();
    if let Some(toggle) = &switch.toggle {
        let handler_switch = switch.clone();
        switch.dom.listen(
            toggle,
            "change",
            Box::new(move || {
                handler_switch.on_toggle();
                EventVerdict::Proceed
            }),
        );
    } else {
        log::debug!("no #{THEME_TOGGLE_ID} on page");
    }
    theme
}
