//! System/dark/light theme mode radio group.
//!
//! Selecting a mode stores it, then recomputes the effective theme through
//! [`ThemeSwitch::set_theme`]. `system` reads the OS color scheme at
//! selection time only; later OS changes are not followed.

#[cfg(test)]
#[path = "theme_mode_test.rs"]
mod theme_mode_test;

use super::theme::ThemeSwitch;
use crate::config::THEME_MODE_SELECTOR;
use crate::dom::{Dom, EventVerdict};
use crate::prefs::{THEME_MODE_KEY, Theme, ThemeMode};
use crate::store::PreferenceStore;
use crate::sync::{PreferenceSync, PreferenceUpdate};

/// Persist `raw` as the theme mode and apply the theme it implies.
pub fn select_mode<D: Dom, P: PreferenceStore, Y: PreferenceSync>(switch: &ThemeSwitch<D, P, Y>, raw: &str) -> Theme {
    let mode = ThemeMode::parse(raw);
    switch.store().set(THEME_MODE_KEY, mode.as_str());
    let theme = mode.resolve(switch.dom().prefers_dark_scheme());
    switch.set_theme(theme);
    switch.sync().push(PreferenceUpdate::ThemePreference { theme_preference: mode });
    theme
}

/// Wire every `theme_preference` radio. Returns how many were found.
pub fn install<D: Dom, P: PreferenceStore, Y: PreferenceSync>(switch: &ThemeSwitch<D, P, Y>) -> usize {
    let dom = switch.dom();
    let options = dom.query_all(THEME_MODE_SELECTOR);
    for option in &options {
        let handler_switch = switch.clone();
        let target = option.clone();
        dom.listen(
            option,
            "change",
            Box::new(move || {
                let raw = handler_switch.dom().value(&target);
                select_mode(&handler_switch, &raw);
                EventVerdict::Proceed
            }),
        );
    }
    options.len()
}
