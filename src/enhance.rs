//! One-shot installation of every page feature.
//!
//! SYSTEM CONTEXT
//! ==============
//! Called once the document is ready. Features are independent; the only
//! shared state is the document and the preference store, and theme mode
//! selection may override whatever the theme toggle last set.

#[cfg(test)]
#[path = "enhance_test.rs"]
mod enhance_test;

use crate::config::PageContext;
use crate::dom::Dom;
use crate::features::{blur, confirm, flash, menu, scroll, theme, theme_mode, validation};
use crate::prefs::Theme;
use crate::schedule::Scheduler;
use crate::store::PreferenceStore;
use crate::sync::{GatedSync, PreferenceSync};

/// What [`enhance_page`] found and wired.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InstallReport {
    pub danger_buttons: usize,
    pub anchors: usize,
    pub menu: bool,
    pub theme: Theme,
    pub theme_toggle: bool,
    pub blur_enabled: bool,
    pub blur_toggle: bool,
    pub theme_modes: usize,
}

/// Install every feature against `dom`.
///
/// Remote sync only reaches `sync` when `context.authenticated` is set.
pub fn enhance_page<D, P, Y, S>(dom: &D, store: &P, sync: &Y, scheduler: &S, context: PageContext) -> InstallReport
where
    D: Dom,
    P: PreferenceStore,
    Y: PreferenceSync,
    S: Scheduler,
{
    let sync = GatedSync::new(sync.clone(), context.authenticated);

    flash::install(dom, scheduler);
    let danger_buttons = confirm::install(dom);
    validation::install(dom);
    let anchors = scroll::install(dom);
    let menu = menu::install(dom);

    let switch = theme::ThemeSwitch::new(dom.clone(), store.clone(), sync.clone());
    let theme = theme::install(&switch);

    let blur_toggle = blur::BlurToggle::new(dom.clone(), store.clone(), sync, scheduler.clone());
    let blur_enabled = blur::install(&blur_toggle);

    let theme_modes = theme_mode::install(&switch);

    let report = InstallReport {
        danger_buttons,
        anchors,
        menu,
        theme,
        theme_toggle: switch.has_toggle(),
        blur_enabled,
        blur_toggle: blur_toggle.has_toggle(),
        theme_modes,
    };
    log::debug!("page enhanced: {report:?}");
    report
}
