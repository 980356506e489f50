//! Responsive navigation toggle.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::config::{MENU_ACTIVE_CLASS, MENU_TOGGLE_SELECTOR, NAV_LIST_SELECTOR};
use crate::dom::{Dom, EventVerdict};

/// Flip the nav list's `active` class on each toggle click.
///
/// Returns `false` when the page has no toggle.
pub fn install<D: Dom>(dom: &D) -> bool {
    let Some(toggle) = dom.query(MENU_TOGGLE_SELECTOR) else {
        log::debug!("no menu toggle on page");
        return false;
    };
    let nav = dom.query(NAV_LIST_SELECTOR);
    let dom_for_click = dom.clone();
    dom.listen(
        &toggle,
        "click",
        Box::new(move || {
            if let Some(nav) = &nav {
                dom_for_click.toggle_class(nav, MENU_ACTIVE_CLASS);
            }
            EventVerdict::Proceed
        }),
    );
    true
}
