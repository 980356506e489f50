//! Confirmation prompt before destructive actions.

#[cfg(test)]
#[path = "confirm_test.rs"]
mod confirm_test;

use crate::config::{CONFIRM_DELETE_MESSAGE, DANGER_BUTTON_SELECTOR};
use crate::dom::{Dom, EventVerdict};

/// Guard every danger-styled button. Returns how many were wired.
pub fn install<D: Dom>(dom: &D) -> usize {
    let buttons = dom.query_all(DANGER_BUTTON_SELECTOR);
    for button in &buttons {
        let dom_for_click = dom.clone();
        dom.listen(button, "click", Box::new(move || confirm_destructive(&dom_for_click)));
    }
    buttons.len()
}

/// Ask the user; declining cancels the click's default action.
pub fn confirm_destructive<D: Dom>(dom: &D) -> EventVerdict {
    if dom.confirm(CONFIRM_DELETE_MESSAGE) {
        EventVerdict::Proceed
    } else {
        EventVerdict::PreventDefault
    }
}
