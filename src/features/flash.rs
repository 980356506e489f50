//! Auto-dismissal of flash messages.
//!
//! Messages stay for [`FLASH_DISMISS_DELAY_MS`] after page-ready, fade over
//! [`FLASH_FADE_MS`], and are then removed from the document.

#[cfg(test)]
#[path = "flash_test.rs"]
mod flash_test;

use crate::config::{FLASH_DISMISS_DELAY_MS, FLASH_FADE_MS, FLASH_FADE_TRANSITION, FLASH_SELECTOR};
use crate::dom::Dom;
use crate::schedule::Scheduler;

/// Schedule the dismissal of every flash message present when it fires.
pub fn install<D: Dom, S: Scheduler>(dom: &D, scheduler: &S) {
    let dom = dom.clone();
    let timers = scheduler.clone();
    scheduler.defer(
        FLASH_DISMISS_DELAY_MS,
        Box::new(move || {
            let count = dismiss_all(&dom, &timers);
            log::debug!("dismissing {count} flash message(s)");
        }),
    );
}

/// Start fading every flash message and schedule its removal.
pub fn dismiss_all<D: Dom, S: Scheduler>(dom: &D, scheduler: &S) -> usize {
    let messages = dom.query_all(FLASH_SELECTOR);
    for message in &messages {
        dom.set_style(message, "transition", FLASH_FADE_TRANSITION);
        dom.set_style(message, "opacity", "0");
        let dom = dom.clone();
        let message = message.clone();
        scheduler.defer(FLASH_FADE_MS, Box::new(move || dom.remove(&message)));
    }
    messages.len()
}
