//! Smooth scrolling for in-page fragment links.
//!
//! The default jump is always suppressed, including for a bare `#` and for
//! fragments with no matching element; in those cases nothing happens.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::config::{ANCHOR_SELECTOR, HEADER_OFFSET_PX};
use crate::dom::{Dom, EventVerdict};

pub fn install<D: Dom>(dom: &D) -> usize {
    let anchors = dom.query_all(ANCHOR_SELECTOR);
    for anchor in &anchors {
        let dom_for_click = dom.clone();
        let target = anchor.clone();
        dom.listen(
            anchor,
            "click",
            Box::new(move || match dom_for_click.attribute(&target, "href") {
                Some(href) => scroll_to_fragment(&dom_for_click, &href),
                None => EventVerdict::Proceed,
            }),
        );
    }
    anchors.len()
}

/// Scroll to the element `href` names, leaving room for the fixed header.
pub fn scroll_to_fragment<D: Dom>(dom: &D, href: &str) -> EventVerdict {
    if href == "#" {
        return EventVerdict::PreventDefault;
    }
    match dom.query(href) {
        Some(target) => dom.scroll_to_smooth(dom.offset_top(&target) - HEADER_OFFSET_PX),
        None => log::debug!("no element matches {href}; ignoring click"),
    }
    EventVerdict::PreventDefault
}
