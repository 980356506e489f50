//! Test doubles and page fixtures shared by module tests.

use std::cell::RefCell;
use std::rc::Rc;

use crate::dom::{Dom, MemoryDom, NodeId};
use crate::schedule::Scheduler;
use crate::sync::{PreferenceSync, PreferenceUpdate};

// =============================================================
// ManualScheduler
// =============================================================

struct Pending {
    due_ms: u64,
    seq: u64,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct Clock {
    now_ms: u64,
    next_seq: u64,
    pending: Vec<Pending>,
}

/// Scheduler driven by an explicit clock.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<Clock>>,
}

impl ManualScheduler {
    pub fn now_ms(&self) -> u64 {
        self.clock.borrow().now_ms
    }

    pub fn pending(&self) -> usize {
        self.clock.borrow().pending.len()
    }

    /// Move the clock forward, running due tasks in (due time, scheduling) order.
    /// Tasks scheduled by running tasks also run if they fall due in the window.
    pub fn advance(&self, ms: u64) {
        let target = self.now_ms() + ms;
        loop {
            let next = {
                let mut clock = self.clock.borrow_mut();
                let index = clock
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.due_ms <= target)
                    .min_by_key(|(_, p)| (p.due_ms, p.seq))
                    .map(|(i, _)| i);
                index.map(|i| {
                    let pending = clock.pending.remove(i);
                    clock.now_ms = pending.due_ms;
                    pending.task
                })
            };
            match next {
                Some(task) => task(),
                None => break,
            }
        }
        self.clock.borrow_mut().now_ms = target;
    }
}

impl Scheduler for ManualScheduler {
    fn defer(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let mut clock = self.clock.borrow_mut();
        let due_ms = clock.now_ms + u64::from(delay_ms);
        let seq = clock.next_seq;
        clock.next_seq += 1;
        clock.pending.push(Pending { due_ms, seq, task });
    }
}

// =============================================================
// RecordingSync
// =============================================================

/// Sync sink that remembers every pushed update.
#[derive(Clone, Default)]
pub struct RecordingSync {
    updates: Rc<RefCell<Vec<PreferenceUpdate>>>,
}

impl RecordingSync {
    pub fn updates(&self) -> Vec<PreferenceUpdate> {
        self.updates.borrow().clone()
    }
}

impl PreferenceSync for RecordingSync {
    fn push(&self, update: PreferenceUpdate) {
        self.updates.borrow_mut().push(update);
    }
}

// =============================================================
// Page fixture
// =============================================================

/// Handles to the elements of [`page`].
pub struct Page {
    pub dom: MemoryDom,
    pub header: NodeId,
    pub menu_toggle: NodeId,
    pub nav_list: NodeId,
    pub flashes: Vec<NodeId>,
    pub post_form: NodeId,
    pub title: NodeId,
    pub content: NodeId,
    pub tags: NodeId,
    pub delete_form: NodeId,
    pub delete_button: NodeId,
    pub comments_link: NodeId,
    pub bare_link: NodeId,
    pub missing_link: NodeId,
    pub comments: NodeId,
    pub theme_toggle: NodeId,
    pub blur_toggle: NodeId,
    pub mode_system: NodeId,
    pub mode_dark: NodeId,
    pub mode_light: NodeId,
    pub glass: NodeId,
    pub post_card: NodeId,
}

/// A post page with every hook the enhancements look for.
pub fn page() -> Page {
    let dom = MemoryDom::new();
    let body = dom.body_id();

    let header = dom.append(body, "header", &[("class", "header")]);
    let nav = dom.append(header, "nav", &[("class", "nav")]);
    let menu_toggle = dom.append(nav, "button", &[("class", "menu-toggle")]);
    let nav_list = dom.append(nav, "ul", &[]);
    dom.append(nav_list, "li", &[]);

    let flashes = vec![
        dom.append(body, "div", &[("class", "flash-message success")]),
        dom.append(body, "div", &[("class", "flash-message error")]),
    ];

    let glass = dom.append(body, "main", &[("class", "glass-container")]);
    dom.set_style(&glass, "display", "flex");

    let post_form = dom.append(glass, "form", &[("method", "post")]);
    let title = dom.append(post_form, "input", &[("class", "form-input"), ("name", "title"), ("required", "")]);
    let content = dom.append(post_form, "textarea", &[("class", "form-input"), ("name", "content"), ("required", "")]);
    let tags = dom.append(post_form, "input", &[("class", "form-input"), ("name", "tags")]);
    dom.append(post_form, "button", &[("type", "submit")]);

    let post_card = dom.append(glass, "article", &[("class", "post-card")]);
    let delete_form = dom.append(post_card, "form", &[("method", "post")]);
    let delete_button = dom.append(delete_form, "button", &[("class", "btn btn-danger"), ("type", "submit")]);
    let comments_link = dom.append(post_card, "a", &[("href", "#comments")]);
    let bare_link = dom.append(post_card, "a", &[("href", "#")]);
    let missing_link = dom.append(post_card, "a", &[("href", "#missing")]);

    let comments = dom.append(glass, "section", &[("id", "comments")]);
    dom.set_offset_top(comments, 640.0);

    let settings = dom.append(body, "aside", &[]);
    let theme_toggle = dom.append(settings, "input", &[("type", "checkbox"), ("id", "theme-toggle")]);
    let blur_toggle = dom.append(settings, "input", &[("type", "checkbox"), ("id", "blur-effect-toggle")]);
    let radio = |value: &str| {
        dom.append(settings, "input", &[("type", "radio"), ("name", "theme_preference"), ("value", value)])
    };
    let mode_system = radio("system");
    let mode_dark = radio("dark");
    let mode_light = radio("light");

    Page {
        dom,
        header,
        menu_toggle,
        nav_list,
        flashes,
        post_form,
        title,
        content,
        tags,
        delete_form,
        delete_button,
        comments_link,
        bare_link,
        missing_link,
        comments,
        theme_toggle,
        blur_toggle,
        mode_system,
        mode_dark,
        mode_light,
        glass,
        post_card,
    }
}
