//! Document access seam for the page features.
//!
//! SYSTEM CONTEXT
//! ==============
//! Features only ever touch the page through [`Dom`], so the same code runs
//! against the live browser document ([`BrowserDom`], `hydrate` builds) and
//! against [`MemoryDom`] in native builds and tests.
//!
//! DESIGN
//! ======
//! All methods take `&self`; implementations are cheap handles over shared
//! state so they can be captured by event handlers and deferred tasks.
//! Missing elements and failed DOM calls degrade to no-ops or empty results.

mod memory;
mod selector;

#[cfg(feature = "hydrate")]
mod browser;

#[cfg(feature = "hydrate")]
pub use browser::BrowserDom;
pub use memory::{MemoryDom, NodeId};

/// What should happen to the event's default action after a handler runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EventVerdict {
    #[default]
    Proceed,
    PreventDefault,
}

/// Event callback registered through [`Dom::listen`].
pub type Handler = Box<dyn Fn() -> EventVerdict>;

pub trait Dom: Clone + 'static {
    type Node: Clone + 'static;

    /// Every matching element in document order. Invalid selectors match nothing.
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;

    /// First matching element in document order.
    fn query(&self, selector: &str) -> Option<Self::Node> {
        self.query_all(selector).into_iter().next()
    }

    /// Matching descendants of `root`.
    fn query_within(&self, root: &Self::Node, selector: &str) -> Vec<Self::Node>;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    fn body(&self) -> Option<Self::Node>;

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;
    fn add_class(&self, node: &Self::Node, class: &str);
    fn remove_class(&self, node: &Self::Node, class: &str);

    /// Flip `class` and return whether it is now present.
    fn toggle_class(&self, node: &Self::Node, class: &str) -> bool;

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str);

    /// Current value of a form control; empty for anything else.
    fn value(&self, node: &Self::Node) -> String;
    fn is_required(&self, node: &Self::Node) -> bool;
    fn is_checked(&self, node: &Self::Node) -> bool;
    fn set_checked(&self, node: &Self::Node, checked: bool);

    /// Inline style property, empty when unset.
    fn style(&self, node: &Self::Node, property: &str) -> String;

    /// Set an inline style property; an empty value clears it.
    fn set_style(&self, node: &Self::Node, property: &str, value: &str);

    /// Create a detached element carrying `class` and `text`.
    fn create_element(&self, tag: &str, class: &str, text: &str) -> Option<Self::Node>;

    /// Insert `node` as the sibling directly following `anchor`.
    fn insert_after(&self, anchor: &Self::Node, node: &Self::Node);

    fn remove(&self, node: &Self::Node);
    fn is_connected(&self, node: &Self::Node) -> bool;
    fn next_element_sibling(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Distance from the element's top edge to the top of the document, in px.
    fn offset_top(&self, node: &Self::Node) -> f64;

    /// Smoothly scroll the viewport so its top sits at `top` px.
    fn scroll_to_smooth(&self, top: f64);

    /// Blocking yes/no prompt.
    fn confirm(&self, message: &str) -> bool;

    /// Live `(prefers-color-scheme: dark)` result, evaluated on each call.
    fn prefers_dark_scheme(&self) -> bool;

    fn listen(&self, node: &Self::Node, event: &str, handler: Handler);
}
