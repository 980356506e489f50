//! Arena-backed document for native builds and tests.
//!
//! Besides implementing [`Dom`], it exposes builder helpers for assembling a
//! page, a settable OS color scheme, a queue of answers for `confirm`, a log
//! of prompts and scroll targets, and [`MemoryDom::dispatch`] to fire events
//! at registered handlers.
//!
//! Events do not bubble: dispatch only reaches handlers registered on the
//! target node itself.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::rc::Rc;

use super::selector::{ElementView, Selector};
use super::{Dom, EventVerdict, Handler};

/// Handle to one element in a [`MemoryDom`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Default)]
struct Element {
    tag: String,
    attributes: BTreeMap<String, String>,
    classes: Vec<String>,
    style: BTreeMap<String, String>,
    text: String,
    value: String,
    checked: bool,
    offset_top: f64,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl ElementView for Element {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

type SharedHandler = Rc<dyn Fn() -> EventVerdict>;

struct Document {
    nodes: Vec<Element>,
    root: NodeId,
    body: NodeId,
    listeners: HashMap<(NodeId, String), Vec<SharedHandler>>,
    confirm_answers: VecDeque<bool>,
    prompts: Vec<String>,
    scrolls: Vec<f64>,
    prefers_dark: bool,
}

impl Document {
    fn node(&self, id: NodeId) -> &Element {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Element {
        &mut self.nodes[id.0]
    }

    fn push(&mut self, tag: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Element { tag: tag.to_ascii_lowercase(), ..Element::default() });
        id
    }

    fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.node_mut(id).parent.take() {
            self.node_mut(parent).children.retain(|c| *c != id);
        }
    }

    fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut cursor = self.node(id).parent;
        while let Some(parent) = cursor {
            out.push(parent);
            cursor = self.node(parent).parent;
        }
        out
    }

    fn is_connected(&self, id: NodeId) -> bool {
        id == self.root || self.ancestors(id).last() == Some(&self.root)
    }

    /// Descendants of `root` in document order, excluding `root`.
    fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.node(root).children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.node(id).children.iter().rev().copied());
        }
        out
    }

    fn select(&self, scope: NodeId, selector: &str) -> Vec<NodeId> {
        let Some(selector) = Selector::parse(selector) else {
            return Vec::new();
        };
        self.descendants(scope)
            .into_iter()
            .filter(|id| {
                let ancestors: Vec<&Element> = self.ancestors(*id).into_iter().map(|a| self.node(a)).collect();
                selector.matches(self.node(*id), &ancestors)
            })
            .collect()
    }

    fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        let node = self.node_mut(id);
        match name {
            "class" => node.classes = value.split_whitespace().map(str::to_owned).collect(),
            "value" => node.value = value.to_owned(),
            "checked" => node.checked = true,
            _ => {}
        }
        node.attributes.insert(name.to_owned(), value.to_owned());
    }

    fn sync_class_attribute(&mut self, id: NodeId) {
        let node = self.node_mut(id);
        let joined = node.classes.join(" ");
        node.attributes.insert("class".to_owned(), joined);
    }
}

/// In-memory document; clones share the same tree.
#[derive(Clone)]
pub struct MemoryDom {
    doc: Rc<RefCell<Document>>,
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDom {
    /// Empty `<html><body></body></html>` document.
    pub fn new() -> Self {
        let mut doc = Document {
            nodes: Vec::new(),
            root: NodeId(0),
            body: NodeId(0),
            listeners: HashMap::new(),
            confirm_answers: VecDeque::new(),
            prompts: Vec::new(),
            scrolls: Vec::new(),
            prefers_dark: false,
        };
        let root = doc.push("html");
        let body = doc.push("body");
        doc.node_mut(body).parent = Some(root);
        doc.node_mut(root).children.push(body);
        doc.root = root;
        doc.body = body;
        Self { doc: Rc::new(RefCell::new(doc)) }
    }

    pub fn body_id(&self) -> NodeId {
        self.doc.borrow().body
    }

    /// Append a new element under `parent`. A `class` attribute populates the
    /// class list; `value` and `checked` seed the control state.
    pub fn append(&self, parent: NodeId, tag: &str, attributes: &[(&str, &str)]) -> NodeId {
        let mut doc = self.doc.borrow_mut();
        let id = doc.push(tag);
        for (name, value) in attributes {
            doc.set_attribute(id, name, value);
        }
        doc.node_mut(id).parent = Some(parent);
        doc.node_mut(parent).children.push(id);
        id
    }

    /// Set a control's value as if the user typed it (no event is fired).
    pub fn set_value(&self, node: NodeId, value: &str) {
        value.clone_into(&mut self.doc.borrow_mut().node_mut(node).value);
    }

    pub fn set_offset_top(&self, node: NodeId, top: f64) {
        self.doc.borrow_mut().node_mut(node).offset_top = top;
    }

    pub fn set_prefers_dark(&self, dark: bool) {
        self.doc.borrow_mut().prefers_dark = dark;
    }

    /// Queue the answer for the next `confirm` prompt. Unanswered prompts decline.
    pub fn answer_confirm(&self, accept: bool) {
        self.doc.borrow_mut().confirm_answers.push_back(accept);
    }

    pub fn prompts(&self) -> Vec<String> {
        self.doc.borrow().prompts.clone()
    }

    pub fn scrolls(&self) -> Vec<f64> {
        self.doc.borrow().scrolls.clone()
    }

    pub fn text(&self, node: NodeId) -> String {
        self.doc.borrow().node(node).text.clone()
    }

    pub fn tag(&self, node: NodeId) -> String {
        self.doc.borrow().node(node).tag.clone()
    }

    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.doc.borrow().node(node).children.clone()
    }

    /// Number of handlers registered for `event` on `node`.
    pub fn listener_count(&self, node: NodeId, event: &str) -> usize {
        self.doc
            .borrow()
            .listeners
            .get(&(node, event.to_owned()))
            .map_or(0, Vec::len)
    }

    /// Fire `event` at `node`'s handlers in registration order.
    ///
    /// Returns [`EventVerdict::PreventDefault`] if any handler prevented the
    /// default action.
    pub fn dispatch(&self, node: NodeId, event: &str) -> EventVerdict {
        // Clone handlers out so they can borrow the document while running.
        let handlers = self
            .doc
            .borrow()
            .listeners
            .get(&(node, event.to_owned()))
            .cloned()
            .unwrap_or_default();
        let mut verdict = EventVerdict::Proceed;
        for handler in handlers {
            if handler() == EventVerdict::PreventDefault {
                verdict = EventVerdict::PreventDefault;
            }
        }
        verdict
    }
}

impl Dom for MemoryDom {
    type Node = NodeId;

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        let doc = self.doc.borrow();
        doc.select(doc.root, selector)
    }

    fn query_within(&self, root: &NodeId, selector: &str) -> Vec<NodeId> {
        self.doc.borrow().select(*root, selector)
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        let doc = self.doc.borrow();
        doc.descendants(doc.root)
            .into_iter()
            .find(|n| doc.node(*n).attribute("id") == Some(id))
    }

    fn body(&self) -> Option<NodeId> {
        Some(self.doc.borrow().body)
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.doc.borrow().node(*node).has_class(class)
    }

    fn add_class(&self, node: &NodeId, class: &str) {
        let mut doc = self.doc.borrow_mut();
        if !doc.node(*node).has_class(class) {
            doc.node_mut(*node).classes.push(class.to_owned());
            doc.sync_class_attribute(*node);
        }
    }

    fn remove_class(&self, node: &NodeId, class: &str) {
        let mut doc = self.doc.borrow_mut();
        doc.node_mut(*node).classes.retain(|c| c != class);
        doc.sync_class_attribute(*node);
    }

    fn toggle_class(&self, node: &NodeId, class: &str) -> bool {
        if self.has_class(node, class) {
            self.remove_class(node, class);
            false
        } else {
            self.add_class(node, class);
            true
        }
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.doc.borrow().node(*node).attribute(name).map(str::to_owned)
    }

    fn set_attribute(&self, node: &NodeId, name: &str, value: &str) {
        self.doc.borrow_mut().set_attribute(*node, name, value);
    }

    fn value(&self, node: &NodeId) -> String {
        self.doc.borrow().node(*node).value.clone()
    }

    fn is_required(&self, node: &NodeId) -> bool {
        self.doc.borrow().node(*node).attribute("required").is_some()
    }

    fn is_checked(&self, node: &NodeId) -> bool {
        self.doc.borrow().node(*node).checked
    }

    fn set_checked(&self, node: &NodeId, checked: bool) {
        self.doc.borrow_mut().node_mut(*node).checked = checked;
    }

    fn style(&self, node: &NodeId, property: &str) -> String {
        self.doc.borrow().node(*node).style.get(property).cloned().unwrap_or_default()
    }

    fn set_style(&self, node: &NodeId, property: &str, value: &str) {
        let mut doc = self.doc.borrow_mut();
        let style = &mut doc.node_mut(*node).style;
        if value.is_empty() {
            style.remove(property);
        } else {
            style.insert(property.to_owned(), value.to_owned());
        }
    }

    fn create_element(&self, tag: &str, class: &str, text: &str) -> Option<NodeId> {
        let mut doc = self.doc.borrow_mut();
        let id = doc.push(tag);
        doc.set_attribute(id, "class", class);
        text.clone_into(&mut doc.node_mut(id).text);
        Some(id)
    }

    fn insert_after(&self, anchor: &NodeId, node: &NodeId) {
        let mut doc = self.doc.borrow_mut();
        let Some(parent) = doc.node(*anchor).parent else {
            return;
        };
        doc.detach(*node);
        let siblings = &mut doc.node_mut(parent).children;
        let index = siblings.iter().position(|c| c == anchor).map_or(siblings.len(), |i| i + 1);
        siblings.insert(index, *node);
        doc.node_mut(*node).parent = Some(parent);
    }

    fn remove(&self, node: &NodeId) {
        self.doc.borrow_mut().detach(*node);
    }

    fn is_connected(&self, node: &NodeId) -> bool {
        self.doc.borrow().is_connected(*node)
    }

    fn next_element_sibling(&self, node: &NodeId) -> Option<NodeId> {
        let doc = self.doc.borrow();
        let parent = doc.node(*node).parent?;
        let siblings = &doc.node(parent).children;
        let index = siblings.iter().position(|c| c == node)?;
        siblings.get(index + 1).copied()
    }

    fn offset_top(&self, node: &NodeId) -> f64 {
        self.doc.borrow().node(*node).offset_top
    }

    fn scroll_to_smooth(&self, top: f64) {
        self.doc.borrow_mut().scrolls.push(top);
    }

    fn confirm(&self, message: &str) -> bool {
        let mut doc = self.doc.borrow_mut();
        doc.prompts.push(message.to_owned());
        doc.confirm_answers.pop_front().unwrap_or(false)
    }

    fn prefers_dark_scheme(&self) -> bool {
        self.doc.borrow().prefers_dark
    }

    fn listen(&self, node: &NodeId, event: &str, handler: Handler) {
        self.doc
            .borrow_mut()
            .listeners
            .entry((*node, event.to_owned()))
            .or_default()
            .push(Rc::from(handler));
    }
}
