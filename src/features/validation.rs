//! Required-field validation with inline error messages.
//!
//! DESIGN
//! ======
//! Each field gets a stable key in `data-field-key`, and the validator owns a
//! `field key -> error element` map. At most one error element per field can
//! exist no matter how often the form is submitted, and error cleanup does
//! not depend on what happens to sit next to the field.
//!
//! Editing an invalid field clears its error immediately without
//! re-validating; the next submit decides again.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::config::{
    FEEDBACK_CLASS, FIELD_KEY_ATTR, FORM_FIELD_SELECTOR, FORM_SELECTOR, INVALID_CLASS, REQUIRED_FIELD_MESSAGE,
};
use crate::dom::{Dom, EventVerdict};

#[derive(Clone)]
pub struct FormValidator<D: Dom> {
    dom: D,
    errors: Rc<RefCell<HashMap<String, D::Node>>>,
}

impl<D: Dom> FormValidator<D> {
    pub fn new(dom: D) -> Self {
        Self { dom, errors: Rc::new(RefCell::new(HashMap::new())) }
    }

    /// Stable key for `field`, assigning a fresh one on first use.
    pub fn field_key(&self, field: &D::Node) -> String {
        if let Some(key) = self.dom.attribute(field, FIELD_KEY_ATTR).filter(|k| !k.is_empty()) {
            return key;
        }
        let key = uuid::Uuid::new_v4().to_string();
        self.dom.set_attribute(field, FIELD_KEY_ATTR, &key);
        key
    }

    /// Take ownership of a server-rendered error element directly after `field`.
    pub fn adopt_existing_error(&self, field: &D::Node) {
        let Some(sibling) = self.dom.next_element_sibling(field) else {
            return;
        };
        if self.dom.has_class(&sibling, FEEDBACK_CLASS) {
            let key = self.field_key(field);
            self.errors.borrow_mut().entry(key).or_insert(sibling);
        }
    }

    /// Check every required field in `form`; block submission if any is blank.
    pub fn validate_form(&self, form: &D::Node) -> EventVerdict {
        let mut valid = true;
        for field in self.dom.query_within(form, FORM_FIELD_SELECTOR) {
            if self.dom.is_required(&field) && self.dom.value(&field).trim().is_empty() {
                valid = false;
                self.mark_invalid(&field);
            } else {
                self.clear(&field);
            }
        }
        if valid { EventVerdict::Proceed } else { EventVerdict::PreventDefault }
    }

    pub fn mark_invalid(&self, field: &D::Node) {
        self.dom.add_class(field, INVALID_CLASS);
        let key = self.field_key(field);
        let existing = self.errors.borrow().get(&key).cloned();
        if existing.is_some_and(|el| self.dom.is_connected(&el)) {
            return;
        }
        let Some(error) = self.dom.create_element("div", FEEDBACK_CLASS, REQUIRED_FIELD_MESSAGE) else {
            return;
        };
        self.dom.insert_after(field, &error);
        self.errors.borrow_mut().insert(key, error);
    }

    /// Drop the invalid state and any error element owned by `field`.
    pub fn clear(&self, field: &D::Node) {
        self.dom.remove_class(field, INVALID_CLASS);
        let Some(key) = self.dom.attribute(field, FIELD_KEY_ATTR) else {
            return;
        };
        let removed = self.errors.borrow_mut().remove(&key);
        if let Some(error) = removed {
            self.dom.remove(&error);
        }
    }

    /// Input handler: an invalid field clears as soon as it is edited.
    pub fn on_input(&self, field: &D::Node) {
        if self.dom.has_class(field, INVALID_CLASS) {
            self.clear(field);
        }
    }

    /// Number of error elements currently owned.
    pub fn error_count(&self) -> usize {
        self.errors.borrow().len()
    }
}

/// Wire submit validation on every form and live reset on every field.
pub fn install<D: Dom>(dom: &D) -> FormValidator<D> {
    let validator = FormValidator::new(dom.clone());

    let fields = dom.query_all(FORM_FIELD_SELECTOR);
    for field in &fields {
        validator.adopt_existing_error(field);
        let v = validator.clone();
        let target = field.clone();
        dom.listen(
            field,
            "input",
            Box::new(move || {
                v.on_input(&target);
                EventVerdict::Proceed
            }),
        );
    }

    let forms = dom.query_all(FORM_SELECTOR);
    for form in &forms {
        let v = validator.clone();
        let target = form.clone();
        dom.listen(form, "submit", Box::new(move || v.validate_form(&target)));
    }

    log::debug!("validation wired on {} form(s), {} field(s)", forms.len(), fields.len());
    validator
}
