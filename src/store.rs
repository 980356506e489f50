//! Key-value preference storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser builds persist to `localStorage`; native builds and tests use an
//! in-memory map. When `localStorage` is unavailable (disabled storage,
//! sandboxed frames) [`LocalStore`] keeps working in memory for the rest of
//! the page's life.
//!
//! ERROR HANDLING
//! ==============
//! Storage failures are logged and ignored; the page keeps its current
//! appearance either way.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// String-valued preference storage shared by the appearance features.
pub trait PreferenceStore: Clone + 'static {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// In-memory store; clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `entries`.
    pub fn with_entries(entries: &[(&str, &str)]) -> Self {
        let store = Self::new();
        for (key, value) in entries {
            store.set(key, value);
        }
        store
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

/// `window.localStorage` with an in-memory fallback.
#[cfg(feature = "hydrate")]
#[derive(Clone, Debug)]
pub struct LocalStore {
    storage: Option<web_sys::Storage>,
    fallback: MemoryStore,
}

#[cfg(feature = "hydrate")]
impl LocalStore {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage unavailable; preferences will not survive reload");
        }
        Self { storage, fallback: MemoryStore::new() }
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        match &self.storage {
            Some(storage) => storage.get_item(key).ok().flatten(),
            None => self.fallback.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) {
        match &self.storage {
            Some(storage) => {
                if let Err(e) = storage.set_item(key, value) {
                    log::warn!("failed to persist {key}: {e:?}");
                }
            }
            None => self.fallback.set(key, value),
        }
    }
}
