//! Persisted dark mode preference.
//!
//! The preference is a single boolean stored under one key as the literal
//! string `"true"` or `"false"`. Only the exact string `"true"` reads back as
//! enabled; an absent key or any other value means disabled.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::Result;

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

/// Raw string key-value storage (`localStorage` in the browser).
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns `Storage` if the backend refuses the write.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

/// Boolean preference with read/write access.
pub trait PreferenceStore {
    fn read(&self) -> bool;

    /// # Errors
    ///
    /// Returns `Storage` if the value cannot be persisted.
    fn write(&self, enabled: bool) -> Result<()>;
}

/// Decode a stored value. Anything but exactly `"true"` is disabled.
#[must_use]
pub fn parse_flag(raw: Option<&str>) -> bool {
    raw == Some("true")
}

#[must_use]
pub fn encode_flag(enabled: bool) -> &'static str {
    if enabled { "true" } else { "false" }
}

/// A boolean preference kept under `key` in a [`KeyValueStore`].
#[derive(Debug)]
pub struct StoredPreference<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> StoredPreference<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: KeyValueStore> PreferenceStore for StoredPreference<S> {
    fn read(&self) -> bool {
        parse_flag(self.store.get_item(&self.key).as_deref())
    }

    fn write(&self, enabled: bool) -> Result<()> {
        self.store.set_item(&self.key, encode_flag(enabled))
    }
}

/// In-memory store for non-browser hosts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store that already holds `key = value`.
    #[must_use]
    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
