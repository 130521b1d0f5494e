//! Persisted local preference.
//!
//! DESIGN
//! ======
//! `KeyValueStore` is the device-local durable key/value space (browser
//! `localStorage` in the shell). `PreferenceStore` binds it to the single
//! theme key and owns the defensive decode: anything that is not a known
//! token reads back as `System`.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::config::ThemeConfig;
use crate::error::StoreError;
use crate::mode::ThemeMode;

/// Synchronous string key/value storage that survives restarts.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`. Durable before returning `Ok`.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend is missing or rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// In-process key/value store. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an entry, returning the store for chaining.
    #[must_use]
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// The theme preference persisted under one well-known key.
#[derive(Clone, Debug)]
pub struct PreferenceStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    /// Bind `store` to the key named by `config`.
    pub fn new(store: S, config: &ThemeConfig) -> Self {
        Self { store, key: config.storage_key.clone() }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the persisted mode.
    ///
    /// Missing, legacy or malformed values degrade to [`ThemeMode::System`].
    pub fn read(&self) -> ThemeMode {
        let Some(raw) = self.store.get(&self.key) else {
            return ThemeMode::System;
        };
        raw.parse().unwrap_or_else(|e| {
            tracing::debug!(key = %self.key, error = %e, "ignoring stored theme preference");
            ThemeMode::System
        })
    }

    /// Persist `mode`. Backend failures are logged and otherwise ignored.
    pub fn write(&self, mode: ThemeMode) {
        if let Err(e) = self.store.set(&self.key, mode.as_str()) {
            tracing::warn!(key = %self.key, %mode, error = %e, "failed to persist theme preference");
        }
    }
}
