//! Session-scoped key-value storage the record store writes through to.
//!
//! The engine does no IO itself. Hosts implement [`SessionStorage`] over
//! whatever their session store is; [`MemoryStorage`] covers tests and hosts
//! that mirror the persisted string themselves.

use crate::error::Result;
use std::collections::HashMap;

/// A string key-value store scoped to one browsing session.
pub trait SessionStorage {
    /// Read the value under `key`, if any.
    fn get_item(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, replacing what was there.
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory [`SessionStorage`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one entry.
    pub fn with_item(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut items = HashMap::new();
        items.insert(key.into(), value.into());
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
