//! Named food library
//!
//! Saved entries that can be logged again with one click.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Macros;

/// Mapping from entry name to its macros, enumerated in name order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Library {
    entries: BTreeMap<String, Macros>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Macros> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Copy of this library with `name` set to `macros`, replacing any previous value.
    ///
    /// Empty names are never stored; the library comes back unchanged.
    pub fn with_entry(&self, name: &str, macros: Macros) -> Self {
        let mut next = self.clone();
        if !name.is_empty() {
            next.entries.insert(name.to_string(), macros);
        }
        next
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Macros)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
