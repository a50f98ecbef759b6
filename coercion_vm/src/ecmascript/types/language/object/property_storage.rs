// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use ahash::RandomState;
use hashbrown::HashMap;

use super::{PropertyEntry, PropertyKey};

/// Own properties of an object. Lookups go through the hash map; the key list
/// remembers creation order for \[\[OwnPropertyKeys\]\].
#[derive(Debug, Clone, Default)]
pub struct PropertyStorage {
    keys: Vec<PropertyKey>,
    entries: HashMap<PropertyKey, PropertyEntry, RandomState>,
}

impl PropertyStorage {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: Vec::with_capacity(capacity),
            entries: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
        }
    }

    pub(crate) fn get(&self, key: PropertyKey) -> Option<&PropertyEntry> {
        self.entries.get(&key)
    }

    /// Inserts or replaces a property. Replacing keeps the original position
    /// in creation order.
    pub(crate) fn set(&mut self, key: PropertyKey, entry: PropertyEntry) {
        if self.entries.insert(key, entry).is_none() {
            self.keys.push(key);
        }
    }

    pub(crate) fn remove(&mut self, key: PropertyKey) -> Option<PropertyEntry> {
        let removed = self.entries.remove(&key)?;
        if let Some(position) = self.keys.iter().position(|k| *k == key) {
            self.keys.remove(position);
        }
        Some(removed)
    }

    /// Keys in creation order.
    pub(crate) fn keys(&self) -> &[PropertyKey] {
        &self.keys
    }
}
