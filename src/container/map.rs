//! In-memory native container

use std::collections::HashMap;

use super::{ArrayAccess, AsContainer, NativeContainer};
use crate::error::{BoxError, ContainerGetError, Result};
use crate::key::Key;

/// A string-keyed map exposing both capability sets.
///
/// Keys are stored by their string form, so `Key::Int(5)` and `"5"` name
/// the same entry. Since the value satisfies both sets, the accessor reads it
/// through [`NativeContainer`].
#[derive(Debug, Clone, PartialEq)]
pub struct MapContainer<V> {
    entries: HashMap<String, V>,
}

impl<V> MapContainer<V> {
    pub fn new() -> Self {
        Self { entries: HashMap::new() }
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<Key>, value: V) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a value, returning the one it replaced
    pub fn insert(&mut self, key: impl Into<Key>, value: V) -> Option<V> {
        let key = key.into();
        self.entries.insert(key.as_str_key().into_owned(), value)
    }

    pub fn remove(&mut self, key: &Key) -> Option<V> {
        self.entries.remove(key.as_str_key().as_ref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for MapContainer<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<Key>, V> FromIterator<(K, V)> for MapContainer<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<V: Clone> NativeContainer for MapContainer<V> {
    type Value = V;

    fn get(&self, key: &Key) -> Result<V> {
        self.entries
            .get(key.as_str_key().as_ref())
            .cloned()
            .ok_or_else(|| ContainerGetError::not_found(key))
    }

    fn has(&self, key: &Key) -> Result<bool> {
        Ok(self.entries.contains_key(key.as_str_key().as_ref()))
    }
}

impl<V: Clone> ArrayAccess for MapContainer<V> {
    type Value = V;

    fn offset_exists(&self, key: &Key) -> std::result::Result<bool, BoxError> {
        Ok(self.has(key)?)
    }

    fn offset_get(&self, key: &Key) -> std::result::Result<V, BoxError> {
        Ok(NativeContainer::get(self, key)?)
    }
}

impl<V: Clone> AsContainer for MapContainer<V> {
    type Value = V;

    fn as_native(&self) -> Option<&dyn NativeContainer<Value = V>> {
        Some(self)
    }

    fn as_array_access(&self) -> Option<&dyn ArrayAccess<Value = V>> {
        Some(self)
    }

    fn describe(&self) -> String {
        format!("MapContainer with {} entries", self.entries.len())
    }
}
