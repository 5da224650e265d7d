//! Capability impls for standard and serde_json types

use std::collections::{BTreeMap, HashMap};

use serde_json::{Map, Value as Json};

use super::{ArrayAccess, AsContainer};
use crate::error::BoxError;
use crate::key::Key;

fn undefined_offset(key: &Key) -> BoxError {
    format!("Undefined offset '{}'", key).into()
}

impl<V: Clone> ArrayAccess for HashMap<String, V> {
    type Value = V;

    fn offset_exists(&self, key: &Key) -> Result<bool, BoxError> {
        Ok(self.contains_key(key.as_str_key().as_ref()))
    }

    fn offset_get(&self, key: &Key) -> Result<V, BoxError> {
        self.get(key.as_str_key().as_ref()).cloned().ok_or_else(|| undefined_offset(key))
    }
}

impl<V: Clone> AsContainer for HashMap<String, V> {
    type Value = V;

    fn as_array_access(&self) -> Option<&dyn ArrayAccess<Value = V>> {
        Some(self)
    }
}

impl<V: Clone> ArrayAccess for BTreeMap<String, V> {
    type Value = V;

    fn offset_exists(&self, key: &Key) -> Result<bool, BoxError> {
        Ok(self.contains_key(key.as_str_key().as_ref()))
    }

    fn offset_get(&self, key: &Key) -> Result<V, BoxError> {
        self.get(key.as_str_key().as_ref()).cloned().ok_or_else(|| undefined_offset(key))
    }
}

impl<V: Clone> AsContainer for BTreeMap<String, V> {
    type Value = V;

    fn as_array_access(&self) -> Option<&dyn ArrayAccess<Value = V>> {
        Some(self)
    }
}

impl ArrayAccess for Map<String, Json> {
    type Value = Json;

    fn offset_exists(&self, key: &Key) -> Result<bool, BoxError> {
        Ok(self.contains_key(key.as_str_key().as_ref()))
    }

    fn offset_get(&self, key: &Key) -> Result<Json, BoxError> {
        self.get(key.as_str_key().as_ref()).cloned().ok_or_else(|| undefined_offset(key))
    }
}

impl AsContainer for Map<String, Json> {
    type Value = Json;

    fn as_array_access(&self) -> Option<&dyn ArrayAccess<Value = Json>> {
        Some(self)
    }

    fn describe(&self) -> String {
        format!("JSON object with {} entries", self.len())
    }
}

// Lists are indexed by integer keys only; "1" normalizes to 1 beforehand.
impl<V: Clone> ArrayAccess for Vec<V> {
    type Value = V;

    fn offset_exists(&self, key: &Key) -> Result<bool, BoxError> {
        Ok(key.as_index().is_some_and(|i| i < self.len()))
    }

    fn offset_get(&self, key: &Key) -> Result<V, BoxError> {
        key.as_index()
            .and_then(|i| self.get(i))
            .cloned()
            .ok_or_else(|| undefined_offset(key))
    }
}

impl<V: Clone> AsContainer for Vec<V> {
    type Value = V;

    fn as_array_access(&self) -> Option<&dyn ArrayAccess<Value = V>> {
        Some(self)
    }

    fn describe(&self) -> String {
        format!("list of {} items", self.len())
    }
}

impl ArrayAccess for Json {
    type Value = Json;

    fn offset_exists(&self, key: &Key) -> Result<bool, BoxError> {
        match self {
            Json::Object(map) => map.offset_exists(key),
            Json::Array(items) => items.offset_exists(key),
            other => Err(format!("{} is not indexable", other).into()),
        }
    }

    fn offset_get(&self, key: &Key) -> Result<Json, BoxError> {
        match self {
            Json::Object(map) => map.offset_get(key),
            Json::Array(items) => items.offset_get(key),
            other => Err(format!("{} is not indexable", other).into()),
        }
    }
}

/// Objects and arrays are array-accessible; scalars are not containers.
impl AsContainer for Json {
    type Value = Json;

    fn as_array_access(&self) -> Option<&dyn ArrayAccess<Value = Json>> {
        match self {
            Json::Object(_) | Json::Array(_) => Some(self),
            _ => None,
        }
    }

    fn describe(&self) -> String {
        match self {
            Json::Object(map) => map.describe(),
            Json::Array(items) => format!("JSON array of {} items", items.len()),
            scalar => scalar.to_string(),
        }
    }
}

impl AsContainer for str {
    type Value = std::convert::Infallible;

    fn describe(&self) -> String {
        format!("{:?}", self)
    }
}

impl AsContainer for String {
    type Value = std::convert::Infallible;

    fn describe(&self) -> String {
        self.as_str().describe()
    }
}
