//! Container capabilities
//!
//! A value can be read by the accessor when it satisfies one of two
//! capability sets:
//! - [`NativeContainer`]: `get` / `has`, failing with the crate's own errors
//! - [`ArrayAccess`]: `offset_exists` / `offset_get`, failing with anything
//!
//! [`AsContainer`] is how a value reports which of the two it satisfies.

mod impls;
mod map;

pub use map::MapContainer;

use crate::error::{BoxError, Result};
use crate::key::Key;

/// A container that raises `NotFound` / container errors itself.
pub trait NativeContainer {
    type Value;

    fn get(&self, key: &Key) -> Result<Self::Value>;

    fn has(&self, key: &Key) -> Result<bool>;
}

/// An indexable object with an existence probe.
pub trait ArrayAccess {
    type Value;

    fn offset_exists(&self, key: &Key) -> std::result::Result<bool, BoxError>;

    fn offset_get(&self, key: &Key) -> std::result::Result<Self::Value, BoxError>;
}

/// Reports the capability sets a value satisfies.
///
/// Both views default to `None`, so a type that implements only this trait
/// is rejected by the accessor as an invalid container.
pub trait AsContainer {
    type Value;

    fn as_native(&self) -> Option<&dyn NativeContainer<Value = Self::Value>> {
        None
    }

    fn as_array_access(&self) -> Option<&dyn ArrayAccess<Value = Self::Value>> {
        None
    }

    /// Short rendering of the value for error reports.
    fn describe(&self) -> String {
        std::any::type_name::<Self>().to_string()
    }
}
