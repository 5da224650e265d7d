//! Defensive value retrieval from container-like values
//!
//! [`ContainerAccessor::get`] checks which capability set the container
//! satisfies and reads through it:
//!
//! - native containers are asked directly and their errors pass through as-is
//! - array-accessible containers are probed with `offset_exists` first; a
//!   missing key becomes `NotFound`, any failure becomes a container error
//!   carrying the original as its source
//!
//! A value satisfying both sets is read through its native view.

use tracing::{debug, trace};

use crate::container::AsContainer;
use crate::error::{ErrorFactory, Result, StandardErrorFactory};
use crate::key::{KeyNormalizer, RawKey, StandardKeyNormalizer};

/// Reads values out of containers, with pluggable key normalization and
/// error construction.
#[derive(Debug, Clone, Default)]
pub struct ContainerAccessor<N = StandardKeyNormalizer, F = StandardErrorFactory> {
    normalizer: N,
    errors: F,
}

impl ContainerAccessor {
    /// Accessor with the standard normalizer and error factory
    pub fn new() -> Self {
        Self::default()
    }
}

impl<N, F> ContainerAccessor<N, F> {
    pub fn with_normalizer<M: KeyNormalizer>(self, normalizer: M) -> ContainerAccessor<M, F> {
        ContainerAccessor { normalizer, errors: self.errors }
    }

    pub fn with_error_factory<G: ErrorFactory>(self, errors: G) -> ContainerAccessor<N, G> {
        ContainerAccessor { normalizer: self.normalizer, errors }
    }
}

impl<N: KeyNormalizer, F: ErrorFactory> ContainerAccessor<N, F> {
    /// Retrieve the value stored at `key` in `container`.
    pub fn get<C>(&self, container: &C, key: impl Into<RawKey>) -> Result<C::Value>
    where
        C: AsContainer + ?Sized,
    {
        let array_access = match (container.as_native(), container.as_array_access()) {
            (Some(native), _) => {
                let key = self.normalizer.normalize(&key.into())?;
                trace!(%key, "reading through native container");
                return native.get(&key);
            }
            (None, Some(array_access)) => array_access,
            (None, None) => {
                let subject = container.describe();
                debug!(container = %subject, "rejecting value that is not a container");
                return Err(self.errors.create_invalid_argument(
                    format!("Not a valid container: {}", subject),
                    None,
                    Some(subject),
                ));
            }
        };

        let key = self.normalizer.normalize(&key.into())?;
        trace!(%key, "reading through array access");

        let exists = array_access.offset_exists(&key).map_err(|e| {
            debug!(%key, error = %e, "offset_exists failed");
            self.errors.create_container_error(
                format!("Could not check for key '{}'", key),
                Some(e),
                None,
            )
        })?;

        if !exists {
            return Err(self.errors.create_not_found(
                format!("Key '{}' not found in container", key),
                None,
                Some(key),
            ));
        }

        array_access.offset_get(&key).map_err(|e| {
            debug!(%key, error = %e, "offset_get failed");
            self.errors.create_container_error(
                format!("Could not retrieve value for key '{}'", key),
                Some(e),
                None,
            )
        })
    }

    /// Walk `path` through nested containers.
    ///
    /// Each segment is looked up with [`get`](Self::get) in the value the
    /// previous segment produced. An empty path yields the container itself.
    pub fn get_path<C, I>(&self, container: &C, path: I) -> Result<C>
    where
        C: AsContainer<Value = C> + Clone,
        I: IntoIterator,
        I::Item: Into<RawKey>,
    {
        let mut path = path.into_iter();
        let Some(first) = path.next() else {
            return Ok(container.clone());
        };

        let mut current = self.get(container, first)?;
        for (depth, segment) in path.enumerate() {
            trace!(depth = depth + 1, "descending into nested container");
            current = self.get(&current, segment)?;
        }
        Ok(current)
    }
}

/// [`ContainerAccessor::get`] with the standard collaborators.
pub fn container_get<C>(container: &C, key: impl Into<RawKey>) -> Result<C::Value>
where
    C: AsContainer + ?Sized,
{
    ContainerAccessor::new().get(container, key)
}
