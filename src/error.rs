//! Error types for container lookups
//!
//! Every failure surfaced by the accessor is one of three kinds. Callers are
//! expected to match on the kind (see [`ContainerGetError::kind`]) rather than
//! on message text.

use std::fmt;

use thiserror::Error;

use crate::key::Key;

/// Boxed error raised by an array-accessible container.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum ContainerGetError {
    /// The container or the key is not usable at all.
    #[error("{message}")]
    InvalidArgument {
        message: String,
        /// Rendering of the offending value.
        subject: Option<String>,
        #[source]
        source: Option<BoxError>,
    },

    #[error("{message}")]
    NotFound {
        message: String,
        key: Option<Key>,
        #[source]
        source: Option<BoxError>,
    },

    /// The container failed while being probed or read.
    #[error("{message}")]
    Container {
        message: String,
        container: Option<String>,
        #[source]
        source: Option<BoxError>,
    },
}

/// Discriminant of [`ContainerGetError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    Container,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::InvalidArgument => "invalid argument",
            ErrorKind::NotFound => "not found",
            ErrorKind::Container => "container error",
        };
        f.write_str(name)
    }
}

impl ContainerGetError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ContainerGetError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            ContainerGetError::NotFound { .. } => ErrorKind::NotFound,
            ContainerGetError::Container { .. } => ErrorKind::Container,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    pub fn is_container_error(&self) -> bool {
        self.kind() == ErrorKind::Container
    }

    /// The message, without any cause.
    pub fn message(&self) -> &str {
        match self {
            ContainerGetError::InvalidArgument { message, .. }
            | ContainerGetError::NotFound { message, .. }
            | ContainerGetError::Container { message, .. } => message,
        }
    }

    /// Shorthand for a `NotFound` naming `key`, for container implementors.
    pub fn not_found(key: &Key) -> Self {
        ContainerGetError::NotFound {
            message: format!("Key '{}' not found in container", key),
            key: Some(key.clone()),
            source: None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ContainerGetError>;

/// Builds the three error kinds.
///
/// Each constructor takes a message, an optional previous error, and an
/// optional reference to the value the error is about.
pub trait ErrorFactory {
    fn create_invalid_argument(
        &self,
        message: String,
        previous: Option<BoxError>,
        subject: Option<String>,
    ) -> ContainerGetError;

    fn create_container_error(
        &self,
        message: String,
        previous: Option<BoxError>,
        container: Option<String>,
    ) -> ContainerGetError;

    fn create_not_found(
        &self,
        message: String,
        previous: Option<BoxError>,
        key: Option<Key>,
    ) -> ContainerGetError;
}

/// Maps each constructor straight onto its [`ContainerGetError`] variant.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardErrorFactory;

impl ErrorFactory for StandardErrorFactory {
    fn create_invalid_argument(
        &self,
        message: String,
        previous: Option<BoxError>,
        subject: Option<String>,
    ) -> ContainerGetError {
        ContainerGetError::InvalidArgument { message, subject, source: previous }
    }

    fn create_container_error(
        &self,
        message: String,
        previous: Option<BoxError>,
        container: Option<String>,
    ) -> ContainerGetError {
        ContainerGetError::Container { message, container, source: previous }
    }

    fn create_not_found(
        &self,
        message: String,
        previous: Option<BoxError>,
        key: Option<Key>,
    ) -> ContainerGetError {
        ContainerGetError::NotFound { message, key, source: previous }
    }
}
