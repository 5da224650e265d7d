//! container-get - defensive value lookup across container shapes
//!
//! A container is anything that can be read by key. Two shapes are
//! understood: native containers, which answer `get`/`has` and raise their own
//! lookup errors, and array-accessible values, which answer
//! `offset_exists`/`offset_get`. The accessor dispatches on the shape and
//! reports every failure as one of three error kinds.
//!
//! # Example
//!
//! ```
//! use container_get::{container_get, ContainerAccessor};
//! use serde_json::json;
//!
//! let doc = json!({"a": 1, "b": {"c": [true]}});
//! assert_eq!(container_get(&doc, "a").unwrap(), json!(1));
//! assert!(container_get(&doc, "missing").unwrap_err().is_not_found());
//!
//! let nested = ContainerAccessor::new().get_path(&doc, ["b", "c", "0"]).unwrap();
//! assert_eq!(nested, json!(true));
//! ```

pub mod accessor;
pub mod cli;
pub mod container;
pub mod error;
pub mod key;
pub mod logging;
pub mod output;

pub use accessor::{container_get, ContainerAccessor};
pub use container::{ArrayAccess, AsContainer, MapContainer, NativeContainer};
pub use error::{BoxError, ContainerGetError, ErrorFactory, ErrorKind, Result, StandardErrorFactory};
pub use key::{Key, KeyNormalizer, RawKey, StandardKeyNormalizer};
pub use output::{format_output, OutputFormat};
