//! Lookup keys and their normalization
//!
//! Callers pass keys as raw JSON scalars ([`RawKey`]). Before any lookup the
//! accessor runs the raw key through a [`KeyNormalizer`], which produces the
//! canonical [`Key`] or rejects the input.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::error::{ContainerGetError, ErrorFactory, Result, StandardErrorFactory};

/// A key as supplied by the caller, before normalization.
pub type RawKey = Value;

/// A normalized lookup key.
///
/// Integer keys and their canonical decimal strings address the same slot,
/// so containers should look keys up by [`Key::as_str_key`] unless they are
/// index-based.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Key {
    Int(i64),
    Str(String),
}

impl Key {
    /// String form of the key, used by string-keyed containers.
    pub fn as_str_key(&self) -> Cow<'_, str> {
        match self {
            Key::Int(i) => Cow::Owned(i.to_string()),
            Key::Str(s) => Cow::Borrowed(s),
        }
    }

    /// Index form of the key, if it has one.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Int(i) => usize::try_from(*i).ok(),
            Key::Str(_) => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(i) => write!(f, "{}", i),
            Key::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Key::Int(i)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Str(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Str(s)
    }
}

/// Converts raw keys into [`Key`]s.
pub trait KeyNormalizer {
    /// Fails with an `InvalidArgument` error when `raw` is not a usable key.
    fn normalize(&self, raw: &RawKey) -> Result<Key>;
}

/// Array-key normalization.
///
/// Integers, integral floats and canonical integer strings become
/// [`Key::Int`]; other strings, and integers too large for i64, become
/// [`Key::Str`]. `null`, booleans, fractional numbers, arrays and objects
/// are rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardKeyNormalizer;

impl KeyNormalizer for StandardKeyNormalizer {
    fn normalize(&self, raw: &RawKey) -> Result<Key> {
        match raw {
            Value::String(s) => Ok(parse_int_key(s).map_or_else(|| Key::Str(s.clone()), Key::Int)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    return Ok(Key::Int(i));
                }
                // Past i64::MAX; the decimal string form is the key, as for strings.
                if n.as_u64().is_some() {
                    return Ok(Key::Str(n.to_string()));
                }
                match n.as_f64() {
                    Some(f)
                        if f.is_finite()
                            && f.fract() == 0.0
                            && f >= i64::MIN as f64
                            && f < i64::MAX as f64 =>
                    {
                        Ok(Key::Int(f as i64))
                    }
                    _ => Err(invalid_key(raw)),
                }
            }
            _ => Err(invalid_key(raw)),
        }
    }
}

fn invalid_key(raw: &RawKey) -> ContainerGetError {
    StandardErrorFactory.create_invalid_argument(
        format!("Cannot use {} as a container key", raw),
        None,
        Some(raw.to_string()),
    )
}

/// Parses `s` only if it is the canonical decimal rendering of an i64.
fn parse_int_key(s: &str) -> Option<i64> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    if s == "-0" {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn normalize(raw: Value) -> Result<Key> {
        StandardKeyNormalizer.normalize(&raw)
    }

    #[test]
    fn test_integer_keys() {
        assert_eq!(normalize(json!(5)).unwrap(), Key::Int(5));
        assert_eq!(normalize(json!(-12)).unwrap(), Key::Int(-12));
        assert_eq!(normalize(json!(3.0)).unwrap(), Key::Int(3));
    }

    #[test]
    fn test_integers_past_i64_match_string_form() {
        let from_number = normalize(json!(u64::MAX)).unwrap();
        let from_string = normalize(json!("18446744073709551615")).unwrap();
        assert_eq!(from_number, Key::Str("18446744073709551615".to_string()));
        assert_eq!(from_number, from_string);
    }

    #[test]
    fn test_float_bounds() {
        assert_eq!(normalize(json!(i64::MIN as f64)).unwrap(), Key::Int(i64::MIN));
        assert!(normalize(json!(i64::MAX as f64)).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_integer_like_strings() {
        assert_eq!(normalize(json!("42")).unwrap(), Key::Int(42));
        assert_eq!(normalize(json!("-7")).unwrap(), Key::Int(-7));
        assert_eq!(normalize(json!("0")).unwrap(), Key::Int(0));
    }

    #[test]
    fn test_non_canonical_strings_stay_strings() {
        for s in ["007", "+1", "-0", "1.5", "", "-", "abc", "99999999999999999999"] {
            assert_eq!(normalize(json!(s)).unwrap(), Key::Str(s.to_string()), "input {:?}", s);
        }
    }

    #[test]
    fn test_rejected_keys() {
        for raw in [json!(null), json!(true), json!(1.5), json!([1]), json!({"a": 1})] {
            let err = normalize(raw.clone()).unwrap_err();
            assert!(err.is_invalid_argument(), "input {}", raw);
        }
    }

    #[test]
    fn test_rejection_names_subject() {
        match normalize(json!(null)).unwrap_err() {
            ContainerGetError::InvalidArgument { subject, .. } => {
                assert_eq!(subject.as_deref(), Some("null"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_key_forms() {
        assert_eq!(Key::Int(5).as_str_key(), "5");
        assert_eq!(Key::from("a").as_str_key(), "a");
        assert_eq!(Key::Int(2).as_index(), Some(2));
        assert_eq!(Key::Int(-1).as_index(), None);
        assert_eq!(Key::from("2").as_index(), None);
        assert_eq!(Key::Int(9).to_string(), "9");
    }

    #[test]
    fn test_key_serializes_untagged() {
        assert_eq!(serde_json::to_value(Key::Int(1)).unwrap(), json!(1));
        assert_eq!(serde_json::to_value(Key::from("x")).unwrap(), json!("x"));
    }
}
