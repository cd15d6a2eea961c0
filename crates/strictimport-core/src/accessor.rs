//! Typed single-key access to one level of raw input
//!
//! The accessor never coerces across kinds it was not asked to: `as_bool`
//! rejects `0` and `"0"`, `as_int` rejects floats. Absence, null and wrong
//! kind are reported as distinct [`AccessError`] variants.
//!
//! Sequences are addressed by decimal index keys, so `"2"` is the third
//! element of a list.
//!
//! Copyright (c) 2025 Strictimport Team
//! Licensed under the Apache-2.0 license

use crate::error::{AccessError, AccessResult};
use crate::field::FieldDescriptor;
use crate::value::{kind_name, scalar_text, RawInput};
use serde_json::Value;

/// Read-only typed view over a mapping or sequence
#[derive(Debug, Clone, PartialEq)]
pub struct Accessor {
    backing: Value,
}

impl Accessor {
    /// Access a mapping
    pub fn new(map: RawInput) -> Self {
        Self {
            backing: Value::Object(map),
        }
    }

    /// Access a sequence by index keys
    pub fn from_list(items: Vec<Value>) -> Self {
        Self {
            backing: Value::Array(items),
        }
    }

    /// Replace the backing mapping
    pub fn set_map(&mut self, map: RawInput) {
        self.backing = Value::Object(map);
    }

    /// Replace the backing sequence
    pub fn set_list(&mut self, items: Vec<Value>) {
        self.backing = Value::Array(items);
    }

    /// The backing data
    pub fn value(&self) -> &Value {
        &self.backing
    }

    fn lookup(&self, key: &str) -> Option<&Value> {
        match &self.backing {
            Value::Object(map) => map.get(key),
            Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        }
    }

    /// Present value, null check included
    fn present(&self, key: &str) -> AccessResult<Option<&Value>> {
        match self.lookup(key) {
            None => Ok(None),
            Some(Value::Null) => Err(AccessError::type_mismatch(
                key,
                format!("key {} has type null", key),
            )),
            Some(value) => Ok(Some(value)),
        }
    }

    /// True if the key exists, whatever its value
    pub fn has_key(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    /// Number of top-level entries
    pub fn count(&self) -> usize {
        match &self.backing {
            Value::Object(map) => map.len(),
            Value::Array(items) => items.len(),
            _ => 0,
        }
    }

    pub fn as_string(&self, key: &str, default: Option<&str>) -> AccessResult<String> {
        let value = match (self.present(key)?, default) {
            (Some(value), _) => value,
            (None, Some(default)) => return Ok(default.to_string()),
            (None, None) => return Err(AccessError::not_found(key)),
        };
        match value {
            Value::String(_) | Value::Number(_) => Ok(scalar_text(value).unwrap_or_default()),
            other => Err(AccessError::type_mismatch(
                key,
                format!("invalid type to import as string: {}", kind_name(other)),
            )),
        }
    }

    pub fn as_int(&self, key: &str, default: Option<i64>) -> AccessResult<i64> {
        let value = match (self.present(key)?, default) {
            (Some(value), _) => value,
            (None, Some(default)) => return Ok(default),
            (None, None) => return Err(AccessError::not_found(key)),
        };
        match value {
            Value::Number(n) if n.is_i64() || n.is_u64() => n
                .as_i64()
                .ok_or_else(|| AccessError::conversion(key, "unable to cast to integer")),
            Value::String(s) => {
                parse_int(s).ok_or_else(|| AccessError::conversion(key, "unable to cast to integer"))
            }
            other => Err(AccessError::type_mismatch(
                key,
                format!("invalid type to import as int: {}", kind_name(other)),
            )),
        }
    }

    pub fn as_float(&self, key: &str, default: Option<f64>) -> AccessResult<f64> {
        let value = match (self.present(key)?, default) {
            (Some(value), _) => value,
            (None, Some(default)) => return Ok(default),
            (None, None) => return Err(AccessError::not_found(key)),
        };
        match value {
            Value::Number(n) => n
                .as_f64()
                .ok_or_else(|| AccessError::conversion(key, format!("unable to cast key {} value to float", key))),
            Value::String(s) => parse_float(s).ok_or_else(|| {
                AccessError::conversion(key, format!("unable to cast key {} value to float", key))
            }),
            other => Err(AccessError::type_mismatch(
                key,
                format!("invalid type to import as float: {}", kind_name(other)),
            )),
        }
    }

    pub fn as_bool(&self, key: &str, default: Option<bool>) -> AccessResult<bool> {
        let value = match (self.present(key)?, default) {
            (Some(value), _) => value,
            (None, Some(default)) => return Ok(default),
            (None, None) => return Err(AccessError::not_found(key)),
        };
        match value {
            Value::Bool(b) => Ok(*b),
            other => Err(AccessError::type_mismatch(
                key,
                format!("invalid type to import as bool: {}", kind_name(other)),
            )),
        }
    }

    /// Composite value under `key`; there is no default at this layer
    pub fn as_array(&self, key: &str) -> AccessResult<&Value> {
        let value = self.present(key)?.ok_or_else(|| AccessError::not_found(key))?;
        match value {
            Value::Array(_) | Value::Object(_) => Ok(value),
            other => Err(AccessError::type_mismatch(
                key,
                format!("key {} is not an array, but {}", key, kind_name(other)),
            )),
        }
    }

    /// Accessor over the composite value under `key`
    pub fn as_accessor(&self, key: &str) -> AccessResult<Accessor> {
        Ok(Accessor {
            backing: self.as_array(key)?.clone(),
        })
    }

    pub fn is_null(&self, key: &str) -> AccessResult<bool> {
        self.lookup(key)
            .map(Value::is_null)
            .ok_or_else(|| AccessError::not_found(key))
    }

    pub fn is_bool(&self, key: &str) -> AccessResult<bool> {
        self.lookup(key)
            .map(Value::is_boolean)
            .ok_or_else(|| AccessError::not_found(key))
    }

    /// Fetch `key` as text and run it through a field descriptor.
    ///
    /// An absent key reads as the empty string, so the descriptor's default
    /// and mandatory rules decide the outcome. `Ok(None)` means an optional
    /// field without value or default.
    pub fn by_field(&self, key: &str, field: &FieldDescriptor) -> AccessResult<Option<Value>> {
        let text = self.as_string(key, Some(""))?;
        let raw = Value::String(text);
        field
            .apply(Some(&raw))
            .map_err(|source| AccessError::Field {
                key: key.to_string(),
                source,
            })
    }
}

impl From<RawInput> for Accessor {
    fn from(map: RawInput) -> Self {
        Self::new(map)
    }
}

impl TryFrom<Value> for Accessor {
    type Error = AccessError;

    fn try_from(value: Value) -> AccessResult<Self> {
        match value {
            Value::Object(_) | Value::Array(_) => Ok(Self { backing: value }),
            other => Err(AccessError::type_mismatch(
                "",
                format!("invalid type to access as array: {}", kind_name(&other)),
            )),
        }
    }
}

/// Strict decimal integer parsing: optional sign, no leading zeros,
/// surrounding whitespace ignored
pub(crate) fn parse_int(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    let digits = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    trimmed.parse::<i64>().ok()
}

/// Numeric string parsing; rejects `inf`, `nan` and friends
fn parse_float(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty()
        || !trimmed
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|f| f.is_finite())
}
