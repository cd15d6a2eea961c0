//! Raw input model and the "no value" rule
//!
//! Raw input is plain `serde_json` data: whatever a JSON, YAML or TOML parser
//! produced. The importer only ever reads it.
//!
//! Copyright (c) 2025 Strictimport Team
//! Licensed under the Apache-2.0 license

use serde_json::{Map, Value};

/// One level of untyped input, keyed by string
pub type RawInput = Map<String, Value>;

/// Returns true when a looked-up value counts as absent.
///
/// A missing key, an explicit null, the empty string, an empty sequence and an
/// empty mapping are all treated the same way for defaulting and mandatory
/// checks.
pub fn is_no_value(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        Some(Value::Object(map)) => map.is_empty(),
        Some(_) => false,
    }
}

/// Short name of the runtime kind of a value, used in error messages
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// True for strings, numbers and booleans
pub fn is_scalar(value: &Value) -> bool {
    matches!(value, Value::Bool(_) | Value::Number(_) | Value::String(_))
}

/// True for sequences and mappings
pub fn is_composite(value: &Value) -> bool {
    matches!(value, Value::Array(_) | Value::Object(_))
}

/// Textual form of a scalar value.
///
/// Integers print as-is, floats print in shortest decimal form so `15.0`
/// becomes `"15"` and `15.03` stays `"15.03"`. Returns `None` for null and
/// composites.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i.to_string())
            } else if let Some(u) = n.as_u64() {
                Some(u.to_string())
            } else {
                n.as_f64().map(|f| f.to_string())
            }
        }
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
