//! Pluggable validation and conversion strategies
//!
//! A field descriptor may carry one [`Validate`] and one [`Convert`]
//! capability. Both are single-method traits; closures with the matching
//! signature implement them, so callers can plug in ad-hoc checks without
//! declaring a type.
//!
//! # Module Organization
//!
//! - [`validators`] - built-in validators (time, date, enumeration, pattern, integer)
//! - [`converters`] - built-in converters (time, date, integer, lowercase)
//! - [`formats`] - date and time representations shared by both
//!
//! # Examples
//!
//! ```
//! use strictimport_core::strategy::{Validate, validators::ValidateTime};
//! use serde_json::json;
//!
//! assert!(ValidateTime.validate(&json!("04:00:00")).is_ok());
//! assert!(ValidateTime.validate(&json!("4h")).is_err());
//! ```
//!
//! Copyright (c) 2025 Strictimport Team
//! Licensed under the Apache-2.0 license

pub mod converters;
pub mod formats;
pub mod validators;

use crate::error::{ConvertError, ValidateError};
use serde_json::Value;

pub use converters::{ConvertDate, ConvertInteger, ConvertLowercase, ConvertTime};
pub use formats::{DateFormat, TimeUnit};
pub use validators::{ValidateDate, ValidateInteger, ValidateOneOf, ValidateRegex, ValidateTime};

/// Checks a resolved value without modifying it
pub trait Validate: Send + Sync {
    fn validate(&self, value: &Value) -> Result<(), ValidateError>;
}

/// Transforms an already validated value into its final form
pub trait Convert: Send + Sync {
    fn convert(&self, value: &Value) -> Result<Value, ConvertError>;
}

impl<F> Validate for F
where
    F: Fn(&Value) -> Result<(), ValidateError> + Send + Sync,
{
    fn validate(&self, value: &Value) -> Result<(), ValidateError> {
        self(value)
    }
}

impl<F> Convert for F
where
    F: Fn(&Value) -> Result<Value, ConvertError> + Send + Sync,
{
    fn convert(&self, value: &Value) -> Result<Value, ConvertError> {
        self(value)
    }
}

/// Borrow a value as text, or describe why it is not text
pub(crate) fn as_text<'v>(value: &'v Value, expected: &str) -> Result<&'v str, String> {
    value.as_str().ok_or_else(|| {
        format!(
            "invalid type, {} expected but found {}",
            expected,
            crate::value::kind_name(value)
        )
    })
}
