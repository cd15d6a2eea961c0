//! Built-in validators
//!
//! Copyright (c) 2025 Strictimport Team
//! Licensed under the Apache-2.0 license

use super::formats::{parse_hms, DateFormat};
use super::{as_text, Validate};
use crate::error::ValidateError;
use crate::value::{kind_name, scalar_text};
use regex::Regex;
use serde_json::Value;

/// Accepts `HH:MM:SS` times of day
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateTime;

impl Validate for ValidateTime {
    fn validate(&self, value: &Value) -> Result<(), ValidateError> {
        let text = as_text(value, "time").map_err(ValidateError::new)?;
        parse_hms(text)
            .map(|_| ())
            .ok_or_else(|| ValidateError::new("invalid format, time expected (HH:MM:SS)"))
    }
}

/// Accepts real calendar dates in one layout
#[derive(Debug, Clone, Copy)]
pub struct ValidateDate {
    format: DateFormat,
}

impl ValidateDate {
    pub fn new(format: DateFormat) -> Self {
        Self { format }
    }

    pub fn iso() -> Self {
        Self::new(DateFormat::Iso)
    }
}

impl Validate for ValidateDate {
    fn validate(&self, value: &Value) -> Result<(), ValidateError> {
        let text = as_text(value, "date").map_err(ValidateError::new)?;
        match self.format.parse(text) {
            Some(_) => Ok(()),
            None => Err(ValidateError::new(format!(
                "invalid format, date expected ({})",
                self.format.describe()
            ))),
        }
    }
}

/// Accepts one of a fixed set of values, compared by their text form
#[derive(Debug, Clone)]
pub struct ValidateOneOf {
    allowed: Vec<String>,
}

impl ValidateOneOf {
    pub fn new<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }
}

impl Validate for ValidateOneOf {
    fn validate(&self, value: &Value) -> Result<(), ValidateError> {
        let text = scalar_text(value).ok_or_else(|| {
            ValidateError::new(format!("invalid type, scalar expected but found {}", kind_name(value)))
        })?;
        if self.allowed.iter().any(|allowed| *allowed == text) {
            Ok(())
        } else {
            Err(ValidateError::new(format!(
                "value '{}' is not one of: {}",
                text,
                self.allowed.join(", ")
            )))
        }
    }
}

/// Accepts text matching a regular expression
#[derive(Debug, Clone)]
pub struct ValidateRegex {
    pattern: Regex,
}

impl ValidateRegex {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }
}

impl Validate for ValidateRegex {
    fn validate(&self, value: &Value) -> Result<(), ValidateError> {
        let text = scalar_text(value).ok_or_else(|| {
            ValidateError::new(format!("invalid type, scalar expected but found {}", kind_name(value)))
        })?;
        if self.pattern.is_match(&text) {
            Ok(())
        } else {
            Err(ValidateError::new(format!(
                "value '{}' does not match {}",
                text,
                self.pattern.as_str()
            )))
        }
    }
}

/// Accepts integers and decimal integer strings, optionally bounded
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateInteger {
    min: Option<i64>,
    max: Option<i64>,
}

impl ValidateInteger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn with_max(mut self, max: i64) -> Self {
        self.max = Some(max);
        self
    }
}

impl Validate for ValidateInteger {
    fn validate(&self, value: &Value) -> Result<(), ValidateError> {
        let number = match value {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => crate::accessor::parse_int(s),
            _ => None,
        }
        .ok_or_else(|| ValidateError::new("invalid format, integer expected"))?;

        if let Some(min) = self.min.filter(|min| number < *min) {
            return Err(ValidateError::new(format!("{} is below minimum {}", number, min)));
        }
        if let Some(max) = self.max.filter(|max| number > *max) {
            return Err(ValidateError::new(format!("{} is above maximum {}", number, max)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_time() {
        assert!(ValidateTime.validate(&json!("08:00:00")).is_ok());
        let err = ValidateTime.validate(&json!("8h")).unwrap_err();
        assert_eq!(err.to_string(), "invalid format, time expected (HH:MM:SS)");
        assert!(ValidateTime.validate(&json!(8)).is_err());
    }

    #[test]
    fn test_validate_date() {
        let iso = ValidateDate::iso();
        assert!(iso.validate(&json!("1970-07-03")).is_ok());
        assert!(iso.validate(&json!("Joe")).is_err());

        let german = ValidateDate::new(DateFormat::German);
        assert!(german.validate(&json!("03.07.1970")).is_ok());
        let err = german.validate(&json!("1970-07-03")).unwrap_err();
        assert_eq!(err.to_string(), "invalid format, date expected (DD.MM.YYYY)");
    }

    #[test]
    fn test_validate_one_of() {
        let gender = ValidateOneOf::new(["m", "f", "d"]);
        assert!(gender.validate(&json!("m")).is_ok());
        assert!(gender.validate(&json!("x")).is_err());

        let levels = ValidateOneOf::new(["1", "2"]);
        assert!(levels.validate(&json!(2)).is_ok());
    }

    #[test]
    fn test_validate_regex() {
        let path = ValidateRegex::new(r"^/.*/$").unwrap();
        assert!(path.validate(&json!("/home/")).is_ok());
        assert!(path.validate(&json!("home")).is_err());
        assert!(ValidateRegex::new("(").is_err());
    }

    #[test]
    fn test_validate_integer_bounds() {
        let days = ValidateInteger::new().with_min(1).with_max(365);
        assert!(days.validate(&json!(180)).is_ok());
        assert!(days.validate(&json!("180")).is_ok());
        assert!(days.validate(&json!(0)).is_err());
        assert!(days.validate(&json!("400")).is_err());
        assert!(days.validate(&json!("many")).is_err());
        assert!(days.validate(&json!(1.5)).is_err());
    }
}
