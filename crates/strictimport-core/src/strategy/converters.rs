//! Built-in converters
//!
//! Copyright (c) 2025 Strictimport Team
//! Licensed under the Apache-2.0 license

use super::formats::{parse_hms, render_hms, DateFormat, TimeUnit};
use super::{as_text, Convert};
use crate::error::ConvertError;
use serde_json::Value;

/// Converts between `HH:MM:SS` text and whole seconds
#[derive(Debug, Clone, Copy)]
pub struct ConvertTime {
    from: TimeUnit,
    to: TimeUnit,
}

impl ConvertTime {
    pub fn new(from: TimeUnit, to: TimeUnit) -> Self {
        Self { from, to }
    }

    fn seconds(&self, value: &Value) -> Result<u64, ConvertError> {
        match self.from {
            TimeUnit::Hms => {
                let text = as_text(value, "time").map_err(ConvertError::new)?;
                parse_hms(text)
                    .map(u64::from)
                    .ok_or_else(|| ConvertError::new("invalid format, time expected (HH:MM:SS)"))
            }
            TimeUnit::Seconds => match value {
                Value::Number(n) => n.as_u64(),
                Value::String(s) => s.trim().parse::<u64>().ok(),
                _ => None,
            }
            .ok_or_else(|| ConvertError::new("invalid format, seconds expected")),
        }
    }
}

impl Convert for ConvertTime {
    fn convert(&self, value: &Value) -> Result<Value, ConvertError> {
        let seconds = self.seconds(value)?;
        Ok(match self.to {
            TimeUnit::Hms => Value::String(render_hms(seconds)),
            TimeUnit::Seconds => Value::from(seconds),
        })
    }
}

/// Re-renders a date from one layout into another
#[derive(Debug, Clone, Copy)]
pub struct ConvertDate {
    from: DateFormat,
    to: DateFormat,
}

impl ConvertDate {
    pub fn new(from: DateFormat, to: DateFormat) -> Self {
        Self { from, to }
    }
}

impl Convert for ConvertDate {
    fn convert(&self, value: &Value) -> Result<Value, ConvertError> {
        let text = as_text(value, "date").map_err(ConvertError::new)?;
        let date = self.from.parse(text).ok_or_else(|| {
            ConvertError::new(format!("invalid format, date expected ({})", self.from.describe()))
        })?;
        Ok(Value::String(self.to.render(date)))
    }
}

/// Turns integer strings into integers; integers pass through
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertInteger;

impl Convert for ConvertInteger {
    fn convert(&self, value: &Value) -> Result<Value, ConvertError> {
        match value {
            Value::Number(n) if n.is_i64() || n.is_u64() => Ok(value.clone()),
            Value::String(s) => crate::accessor::parse_int(s)
                .map(Value::from)
                .ok_or_else(|| ConvertError::new(format!("unable to cast '{}' to integer", s))),
            other => Err(ConvertError::new(format!(
                "invalid type to convert to integer: {}",
                crate::value::kind_name(other)
            ))),
        }
    }
}

/// Lowercases text
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertLowercase;

impl Convert for ConvertLowercase {
    fn convert(&self, value: &Value) -> Result<Value, ConvertError> {
        let text = as_text(value, "string").map_err(ConvertError::new)?;
        Ok(Value::String(text.to_lowercase()))
    }
}
