//! Per-field import policy
//!
//! A [`FieldDescriptor`] decides what a single named value becomes:
//!
//! 1. a present, non-empty raw value is used as-is;
//! 2. otherwise the default, if one is declared;
//! 3. otherwise the field fails if mandatory, or is omitted.
//!
//! The resolved value then passes the validator and finally the converter.
//!
//! Copyright (c) 2025 Strictimport Team
//! Licensed under the Apache-2.0 license

use crate::error::FieldError;
use crate::strategy::{Convert, Validate};
use crate::value::is_no_value;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Mandatory flag, default, validator and converter for one field
#[derive(Clone, Default)]
pub struct FieldDescriptor {
    default: Option<Value>,
    mandatory: bool,
    validator: Option<Arc<dyn Validate>>,
    converter: Option<Arc<dyn Convert>>,
}

impl FieldDescriptor {
    /// Descriptor that fails when no value and no default is available
    pub fn mandatory() -> Self {
        Self {
            mandatory: true,
            ..Self::default()
        }
    }

    /// Descriptor that is omitted from output when no value is available
    pub fn optional() -> Self {
        Self::default()
    }

    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.set_default(value);
        self
    }

    pub fn with_validator(mut self, validator: impl Validate + 'static) -> Self {
        self.set_validator(validator);
        self
    }

    pub fn with_converter(mut self, converter: impl Convert + 'static) -> Self {
        self.set_converter(converter);
        self
    }

    pub fn set_default(&mut self, value: impl Into<Value>) {
        self.default = Some(value.into());
    }

    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub fn set_mandatory(&mut self) {
        self.mandatory = true;
    }

    pub fn is_mandatory(&self) -> bool {
        self.mandatory
    }

    pub fn set_validator(&mut self, validator: impl Validate + 'static) {
        self.validator = Some(Arc::new(validator));
    }

    /// Attach an already shared validator
    pub fn set_shared_validator(&mut self, validator: Arc<dyn Validate>) {
        self.validator = Some(validator);
    }

    pub fn has_validator(&self) -> bool {
        self.validator.is_some()
    }

    pub fn validator(&self) -> Option<&dyn Validate> {
        self.validator.as_deref()
    }

    pub fn set_converter(&mut self, converter: impl Convert + 'static) {
        self.converter = Some(Arc::new(converter));
    }

    /// Attach an already shared converter
    pub fn set_shared_converter(&mut self, converter: Arc<dyn Convert>) {
        self.converter = Some(converter);
    }

    pub fn has_converter(&self) -> bool {
        self.converter.is_some()
    }

    pub fn converter(&self) -> Option<&dyn Convert> {
        self.converter.as_deref()
    }

    /// Pick the raw value, the default, or nothing.
    ///
    /// `raw` is whatever the input holds under the field's key; "no value"
    /// inputs (absent, null, `""`, empty composites) fall back to the default.
    pub fn resolve(&self, raw: Option<&Value>) -> Result<Option<Value>, FieldError> {
        if !is_no_value(raw) {
            return Ok(raw.cloned());
        }
        if let Some(default) = &self.default {
            return Ok(Some(default.clone()));
        }
        if self.mandatory {
            return Err(FieldError::Mandatory);
        }
        Ok(None)
    }

    /// Validate, then convert, an already resolved value
    pub fn finish(&self, value: Value) -> Result<Value, FieldError> {
        if let Some(validator) = &self.validator {
            validator.validate(&value)?;
        }
        match &self.converter {
            Some(converter) => Ok(converter.convert(&value)?),
            None => Ok(value),
        }
    }

    /// resolve → validate → convert
    pub fn apply(&self, raw: Option<&Value>) -> Result<Option<Value>, FieldError> {
        self.resolve(raw)?.map(|value| self.finish(value)).transpose()
    }
}

impl fmt::Debug for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("default", &self.default)
            .field("mandatory", &self.mandatory)
            .field("validator", &self.validator.is_some())
            .field("converter", &self.converter.is_some())
            .finish()
    }
}
