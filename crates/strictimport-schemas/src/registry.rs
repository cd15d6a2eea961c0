//! Named validators and converters referenced by schema documents
//!
//! Copyright (c) 2025 Strictimport Team
//! Licensed under the Apache-2.0 license

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use strictimport_core::strategy::{
    Convert, ConvertDate, ConvertInteger, ConvertLowercase, ConvertTime, DateFormat, TimeUnit,
    Validate, ValidateDate, ValidateInteger, ValidateTime,
};

/// Lookup table from strategy name to shared strategy instance
///
/// [`StrategyRegistry::new`] comes with the built-in strategies registered;
/// use [`StrategyRegistry::empty`] to start from nothing. Registering a name
/// twice replaces the earlier entry.
#[derive(Clone)]
pub struct StrategyRegistry {
    validators: HashMap<String, Arc<dyn Validate>>,
    converters: HashMap<String, Arc<dyn Convert>>,
}

impl StrategyRegistry {
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register_builtins();
        registry
    }

    pub fn empty() -> Self {
        Self {
            validators: HashMap::new(),
            converters: HashMap::new(),
        }
    }

    fn register_builtins(&mut self) {
        self.register_validator("time", ValidateTime);
        self.register_validator("date", ValidateDate::iso());
        self.register_validator("date_german", ValidateDate::new(DateFormat::German));
        self.register_validator("date_us", ValidateDate::new(DateFormat::Us));
        self.register_validator("integer", ValidateInteger::new());

        self.register_converter(
            "time_to_seconds",
            ConvertTime::new(TimeUnit::Hms, TimeUnit::Seconds),
        );
        self.register_converter(
            "seconds_to_time",
            ConvertTime::new(TimeUnit::Seconds, TimeUnit::Hms),
        );
        self.register_converter(
            "date_iso_to_german",
            ConvertDate::new(DateFormat::Iso, DateFormat::German),
        );
        self.register_converter(
            "date_german_to_iso",
            ConvertDate::new(DateFormat::German, DateFormat::Iso),
        );
        self.register_converter("integer", ConvertInteger);
        self.register_converter("lowercase", ConvertLowercase);
    }

    pub fn register_validator(&mut self, name: impl Into<String>, validator: impl Validate + 'static) {
        self.register_shared_validator(name, Arc::new(validator));
    }

    pub fn register_shared_validator(&mut self, name: impl Into<String>, validator: Arc<dyn Validate>) {
        self.validators.insert(name.into(), validator);
    }

    pub fn register_converter(&mut self, name: impl Into<String>, converter: impl Convert + 'static) {
        self.register_shared_converter(name, Arc::new(converter));
    }

    pub fn register_shared_converter(&mut self, name: impl Into<String>, converter: Arc<dyn Convert>) {
        self.converters.insert(name.into(), converter);
    }

    pub fn validator(&self, name: &str) -> Option<Arc<dyn Validate>> {
        self.validators.get(name).cloned()
    }

    pub fn converter(&self, name: &str) -> Option<Arc<dyn Convert>> {
        self.converters.get(name).cloned()
    }

    /// Registered validator names, sorted
    pub fn validator_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.validators.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Registered converter names, sorted
    pub fn converter_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.converters.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrategyRegistry")
            .field("validators", &self.validator_names())
            .field("converters", &self.converter_names())
            .finish()
    }
}
