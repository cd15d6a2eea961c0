//! Declarative schema documents
//!
//! A schema document describes one [`SchemaNode`] level with four sections,
//! each a mapping from name to declaration:
//!
//! ```yaml
//! options:
//!   ignore_null_unexpected: false
//! fields:
//!   name: { mandatory: true }
//!   daily: { default: "04:00:00", validate: time, convert: time_to_seconds }
//!   color: { validate: { one_of: [red, green] } }
//! lists:
//!   sports: { mandatory: true }
//! objects:
//!   retention:
//!     fields:
//!       days: { validate: { integer: { min: 1 } }, convert: integer }
//! object_lists:
//!   jobs:
//!     fields:
//!       command: { mandatory: true }
//! ```
//!
//! Section order and key order are kept, so the compiled schema resolves
//! names in the order they were written. A name with no body (`name:` in
//! YAML) declares an optional field without strategies. `options` is only
//! accepted at the root.
//!
//! Copyright (c) 2025 Strictimport Team
//! Licensed under the Apache-2.0 license

use crate::error::{LoaderError, LoaderResult};
use crate::registry::StrategyRegistry;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;
use std::path::Path;
use std::sync::Arc;
use strictimport_core::strategy::{Validate, ValidateInteger, ValidateOneOf, ValidateRegex};
use strictimport_core::{FieldDescriptor, ImportOptions, SchemaBuilder, SchemaNode};

/// Name/declaration pairs in document order
#[derive(Debug, Clone, PartialEq)]
pub struct Entries<T>(pub Vec<(String, T)>);

impl<T> Default for Entries<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> Entries<T> {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.0.iter().map(|(name, item)| (name.as_str(), item))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de, T> Deserialize<'de> for Entries<T>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor<T>(PhantomData<T>);

        impl<'de, T> Visitor<'de> for EntriesVisitor<T>
        where
            T: Deserialize<'de> + Default,
        {
            type Value = Entries<T>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a mapping of names to declarations")
            }

            fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
                Ok(Entries::default())
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, item)) = map.next_entry::<String, Option<T>>()? {
                    entries.push((name, item.unwrap_or_default()));
                }
                Ok(Entries(entries))
            }
        }

        deserializer.deserialize_any(EntriesVisitor(PhantomData))
    }
}

/// Inclusive bounds for the `integer` validator form
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct IntegerBounds {
    #[serde(default)]
    pub min: Option<i64>,
    #[serde(default)]
    pub max: Option<i64>,
}

/// Validator reference: a registry name or an inline parameterized form
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ValidatorDocument {
    Named(String),
    OneOf { one_of: Vec<String> },
    Pattern { pattern: String },
    Integer { integer: IntegerBounds },
}

impl ValidatorDocument {
    fn resolve(&self, registry: &StrategyRegistry, location: &str) -> LoaderResult<Arc<dyn Validate>> {
        match self {
            Self::Named(name) => {
                registry
                    .validator(name)
                    .ok_or_else(|| LoaderError::UnknownValidator {
                        name: name.clone(),
                        location: location.to_string(),
                    })
            }
            Self::OneOf { one_of } => Ok(Arc::new(ValidateOneOf::new(one_of.iter().cloned()))),
            Self::Pattern { pattern } => {
                let validator = ValidateRegex::new(pattern).map_err(|e| LoaderError::SchemaError {
                    location: location.to_string(),
                    reason: e.to_string(),
                })?;
                Ok(Arc::new(validator))
            }
            Self::Integer { integer } => {
                let mut validator = ValidateInteger::new();
                if let Some(min) = integer.min {
                    validator = validator.with_min(min);
                }
                if let Some(max) = integer.max {
                    validator = validator.with_max(max);
                }
                Ok(Arc::new(validator))
            }
        }
    }
}

/// Declaration of one scalar or scalar list
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDocument {
    #[serde(default)]
    pub mandatory: bool,
    #[serde(default)]
    pub default: Option<Value>,
    #[serde(default)]
    pub validate: Option<ValidatorDocument>,
    #[serde(default)]
    pub convert: Option<String>,
}

impl FieldDocument {
    pub fn compile(&self, registry: &StrategyRegistry, location: &str) -> LoaderResult<FieldDescriptor> {
        let mut field = if self.mandatory {
            FieldDescriptor::mandatory()
        } else {
            FieldDescriptor::optional()
        };

        if let Some(default) = &self.default {
            field.set_default(default.clone());
        }

        if let Some(validate) = &self.validate {
            let validator = validate.resolve(registry, &format!("{location}.validate"))?;
            field.set_shared_validator(validator);
        }

        if let Some(name) = &self.convert {
            let converter = registry
                .converter(name)
                .ok_or_else(|| LoaderError::UnknownConverter {
                    name: name.clone(),
                    location: format!("{location}.convert"),
                })?;
            field.set_shared_converter(converter);
        }

        Ok(field)
    }
}

/// One schema level in document form
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaDocument {
    #[serde(default)]
    pub options: Option<ImportOptions>,
    #[serde(default)]
    pub fields: Entries<FieldDocument>,
    #[serde(default)]
    pub lists: Entries<FieldDocument>,
    #[serde(default)]
    pub objects: Entries<SchemaDocument>,
    #[serde(default)]
    pub object_lists: Entries<SchemaDocument>,
}

impl SchemaDocument {
    /// Interpret a parsed document; `path` is only used in errors
    pub fn from_value(value: Value, path: &Path) -> LoaderResult<Self> {
        serde_json::from_value(value).map_err(|e| LoaderError::InvalidSchema {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Root-level import options, or the defaults
    pub fn import_options(&self) -> ImportOptions {
        self.options.unwrap_or_default()
    }

    /// Build the schema tree, resolving strategy names against `registry`
    pub fn compile(&self, registry: &StrategyRegistry) -> LoaderResult<SchemaNode> {
        self.compile_at(registry, "<root>")
    }

    fn compile_at(&self, registry: &StrategyRegistry, location: &str) -> LoaderResult<SchemaNode> {
        let mut builder = SchemaBuilder::new();

        for (name, field) in self.fields.iter() {
            let at = format!("{location}.fields.{name}");
            builder = builder.scalar(name, field.compile(registry, &at)?);
        }
        for (name, field) in self.lists.iter() {
            let at = format!("{location}.lists.{name}");
            builder = builder.scalar_list(name, field.compile(registry, &at)?);
        }
        for (name, child) in self.objects.iter() {
            let at = format!("{location}.objects.{name}");
            builder = builder.object(name, child.compile_nested(registry, &at)?);
        }
        for (name, child) in self.object_lists.iter() {
            let at = format!("{location}.object_lists.{name}");
            builder = builder.object_list(name, child.compile_nested(registry, &at)?);
        }

        builder.build().map_err(|e| LoaderError::SchemaError {
            location: location.to_string(),
            reason: e.to_string(),
        })
    }

    fn compile_nested(&self, registry: &StrategyRegistry, location: &str) -> LoaderResult<SchemaNode> {
        if self.options.is_some() {
            return Err(LoaderError::SchemaError {
                location: location.to_string(),
                reason: "options are only allowed at the root level".to_string(),
            });
        }
        self.compile_at(registry, location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use strictimport_core::import;

    fn compile(value: Value) -> LoaderResult<SchemaNode> {
        SchemaDocument::from_value(value, Path::new("inline"))?.compile(&StrategyRegistry::new())
    }

    #[test]
    fn test_compile_all_sections() {
        let schema = compile(json!({
            "fields": {
                "name": {"mandatory": true},
                "daily": {"default": "04:00:00", "validate": "time", "convert": "time_to_seconds"}
            },
            "lists": {"sports": {"mandatory": true}},
            "objects": {"retention": {"fields": {"days": {"default": 365}}}},
            "object_lists": {"jobs": {"fields": {"command": {"mandatory": true}}}}
        }))
        .unwrap();

        assert!(schema.scalar("name").unwrap().is_mandatory());
        assert!(schema.scalar("daily").unwrap().has_converter());
        assert!(schema.scalar_list("sports").is_some());
        assert!(schema.object("retention").unwrap().scalar("days").unwrap().has_default());
        assert!(schema.object_list("jobs").is_some());
        assert_eq!(schema.depth(), 2);
    }

    #[test]
    fn test_compiled_schema_imports() {
        let schema = compile(json!({
            "fields": {
                "daily": {"default": "01:00:00", "validate": "time", "convert": "time_to_seconds"},
                "color": {"validate": {"one_of": ["red", "green"]}}
            }
        }))
        .unwrap();

        let input = json!({"color": "red"}).as_object().cloned().unwrap();
        let output = import(&input, &schema).unwrap();
        assert_eq!(output.get("daily"), Some(&json!(3600)));
        assert_eq!(output.get("color"), Some(&json!("red")));

        let input = json!({"color": "blue"}).as_object().cloned().unwrap();
        let err = import(&input, &schema).unwrap_err();
        assert_eq!(err.path, r#"["color"]"#);
    }

    #[test]
    fn test_declaration_order_kept() {
        let schema = compile(json!({"fields": {"zeta": null, "alpha": null, "mid": {}}})).unwrap();
        let names: Vec<&str> = strictimport_core::ImportModel::scalars(&schema)
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_unknown_strategy_names() {
        let err = compile(json!({"objects": {"retention": {"fields": {"daily": {"validate": "clock"}}}}}))
            .unwrap_err();
        match err {
            LoaderError::UnknownValidator { name, location } => {
                assert_eq!(name, "clock");
                assert_eq!(location, "<root>.objects.retention.fields.daily.validate");
            }
            other => panic!("unexpected error: {other}"),
        }

        let err = compile(json!({"fields": {"a": {"convert": "upper"}}})).unwrap_err();
        assert!(matches!(err, LoaderError::UnknownConverter { .. }));
    }

    #[test]
    fn test_invalid_documents() {
        let err = compile(json!({"scalars": {}})).unwrap_err();
        assert!(matches!(err, LoaderError::InvalidSchema { .. }));

        let err = compile(json!({"fields": {"a": {"required": true}}})).unwrap_err();
        assert!(matches!(err, LoaderError::InvalidSchema { .. }));

        let err = compile(json!({"fields": {"a": {"validate": {"pattern": "("}}}})).unwrap_err();
        assert!(matches!(err, LoaderError::SchemaError { .. }));
    }

    #[test]
    fn test_duplicate_name_across_sections() {
        let err = compile(json!({"fields": {"a": {}}, "lists": {"a": {}}})).unwrap_err();
        match err {
            LoaderError::SchemaError { location, .. } => assert_eq!(location, "<root>"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_options_only_at_root() {
        let document = SchemaDocument::from_value(
            json!({"options": {"ignore_null_unexpected": false}}),
            Path::new("inline"),
        )
        .unwrap();
        assert!(!document.import_options().ignore_null_unexpected);
        assert!(document.import_options().synthesize_absent_list_element);

        let err = compile(json!({"objects": {"a": {"options": {}}}})).unwrap_err();
        assert!(matches!(err, LoaderError::SchemaError { .. }));
    }
}
