//! Import engine implementation
//!
//! Copyright (c) 2025 Strictimport Team
//! Licensed under the Apache-2.0 license

use super::options::ImportOptions;
use super::path::ErrorPath;
use crate::error::{FieldError, ImportError, ImportResult};
use crate::field::FieldDescriptor;
use crate::schema::ImportModel;
use crate::value::{is_composite, is_no_value, is_scalar, scalar_text, RawInput};
use serde_json::Value;
use tracing::{debug, trace, warn};

/// Observable lifecycle of an [`Import`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportState {
    Unresolved,
    Resolving,
    Resolved,
    Failed,
}

/// Imports one level of raw input against one schema level.
///
/// The engine only reads its input. Resolution runs once; later calls to
/// [`resolve`](Self::resolve) return the cached output, or the cached error,
/// without invoking validators or converters again.
///
/// ```
/// use strictimport_core::{FieldDescriptor, Import, SchemaBuilder};
/// use serde_json::json;
///
/// let schema = SchemaBuilder::new()
///     .scalar("name", FieldDescriptor::mandatory())
///     .scalar("species", FieldDescriptor::mandatory())
///     .build()
///     .unwrap();
///
/// let input = json!({"name": "Maggie", "species": "Magpie"});
/// let mut import = Import::from_value(&input, &schema).unwrap();
/// assert_eq!(&json!(import.resolve().unwrap()), &input);
/// ```
pub struct Import<'a> {
    input: &'a RawInput,
    model: &'a dyn ImportModel,
    path: ErrorPath,
    options: ImportOptions,
    resolving: bool,
    outcome: Option<ImportResult<RawInput>>,
}

impl<'a> Import<'a> {
    pub fn new(input: &'a RawInput, model: &'a dyn ImportModel) -> Self {
        Self::nested(input, model, ErrorPath::root(), ImportOptions::default())
    }

    /// Import from an untyped value, which must be a mapping
    pub fn from_value(input: &'a Value, model: &'a dyn ImportModel) -> ImportResult<Self> {
        match input {
            Value::Object(map) => Ok(Self::new(map, model)),
            _ => Err(ImportError::not_object("")),
        }
    }

    pub fn with_options(mut self, options: ImportOptions) -> Self {
        self.options = options;
        self
    }

    fn nested(
        input: &'a RawInput,
        model: &'a dyn ImportModel,
        path: ErrorPath,
        options: ImportOptions,
    ) -> Self {
        Self {
            input,
            model,
            path,
            options,
            resolving: false,
            outcome: None,
        }
    }

    /// A run interrupted by a panicking strategy reports `Resolving` until
    /// the next call to [`resolve`](Self::resolve) starts it over.
    pub fn state(&self) -> ImportState {
        match (&self.outcome, self.resolving) {
            (Some(Ok(_)), _) => ImportState::Resolved,
            (Some(Err(_)), _) => ImportState::Failed,
            (None, true) => ImportState::Resolving,
            (None, false) => ImportState::Unresolved,
        }
    }

    pub fn path(&self) -> &ErrorPath {
        &self.path
    }

    pub fn options(&self) -> &ImportOptions {
        &self.options
    }

    /// Resolve the input, or return the result of an earlier resolution
    pub fn resolve(&mut self) -> ImportResult<&RawInput> {
        match self.settle() {
            Ok(output) => Ok(&*output),
            Err(error) => Err(error.clone()),
        }
    }

    /// Resolve and hand over the output
    pub fn into_result(mut self) -> ImportResult<RawInput> {
        match self.outcome.take() {
            Some(outcome) => outcome,
            None => self.execute(),
        }
    }

    fn settle(&mut self) -> &mut ImportResult<RawInput> {
        let outcome = match self.outcome.take() {
            Some(outcome) => outcome,
            None => self.execute(),
        };
        self.outcome.insert(outcome)
    }

    fn execute(&mut self) -> ImportResult<RawInput> {
        self.resolving = true;
        let outcome = self.run();
        self.resolving = false;
        if let Err(error) = &outcome {
            debug!(path = %self.path, error = %error, "import failed");
        }
        outcome
    }

    fn run(&self) -> ImportResult<RawInput> {
        debug!(
            path = %self.path,
            input_keys = self.input.len(),
            "resolving import level"
        );
        let mut output = RawInput::new();
        self.import_scalars(&mut output)?;
        self.import_scalar_lists(&mut output)?;
        self.import_objects(&mut output)?;
        self.import_object_lists(&mut output)?;
        self.check_unexpected(&output)?;
        debug!(path = %self.path, output_keys = output.len(), "import level resolved");
        Ok(output)
    }

    fn import_scalars(&self, output: &mut RawInput) -> ImportResult<()> {
        for (name, field) in self.model.scalars() {
            let path = self.path.child(name);
            let raw = self.input.get(name);
            let resolved = field
                .apply(raw)
                .map_err(|e| ImportError::from_field(path.to_string(), &e))?;
            match resolved {
                Some(value) => {
                    if is_no_value(raw) {
                        debug!(path = %path, "default applied");
                    }
                    trace!(path = %path, "scalar resolved");
                    output.insert(name.to_string(), value);
                }
                None => trace!(path = %path, "optional scalar omitted"),
            }
        }
        Ok(())
    }

    fn import_scalar_lists(&self, output: &mut RawInput) -> ImportResult<()> {
        for (name, field) in self.model.scalar_lists() {
            let path = self.path.child(name);
            let raw = self.input.get(name);

            if is_no_value(raw) {
                if let Some(element) = Self::default_element(field, &path)? {
                    debug!(path = %path, "default applied to empty list");
                    output.insert(name.to_string(), Value::Array(vec![element]));
                }
                continue;
            }

            let items = match raw {
                Some(Value::Array(items)) => items,
                _ => return Err(ImportError::not_array(path.to_string())),
            };
            let element_path = path.element().to_string();
            let resolved = items
                .iter()
                .map(|item| {
                    field
                        .finish(item.clone())
                        .map_err(|e| ImportError::from_field(element_path.clone(), &e))
                })
                .collect::<ImportResult<Vec<_>>>()?;
            trace!(path = %path, elements = resolved.len(), "scalar list resolved");
            output.insert(name.to_string(), Value::Array(resolved));
        }
        Ok(())
    }

    /// Zero or one element for a list that received no values
    fn default_element(field: &FieldDescriptor, path: &ErrorPath) -> ImportResult<Option<Value>> {
        let default = match field.resolve(None) {
            Ok(default) => default,
            Err(FieldError::Mandatory) => return Err(ImportError::mandatory_list(path.to_string())),
            Err(other) => return Err(ImportError::from_field(path.to_string(), &other)),
        };
        default
            .map(|value| {
                field
                    .finish(value)
                    .map_err(|e| ImportError::from_field(path.element().to_string(), &e))
            })
            .transpose()
    }

    fn import_objects(&self, output: &mut RawInput) -> ImportResult<()> {
        let empty = RawInput::new();
        for (name, child) in self.model.objects() {
            let path = self.path.child(name);
            let raw = self.input.get(name);

            let sub = if is_no_value(raw) {
                &empty
            } else {
                match raw {
                    Some(Value::Object(map)) => map,
                    _ => return Err(ImportError::not_object(path.to_string())),
                }
            };

            let resolved = Import::nested(sub, child, path.clone(), self.options).into_result()?;
            // An absent, entirely optional block disappears instead of showing up as {}.
            if is_no_value(raw) && resolved.is_empty() {
                trace!(path = %path, "optional object omitted");
                continue;
            }
            output.insert(name.to_string(), Value::Object(resolved));
        }
        Ok(())
    }

    fn import_object_lists(&self, output: &mut RawInput) -> ImportResult<()> {
        let empty = RawInput::new();
        for (name, child) in self.model.object_lists() {
            let path = self.path.child(name);
            let element_path = path.element();
            let raw = self.input.get(name);

            if is_no_value(raw) {
                let resolved =
                    Import::nested(&empty, child, element_path, self.options).into_result()?;
                if resolved.is_empty() {
                    trace!(path = %path, "optional object list omitted");
                } else if self.options.synthesize_absent_list_element {
                    warn!(path = %path, "absent object list replaced by one defaulted element");
                    output.insert(name.to_string(), Value::Array(vec![Value::Object(resolved)]));
                }
                continue;
            }

            let items = match raw {
                Some(Value::Array(items)) => items,
                _ => return Err(ImportError::not_array(path.to_string())),
            };
            let mut resolved = Vec::with_capacity(items.len());
            for item in items {
                let sub = match item {
                    Value::Object(map) => map,
                    other if is_no_value(Some(other)) => &empty,
                    _ => return Err(ImportError::not_object(element_path.to_string())),
                };
                let element =
                    Import::nested(sub, child, element_path.clone(), self.options).into_result()?;
                resolved.push(Value::Object(element));
            }
            trace!(path = %path, elements = resolved.len(), "object list resolved");
            output.insert(name.to_string(), Value::Array(resolved));
        }
        Ok(())
    }

    /// Every input key that did not make it into `output` is rejected,
    /// declared or not. Null values are skipped unless the options say otherwise.
    fn check_unexpected(&self, output: &RawInput) -> ImportResult<()> {
        for (key, value) in self.input {
            if output.contains_key(key) {
                continue;
            }
            let path = self.path.child(key).to_string();
            if is_scalar(value) {
                let text = scalar_text(value).unwrap_or_default();
                return Err(ImportError::unexpected_scalar(path, &text));
            }
            if is_composite(value) || !self.options.ignore_null_unexpected {
                return Err(ImportError::unexpected(path));
            }
            trace!(path = %path, "unconsumed null key tolerated");
        }
        Ok(())
    }
}

/// Import `input` against `model` with default options
pub fn import(input: &RawInput, model: &dyn ImportModel) -> ImportResult<RawInput> {
    Import::new(input, model).into_result()
}
