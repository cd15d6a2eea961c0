//! Error types for accessing and importing raw input
//!
//! The accessor layer reports its own distinct error kinds. Everything that
//! goes wrong during an import is reported as a single [`ImportError`] carrying
//! the path-qualified message.
//!
//! Copyright (c) 2025 Strictimport Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Failure reported by a validator strategy
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidateError {
    pub message: String,
}

impl ValidateError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Failure reported by a converter strategy
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ConvertError {
    pub message: String,
}

impl ConvertError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Failure while resolving a single field through its descriptor
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// No value, no default, and the field is mandatory
    #[error("value is mandatory")]
    Mandatory,

    /// The attached validator rejected the resolved value
    #[error(transparent)]
    Validation(#[from] ValidateError),

    /// The attached converter could not transform the value
    #[error(transparent)]
    Conversion(#[from] ConvertError),
}

/// Errors raised by the leaf value [`Accessor`](crate::Accessor)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// Key is absent and no default was supplied
    #[error("key {key} not available in array")]
    NotFound { key: String },

    /// Value present but of the wrong runtime kind
    #[error("{message}")]
    TypeMismatch { key: String, message: String },

    /// Value of a plausible kind that cannot be parsed into the target
    #[error("{message}")]
    Conversion { key: String, message: String },

    /// Field descriptor rejected the fetched value
    #[error("key {key}: {source}")]
    Field {
        key: String,
        #[source]
        source: FieldError,
    },
}

impl AccessError {
    pub(crate) fn not_found(key: &str) -> Self {
        Self::NotFound {
            key: key.to_string(),
        }
    }

    pub(crate) fn type_mismatch(key: &str, message: impl Into<String>) -> Self {
        Self::TypeMismatch {
            key: key.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn conversion(key: &str, message: impl Into<String>) -> Self {
        Self::Conversion {
            key: key.to_string(),
            message: message.into(),
        }
    }

    /// The key the failing lookup was made with
    pub fn key(&self) -> &str {
        match self {
            Self::NotFound { key }
            | Self::TypeMismatch { key, .. }
            | Self::Conversion { key, .. }
            | Self::Field { key, .. } => key,
        }
    }
}

/// Result type for accessor operations
pub type AccessResult<T> = Result<T, AccessError>;

/// Kinds of import failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImportErrorKind {
    /// Mandatory field without value or default
    MandatoryMissing,
    /// A validator rejected a resolved value
    Validation,
    /// A converter failed on a resolved value
    Conversion,
    /// Input contains a key the schema does not declare
    UnexpectedKey,
    /// A list or object field holds a value of the wrong shape
    Shape,
}

impl fmt::Display for ImportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::MandatoryMissing => "mandatory missing",
            Self::Validation => "validation",
            Self::Conversion => "conversion",
            Self::UnexpectedKey => "unexpected key",
            Self::Shape => "shape",
        };
        f.write_str(name)
    }
}

/// The single error kind surfaced by an import.
///
/// `path` is the rendered location of the offending field, e.g.
/// `["jobs"][]["source"]`; `message` is the full human-readable text.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ImportError {
    pub kind: ImportErrorKind,
    pub path: String,
    pub message: String,
}

impl ImportError {
    fn new(kind: ImportErrorKind, path: String, message: String) -> Self {
        Self {
            kind,
            path,
            message,
        }
    }

    /// Scalar field without value, default, and marked mandatory
    pub fn mandatory(path: impl Into<String>) -> Self {
        let path = path.into();
        let message = format!("{} is missing from array", path);
        Self::new(ImportErrorKind::MandatoryMissing, path, message)
    }

    /// Mandatory scalar list that received no elements
    pub fn mandatory_list(path: impl Into<String>) -> Self {
        let path = format!("{}[]", path.into());
        let message = format!("{} is mandatory, needs to contain at least one value", path);
        Self::new(ImportErrorKind::MandatoryMissing, path, message)
    }

    pub fn validation(path: impl Into<String>, source: &ValidateError) -> Self {
        let path = path.into();
        let message = format!("Validation failed for {}: {}", path, source);
        Self::new(ImportErrorKind::Validation, path, message)
    }

    pub fn conversion(path: impl Into<String>, source: &ConvertError) -> Self {
        let path = path.into();
        let message = format!("Conversion failed for {}: {}", path, source);
        Self::new(ImportErrorKind::Conversion, path, message)
    }

    /// Translate a field resolution failure at `path`
    pub fn from_field(path: impl Into<String>, source: &FieldError) -> Self {
        match source {
            FieldError::Mandatory => Self::mandatory(path),
            FieldError::Validation(e) => Self::validation(path, e),
            FieldError::Conversion(e) => Self::conversion(path, e),
        }
    }

    pub fn not_array(path: impl Into<String>) -> Self {
        let path = path.into();
        let message = format!("{} is not an array", path);
        Self::new(ImportErrorKind::Shape, path, message)
    }

    pub fn not_object(path: impl Into<String>) -> Self {
        let path = path.into();
        let message = if path.is_empty() {
            "input is not an object".to_string()
        } else {
            format!("{} is not an object", path)
        };
        Self::new(ImportErrorKind::Shape, path, message)
    }

    /// Undeclared key holding a scalar; the literal value is quoted
    pub fn unexpected_scalar(path: impl Into<String>, value: &str) -> Self {
        let path = path.into();
        let message = format!("{} with value '{}' is not expected in array", path, value);
        Self::new(ImportErrorKind::UnexpectedKey, path, message)
    }

    /// Undeclared key holding a composite or null; no literal is printed
    pub fn unexpected(path: impl Into<String>) -> Self {
        let path = path.into();
        let message = format!("{} is not expected in array", path);
        Self::new(ImportErrorKind::UnexpectedKey, path, message)
    }
}

/// Result type for import operations
pub type ImportResult<T> = Result<T, ImportError>;

/// Errors raised while assembling a schema
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The same name was declared twice at one nesting level
    #[error("name '{name}' is declared more than once at this level")]
    DuplicateName { name: String },

    /// Empty names cannot be addressed in input
    #[error("field names must not be empty")]
    EmptyName,
}

/// Result type for schema construction
pub type SchemaResult<T> = Result<T, SchemaError>;
