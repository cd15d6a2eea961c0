//! Strictimport Core - schema-driven import of untyped nested data
//!
//! This crate turns the loosely typed output of a JSON, YAML or TOML parser
//! into a clean nested structure described by a declarative schema. Nothing
//! is silently dropped or coerced: missing mandatory fields, rejected
//! values, wrongly shaped lists and undeclared keys all abort the import
//! with a path-qualified error.
//!
//! ## Features
//!
//! - **Field policies**: mandatory / optional / defaulted fields
//! - **Pluggable strategies**: validators and converters per field, closures included
//! - **Nesting**: nested objects and lists of nested objects, to any depth
//! - **Precise errors**: every failure names its path, e.g. `["jobs"][]["source"]`
//! - **Typed leaf access**: [`Accessor`] for strict single-key extraction
//!
//! ## Quick Start
//!
//! ```rust
//! use strictimport_core::{import, FieldDescriptor, SchemaBuilder};
//! use serde_json::json;
//!
//! let retention = SchemaBuilder::new()
//!     .scalar("daily", FieldDescriptor::optional().with_default(365))
//!     .build()
//!     .unwrap();
//! let schema = SchemaBuilder::new()
//!     .scalar("source", FieldDescriptor::mandatory())
//!     .scalar("target", FieldDescriptor::mandatory())
//!     .object("retention", retention)
//!     .build()
//!     .unwrap();
//!
//! let input = json!({"source": "/home/", "target": "/backup/"});
//! let output = import(input.as_object().unwrap(), &schema).unwrap();
//! assert_eq!(json!(output)["retention"]["daily"], json!(365));
//! ```
//!
//! Copyright (c) 2025 Strictimport Team
//! Licensed under the Apache-2.0 license

pub mod accessor;
pub mod error;
pub mod field;
pub mod import;
pub mod schema;
pub mod strategy;
pub mod value;

// Re-export commonly used types for convenience
pub use accessor::Accessor;
pub use error::{
    AccessError, AccessResult, ConvertError, FieldError, ImportError, ImportErrorKind,
    ImportResult, SchemaError, SchemaResult, ValidateError,
};
pub use field::FieldDescriptor;
pub use import::{import, ErrorPath, Import, ImportOptions, ImportState, PathSegment};
pub use schema::{ImportModel, SchemaBuilder, SchemaNode};
pub use strategy::{Convert, Validate};
pub use value::{is_no_value, RawInput};
