//! Strictimport document loading
//!
//! This crate turns files into the inputs [`strictimport_core`] works on:
//!
//! - [`parser`] - JSON, YAML and TOML documents into raw input mappings
//! - [`document`] - declarative schema documents into schema trees
//! - [`registry`] - named validators and converters used by schema documents
//! - [`loader`] - file-level loading and the one-shot [`import_file`] helper
//!
//! # Examples
//!
//! ```
//! use strictimport_schemas::{Format, SchemaLoader};
//! use serde_json::json;
//!
//! let loader = SchemaLoader::new();
//! let loaded = loader
//!     .load_schema_str(
//!         "fields:\n  name: { mandatory: true }\n  daily: { default: '04:00:00', validate: time }\n",
//!         Format::Yaml,
//!     )
//!     .unwrap();
//!
//! let input = json!({"name": "backup"}).as_object().cloned().unwrap();
//! let output = loaded.import(&input).unwrap();
//! assert_eq!(output["daily"], json!("04:00:00"));
//! ```
//!
//! Copyright (c) 2025 Strictimport Team
//! Licensed under the Apache-2.0 license

pub mod document;
pub mod error;
pub mod loader;
pub mod parser;
pub mod registry;

pub use document::{FieldDocument, SchemaDocument, ValidatorDocument};
pub use error::{LoaderError, LoaderResult};
pub use loader::{import_file, LoadedSchema, SchemaLoader};
pub use parser::{DocumentParser, Format};
pub use registry::StrategyRegistry;
