//! Error types for document loading
//!
//! Copyright (c) 2025 Strictimport Team
//! Licensed under the Apache-2.0 license

use std::path::PathBuf;
use strictimport_core::ImportError;
use thiserror::Error;

/// Result type for loader operations
pub type LoaderResult<T> = Result<T, LoaderError>;

/// Errors raised while loading input, options or schema documents
#[derive(Error, Debug)]
pub enum LoaderError {
    /// File I/O errors
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// YAML parsing errors
    #[error("Failed to parse YAML file '{path}': {source}")]
    YamlParseError {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// JSON parsing errors
    #[error("Failed to parse JSON file '{path}': {source}")]
    JsonParseError {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// TOML parsing errors
    #[error("Failed to parse TOML file '{path}': {source}")]
    TomlParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Unsupported file format
    #[error("Unsupported file format for '{path}'. Expected .yaml, .yml, .json or .toml")]
    UnsupportedFormat { path: PathBuf },

    /// Document parsed but does not have the expected top-level shape
    #[error("Document '{path}' must be a mapping at the root level")]
    NotAMapping { path: PathBuf },

    /// Schema or options document does not have the expected structure
    #[error("Invalid document '{path}': {reason}")]
    InvalidSchema { path: PathBuf, reason: String },

    /// Schema document references a validator nobody registered
    #[error("Unknown validator '{name}' at {location}")]
    UnknownValidator { name: String, location: String },

    /// Schema document references a converter nobody registered
    #[error("Unknown converter '{name}' at {location}")]
    UnknownConverter { name: String, location: String },

    /// Schema document produced an invalid schema tree
    #[error("Invalid schema at {location}: {reason}")]
    SchemaError { location: String, reason: String },

    /// Loaded input was rejected by the importer
    #[error("Import of '{path}' failed: {source}")]
    Import {
        path: PathBuf,
        #[source]
        source: ImportError,
    },
}

impl LoaderError {
    pub fn io_error(path: PathBuf, source: std::io::Error) -> Self {
        Self::IoError { path, source }
    }

    pub fn yaml_parse_error(path: PathBuf, source: serde_yaml::Error) -> Self {
        Self::YamlParseError { path, source }
    }

    pub fn json_parse_error(path: PathBuf, source: serde_json::Error) -> Self {
        Self::JsonParseError { path, source }
    }

    pub fn toml_parse_error(path: PathBuf, source: toml::de::Error) -> Self {
        Self::TomlParseError { path, source }
    }

    pub fn unsupported_format(path: PathBuf) -> Self {
        Self::UnsupportedFormat { path }
    }

    /// The import error, if the loader failed while importing
    pub fn as_import_error(&self) -> Option<&ImportError> {
        match self {
            Self::Import { source, .. } => Some(source),
            _ => None,
        }
    }
}
