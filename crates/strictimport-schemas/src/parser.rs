//! Parsing of JSON, YAML and TOML documents into raw input
//!
//! Every format is normalized into `serde_json::Value`, keeping the
//! document's key order.
//!
//! Copyright (c) 2025 Strictimport Team
//! Licensed under the Apache-2.0 license

use crate::error::{LoaderError, LoaderResult};
use serde_json::Value;
use std::path::Path;
use strictimport_core::RawInput;
use tracing::debug;

/// Supported document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// YAML format (.yaml, .yml)
    Yaml,
    /// JSON format (.json)
    Json,
    /// TOML format (.toml)
    Toml,
}

impl Format {
    /// Detect format from file extension
    pub fn from_path(path: &Path) -> LoaderResult<Self> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => Ok(Format::Yaml),
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            _ => Err(LoaderError::unsupported_format(path.to_path_buf())),
        }
    }
}

/// Document parser with support for multiple formats
#[derive(Debug, Default)]
pub struct DocumentParser;

impl DocumentParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a file, detecting format from extension
    pub fn parse_file(&self, path: &Path) -> LoaderResult<Value> {
        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| LoaderError::io_error(path.to_path_buf(), e))?;
        debug!(path = %path.display(), ?format, "parsing document");
        self.parse_content(&content, format, path)
    }

    /// Parse content with explicit format; `path` is only used in errors
    pub fn parse_content(&self, content: &str, format: Format, path: &Path) -> LoaderResult<Value> {
        match format {
            Format::Yaml => self.parse_yaml(content, path),
            Format::Json => self.parse_json(content, path),
            Format::Toml => self.parse_toml(content, path),
        }
    }

    pub fn parse_yaml(&self, content: &str, path: &Path) -> LoaderResult<Value> {
        // Parse as YAML first so YAML-specific errors are reported as such
        let yaml_value: serde_yaml::Value = serde_yaml::from_str(content)
            .map_err(|e| LoaderError::yaml_parse_error(path.to_path_buf(), e))?;

        serde_json::to_value(yaml_value)
            .map_err(|e| LoaderError::json_parse_error(path.to_path_buf(), e))
    }

    pub fn parse_json(&self, content: &str, path: &Path) -> LoaderResult<Value> {
        serde_json::from_str(content)
            .map_err(|e| LoaderError::json_parse_error(path.to_path_buf(), e))
    }

    pub fn parse_toml(&self, content: &str, path: &Path) -> LoaderResult<Value> {
        toml::from_str(content).map_err(|e| LoaderError::toml_parse_error(path.to_path_buf(), e))
    }

    /// Parse a file that must hold a mapping at its root
    pub fn parse_mapping_file(&self, path: &Path) -> LoaderResult<RawInput> {
        into_mapping(self.parse_file(path)?, path)
    }

    /// Parse content that must hold a mapping at its root
    pub fn parse_mapping(&self, content: &str, format: Format, path: &Path) -> LoaderResult<RawInput> {
        into_mapping(self.parse_content(content, format, path)?, path)
    }
}

fn into_mapping(value: Value, path: &Path) -> LoaderResult<RawInput> {
    match value {
        Value::Object(map) => Ok(map),
        // An empty YAML document parses as null
        Value::Null => Ok(RawInput::new()),
        _ => Err(LoaderError::NotAMapping {
            path: path.to_path_buf(),
        }),
    }
}
