//! File-level entry points: load schemas and inputs, then import
//!
//! Copyright (c) 2025 Strictimport Team
//! Licensed under the Apache-2.0 license

use crate::document::SchemaDocument;
use crate::error::{LoaderError, LoaderResult};
use crate::parser::{DocumentParser, Format};
use crate::registry::StrategyRegistry;
use std::path::Path;
use strictimport_core::{Import, ImportOptions, RawInput, SchemaNode};
use tracing::{debug, info};

/// A compiled schema together with the options its document declared
#[derive(Debug, Clone)]
pub struct LoadedSchema {
    pub schema: SchemaNode,
    pub options: ImportOptions,
}

impl LoadedSchema {
    /// Import `input` against this schema with the declared options
    pub fn import(&self, input: &RawInput) -> strictimport_core::ImportResult<RawInput> {
        Import::new(input, &self.schema)
            .with_options(self.options)
            .into_result()
    }
}

/// Loads schema documents and input documents from disk
#[derive(Debug, Default)]
pub struct SchemaLoader {
    parser: DocumentParser,
    registry: StrategyRegistry,
}

impl SchemaLoader {
    /// Loader with the built-in strategies registered
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registry(registry: StrategyRegistry) -> Self {
        Self {
            parser: DocumentParser::new(),
            registry,
        }
    }

    pub fn registry(&self) -> &StrategyRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut StrategyRegistry {
        &mut self.registry
    }

    /// Load and compile a schema document file
    pub fn load_schema_file(&self, path: &Path) -> LoaderResult<LoadedSchema> {
        let value = self.parser.parse_file(path)?;
        let loaded = self.compile(SchemaDocument::from_value(value, path)?)?;
        info!(
            path = %path.display(),
            entries = loaded.schema.len(),
            depth = loaded.schema.depth(),
            "loaded schema"
        );
        Ok(loaded)
    }

    /// Load and compile schema document text
    pub fn load_schema_str(&self, content: &str, format: Format) -> LoaderResult<LoadedSchema> {
        let path = Path::new("<inline>");
        let value = self.parser.parse_content(content, format, path)?;
        self.compile(SchemaDocument::from_value(value, path)?)
    }

    fn compile(&self, document: SchemaDocument) -> LoaderResult<LoadedSchema> {
        Ok(LoadedSchema {
            schema: document.compile(&self.registry)?,
            options: document.import_options(),
        })
    }

    /// Load an input document; its root must be a mapping
    pub fn load_input_file(&self, path: &Path) -> LoaderResult<RawInput> {
        self.parser.parse_mapping_file(path)
    }

    /// Load standalone import options; missing keys keep their defaults
    pub fn load_options_file(&self, path: &Path) -> LoaderResult<ImportOptions> {
        let value = self.parser.parse_file(path)?;
        let options = serde_json::from_value(value).map_err(|e| LoaderError::InvalidSchema {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        debug!(path = %path.display(), ?options, "loaded import options");
        Ok(options)
    }

    /// Load `input_path` and import it against the schema at `schema_path`
    pub fn import_file(&self, input_path: &Path, schema_path: &Path) -> LoaderResult<RawInput> {
        let loaded = self.load_schema_file(schema_path)?;
        let input = self.load_input_file(input_path)?;
        debug!(
            input = %input_path.display(),
            keys = input.len(),
            "importing input document"
        );
        loaded.import(&input).map_err(|source| LoaderError::Import {
            path: input_path.to_path_buf(),
            source,
        })
    }
}

/// Import one input file against one schema file with built-in strategies
pub fn import_file(input_path: impl AsRef<Path>, schema_path: impl AsRef<Path>) -> LoaderResult<RawInput> {
    SchemaLoader::new().import_file(input_path.as_ref(), schema_path.as_ref())
}
