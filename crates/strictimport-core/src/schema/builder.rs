//! Fluent builder for schema nodes
//!
//! Copyright (c) 2025 Strictimport Team
//! Licensed under the Apache-2.0 license

use super::node::SchemaNode;
use crate::error::{SchemaError, SchemaResult};
use crate::field::FieldDescriptor;
use std::collections::HashSet;

/// Builder for one [`SchemaNode`] level.
///
/// A name may appear in only one of the four collections; [`build`](Self::build)
/// reports the first duplicate.
///
/// ```
/// use strictimport_core::{FieldDescriptor, SchemaBuilder};
///
/// let retention = SchemaBuilder::new()
///     .scalar("daily", FieldDescriptor::optional().with_default(365))
///     .build()
///     .unwrap();
///
/// let schema = SchemaBuilder::new()
///     .scalar("source", FieldDescriptor::mandatory())
///     .scalar("target", FieldDescriptor::mandatory())
///     .object("retention", retention)
///     .build()
///     .unwrap();
///
/// assert_eq!(schema.len(), 3);
/// ```
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    node: SchemaNode,
    seen: HashSet<String>,
    error: Option<SchemaError>,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn claim(&mut self, name: &str) -> bool {
        if self.error.is_some() {
            return false;
        }
        if name.is_empty() {
            self.error = Some(SchemaError::EmptyName);
            return false;
        }
        if !self.seen.insert(name.to_string()) {
            self.error = Some(SchemaError::DuplicateName {
                name: name.to_string(),
            });
            return false;
        }
        true
    }

    /// Declare a single-value field
    pub fn scalar(mut self, name: impl Into<String>, field: FieldDescriptor) -> Self {
        let name = name.into();
        if self.claim(&name) {
            self.node.scalars.push((name, field));
        }
        self
    }

    /// Declare a list of scalar values governed by one descriptor
    pub fn scalar_list(mut self, name: impl Into<String>, field: FieldDescriptor) -> Self {
        let name = name.into();
        if self.claim(&name) {
            self.node.scalar_lists.push((name, field));
        }
        self
    }

    /// Declare a nested mapping
    pub fn object(mut self, name: impl Into<String>, schema: SchemaNode) -> Self {
        let name = name.into();
        if self.claim(&name) {
            self.node.objects.push((name, schema));
        }
        self
    }

    /// Declare a list of nested mappings
    pub fn object_list(mut self, name: impl Into<String>, schema: SchemaNode) -> Self {
        let name = name.into();
        if self.claim(&name) {
            self.node.object_lists.push((name, schema));
        }
        self
    }

    pub fn build(self) -> SchemaResult<SchemaNode> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.node),
        }
    }
}
