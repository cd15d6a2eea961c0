//! Schema node and the model trait the engine consumes
//!
//! Copyright (c) 2025 Strictimport Team
//! Licensed under the Apache-2.0 license

use crate::field::FieldDescriptor;

/// Read access to one level of schema.
///
/// Names are yielded in declaration order; resolution and error reporting
/// follow that order.
pub trait ImportModel: Send + Sync {
    /// Single-value fields
    fn scalars(&self) -> Vec<(&str, &FieldDescriptor)>;

    /// Fields holding a sequence of scalar values, each resolved by the descriptor
    fn scalar_lists(&self) -> Vec<(&str, &FieldDescriptor)>;

    /// Fields holding one nested mapping
    fn objects(&self) -> Vec<(&str, &dyn ImportModel)>;

    /// Fields holding a sequence of nested mappings sharing one model
    fn object_lists(&self) -> Vec<(&str, &dyn ImportModel)>;
}

/// Immutable schema tree built by [`SchemaBuilder`](super::SchemaBuilder)
#[derive(Debug, Clone, Default)]
pub struct SchemaNode {
    pub(crate) scalars: Vec<(String, FieldDescriptor)>,
    pub(crate) scalar_lists: Vec<(String, FieldDescriptor)>,
    pub(crate) objects: Vec<(String, SchemaNode)>,
    pub(crate) object_lists: Vec<(String, SchemaNode)>,
}

impl SchemaNode {
    pub fn scalar(&self, name: &str) -> Option<&FieldDescriptor> {
        find(&self.scalars, name)
    }

    pub fn scalar_list(&self, name: &str) -> Option<&FieldDescriptor> {
        find(&self.scalar_lists, name)
    }

    pub fn object(&self, name: &str) -> Option<&SchemaNode> {
        find(&self.objects, name)
    }

    pub fn object_list(&self, name: &str) -> Option<&SchemaNode> {
        find(&self.object_lists, name)
    }

    /// Number of names declared at this level
    pub fn len(&self) -> usize {
        self.scalars.len() + self.scalar_lists.len() + self.objects.len() + self.object_lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Deepest nesting below and including this node
    pub fn depth(&self) -> usize {
        1 + self
            .objects
            .iter()
            .chain(self.object_lists.iter())
            .map(|(_, child)| child.depth())
            .max()
            .unwrap_or(0)
    }
}

fn find<'a, T>(entries: &'a [(String, T)], name: &str) -> Option<&'a T> {
    entries.iter().find(|(n, _)| n == name).map(|(_, entry)| entry)
}

impl ImportModel for SchemaNode {
    fn scalars(&self) -> Vec<(&str, &FieldDescriptor)> {
        self.scalars.iter().map(|(n, f)| (n.as_str(), f)).collect()
    }

    fn scalar_lists(&self) -> Vec<(&str, &FieldDescriptor)> {
        self.scalar_lists.iter().map(|(n, f)| (n.as_str(), f)).collect()
    }

    fn objects(&self) -> Vec<(&str, &dyn ImportModel)> {
        self.objects
            .iter()
            .map(|(n, child)| (n.as_str(), child as &dyn ImportModel))
            .collect()
    }

    fn object_lists(&self) -> Vec<(&str, &dyn ImportModel)> {
        self.object_lists
            .iter()
            .map(|(n, child)| (n.as_str(), child as &dyn ImportModel))
            .collect()
    }
}
