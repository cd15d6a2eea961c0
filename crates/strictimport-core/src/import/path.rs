//! Error paths
//!
//! Every nesting level contributes one `["name"]` segment. List positions
//! contribute a bare `[]` with no index, so two failing elements of the same
//! list render identically.
//!
//! Copyright (c) 2025 Strictimport Team
//! Licensed under the Apache-2.0 license

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Key(String),
    Element,
}

/// Location of a field from the root of the input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorPath {
    segments: Vec<PathSegment>,
}

impl ErrorPath {
    pub fn root() -> Self {
        Self::default()
    }

    /// Path one key deeper
    pub fn child(&self, key: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Key(key.to_string()));
        Self { segments }
    }

    /// Path into an element of the list at this path
    pub fn element(&self) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Element);
        Self { segments }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for ErrorPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            match segment {
                PathSegment::Key(key) => write!(f, "[\"{}\"]", key)?,
                PathSegment::Element => f.write_str("[]")?,
            }
        }
        Ok(())
    }
}
