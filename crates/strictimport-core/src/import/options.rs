//! Import configuration
//!
//! Copyright (c) 2025 Strictimport Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};

/// Behavior switches for an import; nested levels inherit them.
///
/// The defaults reproduce the historical behavior of the importer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportOptions {
    /// When an object list is absent but its schema resolves to a non-empty
    /// mapping from empty input (every field defaulted), emit that mapping as
    /// a one-element list. When false, the absent list is always omitted.
    pub synthesize_absent_list_element: bool,
    /// Tolerate null-valued input keys that are left out of the output,
    /// whether declared or not
    pub ignore_null_unexpected: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            synthesize_absent_list_element: true,
            ignore_null_unexpected: true,
        }
    }
}

impl ImportOptions {
    /// Historical behavior; same as `default()`
    pub fn compatible() -> Self {
        Self::default()
    }

    /// No synthesized list elements, no tolerated null keys
    pub fn strict() -> Self {
        Self {
            synthesize_absent_list_element: false,
            ignore_null_unexpected: false,
        }
    }

    pub fn with_synthesize_absent_list_element(mut self, enabled: bool) -> Self {
        self.synthesize_absent_list_element = enabled;
        self
    }

    pub fn with_ignore_null_unexpected(mut self, enabled: bool) -> Self {
        self.ignore_null_unexpected = enabled;
        self
    }
}
