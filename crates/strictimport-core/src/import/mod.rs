//! Recursive import engine
//!
//! [`Import`] consumes one level of raw input together with one schema
//! level and produces the cleaned output mapping, recursing into nested
//! objects and object lists with fresh child engines.
//!
//! Resolution order at every level is fixed: scalars, scalar lists, nested
//! objects, nested object lists, then the unexpected-key scan. The first
//! violation aborts the whole import.
//!
//! Copyright (c) 2025 Strictimport Team
//! Licensed under the Apache-2.0 license

pub mod engine;
pub mod options;
pub mod path;

pub use engine::{import, Import, ImportState};
pub use options::ImportOptions;
pub use path::{ErrorPath, PathSegment};
