//! Declarative description of expected input structure
//!
//! A [`SchemaNode`] describes one nesting level through four named
//! collections: scalars, scalar lists, nested objects and lists of nested
//! objects. The import engine reads schemas through the [`ImportModel`]
//! trait, so schemas produced by other sources can be plugged in.
//!
//! Copyright (c) 2025 Strictimport Team
//! Licensed under the Apache-2.0 license

pub mod builder;
pub mod node;

pub use builder::SchemaBuilder;
pub use node::{ImportModel, SchemaNode};
