//! Hierarchical read-model shared by every self-referencing entity.
//!
//! Rows live in a flat, parent-linked table addressed by id. Nesting is
//! derived at read time by [`TreeMaterializer`] according to each entity's
//! [`TreePolicy`].

pub mod entity;
pub mod policy;
pub mod nested;
pub mod materializer;

pub use entity::{EntityKind, OnParentDelete, TreeEntity};
pub use materializer::TreeMaterializer;
pub use nested::{NestedNode, TreeQuery};
pub use policy::{OrderKey, TreePolicy};
