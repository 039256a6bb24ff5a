use serde::{Deserialize, Serialize};

use super::entity::TreeEntity;

/// A row with its materialized subtree. Serializes as the row's own fields
/// plus a `children` array (empty for leaves, never null).
#[derive(Debug, Clone, Serialize)]
pub struct NestedNode<T> {
    #[serde(flatten)]
    pub node: T,
    pub children: Vec<NestedNode<T>>,
}

impl<T: TreeEntity> NestedNode<T> {
    pub fn leaf(node: T) -> Self {
        Self { node, children: Vec::new() }
    }

    /// Number of nodes in this subtree, itself included.
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(NestedNode::size).sum::<usize>()
    }

    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(NestedNode::depth).max().unwrap_or(0)
    }

    /// Pre-order walk over every node of the subtree.
    pub fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(std::iter::once(&self.node).chain(self.children.iter().flat_map(|c| c.iter())))
    }

    pub fn child_slugs(&self) -> Vec<&str> {
        self.children.iter().map(|c| c.node.slug()).collect()
    }
}

/// Read options accepted by the listing and lookup operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct TreeQuery {
    /// Levels of children to attach below each returned node; unbounded when absent.
    pub depth: Option<usize>,
}

impl TreeQuery {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn with_depth(depth: usize) -> Self {
        Self { depth: Some(depth) }
    }
}
