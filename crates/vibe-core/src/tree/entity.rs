use std::fmt;

use serde::Serialize;
use uuid::Uuid;

use super::policy::TreePolicy;

/// The entity families stored as parent-linked trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    OrganizationNode,
    MenuItem,
    DanceStyle,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::OrganizationNode => "OrganizationNode",
            EntityKind::MenuItem => "MenuItem",
            EntityKind::DanceStyle => "DanceStyle",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What happens to direct children when their parent row is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnParentDelete {
    /// Children become roots.
    SetNull,
    /// The whole subtree goes with the parent.
    Cascade,
}

/// A row of a self-referencing table.
///
/// `parent_id` is an id reference into the same table, never an owning
/// pointer; the forest invariant is kept by the write path.
pub trait TreeEntity: Clone + fmt::Debug + Serialize + Send + Sync + 'static {
    const KIND: EntityKind;
    const ON_PARENT_DELETE: OnParentDelete;

    fn id(&self) -> Uuid;
    fn slug(&self) -> &str;
    fn name(&self) -> &str;
    fn parent_id(&self) -> Option<Uuid>;
    fn set_parent_id(&mut self, parent_id: Option<Uuid>);

    fn policy() -> TreePolicy<Self>;

    fn is_root(&self) -> bool {
        self.parent_id().is_none()
    }
}
