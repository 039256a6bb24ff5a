//! Tree repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::DomainError;
use crate::tree::TreeEntity;

/// Row access for one self-referencing table.
///
/// Reads return rows unfiltered and in no particular order; visibility and
/// sibling order are the caller's policy. `delete` applies the entity's
/// [`OnParentDelete`](crate::tree::OnParentDelete) rule to the children.
#[async_trait]
pub trait TreeRepository<T: TreeEntity>: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<T>, DomainError>;
    async fn find_by_slug(&self, slug: &str) -> Result<Option<T>, DomainError>;
    async fn find_roots(&self) -> Result<Vec<T>, DomainError>;
    async fn find_children(&self, parent_id: &Uuid) -> Result<Vec<T>, DomainError>;
    async fn find_all(&self) -> Result<Vec<T>, DomainError>;
    async fn create(&self, entity: &T) -> Result<T, DomainError>;
    async fn update(&self, entity: &T) -> Result<T, DomainError>;
    /// Returns `false` when no row had this id.
    async fn delete(&self, id: &Uuid) -> Result<bool, DomainError>;
}
