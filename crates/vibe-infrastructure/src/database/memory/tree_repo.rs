use std::collections::HashSet;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use vibe_core::error::DomainError;
use vibe_core::repositories::TreeRepository;
use vibe_core::tree::{OnParentDelete, TreeEntity};

/// A self-referencing table held in a `Vec`, one per entity type.
pub struct InMemoryTreeRepository<T: TreeEntity> {
    rows: RwLock<Vec<T>>,
}

impl<T: TreeEntity> InMemoryTreeRepository<T> {
    pub fn new() -> Self {
        Self { rows: RwLock::new(Vec::new()) }
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }

    fn check_constraints(rows: &[T], entity: &T) -> Result<(), DomainError> {
        if rows.iter().any(|row| row.slug() == entity.slug() && row.id() != entity.id()) {
            return Err(DomainError::ConstraintViolation(format!(
                "{} slug already exists: {}",
                T::KIND,
                entity.slug()
            )));
        }
        if let Some(parent_id) = entity.parent_id() {
            if parent_id == entity.id() {
                return Err(DomainError::InvalidParent(format!("{} cannot be its own parent", entity.slug())));
            }
            if !rows.iter().any(|row| row.id() == parent_id) {
                return Err(DomainError::InvalidParent(format!("{} parent {} does not exist", T::KIND, parent_id)));
            }
        }
        Ok(())
    }
}

impl<T: TreeEntity> Default for InMemoryTreeRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// `root` plus everything that hangs below it. Rows already collected are
/// skipped, so a corrupted parent graph cannot loop.
fn subtree_ids<T: TreeEntity>(rows: &[T], root: Uuid) -> HashSet<Uuid> {
    let mut doomed = HashSet::from([root]);
    let mut frontier = vec![root];
    while let Some(current) = frontier.pop() {
        for row in rows.iter().filter(|row| row.parent_id() == Some(current)) {
            if doomed.insert(row.id()) {
                frontier.push(row.id());
            }
        }
    }
    doomed
}

#[async_trait]
impl<T: TreeEntity> TreeRepository<T> for InMemoryTreeRepository<T> {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<T>, DomainError> {
        Ok(self.rows.read().await.iter().find(|row| row.id() == *id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<T>, DomainError> {
        Ok(self.rows.read().await.iter().find(|row| row.slug() == slug).cloned())
    }

    async fn find_roots(&self) -> Result<Vec<T>, DomainError> {
        Ok(self.rows.read().await.iter().filter(|row| row.is_root()).cloned().collect())
    }

    async fn find_children(&self, parent_id: &Uuid) -> Result<Vec<T>, DomainError> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|row| row.parent_id() == Some(*parent_id))
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> Result<Vec<T>, DomainError> {
        Ok(self.rows.read().await.clone())
    }

    async fn create(&self, entity: &T) -> Result<T, DomainError> {
        let mut rows = self.rows.write().await;
        if rows.iter().any(|row| row.id() == entity.id()) {
            return Err(DomainError::ConstraintViolation(format!("{} id already exists: {}", T::KIND, entity.id())));
        }
        Self::check_constraints(&rows, entity)?;
        rows.push(entity.clone());
        Ok(entity.clone())
    }

    /// Like a plain SQL `UPDATE`, this does not look for ancestor cycles.
    async fn update(&self, entity: &T) -> Result<T, DomainError> {
        let mut rows = self.rows.write().await;
        Self::check_constraints(&rows, entity)?;
        let slot = rows
            .iter_mut()
            .find(|row| row.id() == entity.id())
            .ok_or_else(|| DomainError::not_found(T::KIND.as_str(), entity.id()))?;
        *slot = entity.clone();
        Ok(entity.clone())
    }

    async fn delete(&self, id: &Uuid) -> Result<bool, DomainError> {
        let mut rows = self.rows.write().await;
        if !rows.iter().any(|row| row.id() == *id) {
            return Ok(false);
        }

        match T::ON_PARENT_DELETE {
            OnParentDelete::SetNull => {
                rows.retain(|row| row.id() != *id);
                for child in rows.iter_mut().filter(|row| row.parent_id() == Some(*id)) {
                    child.set_parent_id(None);
                }
            }
            OnParentDelete::Cascade => {
                let doomed = subtree_ids(rows.as_slice(), *id);
                debug!("Cascading {} delete over {} rows", T::KIND, doomed.len());
                rows.retain(|row| !doomed.contains(&row.id()));
            }
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vibe_core::domain::{DanceStyle, OrganizationNode, NodeType};

    #[tokio::test]
    async fn test_create_rejects_duplicate_slug_and_missing_parent() {
        let repo = InMemoryTreeRepository::<DanceStyle>::new();
        let salsa = DanceStyle::new("Salsa".into(), "salsa".into(), None).unwrap();
        repo.create(&salsa).await.unwrap();

        let dup = DanceStyle::new("Salsa Cubaine".into(), "salsa".into(), None).unwrap();
        assert!(matches!(repo.create(&dup).await, Err(DomainError::ConstraintViolation(_))));

        let orphan = DanceStyle::new("Kizomba".into(), "kizomba".into(), Some(Uuid::new_v4())).unwrap();
        assert!(matches!(repo.create(&orphan).await, Err(DomainError::InvalidParent(_))));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_cascade_delete_removes_subtree() {
        let repo = InMemoryTreeRepository::<DanceStyle>::new();
        let a = DanceStyle::new("A".into(), "a".into(), None).unwrap();
        let b = DanceStyle::new("B".into(), "b".into(), Some(a.id)).unwrap();
        let c = DanceStyle::new("C".into(), "c".into(), Some(b.id)).unwrap();
        let other = DanceStyle::new("Other".into(), "other".into(), None).unwrap();
        for style in [&a, &b, &c, &other] {
            repo.create(style).await.unwrap();
        }

        assert!(repo.delete(&a.id).await.unwrap());
        let left: Vec<String> = repo.find_all().await.unwrap().into_iter().map(|s| s.slug).collect();
        assert_eq!(left, vec!["other".to_string()]);
        assert!(!repo.delete(&a.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_set_null_delete_promotes_children() {
        let repo = InMemoryTreeRepository::<OrganizationNode>::new();
        let root = OrganizationNode::new("Root".into(), "root".into(), NodeType::Root, None).unwrap();
        let child = OrganizationNode::new("Child".into(), "child".into(), NodeType::Branch, Some(root.id)).unwrap();
        repo.create(&root).await.unwrap();
        repo.create(&child).await.unwrap();

        assert!(repo.delete(&root.id).await.unwrap());
        let roots = repo.find_roots().await.unwrap();
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].slug, "child");
    }
}
