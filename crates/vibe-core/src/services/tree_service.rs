// ============================================================================
// Vibe Core - Tree Service
// File: crates/vibe-core/src/services/tree_service.rs
// ============================================================================
//! Read API over a self-referencing table (root listing, slug lookup) plus
//! the write path that keeps the parent graph a forest.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::error::DomainError;
use crate::repositories::TreeRepository;
use crate::tree::{NestedNode, TreeEntity, TreeMaterializer, TreeQuery};

pub struct TreeService<T: TreeEntity> {
    repo: Arc<dyn TreeRepository<T>>,
    materializer: TreeMaterializer<T>,
}

impl<T: TreeEntity> TreeService<T> {
    pub fn new(repo: Arc<dyn TreeRepository<T>>) -> Self {
        Self {
            materializer: TreeMaterializer::new(repo.clone()),
            repo,
        }
    }

    /// Every visible root, each with its subtree, in sibling order.
    pub async fn list_roots(&self, query: &TreeQuery) -> Result<Vec<NestedNode<T>>, DomainError> {
        let roots = self.materializer.policy().apply(self.repo.find_roots().await?);
        debug!("Listing {} {} roots", roots.len(), T::KIND);

        let mut trees = Vec::with_capacity(roots.len());
        for root in roots {
            trees.push(self.materializer.expand(root, query.depth).await?);
        }
        Ok(trees)
    }

    /// Any node by its global slug, root or not, with its subtree. Rows the
    /// filter hides, and rows below them, are reported as not found.
    pub async fn get_by_slug(&self, slug: &str, query: &TreeQuery) -> Result<NestedNode<T>, DomainError> {
        let node = self
            .repo
            .find_by_slug(slug)
            .await?
            .filter(|node| self.materializer.policy().admits(node))
            .ok_or_else(|| {
                warn!("{} not found for slug: {}", T::KIND, slug);
                DomainError::not_found(T::KIND.as_str(), slug)
            })?;

        if !self.is_reachable(&node).await? {
            debug!("{} {} sits below a hidden ancestor", T::KIND, slug);
            return Err(DomainError::not_found(T::KIND.as_str(), slug));
        }

        self.materializer.expand(node, query.depth).await
    }

    /// A node is reachable when every ancestor passes the child filter.
    async fn is_reachable(&self, node: &T) -> Result<bool, DomainError> {
        let policy = self.materializer.policy();
        let mut visited = HashSet::from([node.id()]);
        let mut cursor = node.parent_id();

        while let Some(current) = cursor {
            if !visited.insert(current) {
                error!("{} ancestor chain loops at node {}", T::KIND, current);
                return Err(DomainError::CycleDetected { kind: T::KIND.as_str(), id: current });
            }
            match self.repo.find_by_id(&current).await? {
                Some(ancestor) if policy.admits(&ancestor) => cursor = ancestor.parent_id(),
                Some(_) => return Ok(false),
                None => return Ok(true),
            }
        }

        Ok(true)
    }

    pub async fn expand_by_id(&self, id: &Uuid, query: &TreeQuery) -> Result<NestedNode<T>, DomainError> {
        let node = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(T::KIND.as_str(), id))?;

        self.materializer.expand(node, query.depth).await
    }

    /// Every row, flat, in sibling order. Filters are not applied.
    pub async fn all(&self) -> Result<Vec<T>, DomainError> {
        let mut nodes = self.repo.find_all().await?;
        let policy = self.materializer.policy();
        nodes.sort_by(|a, b| policy.compare(a, b));
        Ok(nodes)
    }

    pub async fn create(&self, entity: &T) -> Result<T, DomainError> {
        if self.repo.find_by_slug(entity.slug()).await?.is_some() {
            warn!("{} slug already exists: {}", T::KIND, entity.slug());
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
            if self.repo.find_by_id(&parent_id).await?.is_none() {
                return Err(DomainError::not_found(T::KIND.as_str(), parent_id));
            }
        }

        let created = self.repo.create(entity).await?;
        info!("Created {} {} ({})", T::KIND, created.slug(), created.id());
        Ok(created)
    }

    /// Returns the row with the entity's slug if one exists, otherwise creates it.
    /// The flag is `true` when a row was created.
    pub async fn get_or_create(&self, entity: &T) -> Result<(T, bool), DomainError> {
        if let Some(existing) = self.repo.find_by_slug(entity.slug()).await? {
            debug!("{} {} already present", T::KIND, existing.slug());
            return Ok((existing, false));
        }
        self.create(entity).await.map(|created| (created, true))
    }

    /// Like [`get_or_create`](Self::get_or_create), but an existing row is
    /// refreshed through `update` and written back. The row keeps its id;
    /// `update` may not reparent it.
    pub async fn update_or_create<F>(&self, entity: &T, update: F) -> Result<(T, bool), DomainError>
    where
        F: FnOnce(&mut T) -> Result<(), DomainError> + Send,
    {
        let Some(mut existing) = self.repo.find_by_slug(entity.slug()).await? else {
            return self.create(entity).await.map(|created| (created, true));
        };

        let (id, parent_id) = (existing.id(), existing.parent_id());
        update(&mut existing)?;
        if existing.id() != id || existing.parent_id() != parent_id {
            return Err(DomainError::InvalidParent(format!(
                "{} {} cannot be moved by an update",
                T::KIND,
                existing.slug()
            )));
        }

        let updated = self.repo.update(&existing).await?;
        debug!("{} {} refreshed", T::KIND, updated.slug());
        Ok((updated, false))
    }

    /// Moves a node under `parent_id` (or to the root level with `None`).
    /// A node can never become its own ancestor.
    pub async fn set_parent(&self, id: &Uuid, parent_id: Option<Uuid>) -> Result<T, DomainError> {
        let mut node = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(T::KIND.as_str(), id))?;

        if let Some(parent_id) = parent_id {
            self.ensure_not_descendant(id, parent_id).await?;
        }

        node.set_parent_id(parent_id);
        let updated = self.repo.update(&node).await?;
        info!("Moved {} {} under {:?}", T::KIND, updated.slug(), parent_id);
        Ok(updated)
    }

    /// Walks up from `candidate` and fails if `id` is on the way.
    async fn ensure_not_descendant(&self, id: &Uuid, candidate: Uuid) -> Result<(), DomainError> {
        let mut visited = HashSet::new();
        let mut cursor = Some(candidate);

        while let Some(current) = cursor {
            if current == *id {
                return Err(DomainError::InvalidParent(format!(
                    "{} {} cannot be moved under its own subtree",
                    T::KIND,
                    id
                )));
            }
            if !visited.insert(current) {
                error!("{} ancestor chain loops at node {}", T::KIND, current);
                return Err(DomainError::CycleDetected { kind: T::KIND.as_str(), id: current });
            }

            let ancestor = self
                .repo
                .find_by_id(&current)
                .await?
                .ok_or_else(|| DomainError::not_found(T::KIND.as_str(), current))?;
            cursor = ancestor.parent_id();
        }

        Ok(())
    }

    /// Deletes a row; its children follow the entity's parent-delete rule.
    pub async fn delete(&self, id: &Uuid) -> Result<(), DomainError> {
        if !self.repo.delete(id).await? {
            return Err(DomainError::not_found(T::KIND.as_str(), id));
        }
        info!("Deleted {} {} ({:?} children)", T::KIND, id, T::ON_PARENT_DELETE);
        Ok(())
    }
}
