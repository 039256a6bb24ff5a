use std::collections::HashSet;
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt};
use tracing::{debug, error};
use uuid::Uuid;

use super::entity::TreeEntity;
use super::nested::NestedNode;
use super::policy::TreePolicy;
use crate::error::DomainError;
use crate::repositories::TreeRepository;

/// Expands a row into its nested subtree, one child query per visited node.
///
/// Nothing is cached: every call walks the store again.
pub struct TreeMaterializer<T: TreeEntity> {
    repo: Arc<dyn TreeRepository<T>>,
    policy: TreePolicy<T>,
}

impl<T: TreeEntity> TreeMaterializer<T> {
    pub fn new(repo: Arc<dyn TreeRepository<T>>) -> Self {
        Self::with_policy(repo, T::policy())
    }

    pub fn with_policy(repo: Arc<dyn TreeRepository<T>>, policy: TreePolicy<T>) -> Self {
        Self { repo, policy }
    }

    pub fn policy(&self) -> &TreePolicy<T> {
        &self.policy
    }

    /// Attaches visible children to `node`, recursively, down to `max_depth`
    /// levels (unbounded when `None`).
    ///
    /// Fails with [`DomainError::CycleDetected`] if a node is reached twice.
    pub async fn expand(&self, node: T, max_depth: Option<usize>) -> Result<NestedNode<T>, DomainError> {
        let mut visited = HashSet::new();
        let root_id = node.id();
        let nested = self.expand_node(node, max_depth, &mut visited).await?;
        debug!("Expanded {} {} into {} nodes", T::KIND, root_id, visited.len());
        Ok(nested)
    }

    fn expand_node<'a>(
        &'a self,
        node: T,
        remaining: Option<usize>,
        visited: &'a mut HashSet<Uuid>,
    ) -> BoxFuture<'a, Result<NestedNode<T>, DomainError>> {
        async move {
            let id = node.id();
            if !visited.insert(id) {
                error!("{} tree contains a cycle through node {}", T::KIND, id);
                return Err(DomainError::CycleDetected { kind: T::KIND.as_str(), id });
            }

            if remaining == Some(0) {
                return Ok(NestedNode::leaf(node));
            }

            let children = self.policy.apply(self.repo.find_children(&id).await?);
            let next = remaining.map(|depth| depth - 1);

            let mut nested = Vec::with_capacity(children.len());
            for child in children {
                nested.push(self.expand_node(child, next, &mut *visited).await?);
            }

            Ok(NestedNode { node, children: nested })
        }
        .boxed()
    }
}
