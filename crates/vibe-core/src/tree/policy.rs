use std::cmp::Ordering;

use super::entity::TreeEntity;

/// Sibling ordering for one entity type.
pub enum OrderKey<T> {
    /// `name` ascending.
    Name,
    /// The given sequence number ascending, then `name`.
    SequenceThenName(fn(&T) -> i32),
}

impl<T> Clone for OrderKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for OrderKey<T> {}

/// Per-type read policy: which children are visible and how siblings sort.
///
/// The same policy applies to roots, so a hidden root hides its whole subtree.
pub struct TreePolicy<T> {
    pub child_filter: fn(&T) -> bool,
    pub order_key: OrderKey<T>,
}

impl<T> Clone for TreePolicy<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TreePolicy<T> {}

impl<T: TreeEntity> TreePolicy<T> {
    /// Every row visible, siblings by name.
    pub fn all_by_name() -> Self {
        Self {
            child_filter: |_| true,
            order_key: OrderKey::Name,
        }
    }

    pub fn admits(&self, node: &T) -> bool {
        (self.child_filter)(node)
    }

    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        let by_name = || a.name().cmp(b.name()).then_with(|| a.id().cmp(&b.id()));
        match self.order_key {
            OrderKey::Name => by_name(),
            OrderKey::SequenceThenName(sequence) => sequence(a).cmp(&sequence(b)).then_with(by_name),
        }
    }

    /// Drops rows the filter rejects and sorts the rest in sibling order.
    pub fn apply(&self, mut nodes: Vec<T>) -> Vec<T> {
        nodes.retain(|node| self.admits(node));
        nodes.sort_by(|a, b| self.compare(a, b));
        nodes
    }
}
