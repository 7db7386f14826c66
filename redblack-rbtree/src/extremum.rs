//! Minimum lookup and extraction

use crate::compare::Comparator;
use crate::node::NodeId;
use crate::RbTree;

impl<K, V, C> RbTree<K, V, C> {
    pub(crate) fn leftmost_from(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.node(id).left {
            id = left;
        }
        id
    }

    /// Minimum entry, or `None` on an empty tree
    ///
    /// Among equivalent minimum keys this is the earliest attached one.
    pub fn first(&self) -> Option<(&K, &V)> {
        let node = self.node(self.leftmost_from(self.root?));
        Some((&node.key, &node.value))
    }
}

impl<K, V, C> RbTree<K, V, C>
where
    C: Comparator<K>,
{
    /// Remove and return the minimum entry, or `None` on an empty tree
    ///
    /// The entry returned is exactly the one [`RbTree::first`] reports; the
    /// leftmost node has no left child, so it is unlinked in place.
    pub fn pop(&mut self) -> Option<(K, V)> {
        let first = self.leftmost_from(self.root?);
        Some(self.remove_node(first))
    }
}
