//! Relationship navigation
//!
//! Read-only derivations over parent/child links. Absent relatives come back
//! as `None`; a node whose parent does not list it as a child means the tree
//! is already corrupt, so that panics.

use crate::node::{NodeId, Side};
use crate::RbTree;

impl<K, V, C> RbTree<K, V, C> {
    pub(crate) fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub(crate) fn grandparent(&self, id: NodeId) -> Option<NodeId> {
        self.parent(self.parent(id)?)
    }

    /// Which link of its parent holds `id`; `None` for the root
    pub(crate) fn side_of(&self, id: NodeId) -> Option<Side> {
        let parent = self.parent(id)?;
        let p = self.node(parent);
        if p.left == Some(id) {
            Some(Side::Left)
        } else if p.right == Some(id) {
            Some(Side::Right)
        } else {
            panic!("unrecognized parent-child relationship: {id:?} -> {parent:?}")
        }
    }

    pub(crate) fn sibling(&self, id: NodeId) -> Option<NodeId> {
        let side = self.side_of(id)?;
        let parent = self.parent(id)?;
        self.node(parent).child(side.opposite())
    }

    /// Sibling of the parent
    pub(crate) fn aunt(&self, id: NodeId) -> Option<NodeId> {
        self.sibling(self.parent(id)?)
    }

    /// Put `replacement` wherever `old` is linked from: its parent's child slot,
    /// or the root slot. The replacement's parent link follows.
    pub(crate) fn relink(&mut self, old: NodeId, replacement: Option<NodeId>) {
        let parent = self.parent(old);
        match (parent, self.side_of(old)) {
            (Some(parent), Some(side)) => self.node_mut(parent).set_child(side, replacement),
            _ => self.root = replacement,
        }
        if let Some(replacement) = replacement {
            self.node_mut(replacement).parent = parent;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::node::Side;
    use crate::RbTree;

    /// `10 (5 (1, 7), 15)`: this insertion order only recolors, never rotates
    fn sample() -> RbTree<i32, ()> {
        let mut tree = RbTree::new();
        for key in [10, 5, 15, 1, 7] {
            tree.add(key, ());
        }
        tree
    }

    #[test]
    fn test_relationships() {
        let tree = sample();
        let root = tree.root.unwrap();
        let five = tree.node(root).left.unwrap();
        let fifteen = tree.node(root).right.unwrap();
        let one = tree.node(five).left.unwrap();
        let seven = tree.node(five).right.unwrap();

        assert_eq!(tree.node(five).key, 5);
        assert_eq!(tree.node(seven).key, 7);

        assert_eq!(tree.parent(one), Some(five));
        assert_eq!(tree.grandparent(one), Some(root));
        assert_eq!(tree.sibling(one), Some(seven));
        assert_eq!(tree.sibling(five), Some(fifteen));
        assert_eq!(tree.aunt(seven), Some(fifteen));
        assert_eq!(tree.side_of(seven), Some(Side::Right));
    }

    #[test]
    fn test_root_has_no_relatives() {
        let tree = sample();
        let root = tree.root.unwrap();
        assert_eq!(tree.parent(root), None);
        assert_eq!(tree.grandparent(root), None);
        assert_eq!(tree.sibling(root), None);
        assert_eq!(tree.aunt(root), None);
        assert_eq!(tree.side_of(root), None);
    }

    #[test]
    fn test_absent_relatives() {
        let mut tree = RbTree::new();
        tree.add(2, ());
        tree.add(1, ());
        let root = tree.root.unwrap();
        let one = tree.node(root).left.unwrap();
        assert_eq!(tree.sibling(one), None);
        assert_eq!(tree.aunt(one), None);
        assert_eq!(tree.grandparent(one), None);
    }

    #[test]
    #[should_panic(expected = "unrecognized parent-child relationship")]
    fn test_inconsistent_link_panics() {
        let mut tree = sample();
        let root = tree.root.unwrap();
        let five = tree.node(root).left.unwrap();
        let one = tree.node(five).left.unwrap();
        // Corrupt: 1 claims the root as its parent
        tree.node_mut(one).parent = Some(root);
        tree.sibling(one);
    }
}
