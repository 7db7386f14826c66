//! Search/locate
//!
//! A single BST descent serves both pipelines. Insertion attaches below the
//! node it stops at; deletion walks back up from there to the node whose key
//! is actually equivalent to the target.

use crate::compare::Comparator;
use crate::node::{NodeId, Side};
use crate::RbTree;

/// Result of locating a key for deletion
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct Located {
    /// Node holding an equivalent key
    pub(crate) matched: NodeId,
    /// Node where the descent stopped; has at most one child
    pub(crate) source: NodeId,
}

impl<K, V, C> RbTree<K, V, C>
where
    C: Comparator<K>,
{
    /// Side of `id` that `key` descends into; equivalent keys go right
    pub(crate) fn descend_side(&self, key: &K, id: NodeId) -> Side {
        if self.cmp.less(key, &self.node(id).key) {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Descend from the root until the next step would leave the tree
    ///
    /// Returns `None` only for an empty tree.
    pub(crate) fn locate(&self, key: &K) -> Option<NodeId> {
        let mut current = self.root?;
        loop {
            let side = self.descend_side(key, current);
            match self.node(current).child(side) {
                Some(next) => current = next,
                None => return Some(current),
            }
        }
    }

    /// Locate, then climb to the first node whose key is equivalent to `key`
    ///
    /// With equal keys descending right, the stop node is adjacent to the
    /// slot after every equivalent key, so the match is the in-order last
    /// equivalent entry: either the stop node itself or the nearest ancestor
    /// the descent turned right at.
    pub(crate) fn locate_match(&self, key: &K) -> Option<Located> {
        let source = self.locate(key)?;
        let mut current = Some(source);
        while let Some(id) = current {
            if self.cmp.equivalent(&self.node(id).key, key) {
                return Some(Located {
                    matched: id,
                    source,
                });
            }
            current = self.parent(id);
        }
        None
    }

    /// Value stored under an equivalent key
    ///
    /// With duplicates this is the most recently attached equivalent entry,
    /// the same one [`RbTree::remove`] would delete.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.locate_match(key)
            .map(|found| &self.node(found.matched).value)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.locate_match(key).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RbTree<i32, &'static str> {
        let mut tree = RbTree::new();
        for (key, value) in [(10, "a"), (5, "b"), (15, "c"), (1, "d"), (7, "e")] {
            tree.add(key, value);
        }
        tree
    }

    #[test]
    fn test_locate_empty() {
        let tree: RbTree<i32, ()> = RbTree::new();
        assert_eq!(tree.locate(&3), None);
        assert_eq!(tree.locate_match(&3), None);
    }

    #[test]
    fn test_locate_stops_at_attach_point() {
        let tree = sample();
        // 6 would hang off 7's left
        let stop = tree.locate(&6).unwrap();
        assert_eq!(tree.node(stop).key, 7);
        assert_eq!(tree.descend_side(&6, stop), Side::Left);
        // 20 would hang off 15's right
        let stop = tree.locate(&20).unwrap();
        assert_eq!(tree.node(stop).key, 15);
    }

    #[test]
    fn test_locate_match_interior_node() {
        let tree = sample();
        // 5 has two children: the descent stops at 7, then climbs back to 5
        let found = tree.locate_match(&5).unwrap();
        assert_eq!(tree.node(found.matched).key, 5);
        assert_eq!(tree.node(found.source).key, 7);
    }

    #[test]
    fn test_locate_match_leaf() {
        let tree = sample();
        let found = tree.locate_match(&1).unwrap();
        assert_eq!(found.matched, found.source);
    }

    #[test]
    fn test_locate_match_missing() {
        let tree = sample();
        assert_eq!(tree.locate_match(&6), None);
        assert_eq!(tree.locate_match(&100), None);
        assert_eq!(tree.locate_match(&-100), None);
    }

    #[test]
    fn test_get() {
        let tree = sample();
        assert_eq!(tree.get(&7), Some(&"e"));
        assert_eq!(tree.get(&10), Some(&"a"));
        assert_eq!(tree.get(&8), None);
        assert!(tree.contains_key(&15));
        assert!(!tree.contains_key(&16));
    }
}
