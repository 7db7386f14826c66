//! Whole-tree invariant verification
//!
//! O(n) walk used by tests and the soak driver after mutations. It reports the
//! first broken invariant instead of panicking so callers can attach context.

use crate::compare::Comparator;
use crate::node::{NodeId, RbColor};
use crate::RbTree;

/// A broken red-black tree invariant
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantError {
    #[error("root node is red")]
    RedRoot,

    #[error("red node at depth {depth} has a red child")]
    RedRed { depth: usize },

    #[error("key at depth {depth} is out of order with an ancestor")]
    Ordering { depth: usize },

    #[error("black height differs below depth {depth}: left {left}, right {right}")]
    BlackHeight {
        depth: usize,
        left: usize,
        right: usize,
    },

    #[error("parent link of node at depth {depth} does not match its owner")]
    ParentLink { depth: usize },

    #[error("tree reaches {reachable} nodes but stores {stored}")]
    Count { reachable: usize, stored: usize },
}

/// Keys a subtree must respect: not after `upper`, not before `lower`
///
/// Both ends are inclusive. Equal keys start out on the right, but rotations
/// can carry them into a left subtree.
struct Bounds<'a, K> {
    lower: Option<&'a K>,
    upper: Option<&'a K>,
}

impl<K, V, C> RbTree<K, V, C>
where
    C: Comparator<K>,
{
    /// Check ordering, coloring, black height, parent links and entry count
    pub fn validate(&self) -> Result<(), InvariantError> {
        self.black_height().map(|_| ())
    }

    /// Number of black nodes on every root-to-leaf path (0 when empty)
    ///
    /// Fails with the first invariant violation found.
    pub fn black_height(&self) -> Result<usize, InvariantError> {
        let Some(root) = self.root else {
            return self.check_count(0).map(|_| 0);
        };
        if self.node(root).parent.is_some() {
            return Err(InvariantError::ParentLink { depth: 0 });
        }
        if self.node(root).is_red() {
            return Err(InvariantError::RedRoot);
        }

        let mut reachable = 0;
        let bounds = Bounds {
            lower: None,
            upper: None,
        };
        let height = self.check_subtree(root, 0, bounds, &mut reachable)?;
        self.check_count(reachable)?;
        Ok(height)
    }

    fn check_count(&self, reachable: usize) -> Result<(), InvariantError> {
        if reachable != self.nodes.len() {
            return Err(InvariantError::Count {
                reachable,
                stored: self.nodes.len(),
            });
        }
        Ok(())
    }

    fn check_subtree<'a>(
        &'a self,
        id: NodeId,
        depth: usize,
        bounds: Bounds<'a, K>,
        reachable: &mut usize,
    ) -> Result<usize, InvariantError> {
        *reachable += 1;
        let node = self.node(id);

        let above_lower = bounds.lower.map_or(true, |lower| !self.cmp.less(&node.key, lower));
        let below_upper = bounds.upper.map_or(true, |upper| !self.cmp.less(upper, &node.key));
        if !above_lower || !below_upper {
            return Err(InvariantError::Ordering { depth });
        }

        let mut heights = [0; 2];
        for (slot, child) in [node.left, node.right].into_iter().enumerate() {
            let Some(child) = child else {
                continue;
            };
            if self.node(child).parent != Some(id) {
                return Err(InvariantError::ParentLink { depth: depth + 1 });
            }
            if node.is_red() && self.node(child).is_red() {
                return Err(InvariantError::RedRed { depth });
            }
            let child_bounds = if slot == 0 {
                Bounds {
                    lower: bounds.lower,
                    upper: Some(&node.key),
                }
            } else {
                Bounds {
                    lower: Some(&node.key),
                    upper: bounds.upper,
                }
            };
            heights[slot] = self.check_subtree(child, depth + 1, child_bounds, reachable)?;
        }

        let [left, right] = heights;
        if left != right {
            return Err(InvariantError::BlackHeight { depth, left, right });
        }
        Ok(left + usize::from(node.color == RbColor::Black))
    }
}

impl<K, V, C> RbTree<K, V, C> {
    /// Longest root-to-leaf path in nodes (0 when empty)
    pub fn height(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(NodeId, usize)> = self.root.map(|root| (root, 1)).into_iter().collect();
        while let Some((id, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            let node = self.node(id);
            stack.extend(node.left.map(|left| (left, depth + 1)));
            stack.extend(node.right.map(|right| (right, depth + 1)));
        }
        deepest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RbTree<i32, ()> {
        let mut tree = RbTree::new();
        for key in [10, 5, 15, 1, 7, 12, 20] {
            tree.add(key, ());
        }
        tree
    }

    fn find(tree: &RbTree<i32, ()>, key: i32) -> NodeId {
        tree.locate_match(&key).unwrap().matched
    }

    #[test]
    fn test_valid_tree() {
        let tree = sample();
        assert_eq!(tree.validate(), Ok(()));
        assert_eq!(tree.black_height(), Ok(2));
        assert_eq!(tree.height(), 3);
    }

    #[test]
    fn test_empty_tree() {
        let tree: RbTree<i32, ()> = RbTree::new();
        assert_eq!(tree.black_height(), Ok(0));
        assert_eq!(tree.height(), 0);
    }

    #[test]
    fn test_detects_red_root() {
        let mut tree = sample();
        let root = tree.root.unwrap();
        tree.set_color(root, RbColor::Red);
        assert_eq!(tree.validate(), Err(InvariantError::RedRoot));
    }

    #[test]
    fn test_detects_red_red() {
        let mut tree = sample();
        let five = find(&tree, 5);
        tree.set_color(five, RbColor::Red);
        assert_eq!(tree.validate(), Err(InvariantError::RedRed { depth: 1 }));
    }

    #[test]
    fn test_detects_black_height_mismatch() {
        let mut tree = sample();
        let one = find(&tree, 1);
        tree.set_color(one, RbColor::Black);
        assert!(matches!(
            tree.validate(),
            Err(InvariantError::BlackHeight { depth: 1, left: 1, right: 0 })
        ));
    }

    #[test]
    fn test_detects_ordering() {
        let mut tree = sample();
        let twelve = find(&tree, 12);
        tree.node_mut(twelve).key = 3;
        assert_eq!(tree.validate(), Err(InvariantError::Ordering { depth: 2 }));
    }

    #[test]
    fn test_equal_keys_on_both_sides_are_valid() {
        // The third 5 triggers a rotation that leaves an equal key on the left
        let mut tree = RbTree::new();
        for value in ["a", "b", "c"] {
            tree.add(5, value);
            assert_eq!(tree.validate(), Ok(()));
        }
        let root = tree.root.unwrap();
        let left = tree.node(root).left.unwrap();
        assert_eq!(tree.node(left).key, 5);

        for value in ["d", "e", "f", "g"] {
            tree.add(5, value);
        }
        assert_eq!(tree.validate(), Ok(()));
        assert_eq!(tree.black_height(), Ok(2));
    }

    #[test]
    fn test_detects_equal_key_past_upper_bound() {
        let mut tree = sample();
        // 7 is in 10's left subtree: it may equal 10 but not exceed it
        let seven = find(&tree, 7);
        tree.node_mut(seven).key = 10;
        assert_eq!(tree.validate(), Ok(()));
        tree.node_mut(seven).key = 11;
        assert_eq!(tree.validate(), Err(InvariantError::Ordering { depth: 2 }));
    }

    #[test]
    fn test_detects_parent_link() {
        let mut tree = sample();
        let seven = find(&tree, 7);
        let root = tree.root.unwrap();
        tree.node_mut(seven).parent = Some(root);
        assert_eq!(tree.validate(), Err(InvariantError::ParentLink { depth: 2 }));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(InvariantError::RedRoot.to_string(), "root node is red");
        assert_eq!(
            InvariantError::Count {
                reachable: 3,
                stored: 4
            }
            .to_string(),
            "tree reaches 3 nodes but stores 4"
        );
    }
}
