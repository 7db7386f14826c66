//! Red-black tree ordered map
//!
//! An ordered key-value container kept balanced by the red-black discipline.
//! Nodes live in a [`slab::Slab`] arena and link to each other through
//! handles, so the parent back-reference never owns anything.
//!
//! # Operations
//!
//! - [`RbTree::add`] inserts an entry; equal keys are kept, never overwritten
//! - [`RbTree::remove`] deletes one entry with an equivalent key
//! - [`RbTree::first`] peeks at the minimum entry
//! - [`RbTree::pop`] removes and returns the minimum entry
//!
//! Every mutation is O(log n). Structural corruption (a node whose parent does
//! not list it as a child, a rotation without the required child) is treated
//! as a defect and panics instead of being repaired.
//!
//! # Example
//!
//! ```
//! use redblack_rbtree::RbTree;
//!
//! let mut tree = RbTree::new();
//! tree.add(10, "ten");
//! tree.add(-1, "minus one");
//! tree.add(5, "five");
//!
//! assert_eq!(tree.first(), Some((&-1, &"minus one")));
//! assert_eq!(tree.pop(), Some((-1, "minus one")));
//! assert_eq!(tree.pop(), Some((5, "five")));
//! assert_eq!(tree.len(), 1);
//! ```

use core::fmt;

use slab::Slab;
use static_assertions::assert_impl_all;

mod compare;
mod delete;
mod extremum;
mod insert;
mod navigate;
mod node;
mod render;
mod rotate;
mod search;
mod validate;

pub use compare::{Comparator, NaturalOrder};
pub use node::RbColor;
pub use validate::InvariantError;

use node::{NodeId, RbNode};

/// Ordered map balanced as a red-black tree
///
/// `C` decides the ordering of keys. The default [`NaturalOrder`] uses `<`;
/// any `Fn(&K, &K) -> bool` closure can be supplied through
/// [`RbTree::with_comparator`].
#[derive(Clone)]
pub struct RbTree<K, V, C = NaturalOrder> {
    nodes: Slab<RbNode<K, V>>,
    root: Option<NodeId>,
    cmp: C,
}

assert_impl_all!(RbTree<i64, String>: Send, Sync, Clone, Default);

impl<K, V> RbTree<K, V, NaturalOrder>
where
    K: PartialOrd,
{
    /// Create an empty tree ordered by `<`
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<K, V, C> RbTree<K, V, C>
where
    C: Comparator<K>,
{
    /// Create an empty tree ordered by `cmp`
    ///
    /// `cmp(a, b)` must return true exactly when `a` sorts before `b`, and
    /// must describe a strict weak ordering.
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            nodes: Slab::new(),
            root: None,
            cmp,
        }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Drop every entry, keeping the comparator
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Ordering the tree was built with
    pub fn comparator(&self) -> &C {
        &self.cmp
    }
}

// Arena accessors shared by every module.
impl<K, V, C> RbTree<K, V, C> {
    pub(crate) fn node(&self, id: NodeId) -> &RbNode<K, V> {
        &self.nodes[id.0]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut RbNode<K, V> {
        &mut self.nodes[id.0]
    }

    /// Absent children count as black
    pub(crate) fn is_red(&self, id: Option<NodeId>) -> bool {
        id.is_some_and(|id| self.node(id).is_red())
    }

    pub(crate) fn set_color(&mut self, id: NodeId, color: RbColor) {
        self.node_mut(id).color = color;
    }

    pub(crate) fn color(&self, id: NodeId) -> RbColor {
        self.node(id).color
    }

    /// In-order successor, climbing parent links when there is no right subtree
    pub(crate) fn successor(&self, id: NodeId) -> Option<NodeId> {
        if let Some(right) = self.node(id).right {
            return Some(self.leftmost_from(right));
        }
        let mut current = id;
        let mut parent = self.node(id).parent;
        while let Some(p) = parent {
            if self.node(p).left == Some(current) {
                return Some(p);
            }
            current = p;
            parent = self.node(p).parent;
        }
        None
    }
}

impl<K, V, C> Default for RbTree<K, V, C>
where
    C: Comparator<K> + Default,
{
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<K, V, C> Extend<(K, V)> for RbTree<K, V, C>
where
    C: Comparator<K>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.add(key, value);
        }
    }
}

impl<K, V, C> FromIterator<(K, V)> for RbTree<K, V, C>
where
    C: Comparator<K> + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::default();
        tree.extend(iter);
        tree
    }
}

impl<K, V, C> fmt::Debug for RbTree<K, V, C>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        let mut cursor = self.root.map(|root| self.leftmost_from(root));
        while let Some(id) = cursor {
            let node = self.node(id);
            map.entry(&node.key, &node.value);
            cursor = self.successor(id);
        }
        map.finish()
    }
}
