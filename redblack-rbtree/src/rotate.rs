//! Rotation primitives
//!
//! ```text
//!       anchor                 pivot
//!      /      \    left       /     \
//!     a      pivot  ---->  anchor    c
//!           /    \         /    \
//!          b      c       a      b
//! ```
//!
//! Rotations keep key order and every parent link consistent. They never
//! touch colors; the fixup that calls them recolors.

use crate::node::{NodeId, Side};
use crate::RbTree;

impl<K, V, C> RbTree<K, V, C> {
    /// Rotate left
    ///
    /// Panics if `anchor` has no right child
    pub(crate) fn rotate_left(&mut self, anchor: NodeId) {
        self.rotate(anchor, Side::Left);
    }

    /// Rotate right
    ///
    /// Panics if `anchor` has no left child
    pub(crate) fn rotate_right(&mut self, anchor: NodeId) {
        self.rotate(anchor, Side::Right);
    }

    /// Rotate the subtree at the parent of `id` so that `id` takes its place
    pub(crate) fn rotate_up(&mut self, id: NodeId) {
        let (Some(parent), Some(side)) = (self.parent(id), self.side_of(id)) else {
            panic!("cannot rotate the root {id:?} up");
        };
        // A left child comes up through a right rotation and vice versa
        self.rotate(parent, side.opposite());
    }

    /// Move `anchor` down towards `toward`, lifting its child on the other side
    fn rotate(&mut self, anchor: NodeId, toward: Side) {
        let lifted = toward.opposite();
        let pivot = self
            .node(anchor)
            .child(lifted)
            .unwrap_or_else(|| panic!("empty leaf can not become internal: {anchor:?}"));
        let inner = self.node(pivot).child(toward);

        self.relink(anchor, Some(pivot));

        self.node_mut(anchor).set_child(lifted, inner);
        if let Some(inner) = inner {
            self.node_mut(inner).parent = Some(anchor);
        }

        self.node_mut(pivot).set_child(toward, Some(anchor));
        self.node_mut(anchor).parent = Some(pivot);
    }
}
