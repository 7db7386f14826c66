//! Deletion pipeline
//!
//! Removal never splices a node with two children. The descent in
//! [`RbTree::locate_match`] stops at a node with at most one child (the copy
//! source); when the matched node is elsewhere, the two swap entries and the
//! copy source is the one physically unlinked.
//!
//! Unlinking a black node leaves its position one black short ("double
//! black"). A red replacement absorbs that by turning black; otherwise the
//! fixup below walks up until a rotation or recoloring settles it.

use tracing::{debug, trace};

use crate::compare::Comparator;
use crate::node::{NodeId, RbColor, Side};
use crate::RbTree;

/// Local pattern around a double-black position, decided before each step
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum DeleteCase {
    /// Deficiency reached the root: every path lost one black, nothing to do
    Root,
    /// Red sibling: rotate it up so the node gets a black sibling
    RedSibling { parent: NodeId, sibling: NodeId },
    /// Everything black around: paint the sibling red, push the deficiency up
    BlackParentBlackNephews { parent: NodeId, sibling: NodeId },
    /// Red parent, black nephews: swap parent and sibling colors
    RedParentBlackNephews { parent: NodeId, sibling: NodeId },
    /// Only the nephew on the node's side is red: turn it into the far case
    NearNephewRed { sibling: NodeId, near: NodeId },
    /// Nephew away from the node is red: rotate the parent towards the node
    FarNephewRed {
        parent: NodeId,
        sibling: NodeId,
        far: NodeId,
        side: Side,
    },
}

impl<K, V, C> RbTree<K, V, C>
where
    C: Comparator<K>,
{
    /// Remove one entry whose key is equivalent to `key`
    ///
    /// Returns the removed entry, or `None` (leaving the tree untouched) when
    /// no equivalent key is present. With duplicates the in-order last
    /// equivalent entry goes.
    pub fn remove(&mut self, key: &K) -> Option<(K, V)> {
        let found = self.locate_match(key)?;
        if found.matched != found.source {
            debug!(
                matched = ?found.matched,
                source = ?found.source,
                "copying entry over matched node"
            );
            self.swap_entries(found.matched, found.source);
        }
        Some(self.remove_node(found.source))
    }

    fn swap_entries(&mut self, a: NodeId, b: NodeId) {
        let Some((a, b)) = self.nodes.get2_mut(a.0, b.0) else {
            panic!("swap_entries on stale or identical handles {a:?}, {b:?}");
        };
        core::mem::swap(&mut a.key, &mut b.key);
        core::mem::swap(&mut a.value, &mut b.value);
    }

    /// Unlink a node with at most one child, rebalance and free its slot
    pub(crate) fn remove_node(&mut self, id: NodeId) -> (K, V) {
        let child = self.node(id).only_child();
        let removed_black = self.color(id) == RbColor::Black;

        match child {
            Some(child) => {
                self.relink(id, Some(child));
                if removed_black {
                    if self.is_red(Some(child)) {
                        self.set_color(child, RbColor::Black);
                    } else {
                        self.fix_after_remove(child);
                    }
                }
            }
            None => {
                // The leaf stands in for its own empty slot during the fixup
                if removed_black {
                    self.fix_after_remove(id);
                }
                self.relink(id, None);
            }
        }
        debug!(?id, removed_black, "unlinked node");

        let node = self.nodes.remove(id.0);
        (node.key, node.value)
    }

    fn classify_remove(&self, id: NodeId) -> DeleteCase {
        let (Some(parent), Some(side)) = (self.parent(id), self.side_of(id)) else {
            return DeleteCase::Root;
        };
        let Some(sibling) = self.node(parent).child(side.opposite()) else {
            panic!("double-black node {id:?} has no sibling");
        };
        if self.is_red(Some(sibling)) {
            return DeleteCase::RedSibling { parent, sibling };
        }

        let near = self.node(sibling).child(side);
        let far = self.node(sibling).child(side.opposite());
        match (near, far) {
            (_, Some(far)) if self.is_red(Some(far)) => DeleteCase::FarNephewRed {
                parent,
                sibling,
                far,
                side,
            },
            (Some(near), _) if self.is_red(Some(near)) => {
                DeleteCase::NearNephewRed { sibling, near }
            }
            _ if self.is_red(Some(parent)) => {
                DeleteCase::RedParentBlackNephews { parent, sibling }
            }
            _ => DeleteCase::BlackParentBlackNephews { parent, sibling },
        }
    }

    fn fix_after_remove(&mut self, mut id: NodeId) {
        loop {
            let case = self.classify_remove(id);
            trace!(?id, ?case, "remove fixup");
            match case {
                DeleteCase::Root => return,
                DeleteCase::RedSibling { parent, sibling } => {
                    self.set_color(sibling, RbColor::Black);
                    self.set_color(parent, RbColor::Red);
                    self.rotate_up(sibling);
                }
                DeleteCase::BlackParentBlackNephews { parent, sibling } => {
                    self.set_color(sibling, RbColor::Red);
                    id = parent;
                }
                DeleteCase::RedParentBlackNephews { parent, sibling } => {
                    self.set_color(sibling, RbColor::Red);
                    self.set_color(parent, RbColor::Black);
                    return;
                }
                DeleteCase::NearNephewRed { sibling, near } => {
                    self.set_color(sibling, RbColor::Red);
                    self.set_color(near, RbColor::Black);
                    self.rotate_up(near);
                }
                DeleteCase::FarNephewRed {
                    parent,
                    sibling,
                    far,
                    side,
                } => {
                    let parent_color = self.color(parent);
                    self.set_color(sibling, parent_color);
                    self.set_color(parent, RbColor::Black);
                    self.set_color(far, RbColor::Black);
                    match side {
                        Side::Left => self.rotate_left(parent),
                        Side::Right => self.rotate_right(parent),
                    }
                    return;
                }
            }
        }
    }
}
