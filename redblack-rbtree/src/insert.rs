//! Insertion pipeline
//!
//! A new entry is attached red as a leaf below the node [`RbTree::locate`]
//! stops at, then the fixup walks up the ancestor chain until no red node
//! has a red parent.

use tracing::{debug, trace};

use crate::compare::Comparator;
use crate::node::{NodeId, RbColor, RbNode};
use crate::RbTree;

/// Local pattern around a freshly red node, decided before each fixup step
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum InsertCase {
    /// Node is the root: paint it black
    Root,
    /// Parent is black: nothing to repair
    BlackParent,
    /// Parent and aunt are red: push the blackness down from the grandparent
    RedAunt {
        parent: NodeId,
        aunt: NodeId,
        grandparent: NodeId,
    },
    /// Parent is red, aunt black or absent: rotate the grandparent away
    BlackAunt { parent: NodeId, grandparent: NodeId },
}

impl<K, V, C> RbTree<K, V, C>
where
    C: Comparator<K>,
{
    /// Insert an entry
    ///
    /// Never overwrites: an equivalent key already in the tree stays, and the
    /// new entry is attached to its right.
    pub fn add(&mut self, key: K, value: V) {
        let id = NodeId(self.nodes.insert(RbNode::new(key, value)));

        let Some(anchor) = self.locate(&self.node(id).key) else {
            debug!(?id, "insert into empty tree");
            self.root = Some(id);
            self.set_color(id, RbColor::Black);
            return;
        };

        let side = self.descend_side(&self.node(id).key, anchor);
        assert!(
            self.node(anchor).child(side).is_none(),
            "locate returned a non-leaf position for insertion"
        );
        self.node_mut(anchor).set_child(side, Some(id));
        self.node_mut(id).parent = Some(anchor);
        debug!(?id, ?anchor, ?side, "attached new node");

        self.fix_after_insert(id);
    }

    fn classify_insert(&self, id: NodeId) -> InsertCase {
        let Some(parent) = self.parent(id) else {
            return InsertCase::Root;
        };
        if !self.is_red(Some(parent)) {
            return InsertCase::BlackParent;
        }
        let Some(grandparent) = self.grandparent(id) else {
            panic!("red parent {parent:?} is the root");
        };
        match self.aunt(id) {
            Some(aunt) if self.is_red(Some(aunt)) => InsertCase::RedAunt {
                parent,
                aunt,
                grandparent,
            },
            _ => InsertCase::BlackAunt {
                parent,
                grandparent,
            },
        }
    }

    fn fix_after_insert(&mut self, mut id: NodeId) {
        loop {
            let case = self.classify_insert(id);
            trace!(?id, ?case, "insert fixup");
            match case {
                InsertCase::Root => {
                    self.set_color(id, RbColor::Black);
                    return;
                }
                InsertCase::BlackParent => return,
                InsertCase::RedAunt {
                    parent,
                    aunt,
                    grandparent,
                } => {
                    self.set_color(parent, RbColor::Black);
                    self.set_color(aunt, RbColor::Black);
                    self.set_color(grandparent, RbColor::Red);
                    id = grandparent;
                }
                InsertCase::BlackAunt {
                    parent,
                    grandparent,
                } => {
                    // An inner grandchild first takes its parent's place so
                    // the red pair lines up on the outside
                    let top = if self.side_of(id) != self.side_of(parent) {
                        self.rotate_up(id);
                        id
                    } else {
                        parent
                    };
                    self.rotate_up(top);
                    self.set_color(top, RbColor::Black);
                    self.set_color(grandparent, RbColor::Red);
                    return;
                }
            }
        }
    }
}
