//! Node model
//!
//! Nodes live in the tree's slab and refer to each other through [`NodeId`]
//! handles. Child links are the owning relationship; `parent` is only a
//! navigation aid and is rewritten every time a node is relinked.

/// Red-Black tree node color
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RbColor {
    Red,
    Black,
}

/// Handle of a node inside the tree's arena
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(pub(crate) usize);

/// Which child link of a parent a node occupies
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    pub(crate) fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct RbNode<K, V> {
    pub(crate) color: RbColor,
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    pub(crate) parent: Option<NodeId>,
}

impl<K, V> RbNode<K, V> {
    /// Fresh detached node; new nodes always start red
    pub(crate) fn new(key: K, value: V) -> Self {
        Self {
            color: RbColor::Red,
            key,
            value,
            left: None,
            right: None,
            parent: None,
        }
    }

    pub(crate) fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn set_child(&mut self, side: Side, child: Option<NodeId>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    /// The only child of a node with at most one child
    pub(crate) fn only_child(&self) -> Option<NodeId> {
        assert!(
            self.left.is_none() || self.right.is_none(),
            "only_child called on a node with two children"
        );
        self.left.or(self.right)
    }

    pub(crate) fn is_red(&self) -> bool {
        self.color == RbColor::Red
    }
}
