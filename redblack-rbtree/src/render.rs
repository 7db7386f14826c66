//! Breadth-first debug dump
//!
//! One line per level, cells separated by spaces. Each cell is
//! `key:value/R` or `key:value/B`; `.` marks a missing child of a node on the
//! level above. The format is for eyeballing only.

use core::fmt::{Display, Write};

use crate::node::NodeId;
use crate::RbTree;

impl<K, V, C> RbTree<K, V, C>
where
    K: Display,
    V: Display,
{
    /// Render the tree level by level; empty string for an empty tree
    pub fn render_levels(&self) -> String {
        let mut out = String::new();
        let mut level: Vec<Option<NodeId>> = vec![self.root];

        while level.iter().any(Option::is_some) {
            let mut next = Vec::with_capacity(level.len() * 2);
            for (i, cell) in level.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                match *cell {
                    Some(id) => {
                        let node = self.node(id);
                        let color = if node.is_red() { 'R' } else { 'B' };
                        // Writing into a String cannot fail
                        let _ = write!(out, "{}:{}/{}", node.key, node.value, color);
                        next.push(node.left);
                        next.push(node.right);
                    }
                    None => out.push('.'),
                }
            }
            out.push('\n');
            level = next;
        }
        out
    }
}
