//! Scenario helpers

use std::fmt;

use redblack_rbtree::{Comparator, RbTree};

/// Opaque value stored in scenario trees
///
/// Scenarios mix integer and string payloads; the tree never inspects them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Int(i64),
    Text(String),
}

impl Payload {
    /// Parse a step argument: `"quoted"` is text, anything else an integer
    pub fn parse(raw: &str) -> Result<Self, String> {
        let raw = raw.trim();
        if let Some(text) = raw.strip_prefix('"').and_then(|r| r.strip_suffix('"')) {
            return Ok(Payload::Text(text.to_string()));
        }
        raw.parse()
            .map(Payload::Int)
            .map_err(|e| format!("payload {raw:?} is neither quoted text nor an integer: {e}"))
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Int(n) => write!(f, "{n}"),
            Payload::Text(s) => write!(f, "{s:?}"),
        }
    }
}

/// Pop every entry, minimum first
pub fn drain<K, V, C>(tree: &mut RbTree<K, V, C>) -> Vec<(K, V)>
where
    C: Comparator<K>,
{
    std::iter::from_fn(|| tree.pop()).collect()
}
