//! Redblack - ordered map with pop-minimum
//!
//! Re-exports the red-black tree container and adds the pieces needed to
//! drive it from outside: YAML/environment configuration, tracing bootstrap
//! and the soak workload used by the `redblack-soak` binary.

pub mod config;
pub mod soak;
pub mod utils;

pub use redblack_rbtree::{Comparator, InvariantError, NaturalOrder, RbColor, RbTree};
