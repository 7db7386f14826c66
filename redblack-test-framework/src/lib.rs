//! Test framework for the redblack tree
//!
//! Shared helpers for the Gherkin scenarios under `features/`. The scenarios
//! drive the tree only through its public operations.

pub mod helpers;

pub use helpers::{drain, Payload};
