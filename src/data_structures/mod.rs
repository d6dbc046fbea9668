//! Data structures for the TST toolkit.
//!
//! This module contains the ordered string-set structures the rest of the
//! crate builds on. All implementations adhere to the project requirements:
//! - No unsafe code
//! - Exclusive ownership of nodes, no shared or cyclic links
//! - Code-point (not byte) comparison of characters

pub mod ternary_tree;

// Re-export common data structures
pub use ternary_tree::{TernarySearchTree, TernaryTreeError, TernaryTreeResult};
