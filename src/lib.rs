//! TST Library
//!
//! This library contains a ternary search tree for ordered string sets and the
//! tooling around it: word-list loading, insertion-order helpers, and the
//! configuration and error types shared with the `tst` binary.
//!
//! # Architecture
//!
//! - [`data_structures::ternary_tree`] holds the tree itself and has no I/O.
//! - [`wordlist`] turns line-oriented files into terms and insertion orders.
//! - [`config`] and [`error`] carry the ambient settings and error types.
//!
//! # Example
//!
//! ```
//! use tst_lib::TernarySearchTree;
//!
//! let tree: TernarySearchTree = ["word", "work", "world"].into_iter().collect();
//! assert!(tree.search("wor", false));
//! assert_eq!(tree.strings_with_prefix("work"), vec!["work"]);
//! ```

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;
pub mod wordlist;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use data_structures::TernarySearchTree;
pub use error::{TstError, TstResult};

/// Version information for the TST toolkit.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
