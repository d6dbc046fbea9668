//! Test modules for the TST toolkit.
//!
//! This module contains crate-level test suites that span more than one
//! module:
//! - Configuration loading and validation
//! - Error conversion and display
//! - Shared fixtures and utilities
//!
//! Tree tests live next to the tree in `data_structures::ternary_tree::tests`.


// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::TestFixture;
