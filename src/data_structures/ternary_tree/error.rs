// Copyright (c) 2026 TST Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Error types for the ternary search tree.

/// Errors that can occur while building tree components.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TernaryTreeError {
    /// A character slot was given a value spanning more than one code point.
    #[error("Invalid argument: '{value}' is not a single character")]
    InvalidArgument {
        /// The rejected value.
        value: String,
    },
}

/// Result type for ternary search tree operations.
pub type TernaryTreeResult<T> = Result<T, TernaryTreeError>;
