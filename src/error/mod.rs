//! Error module for the TST toolkit.
//!
//! This module provides the crate-wide error type. Each data structure keeps
//! its own error enum next to its implementation; those convert into
//! [`TstError`] so library and CLI code can propagate them with `?`.

use thiserror::Error;

use crate::data_structures::TernaryTreeError;

pub mod config;

/// Result type alias used throughout the TST toolkit.
pub type TstResult<T> = Result<T, TstError>;

/// Core error enum for the TST toolkit.
#[derive(Error, Debug)]
pub enum TstError {
    /// Errors raised while building tree components.
    #[error("Tree error: {0}")]
    Tree(#[from] TernaryTreeError),

    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// IO errors that may occur while reading word lists.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors from JSON output.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}
