// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for rangelog

use rangelog_git::GitError;
use thiserror::Error;

/// Errors that abort a range comparison
#[derive(Debug, Error)]
pub enum RangeLogError {
    /// OLD_HEAD was not given, positionally or by flag
    #[error("OLD_HEAD is required")]
    MissingRequiredReference,

    /// A merge base needed to fill in a missing reference could not be computed
    #[error("Cannot compute merge base of {left} and {right}")]
    UnresolvableReference {
        /// Left-hand reference
        left: String,
        /// Right-hand reference
        right: String,
        /// Underlying git failure
        #[source]
        source: GitError,
    },

    /// More positional arguments than OLD_HEAD and NEW_HEAD
    #[error("Unexpected argument: {0}")]
    UnexpectedArgument(String),

    /// Any other failure reported by the repository
    #[error(transparent)]
    Git(#[from] GitError),

    /// Writing the report failed
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl RangeLogError {
    /// Whether the error is a command-line usage problem
    #[must_use]
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            Self::MissingRequiredReference | Self::UnexpectedArgument(_)
        )
    }
}
