// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for rangelog-git

use thiserror::Error;

/// Errors that can occur during git operations
#[derive(Debug, Error)]
pub enum GitError {
    /// Error from git2 library
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),

    /// Repository not found at the specified path
    #[error("Repository not found: {path}")]
    RepositoryNotFound {
        /// The path that was searched for a repository
        path: String,
    },

    /// Invalid commit reference (branch, tag, SHA or revision expression)
    #[error("Invalid commit reference: {reference}")]
    InvalidReference {
        /// The reference string that could not be resolved
        reference: String,
    },

    /// The two references share no common ancestor
    #[error("No merge base between {left} and {right}")]
    NoMergeBase {
        /// Left-hand reference as given
        left: String,
        /// Right-hand reference as given
        right: String,
    },

    /// No tag or branch is reachable from the reference
    #[error("Cannot describe {reference}: {message}")]
    Describe {
        /// The reference being described
        reference: String,
        /// Message reported by libgit2
        message: String,
    },
}
