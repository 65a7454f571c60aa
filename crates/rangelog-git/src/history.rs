// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! The read-only view of commit history that range comparison relies on
//!
//! [`History`] is implemented by [`crate::GitRepo`] on top of `git2`; tests
//! substitute in-memory doubles.

use crate::error::GitError;

/// Parameters for rendering the log of one commit range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogRequest<'a> {
    /// Commits reachable from `base` are excluded
    pub base: &'a str,
    /// Tip of the range
    pub head: &'a str,
    /// Restrict the log (and patches) to these paths when non-empty
    pub paths: &'a [String],
    /// Append each commit's patch against its first parent
    pub include_patch: bool,
}

impl<'a> LogRequest<'a> {
    /// Log of `base..head` without patches or path restriction
    #[must_use]
    pub fn new(base: &'a str, head: &'a str) -> Self {
        Self {
            base,
            head,
            paths: &[],
            include_patch: false,
        }
    }

    /// Restrict to the given paths
    #[must_use]
    pub fn with_paths(mut self, paths: &'a [String]) -> Self {
        self.paths = paths;
        self
    }

    /// Set whether patches are appended
    #[must_use]
    pub fn with_patch(mut self, include_patch: bool) -> Self {
        self.include_patch = include_patch;
        self
    }
}

/// Repository queries needed to compare two commit ranges
///
/// All operations are read-only. References are opaque revision strings
/// (branch, tag, SHA or expression such as `main~2`).
pub trait History {
    /// Resolve a reference to its full commit SHA
    ///
    /// # Errors
    ///
    /// Returns `GitError::InvalidReference` if the reference is unknown.
    fn resolve_ref(&self, reference: &str) -> Result<String, GitError>;

    /// Nearest common ancestor of two references, as a full SHA
    ///
    /// # Errors
    ///
    /// Returns `GitError::NoMergeBase` for unrelated histories and
    /// `GitError::InvalidReference` for unknown references.
    fn merge_base(&self, left: &str, right: &str) -> Result<String, GitError>;

    /// Render the log of a range, oldest commit first
    ///
    /// Each commit starts with a `commit <sha>` line followed by `Author:`,
    /// `AuthorDate:` and `Summary:` lines, a blank line, the indented body
    /// and, when requested, a blank line and the patch.
    ///
    /// # Errors
    ///
    /// Returns `GitError` if either end of the range cannot be resolved.
    fn log(&self, request: &LogRequest<'_>) -> Result<String, GitError>;

    /// Unified patch between the trees of two commits; empty when identical
    ///
    /// # Errors
    ///
    /// Returns `GitError` if either reference cannot be resolved.
    fn tree_diff(&self, left: &str, right: &str, paths: &[String]) -> Result<String, GitError>;

    /// Nearest tag or branch name describing the reference
    ///
    /// # Errors
    ///
    /// Returns `GitError::Describe` when no name is reachable.
    fn describe(&self, reference: &str) -> Result<String, GitError>;

    /// Content-derived patch identifier of a commit's change
    ///
    /// Returns `None` for commits that introduce no change against their
    /// first parent, and for merges.
    ///
    /// # Errors
    ///
    /// Returns `GitError` if the commit cannot be found or diffed.
    fn stable_patch_id(&self, commit: &str) -> Result<Option<String>, GitError>;
}
