// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Output options
//!
//! Command-line toggles arrive as tri-states (unset, on, off). They are
//! resolved exactly once into an [`OutputOptions`] that the rest of the
//! program reads and never modifies.

/// Output toggles as given by the user; `None` means "not specified"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionFlags {
    /// Append each commit's patch to its log entry
    pub include_patch: Option<bool>,
    /// Show the tree diff between OLD_BASE and NEW_BASE
    pub diff_bases: Option<bool>,
    /// Show the tree diff between OLD_HEAD and NEW_HEAD
    pub diff_heads: Option<bool>,
    /// Emit a `ComputedStablePatchId:` line per commit
    pub include_stable_patch_id: Option<bool>,
    /// Keep the commit hash on `BeginCommit` lines
    pub include_commit_hash: Option<bool>,
    /// Path filters, in the order given
    pub path_filters: Vec<String>,
}

/// Fully determined output options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputOptions {
    /// Append each commit's patch to its log entry
    pub include_patch: bool,
    /// Show the tree diff between OLD_BASE and NEW_BASE
    pub diff_bases: bool,
    /// Show the tree diff between OLD_HEAD and NEW_HEAD
    pub diff_heads: bool,
    /// Emit a `ComputedStablePatchId:` line per commit
    pub include_stable_patch_id: bool,
    /// Keep the commit hash on `BeginCommit` lines
    pub include_commit_hash: bool,
    /// Restrict logs and tree diffs to these paths when non-empty
    pub path_filters: Vec<String>,
}

impl OptionFlags {
    /// Resolve unset toggles to their defaults
    ///
    /// `diff_bases` and `diff_heads` follow `include_patch` unless given
    /// explicitly; everything else defaults to off.
    #[must_use]
    pub fn resolve(self) -> OutputOptions {
        let include_patch = self.include_patch.unwrap_or(false);
        OutputOptions {
            include_patch,
            diff_bases: self.diff_bases.unwrap_or(include_patch),
            diff_heads: self.diff_heads.unwrap_or(include_patch),
            include_stable_patch_id: self.include_stable_patch_id.unwrap_or(false),
            include_commit_hash: self.include_commit_hash.unwrap_or(false),
            path_filters: self.path_filters,
        }
    }
}
