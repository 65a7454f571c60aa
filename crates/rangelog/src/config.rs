// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Command-line configuration for rangelog
//!
//! This module provides the clap definition of the command line and turns a
//! parsed [`Config`] into a reference request and resolved output options.

use std::path::PathBuf;

use clap::Parser;

use crate::diff::DEFAULT_CONTEXT;
use crate::error::RangeLogError;
use crate::options::{OptionFlags, OutputOptions};
use crate::resolve::RefRequest;

/// Compare the commit logs of two history ranges
///
/// Shows what a rebase or history rewrite really changed: both ranges are
/// rendered as normalized logs (commit hashes dropped by default) and diffed.
///
/// Missing references are derived: NEW_HEAD defaults to HEAD; without bases
/// both ranges start at merge-base(OLD_HEAD, NEW_HEAD); with one base the
/// other is the merge base of the given base and the opposite head.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "rangelog")]
#[command(version, about, long_about)]
pub struct Config {
    /// OLD_HEAD then NEW_HEAD; each fills the first one not set by flag
    #[arg(value_name = "REV")]
    pub revisions: Vec<String>,

    /// Tip of the old range
    #[arg(long = "old-head", visible_alias = "old", value_name = "REV")]
    pub old_head: Option<String>,

    /// Tip of the new range (default: HEAD)
    #[arg(long = "new-head", visible_alias = "new", value_name = "REV")]
    pub new_head: Option<String>,

    /// Start of the old range
    #[arg(long, value_name = "REV")]
    pub old_base: Option<String>,

    /// Start of the new range
    #[arg(long, value_name = "REV")]
    pub new_base: Option<String>,

    /// Start of both ranges, unless --old-base/--new-base say otherwise
    #[arg(long, value_name = "REV")]
    pub base: Option<String>,

    /// Only consider changes under this path (repeatable)
    #[arg(long = "path", value_name = "PATH")]
    pub paths: Vec<String>,

    /// Paths given after `--`, appended to --path
    #[arg(last = true, value_name = "PATH")]
    pub trailing_paths: Vec<String>,

    /// Include each commit's patch
    #[arg(short = 'p', long, overrides_with = "no_patch")]
    pub patch: bool,

    /// Omit patches (default)
    #[arg(long, overrides_with = "patch")]
    pub no_patch: bool,

    /// Show the tree diff between OLD_BASE and NEW_BASE (default: with --patch)
    #[arg(long, overrides_with = "no_diff_bases")]
    pub diff_bases: bool,

    /// Do not show the tree diff between the bases
    #[arg(long, overrides_with = "diff_bases")]
    pub no_diff_bases: bool,

    /// Show the tree diff between OLD_HEAD and NEW_HEAD (default: with --patch)
    #[arg(long, overrides_with = "no_diff_heads")]
    pub diff_heads: bool,

    /// Do not show the tree diff between the heads
    #[arg(long, overrides_with = "diff_heads")]
    pub no_diff_heads: bool,

    /// Add a stable patch id line to every commit
    #[arg(long, overrides_with = "exclude_stable_patch_id")]
    pub include_stable_patch_id: bool,

    /// Leave out stable patch ids (default)
    #[arg(long, overrides_with = "include_stable_patch_id")]
    pub exclude_stable_patch_id: bool,

    /// Keep commit hashes in the compared logs
    #[arg(long, overrides_with = "exclude_commit_hash")]
    pub include_commit_hash: bool,

    /// Drop commit hashes from the compared logs (default)
    #[arg(long, overrides_with = "include_commit_hash")]
    pub exclude_commit_hash: bool,

    /// Repository to inspect
    ///
    /// Defaults to the repository containing the current directory.
    #[arg(short = 'C', long = "repo", env = "RANGELOG_REPO", value_name = "PATH")]
    pub repo: Option<PathBuf>,

    /// Lines of context around each change in the range diff
    #[arg(short = 'U', long = "unified", value_name = "N", default_value_t = DEFAULT_CONTEXT)]
    pub context: usize,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so they never mix with the report.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - only print the range diff
    ///
    /// Suppresses the reference and tree report and all logs below error.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

/// Read a `--flag` / `--no-flag` pair as a tri-state
///
/// clap's `overrides_with` leaves at most one of the pair set.
fn toggle(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}

impl Config {
    /// Build the reference request from flags and positional revisions
    ///
    /// Positional revisions fill OLD_HEAD then NEW_HEAD, skipping any that a
    /// flag already set. `--base` applies to whichever base is not given.
    ///
    /// # Errors
    ///
    /// Returns `RangeLogError::UnexpectedArgument` for a positional revision
    /// with no slot left.
    pub fn ref_request(&self) -> Result<RefRequest, RangeLogError> {
        let mut request = RefRequest {
            old_head: self.old_head.clone(),
            new_head: self.new_head.clone(),
            old_base: self.old_base.clone().or_else(|| self.base.clone()),
            new_base: self.new_base.clone().or_else(|| self.base.clone()),
        };

        for revision in &self.revisions {
            if request.old_head.is_none() {
                request.old_head = Some(revision.clone());
            } else if request.new_head.is_none() {
                request.new_head = Some(revision.clone());
            } else {
                return Err(RangeLogError::UnexpectedArgument(revision.clone()));
            }
        }

        Ok(request)
    }

    /// Output toggles exactly as given on the command line
    #[must_use]
    pub fn option_flags(&self) -> OptionFlags {
        OptionFlags {
            include_patch: toggle(self.patch, self.no_patch),
            diff_bases: toggle(self.diff_bases, self.no_diff_bases),
            diff_heads: toggle(self.diff_heads, self.no_diff_heads),
            include_stable_patch_id: toggle(
                self.include_stable_patch_id,
                self.exclude_stable_patch_id,
            ),
            include_commit_hash: toggle(self.include_commit_hash, self.exclude_commit_hash),
            path_filters: self
                .paths
                .iter()
                .chain(&self.trailing_paths)
                .cloned()
                .collect(),
        }
    }

    /// Resolved output options
    #[must_use]
    pub fn output_options(&self) -> OutputOptions {
        self.option_flags().resolve()
    }

    /// Get the repository path, using the current directory as default
    #[must_use]
    pub fn repo_path(&self) -> PathBuf {
        self.repo.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::ERROR
        } else {
            tracing::Level::WARN
        }
    }
}
