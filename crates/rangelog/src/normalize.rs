// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Log normalization
//!
//! Turns a raw range log into a stream that diffs cleanly against another
//! range: every `commit <sha>` header becomes a `BeginCommit` marker (the
//! hash is dropped unless requested), every commit is closed by `EndCommit`,
//! and consecutive commits are separated by a blank line. All other lines
//! pass through untouched.

use crate::error::RangeLogError;
use crate::options::OutputOptions;
use crate::resolve::Range;
use rangelog_git::{History, LogRequest};
use tracing::debug;

/// Opens a commit record
pub const BEGIN_COMMIT: &str = "BeginCommit";

/// Closes a commit record
pub const END_COMMIT: &str = "EndCommit";

/// Prefix of the optional patch id line
pub const PATCH_ID_PREFIX: &str = "ComputedStablePatchId:";

/// Patch ids are cut to this many characters
pub const PATCH_ID_LEN: usize = 40;

/// Scanner state between lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// No commit record is open
    Idle,
    /// A commit record is open and must be closed
    InCommit,
}

/// Extract the hash from a `commit <hex>` header line
///
/// The line must consist of exactly `commit `, followed by one or more
/// hexadecimal characters.
#[must_use]
pub fn commit_header(line: &str) -> Option<&str> {
    let hash = line.strip_prefix("commit ")?;
    (!hash.is_empty() && hash.chars().all(|c| c.is_ascii_hexdigit())).then_some(hash)
}

/// Line-by-line normalizer for one range log
pub struct Normalizer<'a> {
    options: &'a OutputOptions,
    history: &'a dyn History,
    state: ScanState,
    lines: Vec<String>,
    commits: usize,
}

impl<'a> Normalizer<'a> {
    /// Create an idle normalizer
    ///
    /// `history` is only queried when stable patch ids are requested.
    #[must_use]
    pub fn new(options: &'a OutputOptions, history: &'a dyn History) -> Self {
        Self {
            options,
            history,
            state: ScanState::Idle,
            lines: Vec::new(),
            commits: 0,
        }
    }

    /// Current scanner state
    #[must_use]
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Number of commit records opened so far
    #[must_use]
    pub fn commits(&self) -> usize {
        self.commits
    }

    /// Consume one raw log line
    ///
    /// # Errors
    ///
    /// Returns `RangeLogError::Git` if a stable patch id cannot be computed.
    pub fn push_line(&mut self, line: &str) -> Result<(), RangeLogError> {
        let Some(hash) = commit_header(line) else {
            self.lines.push(line.to_string());
            return Ok(());
        };

        if self.state == ScanState::InCommit {
            self.lines.push(END_COMMIT.to_string());
            self.lines.push(String::new());
        }

        if self.options.include_commit_hash {
            self.lines.push(format!("{BEGIN_COMMIT} {hash}"));
        } else {
            self.lines.push(BEGIN_COMMIT.to_string());
        }

        if self.options.include_stable_patch_id {
            let id = self
                .history
                .stable_patch_id(hash)?
                .map(|id| id.chars().take(PATCH_ID_LEN).collect::<String>())
                .unwrap_or_default();
            // No trailing space when there is no id
            if id.is_empty() {
                self.lines.push(PATCH_ID_PREFIX.to_string());
            } else {
                self.lines.push(format!("{PATCH_ID_PREFIX} {id}"));
            }
        }

        self.state = ScanState::InCommit;
        self.commits += 1;
        Ok(())
    }

    /// Close any open record and return the normalized lines
    #[must_use]
    pub fn finish(mut self) -> Vec<String> {
        if self.state == ScanState::InCommit {
            self.lines.push(END_COMMIT.to_string());
            self.state = ScanState::Idle;
        }
        self.lines
    }
}

/// Normalize an already rendered range log
///
/// # Errors
///
/// Returns `RangeLogError::Git` if a stable patch id cannot be computed.
pub fn normalize_log(
    raw: &str,
    options: &OutputOptions,
    history: &dyn History,
) -> Result<Vec<String>, RangeLogError> {
    let mut normalizer = Normalizer::new(options, history);
    for line in raw.lines() {
        normalizer.push_line(line)?;
    }
    Ok(normalizer.finish())
}

/// Render and normalize the log of one range
///
/// # Errors
///
/// Returns `RangeLogError::Git` if the range cannot be logged or a patch id
/// cannot be computed.
pub fn normalize(
    history: &dyn History,
    range: Range<'_>,
    options: &OutputOptions,
) -> Result<Vec<String>, RangeLogError> {
    let request = LogRequest::new(range.base, range.head)
        .with_paths(&options.path_filters)
        .with_patch(options.include_patch);
    let raw = history.log(&request)?;
    let lines = normalize_log(&raw, options, history)?;
    debug!(%range, lines = lines.len(), "normalized range");
    Ok(lines)
}
