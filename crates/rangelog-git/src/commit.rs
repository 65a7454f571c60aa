// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Commit log entries and their textual rendering

use chrono::{DateTime, FixedOffset, Offset, Utc};
use std::fmt::Write as _;

/// Date layout used for `AuthorDate:` lines (git's default date format)
pub const AUTHOR_DATE_FORMAT: &str = "%a %b %-d %H:%M:%S %Y %z";

/// Indentation applied to message body lines
pub const BODY_INDENT: &str = "    ";

/// One commit as it appears in a range log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// The commit SHA (40 hex characters)
    pub sha: String,
    /// Author name
    pub author: String,
    /// Author email
    pub author_email: String,
    /// Author timestamp in the author's own time zone
    pub author_time: DateTime<FixedOffset>,
    /// Full commit message
    pub message: String,
}

impl LogEntry {
    /// Build an entry from a git2 commit
    #[must_use]
    pub fn from_git2(commit: &git2::Commit<'_>) -> Self {
        let author = commit.author();
        let when = author.when();
        let offset = FixedOffset::east_opt(when.offset_minutes() * 60)
            .unwrap_or_else(|| Utc.fix());
        let author_time = DateTime::from_timestamp(when.seconds(), 0)
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
            .with_timezone(&offset);

        Self {
            sha: commit.id().to_string(),
            author: String::from_utf8_lossy(author.name_bytes()).into_owned(),
            author_email: String::from_utf8_lossy(author.email_bytes()).into_owned(),
            author_time,
            message: String::from_utf8_lossy(commit.message_bytes()).into_owned(),
        }
    }

    /// The subject: the first paragraph of the message folded onto one line
    #[must_use]
    pub fn subject(&self) -> String {
        self.message
            .lines()
            .skip_while(|line| line.trim().is_empty())
            .take_while(|line| !line.trim().is_empty())
            .map(str::trim)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Body lines: everything after the subject paragraph, without leading
    /// or trailing blank lines
    #[must_use]
    pub fn body_lines(&self) -> Vec<&str> {
        let mut lines = self
            .message
            .lines()
            .skip_while(|line| line.trim().is_empty())
            .skip_while(|line| !line.trim().is_empty())
            .skip_while(|line| line.trim().is_empty())
            .map(str::trim_end)
            .collect::<Vec<_>>();
        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }
        lines
    }

    /// Render the entry header and indented body
    ///
    /// ```text
    /// commit <sha>
    /// Author: <name> <email>
    /// AuthorDate: <date>
    /// Summary: <subject>
    ///
    ///     <body>
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = writeln!(out, "commit {}", self.sha);
        let _ = writeln!(out, "Author: {} <{}>", self.author, self.author_email);
        let _ = writeln!(
            out,
            "AuthorDate: {}",
            self.author_time.format(AUTHOR_DATE_FORMAT)
        );
        let _ = writeln!(out, "Summary: {}", self.subject());
        out.push('\n');
        for line in self.body_lines() {
            if line.is_empty() {
                out.push('\n');
            } else {
                let _ = writeln!(out, "{BODY_INDENT}{line}");
            }
        }
        out
    }
}
