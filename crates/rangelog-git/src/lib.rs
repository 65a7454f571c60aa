// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! rangelog-git: Git history access for rangelog
//!
//! This library crate provides the read-only repository queries that range
//! comparison needs: reference resolution, merge bases, range logs, tree
//! diffs, descriptions and stable patch ids.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use rangelog_git::{GitRepo, History, LogRequest};
//!
//! let repo = GitRepo::discover(".").expect("open repo");
//! let base = repo.merge_base("origin/main", "HEAD").expect("merge base");
//! let log = repo
//!     .log(&LogRequest::new(&base, "HEAD").with_patch(true))
//!     .expect("render log");
//!
//! print!("{log}");
//! ```

pub mod commit;
pub mod error;
pub mod history;
pub mod repo;

pub use commit::LogEntry;
pub use error::GitError;
pub use history::{History, LogRequest};
pub use repo::GitRepo;
