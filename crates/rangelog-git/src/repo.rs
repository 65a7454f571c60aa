// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! `git2`-backed implementation of [`History`]
//!
//! This module reads commit ranges, merge bases, tree diffs and patch ids
//! from a repository on disk. Nothing here writes to the repository.

use crate::commit::LogEntry;
use crate::error::GitError;
use crate::history::{History, LogRequest};
use git2::{
    DescribeOptions, Diff, DiffFormat, DiffOptions, ErrorCode, Oid, Repository, Sort, Tree,
};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// A git repository opened for read-only history queries
pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Open a git repository at the given path
    ///
    /// # Errors
    ///
    /// Returns `GitError::RepositoryNotFound` if the path is not a git repository.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, GitError> {
        let path = path.as_ref();
        let repo = Repository::open(path).map_err(|_| GitError::RepositoryNotFound {
            path: path.display().to_string(),
        })?;
        Ok(Self { repo })
    }

    /// Discover and open a git repository containing the given path
    ///
    /// This walks up the directory tree to find a `.git` directory.
    ///
    /// # Errors
    ///
    /// Returns `GitError::RepositoryNotFound` if no repository is found.
    pub fn discover(path: impl AsRef<Path>) -> Result<Self, GitError> {
        let path = path.as_ref();
        let repo = Repository::discover(path).map_err(|_| GitError::RepositoryNotFound {
            path: path.display().to_string(),
        })?;
        Ok(Self { repo })
    }

    /// Get the repository path (the `.git` directory)
    #[must_use]
    pub fn path(&self) -> &Path {
        self.repo.path()
    }

    /// Peel a reference to the commit it names
    fn find_commit(&self, reference: &str) -> Result<git2::Commit<'_>, GitError> {
        let invalid = |_| GitError::InvalidReference {
            reference: reference.to_string(),
        };
        self.repo
            .revparse_single(reference)
            .map_err(invalid)?
            .peel_to_commit()
            .map_err(invalid)
    }

    fn diff_options(paths: &[String]) -> DiffOptions {
        let mut opts = DiffOptions::new();
        for path in paths {
            opts.pathspec(path.as_str());
        }
        opts
    }

    /// Diff of a commit against its first parent (or the empty tree)
    ///
    /// Merge commits have no single patch and yield `None`.
    fn first_parent_diff(
        &self,
        commit: &git2::Commit<'_>,
        paths: &[String],
    ) -> Result<Option<Diff<'_>>, GitError> {
        if commit.parent_count() > 1 {
            return Ok(None);
        }
        let tree = commit.tree()?;
        let parent_tree = if commit.parent_count() == 1 {
            Some(commit.parent(0)?.tree()?)
        } else {
            None
        };
        let mut opts = Self::diff_options(paths);
        let diff =
            self.repo
                .diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), Some(&mut opts))?;
        Ok(Some(diff))
    }

    /// Whether `paths` differ between two trees (`None` is the empty tree)
    fn changes_paths(
        &self,
        old: Option<&Tree<'_>>,
        new: &Tree<'_>,
        paths: &[String],
    ) -> Result<bool, GitError> {
        let mut opts = Self::diff_options(paths);
        let diff = self
            .repo
            .diff_tree_to_tree(old, Some(new), Some(&mut opts))?;
        Ok(diff.deltas().len() > 0)
    }

    /// Commits of a path-limited range kept by git's default history
    /// simplification
    ///
    /// Walking back from `head`, a commit that matches one of its parents
    /// within `paths` is hidden and only that parent is followed, so side
    /// branches merged without effect on `paths` disappear. Other commits
    /// are kept and all their parents followed.
    fn simplify(
        &self,
        head: Oid,
        range: &HashSet<Oid>,
        paths: &[String],
    ) -> Result<HashSet<Oid>, GitError> {
        let mut kept = HashSet::new();
        let mut seen = HashSet::new();
        let mut pending = vec![head];

        while let Some(id) = pending.pop() {
            if !range.contains(&id) || !seen.insert(id) {
                continue;
            }
            let commit = self.repo.find_commit(id)?;
            let tree = commit.tree()?;

            if commit.parent_count() == 0 {
                if self.changes_paths(None, &tree, paths)? {
                    kept.insert(id);
                }
                continue;
            }

            let mut same_parent = None;
            for parent in commit.parents() {
                let parent_tree = parent.tree()?;
                if !self.changes_paths(Some(&parent_tree), &tree, paths)? {
                    same_parent = Some(parent.id());
                    break;
                }
            }

            match same_parent {
                Some(parent) => pending.push(parent),
                None => {
                    kept.insert(id);
                    pending.extend(commit.parent_ids());
                }
            }
        }

        Ok(kept)
    }
}

/// Render a diff as unified patch text
fn patch_text(diff: &Diff<'_>) -> Result<String, GitError> {
    let mut text = String::new();
    diff.print(DiffFormat::Patch, |_delta, _hunk, line| {
        if matches!(line.origin(), '+' | '-' | ' ') {
            text.push(line.origin());
        }
        text.push_str(&String::from_utf8_lossy(line.content()));
        true
    })?;
    Ok(text)
}

impl History for GitRepo {
    fn resolve_ref(&self, reference: &str) -> Result<String, GitError> {
        let sha = self.find_commit(reference)?.id().to_string();
        debug!(reference, %sha, "resolved reference");
        Ok(sha)
    }

    fn merge_base(&self, left: &str, right: &str) -> Result<String, GitError> {
        let left_id = self.find_commit(left)?.id();
        let right_id = self.find_commit(right)?.id();
        let base = self
            .repo
            .merge_base(left_id, right_id)
            .map_err(|e| match e.code() {
                ErrorCode::NotFound => GitError::NoMergeBase {
                    left: left.to_string(),
                    right: right.to_string(),
                },
                _ => GitError::Git2(e),
            })?;
        debug!(left, right, base = %base, "computed merge base");
        Ok(base.to_string())
    }

    fn log(&self, request: &LogRequest<'_>) -> Result<String, GitError> {
        let head = self.find_commit(request.head)?.id();
        let base = self.find_commit(request.base)?.id();

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME | Sort::REVERSE)?;
        revwalk.push(head)?;
        revwalk.hide(base)?;

        let ids = revwalk.collect::<Result<Vec<Oid>, _>>()?;
        let kept = if request.paths.is_empty() {
            None
        } else {
            let range: HashSet<Oid> = ids.iter().copied().collect();
            Some(self.simplify(head, &range, request.paths)?)
        };

        let mut out = String::new();
        let mut count = 0usize;
        for id in ids {
            if kept.as_ref().is_some_and(|kept| !kept.contains(&id)) {
                continue;
            }
            let commit = self.repo.find_commit(id)?;

            let entry = LogEntry::from_git2(&commit).render();
            out.push_str(&entry);
            count += 1;

            if request.include_patch {
                if let Some(diff) = self.first_parent_diff(&commit, request.paths)? {
                    if diff.deltas().len() > 0 {
                        // Entries without a body already end in a blank line
                        if !entry.ends_with("\n\n") {
                            out.push('\n');
                        }
                        out.push_str(&patch_text(&diff)?);
                    }
                }
            }
        }

        debug!(
            base = request.base,
            head = request.head,
            commits = count,
            "rendered range log"
        );
        Ok(out)
    }

    fn tree_diff(&self, left: &str, right: &str, paths: &[String]) -> Result<String, GitError> {
        let left_tree = self.find_commit(left)?.tree()?;
        let right_tree = self.find_commit(right)?.tree()?;
        let mut opts = Self::diff_options(paths);
        let diff =
            self.repo
                .diff_tree_to_tree(Some(&left_tree), Some(&right_tree), Some(&mut opts))?;
        patch_text(&diff)
    }

    fn describe(&self, reference: &str) -> Result<String, GitError> {
        let object = self
            .repo
            .revparse_single(reference)
            .map_err(|_| GitError::InvalidReference {
                reference: reference.to_string(),
            })?;
        let mut opts = DescribeOptions::new();
        opts.describe_all();
        let describe = object.describe(&opts).map_err(|e| GitError::Describe {
            reference: reference.to_string(),
            message: e.message().to_string(),
        })?;
        Ok(describe.format(None)?)
    }

    fn stable_patch_id(&self, commit: &str) -> Result<Option<String>, GitError> {
        let commit = self.find_commit(commit)?;
        let Some(diff) = self.first_parent_diff(&commit, &[])? else {
            return Ok(None);
        };
        if diff.deltas().len() == 0 {
            return Ok(None);
        }
        Ok(Some(diff.patchid(None)?.to_string()))
    }
}
