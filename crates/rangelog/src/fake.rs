// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! In-memory [`History`] double for unit tests

use rangelog_git::{GitError, History, LogRequest};
use std::cell::RefCell;
use std::collections::HashMap;

/// Canned answers keyed by reference names; every query is recorded
#[derive(Debug, Default)]
pub(crate) struct FakeHistory {
    merge_bases: HashMap<(String, String), String>,
    logs: HashMap<(String, String), String>,
    patch_ids: HashMap<String, String>,
    tree_diffs: HashMap<(String, String), String>,
    descriptions: HashMap<String, String>,
    calls: RefCell<Vec<String>>,
}

impl FakeHistory {
    /// Answer `merge-base(left, right)` in either order
    pub(crate) fn with_merge_base(mut self, left: &str, right: &str, base: &str) -> Self {
        self.merge_bases
            .insert((left.to_string(), right.to_string()), base.to_string());
        self.merge_bases
            .insert((right.to_string(), left.to_string()), base.to_string());
        self
    }

    pub(crate) fn with_log(mut self, base: &str, head: &str, log: &str) -> Self {
        self.logs
            .insert((base.to_string(), head.to_string()), log.to_string());
        self
    }

    pub(crate) fn with_patch_id(mut self, commit: &str, id: &str) -> Self {
        self.patch_ids.insert(commit.to_string(), id.to_string());
        self
    }

    pub(crate) fn with_tree_diff(mut self, left: &str, right: &str, diff: &str) -> Self {
        self.tree_diffs
            .insert((left.to_string(), right.to_string()), diff.to_string());
        self
    }

    pub(crate) fn with_description(mut self, reference: &str, name: &str) -> Self {
        self.descriptions
            .insert(reference.to_string(), name.to_string());
        self
    }

    /// Merge-base, log and patch-id queries made so far, in order
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl History for FakeHistory {
    fn resolve_ref(&self, reference: &str) -> Result<String, GitError> {
        Ok(reference.to_string())
    }

    fn merge_base(&self, left: &str, right: &str) -> Result<String, GitError> {
        self.record(format!("merge-base {left} {right}"));
        self.merge_bases
            .get(&(left.to_string(), right.to_string()))
            .cloned()
            .ok_or_else(|| GitError::NoMergeBase {
                left: left.to_string(),
                right: right.to_string(),
            })
    }

    fn log(&self, request: &LogRequest<'_>) -> Result<String, GitError> {
        self.record(format!(
            "log {}..{} patch={} paths={}",
            request.base,
            request.head,
            request.include_patch,
            request.paths.join(",")
        ));
        self.logs
            .get(&(request.base.to_string(), request.head.to_string()))
            .cloned()
            .ok_or_else(|| GitError::InvalidReference {
                reference: format!("{}..{}", request.base, request.head),
            })
    }

    fn tree_diff(&self, left: &str, right: &str, _paths: &[String]) -> Result<String, GitError> {
        Ok(self
            .tree_diffs
            .get(&(left.to_string(), right.to_string()))
            .cloned()
            .unwrap_or_default())
    }

    fn describe(&self, reference: &str) -> Result<String, GitError> {
        self.descriptions
            .get(reference)
            .cloned()
            .ok_or_else(|| GitError::Describe {
                reference: reference.to_string(),
                message: "no names found".to_string(),
            })
    }

    fn stable_patch_id(&self, commit: &str) -> Result<Option<String>, GitError> {
        self.record(format!("patch-id {commit}"));
        Ok(self.patch_ids.get(commit).cloned())
    }
}
