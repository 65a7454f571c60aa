// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Reference resolution
//!
//! Fills in the heads and bases of the OLD and NEW ranges from whatever the
//! user supplied. Rules, applied in order, each only when its target is
//! still unset:
//!
//! 1. OLD_HEAD is required.
//! 2. NEW_HEAD defaults to `HEAD`.
//! 3. With no base given, both bases become `merge-base(OLD_HEAD, NEW_HEAD)`.
//! 4. OLD_BASE defaults to `merge-base(OLD_HEAD, NEW_BASE)`.
//! 5. NEW_BASE defaults to `merge-base(OLD_BASE, NEW_HEAD)`.
//!
//! Rules 4 and 5 derive a missing base from the given one, not from the two
//! heads, even when the given base is not an ancestor of its own head.

use crate::error::RangeLogError;
use rangelog_git::History;
use std::fmt;
use tracing::debug;

/// Reference used for NEW_HEAD when none is given
pub const DEFAULT_NEW_HEAD: &str = "HEAD";

/// References as supplied by the user; `None` means "derive it"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefRequest {
    /// Tip of the old range (required)
    pub old_head: Option<String>,
    /// Tip of the new range
    pub new_head: Option<String>,
    /// Start of the old range
    pub old_base: Option<String>,
    /// Start of the new range
    pub new_base: Option<String>,
}

impl RefRequest {
    /// Request with only OLD_HEAD set
    #[must_use]
    pub fn old_head(reference: impl Into<String>) -> Self {
        Self {
            old_head: Some(reference.into()),
            ..Default::default()
        }
    }
}

/// The four references after defaulting; none of them is empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRefs {
    /// Tip of the old range
    pub old_head: String,
    /// Tip of the new range
    pub new_head: String,
    /// Start of the old range
    pub old_base: String,
    /// Start of the new range
    pub new_base: String,
}

impl ResolvedRefs {
    /// The OLD range, `OLD_BASE..OLD_HEAD`
    #[must_use]
    pub fn old_range(&self) -> Range<'_> {
        Range {
            base: &self.old_base,
            head: &self.old_head,
        }
    }

    /// The NEW range, `NEW_BASE..NEW_HEAD`
    #[must_use]
    pub fn new_range(&self) -> Range<'_> {
        Range {
            base: &self.new_base,
            head: &self.new_head,
        }
    }
}

/// Commits reachable from `head` but not from `base`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range<'a> {
    /// Exclusive lower bound
    pub base: &'a str,
    /// Inclusive tip
    pub head: &'a str,
}

impl fmt::Display for Range<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.base, self.head)
    }
}

/// Empty strings count as "not given"
fn given(reference: Option<String>) -> Option<String> {
    reference.filter(|r| !r.is_empty())
}

fn merge_base(history: &dyn History, left: &str, right: &str) -> Result<String, RangeLogError> {
    history
        .merge_base(left, right)
        .map_err(|source| RangeLogError::UnresolvableReference {
            left: left.to_string(),
            right: right.to_string(),
            source,
        })
}

/// Resolve all four references
///
/// # Errors
///
/// Returns `RangeLogError::MissingRequiredReference` when OLD_HEAD is absent
/// and `RangeLogError::UnresolvableReference` when a needed merge base
/// cannot be computed.
pub fn resolve(history: &dyn History, request: RefRequest) -> Result<ResolvedRefs, RangeLogError> {
    let old_head = given(request.old_head).ok_or(RangeLogError::MissingRequiredReference)?;
    let new_head = given(request.new_head).unwrap_or_else(|| DEFAULT_NEW_HEAD.to_string());

    let (old_base, new_base) = match (given(request.old_base), given(request.new_base)) {
        (None, None) => {
            let shared = merge_base(history, &old_head, &new_head)?;
            debug!(%shared, "both bases derived from the heads");
            (shared.clone(), shared)
        }
        (None, Some(new_base)) => {
            let old_base = merge_base(history, &old_head, &new_base)?;
            debug!(%old_base, "old base derived from new base");
            (old_base, new_base)
        }
        (Some(old_base), None) => {
            let new_base = merge_base(history, &old_base, &new_head)?;
            debug!(%new_base, "new base derived from old base");
            (old_base, new_base)
        }
        (Some(old_base), Some(new_base)) => (old_base, new_base),
    };

    Ok(ResolvedRefs {
        old_head,
        new_head,
        old_base,
        new_base,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::FakeHistory;
    use rangelog_git::GitError;
    use similar_asserts::assert_eq;

    /// Asymmetric history: old and new were built on different upstreams
    ///
    /// ```text
    /// root -- up1 -- oldtip          (old upstream)
    ///    \
    ///     up2 -- newtip              (new upstream)
    /// ```
    fn asymmetric() -> FakeHistory {
        FakeHistory::default()
            .with_merge_base("oldtip", "HEAD", "root")
            .with_merge_base("oldtip", "newtip", "root")
            .with_merge_base("oldtip", "up2", "root")
            .with_merge_base("up1", "HEAD", "root")
            .with_merge_base("up1", "newtip", "root")
            .with_merge_base("oldtip", "custom", "up1")
            .with_merge_base("custom", "newtip", "up2")
    }

    #[test]
    fn test_missing_old_head() {
        let history = FakeHistory::default();
        let result = resolve(&history, RefRequest::default());
        assert!(matches!(
            result,
            Err(RangeLogError::MissingRequiredReference)
        ));
    }

    #[test]
    fn test_empty_old_head_is_missing() {
        let history = FakeHistory::default();
        let result = resolve(&history, RefRequest::old_head(""));
        assert!(matches!(
            result,
            Err(RangeLogError::MissingRequiredReference)
        ));
    }

    #[test]
    fn test_new_head_defaults_to_head() {
        let history = asymmetric();
        let refs = resolve(&history, RefRequest::old_head("oldtip")).unwrap();
        assert_eq!(refs.new_head, "HEAD");
        assert_eq!(refs.old_base, "root");
        assert_eq!(refs.new_base, "root");
        assert_eq!(history.calls(), vec!["merge-base oldtip HEAD"]);
    }

    #[test]
    fn test_no_base_shares_merge_base_of_heads() {
        let history = asymmetric();
        let request = RefRequest {
            old_head: Some("oldtip".to_string()),
            new_head: Some("newtip".to_string()),
            ..Default::default()
        };
        let refs = resolve(&history, request).unwrap();
        assert_eq!(refs.old_base, refs.new_base);
        assert_eq!(refs.old_base, "root");
    }

    #[test]
    fn test_old_base_derived_from_given_new_base() {
        let history = asymmetric();
        let request = RefRequest {
            old_head: Some("oldtip".to_string()),
            new_head: Some("newtip".to_string()),
            new_base: Some("custom".to_string()),
            ..Default::default()
        };
        let refs = resolve(&history, request).unwrap();
        // merge-base(oldtip, custom), not merge-base(oldtip, newtip)
        assert_eq!(refs.old_base, "up1");
        assert_eq!(refs.new_base, "custom");
        assert_eq!(history.calls(), vec!["merge-base oldtip custom"]);
    }

    #[test]
    fn test_new_base_derived_from_given_old_base() {
        let history = asymmetric();
        let request = RefRequest {
            old_head: Some("oldtip".to_string()),
            new_head: Some("newtip".to_string()),
            old_base: Some("custom".to_string()),
            ..Default::default()
        };
        let refs = resolve(&history, request).unwrap();
        // merge-base(custom, newtip), not merge-base(oldtip, newtip)
        assert_eq!(refs.old_base, "custom");
        assert_eq!(refs.new_base, "up2");
        assert_eq!(history.calls(), vec!["merge-base custom newtip"]);
    }

    #[test]
    fn test_both_bases_given_skip_merge_base() {
        let history = FakeHistory::default();
        let request = RefRequest {
            old_head: Some("a".to_string()),
            new_head: Some("b".to_string()),
            old_base: Some("c".to_string()),
            new_base: Some("d".to_string()),
        };
        let refs = resolve(&history, request).unwrap();
        assert_eq!(refs.old_range().to_string(), "c..a");
        assert_eq!(refs.new_range().to_string(), "d..b");
        assert!(history.calls().is_empty());
    }

    #[test]
    fn test_merge_base_failure_names_references() {
        let history = FakeHistory::default();
        let request = RefRequest {
            old_head: Some("orphan".to_string()),
            new_head: Some("main".to_string()),
            ..Default::default()
        };
        match resolve(&history, request) {
            Err(RangeLogError::UnresolvableReference {
                left,
                right,
                source,
            }) => {
                assert_eq!(left, "orphan");
                assert_eq!(right, "main");
                assert!(matches!(source, GitError::NoMergeBase { .. }));
            }
            other => panic!("Expected UnresolvableReference, got {other:?}"),
        }
    }
}
