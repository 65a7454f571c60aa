// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Unified diff of two normalized range logs

use similar::{ChangeTag, TextDiff};

/// Default number of context lines around each change
pub const DEFAULT_CONTEXT: usize = 3;

/// Join normalized lines into newline-terminated text
fn to_text(lines: &[String]) -> String {
    let mut text = String::new();
    for line in lines {
        text.push_str(line);
        text.push('\n');
    }
    text
}

/// Diff the OLD and NEW streams
///
/// Returns `None` when the streams are identical, otherwise a unified diff
/// with `--- old_label` / `+++ new_label` headers.
#[must_use]
pub fn diff_ranges(
    old: &[String],
    new: &[String],
    old_label: &str,
    new_label: &str,
    context: usize,
) -> Option<String> {
    let old_text = to_text(old);
    let new_text = to_text(new);
    let diff = TextDiff::from_lines(&old_text, &new_text);

    if diff
        .iter_all_changes()
        .all(|change| change.tag() == ChangeTag::Equal)
    {
        return None;
    }

    Some(
        diff.unified_diff()
            .context_radius(context)
            .header(old_label, new_label)
            .to_string(),
    )
}
