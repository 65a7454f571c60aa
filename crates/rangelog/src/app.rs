// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Top-level comparison flow
//!
//! resolve references → describe them → report tree differences →
//! normalize both ranges → diff the normalized logs.

use crate::config::Config;
use crate::diff::diff_ranges;
use crate::error::RangeLogError;
use crate::normalize::normalize;
use crate::options::OutputOptions;
use crate::resolve::{ResolvedRefs, resolve};
use rangelog_git::History;
use std::io::Write;
use tracing::{info, warn};

/// Result of a completed comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// The references that were compared
    pub refs: ResolvedRefs,
    /// Whether the normalized logs differ
    pub differs: bool,
}

/// Print one resolved reference with its hash and nearest name
fn report_ref(
    history: &dyn History,
    label: &str,
    reference: &str,
    out: &mut dyn Write,
) -> Result<(), RangeLogError> {
    let sha = history.resolve_ref(reference)?;
    let description = match history.describe(&sha) {
        Ok(name) => name,
        Err(e) => {
            warn!(reference, error = %e, "cannot describe reference");
            "-".to_string()
        }
    };
    writeln!(out, "{label:<8} {sha} {reference} ({description})")?;
    Ok(())
}

/// Say whether two trees match and optionally print their diff
fn report_tree(
    history: &dyn History,
    (left_label, left): (&str, &str),
    (right_label, right): (&str, &str),
    show: bool,
    options: &OutputOptions,
    out: &mut dyn Write,
) -> Result<(), RangeLogError> {
    let diff = history.tree_diff(left, right, &options.path_filters)?;
    if diff.is_empty() {
        writeln!(out, "{left_label} and {right_label} have identical trees")?;
        return Ok(());
    }

    writeln!(out, "{left_label} and {right_label} trees differ")?;
    if show {
        writeln!(out)?;
        out.write_all(diff.as_bytes())?;
        if !diff.ends_with('\n') {
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Run a full comparison, writing the report and range diff to `out`
///
/// A difference between the ranges is a normal outcome, reported through
/// [`Outcome::differs`], not an error.
///
/// # Errors
///
/// Returns `RangeLogError` for usage problems, any failing repository query
/// and write failures on `out`.
pub fn run(
    config: &Config,
    history: &dyn History,
    out: &mut dyn Write,
) -> Result<Outcome, RangeLogError> {
    let request = config.ref_request()?;
    let options = config.output_options();

    let refs = resolve(history, request)?;
    info!(
        old = %refs.old_range(),
        new = %refs.new_range(),
        "resolved ranges"
    );

    if !config.quiet {
        report_ref(history, "OLD_HEAD", &refs.old_head, out)?;
        report_ref(history, "NEW_HEAD", &refs.new_head, out)?;
        report_ref(history, "OLD_BASE", &refs.old_base, out)?;
        report_ref(history, "NEW_BASE", &refs.new_base, out)?;
        writeln!(out)?;

        report_tree(
            history,
            ("OLD_HEAD", &refs.old_head),
            ("NEW_HEAD", &refs.new_head),
            options.diff_heads,
            &options,
            out,
        )?;
        report_tree(
            history,
            ("OLD_BASE", &refs.old_base),
            ("NEW_BASE", &refs.new_base),
            options.diff_bases,
            &options,
            out,
        )?;
    }

    let old = normalize(history, refs.old_range(), &options)?;
    let new = normalize(history, refs.new_range(), &options)?;

    let old_label = refs.old_range().to_string();
    let new_label = refs.new_range().to_string();
    let diff = diff_ranges(&old, &new, &old_label, &new_label, config.context);

    match &diff {
        Some(text) => {
            if !config.quiet {
                writeln!(out)?;
            }
            out.write_all(text.as_bytes())?;
        }
        None => info!("normalized logs are identical"),
    }
    out.flush()?;

    Ok(Outcome {
        differs: diff.is_some(),
        refs,
    })
}
