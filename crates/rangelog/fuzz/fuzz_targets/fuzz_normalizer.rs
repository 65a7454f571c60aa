#![no_main]

//! Fuzz target for log normalization
//!
//! Arbitrary log text must normalize without panicking, close every commit
//! it opens, and come out unchanged when normalized a second time.

use libfuzzer_sys::fuzz_target;
use rangelog::normalize::{END_COMMIT, commit_header, normalize_log};
use rangelog::options::OutputOptions;
use rangelog_git::{GitError, History, LogRequest};

/// History that fails every query; patch ids are never requested here
struct NoHistory;

fn unavailable(reference: &str) -> GitError {
    GitError::InvalidReference {
        reference: reference.to_string(),
    }
}

impl History for NoHistory {
    fn resolve_ref(&self, reference: &str) -> Result<String, GitError> {
        Err(unavailable(reference))
    }

    fn merge_base(&self, left: &str, _right: &str) -> Result<String, GitError> {
        Err(unavailable(left))
    }

    fn log(&self, request: &LogRequest<'_>) -> Result<String, GitError> {
        Err(unavailable(request.head))
    }

    fn tree_diff(&self, left: &str, _right: &str, _paths: &[String]) -> Result<String, GitError> {
        Err(unavailable(left))
    }

    fn describe(&self, reference: &str) -> Result<String, GitError> {
        Err(unavailable(reference))
    }

    fn stable_patch_id(&self, commit: &str) -> Result<Option<String>, GitError> {
        Err(unavailable(commit))
    }
}

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };
    // Bare carriage returns do not survive a split and rejoin
    if raw.contains('\r') {
        return;
    }

    let headers = raw.lines().filter_map(commit_header).count();
    let raw_ends = raw.lines().filter(|l| *l == END_COMMIT).count();

    for include_commit_hash in [false, true] {
        let options = OutputOptions {
            include_commit_hash,
            ..Default::default()
        };
        let Ok(lines) = normalize_log(raw, &options, &NoHistory) else {
            panic!("normalization without patch ids cannot fail");
        };

        let ends = lines.iter().filter(|l| l.as_str() == END_COMMIT).count();
        assert_eq!(ends - raw_ends, headers);

        let text: String = lines.iter().map(|l| format!("{l}\n")).collect();
        let again = normalize_log(&text, &options, &NoHistory).unwrap_or_default();
        assert_eq!(lines, again);
    }
});
