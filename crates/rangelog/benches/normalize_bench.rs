use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rangelog::diff::{DEFAULT_CONTEXT, diff_ranges};
use rangelog::normalize::normalize_log;
use rangelog::options::OutputOptions;
use rangelog_git::{GitError, History, LogRequest};

/// History that only answers patch id queries
struct PatchIdOnly;

impl PatchIdOnly {
    fn unavailable(reference: &str) -> GitError {
        GitError::InvalidReference {
            reference: reference.to_string(),
        }
    }
}

impl History for PatchIdOnly {
    fn resolve_ref(&self, reference: &str) -> Result<String, GitError> {
        Err(Self::unavailable(reference))
    }

    fn merge_base(&self, left: &str, _right: &str) -> Result<String, GitError> {
        Err(Self::unavailable(left))
    }

    fn log(&self, request: &LogRequest<'_>) -> Result<String, GitError> {
        Err(Self::unavailable(request.head))
    }

    fn tree_diff(&self, left: &str, _right: &str, _paths: &[String]) -> Result<String, GitError> {
        Err(Self::unavailable(left))
    }

    fn describe(&self, reference: &str) -> Result<String, GitError> {
        Err(Self::unavailable(reference))
    }

    fn stable_patch_id(&self, commit: &str) -> Result<Option<String>, GitError> {
        Ok(Some(commit.chars().rev().collect()))
    }
}

/// Create a raw range log with the given number of commits
fn sample_log(commits: usize, salt: usize) -> String {
    let mut log = String::new();
    for i in 0..commits {
        log.push_str(&format!(
            "commit {:040x}\n\
             Author: Bench Author <bench@example.com>\n\
             AuthorDate: Thu Jan 15 10:00:00 2026 +0000\n\
             Summary: Change number {i}\n\
             \n    Body line describing change {i} in some detail.\n\n",
            i + salt
        ));
    }
    log
}

fn normalize_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    let history = PatchIdOnly;

    for size in [10usize, 100, 1000] {
        let raw = sample_log(size, 0);

        let plain = OutputOptions::default();
        group.bench_with_input(BenchmarkId::new("plain", size), &raw, |b, raw| {
            b.iter(|| normalize_log(raw, &plain, &history).expect("normalize failed"))
        });

        let with_ids = OutputOptions {
            include_stable_patch_id: true,
            include_commit_hash: true,
            ..Default::default()
        };
        group.bench_with_input(BenchmarkId::new("patch_ids", size), &raw, |b, raw| {
            b.iter(|| normalize_log(raw, &with_ids, &history).expect("normalize failed"))
        });
    }

    group.finish();
}

fn diff_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("diff");
    let history = PatchIdOnly;
    let options = OutputOptions {
        include_commit_hash: true,
        ..Default::default()
    };

    for size in [10usize, 100, 1000] {
        let old = normalize_log(&sample_log(size, 0), &options, &history).expect("normalize");
        let new = normalize_log(&sample_log(size, 1), &options, &history).expect("normalize");

        group.bench_function(BenchmarkId::new("identical", size), |b| {
            b.iter(|| diff_ranges(&old, &old, "old", "new", DEFAULT_CONTEXT))
        });
        group.bench_function(BenchmarkId::new("shifted", size), |b| {
            b.iter(|| diff_ranges(&old, &new, "old", "new", DEFAULT_CONTEXT))
        });
    }

    group.finish();
}

criterion_group!(benches, normalize_benchmarks, diff_benchmarks);
criterion_main!(benches);
