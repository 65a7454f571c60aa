// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! rangelog: compare the commit logs of two history ranges
//!
//! Prints the four resolved references, whether their trees differ, and a
//! unified diff of the two normalized range logs.

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use rangelog::RangeLogError;
use rangelog::app;
use rangelog::config::Config;
use rangelog_git::GitRepo;
use tracing::debug;

fn main() -> ExitCode {
    let config = Config::parse();

    // Logs go to stderr; stdout carries the report
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .init();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            if err
                .downcast_ref::<RangeLogError>()
                .is_some_and(RangeLogError::is_usage)
            {
                eprintln!("usage: rangelog [OPTIONS] [OLD_HEAD] [NEW_HEAD] [-- <PATH>...]");
                eprintln!("For more information, try '--help'.");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> anyhow::Result<()> {
    // Usage errors are reported before touching the repository
    if config.ref_request()?.old_head.is_none() {
        return Err(RangeLogError::MissingRequiredReference.into());
    }

    let repo_path = config.repo_path();
    let repo = GitRepo::discover(&repo_path)
        .with_context(|| format!("cannot open repository at {}", repo_path.display()))?;
    debug!(path = %repo.path().display(), "opened repository");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let outcome = app::run(config, &repo, &mut out)?;
    debug!(differs = outcome.differs, "comparison finished");
    Ok(())
}
