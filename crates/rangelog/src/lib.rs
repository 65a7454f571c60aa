// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! rangelog library
//!
//! Compares the commit logs of two history ranges so that a rebase or
//! history rewrite can be reviewed for what it actually changed. This module
//! exports the core functionality for the binary and integration tests.

pub mod app;
pub mod config;
pub mod diff;
pub mod error;
pub mod normalize;
pub mod options;
pub mod resolve;

#[cfg(test)]
mod fake;

pub use error::RangeLogError;
