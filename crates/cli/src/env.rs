// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.

use std::path::PathBuf;

/// Environment variable names read by the CLI.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Returns the value of `THINGS_DB` if set and non-empty.
pub fn database() -> Option<PathBuf> {
    non_empty(vars::THINGS_DB).map(PathBuf::from)
}

/// Returns the value of `THINGS_CONFIG` if set and non-empty.
pub fn config_file() -> Option<PathBuf> {
    non_empty(vars::THINGS_CONFIG).map(PathBuf::from)
}

fn non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
