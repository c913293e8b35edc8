// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User configuration.
//!
//! Configuration is stored in `<config dir>/things/config.toml` and includes:
//! - `database`: Path to the vendor SQLite file
//! - `strict_dates`: Reject malformed date filters instead of ignoring them

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::env;
use crate::error::{Error, Result};

const CONFIG_DIR_NAME: &str = "things";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Settings read from `config.toml`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Path to the vendor database file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,
    /// Treat malformed date filter literals as errors.
    #[serde(default)]
    pub strict_dates: bool,
}

impl Config {
    /// Location of the config file: `THINGS_CONFIG`, else the platform config dir.
    pub fn path() -> PathBuf {
        env::config_file().unwrap_or_else(|| {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(CONFIG_DIR_NAME)
                .join(CONFIG_FILE_NAME)
        })
    }

    /// Load from the default location; a missing file yields defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path())
    }

    /// Load from a specific file; a missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| Error::Config {
            path: path.display().to_string(),
            reason: e.message().to_string(),
        })
    }

    /// Resolve the database path: explicit flag, then `THINGS_DB`, then config.
    pub fn database_path(&self, flag: Option<&Path>) -> Result<PathBuf> {
        self.resolve_database(flag, env::database())
    }

    fn resolve_database(&self, flag: Option<&Path>, from_env: Option<PathBuf>) -> Result<PathBuf> {
        flag.map(Path::to_path_buf)
            .or(from_env)
            .or_else(|| self.database.clone())
            .map(|path| expand_home(&path))
            .ok_or_else(|| Error::DatabaseNotConfigured {
                config: Self::path().display().to_string(),
            })
    }
}

/// Expand a leading `~/` to the home directory.
fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
