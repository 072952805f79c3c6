// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Configuration management
//!
//! Sources, later ones winning: built-in defaults, a TOML file (explicit
//! path, or `config.toml` in the platform config directory if present),
//! then `TIMETABLE_*` environment variables.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix
pub const ENV_PREFIX: &str = "TIMETABLE";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Length of ranks produced by `rank spread`
    pub rank_length: usize,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Largest number of active classrooms the CLI will check at once
    pub max_active_classrooms: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rank_length: crate::rank::DEFAULT_LENGTH,
            log_level: "info".to_string(),
            max_active_classrooms: 32,
        }
    }
}

/// Default config file location
#[must_use]
pub fn default_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("org", "hyperpolymath", "timetable")
        .map(|d| d.config_dir().join("config.toml"))
}

/// Load configuration from defaults, file and environment
pub fn load(path: Option<&Path>) -> Result<Config> {
    let defaults = Config::default();
    let mut builder = config::Config::builder()
        .set_default("rank_length", defaults.rank_length as i64)?
        .set_default("log_level", defaults.log_level)?
        .set_default("max_active_classrooms", defaults.max_active_classrooms as i64)?;

    match path {
        Some(p) => {
            builder = builder.add_source(config::File::from(p.to_path_buf()).required(true));
        }
        None => {
            if let Some(p) = default_path() {
                builder = builder.add_source(config::File::from(p).required(false));
            }
        }
    }

    builder = builder.add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true));

    let settings = builder.build().context("Failed to read configuration")?;
    let cfg: Config = settings
        .try_deserialize()
        .context("Invalid configuration values")?;

    if cfg.rank_length == 0 || cfg.rank_length > crate::rank::codec::MAX_LENGTH {
        anyhow::bail!(
            "rank_length must be between 1 and {}, got {}",
            crate::rank::codec::MAX_LENGTH,
            cfg.rank_length
        );
    }
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("timetable.toml");
        fs::write(&path, "rank_length = 8\nmax_active_classrooms = 4\n").unwrap();

        let cfg = load(Some(&path)).unwrap();
        assert_eq!(cfg.rank_length, 8);
        assert_eq!(cfg.max_active_classrooms, 4);
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(load(Some(&dir.path().join("absent.toml"))).is_err());
    }

    #[test]
    fn test_rank_length_is_validated() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("timetable.toml");
        fs::write(&path, "rank_length = 40\n").unwrap();
        assert!(load(Some(&path)).is_err());
    }
}
