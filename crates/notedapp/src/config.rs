//! # Configuration
//!
//! Noted configuration is loaded with [`confique`] from TOML files and environment
//! variables.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `NOTED_DATA_DIR`, `NOTED_LOG`.
//! 2. **Local Config**: `noted.toml` in the working directory.
//! 3. **Global Config**: `noted.toml` in the OS-appropriate config directory (via
//!    `directories`).
//! 4. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! The CLI's `--data-dir` flag is applied on top of all of these.
//!
//! ## Available Settings
//!
//! | Key | Env | Default | Description |
//! |-----|-----|---------|-------------|
//! | `data_dir` | `NOTED_DATA_DIR` | OS data dir | Where `notes.json` and `categories.json` live |
//! | `log` | `NOTED_LOG` | `warn` | `tracing` filter directive for the CLI |

use crate::error::{NotedError, Result};
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "noted.toml";

/// Configuration for noted, stored in `noted.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NotedConfig {
    /// Directory holding the JSON tables. When absent, the OS data directory is used.
    #[config(env = "NOTED_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Default log filter (e.g. "warn", "notedapp=debug").
    #[config(env = "NOTED_LOG", default = "warn")]
    pub log: String,
}

impl Default for NotedConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            log: "warn".to_string(),
        }
    }
}

impl NotedConfig {
    /// Loads the full hierarchy, using `cwd` for the local config file.
    pub fn load(cwd: &Path) -> Result<Self> {
        let mut builder = Self::builder().env().file(cwd.join(CONFIG_FILE_NAME));
        if let Some(global) = global_config_file() {
            builder = builder.file(global);
        }
        let config = builder.load().map_err(config_error)?;
        tracing::debug!(?config, "loaded configuration");
        Ok(config)
    }

    /// Loads from the given files only, highest priority first. Missing files are skipped.
    pub fn from_files<P: AsRef<Path>>(files: &[P]) -> Result<Self> {
        let mut builder = Self::builder();
        for file in files {
            builder = builder.file(file.as_ref());
        }
        builder.load().map_err(config_error)
    }

    /// The directory the store should use: `data_dir` if set, else the default.
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(default_data_dir)
    }
}

fn config_error(e: confique::Error) -> NotedError {
    NotedError::Config(e.to_string())
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "noted", "noted")
}

/// OS data directory for noted, or `./.noted` when no home directory can be determined.
pub fn default_data_dir() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".noted"))
}

pub fn global_config_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
