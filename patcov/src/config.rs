//! Project configuration discovery (`.patcov.toml`).

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::constants::CONFIG_FILENAME;

/// Top-level configuration struct.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct Config {
    /// The `[patcov]` section.
    #[serde(default)]
    pub patcov: PatcovConfig,
    /// The path to the configuration file this was loaded from.
    /// `None` if using defaults or programmatic config.
    #[serde(skip)]
    pub config_file_path: Option<PathBuf>,
}

/// Options for the `[patcov]` table. CLI flags take precedence over every
/// value here.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct PatcovConfig {
    /// Path to the mapping document.
    pub mapping: Option<PathBuf>,
    /// Folders to exclude from corpus walks, merged with the defaults.
    pub exclude_folders: Option<Vec<String>>,
    /// Number of top rules shown in scan summaries.
    pub top: Option<usize>,
    /// Gap-count threshold for CI gating (exit 1 above it).
    pub fail_threshold: Option<usize>,
}

/// Loads configuration by walking up from `path` until a `.patcov.toml`
/// is found. Falls back to defaults when none exists.
#[must_use]
pub fn load_from_path(path: &Path) -> Config {
    let mut current = path.to_path_buf();
    if current.is_file() {
        current.pop();
    }

    loop {
        let candidate = current.join(CONFIG_FILENAME);
        if candidate.exists() {
            if let Ok(content) = fs::read_to_string(&candidate) {
                if let Ok(mut config) = toml::from_str::<Config>(&content) {
                    config.config_file_path = Some(candidate);
                    return config;
                }
            }
        }

        if !current.pop() {
            break;
        }
    }

    Config::default()
}
