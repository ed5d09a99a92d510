//! Configuration loading and resolution
//!
//! Each value resolves in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable (handled upstream by clap's `env` attribute)
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! A missing or unreadable config file never aborts startup; the service
//! falls back to defaults and logs a warning.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Public concert catalog API used when nothing else is configured
pub const DEFAULT_API_BASE_URL: &str = "https://groupietrackers.herokuapp.com/api";

/// Default HTTP listen port
pub const DEFAULT_PORT: u16 = 8080;

/// Optional values read from the TOML config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    pub api_base_url: Option<String>,
    pub port: Option<u16>,
}

impl FileConfig {
    /// Parse a config file at an explicit path.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// Load the first config file found among the platform candidates,
    /// or defaults when none exists.
    pub fn load_default_paths() -> Self {
        for candidate in config_file_candidates() {
            if !candidate.exists() {
                continue;
            }
            match Self::load(&candidate) {
                Ok(config) => return config,
                Err(e) => {
                    warn!("Ignoring unreadable config file: {}", e);
                    return Self::default();
                }
            }
        }
        Self::default()
    }
}

/// Fully resolved service configuration
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub api_base_url: String,
    pub port: u16,
}

impl ServiceConfig {
    /// Resolve configuration from CLI overrides plus the default config
    /// file locations.
    pub fn resolve(cli_api_base_url: Option<String>, cli_port: Option<u16>) -> Self {
        Self::resolve_with(cli_api_base_url, cli_port, FileConfig::load_default_paths())
    }

    /// Resolve configuration against an already-loaded file config.
    pub fn resolve_with(
        cli_api_base_url: Option<String>,
        cli_port: Option<u16>,
        file: FileConfig,
    ) -> Self {
        Self {
            api_base_url: cli_api_base_url
                .or(file.api_base_url)
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            port: cli_port.or(file.port).unwrap_or(DEFAULT_PORT),
        }
    }
}

/// Config file locations, most specific first: the user config directory,
/// then the system-wide location on Linux.
fn config_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("stagetrack").join("config.toml"));
    }

    if cfg!(target_os = "linux") {
        candidates.push(PathBuf::from("/etc/stagetrack/config.toml"));
    }

    candidates
}
