// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Repository location and configuration file loading

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use ipx_core::root::{API_OPTION, CONFIG_OPTION, DEFAULT_API_ADDR, LOCAL_OPTION, REPO_ENV};
use ipx_core::{Environment, OptionMap};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Repository directory name under the home directory
const DEFAULT_REPO_DIR: &str = ".ipx";

/// Configuration file name inside the repository
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine home directory; set $IPX_PATH to choose a repository")]
    NoHome,

    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Contents of `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Multiaddr of the daemon API
    pub address: Option<String>,
}

impl Config {
    /// Load the file at `path`.
    ///
    /// A missing file yields the default config unless the caller named it
    /// explicitly.
    pub fn load(path: &Path, explicit: bool) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                if explicit {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Repository location: `$IPX_PATH` when set and non-empty, else `~/.ipx`.
pub fn repo_path(
    env_value: Option<OsString>,
    home: Option<PathBuf>,
) -> Result<PathBuf, ConfigError> {
    match env_value {
        Some(value) if !value.is_empty() => Ok(PathBuf::from(value)),
        _ => home
            .map(|h| h.join(DEFAULT_REPO_DIR))
            .ok_or(ConfigError::NoHome),
    }
}

/// Build the handler environment from the process environment and the
/// resolved global options.
pub fn environment(options: &OptionMap) -> Result<Environment, ConfigError> {
    let repo = repo_path(std::env::var_os(REPO_ENV), dirs::home_dir())?;
    environment_with(options, repo)
}

/// Same as [`environment`] with the repository location already known.
pub fn environment_with(
    options: &OptionMap,
    repo_path: PathBuf,
) -> Result<Environment, ConfigError> {
    let (config_path, explicit) = match options.string(CONFIG_OPTION) {
        Some(path) => (PathBuf::from(path), true),
        None => (repo_path.join(CONFIG_FILE), false),
    };
    let config = Config::load(&config_path, explicit)?;

    let api_address = match (options.is_explicit(API_OPTION), config.api.address) {
        (true, _) | (false, None) => options
            .string(API_OPTION)
            .unwrap_or(DEFAULT_API_ADDR)
            .to_string(),
        (false, Some(address)) => address,
    };

    Ok(Environment {
        repo_path,
        config_path,
        api_address,
        local: options.flag(LOCAL_OPTION),
    })
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
