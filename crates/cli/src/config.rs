// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User configuration and state locations.
//!
//! Configuration lives in `<config_dir>/shared-shelf/config.toml` (or
//! `$SHELF_CONFIG`). Every field has a default, so a missing file is fine:
//! - `pds_url`: XRPC endpoint of the personal data server
//! - `public_api_url`: XRPC endpoint used for search and record lookups
//! - `list_limit`: page size when listing records (1-100)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use shelf_core::lexicon::LIST_LIMIT;
use shelf_core::sync::{DEFAULT_PDS_URL, DEFAULT_PUBLIC_API_URL};
use shelf_core::XrpcTransport;

use crate::env;
use crate::error::{Error, Result};

const APP_DIR_NAME: &str = "shared-shelf";
const CONFIG_FILE_NAME: &str = "config.toml";
const DB_FILE_NAME: &str = "shelf.db";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_pds_url")]
    pub pds_url: String,
    #[serde(default = "default_public_api_url")]
    pub public_api_url: String,
    #[serde(default = "default_list_limit")]
    pub list_limit: u32,
}

fn default_pds_url() -> String {
    DEFAULT_PDS_URL.to_string()
}

fn default_public_api_url() -> String {
    DEFAULT_PUBLIC_API_URL.to_string()
}

fn default_list_limit() -> u32 {
    LIST_LIMIT
}

impl Default for Config {
    fn default() -> Self {
        Config {
            pds_url: default_pds_url(),
            public_api_url: default_public_api_url(),
            list_limit: default_list_limit(),
        }
    }
}

impl Config {
    /// Loads configuration from `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(Error::Config(format!("failed to read config: {}", e))),
        };
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from the default location.
    pub fn load_default() -> Result<Self> {
        Config::load(&config_path())
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.list_limit == 0 || self.list_limit > LIST_LIMIT {
            return Err(Error::Config(format!(
                "list_limit must be between 1 and {LIST_LIMIT}, got {}",
                self.list_limit
            )));
        }
        for (field, url) in [("pds_url", &self.pds_url), ("public_api_url", &self.public_api_url)] {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(Error::Config(format!("{field} must be an http(s) URL: {url}")));
            }
        }
        Ok(())
    }

    /// The network transport these endpoints describe.
    pub fn transport(&self) -> XrpcTransport {
        XrpcTransport::new(
            self.pds_url.trim_end_matches('/'),
            self.public_api_url.trim_end_matches('/'),
        )
    }
}

/// Path of the configuration file: `$SHELF_CONFIG` or the platform config dir.
pub fn config_path() -> PathBuf {
    if let Some(path) = env::config_path() {
        return path;
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join(APP_DIR_NAME)
        .join(CONFIG_FILE_NAME)
}

/// Directory holding durable client state.
pub fn state_dir() -> PathBuf {
    resolve_state_dir(env::state_dir(), env::xdg_state_home(), dirs::home_dir())
}

/// Precedence: explicit override, then `$XDG_STATE_HOME`, then `~/.local/state`.
pub(crate) fn resolve_state_dir(
    explicit: Option<PathBuf>,
    xdg_state_home: Option<PathBuf>,
    home: Option<PathBuf>,
) -> PathBuf {
    if let Some(dir) = explicit {
        return dir;
    }
    if let Some(dir) = xdg_state_home {
        return dir.join(APP_DIR_NAME);
    }
    home.map(|h| h.join(".local/state").join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(".local/state").join(APP_DIR_NAME))
}

/// Path of the client storage database.
pub fn db_path() -> PathBuf {
    state_dir().join(DB_FILE_NAME)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
