//! Persisted configuration: `{ "API_KEY": "..." }`.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::fs::{try_read_to_string, write_atomic, Access};
use crate::{error::FootballError, Result, API_KEY_ENV_VAR};

/// The CLI's only mutable state: the football-data.org API key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(rename = "API_KEY", default)]
    pub api_key: String,
}

impl Config {
    /// Load from `path`; a missing file is an empty config.
    pub fn load(path: &Path) -> Result<Self> {
        match try_read_to_string(path) {
            Some(s) => serde_json::from_str(&s).map_err(|source| FootballError::Corrupt {
                path: path.to_path_buf(),
                source,
            }),
            None => {
                debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// `FOOTBALL_API_KEY` takes precedence over the stored key when set.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(key) = std::env::var(API_KEY_ENV_VAR) {
            if !key.trim().is_empty() {
                self.api_key = key.trim().to_string();
            }
        }
        self
    }

    /// Apply an answer from the config prompt. Blank keeps the current key.
    pub fn apply_api_key(&mut self, answer: &str) -> bool {
        let answer = answer.trim();
        if answer.is_empty() {
            return false;
        }
        self.api_key = answer.to_string();
        true
    }

    /// Rewrite the config file atomically, pretty-printed with 2-space indent.
    ///
    /// The file holds the API key, so it stays readable by its owner only.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| FootballError::write_json(path, e))?;
        write_atomic(path, json.as_bytes(), Access::Private)
    }
}
