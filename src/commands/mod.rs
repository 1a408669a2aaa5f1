//! Command implementations for the football CLI
//!
//! Every handler follows the same flow: validate input, issue at most one
//! request, normalize, then print through a [`Presenter`] and export.

pub mod config;
pub mod fixtures;
pub mod lists;
pub mod scores;
pub mod standings;

use std::{io::Write, path::PathBuf};

use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    core::{AppPaths, Config},
    football::{
        http::{ApiGateway, API_URL, LEAGUE_IDS_URL},
        leagues::LeagueDirectory,
    },
    error::FootballError,
    output::{export, OutputTarget, Presenter},
    Result, API_URL_ENV_VAR, LEAGUE_IDS_URL_ENV_VAR,
};

/// Date format for `dateFrom`/`dateTo` query parameters.
pub const QUERY_DATE_FORMAT: &str = "%Y-%m-%d";

/// How strictly the local state files are read at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
    /// An unreadable file is an error.
    Strict,
    /// An unreadable file is replaced by its default, for the commands that
    /// rewrite it (`config`, `lists --refresh`).
    Repair,
}

/// Everything a handler needs besides its own arguments.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub config: Config,
    pub directory: LeagueDirectory,
    pub paths: AppPaths,
    pub api_url: String,
    pub league_ids_url: String,
    /// Local calendar date that day windows are measured from.
    pub today: NaiveDate,
}

impl CommandContext {
    /// Load config and league directory from `paths`, honouring env overrides.
    pub fn load(paths: AppPaths, mode: LoadMode) -> Result<Self> {
        let config = repair(Config::load(&paths.config), mode, || Ok(Config::default()))?
            .with_env_overrides();
        let directory = repair(
            LeagueDirectory::load(&paths.league_ids),
            mode,
            LeagueDirectory::bundled,
        )?;
        debug!(
            config = %paths.config.display(),
            leagues = directory.all().len(),
            "context loaded"
        );

        Ok(Self {
            config,
            directory,
            paths,
            api_url: env_or(API_URL_ENV_VAR, API_URL),
            league_ids_url: env_or(LEAGUE_IDS_URL_ENV_VAR, LEAGUE_IDS_URL),
            today: Local::now().date_naive(),
        })
    }

    pub fn gateway(&self) -> Result<ApiGateway> {
        if self.config.api_key.is_empty() {
            warn!("no API key configured, requests will be rate limited or rejected");
        }
        ApiGateway::new(&self.config.api_key, self.api_url.as_str())
    }
}

fn repair<T>(loaded: Result<T>, mode: LoadMode, fallback: impl FnOnce() -> Result<T>) -> Result<T> {
    match (loaded, mode) {
        (Err(e @ FootballError::Corrupt { .. }), LoadMode::Repair) => {
            warn!(error = %e, "ignoring unreadable file, it will be rewritten");
            fallback()
        }
        (loaded, _) => loaded,
    }
}

fn env_or(var: &str, default: &str) -> String {
    std::env::var(var)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

pub(crate) fn query_date(date: NaiveDate) -> String {
    date.format(QUERY_DATE_FORMAT).to_string()
}

/// Export `records` and report each file written.
pub(crate) fn export_and_report<T: Serialize, W: Write>(
    presenter: &mut Presenter<W>,
    target: &OutputTarget,
    records: &[T],
) -> Result<Vec<PathBuf>> {
    let written = export(target, records)?;
    for path in &written {
        presenter.update(&format!(
            "Data has been successfully saved as {}",
            target.saved_label(path)
        ))?;
    }
    Ok(written)
}
