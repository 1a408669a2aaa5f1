//! League directory: league code -> competition ID and display caption.
//!
//! Loaded once at startup from `league_ids.json` in the config directory,
//! falling back to the list bundled with the binary. `lists --refresh`
//! replaces both the file and the in-memory copy.

use std::path::Path;

use serde::{de::Error as _, Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::{
    cli::types::CompetitionId,
    core::{try_read_to_string, write_atomic, Access},
    error::FootballError,
    Result,
};

const BUNDLED_LEAGUE_IDS: &str = include_str!("../../data/league_ids.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeagueEntry {
    pub code: String,
    pub id: CompetitionId,
    pub caption: String,
}

/// Published lists have carried IDs both as numbers and as strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u32),
    Text(String),
}

impl RawId {
    fn into_id(self) -> std::result::Result<CompetitionId, String> {
        match self {
            RawId::Number(n) => Ok(CompetitionId::new(n)),
            RawId::Text(s) => s
                .trim()
                .parse()
                .map(CompetitionId::new)
                .map_err(|_| format!("invalid competition id `{s}`")),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    id: RawId,
    caption: String,
}

#[derive(Serialize)]
struct StoredEntry<'a> {
    id: u32,
    caption: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeagueDirectory {
    entries: Vec<LeagueEntry>,
}

impl LeagueDirectory {
    /// Parse a directory document (`{ "PL": { "id": 2021, "caption": "..." } }`).
    ///
    /// Entries keep the document's order. An empty document is rejected.
    pub fn from_json(raw: &str) -> Result<Self> {
        let map: Map<String, Value> = serde_json::from_str(raw)?;
        if map.is_empty() {
            return Err(FootballError::Upstream {
                message: "League list is empty".to_string(),
            });
        }

        let mut entries = Vec::with_capacity(map.len());
        for (code, value) in map {
            let raw: RawEntry = serde_json::from_value(value)?;
            let id = raw.id.into_id().map_err(|message| FootballError::Upstream {
                message: format!("League `{code}`: {message}"),
            })?;
            entries.push(LeagueEntry {
                code,
                id,
                caption: raw.caption,
            });
        }

        Ok(Self { entries })
    }

    /// The list shipped with the binary.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_LEAGUE_IDS)
    }

    /// Load from `path`, or the bundled list when the file does not exist.
    ///
    /// Any file that does not hold a usable directory is [`FootballError::Corrupt`].
    pub fn load(path: &Path) -> Result<Self> {
        match try_read_to_string(path) {
            Some(s) => Self::from_json(&s).map_err(|e| FootballError::Corrupt {
                path: path.to_path_buf(),
                source: match e {
                    FootballError::Payload(source) => source,
                    other => serde_json::Error::custom(other),
                },
            }),
            None => {
                debug!(path = %path.display(), "no league directory file, using bundled list");
                Self::bundled()
            }
        }
    }

    /// Find a league by its exact, case-sensitive code.
    pub fn lookup(&self, code: &str) -> Result<&LeagueEntry> {
        self.entries
            .iter()
            .find(|e| e.code == code)
            .ok_or_else(|| FootballError::UnknownLeague {
                code: code.to_string(),
            })
    }

    pub fn all(&self) -> &[LeagueEntry] {
        &self.entries
    }

    pub fn by_id(&self, id: CompetitionId) -> Option<&LeagueEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Pretty JSON in the on-disk directory format.
    pub fn to_json(&self) -> Result<String> {
        let map: Map<String, Value> = self
            .entries
            .iter()
            .map(|e| {
                let stored = StoredEntry {
                    id: e.id.as_u32(),
                    caption: &e.caption,
                };
                serde_json::to_value(stored).map(|v| (e.code.clone(), v))
            })
            .collect::<std::result::Result<_, _>>()?;
        Ok(serde_json::to_string_pretty(&Value::Object(map))?)
    }

    /// Replace this directory with `raw`, persisting it to `path` first.
    ///
    /// `raw` is validated before anything is written, and the file is
    /// replaced atomically; on any error both the file and `self` are
    /// left as they were.
    pub fn refresh(&mut self, raw: &str, path: &Path) -> Result<()> {
        let fresh = Self::from_json(raw)?;
        write_atomic(path, fresh.to_json()?.as_bytes(), Access::Shared)?;
        info!(
            path = %path.display(),
            leagues = fresh.entries.len(),
            "league directory refreshed"
        );
        *self = fresh;
        Ok(())
    }
}
