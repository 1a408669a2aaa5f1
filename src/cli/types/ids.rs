//! Identifier types for leagues and competitions.

use crate::error::{FootballError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Short, case-sensitive league code such as `PL` or `BL1`.
///
/// Codes are the keys of the league directory; the API itself only
/// understands the numeric [`CompetitionId`] they map to.
///
/// # Examples
///
/// ```rust
/// use football_cli::LeagueCode;
///
/// let code: LeagueCode = "PL".parse().unwrap();
/// assert_eq!(code.as_str(), "PL");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeagueCode(pub String);

impl LeagueCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LeagueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LeagueCode {
    type Err = FootballError;

    fn from_str(s: &str) -> Result<Self> {
        let code = s.trim();
        if code.is_empty() {
            return Err(FootballError::InvalidInput {
                message: "League code cannot be empty.".to_string(),
            });
        }
        Ok(Self(code.to_string()))
    }
}

/// Numeric competition ID used in API paths (`competitions/{id}/...`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompetitionId(pub u32);

impl CompetitionId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for CompetitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CompetitionId {
    type Err = FootballError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse()
            .map(Self)
            .map_err(|_| FootballError::InvalidInput {
                message: format!("Invalid competition ID: {s}"),
            })
    }
}
