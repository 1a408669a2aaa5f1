//! Day-window type for the fixtures command.

use crate::error::{FootballError, Result};
use std::fmt;
use std::str::FromStr;

/// Number of days from today for a fixtures window.
///
/// Parsed as a signed value so that a negative count reaches validation
/// and is reported as invalid input instead of a clap parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Days(pub i64);

impl Days {
    pub fn new(days: i64) -> Self {
        Self(days)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    /// The day count as a validated, non-negative value.
    pub fn checked(&self) -> Result<u32> {
        if self.0 < 0 {
            return Err(FootballError::InvalidInput {
                message: "Days cannot be a negative value.".to_string(),
            });
        }
        u32::try_from(self.0).map_err(|_| FootballError::InvalidInput {
            message: format!("Days value {} is too large.", self.0),
        })
    }
}

impl Default for Days {
    fn default() -> Self {
        Self(10)
    }
}

impl fmt::Display for Days {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Days {
    type Err = FootballError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse()
            .map(Self)
            .map_err(|_| FootballError::InvalidInput {
                message: format!("Days must be a whole number, got `{s}`."),
            })
    }
}
