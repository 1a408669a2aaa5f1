//! Football CLI Library
//!
//! Fixtures, scores and league standings from the football-data.org REST API,
//! rendered as console tables or exported to JSON/CSV.
//!
//! ## Features
//!
//! - **Scores**: Live and recently finished matches, optionally filtered by team
//! - **Fixtures**: Upcoming or past matches for a league within a day window
//! - **Standings**: Single-table and grouped competition standings
//! - **Exports**: Pretty JSON and flattened CSV files of the normalized records
//! - **League Directory**: Local mapping of league codes to API competition IDs
//!
//! ## Quick Start
//!
//! ```rust
//! use football_cli::football::{leagues::LeagueDirectory, normalize::normalize_standings};
//! use serde_json::json;
//!
//! let directory = LeagueDirectory::bundled().unwrap();
//! assert_eq!(directory.lookup("PL").unwrap().caption, "Premier League");
//!
//! let payload = json!({ "standing": [
//!     { "position": 1, "teamName": "Arsenal", "playedGames": 1,
//!       "goalDifference": 2, "points": 3 }
//! ]});
//! let standings = normalize_standings(&payload).unwrap();
//! assert_eq!(standings.row_count(), 1);
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export FOOTBALL_API_KEY=your-token
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod football;
pub mod output;

// Re-export commonly used types
pub use cli::types::{CompetitionId, Days, LeagueCode};
pub use error::{FootballError, Result};
pub use football::leagues::{LeagueDirectory, LeagueEntry};
pub use football::types::{MatchRecord, MatchStatus, StandingRow, Standings};

pub const API_KEY_ENV_VAR: &str = "FOOTBALL_API_KEY";
pub const API_URL_ENV_VAR: &str = "FOOTBALL_API_URL";
pub const LEAGUE_IDS_URL_ENV_VAR: &str = "FOOTBALL_LEAGUE_IDS_URL";
pub const HOME_ENV_VAR: &str = "FOOTBALL_CLI_HOME";

pub const BUGS_URL: &str = "https://github.com/manrajgrover/football-cli/issues";
