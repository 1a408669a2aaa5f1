//! Type-safe wrappers for values accepted on the command line.

pub mod ids;
pub mod time;

pub use ids::{CompetitionId, LeagueCode};
pub use time::Days;
