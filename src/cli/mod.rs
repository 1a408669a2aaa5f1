//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use types::{Days, LeagueCode};

use crate::output::export::OutputTarget;

/// Export options shared between the data commands.
///
/// `-j`/`-c` take an optional file name; given without a value they fall back
/// to the default `footballOut` name.
#[derive(Debug, Clone, Default, Args)]
pub struct OutputArgs {
    /// Output results as JSON file (name without extension).
    #[clap(long, short = 'j', num_args = 0..=1, default_missing_value = "")]
    pub json: Option<String>,

    /// Output results as CSV file (name without extension).
    #[clap(long, short = 'c', num_args = 0..=1, default_missing_value = "")]
    pub csv: Option<String>,

    /// Output directory for files (defaults to the current directory).
    #[clap(long, short = 'o')]
    pub dir: Option<PathBuf>,
}

impl From<OutputArgs> for OutputTarget {
    fn from(args: OutputArgs) -> Self {
        OutputTarget {
            json: args.json,
            csv: args.csv,
            dir: args.dir,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Get scores of past and live fixtures
    Scores {
        /// Live scores only.
        #[clap(long, short)]
        live: bool,

        /// Team name or substring of it (case-insensitive).
        #[clap(long, short)]
        team: Option<String>,

        #[clap(flatten)]
        output: OutputArgs,
    },

    /// Get upcoming and past fixtures of a league and team
    Fixtures {
        /// Number of days from today.
        #[clap(long, short, default_value_t = Days::default(), allow_negative_numbers = true)]
        days: Days,

        /// League code (see `football lists`).
        #[clap(long, short)]
        league: Option<LeagueCode>,

        /// Team name or substring of it (case-insensitive).
        #[clap(long, short)]
        team: Option<String>,

        /// Next or upcoming matches instead of past ones.
        #[clap(long, short)]
        next: bool,

        #[clap(flatten)]
        output: OutputArgs,
    },

    /// Get standings of particular league
    Standings {
        /// League code (see `football lists`).
        #[clap(long, short)]
        league: LeagueCode,

        #[clap(flatten)]
        output: OutputArgs,
    },

    /// List of codes of various competitions
    Lists {
        /// Refresh league ids from the published list.
        #[clap(long, short)]
        refresh: bool,
    },

    /// Change configuration and defaults
    Config {
        /// Set the API key without prompting.
        #[clap(long)]
        api_key: Option<String>,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "football",
    version,
    about = "Football fixtures, scores and standings from football-data.org"
)]
pub struct Football {
    /// Print debug logging to stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
