//! Error types for the football CLI

use std::path::PathBuf;
use thiserror::Error;

use crate::BUGS_URL;


pub type Result<T> = std::result::Result<T, FootballError>;

#[derive(Error, Debug)]
pub enum FootballError {
    #[error("Sorry, an error occurred while contacting the API. Please report issues to {} if problem persists.", BUGS_URL)]
    Request(#[from] reqwest::Error),

    #[error("Unexpected response format from the API: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("{message}")]
    Upstream { message: String },

    #[error("No league found for `{code}`. Please check the League Code entered with the list `football lists`.")]
    UnknownLeague { code: String },

    #[error("{message}")]
    InvalidInput { message: String },

    #[error("API key cannot be sent as a header: {0}")]
    InvalidApiKey(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Error creating output directory {}: {source}", .path.display())]
    ExportDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Error creating JSON file: {source}")]
    ExportJson { source: serde_json::Error },

    #[error("Error creating CSV file: {source}")]
    ExportCsv { source: csv::Error },

    #[error("Could not write {}: {source}", .path.display())]
    LocalIo {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not parse {}: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl FootballError {
    /// Process exit code for this error class.
    ///
    /// `1` request/network failure, `2` invalid user input, `3` local I/O failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            FootballError::Request(_) | FootballError::Payload(_) | FootballError::Upstream { .. } => 1,
            FootballError::UnknownLeague { .. }
            | FootballError::InvalidInput { .. }
            | FootballError::InvalidApiKey(_) => 2,
            FootballError::ExportDir { .. }
            | FootballError::ExportJson { .. }
            | FootballError::ExportCsv { .. }
            | FootballError::LocalIo { .. }
            | FootballError::Corrupt { .. }
            | FootballError::Prompt(_) => 3,
        }
    }

    pub(crate) fn local_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FootballError::LocalIo {
            path: path.into(),
            source,
        }
    }

    /// A value that could not be serialized for writing to `path`.
    pub(crate) fn write_json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::local_io(
            path,
            std::io::Error::new(std::io::ErrorKind::InvalidData, source),
        )
    }
}
