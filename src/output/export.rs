//! JSON/CSV export of normalized records.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Serialize;
use tracing::info;

use crate::{
    core::{write_atomic, Access},
    error::FootballError,
    Result,
};

/// Base file name used when `-j`/`-c` are given without a name.
pub const DEFAULT_FILE_NAME: &str = "footballOut";

/// Where exports go.
///
/// `None` means "do not write this format"; `Some("")` means "write it under
/// the default name". With neither format set the output is console only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputTarget {
    pub json: Option<String>,
    pub csv: Option<String>,
    pub dir: Option<PathBuf>,
}

impl OutputTarget {
    pub fn is_console_only(&self) -> bool {
        self.json.is_none() && self.csv.is_none()
    }

    fn base_dir(&self) -> PathBuf {
        match &self.dir {
            Some(dir) if !dir.as_os_str().is_empty() => dir.clone(),
            _ => PathBuf::from("."),
        }
    }

    pub fn json_path(&self) -> Option<PathBuf> {
        self.json
            .as_deref()
            .map(|name| self.base_dir().join(file_name(name, "json")))
    }

    pub fn csv_path(&self) -> Option<PathBuf> {
        self.csv
            .as_deref()
            .map(|name| self.base_dir().join(file_name(name, "csv")))
    }

    /// How a written file is named in the success message: the bare file
    /// name, or the full path when an output directory was given.
    pub fn saved_label(&self, path: &Path) -> String {
        match (&self.dir, path.file_name()) {
            (None, Some(name)) => name.to_string_lossy().into_owned(),
            _ => path.display().to_string(),
        }
    }
}

/// `<name>.<ext>`, with the default base name for an empty `name`.
pub fn file_name(name: &str, ext: &str) -> String {
    let base = if name.is_empty() { DEFAULT_FILE_NAME } else { name };
    format!("{base}.{ext}")
}

/// Pretty JSON with a fixed 4-space indent.
pub fn to_json_bytes<T: Serialize>(records: &[T]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records
        .serialize(&mut ser)
        .map_err(|source| FootballError::ExportJson { source })?;
    Ok(buf)
}

/// Flat CSV with a header row taken from the record's field names.
pub fn to_csv_bytes<T: Serialize>(records: &[T]) -> Result<Vec<u8>> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    for record in records {
        wtr.serialize(record)
            .map_err(|source| FootballError::ExportCsv { source })?;
    }
    wtr.into_inner().map_err(|e| FootballError::ExportCsv {
        source: e.into_error().into(),
    })
}

fn create_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| FootballError::ExportDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Write the requested exports and return the paths written.
///
/// Both formats are serialized before anything touches the disk, and each
/// file is written atomically, so a failure never leaves partial output.
pub fn export<T: Serialize>(target: &OutputTarget, records: &[T]) -> Result<Vec<PathBuf>> {
    if target.is_console_only() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    if let Some(path) = target.json_path() {
        files.push((path, to_json_bytes(records)?));
    }
    if let Some(path) = target.csv_path() {
        files.push((path, to_csv_bytes(records)?));
    }

    create_dir(&target.base_dir())?;

    let mut written = Vec::with_capacity(files.len());
    for (path, bytes) in files {
        write_atomic(&path, &bytes, Access::Shared)?;
        info!(path = %path.display(), records = records.len(), "exported");
        written.push(path);
    }
    Ok(written)
}
