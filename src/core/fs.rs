//! File system helpers: where the CLI keeps its files and how it writes them.

use std::{
    fs,
    io::{Read, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::{error::FootballError, Result, HOME_ENV_VAR};

const APP_DIR: &str = "football-cli";
const CONFIG_FILE: &str = "config.json";
const LEAGUE_IDS_FILE: &str = "league_ids.json";

/// Locations of the config file and the league directory file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub config: PathBuf,
    pub league_ids: PathBuf,
}

impl AppPaths {
    /// Both files inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            config: dir.join(CONFIG_FILE),
            league_ids: dir.join(LEAGUE_IDS_FILE),
        }
    }

    /// `$FOOTBALL_CLI_HOME`, else `~/.config/football-cli` (platform config dir).
    pub fn resolve() -> Self {
        match std::env::var_os(HOME_ENV_VAR) {
            Some(home) if !home.is_empty() => Self::in_dir(PathBuf::from(home)),
            _ => Self::in_dir(default_app_dir()),
        }
    }
}

fn default_app_dir() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".config");
        home
    });
    base.join(APP_DIR)
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Who may read a file written by [`write_atomic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Owner only (0600). For files holding the API key.
    Private,
    /// World-readable (0644), like any file the user saves.
    Shared,
}

#[cfg(unix)]
fn set_access(file: &fs::File, access: Access) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mode = match access {
        Access::Private => 0o600,
        Access::Shared => 0o644,
    };
    file.set_permissions(fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn set_access(_file: &fs::File, _access: Access) -> std::io::Result<()> {
    Ok(())
}

/// Write `contents` to `path` through a temp file in the same directory.
///
/// Readers see either the old file or the complete new one, never a partial
/// write. Parent directories are created as needed. The final file carries
/// the mode given by `access`.
pub fn write_atomic(path: &Path, contents: &[u8], access: Access) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent).map_err(|e| FootballError::local_io(&parent, e))?;

    let mut tmp = NamedTempFile::new_in(&parent).map_err(|e| FootballError::local_io(path, e))?;
    tmp.write_all(contents)
        .and_then(|_| tmp.flush())
        .and_then(|_| set_access(tmp.as_file(), access))
        .map_err(|e| FootballError::local_io(path, e))?;
    tmp.persist(path)
        .map_err(|e| FootballError::local_io(path, e.error))?;

    debug!(path = %path.display(), bytes = contents.len(), ?access, "wrote file");
    Ok(())
}
