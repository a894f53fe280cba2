//! Durable session file.
//!
//! The whole session is one JSON document, rewritten in full on every save
//! through a temp sibling and a rename.

use crate::{Error, Message, MissionParameters, Result, SessionState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Default session file name, relative to the working directory.
pub const DEFAULT_SESSION_FILE: &str = "orion_session.json";

/// On-disk representation of a session.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SessionFile {
    /// When the mission started.
    pub start_time: Option<DateTime<Utc>>,
    /// Whether the mission was running.
    #[serde(default)]
    pub session_started: bool,
    /// Recorded turns, oldest first.
    #[serde(default)]
    pub history: Vec<Message>,
    /// Mission parameters; absent in files written by older versions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mission: Option<MissionParameters>,
}

/// Outcome of [`SessionStore::restore`].
#[derive(Debug)]
pub enum Restore {
    /// No session file exists.
    Empty,
    /// The session file was loaded.
    Resumed(SessionState),
    /// The session file was unreadable and has been deleted.
    Discarded(Error),
}

impl Restore {
    /// The restored state, or the inactive state.
    pub fn into_state(self) -> SessionState {
        match self {
            Self::Resumed(state) => state,
            Self::Empty | Self::Discarded(_) => SessionState::default(),
        }
    }
}

/// Reads, writes and deletes the session file at a fixed path.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Create a store for `path`. Nothing is touched until used.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the session file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the session file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read the session file.
    ///
    /// Returns `Ok(None)` when there is no file and [`Error::Corrupt`] when it
    /// cannot be parsed.
    pub fn load(&self) -> Result<Option<SessionFile>> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(Error::io(&self.path, err)),
        };

        serde_json::from_slice(&data)
            .map(Some)
            .map_err(|err| Error::Corrupt {
                path: self.path.clone(),
                reason: err.to_string(),
            })
    }

    /// Overwrite the session file with `file`.
    pub fn save(&self, file: &SessionFile) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| Error::io(parent, err))?;
        }

        let bytes = serde_json::to_vec_pretty(file)?;
        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, bytes).map_err(|err| Error::io(&tmp_path, err))?;
        match fs::rename(&tmp_path, &self.path) {
            Ok(()) => Ok(()),
            Err(rename_err) => {
                if self.path.exists() {
                    fs::remove_file(&self.path).map_err(|err| Error::io(&self.path, err))?;
                    fs::rename(&tmp_path, &self.path).map_err(|err| Error::io(&self.path, err))
                } else {
                    Err(Error::io(&self.path, rename_err))
                }
            }
        }
    }

    /// Load the session file as a [`SessionState`].
    ///
    /// A corrupt file is logged, deleted, and reported as
    /// [`Restore::Discarded`] instead of an error.
    pub fn restore(&self) -> Result<Restore> {
        match self.load() {
            Ok(Some(file)) => Ok(Restore::Resumed(SessionState::from_file(file))),
            Ok(None) => Ok(Restore::Empty),
            Err(err @ Error::Corrupt { .. }) => {
                tracing::warn!("{err}, discarding it");
                self.remove()?;
                Ok(Restore::Discarded(err))
            }
            Err(err) => Err(err),
        }
    }

    /// Delete the session file. A missing file is not an error.
    pub fn remove(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(Error::io(&self.path, err)),
        }
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
