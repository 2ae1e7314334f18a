//! Optional on-disk snapshots of the lifecycle store.
//!
//! A snapshot records what the store looked like at the end of a session,
//! for inspection. Nothing in the core reads a snapshot back into a live
//! store: every process starts from a fresh, idle state.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use jiff::Timestamp;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    error::{MeridianError, Result},
    store::TimeZoneState,
};

/// A saved store state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// When the snapshot was written
    pub saved_at: Timestamp,

    /// The store state at that time
    pub state: TimeZoneState,
}

/// Reads, writes and deletes the snapshot file.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Uses the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Uses `$XDG_STATE_HOME/meridian/state.json`, creating the directory.
    pub fn at_default_location() -> Result<Self> {
        xdg::BaseDirectories::with_prefix("meridian")
            .place_state_file("state.json")
            .map(Self::new)
            .map_err(|e| MeridianError::XdgDirectory(e.to_string()))
    }

    /// Uses `path` when given, the default location otherwise.
    pub fn resolve(path: Option<PathBuf>) -> Result<Self> {
        match path {
            Some(path) => Ok(Self::new(path)),
            None => Self::at_default_location(),
        }
    }

    /// Location of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the snapshot, or `None` when no snapshot has been saved.
    ///
    /// # Errors
    ///
    /// Returns `MeridianError::Serialization` for an unreadable file and
    /// `MeridianError::Configuration` for a state whose lifecycles are
    /// inconsistent.
    pub fn load(&self) -> Result<Option<Snapshot>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.fs_error(e)),
        };
        let snapshot: Snapshot = serde_json::from_str(&contents)?;
        if !snapshot.state.is_consistent() {
            return Err(MeridianError::Configuration {
                message: format!(
                    "snapshot at '{}' holds an inconsistent state",
                    self.path.display()
                ),
            });
        }
        Ok(Some(snapshot))
    }

    /// Writes `state` as the current snapshot.
    pub fn save(&self, state: &TimeZoneState) -> Result<Snapshot> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| MeridianError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        let snapshot = Snapshot {
            saved_at: Timestamp::now(),
            state: state.clone(),
        };
        let json = serde_json::to_string_pretty(&snapshot)?;
        fs::write(&self.path, json).map_err(|e| self.fs_error(e))?;
        debug!("saved snapshot to {}", self.path.display());
        Ok(snapshot)
    }

    /// Deletes the snapshot. Returns whether a file was removed.
    pub fn purge(&self) -> Result<bool> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("purged snapshot at {}", self.path.display());
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(self.fs_error(e)),
        }
    }

    fn fs_error(&self, source: io::Error) -> MeridianError {
        MeridianError::FileSystem {
            path: self.path.clone(),
            source,
        }
    }
}
