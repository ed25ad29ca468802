//! File-backed width-state persistence, one blob per payload file.

use std::fs;
use std::path::{Path, PathBuf};

use sqlgrid_lib::{StateStore, WidthState};

use crate::paths;

pub struct FileStateStore {
    path: PathBuf,
}

impl FileStateStore {
    /// Store location for a given payload file, keyed by its file stem.
    pub fn for_payload(payload: &Path) -> Option<Self> {
        let stem = payload.file_stem()?.to_string_lossy().into_owned();
        let path = paths::state_dir()?.join(format!("{stem}.json"));
        Some(Self { path })
    }
}

impl StateStore for FileStateStore {
    fn load(&self) -> Option<WidthState> {
        let raw = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(state) => Some(state),
            Err(err) => {
                log::warn!("discarding unreadable width state: {err}");
                None
            }
        }
    }

    fn save(&self, state: &WidthState) {
        let Some(parent) = self.path.parent() else {
            return;
        };
        if let Err(err) = fs::create_dir_all(parent) {
            log::warn!("cannot create state dir: {err}");
            return;
        }
        match serde_json::to_string_pretty(state) {
            Ok(raw) => {
                if let Err(err) = fs::write(&self.path, raw) {
                    log::warn!("cannot save width state: {err}");
                }
            }
            Err(err) => log::warn!("cannot serialize width state: {err}"),
        }
    }
}
