//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "sqlgrid";
const APPLICATION: &str = "sqlgrid";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Data directory for persistent application data, or None if the home
/// directory cannot be determined.
pub fn data_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
}

/// Directory holding per-payload width-state blobs.
pub fn state_dir() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("state"))
}
