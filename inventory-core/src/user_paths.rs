//! User directory lookup.
//!
//! Thin wrappers over `dirs` that turn a missing directory into an error
//! with context instead of an `Option`.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Get the user's home directory.
#[must_use = "home directory path should be used"]
pub fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Could not determine home directory")
}

/// The per-user binary directory below `home`: `<home>/.local/bin`.
///
/// Same layout on every platform; executables are linked here rather than
/// into a system location.
pub fn user_bin_dir_in(home: &Path) -> PathBuf {
    home.join(".local").join("bin")
}

/// Get the correct executable name for the platform (adds .exe on Windows).
pub fn executable_name(base: &str) -> String {
    if cfg!(windows) {
        format!("{base}.exe")
    } else {
        base.to_string()
    }
}
