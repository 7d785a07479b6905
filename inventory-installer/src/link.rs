//! Link directory and symlink steps.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Create `dir` and its parents. Returns `true` if anything was created.
pub fn ensure_dir(dir: &Path) -> io::Result<bool> {
    if dir.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(dir)?;
    Ok(true)
}

/// Point `link` at `target`, replacing whatever is at `link`.
///
/// Returns the previous link target when a symlink was replaced.
pub fn force_symlink(target: &Path, link: &Path) -> io::Result<Option<PathBuf>> {
    let previous = fs::read_link(link).ok();

    // `exists()` follows the link, so a dangling one needs `is_symlink()`.
    if link.exists() || link.is_symlink() {
        debug!(link = %link.display(), "removing existing link");
        fs::remove_file(link)?;
    }

    symlink(target, link)?;
    Ok(previous)
}

#[cfg(unix)]
fn symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(target, link)
}

/// Whether `path` carries any execute permission bit.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    fs::metadata(path)
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
    path.is_file()
}
