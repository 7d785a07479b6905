//! The external build step.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::error::InstallError;

/// Produces the scanner binary inside an install directory.
pub trait BuildRunner {
    /// Build in `dir`. Returns once the build process has exited.
    fn run_build(&self, dir: &Path) -> Result<(), InstallError>;
}

/// Runs `cargo build --release` with the toolchain found on `PATH`.
#[derive(Debug, Clone, Default)]
pub struct CargoBuild {
    search_path: Option<OsString>,
}

impl CargoBuild {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look `cargo` up in `search_path` instead of the process `PATH`.
    pub fn with_search_path(search_path: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(search_path.into()),
        }
    }

    fn locate_cargo(&self, dir: &Path) -> Result<PathBuf, InstallError> {
        let found = match &self.search_path {
            Some(search_path) => which::which_in("cargo", Some(search_path), dir),
            None => which::which("cargo"),
        };
        found.map_err(|e| {
            InstallError::cargo_missing(format!("'cargo' not found in PATH: {}", e))
        })
    }
}

impl BuildRunner for CargoBuild {
    fn run_build(&self, dir: &Path) -> Result<(), InstallError> {
        let cargo = self.locate_cargo(dir)?;
        debug!(cargo = %cargo.display(), dir = %dir.display(), "running cargo build");

        // Pin the target directory so the artifact lands at <dir>/target/release
        // regardless of the user's CARGO_TARGET_DIR.
        let status = Command::new(&cargo)
            .args(["build", "--release"])
            .env("CARGO_TARGET_DIR", dir.join("target"))
            .current_dir(dir)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| {
                InstallError::build(format!(
                    "failed to execute 'cargo build' in {}: {}",
                    dir.display(),
                    e
                ))
            })?;

        if !status.success() {
            let code = status
                .code()
                .map_or_else(|| "a signal".to_string(), |c| format!("exit code {c}"));
            return Err(InstallError::build(format!(
                "'cargo build --release' in {} terminated with {}",
                dir.display(),
                code
            )));
        }

        info!(dir = %dir.display(), "cargo build finished");
        Ok(())
    }
}
