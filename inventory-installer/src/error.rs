//! Installer error taxonomy.

use std::io;
use std::path::PathBuf;

use inventory_messages::MESSAGES;
use thiserror::Error;

use crate::report::Step;

#[derive(Error, Debug)]
pub enum InstallError {
    /// The build step failed or did not produce the expected artifact.
    #[error("build failed: {detail}")]
    Build { detail: String, cargo_missing: bool },

    /// A directory, link or profile write failed.
    #[error("{step} failed at {}: {source}", path.display())]
    Filesystem {
        step: Step,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Home directory or a configured path could not be determined.
    #[error("could not resolve install paths: {0}")]
    PathResolution(String),
}

impl InstallError {
    pub fn build(detail: impl Into<String>) -> Self {
        InstallError::Build {
            detail: detail.into(),
            cargo_missing: false,
        }
    }

    pub fn cargo_missing(detail: impl Into<String>) -> Self {
        InstallError::Build {
            detail: detail.into(),
            cargo_missing: true,
        }
    }

    pub fn filesystem(step: Step, path: impl Into<PathBuf>, source: io::Error) -> Self {
        InstallError::Filesystem {
            step,
            path: path.into(),
            source,
        }
    }

    /// The step that was running when the error occurred.
    ///
    /// `None` for path resolution, which fails before any step starts.
    pub fn step(&self) -> Option<Step> {
        match self {
            InstallError::Build { .. } => Some(Step::Binary),
            InstallError::Filesystem { step, .. } => Some(*step),
            InstallError::PathResolution(_) => None,
        }
    }

    /// One-line remedy to show under the error.
    pub fn hint(&self) -> &'static str {
        match self {
            InstallError::Build {
                cargo_missing: true,
                ..
            } => MESSAGES.installer.hint_cargo_missing,
            InstallError::Build { .. } => MESSAGES.installer.hint_build,
            InstallError::Filesystem { .. } => MESSAGES.installer.hint_filesystem,
            InstallError::PathResolution(_) => MESSAGES.installer.hint_path_resolution,
        }
    }
}
