//! SecurePenguin inventory scanner installer.
//!
//! Builds the scanner if needed, links it into `~/.local/bin`, and adds a
//! `scan-inventory` alias to the user's shell profile exactly once. Every
//! step is safe to repeat.

pub mod build_step;
pub mod error;
pub mod installer;
pub mod link;
pub mod paths;
pub mod platform;
pub mod profile;
pub mod report;

// Re-export key types for the binary and for tests
pub use build_step::{BuildRunner, CargoBuild};
pub use error::InstallError;
pub use installer::{install, Installer};
pub use paths::{InstallEnv, InstallPaths, ShellKind};
pub use profile::{FileProfile, MemoryProfile, ProfileStore};
pub use report::{InstallReport, Step, StepOutcome, StepRecord};
