//! Install path resolution.
//!
//! The environment is captured once into an [`InstallEnv`] and turned into
//! [`InstallPaths`] by a pure function, so resolution never depends on
//! process state after capture.

use std::env;
use std::path::{Path, PathBuf};

use inventory_core::user_paths;

use crate::error::InstallError;

/// Name of the scanner executable; `cargo build` names it after the scanner package.
pub const BINARY_NAME: &str = "securepenguin-inventory";

/// Overrides the directory the scanner is built in.
pub const INSTALL_DIR_ENV: &str = "INVENTORY_INSTALL_DIR";

/// Overrides the shell startup file that receives the alias.
pub const PROFILE_ENV: &str = "INVENTORY_PROFILE";

/// Shells whose startup file we know how to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellKind {
    Zsh,
    Bash,
    Fish,
}

impl ShellKind {
    /// Detect from a `$SHELL` value such as `/usr/bin/zsh`.
    ///
    /// Unknown or missing shells fall back to zsh.
    pub fn from_shell_var(shell: Option<&str>) -> Self {
        match shell.and_then(|s| s.rsplit('/').next()) {
            Some("bash") => ShellKind::Bash,
            Some("fish") => ShellKind::Fish,
            _ => ShellKind::Zsh,
        }
    }

    pub fn profile_path(self, home: &Path) -> PathBuf {
        match self {
            ShellKind::Zsh => home.join(".zshrc"),
            ShellKind::Bash => home.join(".bashrc"),
            ShellKind::Fish => home.join(".config").join("fish").join("config.fish"),
        }
    }
}

/// Snapshot of the environment inputs the installer reads.
#[derive(Debug, Clone, Default)]
pub struct InstallEnv {
    pub home: Option<PathBuf>,
    pub shell: Option<String>,
    pub install_dir: Option<PathBuf>,
    pub profile: Option<PathBuf>,
}

impl InstallEnv {
    pub fn capture() -> Self {
        Self {
            home: user_paths::home_dir().ok(),
            shell: env::var("SHELL").ok(),
            install_dir: non_empty_var(INSTALL_DIR_ENV),
            profile: non_empty_var(PROFILE_ENV),
        }
    }
}

fn non_empty_var(key: &str) -> Option<PathBuf> {
    env::var_os(key)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Filesystem locations for one installer run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPaths {
    pub install_dir: PathBuf,
    pub binary_path: PathBuf,
    pub link_path: PathBuf,
    pub shell_profile_path: PathBuf,
}

impl InstallPaths {
    pub fn from_env() -> Result<Self, InstallError> {
        Self::resolve(&InstallEnv::capture())
    }

    pub fn resolve(env: &InstallEnv) -> Result<Self, InstallError> {
        let home = env
            .home
            .as_deref()
            .ok_or_else(|| InstallError::PathResolution("home directory not found".into()))?;
        require_absolute(home, "home directory")?;

        let install_dir = match &env.install_dir {
            Some(dir) => {
                require_absolute(dir, INSTALL_DIR_ENV)?;
                dir.clone()
            }
            None => home.join("SecurePenguin").join(BINARY_NAME),
        };

        let shell_profile_path = match &env.profile {
            Some(profile) => {
                require_absolute(profile, PROFILE_ENV)?;
                profile.clone()
            }
            None => ShellKind::from_shell_var(env.shell.as_deref()).profile_path(home),
        };

        Ok(Self::new(install_dir, home, shell_profile_path))
    }

    /// Derive the binary and link locations from an install directory and home.
    pub fn new(install_dir: PathBuf, home: &Path, shell_profile_path: PathBuf) -> Self {
        let binary_name = user_paths::executable_name(BINARY_NAME);
        Self {
            binary_path: install_dir.join("target").join("release").join(&binary_name),
            link_path: user_paths::user_bin_dir_in(home).join(&binary_name),
            install_dir,
            shell_profile_path,
        }
    }

    /// Directory that holds the link.
    pub fn link_dir(&self) -> &Path {
        self.link_path.parent().unwrap_or_else(|| Path::new("."))
    }
}

fn require_absolute(path: &Path, what: &str) -> Result<(), InstallError> {
    if path.is_absolute() {
        Ok(())
    } else {
        Err(InstallError::PathResolution(format!(
            "{} must be an absolute path, got '{}'",
            what,
            path.display()
        )))
    }
}
