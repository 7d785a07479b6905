#![allow(dead_code)]

use std::cell::Cell;
use std::fs;
use std::path::{Path, PathBuf};

use inventory_installer::{BuildRunner, InstallError, InstallPaths};
use tempfile::TempDir;

/// What the fake build does when invoked.
#[derive(Clone, Copy)]
pub enum BuildBehavior {
    /// Write an executable at the expected artifact path.
    Produce,
    /// Exit non-zero without producing anything.
    Fail,
}

pub struct FakeBuild {
    behavior: BuildBehavior,
    artifact: PathBuf,
    calls: Cell<u32>,
}

impl FakeBuild {
    pub fn new(behavior: BuildBehavior, artifact: &Path) -> Self {
        Self {
            behavior,
            artifact: artifact.to_path_buf(),
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> u32 {
        self.calls.get()
    }
}

impl BuildRunner for &FakeBuild {
    fn run_build(&self, _dir: &Path) -> Result<(), InstallError> {
        self.calls.set(self.calls.get() + 1);
        match self.behavior {
            BuildBehavior::Produce => {
                write_executable(&self.artifact);
                Ok(())
            }
            BuildBehavior::Fail => Err(InstallError::build(
                "'cargo build --release' terminated with exit code 101",
            )),
        }
    }
}

pub fn write_executable(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "#!/bin/sh\necho scanning\n").unwrap();

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
    }
}

/// Temporary home plus an install directory inside it.
pub struct InstallFixture {
    _temp_dir: TempDir,
    pub home: PathBuf,
    pub paths: InstallPaths,
}

impl InstallFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let home = temp_dir.path().join("home");
        fs::create_dir_all(&home).unwrap();

        let install_dir = home.join("SecurePenguin").join("securepenguin-inventory");
        fs::create_dir_all(&install_dir).unwrap();

        let paths = InstallPaths::new(install_dir, &home, home.join(".zshrc"));

        Self {
            _temp_dir: temp_dir,
            home,
            paths,
        }
    }

    pub fn with_built_binary() -> Self {
        let fixture = Self::new();
        write_executable(&fixture.paths.binary_path);
        fixture
    }

    pub fn profile_content(&self) -> String {
        fs::read_to_string(&self.paths.shell_profile_path).unwrap_or_default()
    }
}
