// Standard library
use std::path::Path;

// External crates
use inventory_core::{inv_println, inv_progress, inv_warning};
use inventory_messages::{msg_format, MESSAGES};
use tracing::{debug, info, info_span};

// Internal imports
use crate::build_step::{BuildRunner, CargoBuild};
use crate::error::InstallError;
use crate::link;
use crate::paths::InstallPaths;
use crate::profile::{self, FileProfile, ProfileStore};
use crate::report::{InstallReport, Step, StepOutcome};

/// Resolve paths from the environment and run every install step.
pub fn install() -> Result<InstallReport, InstallError> {
    let paths = InstallPaths::from_env()?;
    Installer::for_paths(paths).install()
}

/// Runs the install steps against a build runner and a profile store.
///
/// Every step is idempotent on its own, so a run interrupted or failed at
/// any point can simply be repeated. Nothing is rolled back on failure.
pub struct Installer<B, P> {
    paths: InstallPaths,
    builder: B,
    profile: P,
}

impl Installer<CargoBuild, FileProfile> {
    /// Installer that builds with cargo and edits the profile on disk.
    pub fn for_paths(paths: InstallPaths) -> Self {
        let profile = FileProfile::new(&paths.shell_profile_path);
        Self::new(paths, CargoBuild::new(), profile)
    }
}

impl<B: BuildRunner, P: ProfileStore> Installer<B, P> {
    pub fn new(paths: InstallPaths, builder: B, profile: P) -> Self {
        Self {
            paths,
            builder,
            profile,
        }
    }

    pub fn paths(&self) -> &InstallPaths {
        &self.paths
    }

    pub fn profile(&self) -> &P {
        &self.profile
    }

    pub fn install(&mut self) -> Result<InstallReport, InstallError> {
        let span = info_span!(
            "install",
            install_dir = %self.paths.install_dir.display(),
            link = %self.paths.link_path.display(),
            profile = %self.profile.location().display(),
        );
        let _guard = span.enter();

        let mut report = InstallReport::new(self.paths.clone());
        report.record(Step::Binary, self.ensure_binary()?);
        report.record(Step::LinkDir, self.ensure_link_dir()?);
        report.record(Step::Symlink, self.link_binary()?);
        report.record(Step::Alias, self.ensure_alias()?);

        info!("install finished");
        Ok(report)
    }

    fn ensure_binary(&self) -> Result<StepOutcome, InstallError> {
        let binary = &self.paths.binary_path;
        let binary_name = file_name(binary);

        if binary.is_file() {
            debug!(binary = %binary.display(), "binary present, skipping build");
            self.warn_if_not_executable();
            return Ok(StepOutcome::AlreadyDone(msg_format!(
                MESSAGES.installer.binary_present,
                binary = binary_name
            )));
        }

        inv_progress!(
            "{}",
            msg_format!(
                MESSAGES.installer.building,
                binary = binary_name,
                dir = self.paths.install_dir.display()
            )
        );
        inv_println!("{}", MESSAGES.installer.build_time_hint);
        self.builder.run_build(&self.paths.install_dir)?;

        if !binary.is_file() {
            return Err(InstallError::build(format!(
                "build finished but {} was not produced",
                binary.display()
            )));
        }
        self.warn_if_not_executable();

        Ok(StepOutcome::Performed(msg_format!(
            MESSAGES.installer.binary_built,
            binary = binary.display()
        )))
    }

    fn ensure_link_dir(&self) -> Result<StepOutcome, InstallError> {
        let dir = self.paths.link_dir();
        let created =
            link::ensure_dir(dir).map_err(|e| InstallError::filesystem(Step::LinkDir, dir, e))?;

        Ok(if created {
            debug!(dir = %dir.display(), "created link directory");
            StepOutcome::Performed(msg_format!(
                MESSAGES.installer.link_dir_created,
                dir = dir.display()
            ))
        } else {
            StepOutcome::AlreadyDone(msg_format!(
                MESSAGES.installer.link_dir_present,
                dir = dir.display()
            ))
        })
    }

    fn link_binary(&self) -> Result<StepOutcome, InstallError> {
        let target = &self.paths.binary_path;
        let link_path = &self.paths.link_path;

        let previous = link::force_symlink(target, link_path)
            .map_err(|e| InstallError::filesystem(Step::Symlink, link_path, e))?;

        let detail = match previous {
            Some(previous) => msg_format!(
                MESSAGES.installer.link_replaced,
                link = link_path.display(),
                target = target.display(),
                previous = previous.display()
            ),
            None => msg_format!(
                MESSAGES.installer.link_created,
                link = link_path.display(),
                target = target.display()
            ),
        };
        Ok(StepOutcome::Performed(detail))
    }

    fn ensure_alias(&mut self) -> Result<StepOutcome, InstallError> {
        let location = self.profile.location().to_path_buf();
        let content = self
            .profile
            .read()
            .map_err(|e| InstallError::filesystem(Step::Alias, &location, e))?;

        if profile::has_marker(&content) {
            info!("alias already present");
            return Ok(StepOutcome::AlreadyDone(msg_format!(
                MESSAGES.installer.alias_present,
                profile = location.display()
            )));
        }

        let block = profile::alias_block(&self.paths.link_path);
        self.profile
            .append_block(&block)
            .map_err(|e| InstallError::filesystem(Step::Alias, &location, e))?;

        info!("alias appended");
        Ok(StepOutcome::Performed(msg_format!(
            MESSAGES.installer.alias_appended,
            profile = location.display()
        )))
    }

    fn warn_if_not_executable(&self) {
        let binary = &self.paths.binary_path;
        if !link::is_executable(binary) {
            debug!(binary = %binary.display(), "binary has no execute permission");
            inv_warning!(
                "{}",
                msg_format!(
                    MESSAGES.installer.binary_not_executable,
                    path = binary.display()
                )
            );
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
