//! Per-step status of an install run.

use std::fmt;

use colored::Colorize;

use crate::paths::InstallPaths;

/// The installer's steps, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Binary,
    LinkDir,
    Symlink,
    Alias,
}

impl Step {
    pub const ALL: [Step; 4] = [Step::Binary, Step::LinkDir, Step::Symlink, Step::Alias];

    pub fn name(self) -> &'static str {
        match self {
            Step::Binary => "ensure binary",
            Step::LinkDir => "ensure link directory",
            Step::Symlink => "create symlink",
            Step::Alias => "ensure alias",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a step did. Failures are not outcomes; they abort the run as an
/// [`InstallError`](crate::error::InstallError).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Performed(String),
    AlreadyDone(String),
}

impl StepOutcome {
    pub fn detail(&self) -> &str {
        match self {
            StepOutcome::Performed(detail) | StepOutcome::AlreadyDone(detail) => detail,
        }
    }

    pub fn is_performed(&self) -> bool {
        matches!(self, StepOutcome::Performed(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    pub step: Step,
    pub outcome: StepOutcome,
}

/// Step outcomes of one run, in execution order, plus the paths they acted on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    paths: InstallPaths,
    records: Vec<StepRecord>,
}

impl InstallReport {
    pub fn new(paths: InstallPaths) -> Self {
        Self {
            paths,
            records: Vec::new(),
        }
    }

    pub fn paths(&self) -> &InstallPaths {
        &self.paths
    }

    pub(crate) fn record(&mut self, step: Step, outcome: StepOutcome) {
        self.records.push(StepRecord { step, outcome });
    }

    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }

    pub fn outcome(&self, step: Step) -> Option<&StepOutcome> {
        self.records
            .iter()
            .find(|r| r.step == step)
            .map(|r| &r.outcome)
    }

    /// Whether `step` ran and changed something.
    pub fn performed(&self, step: Step) -> bool {
        self.outcome(step).is_some_and(StepOutcome::is_performed)
    }

    pub fn alias_appended(&self) -> bool {
        self.performed(Step::Alias)
    }
}

impl fmt::Display for InstallReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in &self.records {
            match &record.outcome {
                StepOutcome::Performed(detail) => {
                    writeln!(f, "  {} {:<22} {}", "✓".green(), record.step.name(), detail)?
                }
                StepOutcome::AlreadyDone(detail) => writeln!(
                    f,
                    "  {} {:<22} {}",
                    "•".dimmed(),
                    record.step.name(),
                    detail.as_str().dimmed()
                )?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    fn paths() -> InstallPaths {
        InstallPaths::new(
            PathBuf::from("/home/penguin/SecurePenguin/securepenguin-inventory"),
            Path::new("/home/penguin"),
            PathBuf::from("/home/penguin/.zshrc"),
        )
    }

    fn sample() -> InstallReport {
        let mut report = InstallReport::new(paths());
        report.record(
            Step::Binary,
            StepOutcome::AlreadyDone("securepenguin-inventory already built".into()),
        );
        report.record(Step::LinkDir, StepOutcome::AlreadyDone("exists".into()));
        report.record(Step::Symlink, StepOutcome::Performed("linked".into()));
        report.record(Step::Alias, StepOutcome::AlreadyDone("present".into()));
        report
    }

    #[test]
    fn test_outcome_lookup() {
        let report = sample();
        assert!(report.performed(Step::Symlink));
        assert!(!report.performed(Step::Binary));
        assert!(!report.alias_appended());
        assert_eq!(report.outcome(Step::Alias).map(StepOutcome::detail), Some("present"));
    }

    #[test]
    fn test_missing_step_is_not_performed() {
        let report = InstallReport::new(paths());
        assert!(report.outcome(Step::Binary).is_none());
        assert!(!report.performed(Step::Binary));
    }

    #[test]
    fn test_display_lists_steps_in_order() {
        colored::control::set_override(false);
        let text = sample().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("ensure binary"));
        assert!(lines[2].contains("✓"));
        assert!(lines[3].contains("•"));
        assert!(lines[3].contains("present"));
    }
}
