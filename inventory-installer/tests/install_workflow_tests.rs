#![cfg(unix)]

mod common;

use std::fs;

use common::{BuildBehavior, FakeBuild, InstallFixture};
use inventory_installer::{FileProfile, InstallError, Installer, MemoryProfile, Step, StepOutcome};

fn alias_count(content: &str) -> usize {
    content.matches("alias scan-inventory").count()
}

#[test]
fn test_fresh_install_builds_links_and_appends_alias() {
    let fixture = InstallFixture::new();
    fs::write(&fixture.paths.shell_profile_path, "").unwrap();
    let build = FakeBuild::new(BuildBehavior::Produce, &fixture.paths.binary_path);

    let profile = FileProfile::new(&fixture.paths.shell_profile_path);
    let report = Installer::new(fixture.paths.clone(), &build, profile)
        .install()
        .expect("install should succeed");

    assert_eq!(build.calls(), 1);
    assert!(report.performed(Step::Binary));
    assert!(report.performed(Step::LinkDir));
    assert!(report.performed(Step::Symlink));
    assert!(report.alias_appended());

    assert!(fixture.home.join(".local/bin").is_dir());
    assert_eq!(
        fs::read_link(&fixture.paths.link_path).unwrap(),
        fixture.paths.binary_path
    );

    let expected = format!(
        "\n# SecurePenguin Inventory Scanner\nalias scan-inventory='{}'\n",
        fixture.paths.link_path.display()
    );
    assert_eq!(fixture.profile_content(), expected);
}

#[test]
fn test_existing_alias_and_binary_skip_build_and_append() {
    let fixture = InstallFixture::with_built_binary();
    let original = "export EDITOR=vim\nalias scan-inventory='/somewhere/else'\n";
    fs::write(&fixture.paths.shell_profile_path, original).unwrap();
    let build = FakeBuild::new(BuildBehavior::Produce, &fixture.paths.binary_path);

    let profile = FileProfile::new(&fixture.paths.shell_profile_path);
    let report = Installer::new(fixture.paths.clone(), &build, profile)
        .install()
        .unwrap();

    assert_eq!(build.calls(), 0);
    assert!(!report.performed(Step::Binary));
    assert!(report.performed(Step::Symlink));
    assert!(!report.alias_appended());
    assert!(matches!(
        report.outcome(Step::Alias),
        Some(StepOutcome::AlreadyDone(detail)) if detail.contains("already present")
    ));

    assert_eq!(fixture.profile_content(), original);
    assert_eq!(
        fs::read_link(&fixture.paths.link_path).unwrap(),
        fixture.paths.binary_path
    );
}

#[test]
fn test_failed_build_leaves_no_link_and_no_profile_change() {
    let fixture = InstallFixture::new();
    fs::write(&fixture.paths.shell_profile_path, "# mine\n").unwrap();
    let build = FakeBuild::new(BuildBehavior::Fail, &fixture.paths.binary_path);

    let profile = FileProfile::new(&fixture.paths.shell_profile_path);
    let err = Installer::new(fixture.paths.clone(), &build, profile)
        .install()
        .unwrap_err();

    assert!(matches!(err, InstallError::Build { .. }));
    assert_eq!(err.step(), Some(Step::Binary));
    assert!(err.to_string().contains("exit code 101"));

    assert!(!fixture.paths.link_path.exists());
    assert!(!fixture.paths.link_path.is_symlink());
    assert_eq!(fixture.profile_content(), "# mine\n");
}

#[test]
fn test_second_run_leaves_identical_state() {
    let fixture = InstallFixture::new();
    let build = FakeBuild::new(BuildBehavior::Produce, &fixture.paths.binary_path);

    let first = Installer::new(
        fixture.paths.clone(),
        &build,
        FileProfile::new(&fixture.paths.shell_profile_path),
    )
    .install()
    .unwrap();
    let profile_after_first = fixture.profile_content();
    let link_after_first = fs::read_link(&fixture.paths.link_path).unwrap();

    let second = Installer::new(
        fixture.paths.clone(),
        &build,
        FileProfile::new(&fixture.paths.shell_profile_path),
    )
    .install()
    .unwrap();

    assert_eq!(build.calls(), 1);
    assert!(first.alias_appended());
    assert!(!second.alias_appended());
    assert!(!second.performed(Step::Binary));
    assert!(!second.performed(Step::LinkDir));
    assert!(matches!(
        second.outcome(Step::Symlink),
        Some(StepOutcome::Performed(detail)) if detail.contains("was ->")
    ));

    assert_eq!(fixture.profile_content(), profile_after_first);
    assert_eq!(alias_count(&fixture.profile_content()), 1);
    assert_eq!(fs::read_link(&fixture.paths.link_path).unwrap(), link_after_first);
}

#[test]
fn test_missing_profile_is_created() {
    let fixture = InstallFixture::with_built_binary();
    assert!(!fixture.paths.shell_profile_path.exists());
    let build = FakeBuild::new(BuildBehavior::Fail, &fixture.paths.binary_path);

    let report = Installer::new(
        fixture.paths.clone(),
        &build,
        FileProfile::new(&fixture.paths.shell_profile_path),
    )
    .install()
    .unwrap();

    assert!(report.alias_appended());
    assert_eq!(alias_count(&fixture.profile_content()), 1);
}

#[test]
fn test_stale_link_is_replaced() {
    let fixture = InstallFixture::with_built_binary();
    let bin_dir = fixture.home.join(".local/bin");
    fs::create_dir_all(&bin_dir).unwrap();
    std::os::unix::fs::symlink("/old/inventory-scanner", &fixture.paths.link_path).unwrap();
    let build = FakeBuild::new(BuildBehavior::Fail, &fixture.paths.binary_path);

    let report = Installer::new(fixture.paths.clone(), &build, MemoryProfile::new(""))
        .install()
        .unwrap();

    assert!(!report.performed(Step::LinkDir));
    assert!(matches!(
        report.outcome(Step::Symlink),
        Some(StepOutcome::Performed(detail)) if detail.contains("/old/inventory-scanner")
    ));
    assert_eq!(
        fs::read_link(&fixture.paths.link_path).unwrap(),
        fixture.paths.binary_path
    );
}

#[test]
fn test_unwritable_profile_is_filesystem_error_after_link() {
    let fixture = InstallFixture::with_built_binary();
    let build = FakeBuild::new(BuildBehavior::Fail, &fixture.paths.binary_path);

    let mut installer = Installer::new(
        fixture.paths.clone(),
        &build,
        MemoryProfile::read_only("export PATH=/usr/bin\n"),
    );
    let err = installer.install().unwrap_err();

    assert!(matches!(err, InstallError::Filesystem { step: Step::Alias, .. }));
    // Earlier steps are not rolled back.
    assert_eq!(
        fs::read_link(&fixture.paths.link_path).unwrap(),
        fixture.paths.binary_path
    );
    assert_eq!(installer.profile().content(), "export PATH=/usr/bin\n");
}

#[test]
fn test_blocked_link_directory_is_filesystem_error() {
    let fixture = InstallFixture::with_built_binary();
    fs::create_dir_all(fixture.home.join(".local")).unwrap();
    fs::write(fixture.home.join(".local/bin"), "not a directory").unwrap();
    let build = FakeBuild::new(BuildBehavior::Fail, &fixture.paths.binary_path);

    let mut installer = Installer::new(fixture.paths.clone(), &build, MemoryProfile::new(""));
    let err = installer.install().unwrap_err();

    assert_eq!(err.step(), Some(Step::LinkDir));
    assert!(err.to_string().contains(".local/bin"));
    assert_eq!(installer.profile().content(), "");
}

#[test]
fn test_report_lists_every_step_in_order() {
    let fixture = InstallFixture::with_built_binary();
    let build = FakeBuild::new(BuildBehavior::Fail, &fixture.paths.binary_path);

    let report = Installer::new(fixture.paths.clone(), &build, MemoryProfile::new(""))
        .install()
        .unwrap();

    let steps: Vec<Step> = report.records().iter().map(|r| r.step).collect();
    assert_eq!(steps, Step::ALL.to_vec());
    assert_eq!(report.paths(), &fixture.paths);
}
