use clap::Parser;
use colored::Colorize;
use inventory_core::{
    inv_error, inv_error_hint, inv_info, inv_print, inv_println, inv_success, inv_warning,
    tracing_init,
};
use inventory_installer::{platform, InstallError, InstallReport};
use inventory_messages::{msg_format, MESSAGES};

mod cli;

use cli::Args;

fn main() {
    let _args = Args::parse();

    if let Err(e) = tracing_init::init() {
        inv_warning!("{:#}", e);
    }

    if let Err(e) = run() {
        report_failure(&e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), InstallError> {
    inv_println!("{}", MESSAGES.installer.installing);

    let report = inventory_installer::install()?;

    inv_println!();
    inv_print!("{}", report);
    print_hints(&report);

    inv_success!("{}", MESSAGES.installer.complete);
    Ok(())
}

fn print_hints(report: &InstallReport) {
    let paths = report.paths();
    let link_dir = paths.link_dir();
    if platform::is_on_path(link_dir) {
        inv_info!(
            "{}",
            msg_format!(
                MESSAGES.installer.path_already_configured,
                path = link_dir.display()
            )
        );
    } else {
        inv_warning!(
            "{}",
            msg_format!(MESSAGES.installer.path_not_configured, path = link_dir.display())
        );
        inv_println!(
            "{}",
            msg_format!(
                MESSAGES.installer.add_to_path_hint,
                path = link_dir.display(),
                profile = paths.shell_profile_path.display()
            )
        );
        inv_println!(
            "  {}",
            platform::path_export_line(link_dir, &paths.shell_profile_path).cyan()
        );
    }

    if report.alias_appended() {
        inv_info!(
            "{}",
            msg_format!(
                MESSAGES.installer.alias_reload_hint,
                profile = paths.shell_profile_path.display()
            )
        );
    }
}

fn report_failure(err: &InstallError) {
    let step = err
        .step()
        .map_or_else(|| "resolve paths".to_string(), |s| s.to_string());
    inv_error!("{}", msg_format!(MESSAGES.installer.failed, step = step));
    inv_error!("   Error: {}", err);
    inv_error_hint!("{}", err.hint());
    inv_error_hint!("{}", MESSAGES.installer.help_hint);
}
