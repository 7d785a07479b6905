//! Central registry for all user-facing message templates.
//!
//! Naming Convention:
//! - `{step}_{state}` - Per-step status lines (e.g., `binary_built`, `alias_present`)
//! - `*_hint` - Follow-up suggestions printed after a status or error line
//!
//! Multi-line messages use `\n` for better readability and fewer inv_println! calls.

pub struct InstallerMessages {
    // ============================================================================
    // Run Lifecycle
    // ============================================================================
    pub installing: &'static str,
    pub complete: &'static str,
    pub failed: &'static str,
    pub help_hint: &'static str,

    // ============================================================================
    // Binary Step (alphabetically sorted)
    // ============================================================================
    pub binary_built: &'static str,
    pub binary_not_executable: &'static str,
    pub binary_present: &'static str,
    pub build_time_hint: &'static str,
    pub building: &'static str,

    // ============================================================================
    // Link Steps (alphabetically sorted)
    // ============================================================================
    pub link_created: &'static str,
    pub link_dir_created: &'static str,
    pub link_dir_present: &'static str,
    pub link_replaced: &'static str,

    // ============================================================================
    // Alias Step (alphabetically sorted)
    // ============================================================================
    pub alias_appended: &'static str,
    pub alias_comment: &'static str,
    pub alias_present: &'static str,
    pub alias_reload_hint: &'static str,

    // ============================================================================
    // PATH Check
    // ============================================================================
    pub path_already_configured: &'static str,
    pub path_not_configured: &'static str,
    pub add_to_path_hint: &'static str,

    // ============================================================================
    // Error Hints
    // ============================================================================
    pub hint_build: &'static str,
    pub hint_cargo_missing: &'static str,
    pub hint_filesystem: &'static str,
    pub hint_path_resolution: &'static str,
}

pub const INSTALLER_MESSAGES: InstallerMessages = InstallerMessages {
    // Run Lifecycle
    installing: "Installing SecurePenguin Inventory Scanner...",
    complete: "Installation complete! Run 'scan-inventory' from a new terminal session.",
    failed: "❌ Installation failed during step '{step}'",
    help_hint: "Re-run the installer after fixing the problem; completed steps are safe to repeat.",

    // Binary Step
    binary_built: "built {binary}",
    binary_not_executable: "{path} exists but is not executable",
    binary_present: "{binary} already built, skipping build",
    build_time_hint: "   This may take a few minutes on first build...",
    building: "Building {binary} in {dir}...",

    // Link Steps
    link_created: "linked {link} -> {target}",
    link_dir_created: "created {dir}",
    link_dir_present: "{dir} already exists",
    link_replaced: "relinked {link} -> {target} (was -> {previous})",

    // Alias Step
    alias_appended: "added 'scan-inventory' alias to {profile}",
    alias_comment: "# SecurePenguin Inventory Scanner",
    alias_present: "alias already present in {profile}",
    alias_reload_hint: "Run 'source {profile}' to use the alias in this shell.",

    // PATH Check
    path_already_configured: "{path} is already in your PATH.",
    path_not_configured: "{path} is not in your PATH",
    add_to_path_hint: "To add {path} to your PATH, add this line to {profile}:",

    // Error Hints
    hint_build: "Check the build output above for compilation errors",
    hint_cargo_missing: "Install the Rust toolchain from https://rustup.rs and make sure 'cargo' is on your PATH",
    hint_filesystem: "Check permissions on the path above, then re-run the installer",
    hint_path_resolution: "Make sure HOME is set and any INVENTORY_* overrides are absolute paths",
};

/// Unified messages struct; one field per tool component.
pub struct Messages {
    pub installer: InstallerMessages,
}

/// Global messages constant - main entry point for all message templates
pub const MESSAGES: Messages = Messages {
    installer: INSTALLER_MESSAGES,
};
