// Standard library
use std::env;
use std::path::Path;

/// Whether `dir` is one of the entries of a `PATH`-style value.
pub fn dir_in_path_var(dir: &Path, path_var: &str) -> bool {
    env::split_paths(path_var).any(|entry| entry == dir)
}

/// Whether `dir` is on the current process `PATH`.
pub fn is_on_path(dir: &Path) -> bool {
    env::var("PATH")
        .map(|path_var| dir_in_path_var(dir, &path_var))
        .unwrap_or(false)
}

/// Line to add to a shell profile to put `dir` on `PATH`.
pub fn path_export_line(dir: &Path, profile: &Path) -> String {
    if profile.ends_with("config.fish") {
        format!("fish_add_path -p \"{}\"", dir.display())
    } else {
        format!("export PATH=\"{}:$PATH\"", dir.display())
    }
}
