//! Shell profile alias management.
//!
//! The profile is only ever read and appended to. Whether the alias is
//! already installed is decided by searching the whole file for
//! [`ALIAS_MARKER`]; no parsing of shell syntax is attempted.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use inventory_messages::MESSAGES;

/// Name of the shell alias that runs the scanner.
pub const ALIAS_NAME: &str = "scan-inventory";

/// Substring whose presence anywhere in the profile means the alias is installed.
pub const ALIAS_MARKER: &str = "alias scan-inventory";

pub fn has_marker(content: &str) -> bool {
    content.contains(ALIAS_MARKER)
}

/// `alias scan-inventory='<target>'`, with single quotes in the target escaped.
pub fn alias_line(target: &Path) -> String {
    let quoted = target.display().to_string().replace('\'', r"'\''");
    format!("alias {ALIAS_NAME}='{quoted}'")
}

/// Blank separator, comment, alias definition.
pub fn alias_block(target: &Path) -> Vec<String> {
    vec![
        String::new(),
        MESSAGES.installer.alias_comment.to_string(),
        alias_line(target),
    ]
}

/// Storage for the shell startup file.
pub trait ProfileStore {
    /// Where the profile lives, for status and error messages.
    fn location(&self) -> &Path;

    /// Current content. A profile that does not exist yet reads as empty.
    fn read(&self) -> io::Result<String>;

    /// Append each line, newline-terminated, to the end of the profile.
    fn append_block(&mut self, lines: &[String]) -> io::Result<()>;
}

/// A profile file on disk.
#[derive(Debug, Clone)]
pub struct FileProfile {
    path: PathBuf,
}

impl FileProfile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ProfileStore for FileProfile {
    fn location(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> io::Result<String> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(e),
        }
    }

    fn append_block(&mut self, lines: &[String]) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;

        let mut block = String::new();
        for line in lines {
            block.push_str(line);
            block.push('\n');
        }
        file.write_all(block.as_bytes())?;
        file.flush()
    }
}

/// In-memory profile for tests.
#[derive(Debug, Clone)]
pub struct MemoryProfile {
    location: PathBuf,
    content: String,
    read_only: bool,
}

impl MemoryProfile {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            location: PathBuf::from("<memory>"),
            content: content.into(),
            read_only: false,
        }
    }

    /// A profile whose appends fail with `PermissionDenied`.
    pub fn read_only(content: impl Into<String>) -> Self {
        Self {
            read_only: true,
            ..Self::new(content)
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl ProfileStore for MemoryProfile {
    fn location(&self) -> &Path {
        &self.location
    }

    fn read(&self) -> io::Result<String> {
        Ok(self.content.clone())
    }

    fn append_block(&mut self, lines: &[String]) -> io::Result<()> {
        if self.read_only {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "profile is read-only",
            ));
        }
        for line in lines {
            self.content.push_str(line);
            self.content.push('\n');
        }
        Ok(())
    }
}
