//! Shared CLI plumbing: error type, exit codes, and settings access.

use crate::config::FileStore;
use crate::session::Session;
use std::fmt;
use std::path::Path;

/// Process exit codes used by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Bad arguments, unknown preset, invalid color
    ValidationError = 1,
    /// Input could not be read or settings could not be stored
    IoError = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Failure of a CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code the process should end with
    pub kind: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Validation failure (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// I/O failure (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Numeric process exit code.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.kind.code()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type of CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Resolves the settings store: an explicit file, or the default location.
pub fn settings_store(path: Option<&Path>) -> CliResult<FileStore> {
    match path {
        Some(path) => Ok(FileStore::new(path)),
        None => FileStore::default_location()
            .map_err(|e| CliError::io(format!("Failed to locate settings: {e:#}"))),
    }
}

/// Opens a session backed by the settings file.
pub fn open_session(path: Option<&Path>) -> CliResult<Session<FileStore>> {
    let store = settings_store(path)?;
    Session::open(store).map_err(|e| CliError::io(format!("{e:#}")))
}

/// Parses a `true`/`false` style flag value.
pub fn parse_bool(value: &str) -> Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        other => Err(format!("expected true/false, got '{other}'")),
    }
}
