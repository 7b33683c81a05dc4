//! Error taxonomy for config, parsing, and pipeline execution.
//!
//! A non-zero exit from a pipeline stage is deliberately *not* represented
//! here: the failing child is expected to have printed its own diagnostics,
//! so the runner returns that code silently instead of producing an error.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Everything that can go wrong before or while running an alias.
#[derive(Debug)]
pub enum UgError {
    /// No home directory could be resolved, so the config file has no
    /// location. Fatal at startup.
    ConfigUnavailable,
    /// The config file could not be read or written.
    Io(io::Error),
    /// The config file exists and is non-empty, but is not a JSON object
    /// mapping strings to strings.
    MalformedConfig {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The requested alias has no registered command.
    UnknownCommand(String),
    /// Splitting the command on `|` produced a stage with no tokens.
    EmptyStage { command: String },
    /// A stage's executable could not be resolved or launched.
    SpawnFailure { program: String, reason: String },
}

impl fmt::Display for UgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigUnavailable => {
                write!(
                    f,
                    "cannot determine home directory (set HOME or USERPROFILE)"
                )
            }
            Self::Io(err) => write!(f, "cannot access config file: {err}"),
            Self::MalformedConfig { path, source } => {
                write!(
                    f,
                    "malformed config at {}: expected a JSON object of string commands ({source})",
                    path.display()
                )
            }
            Self::UnknownCommand(name) => {
                write!(f, "`{name}` is not registered; see `ug set --help`")
            }
            Self::EmptyStage { command } => {
                write!(f, "empty pipeline stage in `{command}`")
            }
            Self::SpawnFailure { program, reason } => {
                write!(f, "cannot launch `{program}`: {reason}")
            }
        }
    }
}

impl std::error::Error for UgError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::MalformedConfig { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for UgError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
