// src/errors.rs

//! Crate-wide error type and the structured failure of a vmcli invocation.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VmcliError {
    #[error("vmcli path was not specified")]
    NotConfigured,

    #[error("cannot start the process '{}': {source}", program.display())]
    ProcessStart {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{0}")]
    CommandFailed(Box<CommandFailed>),

    #[error("vmcli invocation was cancelled")]
    Cancelled,

    #[error("reading {stream} of vmcli failed: {source}")]
    Drain {
        stream: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VmcliError {
    /// The structured failure, if this error came from a non-zero exit.
    pub fn command_failed(&self) -> Option<&CommandFailed> {
        match self {
            VmcliError::CommandFailed(failed) => Some(failed),
            _ => None,
        }
    }
}

impl From<CommandFailed> for VmcliError {
    fn from(failed: CommandFailed) -> Self {
        VmcliError::CommandFailed(Box::new(failed))
    }
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, VmcliError>;

/// vmcli exited with a non-zero code.
///
/// Carries everything needed to reproduce the call by hand: the exit code,
/// the argument vector in its original order, and both captured streams.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandFailed {
    exit_code: i32,
    arguments: Vec<String>,
    output: String,
    error: String,
}

impl CommandFailed {
    pub fn new(
        exit_code: i32,
        arguments: impl IntoIterator<Item = impl Into<String>>,
        output: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            exit_code,
            arguments: arguments.into_iter().map(Into::into).collect(),
            output: output.into(),
            error: error.into(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// Captured stdout.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Captured stderr.
    pub fn error(&self) -> &str {
        &self.error
    }

    /// The stderr text folded onto one line, without trailing periods.
    fn refined_error(&self) -> String {
        self.error
            .replace(['\r', '\n'], "")
            .trim()
            .trim_end_matches('.')
            .to_string()
    }
}

impl fmt::Display for CommandFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.error.trim().is_empty() {
            write!(f, "vmcli returned a non-zero exit code without any error text.")?;
        } else {
            write!(f, "vmcli returns one or more error: {}.", self.refined_error())?;
        }
        write!(
            f,
            " (Arguments: {}, Exit code: {})",
            self.arguments.join(" "),
            self.exit_code
        )
    }
}

impl std::error::Error for CommandFailed {}
