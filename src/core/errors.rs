use std::fmt;

use thiserror::Error;

use crate::core::models::{CommandOutput, NativeCommand};

/// Diagnostic payload for a native utility that failed to spawn or exited non-zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeFailure {
    pub command: String,
    pub exit_code: Option<i32>,
    pub stderr: String,
}

impl NativeFailure {
    pub fn from_spawn_error(command: &NativeCommand, error: &std::io::Error) -> Self {
        Self {
            command: command.to_string(),
            exit_code: None,
            stderr: error.to_string(),
        }
    }

    pub fn from_output(command: &NativeCommand, output: &CommandOutput) -> Self {
        Self {
            command: command.to_string(),
            exit_code: output.exit_code,
            stderr: output.stderr.trim().to_string(),
        }
    }
}

impl fmt::Display for NativeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.exit_code {
            Some(code) => write!(f, "`{}` exited with status {}", self.command, code)?,
            None => write!(f, "`{}` failed", self.command)?,
        }
        if !self.stderr.is_empty() {
            write!(f, ": {}", self.stderr)?;
        }
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum EnumerationError {
    #[error("display query failed: {0}")]
    NativeToolFailed(NativeFailure),
    #[error("display query returned malformed output: {0}")]
    MalformedOutput(String),
}

#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("invalid screenshot type `{0}`, expected \"full\" or \"window\"")]
    InvalidMode(String),
    #[error("screenshot command failed: {0}")]
    NativeToolFailed(NativeFailure),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PlatformError {
    #[error("unsupported platform: {0}")]
    UnsupportedPlatform(String),
}
