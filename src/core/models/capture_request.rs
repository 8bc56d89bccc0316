use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::core::errors::CaptureError;
use crate::global_constants::{LOG_TAG_CAPTURE, MODE_FULL_SCREEN, MODE_WINDOW};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureMode {
    FullScreen,
    Window,
}

impl CaptureMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaptureMode::FullScreen => MODE_FULL_SCREEN,
            CaptureMode::Window => MODE_WINDOW,
        }
    }
}

impl fmt::Display for CaptureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaptureMode {
    type Err = CaptureError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            MODE_FULL_SCREEN => Ok(CaptureMode::FullScreen),
            MODE_WINDOW => Ok(CaptureMode::Window),
            other => Err(CaptureError::InvalidMode(other.to_string())),
        }
    }
}

/// A validated request for exactly one capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureRequest {
    pub mode: CaptureMode,
    pub display_index: Option<u32>,
    pub destination_path: PathBuf,
}

impl CaptureRequest {
    pub fn build(
        mode: &str,
        display_index: Option<u32>,
        destination_path: &Path,
    ) -> Result<Self, CaptureError> {
        let mode = mode.parse::<CaptureMode>()?;

        log::debug!(
            "{} request mode={}, display={:?}, destination={:?}",
            LOG_TAG_CAPTURE,
            mode,
            display_index,
            destination_path
        );

        Ok(Self {
            mode,
            display_index,
            destination_path: destination_path.to_path_buf(),
        })
    }

    pub fn destination_as_string(&self) -> String {
        self.destination_path.to_string_lossy().into_owned()
    }
}
