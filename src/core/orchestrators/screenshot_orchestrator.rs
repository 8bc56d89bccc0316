use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::core::errors::{CaptureError, EnumerationError};
use crate::core::interfaces::adapters::PlatformProfile;
use crate::core::models::{CaptureRequest, Display};
use crate::global_constants::{LOG_TAG_CAPTURE, LOG_TAG_DISPLAYS};

/// Entry point of the core: one optional enumeration, then one capture.
pub struct ScreenshotOrchestrator {
    platform_profile: Arc<dyn PlatformProfile>,
}

impl ScreenshotOrchestrator {
    pub fn build(platform_profile: Arc<dyn PlatformProfile>) -> Self {
        Self { platform_profile }
    }

    pub fn platform_name(&self) -> &'static str {
        self.platform_profile.platform_name()
    }

    pub async fn list_displays(&self) -> Result<Vec<Display>, EnumerationError> {
        log::info!(
            "{} enumerating displays on {}",
            LOG_TAG_DISPLAYS,
            self.platform_profile.platform_name()
        );

        self.platform_profile.enumerate_displays().await
    }

    /// Validates `mode` before anything is spawned, then captures and opens.
    pub async fn take_screenshot_and_open(
        &self,
        mode: &str,
        display_index: Option<u32>,
        destination_path: &Path,
    ) -> Result<PathBuf, CaptureError> {
        let request = CaptureRequest::build(mode, display_index, destination_path)?;

        log::info!(
            "{} taking {} screenshot into {:?}",
            LOG_TAG_CAPTURE,
            request.mode,
            request.destination_path
        );

        self.platform_profile.capture_and_open(&request).await
    }
}
