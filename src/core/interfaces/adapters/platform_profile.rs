use std::path::PathBuf;

use async_trait::async_trait;

use crate::core::errors::{CaptureError, EnumerationError};
use crate::core::models::{CaptureRequest, Display};

#[async_trait]
pub trait DisplayEnumerator: Send + Sync {
    /// Queries the OS once; the result is never cached.
    async fn enumerate_displays(&self) -> Result<Vec<Display>, EnumerationError>;
}

#[async_trait]
pub trait CaptureExecutor: Send + Sync {
    /// Writes the screenshot to the request's destination, then launches the
    /// default viewer without waiting for it. Returns the destination path.
    async fn capture_and_open(&self, request: &CaptureRequest) -> Result<PathBuf, CaptureError>;
}

pub trait PlatformProfile: DisplayEnumerator + CaptureExecutor {
    fn platform_name(&self) -> &'static str;
}
