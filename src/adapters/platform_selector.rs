use std::sync::Arc;

use super::{LinuxProfile, MacProfile, WindowsProfile};
use crate::core::errors::PlatformError;
use crate::core::interfaces::adapters::PlatformProfile;
use crate::core::interfaces::ports::CommandRunner;
use crate::global_constants::LOG_TAG_PLATFORM;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformKind {
    MacOs,
    Windows,
    Linux,
}

impl PlatformKind {
    pub fn detect() -> Result<Self, PlatformError> {
        Self::from_os_name(std::env::consts::OS)
    }

    pub fn from_os_name(os_name: &str) -> Result<Self, PlatformError> {
        match os_name {
            "macos" => Ok(PlatformKind::MacOs),
            "windows" => Ok(PlatformKind::Windows),
            "linux" => Ok(PlatformKind::Linux),
            other => Err(PlatformError::UnsupportedPlatform(other.to_string())),
        }
    }
}

pub fn build_platform_profile(
    kind: PlatformKind,
    command_runner: Arc<dyn CommandRunner>,
) -> Arc<dyn PlatformProfile> {
    match kind {
        PlatformKind::MacOs => Arc::new(MacProfile::build(command_runner)),
        PlatformKind::Windows => Arc::new(WindowsProfile::build(command_runner)),
        PlatformKind::Linux => Arc::new(LinuxProfile::build(command_runner)),
    }
}

/// Picks the profile for the running OS. Called once at startup.
pub fn select_platform_profile(
    command_runner: Arc<dyn CommandRunner>,
) -> Result<Arc<dyn PlatformProfile>, PlatformError> {
    let kind = PlatformKind::detect()?;
    let profile = build_platform_profile(kind, command_runner);

    log::info!("{} using {} profile", LOG_TAG_PLATFORM, profile.platform_name());
    Ok(profile)
}
