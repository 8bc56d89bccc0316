mod linux_profile;
mod macos_profile;
mod native_tool;
mod platform_selector;
mod windows_profile;

pub use linux_profile::LinuxProfile;
pub use macos_profile::MacProfile;
pub use platform_selector::{build_platform_profile, select_platform_profile, PlatformKind};
pub use windows_profile::WindowsProfile;
