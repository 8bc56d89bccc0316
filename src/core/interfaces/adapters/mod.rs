mod platform_profile;

pub use platform_profile::{CaptureExecutor, DisplayEnumerator, PlatformProfile};
