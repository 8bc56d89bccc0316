mod capture_request;
mod display;
mod native_command;
mod recent_paths;

pub use capture_request::{CaptureMode, CaptureRequest};
pub use display::{number_displays, Display};
pub use native_command::{CommandOutput, NativeCommand};
pub use recent_paths::RecentPaths;
