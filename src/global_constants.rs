#![allow(dead_code)]

pub const APPLICATION_NAME: &str = "screenshot-cli";

pub const LOG_TAG_APP: &str = "[APP]";
pub const LOG_TAG_PLATFORM: &str = "[PLATFORM]";
pub const LOG_TAG_DISPLAYS: &str = "[DISPLAYS]";
pub const LOG_TAG_CAPTURE: &str = "[CAPTURE]";
pub const LOG_TAG_COMMAND: &str = "[COMMAND]";
pub const LOG_TAG_RECENT_PATHS: &str = "[RECENT_PATHS]";
pub const LOG_TAG_PROMPT: &str = "[PROMPT]";

pub const MODE_FULL_SCREEN: &str = "full";
pub const MODE_WINDOW: &str = "window";

pub const UNKNOWN_RESOLUTION: &str = "Unknown resolution";
pub const DISPLAY_NAME_PREFIX: &str = "Display";
pub const DEFAULT_DISPLAY_INDEX: u32 = 1;

pub const MACOS_PROFILER_COMMAND: &str = "system_profiler";
pub const MACOS_PROFILER_ARGS: &[&str] = &["SPDisplaysDataType", "-json"];
pub const MACOS_PROFILER_TOP_LEVEL_KEY: &str = "SPDisplaysDataType";
pub const MACOS_MIRROR_OFF: &str = "spdisplays_off";
pub const MACOS_CAPTURE_COMMAND: &str = "screencapture";
pub const MACOS_OPEN_COMMAND: &str = "open";

pub const WINDOWS_WMIC_COMMAND: &str = "wmic";
pub const WINDOWS_WMIC_ARGS: &[&str] = &[
    "path",
    "Win32_VideoController",
    "get",
    "Caption,CurrentHorizontalResolution,CurrentVerticalResolution",
];
pub const WINDOWS_POWERSHELL_COMMAND: &str = "powershell";
pub const WINDOWS_POWERSHELL_COMMAND_FLAG: &str = "-command";
pub const WINDOWS_FULL_SCREEN_KEYS: &str = "{PrtSc}";
pub const WINDOWS_ACTIVE_WINDOW_KEYS: &str = "%{PrtSc}";
pub const WINDOWS_CLIPBOARD_DELAY_MILLIS: u64 = 250;

pub const LINUX_XRANDR_COMMAND: &str = "xrandr";
pub const LINUX_XRANDR_ARGS: &[&str] = &["--query"];
pub const LINUX_CONNECTED_MARKER: &str = " connected";
pub const LINUX_IMPORT_COMMAND: &str = "import";
pub const LINUX_ROOT_WINDOW: &str = "root";
pub const LINUX_XDOTOOL_COMMAND: &str = "xdotool";
pub const LINUX_XDOTOOL_ACTIVE_WINDOW_ARGS: &[&str] = &["getactivewindow"];
pub const LINUX_OPEN_COMMAND: &str = "xdg-open";

pub const SCREENSHOT_FILE_PREFIX: &str = "screenshot-";
pub const SCREENSHOT_FILE_EXTENSION: &str = "png";

pub const RECENT_PATHS_DIRECTORY_NAME: &str = "screenshot-cli";
pub const RECENT_PATHS_FILE_NAME: &str = "recent-paths.json";
pub const RECENT_PATHS_LIMIT: usize = 3;

pub const PROMPT_CHOOSE_SAVE_LOCATION: &str = "Choose save location";
pub const PROMPT_CHOOSE_SCREENSHOT_TYPE: &str = "Choose screenshot type";
pub const PROMPT_CHOOSE_DISPLAY: &str = "Choose a display";
pub const PROMPT_CUSTOM_PATH_EXAMPLE_SUBDIRECTORY: &str = "Screenshots";

pub const CHOICE_TITLE_FULL_SCREEN: &str = "Full Screen";
pub const CHOICE_TITLE_APP_WINDOW: &str = "App Window";
pub const CHOICE_TITLE_CUSTOM_PATH: &str = "Custom path";
pub const CHOICE_TITLE_RECENT_PREFIX: &str = "Recent:";

pub const VALIDATION_PATH_EMPTY: &str = "Path cannot be empty";
pub const VALIDATION_PATH_NOT_ABSOLUTE: &str = "Please provide an absolute path";
pub const VALIDATION_DIRECTORY_MISSING: &str = "Directory does not exist";

pub const USER_MESSAGE_TAKING_SCREENSHOT: &str = "Taking screenshot...";
pub const USER_MESSAGE_ERROR_PREFIX: &str = "Error:";
