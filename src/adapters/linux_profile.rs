use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;

use super::native_tool::{capture_then_open, run_native_tool};
use crate::core::errors::{CaptureError, EnumerationError, NativeFailure};
use crate::core::interfaces::adapters::{CaptureExecutor, DisplayEnumerator, PlatformProfile};
use crate::core::interfaces::ports::CommandRunner;
use crate::core::models::{number_displays, CaptureMode, CaptureRequest, Display, NativeCommand};
use crate::global_constants::{
    LINUX_CONNECTED_MARKER, LINUX_IMPORT_COMMAND, LINUX_OPEN_COMMAND, LINUX_ROOT_WINDOW,
    LINUX_XDOTOOL_ACTIVE_WINDOW_ARGS, LINUX_XDOTOOL_COMMAND, LINUX_XRANDR_ARGS,
    LINUX_XRANDR_COMMAND, LOG_TAG_CAPTURE, LOG_TAG_DISPLAYS,
};

/// `xrandr` / ImageMagick `import` / `xdotool` / `xdg-open`.
pub struct LinuxProfile {
    command_runner: Arc<dyn CommandRunner>,
}

impl LinuxProfile {
    pub fn build(command_runner: Arc<dyn CommandRunner>) -> Self {
        Self { command_runner }
    }

    pub fn parse_xrandr_query(stdout: &str) -> Vec<Display> {
        let entries = stdout
            .lines()
            .filter(|line| line.contains(LINUX_CONNECTED_MARKER))
            .map(|line| {
                let name = line.split(' ').next().map(str::to_string);
                let resolution = find_resolution(line).map(str::to_string);
                (name, resolution)
            });

        number_displays(entries)
    }

    async fn query_active_window_id(&self) -> Result<String, CaptureError> {
        let command =
            NativeCommand::build(LINUX_XDOTOOL_COMMAND, LINUX_XDOTOOL_ACTIVE_WINDOW_ARGS.iter().copied());
        let output = run_native_tool(self.command_runner.as_ref(), &command)
            .await
            .map_err(CaptureError::NativeToolFailed)?;

        let window_id = output.stdout.trim().to_string();
        if window_id.is_empty() {
            return Err(CaptureError::NativeToolFailed(NativeFailure {
                command: command.to_string(),
                exit_code: None,
                stderr: "no active window reported".to_string(),
            }));
        }

        log::debug!("{} active window id {}", LOG_TAG_CAPTURE, window_id);
        Ok(window_id)
    }
}

/// First `<digits>x<digits>` run in `line`.
fn find_resolution(line: &str) -> Option<&str> {
    let bytes = line.as_bytes();
    let digits_end = |from: usize| {
        let mut cursor = from;
        while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
            cursor += 1;
        }
        cursor
    };

    let mut start = 0;
    while start < bytes.len() {
        if !bytes[start].is_ascii_digit() {
            start += 1;
            continue;
        }

        let width_end = digits_end(start);
        if width_end < bytes.len() && bytes[width_end] == b'x' {
            let height_end = digits_end(width_end + 1);
            if height_end > width_end + 1 {
                return Some(&line[start..height_end]);
            }
        }
        start = width_end;
    }

    None
}

#[async_trait]
impl DisplayEnumerator for LinuxProfile {
    async fn enumerate_displays(&self) -> Result<Vec<Display>, EnumerationError> {
        let command = NativeCommand::build(LINUX_XRANDR_COMMAND, LINUX_XRANDR_ARGS.iter().copied());
        let output = run_native_tool(self.command_runner.as_ref(), &command)
            .await
            .map_err(EnumerationError::NativeToolFailed)?;

        let displays = Self::parse_xrandr_query(&output.stdout);
        log::debug!("{} xrandr reported {} connected outputs", LOG_TAG_DISPLAYS, displays.len());
        Ok(displays)
    }
}

#[async_trait]
impl CaptureExecutor for LinuxProfile {
    async fn capture_and_open(&self, request: &CaptureRequest) -> Result<PathBuf, CaptureError> {
        let window = match request.mode {
            CaptureMode::FullScreen => LINUX_ROOT_WINDOW.to_string(),
            CaptureMode::Window => self.query_active_window_id().await?,
        };

        let capture_command = NativeCommand::build(
            LINUX_IMPORT_COMMAND,
            ["-window".to_string(), window, request.destination_as_string()],
        );

        capture_then_open(
            self.command_runner.as_ref(),
            &capture_command,
            LINUX_OPEN_COMMAND,
            request,
        )
        .await
    }
}

impl PlatformProfile for LinuxProfile {
    fn platform_name(&self) -> &'static str {
        "Linux"
    }
}
