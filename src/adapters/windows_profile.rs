use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;

use super::native_tool::run_native_tool;
use crate::core::errors::{CaptureError, EnumerationError};
use crate::core::interfaces::adapters::{CaptureExecutor, DisplayEnumerator, PlatformProfile};
use crate::core::interfaces::ports::CommandRunner;
use crate::core::models::{number_displays, CaptureMode, CaptureRequest, Display, NativeCommand};
use crate::global_constants::{
    LOG_TAG_CAPTURE, LOG_TAG_DISPLAYS, WINDOWS_ACTIVE_WINDOW_KEYS,
    WINDOWS_CLIPBOARD_DELAY_MILLIS, WINDOWS_FULL_SCREEN_KEYS, WINDOWS_POWERSHELL_COMMAND,
    WINDOWS_POWERSHELL_COMMAND_FLAG, WINDOWS_WMIC_ARGS, WINDOWS_WMIC_COMMAND,
};

/// `wmic` for displays; PowerShell + PrtSc + clipboard for capture.
pub struct WindowsProfile {
    command_runner: Arc<dyn CommandRunner>,
}

impl WindowsProfile {
    pub fn build(command_runner: Arc<dyn CommandRunner>) -> Self {
        Self { command_runner }
    }

    /// Parses wmic's column table permissively: every line yields a display,
    /// with `Unknown resolution` unless the last two tokens are pixel counts.
    pub fn parse_video_controller_table(stdout: &str) -> Vec<Display> {
        let entries = stdout
            .trim()
            .lines()
            .skip(1)
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(Self::parse_video_controller_line);

        number_displays(entries)
    }

    fn parse_video_controller_line(line: &str) -> (Option<String>, Option<String>) {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let name = tokens.first().map(|token| token.to_string());
        let resolution = match tokens.as_slice() {
            [_, .., width, height] if is_pixel_count(width) && is_pixel_count(height) => {
                Some(Display::format_resolution(width, height))
            }
            _ => None,
        };

        (name, resolution)
    }

    /// The PowerShell script sends the PrtSc chord, waits for the clipboard,
    /// saves the image and starts the default handler for it.
    pub fn build_capture_script(mode: CaptureMode, destination: &str) -> String {
        let keys = match mode {
            CaptureMode::FullScreen => WINDOWS_FULL_SCREEN_KEYS,
            CaptureMode::Window => WINDOWS_ACTIVE_WINDOW_KEYS,
        };

        format!(
            "Add-Type -AssemblyName System.Windows.Forms; \
             [System.Windows.Forms.SendKeys]::SendWait('{keys}'); \
             Start-Sleep -Milliseconds {delay}; \
             $img = [System.Windows.Forms.Clipboard]::GetImage(); \
             $img.Save('{destination}'); \
             Start-Process '{destination}'",
            keys = keys,
            delay = WINDOWS_CLIPBOARD_DELAY_MILLIS,
            destination = destination,
        )
    }
}

fn is_pixel_count(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|byte| byte.is_ascii_digit())
}

#[async_trait]
impl DisplayEnumerator for WindowsProfile {
    async fn enumerate_displays(&self) -> Result<Vec<Display>, EnumerationError> {
        let command = NativeCommand::build(WINDOWS_WMIC_COMMAND, WINDOWS_WMIC_ARGS.iter().copied());
        let output = run_native_tool(self.command_runner.as_ref(), &command)
            .await
            .map_err(EnumerationError::NativeToolFailed)?;

        let displays = Self::parse_video_controller_table(&output.stdout);
        log::debug!("{} wmic reported {} controllers", LOG_TAG_DISPLAYS, displays.len());
        Ok(displays)
    }
}

#[async_trait]
impl CaptureExecutor for WindowsProfile {
    async fn capture_and_open(&self, request: &CaptureRequest) -> Result<PathBuf, CaptureError> {
        if request.display_index.is_some() {
            log::debug!("{} PrtSc captures every display, display index ignored", LOG_TAG_CAPTURE);
        }

        let script = Self::build_capture_script(request.mode, &request.destination_as_string());
        let command = NativeCommand::build(
            WINDOWS_POWERSHELL_COMMAND,
            [WINDOWS_POWERSHELL_COMMAND_FLAG.to_string(), script],
        );

        run_native_tool(self.command_runner.as_ref(), &command)
            .await
            .map_err(CaptureError::NativeToolFailed)?;

        log::info!(
            "{} {} screenshot saved and opened at {:?}",
            LOG_TAG_CAPTURE,
            request.mode,
            request.destination_path
        );
        Ok(request.destination_path.clone())
    }
}

impl PlatformProfile for WindowsProfile {
    fn platform_name(&self) -> &'static str {
        "Windows"
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::core::models::CommandOutput;
    use crate::test_doubles::ScriptedCommandRunner;

    const WMIC_HEADER: &str =
        "Caption                 CurrentHorizontalResolution  CurrentVerticalResolution";

    #[test]
    fn test_parse_takes_first_token_as_name_and_last_two_as_resolution() {
        let stdout = format!("{}\r\r\nIntel HD  1920  1080\r\r\n", WMIC_HEADER);

        let displays = WindowsProfile::parse_video_controller_table(&stdout);

        assert_eq!(displays.len(), 1);
        assert_eq!(displays[0].index, 1);
        assert_eq!(displays[0].name, "Intel");
        assert_eq!(displays[0].resolution, "1920x1080");
    }

    #[test]
    fn test_parse_keeps_short_lines_as_best_effort_displays() {
        let stdout = format!("{}\nNVIDIA 2560 1440\nBasicDisplay\nMirage 1024\n", WMIC_HEADER);

        let displays = WindowsProfile::parse_video_controller_table(&stdout);

        assert_eq!(displays.len(), 3);
        assert_eq!(displays[0].resolution, "2560x1440");
        assert_eq!(displays[1].name, "BasicDisplay");
        assert_eq!(displays[1].resolution, "Unknown resolution");
        assert_eq!(displays[2].index, 3);
        assert_eq!(displays[2].resolution, "Unknown resolution");
    }

    #[test]
    fn test_parse_adapter_with_empty_resolution_columns_is_unknown_resolution() {
        let stdout = format!(
            "{}\r\r\nMicrosoft Remote Display Adapter\r\r\nIntel HD 1920 1080\r\r\n",
            WMIC_HEADER
        );

        let displays = WindowsProfile::parse_video_controller_table(&stdout);

        assert_eq!(displays.len(), 2);
        assert_eq!(displays[0].name, "Microsoft");
        assert_eq!(displays[0].resolution, "Unknown resolution");
        assert_eq!(displays[1].resolution, "1920x1080");
    }

    #[test]
    fn test_parse_header_only_yields_no_displays() {
        assert!(WindowsProfile::parse_video_controller_table(WMIC_HEADER).is_empty());
        assert!(WindowsProfile::parse_video_controller_table("").is_empty());
    }

    #[test]
    fn test_capture_script_uses_alt_chord_for_window() {
        let script = WindowsProfile::build_capture_script(CaptureMode::Window, "C:\\shots\\a.png");

        assert!(script.contains("SendWait('%{PrtSc}')"));
        assert!(script.contains("Start-Sleep -Milliseconds 250"));
        assert!(script.ends_with("$img.Save('C:\\shots\\a.png'); Start-Process 'C:\\shots\\a.png'"));
    }

    #[test]
    fn test_capture_script_matches_full_screen_invocation() {
        let script = WindowsProfile::build_capture_script(CaptureMode::FullScreen, "C:\\a.png");

        assert_eq!(
            script,
            "Add-Type -AssemblyName System.Windows.Forms; \
             [System.Windows.Forms.SendKeys]::SendWait('{PrtSc}'); \
             Start-Sleep -Milliseconds 250; \
             $img = [System.Windows.Forms.Clipboard]::GetImage(); \
             $img.Save('C:\\a.png'); Start-Process 'C:\\a.png'"
        );
    }

    #[tokio::test]
    async fn test_enumerate_runs_wmic_query() {
        let stdout = format!("{}\nRadeon 3840 2160\n", WMIC_HEADER);
        let runner = Arc::new(ScriptedCommandRunner::with_outputs(vec![
            CommandOutput::succeeded_with(&stdout),
        ]));

        let displays = WindowsProfile::build(runner.clone()).enumerate_displays().await.unwrap();

        assert_eq!(displays[0].resolution, "3840x2160");
        assert_eq!(
            runner.executed(),
            vec![NativeCommand::build(
                "wmic",
                [
                    "path",
                    "Win32_VideoController",
                    "get",
                    "Caption,CurrentHorizontalResolution,CurrentVerticalResolution"
                ]
            )]
        );
    }

    #[tokio::test]
    async fn test_capture_runs_single_powershell_process_and_echoes_path() {
        let runner = Arc::new(ScriptedCommandRunner::default());
        let request = CaptureRequest::build("full", Some(2), Path::new("C:\\a.png")).unwrap();

        let saved = WindowsProfile::build(runner.clone())
            .capture_and_open(&request)
            .await
            .unwrap();

        assert_eq!(saved, PathBuf::from("C:\\a.png"));
        let executed = runner.executed();
        assert_eq!(executed.len(), 1);
        assert_eq!(executed[0].program, "powershell");
        assert_eq!(executed[0].args[0], "-command");
        assert!(runner.launched().is_empty());
    }

    #[tokio::test]
    async fn test_capture_failure_carries_powershell_stderr() {
        let runner = Arc::new(ScriptedCommandRunner::with_outputs(vec![
            CommandOutput::failed_with(1, "You cannot call a method on a null-valued expression."),
        ]));
        let request = CaptureRequest::build("window", None, Path::new("C:\\a.png")).unwrap();

        let result = WindowsProfile::build(runner).capture_and_open(&request).await;

        match result {
            Err(CaptureError::NativeToolFailed(failure)) => {
                assert!(failure.stderr.contains("null-valued"))
            }
            other => panic!("expected NativeToolFailed, got {:?}", other),
        }
    }
}
