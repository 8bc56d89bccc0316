use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use super::native_tool::{capture_then_open, run_native_tool};
use crate::core::errors::{CaptureError, EnumerationError};
use crate::core::interfaces::adapters::{CaptureExecutor, DisplayEnumerator, PlatformProfile};
use crate::core::interfaces::ports::CommandRunner;
use crate::core::models::{number_displays, CaptureMode, CaptureRequest, Display, NativeCommand};
use crate::global_constants::{
    DEFAULT_DISPLAY_INDEX, LOG_TAG_CAPTURE, LOG_TAG_DISPLAYS, MACOS_CAPTURE_COMMAND,
    MACOS_MIRROR_OFF, MACOS_OPEN_COMMAND, MACOS_PROFILER_ARGS, MACOS_PROFILER_COMMAND,
    MACOS_PROFILER_TOP_LEVEL_KEY,
};

#[derive(Deserialize)]
struct SystemProfilerReport {
    #[serde(rename = "SPDisplaysDataType")]
    graphics_cards: Vec<GraphicsCardEntry>,
}

#[derive(Deserialize)]
struct GraphicsCardEntry {
    #[serde(default)]
    spdisplays_ndrvs: Vec<DisplayEntry>,
}

#[derive(Deserialize)]
struct DisplayEntry {
    #[serde(rename = "_name")]
    name: Option<String>,
    #[serde(rename = "_spdisplays_pixels")]
    pixels: Option<String>,
    spdisplays_mirror: Option<String>,
}

impl DisplayEntry {
    fn is_mirrored(&self) -> bool {
        matches!(&self.spdisplays_mirror, Some(state) if state != MACOS_MIRROR_OFF)
    }

    fn normalized_resolution(&self) -> Option<String> {
        let compact: String = self
            .pixels
            .as_deref()?
            .chars()
            .filter(|character| !character.is_whitespace())
            .collect();
        (!compact.is_empty()).then_some(compact)
    }
}

/// `system_profiler` / `screencapture` / `open`.
pub struct MacProfile {
    command_runner: Arc<dyn CommandRunner>,
}

impl MacProfile {
    pub fn build(command_runner: Arc<dyn CommandRunner>) -> Self {
        Self { command_runner }
    }

    pub fn parse_system_profiler_output(stdout: &str) -> Result<Vec<Display>, EnumerationError> {
        let report: SystemProfilerReport = serde_json::from_str(stdout).map_err(|error| {
            EnumerationError::MalformedOutput(format!(
                "expected `{}` in system_profiler JSON: {}",
                MACOS_PROFILER_TOP_LEVEL_KEY, error
            ))
        })?;

        let entries = report
            .graphics_cards
            .into_iter()
            .flat_map(|card| card.spdisplays_ndrvs)
            .filter(|entry| !entry.is_mirrored())
            .map(|entry| {
                let resolution = entry.normalized_resolution();
                (entry.name, resolution)
            });

        Ok(number_displays(entries))
    }

    fn build_capture_command(request: &CaptureRequest) -> NativeCommand {
        let destination = request.destination_as_string();

        match request.mode {
            CaptureMode::FullScreen => {
                let display_index = request.display_index.unwrap_or_else(|| {
                    log::warn!(
                        "{} no display index given, using display {}",
                        LOG_TAG_CAPTURE,
                        DEFAULT_DISPLAY_INDEX
                    );
                    DEFAULT_DISPLAY_INDEX
                });
                NativeCommand::build(
                    MACOS_CAPTURE_COMMAND,
                    ["-D".to_string(), display_index.to_string(), destination],
                )
            }
            CaptureMode::Window => {
                NativeCommand::build(MACOS_CAPTURE_COMMAND, ["-w".to_string(), destination])
            }
        }
    }
}

#[async_trait]
impl DisplayEnumerator for MacProfile {
    async fn enumerate_displays(&self) -> Result<Vec<Display>, EnumerationError> {
        let command = NativeCommand::build(MACOS_PROFILER_COMMAND, MACOS_PROFILER_ARGS.iter().copied());
        let output = run_native_tool(self.command_runner.as_ref(), &command)
            .await
            .map_err(EnumerationError::NativeToolFailed)?;

        let displays = Self::parse_system_profiler_output(&output.stdout)?;
        log::debug!("{} system_profiler reported {} displays", LOG_TAG_DISPLAYS, displays.len());
        Ok(displays)
    }
}

#[async_trait]
impl CaptureExecutor for MacProfile {
    async fn capture_and_open(&self, request: &CaptureRequest) -> Result<PathBuf, CaptureError> {
        let capture_command = Self::build_capture_command(request);
        capture_then_open(
            self.command_runner.as_ref(),
            &capture_command,
            MACOS_OPEN_COMMAND,
            request,
        )
        .await
    }
}

impl PlatformProfile for MacProfile {
    fn platform_name(&self) -> &'static str {
        "macOS"
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::core::models::CommandOutput;
    use crate::test_doubles::ScriptedCommandRunner;

    const TWO_DISPLAYS_ONE_MIRRORED: &str = r#"{
        "SPDisplaysDataType": [{
            "_name": "Apple M1",
            "spdisplays_ndrvs": [
                {
                    "_name": "Color LCD",
                    "_spdisplays_pixels": "2880 x 1800",
                    "spdisplays_mirror": "spdisplays_off"
                },
                {
                    "_name": "Projector",
                    "_spdisplays_pixels": "1920 x 1080",
                    "spdisplays_mirror": "spdisplays_on"
                },
                {
                    "_name": "DELL U2720Q",
                    "spdisplays_mirror": "spdisplays_off"
                }
            ]
        }]
    }"#;

    fn profile_with(runner: &Arc<ScriptedCommandRunner>) -> MacProfile {
        MacProfile::build(runner.clone())
    }

    #[test]
    fn test_parse_excludes_mirrored_and_renumbers() {
        let displays = MacProfile::parse_system_profiler_output(TWO_DISPLAYS_ONE_MIRRORED).unwrap();

        assert_eq!(
            displays,
            vec![
                Display::build(1, Some("Color LCD"), Some("2880x1800".to_string())),
                Display::build(2, Some("DELL U2720Q"), None),
            ]
        );
    }

    #[test]
    fn test_parse_returns_empty_when_every_display_is_mirrored() {
        let json = r#"{"SPDisplaysDataType": [{"spdisplays_ndrvs": [
            {"_name": "A", "spdisplays_mirror": "spdisplays_on"},
            {"_name": "B", "spdisplays_mirror": "spdisplays_on"}
        ]}]}"#;

        let displays = MacProfile::parse_system_profiler_output(json).unwrap();

        assert!(displays.is_empty());
    }

    #[test]
    fn test_parse_keeps_entries_without_mirror_flag_and_names_unnamed_ones() {
        let json = r#"{"SPDisplaysDataType": [
            {"spdisplays_ndrvs": [{"_spdisplays_pixels": "1280 x 800"}]},
            {"_name": "no displays attached"},
            {"spdisplays_ndrvs": [{"_name": "Studio Display"}]}
        ]}"#;

        let displays = MacProfile::parse_system_profiler_output(json).unwrap();

        assert_eq!(displays.len(), 2);
        assert_eq!(displays[0].name, "Display 1");
        assert_eq!(displays[0].resolution, "1280x800");
        assert_eq!(displays[1].index, 2);
        assert_eq!(displays[1].resolution, "Unknown resolution");
    }

    #[test]
    fn test_parse_rejects_missing_top_level_key() {
        let result = MacProfile::parse_system_profiler_output(r#"{"SPOtherDataType": []}"#);

        assert!(matches!(result, Err(EnumerationError::MalformedOutput(_))));
    }

    #[test]
    fn test_parse_rejects_non_json_output() {
        let result = MacProfile::parse_system_profiler_output("system_profiler: crashed");

        assert!(matches!(result, Err(EnumerationError::MalformedOutput(_))));
    }

    #[tokio::test]
    async fn test_enumerate_runs_system_profiler_once() {
        let runner = Arc::new(ScriptedCommandRunner::with_outputs(vec![
            CommandOutput::succeeded_with(TWO_DISPLAYS_ONE_MIRRORED),
        ]));

        let displays = profile_with(&runner).enumerate_displays().await.unwrap();

        assert_eq!(displays.len(), 2);
        assert_eq!(
            runner.executed(),
            vec![NativeCommand::build("system_profiler", ["SPDisplaysDataType", "-json"])]
        );
    }

    #[tokio::test]
    async fn test_enumerate_surfaces_permission_denied() {
        let runner = Arc::new(ScriptedCommandRunner::with_outputs(vec![
            CommandOutput::failed_with(1, "permission denied"),
        ]));

        let result = profile_with(&runner).enumerate_displays().await;

        match result {
            Err(EnumerationError::NativeToolFailed(failure)) => {
                assert_eq!(failure.exit_code, Some(1));
                assert!(failure.stderr.contains("permission denied"));
            }
            other => panic!("expected NativeToolFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_full_screen_addresses_requested_display_then_opens() {
        let runner = Arc::new(ScriptedCommandRunner::default());
        let request = CaptureRequest::build("full", Some(2), Path::new("/tmp/out.png")).unwrap();

        let saved = profile_with(&runner).capture_and_open(&request).await.unwrap();

        assert_eq!(saved, PathBuf::from("/tmp/out.png"));
        assert_eq!(
            runner.executed(),
            vec![NativeCommand::build("screencapture", ["-D", "2", "/tmp/out.png"])]
        );
        assert_eq!(
            runner.launched(),
            vec![NativeCommand::build("open", ["/tmp/out.png"])]
        );
    }

    #[tokio::test]
    async fn test_window_uses_interactive_picker() {
        let runner = Arc::new(ScriptedCommandRunner::default());
        let request = CaptureRequest::build("window", None, Path::new("/tmp/w.png")).unwrap();

        profile_with(&runner).capture_and_open(&request).await.unwrap();

        assert_eq!(
            runner.executed(),
            vec![NativeCommand::build("screencapture", ["-w", "/tmp/w.png"])]
        );
    }

    #[tokio::test]
    async fn test_full_screen_without_display_uses_main_display() {
        let runner = Arc::new(ScriptedCommandRunner::default());
        let request = CaptureRequest::build("full", None, Path::new("/tmp/m.png")).unwrap();

        profile_with(&runner).capture_and_open(&request).await.unwrap();

        assert_eq!(runner.executed()[0].args, vec!["-D", "1", "/tmp/m.png"]);
    }

    #[tokio::test]
    async fn test_cancelled_window_pick_fails_without_opening() {
        let runner = Arc::new(ScriptedCommandRunner::with_outputs(vec![
            CommandOutput::failed_with(1, ""),
        ]));
        let request = CaptureRequest::build("window", None, Path::new("/tmp/w.png")).unwrap();

        let result = profile_with(&runner).capture_and_open(&request).await;

        assert!(matches!(result, Err(CaptureError::NativeToolFailed(_))));
        assert!(runner.launched().is_empty());
    }
}
