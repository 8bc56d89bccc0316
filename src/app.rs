use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

use crate::cli::CliArguments;
use crate::core::models::{CaptureMode, Display, RecentPaths};
use crate::core::orchestrators::ScreenshotOrchestrator;
use crate::global_constants::{
    CHOICE_TITLE_APP_WINDOW, CHOICE_TITLE_CUSTOM_PATH, CHOICE_TITLE_FULL_SCREEN,
    CHOICE_TITLE_RECENT_PREFIX, DEFAULT_DISPLAY_INDEX, LOG_TAG_APP, MODE_FULL_SCREEN, MODE_WINDOW,
    PROMPT_CHOOSE_DISPLAY, PROMPT_CHOOSE_SAVE_LOCATION, PROMPT_CHOOSE_SCREENSHOT_TYPE,
    PROMPT_CUSTOM_PATH_EXAMPLE_SUBDIRECTORY, SCREENSHOT_FILE_EXTENSION, SCREENSHOT_FILE_PREFIX,
    USER_MESSAGE_TAKING_SCREENSHOT, VALIDATION_DIRECTORY_MISSING, VALIDATION_PATH_EMPTY,
    VALIDATION_PATH_NOT_ABSOLUTE,
};
use crate::presentation::{Choice, TerminalPrompt};

#[derive(Debug, Clone, PartialEq)]
enum SaveLocation {
    Directory(PathBuf),
    Custom,
}

/// The interactive flow around the core: where to save, what to capture, which display.
pub struct ScreenshotApp<R, W> {
    orchestrator: ScreenshotOrchestrator,
    prompt: TerminalPrompt<R, W>,
    recent_paths_file: PathBuf,
}

impl<R: BufRead, W: Write> ScreenshotApp<R, W> {
    pub fn build(
        orchestrator: ScreenshotOrchestrator,
        prompt: TerminalPrompt<R, W>,
        recent_paths_file: PathBuf,
    ) -> Self {
        log::info!(
            "{} Initializing for {}",
            LOG_TAG_APP,
            orchestrator.platform_name()
        );

        Self {
            orchestrator,
            prompt,
            recent_paths_file,
        }
    }

    pub async fn run(&mut self, arguments: CliArguments) -> Result<PathBuf> {
        let save_directory = match arguments.output {
            Some(directory) => directory,
            None => self.choose_save_directory()?,
        };

        let mode = match arguments.screenshot_type {
            Some(mode) => mode,
            None => self.choose_screenshot_type()?,
        };
        mode.parse::<CaptureMode>()?;

        tokio::fs::create_dir_all(&save_directory)
            .await
            .with_context(|| format!("failed to create {:?}", save_directory))?;

        let display_index = match arguments.display {
            None if mode == MODE_FULL_SCREEN => Some(self.choose_display().await?),
            display => display,
        };

        self.prompt.say(USER_MESSAGE_TAKING_SCREENSHOT)?;

        let destination = save_directory.join(build_screenshot_file_name(current_unix_millis()));
        let saved = self
            .orchestrator
            .take_screenshot_and_open(&mode, display_index, &destination)
            .await?;

        self.prompt
            .say(&format!("Screenshot saved to {} and opened", saved.display()))?;
        Ok(saved)
    }

    fn choose_save_directory(&mut self) -> Result<PathBuf> {
        let common_locations = common_save_locations();
        let mut recent_paths = RecentPaths::load_or_default(&self.recent_paths_file);

        let mut choices: Vec<Choice<SaveLocation>> = common_locations
            .iter()
            .map(|(label, path)| {
                Choice::new(
                    format!("{} ({})", label, path.display()),
                    SaveLocation::Directory(path.clone()),
                )
            })
            .collect();
        choices.extend(
            recent_paths
                .paths()
                .iter()
                .filter(|recent| !is_common_location(&common_locations, recent))
                .map(|recent| {
                    Choice::new(
                        format!("{} {}", CHOICE_TITLE_RECENT_PREFIX, recent),
                        SaveLocation::Directory(PathBuf::from(recent)),
                    )
                }),
        );
        choices.push(Choice::new(CHOICE_TITLE_CUSTOM_PATH, SaveLocation::Custom));

        match self.prompt.select(PROMPT_CHOOSE_SAVE_LOCATION, &choices)? {
            SaveLocation::Directory(directory) => Ok(directory),
            SaveLocation::Custom => {
                let example = dirs::home_dir()
                    .unwrap_or_default()
                    .join("Pictures")
                    .join(PROMPT_CUSTOM_PATH_EXAMPLE_SUBDIRECTORY);
                let custom_path = self.prompt.text(
                    &format!("Enter custom save path (e.g., {}):", example.display()),
                    validate_custom_path,
                )?;

                if !is_common_location(&common_locations, &custom_path) {
                    recent_paths.remember(&custom_path);
                    recent_paths.save_or_log(&self.recent_paths_file);
                }

                Ok(PathBuf::from(custom_path))
            }
        }
    }

    fn choose_screenshot_type(&mut self) -> Result<String> {
        let choices = vec![
            Choice::new(CHOICE_TITLE_FULL_SCREEN, MODE_FULL_SCREEN.to_string()),
            Choice::new(CHOICE_TITLE_APP_WINDOW, MODE_WINDOW.to_string()),
        ];

        self.prompt.select(PROMPT_CHOOSE_SCREENSHOT_TYPE, &choices)
    }

    async fn choose_display(&mut self) -> Result<u32> {
        let displays = self
            .orchestrator
            .list_displays()
            .await
            .context("failed to list displays")?;

        match displays.as_slice() {
            [] => {
                log::warn!(
                    "{} No displays reported, using display {}",
                    LOG_TAG_APP,
                    DEFAULT_DISPLAY_INDEX
                );
                Ok(DEFAULT_DISPLAY_INDEX)
            }
            [only] => Ok(only.index),
            many => {
                let choices: Vec<Choice<u32>> = many
                    .iter()
                    .map(|display: &Display| Choice::new(display.to_string(), display.index))
                    .collect();
                self.prompt.select(PROMPT_CHOOSE_DISPLAY, &choices)
            }
        }
    }
}

fn common_save_locations() -> Vec<(&'static str, PathBuf)> {
    let home = dirs::home_dir().unwrap_or_default();
    let locate = |known: Option<PathBuf>, fallback: &str| known.unwrap_or_else(|| home.join(fallback));

    vec![
        ("Desktop", locate(dirs::desktop_dir(), "Desktop")),
        ("Documents", locate(dirs::document_dir(), "Documents")),
        ("Downloads", locate(dirs::download_dir(), "Downloads")),
        ("Pictures", locate(dirs::picture_dir(), "Pictures")),
    ]
}

fn is_common_location(common_locations: &[(&'static str, PathBuf)], candidate: &str) -> bool {
    common_locations
        .iter()
        .any(|(_, path)| path.as_path() == Path::new(candidate))
}

fn validate_custom_path(input: &str) -> std::result::Result<(), String> {
    if input.is_empty() {
        return Err(VALIDATION_PATH_EMPTY.to_string());
    }

    let path = Path::new(input);
    if !path.is_absolute() {
        return Err(VALIDATION_PATH_NOT_ABSOLUTE.to_string());
    }

    match path.parent() {
        Some(parent) if !parent.exists() => Err(VALIDATION_DIRECTORY_MISSING.to_string()),
        _ => Ok(()),
    }
}

fn build_screenshot_file_name(unix_millis: u128) -> String {
    format!(
        "{}{}.{}",
        SCREENSHOT_FILE_PREFIX, unix_millis, SCREENSHOT_FILE_EXTENSION
    )
}

fn current_unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default()
}
