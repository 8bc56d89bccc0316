mod adapters;
mod app;
mod cli;
mod core;
mod global_constants;
mod ports;
mod presentation;

#[cfg(test)]
mod test_doubles;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use crate::adapters::select_platform_profile;
use crate::app::ScreenshotApp;
use crate::cli::CliArguments;
use crate::core::interfaces::ports::CommandRunner;
use crate::core::models::RecentPaths;
use crate::core::orchestrators::ScreenshotOrchestrator;
use crate::global_constants::{APPLICATION_NAME, LOG_TAG_APP, USER_MESSAGE_ERROR_PREFIX};
use crate::ports::SystemCommandRunner;
use crate::presentation::TerminalPrompt;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::init();

    let arguments = CliArguments::parse();
    log::info!("{} Starting {}", LOG_TAG_APP, APPLICATION_NAME);

    match run(arguments).await {
        Ok(saved) => {
            log::info!("{} Finished, screenshot at {:?}", LOG_TAG_APP, saved);
            ExitCode::SUCCESS
        }
        Err(error) => {
            log::error!("{} {:#}", LOG_TAG_APP, error);
            eprintln!("{} {:#}", USER_MESSAGE_ERROR_PREFIX, error);
            ExitCode::FAILURE
        }
    }
}

async fn run(arguments: CliArguments) -> anyhow::Result<PathBuf> {
    let command_runner: Arc<dyn CommandRunner> = Arc::new(SystemCommandRunner::initialize());
    let platform_profile = select_platform_profile(command_runner)?;
    let orchestrator = ScreenshotOrchestrator::build(platform_profile);

    let mut app = ScreenshotApp::build(
        orchestrator,
        TerminalPrompt::from_stdio(),
        RecentPaths::get_cache_file_path(),
    );
    app.run(arguments).await
}
