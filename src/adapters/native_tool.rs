use std::path::PathBuf;

use crate::core::errors::{CaptureError, NativeFailure};
use crate::core::interfaces::ports::CommandRunner;
use crate::core::models::{CaptureRequest, CommandOutput, NativeCommand};
use crate::global_constants::LOG_TAG_CAPTURE;

/// Runs a native utility, treating spawn errors and non-zero exits alike.
pub async fn run_native_tool(
    runner: &dyn CommandRunner,
    command: &NativeCommand,
) -> Result<CommandOutput, NativeFailure> {
    match runner.run(command).await {
        Ok(output) if output.success => Ok(output),
        Ok(output) => Err(NativeFailure::from_output(command, &output)),
        Err(error) => Err(NativeFailure::from_spawn_error(command, &error)),
    }
}

pub fn launch_native_tool(
    runner: &dyn CommandRunner,
    command: &NativeCommand,
) -> Result<(), NativeFailure> {
    runner
        .launch(command)
        .map_err(|error| NativeFailure::from_spawn_error(command, &error))
}

/// Runs the capture command, then hands the written file to the default opener.
pub async fn capture_then_open(
    runner: &dyn CommandRunner,
    capture_command: &NativeCommand,
    open_program: &str,
    request: &CaptureRequest,
) -> Result<PathBuf, CaptureError> {
    run_native_tool(runner, capture_command)
        .await
        .map_err(CaptureError::NativeToolFailed)?;

    log::info!(
        "{} {} screenshot written to {:?}",
        LOG_TAG_CAPTURE,
        request.mode,
        request.destination_path
    );

    let open_command = NativeCommand::build(open_program, [request.destination_as_string()]);
    launch_native_tool(runner, &open_command).map_err(CaptureError::NativeToolFailed)?;

    Ok(request.destination_path.clone())
}
