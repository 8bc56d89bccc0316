use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::core::interfaces::ports::CommandRunner;
use crate::core::models::{CommandOutput, NativeCommand};
use crate::global_constants::LOG_TAG_COMMAND;

pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn initialize() -> Self {
        log::debug!("{} initializing system command runner", LOG_TAG_COMMAND);
        Self
    }

    fn prepare(command: &NativeCommand) -> Command {
        let mut process = Command::new(&command.program);
        process.args(&command.args).stdin(Stdio::null());
        process
    }
}

#[async_trait]
impl CommandRunner for SystemCommandRunner {
    async fn run(&self, command: &NativeCommand) -> std::io::Result<CommandOutput> {
        log::debug!("{} running {}", LOG_TAG_COMMAND, command);

        let output = Self::prepare(command).output().await?;
        let command_output = CommandOutput {
            exit_code: output.status.code(),
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        log::debug!(
            "{} {} finished with status {:?}",
            LOG_TAG_COMMAND,
            command.program,
            command_output.exit_code
        );

        Ok(command_output)
    }

    fn launch(&self, command: &NativeCommand) -> std::io::Result<()> {
        log::debug!("{} launching {}", LOG_TAG_COMMAND, command);

        Self::prepare(command)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_captures_stdout_and_exit_status() {
        let runner = SystemCommandRunner::initialize();
        let command = NativeCommand::build("sh", ["-c", "echo hello; echo oops >&2; exit 3"]);

        let output = runner.run(&command).await.unwrap();

        assert_eq!(output.exit_code, Some(3));
        assert!(!output.success);
        assert_eq!(output.stdout.trim(), "hello");
        assert_eq!(output.stderr.trim(), "oops");
    }

    #[tokio::test]
    async fn test_run_reports_spawn_failure_for_missing_program() {
        let runner = SystemCommandRunner::initialize();
        let command = NativeCommand::build("definitely-not-a-real-screenshot-tool", ["--x"]);

        let result = runner.run(&command).await;

        assert!(result.is_err());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_launch_returns_without_waiting() {
        let runner = SystemCommandRunner::initialize();
        let command = NativeCommand::build("sleep", ["5"]);
        let started = std::time::Instant::now();

        runner.launch(&command).unwrap();

        assert!(started.elapsed() < std::time::Duration::from_secs(2));
    }
}
