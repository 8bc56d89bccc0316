use async_trait::async_trait;

use crate::core::models::{CommandOutput, NativeCommand};

/// Runs native OS utilities. No timeout and no cancellation.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Waits for the command to exit and returns its status and captured output.
    async fn run(&self, command: &NativeCommand) -> std::io::Result<CommandOutput>;

    /// Spawns the command and returns as soon as it has started.
    fn launch(&self, command: &NativeCommand) -> std::io::Result<()>;
}
