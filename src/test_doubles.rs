use std::collections::VecDeque;
use std::io::ErrorKind;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::core::interfaces::ports::CommandRunner;
use crate::core::models::{CommandOutput, NativeCommand};

/// Command runner spy that replays canned outputs in order and records every call.
#[derive(Default)]
pub struct ScriptedCommandRunner {
    responses: Mutex<VecDeque<Result<CommandOutput, ErrorKind>>>,
    executed: Mutex<Vec<NativeCommand>>,
    launched: Mutex<Vec<NativeCommand>>,
    fail_launch: bool,
}

impl ScriptedCommandRunner {
    pub fn with_outputs(outputs: Vec<CommandOutput>) -> Self {
        Self {
            responses: Mutex::new(outputs.into_iter().map(Ok).collect()),
            ..Self::default()
        }
    }

    pub fn with_spawn_failure(kind: ErrorKind) -> Self {
        Self {
            responses: Mutex::new(VecDeque::from(vec![Err(kind)])),
            ..Self::default()
        }
    }

    pub fn failing_launch(mut self) -> Self {
        self.fail_launch = true;
        self
    }

    pub fn executed(&self) -> Vec<NativeCommand> {
        self.executed.lock().unwrap().clone()
    }

    pub fn launched(&self) -> Vec<NativeCommand> {
        self.launched.lock().unwrap().clone()
    }

    pub fn spawn_count(&self) -> usize {
        self.executed().len() + self.launched().len()
    }
}

#[async_trait]
impl CommandRunner for ScriptedCommandRunner {
    async fn run(&self, command: &NativeCommand) -> std::io::Result<CommandOutput> {
        self.executed.lock().unwrap().push(command.clone());

        match self.responses.lock().unwrap().pop_front() {
            Some(Ok(output)) => Ok(output),
            Some(Err(kind)) => Err(std::io::Error::new(kind, "scripted spawn failure")),
            None => Ok(CommandOutput::succeeded_with("")),
        }
    }

    fn launch(&self, command: &NativeCommand) -> std::io::Result<()> {
        self.launched.lock().unwrap().push(command.clone());

        if self.fail_launch {
            return Err(std::io::Error::new(ErrorKind::NotFound, "scripted launch failure"));
        }
        Ok(())
    }
}
