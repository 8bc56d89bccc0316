use std::fmt;

/// One external program invocation, kept as program plus argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl NativeCommand {
    pub fn build<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for NativeCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " \"{}\"", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Exit status and captured streams of a finished native command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub exit_code: Option<i32>,
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

#[cfg(test)]
impl CommandOutput {
    pub fn succeeded_with(stdout: &str) -> Self {
        Self {
            exit_code: Some(0),
            success: true,
            stdout: stdout.to_string(),
            stderr: String::new(),
        }
    }

    pub fn failed_with(exit_code: i32, stderr: &str) -> Self {
        Self {
            exit_code: Some(exit_code),
            success: false,
            stdout: String::new(),
            stderr: stderr.to_string(),
        }
    }
}
