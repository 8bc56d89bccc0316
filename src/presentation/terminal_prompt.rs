use std::io::{BufRead, StdinLock, Stdout, Write};

use anyhow::{bail, Context, Result};

use crate::global_constants::LOG_TAG_PROMPT;

#[derive(Debug, Clone, PartialEq)]
pub struct Choice<T> {
    pub title: String,
    pub value: T,
}

impl<T> Choice<T> {
    pub fn new(title: impl Into<String>, value: T) -> Self {
        Self {
            title: title.into(),
            value,
        }
    }
}

/// Numbered-menu and free-text prompts over any line reader and writer.
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompt<StdinLock<'static>, Stdout> {
    pub fn from_stdio() -> Self {
        Self::build(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn build(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    pub fn select<T: Clone>(&mut self, message: &str, choices: &[Choice<T>]) -> Result<T> {
        if choices.is_empty() {
            bail!("nothing to choose for \"{}\"", message);
        }

        writeln!(self.output, "? {}", message)?;
        for (position, choice) in choices.iter().enumerate() {
            writeln!(self.output, "  {}) {}", position + 1, choice.title)?;
        }

        loop {
            write!(self.output, "Enter a number [1-{}]: ", choices.len())?;
            self.output.flush()?;

            let answer = self.read_line()?;
            match answer.trim().parse::<usize>() {
                Ok(number) if (1..=choices.len()).contains(&number) => {
                    let chosen = &choices[number - 1];
                    log::debug!("{} {} -> {}", LOG_TAG_PROMPT, message, chosen.title);
                    return Ok(chosen.value.clone());
                }
                _ => writeln!(self.output, "Please choose a number between 1 and {}", choices.len())?,
            }
        }
    }

    pub fn text<F>(&mut self, message: &str, validate: F) -> Result<String>
    where
        F: Fn(&str) -> std::result::Result<(), String>,
    {
        loop {
            write!(self.output, "? {} ", message)?;
            self.output.flush()?;

            let answer = self.read_line()?.trim().to_string();
            match validate(&answer) {
                Ok(()) => return Ok(answer),
                Err(reason) => writeln!(self.output, "{}", reason)?,
            }
        }
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let bytes_read = self
            .input
            .read_line(&mut line)
            .context("failed to read from terminal")?;

        if bytes_read == 0 {
            bail!("input closed before an answer was given");
        }
        Ok(line)
    }
}

#[cfg(test)]
impl<R> TerminalPrompt<R, Vec<u8>> {
    pub fn written(&self) -> &[u8] {
        &self.output
    }
}
