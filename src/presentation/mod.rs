mod terminal_prompt;

pub use terminal_prompt::{Choice, TerminalPrompt};
