/// CLI layer: argument parsing, output formatting, confirmation prompts.
pub mod args;
pub mod output;
pub mod prompt;

pub use args::Cli;
pub use output::{OutputCtx, write_error};
pub use prompt::{Prompt, TerminalPrompt};
