/// Interactive confirmation, behind a trait so commands can be driven in tests.
use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::Confirm;

use crate::wiki::WikiError;

/// Asks the user a yes/no question.
pub trait Prompt {
    /// Ask `message`; `Ok(true)` means the user agreed.
    ///
    /// # Errors
    ///
    /// Returns `WikiError::Prompt` if the terminal or stdin cannot be read.
    fn confirm(&self, message: &str) -> Result<bool, WikiError>;
}

/// Prompt on the controlling terminal, falling back to a stdin line when piped.
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn confirm(&self, message: &str) -> Result<bool, WikiError> {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            return Ok(Confirm::new().with_prompt(message).default(false).interact()?);
        }
        read_confirmation(message, &mut stdin.lock(), &mut io::stderr())
    }
}

/// Write `message [y/N] ` to `out` and read one answer line from `input`.
///
/// Only `y` or `Y` agree. End of input or any other answer declines.
fn read_confirmation<R: BufRead, W: Write>(
    message: &str,
    input: &mut R,
    out: &mut W,
) -> Result<bool, WikiError> {
    write!(out, "{message} [y/N] ").map_err(dialoguer::Error::from)?;
    out.flush().map_err(dialoguer::Error::from)?;

    let mut answer = String::new();
    input.read_line(&mut answer).map_err(dialoguer::Error::from)?;
    Ok(matches!(answer.trim(), "y" | "Y"))
}
