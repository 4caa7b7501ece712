//! User confirmation prompts for destructive operations

use dialoguer::Confirm;
use std::io::IsTerminal;

use crate::error::{PlatError, Result};

/// Ask the user to confirm `prompt`.
///
/// `assume_yes` skips the prompt. Without a terminal on stdin there is
/// nobody to ask, so the action is declined.
pub fn confirm_action(prompt: &str, assume_yes: bool) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    if !std::io::stdin().is_terminal() {
        eprintln!("{} (use --yes to confirm non-interactively)", prompt);
        return Ok(false);
    }

    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| PlatError::Io(e.to_string()))
}
