//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Interactive prompts and user input handling

use std::io::{self, Write};

use crate::error::Result;
use crate::version::Version;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_error, display_push_reminder, display_release_plan, display_status, display_success,
    display_usage,
};

/// Prompts user to confirm an action with a yes/no prompt.
///
/// Accepts "y" or "yes" (case-insensitive) as confirmation. Default is "no"
/// if user presses Enter. The prompt blocks until a line is read; there is
/// no timeout.
pub fn confirm_action(prompt: &str) -> Result<bool> {
    print!("\n{} (y/N): ", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let response = input.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}

/// Show the proposed version change and ask for confirmation.
///
/// This is the interactive implementation of the confirmation capability the
/// release workflow takes as a parameter.
pub fn confirm_release(current: &Version, next: &Version) -> Result<bool> {
    display_release_plan(current, next);
    confirm_action(&format!("Release version {}?", next))
}
