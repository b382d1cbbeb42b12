// Terminal interaction: the password prompt for authenticated mode and the
// spinner shown on stderr while history is being fetched. stdout is left
// alone so it carries only the generated page.

use crate::error::{Error, Result};
use dialoguer::Password;
use indicatif::{ProgressBar, ProgressFinish, ProgressStyle};
use std::time::Duration;

/// Prompt for the account password with hidden input.
///
/// An empty answer is rejected with `Error::MissingPassword`.
pub fn prompt_password() -> Result<String> {
    // Accept the empty answer here so we can report it ourselves
    // instead of dialoguer re-prompting forever.
    let password = Password::new()
        .with_prompt("Password")
        .allow_empty_password(true)
        .interact()?;
    check_password(password)
}

fn check_password(password: String) -> Result<String> {
    if password.is_empty() {
        return Err(Error::MissingPassword);
    }
    Ok(password)
}

/// Spinner for long-running fetches. indicatif draws to stderr and stays
/// silent when stderr is not a terminal.
pub fn spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner().with_finish(ProgressFinish::AndClear);
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}
