//! Validated prompting shared by every menu and text entry.

use super::input::{Key, Result, UserInput};
use super::output::OutputWriter;

/// Marker printed in front of every input line
pub const PROMPT_MARKER: &str = ">>>";

const RETRY_HINT: &str = "Press ESC to return to the start screen, any other key to try again.";

/// A terminal conversation: one input source and one output sink
#[derive(Clone, Copy)]
pub struct Prompt<'a> {
    input: &'a dyn UserInput,
    output: &'a dyn OutputWriter,
}

impl<'a> Prompt<'a> {
    #[must_use]
    pub fn new(input: &'a dyn UserInput, output: &'a dyn OutputWriter) -> Self {
        Self { input, output }
    }

    #[must_use]
    pub fn output(&self) -> &'a dyn OutputWriter {
        self.output
    }

    /// Read one raw line after the prompt marker.
    ///
    /// # Errors
    ///
    /// Returns error if reading from the terminal fails.
    pub fn read_line(&self) -> Result<String> {
        self.input.read_line(PROMPT_MARKER)
    }

    /// Wait for a key press.
    ///
    /// # Errors
    ///
    /// Returns error if reading from the terminal fails.
    pub fn read_key(&self) -> Result<Key> {
        self.input.read_key()
    }

    /// Show `message` and wait for any key.
    ///
    /// # Errors
    ///
    /// Returns error if reading from the terminal fails.
    pub fn pause(&self, message: &str) -> Result<()> {
        self.output.info(message);
        self.input.read_key().map(|_| ())
    }

    /// Ask whether `key` (case-insensitive) is pressed.
    ///
    /// # Errors
    ///
    /// Returns error if reading from the terminal fails.
    pub fn key_is(&self, message: &str, key: char) -> Result<bool> {
        self.output.write(message);
        Ok(match self.input.read_key()? {
            Key::Char(c) => c.eq_ignore_ascii_case(&key),
            _ => false,
        })
    }

    /// Yes/no confirmation; ESC counts as "no".
    ///
    /// # Errors
    ///
    /// Returns error if reading from the terminal fails.
    pub fn confirm(&self, message: &str, default: bool) -> Result<bool> {
        Ok(self.input.prompt_confirm(message, default)?.unwrap_or(false))
    }

    /// Report invalid input and ask whether to retry.
    ///
    /// Returns `false` when the user pressed ESC.
    ///
    /// # Errors
    ///
    /// Returns error if reading from the terminal fails.
    pub fn retry_or_cancel(&self, problem: &str) -> Result<bool> {
        self.output.error(problem);
        self.output.info(RETRY_HINT);
        Ok(self.input.read_key()? != Key::Escape)
    }

    /// Read lines until `accept` maps one to a value.
    ///
    /// `accept` returns the rejection reason on failure; the user may then
    /// retry or press ESC, which yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns error if reading from the terminal fails.
    pub fn read_validated<T>(
        &self,
        mut accept: impl FnMut(&str) -> std::result::Result<T, String>,
    ) -> Result<Option<T>> {
        loop {
            let line = self.read_line()?;
            match accept(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(problem) => {
                    if !self.retry_or_cancel(&problem)? {
                        return Ok(None);
                    }
                }
            }
        }
    }

    /// Read a 1-based number in `1..=count`.
    ///
    /// # Errors
    ///
    /// Returns error if reading from the terminal fails.
    pub fn choose_number(&self, count: usize) -> Result<Option<usize>> {
        self.read_validated(|line| parse_choice(line, count))
    }
}

/// Parse a 1-based menu number, rejecting anything outside `1..=count`
///
/// # Errors
///
/// Returns the message shown to the user when `line` is not a listed number.
pub fn parse_choice(line: &str, count: usize) -> std::result::Result<usize, String> {
    match line.trim().parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Ok(n),
        Ok(_) => Err("The selected option does not exist.".to_string()),
        Err(_) => Err("The input is not a number from the list.".to_string()),
    }
}
