//! User input abstraction layer
//!
//! This module provides a backend-agnostic interface for reading from the
//! terminal, so navigation logic can be driven by scripted input in tests.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal;

/// A single key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// The universal "cancel / back" key
    Escape,
    Enter,
    Char(char),
    Other,
}

/// Trait for user input operations
///
/// # Examples
///
/// ```no_run
/// use fmgr::ui::input::{Key, TerminalInput, UserInput};
///
/// let input = TerminalInput::new();
///
/// let line = input.read_line(">>>").unwrap();
/// if input.read_key().unwrap() == Key::Escape {
///     println!("bye");
/// }
/// ```
pub trait UserInput {
    /// Read one line of text
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be read or input has ended.
    fn read_line(&self, prompt: &str) -> Result<String>;

    /// Wait for a single key press
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be read or input has ended.
    fn read_key(&self) -> Result<Key>;

    /// Prompt user for confirmation (yes/no)
    ///
    /// # Returns
    ///
    /// * `Ok(Some(bool))` - User confirmed (true) or denied (false)
    /// * `Ok(None)` - User cancelled (ESC)
    /// * `Err(_)` - Input operation failed
    fn prompt_confirm(&self, prompt: &str, default: bool) -> Result<Option<bool>>;
}

/// Result type for user input operations
pub type Result<T> = std::result::Result<T, InputError>;

/// Errors that can occur during user input
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// IO error during input
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No more input is available
    #[error("Input stream closed")]
    Closed,
}

/// Terminal input: dialoguer for lines and confirmations, crossterm for
/// single key presses
pub struct TerminalInput {
    theme: dialoguer::theme::ColorfulTheme,
}

impl TerminalInput {
    /// Create a new terminal input handler
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: dialoguer::theme::ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

/// Leaves raw mode when dropped
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

impl UserInput for TerminalInput {
    fn read_line(&self, prompt: &str) -> Result<String> {
        use dialoguer::Input;

        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| InputError::Io(io::Error::other(e)))
    }

    fn read_key(&self) -> Result<Key> {
        let _raw = RawModeGuard::enable()?;
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                return Ok(match key.code {
                    KeyCode::Esc => Key::Escape,
                    KeyCode::Enter => Key::Enter,
                    KeyCode::Char(c) => Key::Char(c),
                    _ => Key::Other,
                });
            }
        }
    }

    fn prompt_confirm(&self, prompt: &str, default: bool) -> Result<Option<bool>> {
        use dialoguer::Confirm;

        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact_opt()
            .map_err(|e| InputError::Io(io::Error::other(e)))
    }
}
