//! Output abstraction layer
//!
//! All user-facing text goes through [`OutputWriter`], so tests can capture
//! what a menu rendered without a terminal attached.

use std::io::{self, Write};

use colored::Colorize;
use crossterm::{cursor, execute, terminal};

/// Trait for output operations
///
/// # Examples
///
/// ```no_run
/// use fmgr::ui::output::{OutputWriter, StdoutWriter};
///
/// let output = StdoutWriter::new(true);
/// output.write("Normal message");
/// output.success("Operation completed!");
/// output.error("Something went wrong");
/// ```
pub trait OutputWriter {
    /// Write a normal message
    fn write(&self, message: &str);

    /// Write an error message
    fn error(&self, message: &str);

    /// Write a success message
    fn success(&self, message: &str);

    /// Write a warning message
    fn warning(&self, message: &str);

    /// Write an info message (dimmed/secondary)
    fn info(&self, message: &str);

    /// Clear the screen before a new page
    fn clear(&self);
}

/// CLI implementation - writes to stdout/stderr
pub struct StdoutWriter {
    clear_screen: bool,
}

impl StdoutWriter {
    /// Create a new stdout writer; `clear_screen` controls whether
    /// [`OutputWriter::clear`] wipes the terminal
    #[must_use]
    pub const fn new(clear_screen: bool) -> Self {
        Self { clear_screen }
    }
}

impl Default for StdoutWriter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl OutputWriter for StdoutWriter {
    fn write(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "❌".red(), message);
    }

    fn success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    fn warning(&self, message: &str) {
        println!("{} {}", "⚠️".yellow(), message);
    }

    fn info(&self, message: &str) {
        println!("{}", message.dimmed());
    }

    fn clear(&self) {
        if !self.clear_screen {
            println!();
            return;
        }
        let mut stdout = io::stdout();
        let _ = execute!(
            stdout,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        );
        let _ = stdout.flush();
    }
}
