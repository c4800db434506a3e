//! Terminal abstraction layer
//!
//! Navigation and file operations never touch the terminal directly. They
//! talk to a [`Prompt`], which combines a [`UserInput`] source with an
//! [`OutputWriter`] sink and owns the "validate, then retry or press ESC"
//! loop every menu shares.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │   Session / commands / navigation       │
//! └────────────────┬────────────────────────┘
//!                  │ Uses Prompt
//!                  ▼
//! ┌─────────────────────────────────────────┐
//! │      UserInput + OutputWriter traits    │
//! └────────────────┬────────────────────────┘
//!         ┌────────┴────────┐
//!         ▼                 ▼
//! ┌───────────────┐  ┌───────────────────┐
//! │ TerminalInput │  │ ScriptedInput     │
//! │ StdoutWriter  │  │ RecordingWriter   │
//! │ (dialoguer,   │  │ (tests)           │
//! │  crossterm)   │  │                   │
//! └───────────────┘  └───────────────────┘
//! ```
//!
//! ## Output Messages
//!
//! ```no_run
//! use fmgr::ui::output::{OutputWriter, StdoutWriter};
//!
//! let output = StdoutWriter::new(false);
//! output.success("Operation completed!");
//! output.error("Something went wrong");
//! output.warning("Be careful");
//! output.info("Additional info");
//! ```

pub mod input;
pub mod output;
pub mod prompt;

#[cfg(test)]
pub mod mock;

pub use input::{InputError, Key, TerminalInput, UserInput};
pub use output::{OutputWriter, StdoutWriter};
pub use prompt::Prompt;
