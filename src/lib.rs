//! fmgr - an interactive, menu-driven terminal file manager
//!
//! The user picks a directory, by typing it or by walking down from a
//! drive root, then lists, views, concatenates, copies, moves, deletes or
//! creates files in it. Every guided choice reports a
//! [`nav::SelectionOutcome`], so backing out of any prompt returns to the
//! start screen without special control flow.

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod encoding;
pub mod logging;
pub mod nav;
pub mod platform;
pub mod session;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum FmError {
    /// A path could not be listed, read or written
    #[error("Access error: {0}")]
    Fs(#[from] platform::FsError),
    /// The terminal could not be read
    #[error("Input error: {0}")]
    Input(#[from] ui::InputError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
