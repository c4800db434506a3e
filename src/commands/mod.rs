//! File operations offered in the directory menu
//!
//! Each command is a module with an `execute` function that takes the
//! shared [`Context`] and the current directory. Commands report
//! `Selected(result)` on success and `Cancelled` when the user backed out;
//! access failures travel up as `FmError::Fs`.

pub mod concat;
pub mod create;
pub mod delete;
pub mod list;
pub mod transfer;
pub mod view;

pub use concat::execute as concat;
pub use create::execute as create;
pub use delete::execute as delete;
pub use list::execute as list;
pub use transfer::execute as transfer;
pub use view::execute as view;

use crate::config::FmConfig;
use crate::nav::{FileSelector, PathResolver};
use crate::platform::PlatformFs;
use crate::ui::Prompt;

/// Everything a command needs to talk to the user and the filesystem
#[derive(Clone, Copy)]
pub struct Context<'a> {
    pub fs: &'a dyn PlatformFs,
    pub prompt: Prompt<'a>,
    pub config: &'a FmConfig,
}

impl<'a> Context<'a> {
    #[must_use]
    pub fn new(fs: &'a dyn PlatformFs, prompt: Prompt<'a>, config: &'a FmConfig) -> Self {
        Self { fs, prompt, config }
    }

    #[must_use]
    pub fn resolver(&self) -> PathResolver<'a> {
        PathResolver::new(self.fs, self.prompt)
    }

    #[must_use]
    pub fn selector(&self) -> FileSelector<'a> {
        FileSelector::new(self.fs, self.prompt)
    }

    #[must_use]
    pub fn separator(&self) -> char {
        self.fs.separator()
    }
}
