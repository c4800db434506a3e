//! Copy and move commands

use super::Context;
use crate::FmError;
use crate::nav::{FilePath, SelectionOutcome, WorkingPath};

type Result<T> = std::result::Result<T, FmError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferMode {
    Copy,
    Move,
}

impl TransferMode {
    const fn past_tense(self) -> &'static str {
        match self {
            Self::Copy => "copied",
            Self::Move => "moved",
        }
    }
}

/// Execute a copy or move
///
/// The target keeps the source file name inside the chosen destination
/// directory and replaces any file already there.
///
/// # Errors
///
/// Returns `FmError::Fs` if the file cannot be copied or moved.
pub fn execute(
    ctx: &Context<'_>,
    directory: &WorkingPath,
    mode: TransferMode,
) -> Result<SelectionOutcome<FilePath>> {
    let source = crate::selected!(ctx.selector().select_file(directory));

    ctx.prompt
        .pause("Now choose the destination directory. Press any key to continue.")?;
    let destination = crate::selected!(ctx.resolver().resolve_path());

    let sep = ctx.separator();
    let target = destination.join(source.file_name(sep), sep);
    match mode {
        TransferMode::Copy => ctx.fs.copy(source.as_str(), target.as_str())?,
        TransferMode::Move => ctx.fs.move_file(source.as_str(), target.as_str())?,
    }

    ctx.prompt
        .output()
        .success(&format!("File {} to {target}.", mode.past_tense()));
    Ok(SelectionOutcome::Selected(target))
}
