//! Concat command - print several files one after another

use super::Context;
use super::view::print_lines;
use crate::FmError;
use crate::encoding::choose_encoding;
use crate::nav::{FilePath, SelectionOutcome, WorkingPath};

type Result<T> = std::result::Result<T, FmError>;

/// Execute the concat command
///
/// All files are decoded with the same encoding, in the order they were
/// picked.
///
/// # Errors
///
/// Returns `FmError::Fs` if a file cannot be read.
pub fn execute(ctx: &Context<'_>, directory: &WorkingPath) -> Result<SelectionOutcome<Vec<FilePath>>> {
    let files = crate::selected!(ctx.selector().select_multiple_files(directory));
    let encoding = crate::selected!(choose_encoding(&ctx.prompt));

    let output = ctx.prompt.output();
    output.clear();
    output.info(&format!("Contents of {} files ({}):", files.len(), encoding.name()));
    for file in &files {
        print_lines(ctx, file, encoding)?;
    }

    Ok(SelectionOutcome::Selected(files))
}
