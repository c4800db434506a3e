//! Delete command - remove one file

use super::Context;
use crate::FmError;
use crate::nav::{FilePath, SelectionOutcome, WorkingPath};

type Result<T> = std::result::Result<T, FmError>;

/// Execute the delete command
///
/// When `confirm_delete` is set the user has to agree first; declining
/// counts as cancelling.
///
/// # Errors
///
/// Returns `FmError::Fs` if the file cannot be deleted.
pub fn execute(ctx: &Context<'_>, directory: &WorkingPath) -> Result<SelectionOutcome<FilePath>> {
    let file = crate::selected!(ctx.selector().select_file(directory));

    if ctx.config.confirm_delete {
        let question = format!("Delete {}?", file.file_name(ctx.separator()));
        if !ctx.prompt.confirm(&question, false)? {
            return Ok(SelectionOutcome::Cancelled);
        }
    }

    ctx.fs.delete(file.as_str())?;
    ctx.prompt
        .output()
        .success(&format!("File {file} deleted."));
    Ok(SelectionOutcome::Selected(file))
}
