//! Create command - write a new text file from typed lines

use super::Context;
use crate::FmError;
use crate::encoding::choose_encoding;
use crate::nav::path::strip_line_ending;
use crate::nav::{FilePath, SelectionOutcome, WorkingPath};
use crate::platform::FsError;

type Result<T> = std::result::Result<T, FmError>;

/// Characters that may not appear in a new file name
pub const FORBIDDEN_CHARS: [char; 9] = ['/', '\\', '*', ':', '?', '|', '"', '>', '<'];

/// Check a file name typed by the user
///
/// # Errors
///
/// Returns the message shown to the user when the name is empty or holds a
/// forbidden character.
pub fn validate_file_name(name: &str) -> std::result::Result<(), String> {
    if name.trim().is_empty() {
        return Err("The file name cannot be empty.".to_string());
    }
    if name.contains(FORBIDDEN_CHARS) {
        let listed: String = FORBIDDEN_CHARS.iter().collect();
        return Err(format!("The file name must not contain any of: {listed}"));
    }
    Ok(())
}

/// Execute the create command
///
/// The name is validated before anything touches the disk. Lines are
/// written as they are typed until the configured end marker.
///
/// # Errors
///
/// Returns `FmError::Fs` if the file cannot be created or written.
pub fn execute(ctx: &Context<'_>, directory: &WorkingPath) -> Result<SelectionOutcome<FilePath>> {
    let prompt = ctx.prompt;
    let output = prompt.output();
    output.clear();
    output.write("Enter the name of the new file:");

    let name = prompt.read_validated(|line| {
        let name = strip_line_ending(line);
        validate_file_name(name).map(|()| name.to_string())
    })?;
    let Some(name) = name else {
        return Ok(SelectionOutcome::Cancelled);
    };
    let target = directory.join(&name, ctx.separator());
    let encoding = crate::selected!(choose_encoding(&prompt));

    let mut writer = ctx.fs.open_text_writer(target.as_str(), encoding)?;
    output.clear();
    output.write(&format!(
        "Type the file content. Finish with a line containing only {}",
        ctx.config.end_marker
    ));
    loop {
        let line = prompt.read_line()?;
        if line == ctx.config.end_marker {
            break;
        }
        writer
            .write_line(&line)
            .map_err(|e| FsError::access(target.as_str(), e))?;
    }
    let lines = writer
        .finish()
        .map_err(|e| FsError::access(target.as_str(), e))?;

    tracing::info!("Created: {} ({} lines, {})", target, lines, encoding.name());
    output.success("File written successfully.");
    Ok(SelectionOutcome::Selected(target))
}
