//! View command - print one file in a chosen encoding

use byte_unit::{Byte, UnitType};

use super::Context;
use crate::FmError;
use crate::encoding::{TextEncoding, choose_encoding};
use crate::nav::{FilePath, SelectionOutcome, WorkingPath};

type Result<T> = std::result::Result<T, FmError>;

/// Execute the view command
///
/// Nothing is read until both the file and the encoding are chosen.
///
/// # Errors
///
/// Returns `FmError::Fs` if the file cannot be read.
pub fn execute(ctx: &Context<'_>, directory: &WorkingPath) -> Result<SelectionOutcome<FilePath>> {
    let file = crate::selected!(ctx.selector().select_file(directory));
    let encoding = crate::selected!(choose_encoding(&ctx.prompt));

    let output = ctx.prompt.output();
    output.clear();
    output.info(&header(ctx, &file, encoding)?);
    print_lines(ctx, &file, encoding)?;

    Ok(SelectionOutcome::Selected(file))
}

fn header(ctx: &Context<'_>, file: &FilePath, encoding: TextEncoding) -> Result<String> {
    let size = Byte::from_u64(ctx.fs.file_size(file.as_str())?)
        .get_appropriate_unit(UnitType::Binary)
        .to_string();
    Ok(format!(
        "File: {}  Encoding: {}  Size: {size}",
        file.file_name(ctx.separator()),
        encoding.name()
    ))
}

/// Decode `file` and print it line by line
///
/// # Errors
///
/// Returns `FmError::Fs` if the file cannot be read.
pub(super) fn print_lines(ctx: &Context<'_>, file: &FilePath, encoding: TextEncoding) -> Result<usize> {
    let output = ctx.prompt.output();
    let mut count = 0;
    for line in ctx.fs.open_text_reader(file.as_str(), encoding)? {
        output.write(&line);
        count += 1;
    }
    Ok(count)
}
