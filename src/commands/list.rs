//! List command - show directories or files of the current directory by mask

use super::Context;
use crate::FmError;
use crate::nav::{SelectionOutcome, WorkingPath};
use crate::nav::path::relative_to;
use crate::platform::compile_mask;

type Result<T> = std::result::Result<T, FmError>;

/// What to list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListVariant {
    Directories,
    Files,
}

impl ListVariant {
    const fn noun(self) -> &'static str {
        match self {
            Self::Directories => "directories",
            Self::Files => "files",
        }
    }
}

/// Mask and search depth chosen by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOptions {
    pub mask: String,
    pub recursive: bool,
}

/// Execute the list command
///
/// # Errors
///
/// Returns `FmError::Fs` if the directory cannot be listed.
pub fn execute(
    ctx: &Context<'_>,
    directory: &WorkingPath,
    variant: ListVariant,
) -> Result<SelectionOutcome<Vec<String>>> {
    let options = crate::selected!(choose_options(ctx));

    let entries = match variant {
        ListVariant::Directories => {
            ctx.fs
                .list_directories(directory.as_str(), &options.mask, options.recursive)?
        }
        ListVariant::Files => ctx
            .fs
            .list_files(directory.as_str(), &options.mask, options.recursive)?,
    };

    let output = ctx.prompt.output();
    output.clear();
    if entries.is_empty() {
        output.warning(&format!("Nothing found: no {} match '{}'.", variant.noun(), options.mask));
    } else {
        output.write(&format!("Matching {} in {directory}:", variant.noun()));
        let sep = ctx.separator();
        for (i, entry) in entries.iter().enumerate() {
            output.write(&format!("{}) {}", i + 1, relative_to(entry, directory.as_str(), sep)));
        }
    }

    Ok(SelectionOutcome::Selected(entries))
}

/// Ask for a name mask and whether to search subdirectories too
///
/// # Errors
///
/// Returns error if reading from the terminal fails.
pub fn choose_options(ctx: &Context<'_>) -> Result<SelectionOutcome<ListOptions>> {
    let prompt = ctx.prompt;
    let output = prompt.output();
    output.clear();
    output.write("Enter a name mask (\"*\" matches any name):");

    let mask = prompt.read_validated(|line| {
        compile_mask(line)
            .map(|_| line.trim().to_string())
            .map_err(|e| e.to_string())
    })?;
    let Some(mask) = mask else {
        return Ok(SelectionOutcome::Cancelled);
    };

    output.clear();
    let recursive = prompt.key_is(
        "Include subdirectories as well? Press Y for yes, any other key for no.",
        'y',
    )?;

    Ok(SelectionOutcome::Selected(ListOptions { mask, recursive }))
}
