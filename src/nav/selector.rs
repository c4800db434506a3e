//! Picking existing files inside a resolved directory

use super::menu::{Menu, MenuAction};
use super::outcome::SelectionOutcome;
use super::path::{FilePath, WorkingPath, relative_to, strip_line_ending};
use super::resolver::PathResolver;
use crate::FmError;
use crate::platform::PlatformFs;
use crate::ui::Prompt;

type Result<T> = std::result::Result<T, FmError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileMethod {
    FromList,
    ByName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MultiStep {
    Add,
    Finish,
}

pub struct FileSelector<'a> {
    fs: &'a dyn PlatformFs,
    prompt: Prompt<'a>,
}

impl<'a> FileSelector<'a> {
    #[must_use]
    pub fn new(fs: &'a dyn PlatformFs, prompt: Prompt<'a>) -> Self {
        Self { fs, prompt }
    }

    /// Let the user pick one existing file in `directory`, from a listing
    /// or by typing its name.
    ///
    /// # Errors
    ///
    /// Returns `FmError::Fs` when the directory cannot be listed and
    /// `FmError::Input` when the terminal cannot be read.
    pub fn select_file(&self, directory: &WorkingPath) -> Result<SelectionOutcome<FilePath>> {
        let output = self.prompt.output();
        output.clear();
        output.write(&format!("Choosing a file in {directory}"));
        let menu = Menu::new(
            vec![
                ("Pick the file from a list.".to_string(), FileMethod::FromList),
                ("Type the file name.".to_string(), FileMethod::ByName),
            ],
            &[MenuAction::Cancel],
        );

        match menu.choose(&self.prompt, "Choose one of the options to continue:")? {
            SelectionOutcome::Selected(FileMethod::FromList) => self.pick_from_list(directory),
            SelectionOutcome::Selected(FileMethod::ByName) => self.enter_name(directory),
            _ => Ok(SelectionOutcome::Cancelled),
        }
    }

    fn pick_from_list(&self, directory: &WorkingPath) -> Result<SelectionOutcome<FilePath>> {
        let sep = self.fs.separator();
        let files = self.fs.list_files(directory.as_str(), "*", false)?;
        let output = self.prompt.output();
        output.clear();
        if files.is_empty() {
            output.warning("There are no files in this directory.");
        } else {
            output.write("Files here:");
        }

        let entries = files
            .into_iter()
            .map(|file| (relative_to(&file, directory.as_str(), sep).to_string(), file))
            .collect();
        let menu = Menu::new(entries, &[MenuAction::Cancel]);
        let outcome = menu.choose(&self.prompt, "Enter the number of a file:")?;
        Ok(outcome.map(|file| FilePath::new(file.as_str())))
    }

    fn enter_name(&self, directory: &WorkingPath) -> Result<SelectionOutcome<FilePath>> {
        let sep = self.fs.separator();
        let output = self.prompt.output();
        output.clear();
        output.write(&format!("Enter the name of a file in {directory}:"));

        let picked = self.prompt.read_validated(|line| {
            let name = strip_line_ending(line);
            let candidate = directory.join(name, sep);
            if !name.is_empty() && self.fs.file_exists(candidate.as_str()) {
                Ok(candidate)
            } else {
                Err("No file with that name exists in this directory.".to_string())
            }
        })?;

        Ok(picked.map_or(SelectionOutcome::Cancelled, SelectionOutcome::Selected))
    }

    /// Collect one or more files, possibly from different directories.
    ///
    /// The first file comes from `directory`; each further file is picked
    /// after resolving a new directory. Cancelling anywhere drops the
    /// whole set.
    ///
    /// # Errors
    ///
    /// Same as [`FileSelector::select_file`].
    pub fn select_multiple_files(
        &self,
        directory: &WorkingPath,
    ) -> Result<SelectionOutcome<Vec<FilePath>>> {
        let sep = self.fs.separator();
        let resolver = PathResolver::new(self.fs, self.prompt);
        let mut files = vec![crate::selected!(self.select_file(directory))];

        loop {
            let output = self.prompt.output();
            output.clear();
            output.write("Selected files:");
            for (i, file) in files.iter().enumerate() {
                output.write(&format!("{}) {}", i + 1, file.file_name(sep)));
            }

            let menu = Menu::new(
                vec![
                    ("Add another file.".to_string(), MultiStep::Add),
                    ("Done, use the selected files.".to_string(), MultiStep::Finish),
                ],
                &[],
            );
            match menu.choose(&self.prompt, "Choose the next step:")? {
                SelectionOutcome::Selected(MultiStep::Add) => {
                    let next_dir = crate::selected!(resolver.resolve_path());
                    files.push(crate::selected!(self.select_file(&next_dir)));
                }
                SelectionOutcome::Selected(MultiStep::Finish) => break,
                _ => return Ok(SelectionOutcome::Cancelled),
            }
        }

        tracing::debug!(count = files.len(), "Files selected");
        Ok(SelectionOutcome::Selected(files))
    }
}
