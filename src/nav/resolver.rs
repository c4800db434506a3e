//! Resolving a working directory, typed directly or walked to step by step

use super::menu::{Menu, MenuAction};
use super::outcome::SelectionOutcome;
use super::path::{WorkingPath, normalize_typed, relative_to};
use super::state::NavState;
use crate::FmError;
use crate::platform::PlatformFs;
use crate::ui::Prompt;

type Result<T> = std::result::Result<T, FmError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PathMethod {
    Typed,
    Walk,
}

/// Turns user input into a validated, existing directory
pub struct PathResolver<'a> {
    fs: &'a dyn PlatformFs,
    prompt: Prompt<'a>,
}

impl<'a> PathResolver<'a> {
    #[must_use]
    pub fn new(fs: &'a dyn PlatformFs, prompt: Prompt<'a>) -> Self {
        Self { fs, prompt }
    }

    /// Ask how to pick the directory, then pick it.
    ///
    /// Returns `Selected` with an existing directory or `Cancelled`.
    ///
    /// # Errors
    ///
    /// Returns `FmError::Fs` when a listing fails and `FmError::Input` when
    /// the terminal cannot be read.
    pub fn resolve_path(&self) -> Result<SelectionOutcome<WorkingPath>> {
        let output = self.prompt.output();
        output.clear();
        let menu = Menu::new(
            vec![
                ("Enter the path manually.".to_string(), PathMethod::Typed),
                ("Walk to the directory step by step.".to_string(), PathMethod::Walk),
            ],
            &[MenuAction::Cancel],
        );

        match menu.choose(&self.prompt, "Choose one of the options to continue:")? {
            SelectionOutcome::Selected(PathMethod::Typed) => self.enter_directly(),
            SelectionOutcome::Selected(PathMethod::Walk) => self.walk(),
            _ => Ok(SelectionOutcome::Cancelled),
        }
    }

    /// Prompt for a path until it names an existing directory.
    ///
    /// # Errors
    ///
    /// Same as [`PathResolver::resolve_path`].
    pub fn enter_directly(&self) -> Result<SelectionOutcome<WorkingPath>> {
        let output = self.prompt.output();
        output.clear();
        output.write("Enter the path of the directory to open:");

        let sep = self.fs.separator();
        let typed = self.prompt.read_validated(|line| {
            let typed = normalize_typed(line, sep);
            if !typed.is_empty() && self.fs.directory_exists(&typed) {
                Ok(typed)
            } else {
                Err("No directory exists at that path.".to_string())
            }
        })?;

        let Some(typed) = typed else {
            tracing::debug!("Typed path entry cancelled");
            return Ok(SelectionOutcome::Cancelled);
        };
        let path = WorkingPath::new(normalize_typed(&self.fs.absolute(&typed)?, sep));
        tracing::debug!(path = %path, "Directory entered directly");
        Ok(SelectionOutcome::Selected(path))
    }

    /// Walk from a drive root through subdirectories until the user stays.
    ///
    /// # Errors
    ///
    /// Same as [`PathResolver::resolve_path`].
    pub fn walk(&self) -> Result<SelectionOutcome<WorkingPath>> {
        let sep = self.fs.separator();
        let mut state = NavState::Unset;

        loop {
            state = match state {
                NavState::Committed(path) => {
                    tracing::debug!(path = %path, "Walk committed");
                    return Ok(SelectionOutcome::Selected(path));
                }
                NavState::Cancelled => {
                    tracing::debug!("Walk cancelled");
                    return Ok(SelectionOutcome::Cancelled);
                }
                NavState::Unset => match self.choose_drive()? {
                    SelectionOutcome::Selected(root) => NavState::Unset.pick_drive(root),
                    _ => NavState::Cancelled,
                },
                active => {
                    let outcome = match active.current() {
                        Some(current) => self.choose_subdirectory(current)?,
                        None => SelectionOutcome::Cancelled,
                    };
                    match outcome {
                        SelectionOutcome::Selected(child) => active.descend(child),
                        SelectionOutcome::StayOrStop => active.commit(),
                        SelectionOutcome::GoUp => active.ascend(sep),
                        SelectionOutcome::Cancelled => active.cancel(),
                    }
                }
            };
        }
    }

    /// List the drives and let the user pick one.
    ///
    /// # Errors
    ///
    /// Same as [`PathResolver::resolve_path`].
    pub fn choose_drive(&self) -> Result<SelectionOutcome<WorkingPath>> {
        let roots = self.fs.list_roots()?;
        let output = self.prompt.output();
        output.clear();
        output.write("Available drives:");

        let menu = Menu::new(
            roots.into_iter().map(|root| (root.clone(), root)).collect(),
            &[MenuAction::Cancel],
        );
        let outcome = menu.choose(&self.prompt, "Enter the number of a drive, or of the last entry to go back:")?;
        Ok(outcome.map(|root| WorkingPath::new(root.as_str())))
    }

    /// One step of the walk: list the subdirectories of `current` and
    /// report which one was picked, or stay / go up / cancel.
    fn choose_subdirectory(&self, current: &WorkingPath) -> Result<SelectionOutcome<WorkingPath>> {
        let sep = self.fs.separator();
        let folders = self.fs.list_directories(current.as_str(), "*", false)?;
        let output = self.prompt.output();
        output.clear();
        output.write(&format!("Current directory: {current}"));
        output.write("Directories here:");

        let entries = folders
            .into_iter()
            .map(|folder| (relative_to(&folder, current.as_str(), sep).to_string(), folder))
            .collect();
        let menu = Menu::new(entries, &[MenuAction::Stay, MenuAction::GoUp, MenuAction::Cancel]);
        let outcome = menu.choose(
            &self.prompt,
            "Enter the number of a directory to open it, or of one of the actions:",
        )?;
        Ok(outcome.map(|folder| WorkingPath::new(folder.as_str())))
    }
}
