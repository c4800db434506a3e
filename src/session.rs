//! The interactive session: start screen, drive menu and directory menu
//!
//! Access failures raised anywhere below the start screen are caught in
//! [`Session::run`], reported, and the user starts over. Nothing picked
//! before the failure survives it.

use crate::FmError;
use crate::commands::{self, Context};
use crate::commands::list::ListVariant;
use crate::commands::transfer::TransferMode;
use crate::nav::{Menu, MenuAction, SelectionOutcome, WorkingPath};

type Result<T> = std::result::Result<T, FmError>;

const WELCOME: &str = "Welcome to fmgr.

1) Look at the available drives or choose a directory.
2) Once a directory is chosen, work with the files inside it.

Press ESC to quit, any other key to start.";

const CONTINUE: &str = "Press any key to continue.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DriveAction {
    ShowDrives,
    ChooseDirectory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DirectoryAction {
    ChangeDirectory,
    ListDirectories,
    ListFiles,
    View,
    Concat,
    Copy,
    Move,
    Delete,
    Create,
}

impl DirectoryAction {
    const ALL: [Self; 9] = [
        Self::ChangeDirectory,
        Self::ListDirectories,
        Self::ListFiles,
        Self::View,
        Self::Concat,
        Self::Copy,
        Self::Move,
        Self::Delete,
        Self::Create,
    ];

    const fn label(self) -> &'static str {
        match self {
            Self::ChangeDirectory => "Go to another directory.",
            Self::ListDirectories => "List directories here (by mask).",
            Self::ListFiles => "List files here (by mask).",
            Self::View => "Print a file (in a chosen encoding).",
            Self::Concat => "Print several files one after another (in a chosen encoding).",
            Self::Copy => "Copy a file.",
            Self::Move => "Move a file.",
            Self::Delete => "Delete a file.",
            Self::Create => "Type text and save it as a file (in a chosen encoding).",
        }
    }
}

/// What the directory menu does next after one action
enum Step {
    Again,
    ChangeTo(WorkingPath),
    Leave,
}

pub struct Session<'a> {
    ctx: Context<'a>,
}

impl<'a> Session<'a> {
    #[must_use]
    pub fn new(ctx: Context<'a>) -> Self {
        Self { ctx }
    }

    /// Run until the user quits from the start screen.
    ///
    /// With `start`, the first round skips the start screen and opens the
    /// directory menu right away.
    ///
    /// # Errors
    ///
    /// Returns error if the terminal cannot be read. Access failures are
    /// handled here and never returned.
    pub fn run(&self, start: Option<WorkingPath>) -> Result<()> {
        let mut start = start;
        loop {
            let round = match start.take() {
                Some(directory) => self.directory_loop(directory),
                None => {
                    if !self.welcome()? {
                        tracing::debug!("Session finished");
                        return Ok(());
                    }
                    self.drive_menu()
                }
            };

            match round {
                Ok(()) => {}
                Err(FmError::Fs(err)) => self.report_access_failure(&err)?,
                Err(other) => return Err(other),
            }
        }
    }

    fn report_access_failure(&self, err: &crate::platform::FsError) -> Result<()> {
        tracing::warn!("{err}");
        let output = self.ctx.prompt.output();
        output.clear();
        output.error(&format!("Access error! {err}"));
        self.ctx
            .prompt
            .pause("Press any key to return to the start screen.")?;
        Ok(())
    }

    /// Returns `false` when the user wants to quit
    fn welcome(&self) -> Result<bool> {
        let output = self.ctx.prompt.output();
        output.clear();
        output.write(WELCOME);
        Ok(self.ctx.prompt.read_key()? != crate::ui::Key::Escape)
    }

    fn drive_menu(&self) -> Result<()> {
        let output = self.ctx.prompt.output();
        output.clear();
        output.write("Available actions:");
        let menu = Menu::new(
            vec![
                ("Show the available drives.".to_string(), DriveAction::ShowDrives),
                ("Choose a drive or directory.".to_string(), DriveAction::ChooseDirectory),
            ],
            &[MenuAction::Cancel],
        );

        match menu.choose(&self.ctx.prompt, "Enter the number of an action:")? {
            SelectionOutcome::Selected(DriveAction::ShowDrives) => {
                self.show_drives()?;
                self.ctx.prompt.pause(CONTINUE)?;
                Ok(())
            }
            SelectionOutcome::Selected(DriveAction::ChooseDirectory) => {
                match self.ctx.resolver().resolve_path()? {
                    SelectionOutcome::Selected(directory) => self.directory_loop(directory),
                    _ => Ok(()),
                }
            }
            _ => Ok(()),
        }
    }

    fn show_drives(&self) -> Result<()> {
        let roots = self.ctx.fs.list_roots()?;
        let output = self.ctx.prompt.output();
        output.clear();
        output.write("Available drives:");
        for (i, root) in roots.iter().enumerate() {
            output.write(&format!("{}) {root}", i + 1));
        }
        Ok(())
    }

    fn directory_loop(&self, mut directory: WorkingPath) -> Result<()> {
        tracing::debug!(path = %directory, "Directory opened");
        loop {
            match self.directory_step(&directory)? {
                Step::Again => {}
                Step::ChangeTo(next) => {
                    tracing::debug!(path = %next, "Directory changed");
                    directory = next;
                }
                Step::Leave => return Ok(()),
            }
        }
    }

    fn directory_step(&self, directory: &WorkingPath) -> Result<Step> {
        let output = self.ctx.prompt.output();
        output.clear();
        output.write(&format!("Current directory: {directory}"));
        output.write("Available actions:");
        let menu = Menu::new(
            DirectoryAction::ALL
                .iter()
                .map(|action| (action.label().to_string(), *action))
                .collect(),
            &[MenuAction::Cancel],
        );

        let action = match menu.choose(&self.ctx.prompt, "Enter the number of an action:")? {
            SelectionOutcome::Selected(action) => *action,
            _ => return Ok(Step::Leave),
        };

        let completed = self.dispatch(action, directory)?;
        if let SelectionOutcome::Selected(next) = completed {
            if let Some(next) = next {
                return Ok(Step::ChangeTo(next));
            }
            self.ctx.prompt.pause(CONTINUE)?;
            return Ok(Step::Again);
        }
        Ok(Step::Leave)
    }

    /// Run one action; `Selected(Some(dir))` means "continue in `dir`"
    fn dispatch(
        &self,
        action: DirectoryAction,
        directory: &WorkingPath,
    ) -> Result<SelectionOutcome<Option<WorkingPath>>> {
        let ctx = &self.ctx;
        let done = |outcome: SelectionOutcome<()>| -> SelectionOutcome<Option<WorkingPath>> {
            outcome.map(|()| None)
        };
        Ok(match action {
            DirectoryAction::ChangeDirectory => ctx.resolver().resolve_path()?.map(Some),
            DirectoryAction::ListDirectories => {
                done(commands::list(ctx, directory, ListVariant::Directories)?.map(drop))
            }
            DirectoryAction::ListFiles => {
                done(commands::list(ctx, directory, ListVariant::Files)?.map(drop))
            }
            DirectoryAction::View => done(commands::view(ctx, directory)?.map(drop)),
            DirectoryAction::Concat => done(commands::concat(ctx, directory)?.map(drop)),
            DirectoryAction::Copy => {
                done(commands::transfer(ctx, directory, TransferMode::Copy)?.map(drop))
            }
            DirectoryAction::Move => {
                done(commands::transfer(ctx, directory, TransferMode::Move)?.map(drop))
            }
            DirectoryAction::Delete => done(commands::delete(ctx, directory)?.map(drop)),
            DirectoryAction::Create => done(commands::create(ctx, directory)?.map(drop)),
        })
    }
}
