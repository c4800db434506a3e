//! fmgr CLI application entry point
//!
//! An interactive, menu-driven file manager for the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Start at the welcome screen
//! fmgr
//!
//! # Open a directory straight away
//! fmgr --path ~/projects
//!
//! # Keep earlier output on screen and log more detail
//! fmgr --no-clear --log-level debug
//! ```
//!
//! # Configuration
//!
//! On first run the default configuration is written to the user's config
//! directory (`~/.config/fmgr/config.toml` on Linux).

use colored::Colorize;
use fmgr::{
    FmError,
    cli::Cli,
    commands::Context,
    config::FmConfig,
    logging,
    nav::{WorkingPath, path::normalize_typed},
    platform::{LocalFs, PlatformFs},
    session::Session,
    ui::{Prompt, StdoutWriter, TerminalInput},
};

type Result<T> = std::result::Result<T, FmError>;

/// Validate the `--path` argument
fn start_directory(fs: &dyn PlatformFs, path: Option<&str>) -> Result<Option<WorkingPath>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let typed = normalize_typed(path, fs.separator());
    if !fs.directory_exists(&typed) {
        return Err(FmError::InvalidInput(format!("'{path}' is not a directory")));
    }
    let absolute = fs.absolute(&typed)?;
    Ok(Some(WorkingPath::new(normalize_typed(&absolute, fs.separator()))))
}

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    let config = match &cli.config {
        Some(path) => FmConfig::load_from(path)?,
        None => FmConfig::load()?,
    };
    let config = cli.apply(config);

    let _log_guard = config.log_path().and_then(|log_path| {
        logging::init_logging(&log_path, &config.log_level)
            .inspect_err(|e| eprintln!("{} Logging disabled: {e}", "⚠".yellow()))
            .ok()
    });

    let fs = LocalFs::new();
    let start = start_directory(&fs, cli.path.as_deref())?;

    let input = TerminalInput::new();
    let output = StdoutWriter::new(config.clear_screen);
    let ctx = Context::new(&fs, Prompt::new(&input, &output), &config);

    let result = Session::new(ctx).run(start);
    if let Err(e) = &result {
        tracing::error!("Session aborted: {e}");
    }
    result
}
