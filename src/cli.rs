//! Command-line interface definitions and parsing
//!
//! fmgr is interactive; the flags only adjust how a session starts.
//! Values given here override the configuration file.

use clap::Parser;
use std::path::PathBuf;

use crate::config::FmConfig;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "fmgr")]
#[command(about = "An interactive terminal file manager", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Use this configuration file instead of the default one
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Open this directory right away, skipping the start screen
    #[arg(short = 'p', long = "path", value_name = "DIR")]
    pub path: Option<String>,

    /// Do not clear the screen between menus (overrides config)
    #[arg(long = "no-clear")]
    pub no_clear: bool,

    /// Log filter, e.g. `debug` or `fmgr=trace` (overrides config)
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Apply the flags on top of a loaded configuration
    #[must_use]
    pub fn apply(&self, mut config: FmConfig) -> FmConfig {
        if self.no_clear {
            config.clear_screen = false;
        }
        if let Some(level) = &self.log_level {
            config.log_level.clone_from(level);
        }
        config
    }
}
