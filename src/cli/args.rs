//! CLI argument definitions using Clap

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::domain::config::{AppConfig, WindowsConfig};

/// notifier - show a desktop toast notification
#[derive(Parser, Debug)]
#[command(name = "notifier")]
#[command(version)]
#[command(about = "Show a two-line desktop toast notification and exit")]
#[command(override_usage = "notifier [OPTIONS] <APP_ID> <TITLE> <MESSAGE>")]
#[command(long_about = None)]
pub struct Cli {
    /// Config file (default: per-user config directory)
    #[arg(short = 'c', long, value_name = "PATH", env = "TOAST_NOTIFIER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Reject any argument longer than this many UTF-8 bytes
    #[arg(long, value_name = "BYTES")]
    pub max_text_bytes: Option<usize>,

    /// Also show usage errors in a dialog box (Windows)
    #[arg(long)]
    pub usage_dialog: bool,

    /// Log more (-v debug, -vv trace)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Application identifier, title and message
    #[arg(
        value_name = "FIELD",
        num_args = 0..,
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    pub fields: Vec<OsString>,
}

impl Cli {
    /// Config layer built from command-line flags
    pub fn to_config(&self) -> AppConfig {
        let log_level = match self.verbose {
            0 => None,
            1 => Some("debug".to_string()),
            _ => Some("trace".to_string()),
        };

        AppConfig {
            max_text_bytes: self.max_text_bytes,
            log_level,
            windows: self.usage_dialog.then(|| WindowsConfig {
                usage_dialog: Some(true),
            }),
        }
    }
}
