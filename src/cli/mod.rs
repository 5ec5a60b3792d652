//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, logging setup,
//! and the main application runner.

pub mod app;
pub mod args;
pub mod logging;
pub mod presenter;

// Re-export commonly used types
pub use app::{run, NotifierError, EXIT_ERROR, EXIT_SUCCESS};
pub use args::Cli;
pub use presenter::Presenter;
