//! toast-notifier - show a desktop toast notification from the command line
//!
//! `notifier <APP_ID> <TITLE> <MESSAGE>` converts its arguments to UTF-16,
//! opens the platform notification subsystem, fills a two-line toast
//! template and shows it, then exits with 0 on success or 1 on any failure.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: The toast request, UTF-16 text, configuration, and errors
//! - **Application**: The toast service port, the scoped subsystem session, and the display sequence
//! - **Infrastructure**: Adapter implementations (WinRT, notify-rust, in-memory recorder, config file)
//! - **CLI**: Command-line interface, argument parsing, and logging

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
