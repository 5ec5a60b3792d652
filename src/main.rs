//! notifier CLI entry point

use std::env;
use std::process::ExitCode;

use toast_notifier::cli::run;
use toast_notifier::infrastructure::create_toast_service;

fn main() -> ExitCode {
    let service = create_toast_service();
    ExitCode::from(run(env::args_os(), service))
}
