//! Main app runner

use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::Parser;
use thiserror::Error;

use crate::application::ports::{ConfigStore, PlatformError, ToastService};
use crate::application::ShowToastUseCase;
use crate::domain::config::AppConfig;
use crate::domain::error::{ConfigError, RequestError};
use crate::domain::toast::{ToastRequest, USAGE};
use crate::infrastructure::{show_error_dialog, FileConfigStore};

use super::args::Cli;
use super::logging;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;

/// Caption of the usage dialog box
const DIALOG_CAPTION: &str = "notifier";

/// Any reason a run did not show its toast
#[derive(Debug, Error)]
pub enum NotifierError {
    #[error(transparent)]
    Usage(#[from] RequestError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Notification failed: {0}")]
    Platform(#[from] PlatformError),
}

/// Run the notifier over a full argument vector (program name first).
///
/// Returns [`EXIT_SUCCESS`] once the toast was handed to `service`, and
/// [`EXIT_ERROR`] for any failure. `service` is not touched unless the
/// arguments form a valid request.
pub fn run<I, T, S>(args: I, service: S) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    S: ToastService,
{
    let presenter = Presenter::new();

    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => EXIT_SUCCESS,
                _ => EXIT_ERROR,
            };
        }
    };

    let config = match load_merged_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            presenter.error(&NotifierError::from(e).to_string());
            return EXIT_ERROR;
        }
    };

    logging::init(config.log_level_or_default());

    match execute(&cli, &config, service) {
        Ok(()) => {
            if cli.verbose > 0 {
                presenter.success("Notification shown");
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            report(&e, &config, &presenter);
            EXIT_ERROR
        }
    }
}

/// Validate the arguments and drive the toast sequence
fn execute<S: ToastService>(
    cli: &Cli,
    config: &AppConfig,
    service: S,
) -> Result<(), NotifierError> {
    let request = ToastRequest::from_args(&cli.fields, config.max_text_bytes_or_default())?;
    tracing::debug!(
        app_id = %request.app_id(),
        title_units = request.title().len(),
        body_units = request.body().len(),
        "Arguments validated"
    );

    ShowToastUseCase::new(service).execute(&request)?;
    Ok(())
}

fn report(error: &NotifierError, config: &AppConfig, presenter: &Presenter) {
    match error {
        NotifierError::Usage(RequestError::WrongArgumentCount { found }) => {
            tracing::debug!(found, "Wrong argument count");
            presenter.usage(USAGE);
            if config.usage_dialog_or_default() {
                show_error_dialog(DIALOG_CAPTION, USAGE);
            }
        }
        NotifierError::Platform(e) => {
            tracing::debug!(operation = e.operation, "Platform call failed");
            presenter.error(&error.to_string());
        }
        _ => presenter.error(&error.to_string()),
    }
}

/// Load and merge configuration from file and CLI
pub fn load_merged_config(cli: &Cli) -> Result<AppConfig, ConfigError> {
    let store = match &cli.config {
        Some(path) => FileConfigStore::with_path(path),
        None => FileConfigStore::new(),
    };
    let file_config = store.load()?;

    // Merge: defaults < file < cli
    Ok(AppConfig::defaults()
        .merge(file_config)
        .merge(cli.to_config()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::toast::{RecordingToastService, ToastStep};

    fn with_config<'a>(config: &'a str, rest: &[&'a str]) -> Vec<&'a str> {
        let mut args = vec!["notifier", "--config", config];
        args.extend_from_slice(rest);
        args
    }

    #[test]
    fn shows_toast_for_three_fields() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("none.toml");
        let config = config.to_str().unwrap();
        let mut service = RecordingToastService::new();

        let code = run(with_config(config, &["MyApp", "Hello", "World"]), &mut service);

        assert_eq!(code, EXIT_SUCCESS);
        assert_eq!(service.submitted().len(), 1);
    }

    #[test]
    fn wrong_count_never_touches_service() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("none.toml");
        let config = config.to_str().unwrap();

        let cases: [&[&str]; 4] = [&[], &["one"], &["one", "two"], &["a", "b", "c", "d"]];
        for rest in cases {
            let mut service = RecordingToastService::new();
            let code = run(with_config(config, rest), &mut service);
            assert_eq!(code, EXIT_ERROR, "{:?}", rest);
            assert!(!service.was_called(), "{:?}", rest);
        }
    }

    #[test]
    fn platform_failure_exits_with_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("none.toml");
        let config = config.to_str().unwrap();
        let mut service = RecordingToastService::failing_at(ToastStep::Submit);

        let code = run(with_config(config, &["a", "b", "c"]), &mut service);

        assert_eq!(code, EXIT_ERROR);
        assert_eq!(service.released(), 1);
    }

    #[test]
    fn help_and_version_succeed_without_service() {
        for flag in ["--help", "--version"] {
            let mut service = RecordingToastService::new();
            assert_eq!(run(["notifier", flag], &mut service), EXIT_SUCCESS);
            assert!(!service.was_called());
        }
    }

    #[test]
    fn unknown_option_is_an_error() {
        let mut service = RecordingToastService::new();
        let code = run(["notifier", "--bogus", "a", "b", "c"], &mut service);
        assert_eq!(code, EXIT_ERROR);
        assert!(!service.was_called());
    }

    #[test]
    fn merged_config_prefers_cli() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "max_text_bytes = 100\nlog_level = \"info\"\n").unwrap();

        let cli = Cli::parse_from([
            "notifier",
            "--config",
            path.to_str().unwrap(),
            "--max-text-bytes",
            "7",
        ]);
        let config = load_merged_config(&cli).unwrap();

        assert_eq!(config.max_text_bytes_or_default(), 7);
        assert_eq!(config.log_level_or_default(), "info");
        assert!(!config.usage_dialog_or_default());
    }

    #[test]
    fn notifier_error_messages() {
        let err = NotifierError::from(RequestError::WrongArgumentCount { found: 1 });
        assert!(err.to_string().contains(USAGE));

        let err = NotifierError::from(PlatformError::new("Show", "denied"));
        assert_eq!(err.to_string(), "Notification failed: Show failed: denied");
    }
}
