//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the host notification service and the config file.

pub mod config;
pub mod dialog;
pub mod toast;

// Re-export adapters
pub use config::FileConfigStore;
pub use dialog::show_error_dialog;
pub use toast::{create_toast_service, PlatformToastService, RecordingToastService};
