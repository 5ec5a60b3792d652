//! Domain layer - Core value objects
//!
//! Contains the toast request, its UTF-16 text, configuration, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod toast;

// Re-export common types
pub use config::AppConfig;
pub use error::*;
pub use toast::{TextSlot, ToastRequest, WideText};
