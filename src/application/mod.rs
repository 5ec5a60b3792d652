//! Application layer - Use cases and port interfaces
//!
//! Contains the toast display sequence and the trait definitions
//! for external system interactions.

pub mod ports;
pub mod session;
pub mod show_toast;

// Re-export use cases
pub use session::ToastSession;
pub use show_toast::{ShowToastUseCase, ToastStage};
