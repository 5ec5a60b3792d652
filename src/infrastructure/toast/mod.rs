//! Toast infrastructure module
//!
//! Provides the Windows WinRT notifier, a notify-rust notifier for other
//! desktops, and an in-memory recorder.

#[cfg(not(windows))]
mod notify_rust;
mod recording;
#[cfg(windows)]
mod winrt;

#[cfg(not(windows))]
pub use self::notify_rust::NotifyRustToastService;
pub use recording::{RecordedTemplate, RecordingToastService, SubmittedToast, ToastStep};
#[cfg(windows)]
pub use winrt::WinRtToastService;

/// The notification service for the current platform
#[cfg(windows)]
pub type PlatformToastService = WinRtToastService;

/// The notification service for the current platform
#[cfg(not(windows))]
pub type PlatformToastService = NotifyRustToastService;

/// Create the notification service for the current platform
pub fn create_toast_service() -> PlatformToastService {
    PlatformToastService::new()
}
