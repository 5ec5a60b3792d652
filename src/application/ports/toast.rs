//! Toast notification port interface

use thiserror::Error;

use crate::domain::{TextSlot, WideText};

/// A failed call into the host notification service.
///
/// Opaque on purpose: callers only learn which operation failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{operation} failed: {detail}")]
pub struct PlatformError {
    /// Name of the platform operation that failed
    pub operation: &'static str,
    /// Platform-provided description
    pub detail: String,
}

impl PlatformError {
    pub fn new(operation: &'static str, detail: impl Into<String>) -> Self {
        Self {
            operation,
            detail: detail.into(),
        }
    }
}

/// Port for the host notification service.
///
/// Calls arrive in a fixed order: `initialize`, `register_identity`,
/// `fetch_template`, `populate_text` per slot, `submit`, and finally
/// `uninitialize` exactly once if `initialize` succeeded. Use
/// [`ToastSession`](crate::application::ToastSession) rather than calling
/// `initialize`/`uninitialize` directly.
pub trait ToastService {
    /// Toast content being built up before submission
    type Template;

    /// Connect to the notification subsystem.
    fn initialize(&mut self) -> Result<(), PlatformError>;

    /// Release the connection made by `initialize`.
    fn uninitialize(&mut self);

    /// Attribute this process's notifications to `app_id`.
    fn register_identity(&mut self, app_id: &WideText) -> Result<(), PlatformError>;

    /// Fetch the two-line text template.
    fn fetch_template(&mut self) -> Result<Self::Template, PlatformError>;

    /// Put `text` into one line of the template.
    fn populate_text(
        &mut self,
        template: &mut Self::Template,
        slot: TextSlot,
        text: &WideText,
    ) -> Result<(), PlatformError>;

    /// Create a notifier bound to `app_id` and show the populated template.
    fn submit(&mut self, app_id: &WideText, template: Self::Template)
        -> Result<(), PlatformError>;
}

/// Blanket implementation for borrowed services
impl<S: ToastService + ?Sized> ToastService for &mut S {
    type Template = S::Template;

    fn initialize(&mut self) -> Result<(), PlatformError> {
        (**self).initialize()
    }

    fn uninitialize(&mut self) {
        (**self).uninitialize()
    }

    fn register_identity(&mut self, app_id: &WideText) -> Result<(), PlatformError> {
        (**self).register_identity(app_id)
    }

    fn fetch_template(&mut self) -> Result<Self::Template, PlatformError> {
        (**self).fetch_template()
    }

    fn populate_text(
        &mut self,
        template: &mut Self::Template,
        slot: TextSlot,
        text: &WideText,
    ) -> Result<(), PlatformError> {
        (**self).populate_text(template, slot, text)
    }

    fn submit(
        &mut self,
        app_id: &WideText,
        template: Self::Template,
    ) -> Result<(), PlatformError> {
        (**self).submit(app_id, template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_error_display_names_operation() {
        let err = PlatformError::new("CoInitializeEx", "HRESULT 0x80010106");
        assert_eq!(err.to_string(), "CoInitializeEx failed: HRESULT 0x80010106");
    }
}
