//! Desktop notification adapter using notify-rust
//!
//! Covers Linux/BSD (freedesktop D-Bus) and macOS, where there is no
//! subsystem to initialize.

use notify_rust::Notification;

use crate::application::ports::{PlatformError, ToastService};
use crate::domain::{TextSlot, WideText};

/// Toast service backed by notify-rust
#[derive(Debug, Default)]
pub struct NotifyRustToastService {
    /// Application name registered by `register_identity`
    app_name: Option<String>,
}

impl NotifyRustToastService {
    /// Create a new notify-rust toast service
    pub fn new() -> Self {
        Self::default()
    }
}

impl ToastService for NotifyRustToastService {
    type Template = Notification;

    fn initialize(&mut self) -> Result<(), PlatformError> {
        Ok(())
    }

    fn uninitialize(&mut self) {
        self.app_name = None;
    }

    fn register_identity(&mut self, app_id: &WideText) -> Result<(), PlatformError> {
        self.app_name = Some(app_id.to_utf8());
        Ok(())
    }

    fn fetch_template(&mut self) -> Result<Notification, PlatformError> {
        Ok(Notification::new())
    }

    fn populate_text(
        &mut self,
        template: &mut Notification,
        slot: TextSlot,
        text: &WideText,
    ) -> Result<(), PlatformError> {
        let text = text.to_utf8();
        match slot {
            TextSlot::Title => template.summary(&text),
            TextSlot::Body => template.body(&text),
        };
        Ok(())
    }

    fn submit(
        &mut self,
        app_id: &WideText,
        mut template: Notification,
    ) -> Result<(), PlatformError> {
        let app_name = self.app_name.clone().unwrap_or_else(|| app_id.to_utf8());
        template
            .appname(&app_name)
            .show()
            .map(drop)
            .map_err(|e| PlatformError::new("Notification::show", e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn populate_fills_summary_and_body() {
        let mut service = NotifyRustToastService::new();
        let mut template = service.fetch_template().unwrap();
        service
            .populate_text(&mut template, TextSlot::Title, &WideText::from("café"))
            .unwrap();
        service
            .populate_text(&mut template, TextSlot::Body, &WideText::from("日本語"))
            .unwrap();
        assert_eq!(template.summary, "café");
        assert_eq!(template.body, "日本語");
    }

    #[test]
    fn register_identity_sets_app_name() {
        let mut service = NotifyRustToastService::new();
        service.initialize().unwrap();
        service.register_identity(&WideText::from("MyApp")).unwrap();
        assert_eq!(service.app_name.as_deref(), Some("MyApp"));
        service.uninitialize();
        assert!(service.app_name.is_none());
    }
}
