//! In-memory toast adapter that records every call

use crate::application::ports::{PlatformError, ToastService};
use crate::domain::{TextSlot, WideText};

/// One call made against the notification service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastStep {
    Initialize,
    RegisterIdentity,
    FetchTemplate,
    PopulateTitle,
    PopulateBody,
    Submit,
    Uninitialize,
}

impl ToastStep {
    fn populate(slot: TextSlot) -> Self {
        match slot {
            TextSlot::Title => Self::PopulateTitle,
            TextSlot::Body => Self::PopulateBody,
        }
    }
}

/// Template handed out by [`RecordingToastService`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordedTemplate {
    title: Option<WideText>,
    body: Option<WideText>,
}

/// A toast that reached `submit`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedToast {
    pub app_id: WideText,
    pub title: Option<WideText>,
    pub body: Option<WideText>,
}

/// Notification service that shows nothing and remembers everything.
///
/// Can be told to fail at a given step to exercise the abort paths.
#[derive(Debug, Default)]
pub struct RecordingToastService {
    fail_at: Option<ToastStep>,
    steps: Vec<ToastStep>,
    identity: Option<WideText>,
    submitted: Vec<SubmittedToast>,
    acquired: usize,
    released: usize,
}

impl RecordingToastService {
    /// Create a service where every call succeeds
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service whose `step` call fails
    pub fn failing_at(step: ToastStep) -> Self {
        Self {
            fail_at: Some(step),
            ..Self::default()
        }
    }

    /// Calls received so far, in order
    pub fn steps(&self) -> &[ToastStep] {
        &self.steps
    }

    /// Whether any call was made at all
    pub fn was_called(&self) -> bool {
        !self.steps.is_empty()
    }

    /// Successful `initialize` calls
    pub fn acquired(&self) -> usize {
        self.acquired
    }

    /// `uninitialize` calls
    pub fn released(&self) -> usize {
        self.released
    }

    /// Last registered application identifier
    pub fn identity(&self) -> Option<&WideText> {
        self.identity.as_ref()
    }

    /// Toasts that were submitted for display
    pub fn submitted(&self) -> &[SubmittedToast] {
        &self.submitted
    }

    fn enter(&mut self, step: ToastStep) -> Result<(), PlatformError> {
        self.steps.push(step);
        if self.fail_at == Some(step) {
            return Err(PlatformError::new("recording", format!("{:?} rejected", step)));
        }
        Ok(())
    }
}

impl ToastService for RecordingToastService {
    type Template = RecordedTemplate;

    fn initialize(&mut self) -> Result<(), PlatformError> {
        self.enter(ToastStep::Initialize)?;
        self.acquired += 1;
        Ok(())
    }

    fn uninitialize(&mut self) {
        self.steps.push(ToastStep::Uninitialize);
        self.released += 1;
    }

    fn register_identity(&mut self, app_id: &WideText) -> Result<(), PlatformError> {
        self.enter(ToastStep::RegisterIdentity)?;
        self.identity = Some(app_id.clone());
        Ok(())
    }

    fn fetch_template(&mut self) -> Result<RecordedTemplate, PlatformError> {
        self.enter(ToastStep::FetchTemplate)?;
        Ok(RecordedTemplate::default())
    }

    fn populate_text(
        &mut self,
        template: &mut RecordedTemplate,
        slot: TextSlot,
        text: &WideText,
    ) -> Result<(), PlatformError> {
        self.enter(ToastStep::populate(slot))?;
        let target = match slot {
            TextSlot::Title => &mut template.title,
            TextSlot::Body => &mut template.body,
        };
        *target = Some(text.clone());
        Ok(())
    }

    fn submit(
        &mut self,
        app_id: &WideText,
        template: RecordedTemplate,
    ) -> Result<(), PlatformError> {
        self.enter(ToastStep::Submit)?;
        self.submitted.push(SubmittedToast {
            app_id: app_id.clone(),
            title: template.title,
            body: template.body,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_steps_in_order() {
        let mut service = RecordingToastService::new();
        let app_id = WideText::from("App");
        service.initialize().unwrap();
        service.register_identity(&app_id).unwrap();
        let mut template = service.fetch_template().unwrap();
        service
            .populate_text(&mut template, TextSlot::Body, &WideText::from("b"))
            .unwrap();
        service.submit(&app_id, template).unwrap();
        service.uninitialize();

        assert_eq!(
            service.steps(),
            &[
                ToastStep::Initialize,
                ToastStep::RegisterIdentity,
                ToastStep::FetchTemplate,
                ToastStep::PopulateBody,
                ToastStep::Submit,
                ToastStep::Uninitialize,
            ]
        );
        assert_eq!(service.identity(), Some(&app_id));
        assert_eq!(service.submitted()[0].title, None);
        assert_eq!(service.submitted()[0].body, Some(WideText::from("b")));
    }

    #[test]
    fn injected_failure_is_reported() {
        let mut service = RecordingToastService::failing_at(ToastStep::FetchTemplate);
        service.initialize().unwrap();
        let err = service.fetch_template().unwrap_err();
        assert_eq!(err.operation, "recording");
        assert!(err.detail.contains("FetchTemplate"));
    }

    #[test]
    fn failed_initialize_is_not_counted_as_acquired() {
        let mut service = RecordingToastService::failing_at(ToastStep::Initialize);
        assert!(service.initialize().is_err());
        assert!(service.was_called());
        assert_eq!(service.acquired(), 0);
    }
}
