//! Show toast use case

use std::fmt;

use crate::domain::{TextSlot, ToastRequest};

use super::ports::{PlatformError, ToastService};
use super::session::ToastSession;

/// Progress through the display sequence, used for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastStage {
    SubsystemInitialized,
    IdentifierSet,
    TemplateLoaded,
    TextPopulated,
    Shown,
}

impl fmt::Display for ToastStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SubsystemInitialized => "subsystem-initialized",
            Self::IdentifierSet => "identifier-set",
            Self::TemplateLoaded => "template-loaded",
            Self::TextPopulated => "text-populated",
            Self::Shown => "shown",
        };
        f.write_str(name)
    }
}

/// One-shot toast display use case
pub struct ShowToastUseCase<S: ToastService> {
    service: S,
}

impl<S: ToastService> ShowToastUseCase<S> {
    /// Create a new use case instance
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// Give the service back, e.g. to inspect a fake after a run
    pub fn into_inner(self) -> S {
        self.service
    }

    /// Display `request` as a two-line toast.
    ///
    /// Stops at the first failing step. The subsystem connection is released
    /// before returning whenever it was acquired.
    pub fn execute(&mut self, request: &ToastRequest) -> Result<(), PlatformError> {
        let mut session = ToastSession::open(&mut self.service)?;
        trace_stage(ToastStage::SubsystemInitialized);

        session.register_identity(request.app_id())?;
        trace_stage(ToastStage::IdentifierSet);

        let mut template = session.fetch_template()?;
        trace_stage(ToastStage::TemplateLoaded);

        for slot in [TextSlot::Title, TextSlot::Body] {
            session.populate_text(&mut template, slot, request.text_for(slot))?;
        }
        trace_stage(ToastStage::TextPopulated);

        session.submit(request.app_id(), template)?;
        trace_stage(ToastStage::Shown);

        Ok(())
    }
}

fn trace_stage(stage: ToastStage) {
    tracing::debug!(%stage, "Toast stage reached");
}
