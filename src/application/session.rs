//! Scoped connection to the notification subsystem

use std::ops::{Deref, DerefMut};

use super::ports::{PlatformError, ToastService};

/// Live connection to the notification subsystem.
///
/// Opening the session initializes the service; dropping it uninitializes
/// it. A session that failed to open never releases anything, so every
/// successful `initialize` is paired with exactly one `uninitialize`.
pub struct ToastSession<'a, S: ToastService> {
    service: &'a mut S,
}

impl<'a, S: ToastService> ToastSession<'a, S> {
    /// Initialize the service and take ownership of the release.
    pub fn open(service: &'a mut S) -> Result<Self, PlatformError> {
        service.initialize()?;
        tracing::debug!("Notification subsystem initialized");
        Ok(Self { service })
    }
}

impl<S: ToastService> Deref for ToastSession<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.service
    }
}

impl<S: ToastService> DerefMut for ToastSession<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.service
    }
}

impl<S: ToastService> Drop for ToastSession<'_, S> {
    fn drop(&mut self) {
        self.service.uninitialize();
        tracing::debug!("Notification subsystem released");
    }
}
