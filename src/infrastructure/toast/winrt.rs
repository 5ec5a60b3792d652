//! Windows toast adapter using COM and the WinRT notification classes

use std::ptr;

use windows::core::{Interface, HSTRING};
use windows::Data::Xml::Dom::{IXmlNode, XmlDocument};
use windows::UI::Notifications::{
    ToastNotification, ToastNotificationManager, ToastTemplateType,
};
use windows_sys::Win32::System::Com::{CoInitializeEx, CoUninitialize, COINIT_APARTMENTTHREADED};
use windows_sys::Win32::UI::Shell::SetCurrentProcessExplicitAppUserModelID;

use crate::application::ports::{PlatformError, ToastService};
use crate::domain::{TextSlot, WideText};

/// Tag of the text elements inside a `ToastText02` template
const TEXT_TAG: &str = "text";

/// Toast notifier backed by `Windows.UI.Notifications`
#[derive(Debug, Default)]
pub struct WinRtToastService;

impl WinRtToastService {
    /// Create a new WinRT toast service
    pub fn new() -> Self {
        Self
    }
}

impl ToastService for WinRtToastService {
    type Template = XmlDocument;

    fn initialize(&mut self) -> Result<(), PlatformError> {
        // S_FALSE (already initialized) still needs a matching CoUninitialize.
        let hr = unsafe { CoInitializeEx(ptr::null(), COINIT_APARTMENTTHREADED as _) };
        check_hresult("CoInitializeEx", hr)
    }

    fn uninitialize(&mut self) {
        unsafe { CoUninitialize() };
    }

    fn register_identity(&mut self, app_id: &WideText) -> Result<(), PlatformError> {
        let app_id = app_id.to_nul_terminated();
        let hr = unsafe { SetCurrentProcessExplicitAppUserModelID(app_id.as_ptr()) };
        check_hresult("SetCurrentProcessExplicitAppUserModelID", hr)
    }

    fn fetch_template(&mut self) -> Result<XmlDocument, PlatformError> {
        ToastNotificationManager::GetTemplateContent(ToastTemplateType::ToastText02)
            .map_err(winrt_error("GetTemplateContent"))
    }

    fn populate_text(
        &mut self,
        template: &mut XmlDocument,
        slot: TextSlot,
        text: &WideText,
    ) -> Result<(), PlatformError> {
        let nodes = template
            .GetElementsByTagName(&HSTRING::from(TEXT_TAG))
            .map_err(winrt_error("GetElementsByTagName"))?;
        let element = nodes
            .Item(slot.index())
            .map_err(winrt_error("XmlNodeList.Item"))?;
        let text_node = template
            .CreateTextNode(&to_hstring(text)?)
            .map_err(winrt_error("CreateTextNode"))?
            .cast::<IXmlNode>()
            .map_err(winrt_error("IXmlNode cast"))?;
        element
            .AppendChild(&text_node)
            .map_err(winrt_error("AppendChild"))?;
        Ok(())
    }

    fn submit(&mut self, app_id: &WideText, template: XmlDocument) -> Result<(), PlatformError> {
        let notifier = ToastNotificationManager::CreateToastNotifierWithId(&to_hstring(app_id)?)
            .map_err(winrt_error("CreateToastNotifierWithId"))?;
        let toast = ToastNotification::CreateToastNotification(&template)
            .map_err(winrt_error("CreateToastNotification"))?;
        notifier.Show(&toast).map_err(winrt_error("ToastNotifier.Show"))
    }
}

fn check_hresult(operation: &'static str, hr: i32) -> Result<(), PlatformError> {
    if hr < 0 {
        return Err(PlatformError::new(
            operation,
            format!("HRESULT {:#010x}", hr as u32),
        ));
    }
    Ok(())
}

fn winrt_error(operation: &'static str) -> impl FnOnce(windows::core::Error) -> PlatformError {
    move |e| PlatformError::new(operation, e.to_string())
}

fn to_hstring(text: &WideText) -> Result<HSTRING, PlatformError> {
    HSTRING::from_wide(text.as_units()).map_err(winrt_error("HSTRING"))
}
