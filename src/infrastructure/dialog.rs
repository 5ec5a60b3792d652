//! Modal error dialog

/// Show a blocking error dialog box.
///
/// Returns `false` where the platform has no dialog to show.
#[cfg(windows)]
pub fn show_error_dialog(caption: &str, text: &str) -> bool {
    use std::ptr;

    use windows_sys::Win32::UI::WindowsAndMessaging::{MessageBoxW, MB_ICONERROR, MB_OK};

    use crate::domain::WideText;

    let caption = WideText::from_utf8(caption).to_nul_terminated();
    let text = WideText::from_utf8(text).to_nul_terminated();
    let pressed = unsafe {
        MessageBoxW(
            ptr::null_mut(),
            text.as_ptr(),
            caption.as_ptr(),
            MB_OK | MB_ICONERROR,
        )
    };
    pressed != 0
}

/// Show a blocking error dialog box.
///
/// Returns `false` where the platform has no dialog to show.
#[cfg(not(windows))]
pub fn show_error_dialog(caption: &str, _text: &str) -> bool {
    tracing::debug!(caption, "Error dialogs are only shown on Windows");
    false
}
