//! Toast request value object

use std::ffi::OsString;
use std::fmt;

use super::WideText;
use crate::domain::error::RequestError;

/// Default per-field length limit, in UTF-8 bytes
pub const DEFAULT_MAX_TEXT_BYTES: usize = 1024;

/// Number of positional arguments: app id, title, message
pub const REQUIRED_ARGS: usize = 3;

/// Usage line printed on a wrong argument count
pub const USAGE: &str = "Usage: notifier <appId> <title> <message>";

/// The three command-line fields of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    AppId,
    Title,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AppId => "appId",
            Self::Title => "title",
            Self::Message => "message",
        };
        f.write_str(name)
    }
}

/// Addressable text line of the two-line toast template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextSlot {
    /// First line
    Title,
    /// Second line
    Body,
}

impl TextSlot {
    /// Zero-based position of the `<text>` element in the template
    pub const fn index(&self) -> u32 {
        match self {
            Self::Title => 0,
            Self::Body => 1,
        }
    }
}

/// A validated notification request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastRequest {
    app_id: WideText,
    title: WideText,
    body: WideText,
}

impl ToastRequest {
    /// Build a request from already-decoded text
    pub fn new(app_id: &str, title: &str, body: &str) -> Self {
        Self {
            app_id: WideText::from_utf8(app_id),
            title: WideText::from_utf8(title),
            body: WideText::from_utf8(body),
        }
    }

    /// Build a request from positional arguments (program name excluded).
    ///
    /// Exactly three arguments are accepted. Each must be valid Unicode and
    /// at most `max_text_bytes` long once encoded as UTF-8. Empty strings
    /// are allowed.
    pub fn from_args(args: &[OsString], max_text_bytes: usize) -> Result<Self, RequestError> {
        if args.len() != REQUIRED_ARGS {
            return Err(RequestError::WrongArgumentCount { found: args.len() });
        }

        Ok(Self {
            app_id: decode_field(Field::AppId, &args[0], max_text_bytes)?,
            title: decode_field(Field::Title, &args[1], max_text_bytes)?,
            body: decode_field(Field::Message, &args[2], max_text_bytes)?,
        })
    }

    /// Application identifier the toast is attributed to
    pub fn app_id(&self) -> &WideText {
        &self.app_id
    }

    /// First line
    pub fn title(&self) -> &WideText {
        &self.title
    }

    /// Second line
    pub fn body(&self) -> &WideText {
        &self.body
    }

    /// Text for a template slot
    pub fn text_for(&self, slot: TextSlot) -> &WideText {
        match slot {
            TextSlot::Title => &self.title,
            TextSlot::Body => &self.body,
        }
    }
}

fn decode_field(
    field: Field,
    arg: &OsString,
    max_text_bytes: usize,
) -> Result<WideText, RequestError> {
    let text = arg.to_str().ok_or(RequestError::InvalidUnicode { field })?;
    if text.len() > max_text_bytes {
        return Err(RequestError::TooLong {
            field,
            len: text.len(),
            max: max_text_bytes,
        });
    }
    Ok(WideText::from_utf8(text))
}
