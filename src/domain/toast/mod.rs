//! Toast domain module

mod request;
mod wide_text;

pub use request::{
    Field, TextSlot, ToastRequest, DEFAULT_MAX_TEXT_BYTES, REQUIRED_ARGS, USAGE,
};
pub use wide_text::WideText;
