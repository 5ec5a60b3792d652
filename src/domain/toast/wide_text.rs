//! UTF-16 text value object

use std::fmt;
use std::string::FromUtf16Error;

/// Text encoded as UTF-16 code units, the form the Windows notification
/// APIs consume.
///
/// Built from a `&str`, so the contents are always well-formed UTF-16 and
/// decode back to the exact original string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct WideText {
    units: Vec<u16>,
}

impl WideText {
    /// Encode UTF-8 text as UTF-16
    pub fn from_utf8(text: &str) -> Self {
        Self {
            units: text.encode_utf16().collect(),
        }
    }

    /// Wrap raw UTF-16 code units, rejecting unpaired surrogates
    pub fn from_units(units: Vec<u16>) -> Result<Self, FromUtf16Error> {
        String::from_utf16(&units)?;
        Ok(Self { units })
    }

    /// Borrow the UTF-16 code units (no terminator)
    pub fn as_units(&self) -> &[u16] {
        &self.units
    }

    /// Copy of the code units followed by a NUL terminator, for `PCWSTR` calls
    pub fn to_nul_terminated(&self) -> Vec<u16> {
        let mut buf = Vec::with_capacity(self.units.len() + 1);
        buf.extend_from_slice(&self.units);
        buf.push(0);
        buf
    }

    /// Number of UTF-16 code units
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the text is empty
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Decode back to a Rust string
    pub fn to_utf8(&self) -> String {
        // Contents are validated on construction.
        String::from_utf16_lossy(&self.units)
    }
}

impl From<&str> for WideText {
    fn from(text: &str) -> Self {
        Self::from_utf8(text)
    }
}

impl fmt::Display for WideText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_utf8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_round_trip() {
        let text = WideText::from_utf8("Hello");
        assert_eq!(text.as_units(), &[72, 101, 108, 108, 111]);
        assert_eq!(text.to_utf8(), "Hello");
    }

    #[test]
    fn multibyte_round_trip() {
        for input in ["café", "日本語", "naïve résumé", "🔔 ding", "Ωμέγα\u{200d}x"] {
            let text = WideText::from_utf8(input);
            assert_eq!(String::from_utf16(text.as_units()).unwrap(), input);
        }
    }

    #[test]
    fn astral_characters_use_surrogate_pairs() {
        let text = WideText::from_utf8("🔔");
        assert_eq!(text.len(), 2);
        assert_eq!(text.as_units(), &[0xD83D, 0xDD14]);
    }

    #[test]
    fn empty_text() {
        let text = WideText::from_utf8("");
        assert!(text.is_empty());
        assert_eq!(text.to_nul_terminated(), vec![0]);
        assert_eq!(text.to_utf8(), "");
    }

    #[test]
    fn nul_terminated_appends_single_zero() {
        let text = WideText::from("ab");
        assert_eq!(text.to_nul_terminated(), vec![97, 98, 0]);
        assert_eq!(text.len(), 2);
    }

    #[test]
    fn from_units_rejects_unpaired_surrogate() {
        assert!(WideText::from_units(vec![0xD800, 0x0041]).is_err());
    }

    #[test]
    fn from_units_accepts_valid_utf16() {
        let text = WideText::from_units(vec![0x65E5, 0x672C]).unwrap();
        assert_eq!(text.to_string(), "日本");
    }
}
