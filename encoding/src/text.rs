//! Text decoding for textual element values.
//!
//! Text in a data set is written in the repertoire named by
//! Specific Character Set (0008,0005).
//! Header decoding only needs the single-byte repertoires
//! commonly found in image files, plus UTF-8.

use encoding::all::{ISO_8859_1, ISO_8859_2, ISO_8859_5, UTF_8};
use encoding::{DecoderTrap, EncodingRef, RawDecoder, StringWriter};
use snafu::{Backtrace, Snafu};
use std::borrow::Cow;

/// Text could not be decoded in the declared repertoire.
#[derive(Debug, Snafu)]
#[snafu(display("Could not decode text as {}: {}", charset, message))]
pub struct DecodeTextError {
    charset: &'static str,
    message: Cow<'static, str>,
    backtrace: Backtrace,
}

/// The character repertoires understood by the element reader.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum SpecificCharacterSet {
    /// ISO-IR 6, the basic G0 set, assumed when nothing is declared
    #[default]
    Default,
    /// ISO-IR 100 (Latin-1)
    IsoIr100,
    /// ISO-IR 101 (Latin-2)
    IsoIr101,
    /// ISO-IR 144 (Cyrillic)
    IsoIr144,
    /// ISO-IR 192 (UTF-8)
    IsoIr192,
}

impl SpecificCharacterSet {
    /// Look up a repertoire by one of the defined terms
    /// of Specific Character Set (0008,0005).
    ///
    /// Trailing padding is ignored,
    /// and an empty term means the default repertoire.
    ///
    /// ```
    /// # use dcmhead_encoding::text::SpecificCharacterSet;
    /// assert_eq!(
    ///     SpecificCharacterSet::from_code("ISO_IR 100 "),
    ///     Some(SpecificCharacterSet::IsoIr100),
    /// );
    /// assert_eq!(SpecificCharacterSet::from_code("GB18030"), None);
    /// ```
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim_end_matches(|c: char| c == ' ' || c == '\0');
        // extension forms share the number of their base term
        let number = code
            .strip_prefix("ISO_IR ")
            .or_else(|| code.strip_prefix("ISO_IR_"))
            .or_else(|| code.strip_prefix("ISO 2022 IR "));
        match (code, number) {
            ("", _) | (_, Some("6")) => Some(SpecificCharacterSet::Default),
            (_, Some("100")) => Some(SpecificCharacterSet::IsoIr100),
            (_, Some("101")) => Some(SpecificCharacterSet::IsoIr101),
            (_, Some("144")) => Some(SpecificCharacterSet::IsoIr144),
            (c, Some("192")) if !c.starts_with("ISO 2022") => {
                Some(SpecificCharacterSet::IsoIr192)
            }
            _ => None,
        }
    }

    /// The defined term naming this repertoire.
    pub fn code(self) -> &'static str {
        match self {
            SpecificCharacterSet::Default => "ISO_IR 6",
            SpecificCharacterSet::IsoIr100 => "ISO_IR 100",
            SpecificCharacterSet::IsoIr101 => "ISO_IR 101",
            SpecificCharacterSet::IsoIr144 => "ISO_IR 144",
            SpecificCharacterSet::IsoIr192 => "ISO_IR 192",
        }
    }

    fn encoding(self) -> EncodingRef {
        match self {
            // Latin-1 covers the basic set and maps every byte
            SpecificCharacterSet::Default | SpecificCharacterSet::IsoIr100 => ISO_8859_1,
            SpecificCharacterSet::IsoIr101 => ISO_8859_2,
            SpecificCharacterSet::IsoIr144 => ISO_8859_5,
            SpecificCharacterSet::IsoIr192 => UTF_8,
        }
    }

    /// Decode a textual value.
    ///
    /// Bytes which cannot be represented are written
    /// as a backslash followed by three octal digits.
    /// The result may hold several values separated by backslashes.
    pub fn decode(self, bytes: &[u8]) -> Result<String, DecodeTextError> {
        self.encoding()
            .decode(bytes, DecoderTrap::Call(escape_octal))
            .map_err(|message| {
                DecodeTextSnafu {
                    charset: self.code(),
                    message,
                }
                .build()
            })
    }
}

fn escape_octal(_: &mut dyn RawDecoder, input: &[u8], output: &mut dyn StringWriter) -> bool {
    for byte in input {
        output.write_str(&format!("\\{:03o}", byte));
    }
    true
}

#[cfg(test)]
mod tests {
    use super::SpecificCharacterSet;

    #[test]
    fn decodes_each_repertoire() {
        let cases: [(SpecificCharacterSet, &[u8], &str); 5] = [
            (SpecificCharacterSet::Default, b"Doe^John", "Doe^John"),
            (SpecificCharacterSet::IsoIr100, b"Ren\xE9", "René"),
            (SpecificCharacterSet::IsoIr101, b"Dvo\xF8\xE1k", "Dvořák"),
            (
                SpecificCharacterSet::IsoIr144,
                b"\xb8\xd2\xd0\xdd\xda\xde\xd2",
                "Иванков",
            ),
            (SpecificCharacterSet::IsoIr192, "Simões".as_bytes(), "Simões"),
        ];
        for (charset, bytes, text) in cases.iter() {
            assert_eq!(charset.decode(bytes).unwrap(), *text, "{:?}", charset);
        }
    }

    #[test]
    fn invalid_utf8_is_escaped() {
        let text = SpecificCharacterSet::IsoIr192.decode(b"A\xFFB").unwrap();
        assert_eq!(text, "A\\377B");
    }

    #[test]
    fn defined_terms() {
        use SpecificCharacterSet::*;
        assert_eq!(SpecificCharacterSet::from_code(""), Some(Default));
        assert_eq!(SpecificCharacterSet::from_code("ISO_IR 6"), Some(Default));
        assert_eq!(SpecificCharacterSet::from_code("ISO 2022 IR 100"), Some(IsoIr100));
        assert_eq!(SpecificCharacterSet::from_code("ISO_IR_144"), Some(IsoIr144));
        assert_eq!(SpecificCharacterSet::from_code("ISO_IR 192\0"), Some(IsoIr192));
        assert_eq!(SpecificCharacterSet::from_code("ISO 2022 IR 192"), None);
        assert_eq!(SpecificCharacterSet::from_code("ISO_IR 13"), None);
        for charset in [Default, IsoIr100, IsoIr101, IsoIr144, IsoIr192].iter() {
            assert_eq!(SpecificCharacterSet::from_code(charset.code()), Some(*charset));
        }
    }
}
