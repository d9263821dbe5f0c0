//! Element header types:
//! the attribute tag, the value representation and the value length,
//! plus the headers of sequence items and their delimiters.

use snafu::{Backtrace, Snafu};
use std::fmt;

/// An attribute tag, as a `(group, element)` pair.
///
/// Tags order by group first, which is also the order
/// in which elements appear in a well-formed data set.
///
/// ```
/// # use dcmhead_core::Tag;
/// let rows = Tag(0x0028, 0x0010);
/// assert_eq!(rows.to_string(), "(0028,0010)");
/// assert!(rows < Tag(0x7FE0, 0x0010));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(pub u16, pub u16);

impl Tag {
    /// (FFFE,E000) starts a sequence item
    pub const ITEM: Tag = Tag(0xFFFE, 0xE000);
    /// (FFFE,E00D) ends an item of undefined length
    pub const ITEM_DELIMITER: Tag = Tag(0xFFFE, 0xE00D);
    /// (FFFE,E0DD) ends a sequence of undefined length
    pub const SEQUENCE_DELIMITER: Tag = Tag(0xFFFE, 0xE0DD);

    /// The group number.
    #[inline]
    pub fn group(self) -> u16 {
        self.0
    }

    /// The element number within the group.
    #[inline]
    pub fn element(self) -> u16 {
        self.1
    }

    /// Whether the tag lies in group FFFE,
    /// where items and delimiters live.
    /// Such headers never carry a VR.
    #[inline]
    pub fn is_item_related(self) -> bool {
        self.0 == 0xFFFE
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:04X},{:04X})", self.0, self.1)
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Tag(0x{:04X}, 0x{:04X})", self.0, self.1)
    }
}

impl From<(u16, u16)> for Tag {
    #[inline]
    fn from((group, element): (u16, u16)) -> Tag {
        Tag(group, element)
    }
}

macro_rules! value_representations {
    (@short short) => { true };
    (@short long) => { false };
    ($($vr:ident $form:ident $name:literal,)+) => {
        /// A value representation: the data type of an element value.
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum VR {
            $(
                #[doc = $name]
                $vr,
            )+
        }

        impl VR {
            /// Every value representation, in alphabetical order.
            pub const ALL: &'static [VR] = &[$(VR::$vr),+];

            /// The two letter code of this VR.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(VR::$vr => stringify!($vr),)+
                }
            }

            /// Whether an explicit VR header for this VR uses
            /// a 16-bit length right after the VR (PS3.5 section 7.1.2).
            /// The other VRs are followed by two reserved bytes
            /// and a 32-bit length.
            pub fn has_short_length(self) -> bool {
                match self {
                    $(VR::$vr => value_representations!(@short $form),)+
                }
            }
        }
    };
}

value_representations! {
    AE short "Application Entity",
    AS short "Age String",
    AT short "Attribute Tag",
    CS short "Code String",
    DA short "Date",
    DS short "Decimal String",
    DT short "Date Time",
    FD short "Floating Point Double",
    FL short "Floating Point Single",
    IS short "Integer String",
    LO short "Long String",
    LT short "Long Text",
    OB long "Other Byte",
    OD long "Other Double",
    OF long "Other Float",
    OL long "Other Long",
    OV long "Other 64-bit Very Long",
    OW long "Other Word",
    PN short "Person Name",
    SH short "Short String",
    SL short "Signed Long",
    SQ long "Sequence of Items",
    SS short "Signed Short",
    ST short "Short Text",
    SV long "Signed 64-bit Very Long",
    TM short "Time",
    UC long "Unlimited Characters",
    UI short "Unique Identifier",
    UL short "Unsigned Long",
    UN long "Unknown",
    UR long "Universal Resource Identifier",
    US short "Unsigned Short",
    UT long "Unlimited Text",
    UV long "Unsigned 64-bit Very Long",
}

impl VR {
    /// Recognize the two bytes of an explicit VR.
    /// Only upper case letters naming a known VR are accepted.
    pub fn from_binary(chars: [u8; 2]) -> Option<Self> {
        VR::ALL.iter().copied().find(|vr| vr.to_bytes() == chars)
    }

    /// The two bytes written for this VR in an explicit VR header.
    pub fn to_bytes(self) -> [u8; 2] {
        let code = self.as_str().as_bytes();
        [code[0], code[1]]
    }
}

impl fmt::Display for VR {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const UNDEFINED: u32 = 0xFFFF_FFFF;

/// The length of an element or item value, in bytes.
///
/// The reserved value `0xFFFF_FFFF` stands for an undefined length:
/// the value then ends with a delimiter instead.
/// An undefined length never compares equal to anything,
/// not even another undefined length.
///
/// ```
/// # use dcmhead_core::Length;
/// assert_eq!(Length(16).get(), Some(16));
/// assert_eq!(Length::UNDEFINED.get(), None);
/// assert_ne!(Length::UNDEFINED, Length::UNDEFINED);
/// ```
#[derive(Clone, Copy)]
pub struct Length(pub u32);

impl Length {
    /// The undefined length.
    pub const UNDEFINED: Length = Length(UNDEFINED);

    /// Whether the length is undefined.
    #[inline]
    pub fn is_undefined(self) -> bool {
        self.0 == UNDEFINED
    }

    /// The number of bytes, unless undefined.
    #[inline]
    pub fn get(self) -> Option<u32> {
        if self.is_undefined() {
            None
        } else {
            Some(self.0)
        }
    }
}

impl PartialEq for Length {
    fn eq(&self, other: &Length) -> bool {
        match (self.get(), other.get()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.get() {
            Some(len) => write!(f, "Length({})", len),
            None => f.write_str("Length(undefined)"),
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.get() {
            Some(len) => write!(f, "{}", len),
            None => f.write_str("undefined"),
        }
    }
}

/// The header of a data element, as handed to tag handlers
/// alongside the reader positioned at the start of the value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataElementHeader {
    /// attribute tag
    pub tag: Tag,
    /// value representation, `UN` when not known
    pub vr: VR,
    /// value length
    pub len: Length,
}

impl DataElementHeader {
    /// Create an element header.
    #[inline]
    pub fn new(tag: Tag, vr: VR, len: Length) -> Self {
        DataElementHeader { tag, vr, len }
    }
}

/// A header in group FFFE which does not fit where it was read.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum SequenceItemHeaderError {
    /// Only items and delimiters may appear between the items of a sequence.
    #[snafu(display("Expected an item or delimiter, found {}", tag))]
    NotAnItem {
        /// the tag found instead
        tag: Tag,
        /// where it was found
        backtrace: Backtrace,
    },
    /// Item delimiters carry no value.
    #[snafu(display("Item delimiter with length {}", len))]
    DelimiterLength {
        /// the declared length
        len: Length,
        /// where it was found
        backtrace: Backtrace,
    },
}

/// What can be found between the items of a sequence,
/// or at the end of an item of undefined length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SequenceItemHeader {
    /// the start of an item, with its length
    Item {
        /// item length, possibly undefined
        len: Length,
    },
    /// the end of an item of undefined length
    ItemDelimiter,
    /// the end of a sequence of undefined length
    SequenceDelimiter,
}

impl SequenceItemHeader {
    /// Interpret a tag and length read in place of an item header.
    ///
    /// The length of a sequence delimiter is not checked.
    pub fn new(tag: Tag, len: Length) -> Result<Self, SequenceItemHeaderError> {
        match tag {
            Tag::ITEM => Ok(SequenceItemHeader::Item { len }),
            Tag::ITEM_DELIMITER if len.get() == Some(0) => Ok(SequenceItemHeader::ItemDelimiter),
            Tag::ITEM_DELIMITER => DelimiterLengthSnafu { len }.fail(),
            Tag::SEQUENCE_DELIMITER => Ok(SequenceItemHeader::SequenceDelimiter),
            tag => NotAnItemSnafu { tag }.fail(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Length, SequenceItemHeader, SequenceItemHeaderError, Tag, VR};

    #[test]
    fn tags_print_in_hex() {
        assert_eq!(Tag(0x0028, 0x1050).to_string(), "(0028,1050)");
        assert_eq!(format!("{:?}", Tag(0x7FE0, 0x0010)), "Tag(0x7FE0, 0x0010)");
        assert_eq!(Tag::from((0x0008, 0x0060)), Tag(0x0008, 0x0060));
        assert!(Tag::SEQUENCE_DELIMITER.is_item_related());
        assert!(!Tag(0x0028, 0x0010).is_item_related());
    }

    #[test]
    fn vr_codes() {
        assert_eq!(VR::ALL.len(), 34);
        for vr in VR::ALL {
            assert_eq!(VR::from_binary(vr.to_bytes()), Some(*vr));
        }
        assert_eq!(VR::from_binary(*b"DS"), Some(VR::DS));
        assert_eq!(VR::from_binary(*b"ds"), None);
        assert_eq!(VR::from_binary([0x10, 0x00]), None);
        assert_eq!(VR::OW.to_string(), "OW");
    }

    #[test]
    fn vr_length_forms() {
        for vr in [VR::US, VR::DS, VR::UI, VR::FD].iter() {
            assert!(vr.has_short_length(), "{}", vr);
        }
        for vr in [VR::OB, VR::OW, VR::SQ, VR::UN, VR::UT, VR::UC].iter() {
            assert!(!vr.has_short_length(), "{}", vr);
        }
    }

    #[test]
    fn undefined_length_is_never_equal() {
        assert_eq!(Length(4), Length(4));
        assert_ne!(Length(4), Length::UNDEFINED);
        assert!(Length::UNDEFINED.is_undefined());
        assert_eq!(format!("{:?}", Length::UNDEFINED), "Length(undefined)");
    }

    #[test]
    fn item_headers() {
        assert_eq!(
            SequenceItemHeader::new(Tag::ITEM, Length(12)).unwrap(),
            SequenceItemHeader::Item { len: Length(12) }
        );
        assert_eq!(
            SequenceItemHeader::new(Tag::ITEM_DELIMITER, Length(0)).unwrap(),
            SequenceItemHeader::ItemDelimiter
        );
        assert!(matches!(
            SequenceItemHeader::new(Tag::ITEM_DELIMITER, Length(4)),
            Err(SequenceItemHeaderError::DelimiterLength { .. })
        ));
        assert!(matches!(
            SequenceItemHeader::new(Tag(0x0028, 0x0010), Length(2)),
            Err(SequenceItemHeaderError::NotAnItem { .. })
        ));
    }
}
