//! What the header decoder needs to know about a transfer syntax:
//! how element headers are laid out, and whether the pixel data
//! is stored natively.
//!
//! The known transfer syntaxes live in the registry crate,
//! which implements [`TransferSyntaxIndex`].

use crate::decode::explicit::ExplicitVRDecoder;
use crate::decode::implicit::StandardImplicitVRDecoder;
use crate::decode::DynDecoder;
use std::io::Read;

pub use byteordered::Endianness;

/// How the data set after the file meta group is stored.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Codec {
    /// Plain elements, native pixel data.
    None,
    /// The whole data set is deflated,
    /// so no header can be read without inflating it.
    Dataset,
    /// Plain elements,
    /// but the pixel data is split in (usually compressed) fragments.
    EncapsulatedPixelData,
}

/// A transfer syntax, as seen by the header decoder.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferSyntax {
    uid: &'static str,
    name: &'static str,
    byte_order: Endianness,
    explicit_vr: bool,
    codec: Codec,
}

impl TransferSyntax {
    pub const fn new(
        uid: &'static str,
        name: &'static str,
        byte_order: Endianness,
        explicit_vr: bool,
        codec: Codec,
    ) -> Self {
        TransferSyntax {
            uid,
            name,
            byte_order,
            explicit_vr,
            codec,
        }
    }

    /// The UID, without padding.
    pub const fn uid(&self) -> &'static str {
        self.uid
    }

    /// A human readable name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The byte order of numbers in the data set.
    pub const fn endianness(&self) -> Endianness {
        self.byte_order
    }

    /// Whether element headers carry their VR.
    pub const fn explicit_vr(&self) -> bool {
        self.explicit_vr
    }

    pub fn codec(&self) -> Codec {
        self.codec
    }

    pub fn is_big_endian(&self) -> bool {
        self.byte_order == Endianness::Big
    }

    /// Whether the pixel data is encapsulated.
    pub fn is_compressed(&self) -> bool {
        self.codec == Codec::EncapsulatedPixelData
    }

    /// Whether the data set cannot be read as it is stored.
    pub fn unsupported(&self) -> bool {
        self.codec == Codec::Dataset
    }

    /// A header decoder for data sets in this transfer syntax,
    /// if they can be read at all.
    pub fn decoder_for<S>(&self) -> Option<DynDecoder<S>>
    where
        S: ?Sized + Read,
    {
        if self.unsupported() {
            return None;
        }
        match (self.byte_order, self.explicit_vr) {
            (Endianness::Little, false) => Some(Box::new(StandardImplicitVRDecoder::default())),
            // implicit VR big endian was never defined
            (Endianness::Big, false) => None,
            (endianness, true) => Some(Box::new(ExplicitVRDecoder::new(endianness))),
        }
    }
}

/// Lookup of transfer syntaxes by UID.
pub trait TransferSyntaxIndex {
    /// Find a transfer syntax by UID.
    /// Trailing spaces and NUL characters in `uid` do not matter.
    fn get(&self, uid: &str) -> Option<&TransferSyntax>;
}

impl<T: ?Sized> TransferSyntaxIndex for &T
where
    T: TransferSyntaxIndex,
{
    fn get(&self, uid: &str) -> Option<&TransferSyntax> {
        (**self).get(uid)
    }
}
