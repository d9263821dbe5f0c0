//! Element header decoders for the native transfer syntaxes.
//!
//! A decoder reads one header and leaves the source
//! at the first byte of the value.
//! Which decoder applies is only known once the transfer syntax is,
//! so the decode loop holds one as a [`DynDecoder`].

use dcmhead_core::header::{
    DataElementHeader, Length, SequenceItemHeader, SequenceItemHeaderError,
};
use dcmhead_core::Tag;
use snafu::{Backtrace, ResultExt, Snafu};
use std::io::{self, Read};

pub mod basic;
pub mod explicit;
pub mod implicit;

use self::basic::BasicDecoder;

/// An element or item header could not be decoded.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Could not read the next tag"))]
    ReadTag {
        backtrace: Option<Backtrace>,
        source: io::Error,
    },
    #[snafu(display("Could not read the VR of {}", tag))]
    ReadVr {
        tag: Tag,
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Could not read the value length of {}", tag))]
    ReadLength {
        tag: Tag,
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Could not read an item header"))]
    ReadItem {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Unexpected header inside a sequence"))]
    BadItem { source: SequenceItemHeaderError },
}

impl Error {
    /// Whether the source ended right where the next tag should have begun.
    ///
    /// A data set without pixel data ends this way.
    pub fn is_clean_end_of_stream(&self) -> bool {
        matches!(
            self,
            Error::ReadTag { source, .. } if source.kind() == io::ErrorKind::UnexpectedEof
        )
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Decoding of element and item headers from a source of type `S`.
///
/// The trait is object safe,
/// so that a decoder can be picked at run time.
pub trait DecodeFrom<S: ?Sized + Read> {
    /// Decode the next element header.
    /// Headers in group FFFE are decoded as well, with the VR `UN`.
    ///
    /// Returns the header and the number of bytes it took.
    fn decode_header(&self, source: &mut S) -> Result<(DataElementHeader, usize)>;

    /// Decode the next item or delimiter header, which is always 8 bytes long.
    fn decode_item_header(&self, source: &mut S) -> Result<SequenceItemHeader>;
}

impl<S: ?Sized, T: ?Sized> DecodeFrom<S> for Box<T>
where
    S: Read,
    T: DecodeFrom<S>,
{
    fn decode_header(&self, source: &mut S) -> Result<(DataElementHeader, usize)> {
        (**self).decode_header(source)
    }

    fn decode_item_header(&self, source: &mut S) -> Result<SequenceItemHeader> {
        (**self).decode_item_header(source)
    }
}

/// A header decoder with its type erased.
pub type DynDecoder<S> = Box<dyn DecodeFrom<S> + Send + Sync>;

/// Item headers look the same under every transfer syntax
/// apart from byte order.
fn read_item_header<S>(basic: BasicDecoder, source: &mut S) -> Result<SequenceItemHeader>
where
    S: ?Sized + Read,
{
    let tag = basic.decode_tag(&mut *source).context(ReadItemSnafu)?;
    let len = basic.decode_ul(source).context(ReadItemSnafu)?;
    SequenceItemHeader::new(tag, Length(len)).context(BadItemSnafu)
}
