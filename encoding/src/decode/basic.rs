//! Reading of the fixed-size numbers found in headers and LUT data,
//! in a byte order chosen at run time.

use byteordered::{ByteOrdered, Endianness};
use dcmhead_core::Tag;
use std::io::{Read, Result};

/// Reads unsigned numbers and tags in a given byte order.
/// Little endian unless told otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BasicDecoder {
    endianness: Endianness,
}

impl Default for BasicDecoder {
    fn default() -> Self {
        BasicDecoder::new(Endianness::Little)
    }
}

impl BasicDecoder {
    /// Create a decoder for the given byte order.
    pub fn new(endianness: Endianness) -> Self {
        BasicDecoder { endianness }
    }

    /// The byte order numbers are read in.
    pub fn endianness(self) -> Endianness {
        self.endianness
    }

    pub fn decode_us<S: Read>(self, source: S) -> Result<u16> {
        ByteOrdered::runtime(source, self.endianness).read_u16()
    }

    pub fn decode_ul<S: Read>(self, source: S) -> Result<u32> {
        ByteOrdered::runtime(source, self.endianness).read_u32()
    }

    /// Fill `dst` with consecutive 16-bit numbers.
    pub fn decode_us_into<S: Read>(self, source: S, dst: &mut [u16]) -> Result<()> {
        ByteOrdered::runtime(source, self.endianness).read_u16_into(dst)
    }

    /// Read a group number followed by an element number.
    pub fn decode_tag<S: Read>(self, source: S) -> Result<Tag> {
        let mut source = ByteOrdered::runtime(source, self.endianness);
        let group = source.read_u16()?;
        let element = source.read_u16()?;
        Ok(Tag(group, element))
    }
}
