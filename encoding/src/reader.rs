//! Positional byte-stream reading of data element values.
//!
//! [`ElementReader`] is the object safe interface through which
//! element values are consumed once their header has been decoded.
//! [`DicomReader`] implements it over any seekable source,
//! keeping track of its own position in the stream.

use crate::decode::basic::BasicDecoder;
use crate::decode::{self, DecodeFrom};
use crate::text::{DecodeTextError, SpecificCharacterSet};
use byteordered::Endianness;
use dcmhead_core::header::{DataElementHeader, SequenceItemHeader};
use snafu::{Backtrace, ResultExt, Snafu};
use std::io::{self, Read, Seek, SeekFrom};

/// An error which may occur while reading element values.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum ReadError {
    #[snafu(display("Could not read {} bytes of value data", len))]
    ReadValue {
        len: u32,
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Could not move to position {}", position))]
    SeekTo {
        position: u64,
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Could not decode text value"))]
    DecodeText { source: DecodeTextError },
    #[snafu(display("Lookup table data length {} is not a multiple of 2", len))]
    OddLutLength { len: u32, backtrace: Backtrace },
}

pub type Result<T, E = ReadError> = std::result::Result<T, E>;

/// A cursor over the bytes of a DICOM data set,
/// through which element values are read.
///
/// All multi-byte numbers are read in the reader's current byte order.
pub trait ElementReader {
    /// The current absolute byte offset in the stream.
    fn position(&self) -> u64;

    /// Move the cursor to the given absolute byte offset.
    fn seek(&mut self, position: u64) -> Result<()>;

    /// Move the cursor forward by `n` bytes.
    fn skip(&mut self, n: u64) -> Result<()> {
        self.seek(self.position() + n)
    }

    /// The byte order in which multi-byte values are read.
    fn byte_order(&self) -> Endianness;

    /// Read `len` bytes of text.
    /// Value padding is kept, trimming is left to the caller.
    fn read_string(&mut self, len: u32) -> Result<String>;

    /// Read a single unsigned 16-bit value.
    fn read_us(&mut self) -> Result<u16>;

    /// Read `len` bytes as a sequence of unsigned 16-bit entries.
    ///
    /// Fails without consuming anything if `len` is odd.
    fn read_lut_entries(&mut self, len: u32) -> Result<Vec<u16>>;

    /// Read `len` raw bytes.
    fn read_bytes(&mut self, len: u32) -> Result<Vec<u8>>;
}

impl<R: ?Sized> ElementReader for &mut R
where
    R: ElementReader,
{
    fn position(&self) -> u64 {
        (**self).position()
    }

    fn seek(&mut self, position: u64) -> Result<()> {
        (**self).seek(position)
    }

    fn skip(&mut self, n: u64) -> Result<()> {
        (**self).skip(n)
    }

    fn byte_order(&self) -> Endianness {
        (**self).byte_order()
    }

    fn read_string(&mut self, len: u32) -> Result<String> {
        (**self).read_string(len)
    }

    fn read_us(&mut self) -> Result<u16> {
        (**self).read_us()
    }

    fn read_lut_entries(&mut self, len: u32) -> Result<Vec<u16>> {
        (**self).read_lut_entries(len)
    }

    fn read_bytes(&mut self, len: u32) -> Result<Vec<u8>> {
        (**self).read_bytes(len)
    }
}

/// An element reader over a seekable byte source.
///
/// The reader counts every byte it consumes,
/// so its position is known without querying the source.
#[derive(Debug)]
pub struct DicomReader<S> {
    source: S,
    basic: BasicDecoder,
    text: SpecificCharacterSet,
    buffer: Vec<u8>,
    position: u64,
}

impl<S> DicomReader<S>
where
    S: Read + Seek,
{
    /// Create a little endian reader
    /// over a source currently at the beginning of the stream.
    pub fn new(source: S) -> Self {
        DicomReader::new_at(source, 0)
    }

    /// Create a little endian reader
    /// over a source currently at the given absolute position.
    pub fn new_at(source: S, position: u64) -> Self {
        DicomReader {
            source,
            basic: BasicDecoder::default(),
            text: SpecificCharacterSet::default(),
            buffer: Vec::new(),
            position,
        }
    }

    /// Change the byte order of subsequent multi-byte reads.
    pub fn set_byte_order(&mut self, endianness: Endianness) {
        self.basic = BasicDecoder::new(endianness);
    }

    /// Change the character set of subsequent text reads.
    pub fn set_character_set(&mut self, charset: SpecificCharacterSet) {
        self.text = charset;
    }

    /// The character set used for text reads.
    pub fn character_set(&self) -> SpecificCharacterSet {
        self.text
    }

    /// Decode the next data element header with the given decoder,
    /// accounting for the header bytes in the reader's position.
    pub fn decode_header<D>(&mut self, decoder: &D) -> decode::Result<DataElementHeader>
    where
        D: ?Sized + DecodeFrom<S>,
    {
        let (header, bytes_read) = decoder.decode_header(&mut self.source)?;
        self.position += bytes_read as u64;
        Ok(header)
    }

    /// Decode the next item header with the given decoder,
    /// accounting for the header bytes in the reader's position.
    pub fn decode_item_header<D>(&mut self, decoder: &D) -> decode::Result<SequenceItemHeader>
    where
        D: ?Sized + DecodeFrom<S>,
    {
        let header = decoder.decode_item_header(&mut self.source)?;
        self.position += 8;
        Ok(header)
    }

    /// Retrieve the underlying source.
    pub fn into_inner(self) -> S {
        self.source
    }

    fn fill_buffer(&mut self, len: u32) -> Result<()> {
        self.buffer.clear();
        // grow as data arrives instead of trusting the declared length
        let read = (&mut self.source)
            .take(u64::from(len))
            .read_to_end(&mut self.buffer)
            .context(ReadValueSnafu { len })?;
        self.position += read as u64;
        if read < len as usize {
            return Err(io::Error::from(io::ErrorKind::UnexpectedEof))
                .context(ReadValueSnafu { len });
        }
        Ok(())
    }
}

impl<S> ElementReader for DicomReader<S>
where
    S: Read + Seek,
{
    fn position(&self) -> u64 {
        self.position
    }

    fn seek(&mut self, position: u64) -> Result<()> {
        self.source
            .seek(SeekFrom::Start(position))
            .context(SeekToSnafu { position })?;
        self.position = position;
        Ok(())
    }

    fn byte_order(&self) -> Endianness {
        self.basic.endianness()
    }

    fn read_string(&mut self, len: u32) -> Result<String> {
        self.fill_buffer(len)?;
        self.text.decode(&self.buffer).context(DecodeTextSnafu)
    }

    fn read_us(&mut self) -> Result<u16> {
        let value = self
            .basic
            .decode_us(&mut self.source)
            .context(ReadValueSnafu { len: 2_u32 })?;
        self.position += 2;
        Ok(value)
    }

    fn read_lut_entries(&mut self, len: u32) -> Result<Vec<u16>> {
        snafu::ensure!(len % 2 == 0, OddLutLengthSnafu { len });
        self.fill_buffer(len)?;
        let mut entries = vec![0_u16; self.buffer.len() / 2];
        self.basic
            .decode_us_into(&self.buffer[..], &mut entries)
            .context(ReadValueSnafu { len })?;
        Ok(entries)
    }

    fn read_bytes(&mut self, len: u32) -> Result<Vec<u8>> {
        self.fill_buffer(len)?;
        Ok(std::mem::take(&mut self.buffer))
    }
}
