//! Test utilities shared by the integration tests.
#![allow(dead_code)]

use dcmhead_core::{DataElementHeader, Length, Tag, VR};
use dcmhead_encoding::reader::{DicomReader, ElementReader, Result};
use dcmhead_encoding::Endianness;
use dcmhead_parser::{DecodeContext, MetadataTable, TagHandler};
use std::io::Cursor;

/// Bytes placed after every element value,
/// so that reading past the value goes unnoticed by the source
/// but not by the test.
pub const TRAILER: [u8; 8] = [0xAB; 8];

/// An element reader which keeps count
/// of how many value bytes were asked of it.
#[derive(Debug)]
pub struct RecordingReader {
    inner: DicomReader<Cursor<Vec<u8>>>,
    /// total number of bytes requested by read calls
    pub requested: u64,
}

impl RecordingReader {
    /// Create a reader over `value` followed by [`TRAILER`].
    pub fn new(value: &[u8]) -> Self {
        let mut data = value.to_vec();
        data.extend_from_slice(&TRAILER);
        RecordingReader {
            inner: DicomReader::new(Cursor::new(data)),
            requested: 0,
        }
    }

    pub fn set_byte_order(&mut self, endianness: Endianness) {
        self.inner.set_byte_order(endianness);
    }
}

impl ElementReader for RecordingReader {
    fn position(&self) -> u64 {
        self.inner.position()
    }

    fn seek(&mut self, position: u64) -> Result<()> {
        self.inner.seek(position)
    }

    fn byte_order(&self) -> Endianness {
        self.inner.byte_order()
    }

    fn read_string(&mut self, len: u32) -> Result<String> {
        self.requested += u64::from(len);
        self.inner.read_string(len)
    }

    fn read_us(&mut self) -> Result<u16> {
        self.requested += 2;
        self.inner.read_us()
    }

    fn read_lut_entries(&mut self, len: u32) -> Result<Vec<u16>> {
        self.requested += u64::from(len);
        self.inner.read_lut_entries(len)
    }

    fn read_bytes(&mut self, len: u32) -> Result<Vec<u8>> {
        self.requested += u64::from(len);
        self.inner.read_bytes(len)
    }
}

/// The outcome of handling a single element through a recording reader.
#[derive(Debug)]
pub struct Handled {
    pub proceed: bool,
    pub position: u64,
    pub requested: u64,
}

/// Have `handler` process an element with the given value bytes,
/// on top of the given context and metadata.
pub fn run_handler(
    handler: &dyn TagHandler,
    tag: Tag,
    vr: VR,
    value: &[u8],
    ctx: &mut DecodeContext,
    metadata: &mut MetadataTable,
) -> Handled {
    let mut reader = RecordingReader::new(value);
    let header = DataElementHeader::new(tag, vr, Length(value.len() as u32));
    let proceed = handler.handle(&header, &mut reader, ctx, metadata);
    Handled {
        proceed,
        position: reader.position(),
        requested: reader.requested,
    }
}

/// Encode an explicit VR little endian element.
pub fn explicit_le(tag: Tag, vr: VR, value: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(12 + value.len());
    out.extend_from_slice(&tag.0.to_le_bytes());
    out.extend_from_slice(&tag.1.to_le_bytes());
    out.extend_from_slice(&vr.to_bytes());
    if vr.has_short_length() {
        out.extend_from_slice(&(value.len() as u16).to_le_bytes());
    } else {
        out.extend_from_slice(&[0, 0]);
        out.extend_from_slice(&(value.len() as u32).to_le_bytes());
    }
    out.extend_from_slice(value);
    out
}

/// Encode an implicit VR little endian element.
pub fn implicit_le(tag: Tag, value: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(8 + value.len());
    out.extend_from_slice(&tag.0.to_le_bytes());
    out.extend_from_slice(&tag.1.to_le_bytes());
    out.extend_from_slice(&(value.len() as u32).to_le_bytes());
    out.extend_from_slice(value);
    out
}
