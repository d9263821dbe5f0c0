//! Reading of palette color lookup table data.
//!
//! Palette color lookup tables hold 16-bit entries.
//! They are reduced here to 8 bits per entry,
//! which is what display pipelines consume.

use dcmhead_core::Length;
use dcmhead_encoding::reader::{ElementReader, ReadError};
use snafu::{ensure, Backtrace, ResultExt, Snafu};

/// An error which may occur while reading lookup table data.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum LutError {
    #[snafu(display("Lookup table length {} is not a multiple of 2", len))]
    OddLength { len: u32, backtrace: Backtrace },
    #[snafu(display("Lookup table length is undefined"))]
    UndefinedLength { backtrace: Backtrace },
    #[snafu(display("Could not read lookup table entries"))]
    Read {
        #[snafu(backtrace)]
        source: ReadError,
    },
}

pub type Result<T, E = LutError> = std::result::Result<T, E>;

/// Read a palette color lookup table of `length` bytes
/// at the reader's position,
/// keeping the high 8 bits of each 16-bit entry.
///
/// The reader is left right after the value whether or not this succeeds.
pub fn read_palette_lut(reader: &mut dyn ElementReader, length: Length) -> Result<Vec<u8>> {
    let len = length.get().ok_or_else(|| UndefinedLengthSnafu.build())?;
    let start = reader.position();
    let out = read_entries(reader, len);
    let end = start + u64::from(len);
    if reader.position() != end {
        reader.seek(end).context(ReadSnafu)?;
    }
    out
}

fn read_entries(reader: &mut dyn ElementReader, len: u32) -> Result<Vec<u8>> {
    ensure!(len % 2 == 0, OddLengthSnafu { len });
    let entries = reader.read_lut_entries(len).context(ReadSnafu)?;
    Ok(entries.into_iter().map(|e| (e >> 8) as u8).collect())
}
