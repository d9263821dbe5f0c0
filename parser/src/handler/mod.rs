//! Tag handlers: the units of work of the header decoder.
//!
//! Each handler is responsible for a small family of attributes.
//! When the decoder meets one of them,
//! the handler reads the element value,
//! refines the [`DecodeContext`] with what it means,
//! and reports the extracted value to a [`MetadataSink`].
//!
//! Handlers never fail.
//! A value which cannot be read or interpreted is replaced by a default
//! (and a warning is logged),
//! and the reader is always left right after the element value,
//! so that the next element header can be read.

use crate::context::DecodeContext;
use crate::sink::MetadataSink;
use dcmhead_core::DataElementHeader;
use dcmhead_encoding::reader::ElementReader;
use std::fmt::Debug;
use tracing::warn;

mod dimension;
mod geometry;
mod modality;
mod palette;
mod pixel_data;
mod pixel_interpretation;
mod rescale;
mod spatial;
mod transfer_syntax;
mod windowing;

pub use self::dimension::ImageDimensionHandler;
pub use self::geometry::GeometryHandler;
pub use self::modality::ModalityHandler;
pub use self::palette::PaletteColorHandler;
pub use self::pixel_data::PixelDataHandler;
pub use self::pixel_interpretation::PixelInterpretationHandler;
pub use self::rescale::RescaleHandler;
pub use self::spatial::SpatialCalibrationHandler;
pub use self::transfer_syntax::TransferSyntaxHandler;
pub use self::windowing::WindowingHandler;

/// Interpreter of the value of one or more DICOM attributes.
///
/// Implementations are stateless,
/// so that a single instance can serve any number of decodes
/// from any number of threads.
pub trait TagHandler: Send + Sync + Debug {
    /// Handle the element described by `header`,
    /// whose value starts at the reader's current position.
    ///
    /// The handler must leave the reader exactly `header.len` bytes
    /// after where it started,
    /// and report every value it extracts to the sink.
    ///
    /// Returns whether decoding should continue.
    fn handle(
        &self,
        header: &DataElementHeader,
        reader: &mut dyn ElementReader,
        ctx: &mut DecodeContext,
        sink: &mut dyn MetadataSink,
    ) -> bool;
}

/// The number of value bytes to consume for an element.
///
/// An undefined length has no value to consume here.
fn value_length(header: &DataElementHeader) -> u32 {
    header.len.get().unwrap_or(0)
}

/// Leave the reader at `start + len`, whatever was read in between.
fn realign(reader: &mut dyn ElementReader, header: &DataElementHeader, start: u64, len: u32) {
    let end = start + u64::from(len);
    if reader.position() != end {
        if let Err(e) = reader.seek(end) {
            warn!("Could not move past the value of {}: {}", header.tag, e);
        }
    }
}

/// Read the whole element value as text.
///
/// Yields `None` if the value could not be read,
/// in which case a warning is logged.
fn read_text(header: &DataElementHeader, reader: &mut dyn ElementReader) -> Option<String> {
    let len = value_length(header);
    let start = reader.position();
    let out = reader.read_string(len);
    realign(reader, header, start, len);
    match out {
        Ok(text) => Some(text),
        Err(e) => {
            warn!("Could not read value of {}: {}", header.tag, e);
            None
        }
    }
}

/// Read the element value as a single unsigned 16-bit number.
///
/// Yields `None` if the value is shorter than 2 bytes or could not be read.
fn read_us(header: &DataElementHeader, reader: &mut dyn ElementReader) -> Option<u16> {
    let len = value_length(header);
    let start = reader.position();
    let out = if len >= 2 {
        reader.read_us().map(Some)
    } else {
        Ok(None)
    };
    realign(reader, header, start, len);
    match out {
        Ok(Some(value)) => Some(value),
        Ok(None) => {
            warn!("Value of {} is too short ({} bytes)", header.tag, len);
            None
        }
        Err(e) => {
            warn!("Could not read value of {}: {}", header.tag, e);
            None
        }
    }
}
