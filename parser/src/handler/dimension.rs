//! Rows (0028,0010), Columns (0028,0011), Bits Allocated (0028,0100)

use super::{read_us, TagHandler};
use crate::context::DecodeContext;
use crate::sink::MetadataSink;
use dcmhead_core::DataElementHeader;
use dcmhead_dictionary_std::tags;
use dcmhead_encoding::reader::ElementReader;

/// Records the image dimensions and the number of bits per sample.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct ImageDimensionHandler;

impl TagHandler for ImageDimensionHandler {
    fn handle(
        &self,
        header: &DataElementHeader,
        reader: &mut dyn ElementReader,
        ctx: &mut DecodeContext,
        sink: &mut dyn MetadataSink,
    ) -> bool {
        let value = match read_us(header, reader) {
            Some(value) => value,
            None => return true,
        };
        match header.tag {
            tags::ROWS => ctx.height = u32::from(value),
            tags::COLUMNS => ctx.width = u32::from(value),
            tags::BITS_ALLOCATED => ctx.bit_depth = u32::from(value),
            _ => {}
        }
        sink.add_int_info(header.tag, i64::from(value));
        true
    }
}
