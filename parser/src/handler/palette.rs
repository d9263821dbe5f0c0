//! Red (0028,1201), Green (0028,1202) and Blue (0028,1203)
//! Palette Color Lookup Table Data

use super::TagHandler;
use crate::context::DecodeContext;
use crate::lut::read_palette_lut;
use crate::sink::MetadataSink;
use dcmhead_core::DataElementHeader;
use dcmhead_dictionary_std::tags;
use dcmhead_encoding::reader::ElementReader;
use tracing::warn;

/// Records one channel of the palette color lookup table,
/// reduced to 8 bits per entry.
///
/// A channel which cannot be read stays unset,
/// without affecting the other channels.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct PaletteColorHandler;

impl TagHandler for PaletteColorHandler {
    fn handle(
        &self,
        header: &DataElementHeader,
        reader: &mut dyn ElementReader,
        ctx: &mut DecodeContext,
        sink: &mut dyn MetadataSink,
    ) -> bool {
        let lut = match read_palette_lut(reader, header.len) {
            Ok(lut) => lut,
            Err(e) => {
                warn!("Could not read palette data in {}: {}", header.tag, e);
                return true;
            }
        };

        let entries = lut.len() as i64;
        match header.tag {
            tags::RED_PALETTE_COLOR_LOOKUP_TABLE_DATA => ctx.red_palette = Some(lut),
            tags::GREEN_PALETTE_COLOR_LOOKUP_TABLE_DATA => ctx.green_palette = Some(lut),
            tags::BLUE_PALETTE_COLOR_LOOKUP_TABLE_DATA => ctx.blue_palette = Some(lut),
            _ => {}
        }
        sink.add_int_info(header.tag, entries);
        true
    }
}
