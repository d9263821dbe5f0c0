//! Pixel Spacing (0028,0030), Slice Thickness (0018,0050),
//! Spacing Between Slices (0018,0088)

use super::{read_text, TagHandler};
use crate::context::DecodeContext;
use crate::sink::MetadataSink;
use dcmhead_core::value::{parse_decimal, parse_decimals_strict, trim_value};
use dcmhead_core::DataElementHeader;
use dcmhead_dictionary_std::tags;
use dcmhead_encoding::reader::ElementReader;
use tracing::warn;

/// Records the physical size of a voxel.
///
/// Pixel Spacing is given as row spacing then column spacing,
/// so the first value is the pixel height and the second the pixel width.
/// Slice Thickness and Spacing Between Slices both set the pixel depth,
/// whichever comes last in the stream wins.
/// Invalid values leave the calibration untouched.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct SpatialCalibrationHandler;

impl TagHandler for SpatialCalibrationHandler {
    fn handle(
        &self,
        header: &DataElementHeader,
        reader: &mut dyn ElementReader,
        ctx: &mut DecodeContext,
        sink: &mut dyn MetadataSink,
    ) -> bool {
        let text = match read_text(header, reader) {
            Some(text) => text,
            None => return true,
        };

        match header.tag {
            tags::PIXEL_SPACING => match parse_decimals_strict(&text) {
                Some(v) if v.len() == 2 => {
                    ctx.pixel_height = v[0];
                    ctx.pixel_width = v[1];
                }
                _ => warn!("Invalid pixel spacing `{}`", trim_value(&text)),
            },
            tags::SLICE_THICKNESS | tags::SPACING_BETWEEN_SLICES => match parse_decimal(&text) {
                Some(depth) => ctx.pixel_depth = depth,
                None => warn!("Invalid slice spacing `{}` in {}", trim_value(&text), header.tag),
            },
            _ => {}
        }
        sink.add_string_info(header.tag, trim_value(&text).to_string());
        true
    }
}
