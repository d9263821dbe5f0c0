//! Image Orientation (Patient) (0020,0037), Image Position (Patient) (0020,0032)

use super::{read_text, TagHandler};
use crate::context::{DecodeContext, Orientation};
use crate::sink::MetadataSink;
use dcmhead_core::value::{parse_decimal_tuple, trim_value};
use dcmhead_core::DataElementHeader;
use dcmhead_dictionary_std::tags;
use dcmhead_encoding::reader::ElementReader;
use tracing::warn;

/// Records where the image lies in the patient coordinate system.
///
/// Orientation and position are only set
/// when exactly six (or three) valid numbers are found.
/// Both direction cosines are normalized.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct GeometryHandler;

fn parse_orientation(text: &str) -> Option<Orientation> {
    let v = parse_decimal_tuple(text, 6)?;
    Orientation::from_directions([v[0], v[1], v[2]], [v[3], v[4], v[5]])
}

fn parse_position(text: &str) -> Option<[f64; 3]> {
    let v = parse_decimal_tuple(text, 3)?;
    Some([v[0], v[1], v[2]])
}

impl TagHandler for GeometryHandler {
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
            tags::IMAGE_ORIENTATION_PATIENT => match parse_orientation(&text) {
                Some(orientation) => ctx.orientation = Some(orientation),
                None => warn!("Invalid image orientation `{}`", trim_value(&text)),
            },
            tags::IMAGE_POSITION_PATIENT => match parse_position(&text) {
                Some(position) => ctx.position = Some(position),
                None => warn!("Invalid image position `{}`", trim_value(&text)),
            },
            _ => {}
        }
        sink.add_string_info(header.tag, trim_value(&text).to_string());
        true
    }
}
