//! Modality (0008,0060), Number of Frames (0028,0008)

use super::{read_text, TagHandler};
use crate::context::DecodeContext;
use crate::sink::MetadataSink;
use dcmhead_core::value::{parse_decimal, trim_value};
use dcmhead_core::DataElementHeader;
use dcmhead_dictionary_std::tags;
use dcmhead_encoding::reader::ElementReader;
use tracing::warn;

/// Records the modality and the number of frames.
///
/// The frame count only changes for more than one frame.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct ModalityHandler;

impl TagHandler for ModalityHandler {
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
        let value = trim_value(&text);

        match header.tag {
            tags::MODALITY => ctx.modality = Some(value.to_string()),
            tags::NUMBER_OF_FRAMES => match parse_decimal(value) {
                Some(frames) if frames > 1. => ctx.frame_count = frames as u32,
                Some(_) => {}
                None => warn!("Invalid number of frames `{}`", value),
            },
            _ => {}
        }
        sink.add_string_info(header.tag, value.to_string());
        true
    }
}
