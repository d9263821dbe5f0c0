//! Window Center (0028,1050), Window Width (0028,1051)

use super::{read_text, TagHandler};
use crate::context::DecodeContext;
use crate::sink::MetadataSink;
use dcmhead_core::value::{parse_decimal, trim_value, VALUE_SEPARATOR};
use dcmhead_core::DataElementHeader;
use dcmhead_dictionary_std::tags;
use dcmhead_encoding::reader::ElementReader;
use tracing::warn;

/// Records the default VOI window.
///
/// When the value holds a backslash,
/// everything after the first backslash is used,
/// which is the second window when exactly two are declared.
/// A value which is not a number yields 0,
/// so three or more windows yield 0 as well.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct WindowingHandler;

/// Pick the part of the value holding the window to use.
fn select_window(text: &str) -> &str {
    match text.split_once(VALUE_SEPARATOR) {
        Some((_, rest)) => rest,
        None => text,
    }
}

impl TagHandler for WindowingHandler {
    fn handle(
        &self,
        header: &DataElementHeader,
        reader: &mut dyn ElementReader,
        ctx: &mut DecodeContext,
        sink: &mut dyn MetadataSink,
    ) -> bool {
        let text = read_text(header, reader).unwrap_or_default();
        let token = select_window(&text);
        let value = parse_decimal(token).unwrap_or_else(|| {
            warn!("Invalid window value `{}` in {}, using 0", token, header.tag);
            0.
        });

        match header.tag {
            tags::WINDOW_CENTER => ctx.window_center = value,
            tags::WINDOW_WIDTH => ctx.window_width = value,
            _ => {}
        }
        sink.add_string_info(header.tag, trim_value(&text).to_string());
        true
    }
}
