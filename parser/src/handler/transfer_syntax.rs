//! Transfer Syntax UID (0002,0010)

use super::{read_text, TagHandler};
use crate::context::DecodeContext;
use crate::sink::MetadataSink;
use dcmhead_core::value::trim_value;
use dcmhead_core::DataElementHeader;
use dcmhead_encoding::reader::ElementReader;
use dcmhead_transfer_syntax_registry::get_registry;
use tracing::warn;

/// Records the transfer syntax
/// and derives whether the pixel data is compressed
/// and whether values are in big endian.
///
/// A transfer syntax which is not known
/// is assumed to be native and little endian.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct TransferSyntaxHandler;

impl TagHandler for TransferSyntaxHandler {
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
        let uid = trim_value(&text).to_string();

        match get_registry().get(&uid) {
            Some(ts) => {
                ctx.compressed = ts.is_compressed();
                ctx.big_endian = ts.is_big_endian();
            }
            None => {
                warn!("Unknown transfer syntax `{}`, assuming native little endian", uid);
                ctx.compressed = false;
                ctx.big_endian = false;
            }
        }
        ctx.transfer_syntax_uid = uid.clone();
        sink.add_string_info(header.tag, uid);
        true
    }
}
