//! Pixel Data (7FE0,0010)

use super::TagHandler;
use crate::context::DecodeContext;
use crate::sink::MetadataSink;
use dcmhead_core::DataElementHeader;
use dcmhead_encoding::reader::ElementReader;

/// Records where the pixel data starts and ends the decode.
///
/// The pixel data value is not read.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct PixelDataHandler;

impl TagHandler for PixelDataHandler {
    fn handle(
        &self,
        header: &DataElementHeader,
        reader: &mut dyn ElementReader,
        ctx: &mut DecodeContext,
        sink: &mut dyn MetadataSink,
    ) -> bool {
        let offset = reader.position();
        ctx.pixel_data_offset = offset;
        ctx.stop = true;
        sink.add_int_info(header.tag, offset as i64);
        false
    }
}

#[cfg(test)]
mod tests {
    use super::PixelDataHandler;
    use crate::context::DecodeContext;
    use crate::handler::TagHandler;
    use crate::sink::MetadataTable;
    use dcmhead_core::{DataElementHeader, Length, VR};
    use dcmhead_dictionary_std::tags;
    use dcmhead_encoding::reader::{DicomReader, ElementReader};
    use std::io::Cursor;

    #[test]
    fn records_offset_and_stops() {
        let data = vec![0_u8; 64];
        let mut reader = DicomReader::new_at(Cursor::new(data), 0);
        reader.skip(20).unwrap();
        let header = DataElementHeader::new(tags::PIXEL_DATA, VR::OW, Length(32));
        let mut ctx = DecodeContext::new();
        let mut metadata = MetadataTable::new();

        let proceed = PixelDataHandler.handle(&header, &mut reader, &mut ctx, &mut metadata);
        assert!(!proceed);
        assert!(ctx.stop);
        assert_eq!(ctx.pixel_data_offset, 20);
        assert_eq!(reader.position(), 20);
        assert_eq!(metadata.int_info(tags::PIXEL_DATA), Some(20));
    }

    #[test]
    fn encapsulated_pixel_data_stops_too() {
        let header = DataElementHeader::new(tags::PIXEL_DATA, VR::OB, Length::UNDEFINED);
        let mut reader = DicomReader::new(Cursor::new(vec![0_u8; 8]));
        let mut ctx = DecodeContext::new();
        let mut metadata = MetadataTable::new();
        assert!(!PixelDataHandler.handle(&header, &mut reader, &mut ctx, &mut metadata));
        assert_eq!(ctx.pixel_data_offset, 0);
        assert!(ctx.stop);
    }
}
