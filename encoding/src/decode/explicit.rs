//! Explicit VR headers, in either byte order.

use super::basic::BasicDecoder;
use super::{read_item_header, DecodeFrom, ReadLengthSnafu, ReadTagSnafu, ReadVrSnafu, Result};
use byteordered::Endianness;
use dcmhead_core::header::{DataElementHeader, Length, SequenceItemHeader};
use dcmhead_core::VR;
use snafu::ResultExt;
use std::io::Read;

/// Decodes headers which carry their VR:
/// the file meta group, and data sets of the explicit VR transfer syntaxes.
///
/// Element headers take 8 bytes, or 12 for the VRs with a 32-bit length.
/// Unrecognized VRs are read as `UN`, which has a 32-bit length.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExplicitVRDecoder {
    basic: BasicDecoder,
}

impl ExplicitVRDecoder {
    pub fn new(endianness: Endianness) -> Self {
        ExplicitVRDecoder {
            basic: BasicDecoder::new(endianness),
        }
    }

    pub fn little_endian() -> Self {
        ExplicitVRDecoder::new(Endianness::Little)
    }

    pub fn big_endian() -> Self {
        ExplicitVRDecoder::new(Endianness::Big)
    }
}

impl<S: ?Sized> DecodeFrom<S> for ExplicitVRDecoder
where
    S: Read,
{
    fn decode_header(&self, source: &mut S) -> Result<(DataElementHeader, usize)> {
        let tag = self
            .basic
            .decode_tag(&mut *source)
            .context(ReadTagSnafu)?;

        if tag.is_item_related() {
            // items and delimiters: no VR, 32-bit length
            let len = self
                .basic
                .decode_ul(source)
                .context(ReadLengthSnafu { tag })?;
            return Ok((DataElementHeader::new(tag, VR::UN, Length(len)), 8));
        }

        let mut code = [0_u8; 2];
        source.read_exact(&mut code).context(ReadVrSnafu { tag })?;
        let vr = VR::from_binary(code).unwrap_or(VR::UN);

        if vr.has_short_length() {
            let len = self
                .basic
                .decode_us(source)
                .context(ReadLengthSnafu { tag })?;
            Ok((DataElementHeader::new(tag, vr, Length(len.into())), 8))
        } else {
            let mut reserved = [0_u8; 2];
            source
                .read_exact(&mut reserved)
                .context(ReadLengthSnafu { tag })?;
            let len = self
                .basic
                .decode_ul(source)
                .context(ReadLengthSnafu { tag })?;
            Ok((DataElementHeader::new(tag, vr, Length(len)), 12))
        }
    }

    fn decode_item_header(&self, source: &mut S) -> Result<SequenceItemHeader> {
        read_item_header(self.basic, source)
    }
}

#[cfg(test)]
mod tests {
    use super::ExplicitVRDecoder;
    use crate::decode::DecodeFrom;
    use dcmhead_core::{Length, SequenceItemHeader, Tag, VR};
    use std::io::{Cursor, Seek, SeekFrom};

    #[rustfmt::skip]
    const HEADERS_LE: &[u8] = &[
        0x28, 0x00, 0x04, 0x00,     // (0028,0004) Photometric Interpretation
            b'C', b'S',             // VR: CS
            0x0C, 0x00,             // Length: 12
                b'M', b'O', b'N', b'O', b'C', b'H', b'R', b'O', b'M', b'E', b'2', b' ',
        0x28, 0x00, 0x01, 0x12,     // (0028,1201) Red Palette LUT Data
            b'O', b'W',             // VR: OW
            0x00, 0x00,             // reserved
            0x04, 0x00, 0x00, 0x00, // Length: 4
                0x00, 0xFF, 0x00, 0x80,
        0x08, 0x00, 0x40, 0x11,     // (0008,1140) Referenced Image Sequence
            b'S', b'Q',             // VR: SQ
            0x00, 0x00,             // reserved
            0xFF, 0xFF, 0xFF, 0xFF, // Length: undefined
        0xFE, 0xFF, 0x00, 0xE0,     // Item
            0xFF, 0xFF, 0xFF, 0xFF, // Length: undefined
        0xFE, 0xFF, 0x0D, 0xE0,     // Item delimiter
            0x00, 0x00, 0x00, 0x00,
        0xFE, 0xFF, 0xDD, 0xE0,     // Sequence delimiter
            0x00, 0x00, 0x00, 0x00,
    ];

    #[test]
    fn little_endian_headers() {
        let dec = ExplicitVRDecoder::little_endian();
        let mut cursor = Cursor::new(HEADERS_LE);

        let (header, bytes_read) = dec.decode_header(&mut cursor).unwrap();
        assert_eq!(header.tag, Tag(0x0028, 0x0004));
        assert_eq!(header.vr, VR::CS);
        assert_eq!(header.len, Length(12));
        assert_eq!(bytes_read, 8);
        // the value is left for the caller
        assert_eq!(cursor.stream_position().unwrap(), 8);
        cursor.seek(SeekFrom::Current(12)).unwrap();

        let (header, bytes_read) = dec.decode_header(&mut cursor).unwrap();
        assert_eq!(header.tag, Tag(0x0028, 0x1201));
        assert_eq!(header.vr, VR::OW);
        assert_eq!(header.len, Length(4));
        assert_eq!(bytes_read, 12);
        cursor.seek(SeekFrom::Current(4)).unwrap();

        let (header, _) = dec.decode_header(&mut cursor).unwrap();
        assert_eq!(header.vr, VR::SQ);
        assert!(header.len.is_undefined());

        let item = dec.decode_item_header(&mut cursor).unwrap();
        assert!(matches!(item, SequenceItemHeader::Item { len } if len.is_undefined()));
        let item = dec.decode_item_header(&mut cursor).unwrap();
        assert_eq!(item, SequenceItemHeader::ItemDelimiter);

        let (header, bytes_read) = dec.decode_header(&mut cursor).unwrap();
        assert_eq!(header.tag, Tag::SEQUENCE_DELIMITER);
        assert_eq!(header.vr, VR::UN);
        assert_eq!(bytes_read, 8);
        assert_eq!(cursor.stream_position().unwrap(), HEADERS_LE.len() as u64);
    }

    #[test]
    fn big_endian_headers() {
        #[rustfmt::skip]
        let raw: &[u8] = &[
            0x00, 0x28, 0x00, 0x10,     // (0028,0010) Rows
                b'U', b'S',             // VR: US
                0x00, 0x02,             // Length: 2
                    0x02, 0x00,
            0x7F, 0xE0, 0x00, 0x10,     // (7FE0,0010) Pixel Data
                b'O', b'W',             // VR: OW
                0x00, 0x00,             // reserved
                0x00, 0x08, 0x00, 0x00, // Length: 0x80000
        ];
        let dec = ExplicitVRDecoder::big_endian();
        let mut source = raw;

        let (header, _) = dec.decode_header(&mut source).unwrap();
        assert_eq!(header.tag, Tag(0x0028, 0x0010));
        assert_eq!(header.len, Length(2));
        source = &source[2..];

        let (header, bytes_read) = dec.decode_header(&mut source).unwrap();
        assert_eq!(header.tag, Tag(0x7FE0, 0x0010));
        assert_eq!(header.len, Length(0x0008_0000));
        assert_eq!(bytes_read, 12);
    }

    #[test]
    fn unknown_vr_uses_long_form() {
        #[rustfmt::skip]
        let raw: &[u8] = &[
            0x09, 0x00, 0x10, 0x10,     // (0009,1010) private
                b'?', b'?',             // not a VR
                0x00, 0x00,             // reserved
                0x02, 0x00, 0x00, 0x00, // Length: 2
                    0x01, 0x02,
        ];
        let dec = ExplicitVRDecoder::default();
        let mut source = raw;
        let (header, bytes_read) = dec.decode_header(&mut source).unwrap();
        assert_eq!(header.vr, VR::UN);
        assert_eq!(header.len, Length(2));
        assert_eq!(bytes_read, 12);
        assert_eq!(source, &[0x01, 0x02]);
    }
}
