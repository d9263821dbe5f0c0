//! Implicit VR little endian headers.

use super::basic::BasicDecoder;
use super::{read_item_header, DecodeFrom, ReadLengthSnafu, ReadTagSnafu, Result};
use dcmhead_core::dictionary::DataDictionary;
use dcmhead_core::header::{DataElementHeader, Length, SequenceItemHeader};
use dcmhead_core::{Tag, VR};
use dcmhead_dictionary_std::StandardDataDictionary;
use snafu::ResultExt;
use std::io::Read;

/// Implicit VR decoding backed by the standard dictionary.
pub type StandardImplicitVRDecoder = ImplicitVRDecoder<StandardDataDictionary>;

/// Decodes headers made of a tag and a 32-bit length only.
///
/// The VR is looked up in a dictionary, by tag.
/// Pixel Data and overlay data are always `OW`,
/// and anything the dictionary does not know is `UN`.
#[derive(Debug, Default, Clone)]
pub struct ImplicitVRDecoder<D> {
    dict: D,
    basic: BasicDecoder,
}

impl<D> ImplicitVRDecoder<D>
where
    D: DataDictionary,
{
    pub fn with_dict(dict: D) -> Self {
        ImplicitVRDecoder {
            dict,
            basic: BasicDecoder::default(),
        }
    }

    fn vr_of(&self, tag: Tag) -> VR {
        match tag {
            Tag(0x7FE0, 0x0010) => VR::OW,
            Tag(group, 0x3000) if group >> 8 == 0x60 => VR::OW,
            tag if tag.is_item_related() => VR::UN,
            tag => self.dict.vr_of(tag),
        }
    }
}

impl<S: ?Sized, D> DecodeFrom<S> for ImplicitVRDecoder<D>
where
    S: Read,
    D: DataDictionary,
{
    fn decode_header(&self, source: &mut S) -> Result<(DataElementHeader, usize)> {
        let tag = self
            .basic
            .decode_tag(&mut *source)
            .context(ReadTagSnafu)?;
        let len = self
            .basic
            .decode_ul(source)
            .context(ReadLengthSnafu { tag })?;
        Ok((DataElementHeader::new(tag, self.vr_of(tag), Length(len)), 8))
    }

    fn decode_item_header(&self, source: &mut S) -> Result<SequenceItemHeader> {
        read_item_header(self.basic, source)
    }
}
