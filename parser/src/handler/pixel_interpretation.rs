//! Samples per Pixel (0028,0002), Photometric Interpretation (0028,0004),
//! Planar Configuration (0028,0006), Pixel Representation (0028,0103)

use super::{read_text, read_us, TagHandler};
use crate::context::DecodeContext;
use crate::sink::MetadataSink;
use dcmhead_core::value::trim_value;
use dcmhead_core::DataElementHeader;
use dcmhead_dictionary_std::tags;
use dcmhead_encoding::reader::ElementReader;

/// Records how pixel samples are laid out and interpreted.
///
/// Values are taken as declared, enumerated values are not checked.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct PixelInterpretationHandler;

impl TagHandler for PixelInterpretationHandler {
    fn handle(
        &self,
        header: &DataElementHeader,
        reader: &mut dyn ElementReader,
        ctx: &mut DecodeContext,
        sink: &mut dyn MetadataSink,
    ) -> bool {
        if header.tag == tags::PHOTOMETRIC_INTERPRETATION {
            if let Some(text) = read_text(header, reader) {
                let value = trim_value(&text).to_string();
                ctx.photometric_interpretation = value.clone();
                sink.add_string_info(header.tag, value);
            }
            return true;
        }

        let value = match read_us(header, reader) {
            Some(value) => value,
            None => return true,
        };
        match header.tag {
            tags::SAMPLES_PER_PIXEL => ctx.samples_per_pixel = value,
            tags::PLANAR_CONFIGURATION => ctx.planar_configuration = value,
            tags::PIXEL_REPRESENTATION => ctx.pixel_representation = value,
            _ => {}
        }
        sink.add_int_info(header.tag, i64::from(value));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::PixelInterpretationHandler;
    use crate::handler::testing::handle;
    use dcmhead_core::VR;
    use dcmhead_dictionary_std::tags;

    #[test]
    fn photometric_interpretation_is_taken_verbatim() {
        let out = handle(
            &PixelInterpretationHandler,
            tags::PHOTOMETRIC_INTERPRETATION,
            VR::CS,
            b"PALETTE COLOR ",
        );
        assert!(out.proceed);
        assert_eq!(out.position, 14);
        assert_eq!(out.ctx.photometric_interpretation, "PALETTE COLOR");
        assert_eq!(
            out.metadata.string_info(tags::PHOTOMETRIC_INTERPRETATION),
            Some("PALETTE COLOR")
        );

        // not a defined term, still recorded
        let out = handle(
            &PixelInterpretationHandler,
            tags::PHOTOMETRIC_INTERPRETATION,
            VR::CS,
            b"PURPLE",
        );
        assert_eq!(out.ctx.photometric_interpretation, "PURPLE");
    }

    #[test]
    fn numeric_attributes() {
        let out = handle(
            &PixelInterpretationHandler,
            tags::SAMPLES_PER_PIXEL,
            VR::US,
            &[3, 0],
        );
        assert_eq!(out.ctx.samples_per_pixel, 3);
        assert_eq!(out.metadata.int_info(tags::SAMPLES_PER_PIXEL), Some(3));

        let out = handle(
            &PixelInterpretationHandler,
            tags::PLANAR_CONFIGURATION,
            VR::US,
            &[1, 0],
        );
        assert_eq!(out.ctx.planar_configuration, 1);

        let out = handle(
            &PixelInterpretationHandler,
            tags::PIXEL_REPRESENTATION,
            VR::US,
            &[1, 0],
        );
        assert_eq!(out.ctx.pixel_representation, 1);
        assert!(out.ctx.is_signed());
        assert_eq!(out.position, 2);
    }
}
