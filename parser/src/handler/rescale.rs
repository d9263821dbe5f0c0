//! Rescale Intercept (0028,1052), Rescale Slope (0028,1053)

use super::{read_text, TagHandler};
use crate::context::DecodeContext;
use crate::sink::MetadataSink;
use dcmhead_core::value::{parse_decimal, trim_value};
use dcmhead_core::DataElementHeader;
use dcmhead_dictionary_std::tags;
use dcmhead_encoding::reader::ElementReader;
use tracing::warn;

/// Records the modality transform.
///
/// An invalid value falls back to the identity transform:
/// 0 for the intercept and 1 for the slope.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct RescaleHandler;

impl TagHandler for RescaleHandler {
    fn handle(
        &self,
        header: &DataElementHeader,
        reader: &mut dyn ElementReader,
        ctx: &mut DecodeContext,
        sink: &mut dyn MetadataSink,
    ) -> bool {
        let text = read_text(header, reader).unwrap_or_default();
        let value = parse_decimal(&text);
        if value.is_none() {
            warn!("Invalid rescale value `{}` in {}", trim_value(&text), header.tag);
        }

        match header.tag {
            tags::RESCALE_INTERCEPT => ctx.rescale_intercept = value.unwrap_or(0.),
            tags::RESCALE_SLOPE => ctx.rescale_slope = value.unwrap_or(1.),
            _ => {}
        }
        sink.add_string_info(header.tag, trim_value(&text).to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::RescaleHandler;
    use crate::context::DecodeContext;
    use crate::handler::testing::{handle, handle_with};
    use dcmhead_core::VR;
    use dcmhead_dictionary_std::tags;

    #[test]
    fn rescale_values() {
        let out = handle(&RescaleHandler, tags::RESCALE_INTERCEPT, VR::DS, b"-1024 ");
        assert!(out.proceed);
        assert_eq!(out.position, 6);
        assert_eq!(out.ctx.rescale_intercept, -1024.);
        assert_eq!(out.metadata.string_info(tags::RESCALE_INTERCEPT), Some("-1024"));

        let out = handle(&RescaleHandler, tags::RESCALE_SLOPE, VR::DS, b"1 ");
        assert_eq!(out.ctx.rescale_slope, 1.);

        let out = handle(&RescaleHandler, tags::RESCALE_SLOPE, VR::DS, b"2.5 ");
        assert_eq!(out.ctx.rescale_slope, 2.5);
    }

    #[test]
    fn invalid_values_fall_back_to_identity() {
        let ctx = DecodeContext {
            rescale_intercept: -1024.,
            rescale_slope: 2.,
            ..DecodeContext::default()
        };
        let out = handle_with(&RescaleHandler, ctx, tags::RESCALE_INTERCEPT, VR::DS, b"n/a ");
        assert!(out.proceed);
        assert_eq!(out.ctx.rescale_intercept, 0.);
        assert_eq!(out.ctx.rescale_slope, 2.);

        let out = handle_with(&RescaleHandler, out.ctx, tags::RESCALE_SLOPE, VR::DS, b"");
        assert_eq!(out.ctx.rescale_slope, 1.);
        assert_eq!(out.position, 0);
    }
}
