//! The table mapping attribute tags to their handlers.

use crate::handler::{
    GeometryHandler, ImageDimensionHandler, ModalityHandler, PaletteColorHandler,
    PixelDataHandler, PixelInterpretationHandler, RescaleHandler, SpatialCalibrationHandler,
    TagHandler, TransferSyntaxHandler, WindowingHandler,
};
use dcmhead_core::Tag;
use dcmhead_dictionary_std::tags;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;

/// A shared tag handler.
pub type SharedHandler = Arc<dyn TagHandler>;

/// An immutable mapping from attribute tags to tag handlers.
///
/// Several tags may share the same handler instance.
/// Once built, a registry can be consulted from any number of threads.
#[derive(Debug, Clone)]
pub struct HandlerRegistry {
    handlers: HashMap<Tag, SharedHandler>,
}

static STANDARD: Lazy<HandlerRegistry> = Lazy::new(HandlerRegistry::standard);

/// Retrieve the process-wide registry of standard handlers.
///
/// It is built on first use.
pub fn standard_registry() -> &'static HandlerRegistry {
    &STANDARD
}

impl HandlerRegistry {
    /// Build a new registry with the standard handlers.
    pub fn standard() -> Self {
        HandlerRegistry::builder().build()
    }

    /// Start building a registry
    /// from the standard handlers.
    pub fn builder() -> HandlerRegistryBuilder {
        HandlerRegistryBuilder::standard()
    }

    /// Retrieve the handler for the given tag.
    #[inline]
    pub fn get_handler(&self, tag: Tag) -> Option<&SharedHandler> {
        self.handlers.get(&tag)
    }

    /// Whether a handler is registered for the given tag.
    #[inline]
    pub fn contains(&self, tag: Tag) -> bool {
        self.handlers.contains_key(&tag)
    }

    /// The number of registered tags.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no tag is registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Iterate over the registered tags, in no particular order.
    pub fn tags(&self) -> impl Iterator<Item = Tag> + '_ {
        self.handlers.keys().copied()
    }
}

/// A builder for a custom handler registry.
///
/// ```
/// # use dcmhead_parser::{HandlerRegistry, WindowingHandler};
/// # use dcmhead_core::Tag;
/// use std::sync::Arc;
///
/// let registry = HandlerRegistry::builder()
///     // the VOI LUT function, read as windowing
///     .register(Tag(0x0028, 0x1056), Arc::new(WindowingHandler))
///     .build();
/// assert!(registry.contains(Tag(0x0028, 0x1056)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct HandlerRegistryBuilder {
    handlers: HashMap<Tag, SharedHandler>,
}

impl HandlerRegistryBuilder {
    /// Start with no handlers at all.
    pub fn empty() -> Self {
        HandlerRegistryBuilder::default()
    }

    /// Start with the standard handlers.
    pub fn standard() -> Self {
        let dimension: SharedHandler = Arc::new(ImageDimensionHandler);
        let interpretation: SharedHandler = Arc::new(PixelInterpretationHandler);
        let windowing: SharedHandler = Arc::new(WindowingHandler);
        let geometry: SharedHandler = Arc::new(GeometryHandler);
        let spatial: SharedHandler = Arc::new(SpatialCalibrationHandler);
        let rescale: SharedHandler = Arc::new(RescaleHandler);
        let palette: SharedHandler = Arc::new(PaletteColorHandler);
        let modality: SharedHandler = Arc::new(ModalityHandler);

        HandlerRegistryBuilder::empty()
            .register(tags::TRANSFER_SYNTAX_UID, Arc::new(TransferSyntaxHandler))
            .register_all(
                &[tags::ROWS, tags::COLUMNS, tags::BITS_ALLOCATED],
                &dimension,
            )
            .register_all(
                &[
                    tags::SAMPLES_PER_PIXEL,
                    tags::PHOTOMETRIC_INTERPRETATION,
                    tags::PLANAR_CONFIGURATION,
                    tags::PIXEL_REPRESENTATION,
                ],
                &interpretation,
            )
            .register_all(&[tags::WINDOW_CENTER, tags::WINDOW_WIDTH], &windowing)
            .register_all(
                &[tags::IMAGE_ORIENTATION_PATIENT, tags::IMAGE_POSITION_PATIENT],
                &geometry,
            )
            .register_all(
                &[
                    tags::PIXEL_SPACING,
                    tags::SLICE_THICKNESS,
                    tags::SPACING_BETWEEN_SLICES,
                ],
                &spatial,
            )
            .register_all(&[tags::RESCALE_INTERCEPT, tags::RESCALE_SLOPE], &rescale)
            .register_all(
                &[
                    tags::RED_PALETTE_COLOR_LOOKUP_TABLE_DATA,
                    tags::GREEN_PALETTE_COLOR_LOOKUP_TABLE_DATA,
                    tags::BLUE_PALETTE_COLOR_LOOKUP_TABLE_DATA,
                ],
                &palette,
            )
            .register_all(&[tags::MODALITY, tags::NUMBER_OF_FRAMES], &modality)
            .register(tags::PIXEL_DATA, Arc::new(PixelDataHandler))
    }

    /// Map a tag to a handler,
    /// replacing any handler previously mapped to it.
    pub fn register(mut self, tag: Tag, handler: SharedHandler) -> Self {
        self.handlers.insert(tag, handler);
        self
    }

    /// Map all the given tags to the same handler instance.
    pub fn register_all(mut self, tags: &[Tag], handler: &SharedHandler) -> Self {
        for tag in tags {
            self.handlers.insert(*tag, Arc::clone(handler));
        }
        self
    }

    /// Remove the handler of a tag,
    /// so that the tag is deferred like any other.
    pub fn unregister(mut self, tag: Tag) -> Self {
        self.handlers.remove(&tag);
        self
    }

    /// Freeze the registry.
    pub fn build(self) -> HandlerRegistry {
        HandlerRegistry {
            handlers: self.handlers,
        }
    }
}
