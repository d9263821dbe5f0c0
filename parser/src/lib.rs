//! This crate decodes the header of DICOM image files
//! into what a viewer needs to know before reading the pixel data:
//! image dimensions, sample layout, windowing, geometry,
//! the modality transform and the color palette.
//!
//! Decoding is driven by a [`HandlerRegistry`],
//! which maps attribute tags to [`TagHandler`]s.
//! The decoder reads the data set one element at a time,
//! and each handler interprets the attributes it is registered for,
//! refining a [`DecodeContext`] and reporting values to a [`MetadataSink`].
//! Unregistered attributes are only located,
//! so that their values can be read later.
//!
//! ```no_run
//! use dcmhead_parser::decode_header;
//!
//! let file = std::fs::File::open("image.dcm")?;
//! let header = decode_header(file)?;
//! let ctx = &header.context;
//! println!(
//!     "{}x{}, {} bits, pixel data at {}",
//!     ctx.width, ctx.height, ctx.bit_depth, ctx.pixel_data_offset
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! All APIs are based on synchronous I/O.
//! A registry is immutable once built
//! and can be shared by concurrent decodes,
//! each with its own context.

pub mod context;
pub mod decode;
pub mod handler;
pub mod lut;
pub mod registry;
pub mod sink;

pub use context::{DecodeContext, Orientation};
pub use decode::{
    decode_header, DecodedHeader, DeferredElement, HeaderDecodeOptions, ReadPreamble,
};
pub use handler::{
    GeometryHandler, ImageDimensionHandler, ModalityHandler, PaletteColorHandler,
    PixelDataHandler, PixelInterpretationHandler, RescaleHandler, SpatialCalibrationHandler,
    TagHandler, TransferSyntaxHandler, WindowingHandler,
};
pub use registry::{standard_registry, HandlerRegistry, HandlerRegistryBuilder, SharedHandler};
pub use sink::{MetadataSink, MetadataTable, MetadataValue};
