//! # DICOM header decoder
//!
//! This crate serves as a parent for the library crates of the project,
//! which can also be fetched independently.
//! They all have the `dcmhead-` prefix.
//!
//! - To decode the header of a DICOM image file,
//!   see [`decode_header`] and [`HeaderDecodeOptions`]
//!   from the [`parser`] module.
//!   The outcome is a [`DecodeContext`] describing the image,
//!   plus a table of every value extracted on the way.
//! - To change how attributes are interpreted,
//!   implement [`TagHandler`](parser::TagHandler)
//!   and build a custom [`HandlerRegistry`](parser::HandlerRegistry).
//! - The [`core`] crate contains the data types
//!   that the other crates rely on,
//!   such as DICOM tags ([`Tag`](dcmhead_core::Tag))
//!   and value representations ([`VR`](dcmhead_core::VR)).
//! - Constants for the known tags are in
//!   the [`tags`][dictionary_std::tags] module of [`dictionary_std`].
//! - [`transfer_syntax`] holds the table of known transfer syntaxes,
//!   and [`encoding`] the primitives for reading element headers and values.
//!
//! ```no_run
//! use dcmhead::decode_header;
//!
//! let header = decode_header(std::fs::File::open("image.dcm")?)?;
//! if header.context.compressed {
//!     println!("compressed pixel data at {}", header.context.pixel_data_offset);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use dcmhead_core as core;
pub use dcmhead_dictionary_std as dictionary_std;
pub use dcmhead_encoding as encoding;
pub use dcmhead_parser as parser;
pub use dcmhead_transfer_syntax_registry as transfer_syntax;

pub use dcmhead_parser::{decode_header, DecodeContext, DecodedHeader, HeaderDecodeOptions};
