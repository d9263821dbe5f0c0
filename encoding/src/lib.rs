//! Reading of element headers and values.
//!
//! - [`decode`]: element and item header decoders
//!   for the explicit and implicit VR transfer syntaxes
//! - [`reader`]: the [`ElementReader`] through which tag handlers
//!   read values, and [`DicomReader`] which implements it
//!   over any seekable source
//! - [`text`]: decoding of text in the declared character set
//! - [`transfer_syntax`]: the [`TransferSyntax`] descriptor,
//!   which picks a header decoder at run time
//!
//! All reading is synchronous.

pub mod decode;
pub mod reader;
pub mod text;
pub mod transfer_syntax;

pub use byteordered::Endianness;
pub use decode::{DecodeFrom, DynDecoder};
pub use reader::{DicomReader, ElementReader};
pub use transfer_syntax::Codec;
pub use transfer_syntax::{TransferSyntax, TransferSyntaxIndex};
