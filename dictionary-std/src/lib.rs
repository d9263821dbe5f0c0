//! Attribute and transfer syntax constants for the header decoder,
//! and the dictionary used to resolve value representations
//! in implicit VR data sets.
//!
//! - [`tags`]: tag constants, named after the attribute keywords
//!   of [DICOM PS3.6]
//! - [`uids`]: transfer syntax UIDs
//! - [`StandardDataDictionary`]: lookup of the attributes in [`tags`]
//!
//! [DICOM PS3.6]: https://dicom.nema.org/medical/dicom/current/output/chtml/part06/ps3.6.html

pub mod data_element;
pub mod tags;
pub mod uids;

pub use data_element::StandardDataDictionary;
