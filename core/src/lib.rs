#![crate_type = "lib"]
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    unused_import_braces
)]

//! This is the core library of the DICOM header decoder,
//! containing the data types shared by all other crates.
//!
//! The current structure of this crate is as follows:
//!
//! - [`header`] comprises the data types of a DICOM element header,
//!   including the DICOM tag and value representation.
//! - [`dictionary`] describes attribute dictionaries,
//!   which give the usual VR of an attribute.
//! - [`value`] holds functions for interpreting textual values
//!   with the awareness of value multiplicity.

pub mod dictionary;
pub mod header;
pub mod value;

pub use dictionary::{DataDictionary, DictionaryEntry};
pub use header::{DataElementHeader, Length, SequenceItemHeader, Tag, VR};

// re-export crates that are part of the public API
pub use smallvec;
