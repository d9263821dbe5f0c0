//! Attribute dictionaries.
//!
//! Implicit VR data sets do not say which value representation
//! each element has, so the header decoder asks a dictionary.

use crate::header::{Tag, VR};
use std::fmt::Debug;

/// What a dictionary knows about one attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictionaryEntry {
    /// the attribute tag
    pub tag: Tag,
    /// keyword, as in `PixelSpacing`
    pub alias: &'static str,
    /// the value representation usually found with this attribute
    pub vr: VR,
}

/// A source of attribute entries.
///
/// The trait is object safe.
pub trait DataDictionary: Debug {
    /// Look up an attribute by tag.
    fn by_tag(&self, tag: Tag) -> Option<&DictionaryEntry>;

    /// Look up an attribute by keyword.
    /// Keywords are case sensitive.
    fn by_name(&self, name: &str) -> Option<&DictionaryEntry>;

    /// The value representation to assume
    /// for an element without an explicit one.
    ///
    /// Unknown attributes are `UN`.
    fn vr_of(&self, tag: Tag) -> VR {
        self.by_tag(tag).map_or(VR::UN, |entry| entry.vr)
    }
}

impl<D: ?Sized + DataDictionary> DataDictionary for &D {
    fn by_tag(&self, tag: Tag) -> Option<&DictionaryEntry> {
        (**self).by_tag(tag)
    }

    fn by_name(&self, name: &str) -> Option<&DictionaryEntry> {
        (**self).by_name(name)
    }
}

/// A dictionary without any entries.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StubDataDictionary;

impl DataDictionary for StubDataDictionary {
    fn by_tag(&self, _: Tag) -> Option<&DictionaryEntry> {
        None
    }

    fn by_name(&self, _: &str) -> Option<&DictionaryEntry> {
        None
    }
}
