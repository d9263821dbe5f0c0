//! Publication of the values extracted by tag handlers.
//!
//! Every value a handler extracts is reported to a [`MetadataSink`],
//! whether or not it also changed the decode context,
//! so that it can later be looked up by tag.

use dcmhead_core::Tag;
use std::collections::HashMap;

/// Receiver of the values extracted from the header.
pub trait MetadataSink {
    /// Report a textual value.
    fn add_string_info(&mut self, tag: Tag, value: String);

    /// Report an integer value.
    fn add_int_info(&mut self, tag: Tag, value: i64);
}

impl<T: ?Sized> MetadataSink for &mut T
where
    T: MetadataSink,
{
    fn add_string_info(&mut self, tag: Tag, value: String) {
        (**self).add_string_info(tag, value)
    }

    fn add_int_info(&mut self, tag: Tag, value: i64) {
        (**self).add_int_info(tag, value)
    }
}

/// A value reported to a metadata sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataValue {
    /// textual value
    Str(String),
    /// integer value
    Int(i64),
}

impl MetadataValue {
    /// Obtain the textual value, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            MetadataValue::Str(s) => Some(s),
            MetadataValue::Int(_) => None,
        }
    }

    /// Obtain the integer value, if it is one.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            MetadataValue::Int(v) => Some(*v),
            MetadataValue::Str(_) => None,
        }
    }
}

/// A lookup table of reported values by tag.
///
/// Reporting a value for a tag already in the table replaces it.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MetadataTable {
    entries: HashMap<Tag, MetadataValue>,
}

impl MetadataTable {
    /// Create an empty table.
    pub fn new() -> Self {
        MetadataTable::default()
    }

    /// Retrieve the value reported for the given tag.
    pub fn get(&self, tag: Tag) -> Option<&MetadataValue> {
        self.entries.get(&tag)
    }

    /// Retrieve the textual value reported for the given tag.
    pub fn string_info(&self, tag: Tag) -> Option<&str> {
        self.get(tag).and_then(MetadataValue::as_str)
    }

    /// Retrieve the integer value reported for the given tag.
    pub fn int_info(&self, tag: Tag) -> Option<i64> {
        self.get(tag).and_then(MetadataValue::as_int)
    }

    /// The number of tags with a reported value.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no value was reported.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all reported values, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (Tag, &MetadataValue)> {
        self.entries.iter().map(|(tag, value)| (*tag, value))
    }
}

impl MetadataSink for MetadataTable {
    fn add_string_info(&mut self, tag: Tag, value: String) {
        self.entries.insert(tag, MetadataValue::Str(value));
    }

    fn add_int_info(&mut self, tag: Tag, value: i64) {
        self.entries.insert(tag, MetadataValue::Int(value));
    }
}
