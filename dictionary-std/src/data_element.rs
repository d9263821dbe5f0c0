//! The standard attribute dictionary, indexed by tag on first use.

use crate::tags::ENTRIES;
use dcmhead_core::dictionary::{DataDictionary, DictionaryEntry};
use dcmhead_core::header::{Tag, VR};
use once_cell::sync::Lazy;
use std::collections::HashMap;

static BY_TAG: Lazy<HashMap<Tag, &'static DictionaryEntry>> =
    Lazy::new(|| ENTRIES.iter().map(|entry| (entry.tag, entry)).collect());

/// Stands in for any (gggg,0000) element not listed.
static GROUP_LENGTH: DictionaryEntry = DictionaryEntry {
    tag: Tag(0x0000, 0x0000),
    alias: "GenericGroupLength",
    vr: VR::UL,
};

/// Stands in for any private creator element (gggg,0010-00FF), gggg odd.
static PRIVATE_CREATOR: DictionaryEntry = DictionaryEntry {
    tag: Tag(0x0009, 0x0010),
    alias: "PrivateCreator",
    vr: VR::LO,
};

/// The attributes declared in [`tags`](crate::tags),
/// plus generic entries for group lengths and private creators.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub struct StandardDataDictionary;

impl DataDictionary for StandardDataDictionary {
    fn by_tag(&self, tag: Tag) -> Option<&DictionaryEntry> {
        if let Some(entry) = BY_TAG.get(&tag).copied() {
            return Some(entry);
        }
        match tag {
            Tag(_, 0x0000) => Some(&GROUP_LENGTH),
            Tag(group, 0x0010..=0x00FF) if group % 2 == 1 => Some(&PRIVATE_CREATOR),
            _ => None,
        }
    }

    fn by_name(&self, name: &str) -> Option<&DictionaryEntry> {
        [&GROUP_LENGTH, &PRIVATE_CREATOR]
            .iter()
            .copied()
            .chain(ENTRIES)
            .find(|entry| entry.alias == name)
    }
}
