//! Lookup of the transfer syntax named in a file meta group.
//!
//! An unknown UID yields `None`,
//! and the caller decides how to read the data set.
//!
//! ```
//! use dcmhead_transfer_syntax_registry::get_registry;
//!
//! let ts = get_registry().get("1.2.840.10008.1.2.4.50").unwrap();
//! assert!(ts.is_compressed());
//! assert!(!ts.is_big_endian());
//! assert!(get_registry().get("1.2.3.4").is_none());
//! ```

pub mod entries;

use dcmhead_encoding::transfer_syntax::{TransferSyntax, TransferSyntaxIndex};
use lazy_static::lazy_static;
use std::collections::HashMap;

/// The known transfer syntaxes, by UID.
#[derive(Debug)]
pub struct TransferSyntaxRegistryImpl {
    by_uid: HashMap<&'static str, &'static TransferSyntax>,
}

impl TransferSyntaxRegistryImpl {
    fn new() -> Self {
        let mut by_uid = HashMap::new();
        for ts in entries::all() {
            if let Some(previous) = by_uid.insert(ts.uid(), ts) {
                tracing::warn!(
                    "Transfer syntax {} listed twice, keeping {}",
                    ts.uid(),
                    previous.name()
                );
                by_uid.insert(ts.uid(), previous);
            }
        }
        TransferSyntaxRegistryImpl { by_uid }
    }

    /// Find a transfer syntax by UID,
    /// ignoring trailing spaces and NUL characters.
    pub fn get(&self, uid: &str) -> Option<&TransferSyntax> {
        let uid = uid.trim_end_matches(|c: char| c == '\0' || c == ' ');
        self.by_uid.get(uid).copied()
    }

    pub fn len(&self) -> usize {
        self.by_uid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_uid.is_empty()
    }

    /// All registered transfer syntaxes, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &TransferSyntax> {
        self.by_uid.values().copied()
    }
}

impl TransferSyntaxIndex for TransferSyntaxRegistryImpl {
    fn get(&self, uid: &str) -> Option<&TransferSyntax> {
        TransferSyntaxRegistryImpl::get(self, uid)
    }
}

/// A handle to the process-wide registry, for APIs
/// which take a [`TransferSyntaxIndex`] by value.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub struct TransferSyntaxRegistry;

impl TransferSyntaxRegistry {
    pub fn iter(&self) -> impl Iterator<Item = &TransferSyntax> {
        get_registry().iter()
    }
}

impl TransferSyntaxIndex for TransferSyntaxRegistry {
    fn get(&self, uid: &str) -> Option<&TransferSyntax> {
        get_registry().get(uid)
    }
}

lazy_static! {
    static ref REGISTRY: TransferSyntaxRegistryImpl = TransferSyntaxRegistryImpl::new();
}

/// Implicit VR Little Endian, for data sets which do not say.
pub fn default() -> TransferSyntax {
    entries::IMPLICIT_VR_LITTLE_ENDIAN
}

/// The process-wide registry, built on first use.
pub fn get_registry() -> &'static TransferSyntaxRegistryImpl {
    &REGISTRY
}
