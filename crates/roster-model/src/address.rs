//! Contact addresses and the deduplicating address list.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

/// Contact channel of an [`Address`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressKind {
    Phone,
    Email,
}

impl AddressKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Email => "email",
        }
    }
}

impl fmt::Display for AddressKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validated contact channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Address {
    #[serde(rename = "type")]
    pub kind: AddressKind,
    /// Tags accumulate in append order; repeats are kept.
    pub tags: Vec<String>,
    /// Canonical form: E.164 digits without `+` for phones, trimmed text for emails.
    pub address: String,
}

impl Address {
    pub fn new(kind: AddressKind, tags: Vec<String>, address: impl Into<String>) -> Self {
        Self {
            kind,
            tags,
            address: address.into(),
        }
    }
}

/// Whether an upsert created an entry or extended an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Added,
    TagsMerged,
}

/// Ordered addresses, unique by `(kind, address)`.
///
/// Entries keep first-occurrence order. A repeated `(kind, address)` appends
/// its tags to the existing entry instead of adding a second one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(into = "Vec<Address>")]
pub struct AddressList {
    entries: Vec<Address>,
    index: HashMap<(AddressKind, String), usize>,
}

impl AddressList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an address or merge its tags into the matching entry.
    pub fn upsert(&mut self, address: Address) -> Upsert {
        let key = (address.kind, address.address);
        if let Some(&idx) = self.index.get(&key) {
            self.entries[idx].tags.extend(address.tags);
            return Upsert::TagsMerged;
        }
        let (kind, canonical) = key;
        self.index.insert((kind, canonical.clone()), self.entries.len());
        self.entries.push(Address {
            kind,
            tags: address.tags,
            address: canonical,
        });
        Upsert::Added
    }

    /// Fold another list into this one, preserving its order.
    pub fn extend_merging(&mut self, other: AddressList) {
        for address in other.entries {
            self.upsert(address);
        }
    }

    pub fn get(&self, kind: AddressKind, address: &str) -> Option<&Address> {
        let idx = *self.index.get(&(kind, address.to_string()))?;
        self.entries.get(idx)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Address> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count_kind(&self, kind: AddressKind) -> usize {
        self.entries.iter().filter(|entry| entry.kind == kind).count()
    }

    pub fn as_slice(&self) -> &[Address] {
        &self.entries
    }
}

impl From<Vec<Address>> for AddressList {
    fn from(addresses: Vec<Address>) -> Self {
        let mut list = Self::new();
        for address in addresses {
            list.upsert(address);
        }
        list
    }
}

impl From<AddressList> for Vec<Address> {
    fn from(list: AddressList) -> Self {
        list.entries
    }
}

impl<'a> IntoIterator for &'a AddressList {
    type Item = &'a Address;
    type IntoIter = std::slice::Iter<'a, Address>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
