use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Fixed relational schema of a wordlist. Consumers address entries by
/// these field names; id 0 in the legacy format is this tuple.
pub const ENTRY_FIELDS: [&str; 3] = ["concept", "doculect", "counterpart"];

/// Positional index of a schema field name, if it is one of [`ENTRY_FIELDS`].
pub fn field_index(name: &str) -> Option<usize> {
    ENTRY_FIELDS.iter().position(|field| *field == name)
}

/// One relational record: a counterpart for a concept in one doculect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub concept: String,
    pub doculect: String,
    pub counterpart: String,
}

/// Append-only sequence of entries with 1-based sequential ids.
///
/// The entry at vector index `i` has id `i + 1`; id 0 is reserved for the
/// [`ENTRY_FIELDS`] schema tuple and never names a data entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wordlist {
    entries: Vec<Entry>,
    meta: BTreeMap<String, String>,
}

impl Wordlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Entry by 1-based id. Id 0 is the schema tuple, not a data entry.
    pub fn entry(&self, id: usize) -> Option<&Entry> {
        id.checked_sub(1).and_then(|index| self.entries.get(index))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Iterate entries as `(id, entry)` pairs, ids ascending from 1.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Entry)> {
        self.entries.iter().enumerate().map(|(index, entry)| (index + 1, entry))
    }

    pub fn set_meta(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.meta.insert(key.into(), value.into());
    }

    pub fn meta(&self, key: &str) -> Option<&str> {
        self.meta.get(key).map(String::as_str)
    }
}
