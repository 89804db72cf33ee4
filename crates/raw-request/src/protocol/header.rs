//! Ordered header storage for raw requests.
//!
//! Headers keep the order in which distinct names were first added, since the
//! serialized form writes one line per name in that order. Name lookup ignores
//! ASCII case, but the spelling of the first insertion is what gets written
//! back out.

use indexmap::IndexMap;

/// Separator used when several values of one header are rendered as a single line
pub const HEADER_VALUE_SEPARATOR: &str = ", ";

/// An ordered, case-insensitive mapping from header name to its raw values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    // keyed by the lowercased name
    entries: IndexMap<String, HeaderEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct HeaderEntry {
    name: String,
    values: Vec<String>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct header names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_ascii_lowercase())
    }

    /// Appends `value` under `name`, creating the entry if this is the first value.
    ///
    /// Values are stored as given, no splitting or trimming happens here.
    pub fn append(&mut self, name: &str, value: impl Into<String>) {
        self.entries
            .entry(name.to_ascii_lowercase())
            .or_insert_with(|| HeaderEntry { name: name.to_string(), values: Vec::new() })
            .values
            .push(value.into());
    }

    /// Returns every value recorded for `name`, in insertion order.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.entries.get(&name.to_ascii_lowercase()).map(|entry| entry.values.as_slice())
    }

    /// Returns the values of `name` joined into a single line.
    ///
    /// An absent header renders as the empty string.
    pub fn line(&self, name: &str) -> String {
        self.get(name).map(|values| values.join(HEADER_VALUE_SEPARATOR)).unwrap_or_default()
    }

    /// Iterates over `(name, values)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> + '_ {
        self.entries.values().map(|entry| (entry.name.as_str(), entry.values.as_slice()))
    }
}
