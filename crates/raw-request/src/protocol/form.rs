//! Decoding of `application/x-www-form-urlencoded` bodies.
//!
//! The body is split into percent-decoded `key=value` pairs by
//! `serde_urlencoded`, then keys are interpreted with bracket notation:
//!
//! - `a=1` stores the text `1` under `a`
//! - `a[b]=1` nests: `a` becomes a map holding `b`
//! - `a[]=1&a[]=2` appends under the next free integer key (`0`, `1`, ...)
//!
//! Later pairs overwrite earlier ones with the same path, and a nested path
//! replaces a text value that was stored at one of its prefixes.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::{trace, warn};

/// A single decoded form value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FormValue {
    Text(String),
    Map(FormData),
}

impl FormValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FormValue::Text(text) => Some(text.as_str()),
            FormValue::Map(_) => None,
        }
    }

    pub fn as_map(&self) -> Option<&FormData> {
        match self {
            FormValue::Text(_) => None,
            FormValue::Map(map) => Some(map),
        }
    }
}

impl From<&str> for FormValue {
    fn from(value: &str) -> Self {
        FormValue::Text(value.to_string())
    }
}

/// Decoded form fields, in the order their keys first appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormData {
    fields: IndexMap<String, FormValue>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a form-urlencoded string.
    ///
    /// Decoding never fails: pairs without a usable key are skipped and an
    /// undecodable body results in empty form data.
    pub fn parse(encoded: &str) -> Self {
        let pairs = match serde_urlencoded::from_str::<Vec<(String, String)>>(encoded) {
            Ok(pairs) => pairs,
            Err(e) => {
                warn!(cause = %e, "failed to decode form body");
                return Self::new();
            }
        };

        let mut data = Self::new();
        for (key, value) in pairs {
            match split_key(&key) {
                Some((name, segments)) => data.insert_path(name, &segments, value),
                None => trace!(key = %key, "skip form pair without name"),
            }
        }
        data
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&FormValue> {
        self.fields.get(key)
    }

    /// Shortcut for a top level text field.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(FormValue::as_text)
    }

    /// Sets `key` to `value`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FormValue>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FormValue)> + '_ {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }

    fn insert_path(&mut self, key: String, segments: &[String], value: String) {
        let Some((segment, rest)) = segments.split_first() else {
            self.fields.insert(key, FormValue::Text(value));
            return;
        };

        let slot = self.fields.entry(key).or_insert_with(|| FormValue::Map(FormData::new()));
        if let FormValue::Text(_) = slot {
            *slot = FormValue::Map(FormData::new());
        }
        if let FormValue::Map(child) = slot {
            let child_key = if segment.is_empty() { child.next_index() } else { segment.clone() };
            child.insert_path(child_key, rest, value);
        }
    }

    fn next_index(&self) -> String {
        self.fields
            .keys()
            .filter_map(|key| key.parse::<u64>().ok())
            .max()
            .map_or(0, |max| max + 1)
            .to_string()
    }
}

impl From<FormData> for FormValue {
    fn from(value: FormData) -> Self {
        FormValue::Map(value)
    }
}

/// Splits a form key into its top level name and bracket segments.
///
/// `.` and space in the name become `_`. An unmatched `[` right after the
/// name is kept literally as `_`, anything after the last complete segment is
/// dropped. Returns `None` when the name is empty.
fn split_key(raw: &str) -> Option<(String, Vec<String>)> {
    let key = raw.trim_start_matches(' ');
    let (base, mut rest) = match key.find('[') {
        Some(open) => key.split_at(open),
        None => (key, ""),
    };

    let mut name: String = base.chars().map(|c| if c == '.' || c == ' ' { '_' } else { c }).collect();
    let mut segments = Vec::new();

    while let Some(inner) = rest.strip_prefix('[') {
        let Some(close) = inner.find(']') else {
            if segments.is_empty() {
                name.push('_');
                name.push_str(inner);
            }
            break;
        };
        segments.push(inner[..close].to_string());
        rest = &inner[close + 1..];
    }

    (!name.is_empty()).then_some((name, segments))
}
