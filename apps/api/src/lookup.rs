//! Alias-table lookups over untyped JSON records.
//!
//! Upstream providers (the scraping service, the generative model) rename fields freely.
//! Every typed field we read is described by an [`Aliases`] entry: the canonical key plus
//! the ordered alternates observed in the wild. Readers consult the table through the
//! helpers below and never branch on key names inline.

use serde_json::{Map, Value};

/// A canonical field name and the alternate keys tried after it, in order.
#[derive(Debug, Clone, Copy)]
pub struct Aliases {
    pub canonical: &'static str,
    pub alternates: &'static [&'static str],
}

impl Aliases {
    pub const fn new(canonical: &'static str, alternates: &'static [&'static str]) -> Self {
        Self {
            canonical,
            alternates,
        }
    }

    /// Canonical key first, then alternates.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.canonical).chain(self.alternates.iter().copied())
    }
}

pub type Record = Map<String, Value>;

/// Returns the first value under any alias key that `convert` accepts.
///
/// A key that is present but holds an unusable value (null, blank string, wrong type)
/// does not stop the search; the next alternate is tried.
pub fn first_present<T>(
    record: &Record,
    aliases: &Aliases,
    convert: impl Fn(&Value) -> Option<T>,
) -> Option<T> {
    aliases
        .keys()
        .filter_map(|key| record.get(key))
        .find_map(convert)
}

/// First non-blank scalar under any alias, trimmed.
pub fn string_field(record: &Record, aliases: &Aliases) -> Option<String> {
    first_present(record, aliases, as_text)
}

/// First record-valued entry under any alias.
pub fn record_field<'a>(record: &'a Record, aliases: &Aliases) -> Option<&'a Record> {
    aliases
        .keys()
        .filter_map(|key| record.get(key))
        .find_map(Value::as_object)
}

/// First non-empty array under any alias.
pub fn list_field<'a>(record: &'a Record, aliases: &Aliases) -> Option<&'a Vec<Value>> {
    aliases
        .keys()
        .filter_map(|key| record.get(key))
        .filter_map(Value::as_array)
        .find(|items| !items.is_empty())
}

/// First non-empty list of strings under any alias. Non-scalar items are skipped.
pub fn string_list_field(record: &Record, aliases: &Aliases) -> Option<Vec<String>> {
    first_present(record, aliases, |value| {
        let items: Vec<String> = value.as_array()?.iter().filter_map(as_text).collect();
        (!items.is_empty()).then_some(items)
    })
}

/// Scalar JSON → trimmed, non-blank string. Numbers and booleans are stringified
/// (models emit `"date": 2021` as often as `"date": "2021"`).
pub fn as_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}
