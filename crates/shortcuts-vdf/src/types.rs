//! Decoded registry data model.

use std::borrow::Cow;
use std::fmt;

use indexmap::IndexMap;

/// A single typed property value.
///
/// Only the two materialized wire types appear here; nested objects are
/// skipped during decoding and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    /// Null-terminated string property (tag 0x01).
    Str(String),
    /// Little-endian unsigned 32-bit property (tag 0x02).
    U32(u32),
}

impl PropertyValue {
    /// The string value, if this is a string property.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::Str(s) => Some(s),
            PropertyValue::U32(_) => None,
        }
    }

    /// The integer value, if this is a u32 property.
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            PropertyValue::Str(_) => None,
            PropertyValue::U32(n) => Some(*n),
        }
    }

    /// Text rendering of the value: strings as-is, integers in decimal.
    ///
    /// ```
    /// use shortcuts_vdf::PropertyValue;
    ///
    /// assert_eq!(PropertyValue::U32(12345).as_text(), "12345");
    /// assert_eq!(PropertyValue::Str("Portal".into()).as_text(), "Portal");
    /// ```
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            PropertyValue::Str(s) => Cow::Borrowed(s.as_str()),
            PropertyValue::U32(n) => Cow::Owned(n.to_string()),
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Str(s) => f.write_str(s),
            PropertyValue::U32(n) => write!(f, "{n}"),
        }
    }
}

/// One decoded shortcut entry: property name → value, in wire order.
///
/// Property names (`AppName`, `Exe`, `appid`, …) are opaque to the decoder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    /// name → value, in insertion order.
    pub properties: IndexMap<String, PropertyValue>,
}

impl Entry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a property. A repeated name overwrites the earlier value while
    /// keeping its original position.
    pub fn insert(&mut self, name: impl Into<String>, value: PropertyValue) {
        self.properties.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// The decoded top-level registry: entry index → entry, in wire order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    /// index string ("0", "1", …) → entry, in insertion order.
    pub entries: IndexMap<String, Entry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry. A repeated index overwrites the earlier entry while
    /// keeping its original position (last write wins).
    pub fn insert(&mut self, index: impl Into<String>, entry: Entry) {
        self.entries.insert(index.into(), entry);
    }

    pub fn get(&self, index: &str) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}
