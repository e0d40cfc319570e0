//! Registry to JSON conversion.

use serde_json::{Map, Number, Value};

use crate::types::{Entry, PropertyValue, Registry};

/// Converts one entry to a JSON object, property order preserved.
///
/// String properties become JSON strings, u32 properties JSON numbers.
pub fn entry_to_json(entry: &Entry) -> Value {
    let mut map = Map::new();
    for (name, value) in entry.iter() {
        let json = match value {
            PropertyValue::Str(s) => Value::String(s.clone()),
            PropertyValue::U32(n) => Value::Number(Number::from(*n)),
        };
        map.insert(name.to_string(), json);
    }
    Value::Object(map)
}

/// Converts a registry to a JSON object keyed by entry index, entry order
/// preserved.
pub fn registry_to_json(registry: &Registry) -> Value {
    let mut map = Map::new();
    for (index, entry) in registry.iter() {
        map.insert(index.to_string(), entry_to_json(entry));
    }
    Value::Object(map)
}
