use crate::error::Result;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Pretty JSON with sorted object keys and 2-space indentation.
///
/// Output is byte-stable for equal inputs.
pub fn to_sorted_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let value = sorted(serde_json::to_value(value)?);
    Ok(serde_json::to_string_pretty(&value)?)
}

// Rebuild objects from sorted entries; struct fields otherwise keep
// declaration order when serde_json is built with `preserve_order`.
fn sorted(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let entries: BTreeMap<String, Value> =
                map.into_iter().map(|(k, v)| (k, sorted(v))).collect();
            Value::Object(entries.into_iter().collect())
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sorted).collect()),
        other => other,
    }
}
