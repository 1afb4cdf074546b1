//! Depth-first key lookup over heterogeneous JSON documents.

use serde_json::Value;

/// Return the first value stored under `key` anywhere in `data`.
///
/// Objects are checked for a direct hit before their members are searched, so a key
/// at a shallow level wins over the same key deeper down. Members are visited in map
/// order; arrays element by element. Hits found below the current level that are
/// falsy (null, false, 0, "", [] or {}) are passed over and the search continues.
pub fn find_deep<'a>(data: &'a Value, key: &str) -> Option<&'a Value> {
    match data {
        Value::Object(map) => {
            if let Some(v) = map.get(key) {
                return Some(v);
            }
            map.values().find_map(|v| match v {
                Value::Object(_) => nested_hit(v, key),
                Value::Array(items) => items.iter().find_map(|elem| nested_hit(elem, key)),
                _ => None,
            })
        }
        Value::Array(items) => items.iter().find_map(|elem| nested_hit(elem, key)),
        _ => None,
    }
}

fn nested_hit<'a>(data: &'a Value, key: &str) -> Option<&'a Value> {
    find_deep(data, key).filter(|v| is_truthy(v))
}

/// Truthiness of a JSON value: everything except null, false, zero and empty containers.
pub fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|x| x != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
