//! Recursive empty-value removal, the final normalization pass on every
//! generated document.

use serde_json::{Map, Value};

/// Drop object keys and array elements whose pruned value is null, `""`,
/// `[]` or `{}`. Other falsy scalars (`0`, `false`) pass through. Idempotent.
pub fn prune(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut out = Map::new();
            for (key, v) in map {
                let v = prune(v);
                if !is_empty(&v) {
                    out.insert(key, v);
                }
            }
            Value::Object(out)
        }
        Value::Array(items) => {
            Value::Array(items.into_iter().map(prune).filter(|v| !is_empty(v)).collect())
        }
        scalar => scalar,
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(m) => m.is_empty(),
        _ => false,
    }
}
