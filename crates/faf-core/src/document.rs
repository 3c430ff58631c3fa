//! Document access - Safe path walking and filledness checks
//!
//! Documents arrive already decoded as `serde_json::Value`. Nothing here
//! panics on shape: a missing key or a scalar where a mapping was expected just
//! means "absent".

use serde_json::Value;

/// Walk `document` along a dotted path such as `stack.database`.
///
/// Returns `None` if any segment is missing or an intermediate value is not a
/// mapping.
pub fn lookup<'a>(document: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(document, |current, segment| current.as_object()?.get(segment))
}

/// Whether a present value counts as filled.
///
/// Null, blank strings, empty sequences and empty mappings are empty. Anything
/// else is filled, including `false` and `0`; the value's meaning is not judged.
pub fn has_content(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        Value::Bool(_) | Value::Number(_) => true,
    }
}

/// Whether the slot at `path` holds a non-empty value
pub fn is_filled(document: &Value, path: &str) -> bool {
    lookup(document, path).is_some_and(has_content)
}
