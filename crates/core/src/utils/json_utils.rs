use serde_json::Value;

/// Checks if a given JSON value is an empty object.
/// Arrays, scalars, and null are never considered empty objects.
pub fn is_empty_object(value: &Value) -> bool {
    matches!(value, Value::Object(map) if map.is_empty())
}
