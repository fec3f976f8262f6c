//! Lenient decoding for browser-submitted JSON fields.
//!
//! Form payloads come from client scripts, so a boolean may arrive as `1` or
//! `"on"` and a zip code as a number. These helpers accept that input instead
//! of rejecting the whole body.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Truthiness of a JSON value: `false`, `null`, `0`, `NaN` and `""` are falsy,
/// everything else (including empty arrays and objects) is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Render a JSON value as text. `null` is absent.
pub fn value_to_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

/// `deserialize_with` helper for flags evaluated by truthiness
pub fn deserialize_truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(is_truthy(&value))
}

/// `deserialize_with` helper for required text fields.
///
/// Falsy values (`false`, `0`, `""`) count as missing; anything else is
/// rendered as text.
pub fn deserialize_required_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if !is_truthy(&value) {
        return Ok(None);
    }
    Ok(value_to_text(value))
}

/// `deserialize_with` helper for text fields that tolerates numbers and booleans
pub fn deserialize_lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_text(value))
}
