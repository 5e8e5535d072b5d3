//! Deep merge of `$` values into a node's property bag
//!
//! Properties bypass attribute serialization entirely: `{$: {style: {color: "grey"}}}`
//! ends up as `properties.style.color == "grey"` and never as a `style` attribute.

use dom::Properties;
use serde_json::{Map, Number, Value as JsonValue};

use crate::error::{MakeError, Result};
use crate::value::Value;

/// Merge every leaf of `src` into `dst`
///
/// Recursion happens only when the source value is a mapping; the destination
/// slot is turned into an object first if it holds anything else. All other
/// source values overwrite. A non-mapping `src` is ignored.
pub fn merge_properties(dst: &mut Properties, src: &Value) -> Result<()> {
    merge_into(dst, src, "$")
}

fn merge_into(dst: &mut Map<String, JsonValue>, src: &Value, path: &str) -> Result<()> {
    let entries: Box<dyn Iterator<Item = (&String, &Value)> + '_> = match src {
        Value::Object(map) => Box::new(map.iter()),
        Value::Map(map) => Box::new(map.iter()),
        _ => return Ok(()),
    };

    for (key, value) in entries {
        let path = format!("{}.{}", path, key);

        if value.is_mapping() {
            let slot = dst
                .entry(key.clone())
                .or_insert_with(|| JsonValue::Object(Map::new()));
            if !slot.is_object() {
                *slot = JsonValue::Object(Map::new());
            }
            if let JsonValue::Object(inner) = slot {
                merge_into(inner, value, &path)?;
            }
        } else {
            dst.insert(key.clone(), to_json(value, &path)?);
        }
    }

    Ok(())
}

/// Convert a leaf into a property value
fn to_json(value: &Value, path: &str) -> Result<JsonValue> {
    Ok(match value {
        Value::Undefined | Value::Null => JsonValue::Null,
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::Number(n) => number_to_json(*n),
        Value::String(s) => JsonValue::String(s.clone()),
        Value::List(items) => JsonValue::Array(
            items
                .iter()
                .enumerate()
                .map(|(i, item)| to_json(item, &format!("{}[{}]", path, i)))
                .collect::<Result<Vec<_>>>()?,
        ),
        Value::Object(_) | Value::Map(_) => {
            let mut map = Map::new();
            merge_into(&mut map, value, path)?;
            JsonValue::Object(map)
        }
        Value::Node(_) | Value::Component(_) => {
            return Err(MakeError::UnsupportedPropertyValue {
                path: path.to_string(),
            })
        }
    })
}

/// Integral values stay integers; NaN and infinities have no JSON form
fn number_to_json(n: f64) -> JsonValue {
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        JsonValue::Number(Number::from(n as i64))
    } else {
        Number::from_f64(n).map_or(JsonValue::Null, JsonValue::Number)
    }
}
