//! Helpers shared by the response parsers.

use serde::de::{Error as _, Unexpected};
use serde_json::{Map, Value};

/// Accept only a JSON object.
///
/// serde would otherwise happily fill a struct from a JSON array by position.
pub(crate) fn into_object(value: Value) -> Result<Map<String, Value>, serde_json::Error> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(serde_json::Error::invalid_type(unexpected(&other), &"a JSON object")),
    }
}

/// Optional string field, only used for diagnostics.
pub(crate) fn title(map: &Map<String, Value>) -> Option<String> {
    map.get("title").and_then(Value::as_str).map(str::to_owned)
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn into_object_rejects_arrays() {
        let err = into_object(json!([1, 2])).unwrap_err();

        assert!(err.to_string().contains("expected a JSON object"));
    }

    #[test]
    fn title_ignores_non_strings() {
        let map = into_object(json!({ "title": 7 })).unwrap();
        assert_eq!(title(&map), None);

        let map = into_object(json!({ "title": "London" })).unwrap();
        assert_eq!(title(&map).as_deref(), Some("London"));
    }
}
