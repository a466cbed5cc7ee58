use serde_json::Value;

/// Decodes the `properties_image` field into a list of base64 payloads.
///
/// The field is a JSON array serialized into a string, occasionally
/// serialized a second time. Empty sentinels, blanks and anything that
/// does not decode to an array of strings yield an empty list.
pub fn parse_image_list(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw.map(str::trim) else {
        return vec![];
    };
    if raw.is_empty() || raw == "[]" || raw == r#""[]""# {
        return vec![];
    }
    let value = match serde_json::from_str::<Value>(raw) {
        Ok(Value::String(inner)) => match serde_json::from_str::<Value>(&inner) {
            Ok(value) => value,
            Err(_) => return vec![],
        },
        Ok(value) => value,
        Err(_) => return vec![],
    };
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) if !s.is_empty() => Some(s),
                _ => None,
            })
            .collect(),
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sentinels() {
        assert!(parse_image_list(None).is_empty());
        assert!(parse_image_list(Some("")).is_empty());
        assert!(parse_image_list(Some("[]")).is_empty());
        assert!(parse_image_list(Some(r#""[]""#)).is_empty());
    }

    #[test]
    fn plain_json_array() {
        let images = parse_image_list(Some(r#"["iVBORw0KGgo=","/9j/4AAQ"]"#));
        assert_eq!(images, vec!["iVBORw0KGgo=", "/9j/4AAQ"]);
    }

    #[test]
    fn double_encoded_array_is_unwrapped_once() {
        let once = serde_json::to_string(&vec!["AAAA", "BBBB"]).unwrap();
        let twice = serde_json::to_string(&once).unwrap();
        assert_eq!(parse_image_list(Some(&twice)), vec!["AAAA", "BBBB"]);
    }

    #[test]
    fn triple_encoded_array_is_not_unwrapped_further() {
        let once = serde_json::to_string(&vec!["AAAA"]).unwrap();
        let twice = serde_json::to_string(&once).unwrap();
        let thrice = serde_json::to_string(&twice).unwrap();
        assert!(parse_image_list(Some(&thrice)).is_empty());
    }

    #[test]
    fn malformed_input_degrades_to_empty_list() {
        assert!(parse_image_list(Some("[not json")).is_empty());
        assert!(parse_image_list(Some(r#"{"a":1}"#)).is_empty());
        assert!(parse_image_list(Some(r#""just a string""#)).is_empty());
        assert!(parse_image_list(Some("42")).is_empty());
    }
}
