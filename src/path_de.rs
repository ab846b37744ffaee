use serde::de::DeserializeOwned;

use crate::error::GenError;

/// Deserialize with JSON-path context in error messages.
pub fn from_str_with_path<T: DeserializeOwned>(src: &str) -> Result<T, GenError> {
    let mut de = serde_json::Deserializer::from_str(src);
    let value = serde_path_to_error::deserialize::<_, T>(&mut de).map_err(|err| {
        let path = err.path().to_string();
        GenError::Parse(format!("at JSON path {path} → {}", err.into_inner()))
    })?;
    // trailing characters after the document
    de.end().map_err(|err| GenError::Parse(err.to_string()))?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, Value};

    type Document = Map<String, Value>;

    #[test]
    fn reads_a_top_level_object_in_order() {
        let doc: Document = from_str_with_path(r#"{"b": 1, "a": {"z": 2, "y": 3}}"#).unwrap();
        assert_eq!(doc.keys().collect::<Vec<_>>(), ["b", "a"]);
        let inner = doc["a"].as_object().unwrap();
        assert_eq!(inner.keys().collect::<Vec<_>>(), ["z", "y"]);
    }

    #[test]
    fn non_object_documents_are_parse_errors() {
        let err = from_str_with_path::<Document>("[1, 2]").unwrap_err();
        assert!(matches!(err, GenError::Parse(ref msg) if msg.contains("expected a map")));
    }

    #[test]
    fn malformed_documents_are_parse_errors() {
        assert!(matches!(from_str_with_path::<Document>(r#"{"a": }"#), Err(GenError::Parse(_))));
        assert!(matches!(from_str_with_path::<Document>(r#"{"a": 1} {"#), Err(GenError::Parse(_))));
        assert!(matches!(from_str_with_path::<Document>(""), Err(GenError::Parse(_))));
    }
}
