//! Classify parsed JSON into the schema tree.
//!
//! Every value is matched once, exhaustively, before any generation happens:
//! arrays become `List`, objects become `Nested`, everything else is a `Scalar`.
//! Arrays may only hold scalars.
use serde_json::{Map, Value};

use crate::error::GenError;
use crate::ir::{self, Nested, Scalar, SchemaNode};
use crate::literal::RenderError;

/// Parse a schema document and lower its top-level object.
pub fn parse_document(src: &str) -> Result<Nested, GenError> {
    match crate::path_de::from_str_with_path::<Value>(src)? {
        Value::Object(map) => lower_document(map),
        _ => Err(GenError::Parse("top-level value must be an object".to_string())),
    }
}

/// Lower the top-level mapping of a document.
pub fn lower_document(root: Map<String, Value>) -> Result<Nested, GenError> {
    lower_fields(root, ir::ROOT_PATH)
}

pub fn lower_value(value: Value, path: &str) -> Result<SchemaNode, GenError> {
    match value {
        Value::Null => Ok(SchemaNode::Scalar(Scalar::Null)),
        Value::Bool(b) => Ok(SchemaNode::Scalar(Scalar::Bool(b))),
        Value::Number(n) => Ok(SchemaNode::Scalar(Scalar::Number(n))),
        Value::String(s) => Ok(SchemaNode::Scalar(Scalar::String(s))),
        Value::Array(xs) => lower_list(xs, path).map(SchemaNode::List),
        Value::Object(map) => lower_object(map, path).map(SchemaNode::Nested),
    }
}

fn lower_list(xs: Vec<Value>, path: &str) -> Result<Vec<Scalar>, GenError> {
    xs.into_iter()
        .enumerate()
        .map(|(i, el)| match el {
            Value::Null => Ok(Scalar::Null),
            Value::Bool(b) => Ok(Scalar::Bool(b)),
            Value::Number(n) => Ok(Scalar::Number(n)),
            Value::String(s) => Ok(Scalar::String(s)),
            Value::Array(_) => Err(GenError::render(&ir::index_path(path, i), RenderError::ListInList)),
            Value::Object(_) => Err(GenError::render(&ir::index_path(path, i), RenderError::ObjectInList)),
        })
        .collect()
}

fn lower_object(map: Map<String, Value>, path: &str) -> Result<Nested, GenError> {
    lower_fields(map, path)
}

fn lower_fields<I>(fields: I, path: &str) -> Result<Nested, GenError>
where
    I: IntoIterator<Item = (String, Value)>,
{
    let mut out = Nested::default();
    for (key, value) in fields {
        let node = lower_value(value, &ir::field_path(path, &key))?;
        out.fields.insert(key, node);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn lower(v: Value) -> Result<Nested, GenError> {
        let Value::Object(map) = v else { panic!("fixture must be an object") };
        lower_document(map.into_iter().collect())
    }

    #[test]
    fn classifies_each_kind() {
        let root = lower(json!({
            "name": "Alice",
            "tags": ["a", "b"],
            "address": {"city": "NYC"}
        }))
        .unwrap();

        assert!(matches!(root.fields["name"], SchemaNode::Scalar(Scalar::String(ref s)) if s == "Alice"));
        assert!(matches!(root.fields["tags"], SchemaNode::List(ref xs) if xs.len() == 2));
        assert!(matches!(root.fields["address"], SchemaNode::Nested(ref n) if n.fields.len() == 1));
    }

    #[test]
    fn preserves_insertion_order_at_every_depth() {
        let root = lower(json!({
            "zeta": 1,
            "alpha": {"z": 1, "m": 2, "a": 3},
            "mid": true
        }))
        .unwrap();

        let keys: Vec<&str> = root.fields.keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);

        let SchemaNode::Nested(alpha) = &root.fields["alpha"] else { panic!("alpha is nested") };
        let keys: Vec<&str> = alpha.fields.keys().map(String::as_str).collect();
        assert_eq!(keys, ["z", "m", "a"]);
    }

    #[test]
    fn empty_array_is_a_list_and_empty_object_is_nested() {
        let root = lower(json!({"xs": [], "o": {}})).unwrap();
        assert_eq!(root.fields["xs"], SchemaNode::List(vec![]));
        assert_eq!(root.fields["o"], SchemaNode::Nested(Nested::default()));
    }

    #[test]
    fn objects_inside_lists_are_rejected_with_their_path() {
        let err = lower(json!({"outer": {"items": [1, {"x": 1}]}})).unwrap_err();
        match err {
            GenError::Render { path, source } => {
                assert_eq!(path, "$.outer.items[1]");
                assert!(matches!(source, RenderError::ObjectInList));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn parse_document_keeps_source_order() {
        let root = parse_document(r#"{"b": 1, "a": {"z": 2, "y": 3}}"#).unwrap();
        let keys: Vec<&str> = root.fields.keys().map(String::as_str).collect();
        assert_eq!(keys, ["b", "a"]);
    }

    #[test]
    fn parse_document_requires_a_top_level_object() {
        for src in ["[1, 2]", "\"text\"", "42", "null"] {
            let err = parse_document(src).unwrap_err();
            assert!(
                matches!(err, GenError::Parse(ref msg) if msg == "top-level value must be an object"),
                "{src}: {err}"
            );
        }
    }

    #[test]
    fn parse_document_reports_malformed_json() {
        assert!(matches!(parse_document(r#"{"a": }"#), Err(GenError::Parse(_))));
    }

    #[test]
    fn lists_inside_lists_are_rejected() {
        let err = lower(json!({"grid": [[1, 2]]})).unwrap_err();
        assert!(matches!(err, GenError::Render { source: RenderError::ListInList, .. }));
    }
}
