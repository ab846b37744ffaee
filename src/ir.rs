// Strongly-typed schema tree for generation. No serde_json::Value here.

use indexmap::IndexMap;
use serde_json::Number;

/// JSON path of the document root, used as the prefix in error messages.
pub const ROOT_PATH: &str = "$";

#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    Scalar(Scalar),
    List(Vec<Scalar>),       // elements in input order
    Nested(Nested),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Nested {
    pub fields: IndexMap<String, SchemaNode>, // insertion order of the source mapping
}

/// `$.address.city`, or `$["first-name"]` when the key is not a plain word.
pub fn field_path(parent: &str, key: &str) -> String {
    let plain = !key.is_empty()
        && key.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '$');
    if plain {
        format!("{parent}.{key}")
    } else {
        format!("{parent}[{key:?}]")
    }
}

pub fn index_path(parent: &str, index: usize) -> String {
    format!("{parent}[{index}]")
}
