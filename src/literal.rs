//! Java literal rendering for scalar and list values.
use serde_json::Number;
use thiserror::Error;

use crate::ir::{Scalar, SchemaNode};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("lists may only contain scalars, found an object")]
    ObjectInList,

    #[error("lists may only contain scalars, found a nested list")]
    ListInList,

    #[error("integer {0} does not fit in a Java long")]
    IntegerOutOfRange(Number),
}

pub fn render_scalar(scalar: &Scalar) -> Result<String, RenderError> {
    match scalar {
        Scalar::Null => Ok("null".to_string()),
        Scalar::Bool(b) => Ok(b.to_string()),
        Scalar::Number(n) => render_number(n),
        Scalar::String(s) => Ok(render_string(s)),
    }
}

/// `Arrays.asList(e1, e2, ...)` with elements in input order.
pub fn render_list(items: &[Scalar]) -> Result<String, RenderError> {
    let elems = items
        .iter()
        .map(render_scalar)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(format!("Arrays.asList({})", elems.join(", ")))
}

/// Literal form of a node, or `None` for nested objects which have none.
pub fn render_node(node: &SchemaNode) -> Result<Option<String>, RenderError> {
    match node {
        SchemaNode::Scalar(s) => render_scalar(s).map(Some),
        SchemaNode::List(xs) => render_list(xs).map(Some),
        SchemaNode::Nested(_) => Ok(None),
    }
}

fn render_number(n: &Number) -> Result<String, RenderError> {
    if let Some(i) = n.as_i64() {
        if i32::try_from(i).is_ok() {
            Ok(i.to_string())
        } else {
            Ok(format!("{i}L"))
        }
    } else if n.is_u64() {
        Err(RenderError::IntegerOutOfRange(n.clone()))
    } else {
        // finite f64; serde_json prints the shortest round-trip form
        Ok(n.to_string())
    }
}

/// Double-quoted Java string literal.
///
/// Control characters without a named escape use octal escapes; `\uXXXX`
/// would be translated before lexing and could end the literal early.
pub fn render_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 || c == '\u{7f}' => {
                out.push_str(&format!("\\{:03o}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
