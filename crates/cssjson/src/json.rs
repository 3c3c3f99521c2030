//! JSON form of parsed stylesheets.
//!
//! The keyed tree serializes as `{"children": {...}, "attributes": {...}}`,
//! with repeated declarations as arrays. The ordered tree serializes as an
//! object keyed `"0"`, `"1"`, ... whose rule and declaration slots carry a
//! `"type"` of `"rule"` or `"attr"`.
//!
//! # Example
//!
//! ```
//! use cssjson::json::{from_json, to_json};
//! use cssjson::{parse, ParseOptions};
//!
//! let sheet = parse("a { color: red; }", &ParseOptions::default())?;
//! let text = to_json(&sheet)?;
//! assert_eq!(text, r#"{"children":{"a":{"children":{},"attributes":{"color":"red"}}},"attributes":{}}"#);
//!
//! let node = from_json(&text)?;
//! assert_eq!(Some(&node), sheet.as_tree());
//! # Ok::<(), cssjson::Error>(())
//! ```

use serde::Deserialize;
use serde_json::Value;

use crate::node::Node;
use crate::stylesheet::Stylesheet;
use crate::{Error, Result};

/// Serialize a stylesheet to compact JSON.
pub fn to_json(sheet: &Stylesheet) -> Result<String> {
    Ok(serde_json::to_string(sheet)?)
}

/// Serialize a stylesheet to indented JSON.
pub fn to_json_pretty(sheet: &Stylesheet) -> Result<String> {
    Ok(serde_json::to_string_pretty(sheet)?)
}

/// Read a keyed tree from JSON text.
pub fn from_json(json: &str) -> Result<Node> {
    let value: Value = serde_json::from_str(json)?;
    node_from_value(&value)
}

/// Read a keyed tree from a JSON value.
///
/// Every level must be an object holding `attributes` or `children`.
/// Anything else fails with [`Error::NotANode`] naming the offending path.
pub fn node_from_value(value: &Value) -> Result<Node> {
    check_node(value, "$")?;
    Ok(Node::deserialize(value)?)
}

/// Serialize a JSON tree straight to CSS.
pub fn json_to_css(json: &str, depth: usize, breaks: bool) -> Result<String> {
    let node = from_json(json)?;
    Ok(crate::serializer::to_css(&node, depth, breaks))
}

fn check_node(value: &Value, path: &str) -> Result<()> {
    let Some(object) = value.as_object() else {
        return Err(Error::not_a_node(path));
    };
    if !object.contains_key("attributes") && !object.contains_key("children") {
        return Err(Error::not_a_node(path));
    }
    if let Some(children) = object.get("children") {
        let Some(children) = children.as_object() else {
            return Err(Error::not_a_node(format!("{path}.children")));
        };
        for (selector, child) in children {
            check_node(child, &format!("{path}.children[{selector:?}]"))?;
        }
    }
    Ok(())
}
