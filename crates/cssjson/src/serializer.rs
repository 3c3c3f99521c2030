//! Tree to CSS text.
//!
//! Output is driven purely by the shape of the tree. Each declaration gets its
//! own line, blocks open with `selector {` and close with `}`, and every
//! nesting level is indented by one tab.

use crate::node::Node;
use crate::ordered::{Entry, OrderedNode};

const INDENT: &str = "\t";

/// Serialize a keyed tree.
///
/// `depth` sets the indentation of the top level. With `breaks`, a blank line
/// separates the child blocks of `node` itself. Nested levels are written
/// without breaks.
///
/// # Example
///
/// ```
/// let root = cssjson::parse_tree("a { color: red; }")?;
/// assert_eq!(cssjson::to_css(&root, 0, false), "a {\n\tcolor: red;\n}\n");
/// # Ok::<(), cssjson::Error>(())
/// ```
pub fn to_css(node: &Node, depth: usize, breaks: bool) -> String {
    let mut out = String::new();
    write_node(node, depth, breaks, &mut out);
    out
}

/// Serialize an ordered tree, comments and statements included.
pub fn ordered_to_css(node: &OrderedNode, depth: usize, breaks: bool) -> String {
    let mut out = String::new();
    write_ordered(node, depth, breaks, &mut out);
    out
}

fn write_node(node: &Node, depth: usize, breaks: bool, out: &mut String) {
    for statement in &node.statements {
        write_line(statement, depth, out);
    }

    for (name, value) in &node.attributes {
        for value in value.iter() {
            write_declaration(name, value, depth, out);
        }
    }

    for (index, (selector, child)) in node.children.iter().enumerate() {
        if breaks && index > 0 {
            out.push('\n');
        }
        write_open(selector, depth, out);
        write_node(child, depth + 1, false, out);
        write_close(depth, out);
    }
}

fn write_ordered(node: &OrderedNode, depth: usize, breaks: bool, out: &mut String) {
    let mut first_rule = true;
    for entry in &node.entries {
        match entry {
            Entry::Comment(text) | Entry::Statement(text) => write_line(text, depth, out),
            Entry::Attr { name, value } => write_declaration(name, value, depth, out),
            Entry::Rule { name, value } => {
                if breaks && !first_rule {
                    out.push('\n');
                }
                first_rule = false;
                write_open(name, depth, out);
                write_ordered(value, depth + 1, false, out);
                write_close(depth, out);
            }
        }
    }
}

fn indent(depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

fn write_line(text: &str, depth: usize, out: &mut String) {
    indent(depth, out);
    out.push_str(text);
    out.push('\n');
}

fn write_declaration(name: &str, value: &str, depth: usize, out: &mut String) {
    indent(depth, out);
    out.push_str(name);
    out.push_str(": ");
    out.push_str(value);
    out.push_str(";\n");
}

fn write_open(selector: &str, depth: usize, out: &mut String) {
    indent(depth, out);
    out.push_str(selector);
    out.push_str(" {\n");
}

fn write_close(depth: usize, out: &mut String) {
    indent(depth, out);
    out.push_str("}\n");
}
