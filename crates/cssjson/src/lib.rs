//! Convert CSS stylesheets to a keyed tree and back.
//!
//! This crate turns stylesheet text into a small tree that tools can inspect
//! or rewrite without a full CSS grammar, and writes such trees back out:
//!
//! - **Parsing**: selectors, declarations, comments and nested at-rules
//! - **Keyed tree**: declarations and child blocks addressable by name
//! - **Ordered mode**: exact source order, comments and duplicates included
//! - **Serialization**: CSS text from any tree, plus a JSON form
//!
//! The parser is permissive. Malformed input produces a best-effort tree
//! rather than an error.
//!
//! # Example
//!
//! ```
//! use cssjson::prelude::*;
//!
//! let css = ".a { color: red; } @media print { .a { color: black; } } .b { margin: 0; }";
//! let mut root = parse_tree(css)?;
//!
//! // Media blocks always come after ordinary rules.
//! let selectors: Vec<_> = root.selectors().collect();
//! assert_eq!(selectors, [".a", ".b", "@media print"]);
//!
//! root.children.get_mut(".b").unwrap().push_attribute("padding", "1em");
//! let text = to_css(&root, 0, false);
//! assert!(text.contains("\tpadding: 1em;\n"));
//! # Ok::<(), cssjson::Error>(())
//! ```

pub mod json;
pub mod node;
pub mod options;
pub mod ordered;
pub mod parser;
pub mod serializer;
pub mod stylesheet;

mod error;

pub use error::{Error, Result};
pub use node::{AttributeValue, Node};
pub use options::ParseOptions;
pub use ordered::{Entry, OrderedNode};
pub use parser::{parse, parse_tree};
pub use serializer::{ordered_to_css, to_css};
pub use stylesheet::Stylesheet;

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::node::{AttributeValue, Node};
    pub use crate::options::ParseOptions;
    pub use crate::ordered::{Entry, OrderedNode};
    pub use crate::parser::{parse, parse_tree};
    pub use crate::serializer::{ordered_to_css, to_css};
    pub use crate::stylesheet::Stylesheet;
}
