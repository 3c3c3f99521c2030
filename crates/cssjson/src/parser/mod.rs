//! CSS text to tree parsing.

mod css_parser;
mod scan;
pub mod tokenizer;

pub use css_parser::{parse, parse_tree, strip_comments};
pub use tokenizer::{Token, Tokenizer};
