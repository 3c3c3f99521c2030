//! Recursive descent over the token stream.
//!
//! Every block header descends one level and every `}` returns to the
//! caller, so nesting depth equals recursion depth. The depth is capped by
//! [`ParseOptions::max_depth`] to keep adversarial input from exhausting the
//! stack.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use super::scan::{split_declaration, split_selector_list};
use super::tokenizer::{Token, Tokenizer};
use crate::node::Node;
use crate::options::ParseOptions;
use crate::ordered::{Entry, OrderedNode};
use crate::stylesheet::Stylesheet;
use crate::{Error, Result};

static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("comment pattern is valid"));

/// Parse CSS text into a stylesheet.
///
/// Malformed input never fails: stray braces and semicolons are skipped, and
/// text after the last complete token is ignored. The only error is
/// [`Error::NestingTooDeep`] when blocks nest deeper than
/// [`ParseOptions::max_depth`].
///
/// # Example
///
/// ```
/// use cssjson::{parse, ParseOptions};
///
/// let sheet = parse("a { color: red; color: blue; }", &ParseOptions::default())?;
/// let tree = sheet.as_tree().unwrap();
/// assert_eq!(tree.children["a"].attributes["color"].len(), 2);
/// # Ok::<(), cssjson::Error>(())
/// ```
pub fn parse(css: &str, options: &ParseOptions) -> Result<Stylesheet> {
    let source = if options.strip_comments {
        strip_comments(css)
    } else {
        Cow::Borrowed(css)
    };

    let mut parser = CssParser::new(&source, options);
    let sheet = if options.ordered {
        Stylesheet::Ordered(parser.parse_ordered_block(0)?)
    } else {
        Stylesheet::Tree(parser.parse_block(0)?)
    };

    tracing::debug!(
        "Parsed {} bytes of CSS ({} duplicate selectors renamed)",
        source.len(),
        parser.renamed
    );
    Ok(sheet)
}

/// Parse CSS text with default options into the keyed tree.
pub fn parse_tree(css: &str) -> Result<Node> {
    let mut parser = CssParser::new(css, &ParseOptions::default());
    parser.parse_block(0)
}

/// Remove every `/* ... */` span.
pub fn strip_comments(css: &str) -> Cow<'_, str> {
    COMMENT.replace_all(css, "")
}

/// State for one top-level parse call.
struct CssParser<'a> {
    tokens: Tokenizer<'a>,
    options: ParseOptions,
    /// Duplicate selectors renamed so far in this call.
    renamed: usize,
}

impl<'a> CssParser<'a> {
    fn new(css: &'a str, options: &ParseOptions) -> Self {
        Self {
            tokens: Tokenizer::new(css),
            options: *options,
            renamed: 0,
        }
    }

    fn enter(&self, depth: usize) -> Result<usize> {
        let depth = depth + 1;
        if depth > self.options.max_depth {
            tracing::warn!(
                "CSS nesting exceeds {} levels at byte {}",
                self.options.max_depth,
                self.tokens.position()
            );
            return Err(Error::nesting_too_deep(self.options.max_depth));
        }
        Ok(depth)
    }

    /// Parse one block of the keyed tree, up to its `}` or the end of input.
    fn parse_block(&mut self, depth: usize) -> Result<Node> {
        let mut node = Node::new();

        while let Some(token) = self.tokens.next() {
            match token {
                Token::Comment(_) => {}
                Token::Open(selector) => {
                    let child = self.parse_block(self.enter(depth)?)?;
                    self.insert_child(&mut node, selector, child);
                }
                Token::Close if depth == 0 => {
                    tracing::debug!("Skipping unmatched '}}' at byte {}", self.tokens.position());
                }
                Token::Close => break,
                Token::Declaration(text) => match split_declaration(text) {
                    Some((name, value)) => node.push_attribute(name, value),
                    None => node.statements.push(statement(text)),
                },
            }
        }

        node.move_media_last();
        Ok(node)
    }

    /// Parse one block of the ordered representation.
    fn parse_ordered_block(&mut self, depth: usize) -> Result<OrderedNode> {
        let mut node = OrderedNode::new();
        let keep_comments = self.options.keeps_comments();

        while let Some(token) = self.tokens.next() {
            match token {
                Token::Comment(text) if keep_comments => {
                    node.push(Entry::Comment(text.to_string()));
                }
                Token::Comment(_) => {}
                Token::Open(selector) => {
                    let value = self.parse_ordered_block(self.enter(depth)?)?;
                    node.push(Entry::Rule {
                        name: selector.to_string(),
                        value,
                    });
                }
                Token::Close if depth == 0 => {
                    tracing::debug!("Skipping unmatched '}}' at byte {}", self.tokens.position());
                }
                Token::Close => break,
                Token::Declaration(text) => match split_declaration(text) {
                    Some((name, value)) => node.push(Entry::Attr {
                        name: name.to_string(),
                        value: value.to_string(),
                    }),
                    None => node.push(Entry::Statement(statement(text))),
                },
            }
        }

        Ok(node)
    }

    /// Store a parsed block under its selector, or under each selector of
    /// the list when splitting.
    fn insert_child(&mut self, parent: &mut Node, selector: &str, child: Node) {
        let selectors = if self.options.split {
            split_selector_list(selector)
        } else {
            vec![selector]
        };

        let Some((last, rest)) = selectors.split_last() else {
            tracing::debug!("Dropping block with empty selector list {:?}", selector);
            return;
        };
        for name in rest {
            let key = self.unique_key(parent, name);
            parent.children.insert(key, child.clone());
        }
        let key = self.unique_key(parent, last);
        parent.children.insert(key, child);
    }

    /// Pick a key for `selector` that does not collide with an existing child.
    ///
    /// The first occurrence keeps the plain selector. Each later one at the
    /// same level gets one more trailing space than the last, so the suffix
    /// depends only on the siblings already stored in `parent`.
    fn unique_key(&mut self, parent: &Node, selector: &str) -> String {
        let mut key = selector.to_string();
        while parent.children.contains_key(&key) {
            key.push(' ');
        }
        if key.len() > selector.len() {
            tracing::trace!("Duplicate selector {:?} stored as {:?}", selector, key);
            self.renamed += 1;
        }
        key
    }
}

fn statement(text: &str) -> String {
    format!("{};", text)
}
