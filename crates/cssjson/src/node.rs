//! Keyed stylesheet tree.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Value of a declaration at one nesting level.
///
/// A name declared once holds a single value. Declaring it again at the same
/// level promotes it to a list in encounter order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// The name appeared once.
    Single(String),
    /// The name appeared several times.
    Multiple(Vec<String>),
}

impl AttributeValue {
    /// Append another value, promoting a single value to a list.
    pub fn push(&mut self, value: impl Into<String>) {
        let value = value.into();
        match self {
            Self::Single(first) => {
                let first = std::mem::take(first);
                *self = Self::Multiple(vec![first, value]);
            }
            Self::Multiple(values) => values.push(value),
        }
    }

    /// Iterate over every value in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let values: &[String] = match self {
            Self::Single(value) => std::slice::from_ref(value),
            Self::Multiple(values) => values,
        };
        values.iter().map(String::as_str)
    }

    /// The most recent value, which is the one CSS would apply.
    pub fn last(&self) -> Option<&str> {
        self.iter().last()
    }

    /// The value if it was declared exactly once.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(value) => Some(value),
            Self::Multiple(_) => None,
        }
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Multiple(values) => values.len(),
        }
    }

    /// Whether no value is stored. Only possible for a deserialized empty list.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<String>> for AttributeValue {
    fn from(values: Vec<String>) -> Self {
        Self::Multiple(values)
    }
}

impl PartialEq<&str> for AttributeValue {
    fn eq(&self, other: &&str) -> bool {
        self.as_single() == Some(*other)
    }
}

impl PartialEq<[&str]> for AttributeValue {
    fn eq(&self, other: &[&str]) -> bool {
        match self {
            Self::Multiple(values) => values.iter().map(String::as_str).eq(other.iter().copied()),
            Self::Single(_) => false,
        }
    }
}

/// One block of a stylesheet: its declarations and its nested rules.
///
/// Both maps keep insertion order. Child keys are selector or at-rule
/// headers. A selector repeated at the same level is stored under a key with
/// trailing spaces appended (`".a"`, `".a "`, ...) and keeps only its own
/// block's content. The blocks are not merged the way the cascade would.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Node {
    /// Nested rule blocks keyed by selector.
    pub children: IndexMap<String, Node>,
    /// Declarations keyed by property name.
    pub attributes: IndexMap<String, AttributeValue>,
    /// Semicolon terminated lines without a property name, such as `@import`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub statements: Vec<String>,
}

impl Node {
    /// Create an empty node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a declaration, promoting repeated names to a list.
    pub fn push_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.get_mut(&name) {
            Some(existing) => existing.push(value),
            None => {
                self.attributes.insert(name, AttributeValue::Single(value));
            }
        }
    }

    /// Look up a declaration.
    pub fn attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(name)
    }

    /// Look up a nested block.
    pub fn child(&self, selector: &str) -> Option<&Node> {
        self.children.get(selector)
    }

    /// Selector keys in order.
    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        self.children.keys().map(String::as_str)
    }

    /// Whether the node holds nothing.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.attributes.is_empty() && self.statements.is_empty()
    }

    /// Move `@media` blocks after every other child, keeping both groups in order.
    pub fn move_media_last(&mut self) {
        if !self.children.keys().any(|key| is_media_query(key)) {
            return;
        }
        let (mut rules, media): (IndexMap<_, _>, IndexMap<_, _>) =
            std::mem::take(&mut self.children)
                .into_iter()
                .partition(|(key, _)| !is_media_query(key));
        rules.extend(media);
        self.children = rules;
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::serializer::to_css(self, 0, false))
    }
}

/// Whether a selector key is a media query block.
pub fn is_media_query(selector: &str) -> bool {
    selector
        .get(..6)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("@media"))
}
