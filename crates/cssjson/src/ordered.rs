//! Ordered stylesheet representation.
//!
//! The keyed [`Node`](crate::Node) tree cannot express arbitrary interleaving
//! of comments, declarations and rules, nor true duplicates. An
//! [`OrderedNode`] trades keyed lookup for exact source order.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// One slot of an ordered block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A comment, delimiters included.
    Comment(String),
    /// A nested block.
    Rule { name: String, value: OrderedNode },
    /// A `name: value` declaration.
    Attr { name: String, value: String },
    /// A semicolon terminated line without a property name.
    Statement(String),
}

impl Entry {
    /// The rule or declaration name, if the entry has one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Rule { name, .. } | Self::Attr { name, .. } => Some(name),
            Self::Comment(_) | Self::Statement(_) => None,
        }
    }

    /// Whether this is a nested block.
    pub fn is_rule(&self) -> bool {
        matches!(self, Self::Rule { .. })
    }
}

/// A block whose content is kept in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedNode {
    /// Slots in the order they appeared.
    pub entries: Vec<Entry>,
}

impl OrderedNode {
    /// Create an empty node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a slot.
    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no slots.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over slots.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Nested blocks only.
    pub fn rules(&self) -> impl Iterator<Item = (&str, &OrderedNode)> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Rule { name, value } => Some((name.as_str(), value)),
            _ => None,
        })
    }
}

impl fmt::Display for OrderedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::serializer::ordered_to_css(self, 0, false))
    }
}

// Rules and declarations both carry a name and a value, so the JSON form
// tags them with "type".
impl Serialize for Entry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Comment(text) | Self::Statement(text) => serializer.serialize_str(text),
            Self::Rule { name, value } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("name", name)?;
                map.serialize_entry("value", value)?;
                map.serialize_entry("type", "rule")?;
                map.end()
            }
            Self::Attr { name, value } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("name", name)?;
                map.serialize_entry("value", value)?;
                map.serialize_entry("type", "attr")?;
                map.end()
            }
        }
    }
}

// Slots are keyed by their position: {"0": ..., "1": ...}.
impl Serialize for OrderedNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (index, entry) in self.entries.iter().enumerate() {
            map.serialize_entry(&index.to_string(), entry)?;
        }
        map.end()
    }
}
