//! Parser configuration.

use serde::{Deserialize, Serialize};

use crate::Result;

/// Default limit on block nesting.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Options controlling how CSS text is turned into a tree.
///
/// Deserializes from the same camelCase keys the JavaScript converter used,
/// so `{"ordered": true, "stripComments": true}` is a valid configuration.
/// Missing keys take their default values.
///
/// # Example
///
/// ```
/// use cssjson::ParseOptions;
///
/// let options = ParseOptions::new().ordered(true).comments(true);
/// assert!(options.keeps_comments());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParseOptions {
    /// Produce the ordered representation instead of the keyed tree.
    pub ordered: bool,
    /// Keep comments as entries (ordered mode only).
    pub comments: bool,
    /// Remove all comments from the input before scanning.
    pub strip_comments: bool,
    /// Split comma separated selector lists into sibling rules.
    pub split: bool,
    /// Maximum block nesting depth before parsing fails.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            ordered: false,
            comments: false,
            strip_comments: false,
            split: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    /// Create the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from a JSON object.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set ordered mode.
    pub fn ordered(mut self, ordered: bool) -> Self {
        self.ordered = ordered;
        self
    }

    /// Set comment capture.
    pub fn comments(mut self, comments: bool) -> Self {
        self.comments = comments;
        self
    }

    /// Set comment stripping.
    pub fn strip_comments(mut self, strip_comments: bool) -> Self {
        self.strip_comments = strip_comments;
        self
    }

    /// Set selector list splitting.
    pub fn split(mut self, split: bool) -> Self {
        self.split = split;
        self
    }

    /// Set the maximum nesting depth.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Whether comments end up in the output. Stripping wins over capture.
    pub fn keeps_comments(&self) -> bool {
        self.comments && !self.strip_comments
    }
}
