//! Byte level helpers shared by the tokenizer and the declaration splitter.

/// Tracks parentheses, brackets and string literals while walking CSS text.
///
/// Separators (`;`, `:`, `,`) only count when they sit outside of all of
/// these. That is what keeps `url("data:image/png;base64,...")` and
/// `:is(.a, .b)` intact.
#[derive(Debug, Default)]
pub(crate) struct Nesting {
    depth: usize,
    quote: Option<u8>,
    escaped: bool,
}

impl Nesting {
    /// Feed one byte. Returns `true` if the byte is at top level, outside
    /// any string, bracket or escape.
    pub(crate) fn advance(&mut self, byte: u8) -> bool {
        if self.escaped {
            self.escaped = false;
            return false;
        }
        if byte == b'\\' {
            self.escaped = true;
            return false;
        }
        if let Some(quote) = self.quote {
            if byte == quote {
                self.quote = None;
            }
            return false;
        }
        match byte {
            b'"' | b'\'' => {
                self.quote = Some(byte);
                false
            }
            b'(' | b'[' => {
                self.depth += 1;
                false
            }
            b')' | b']' => {
                self.depth = self.depth.saturating_sub(1);
                false
            }
            _ => self.depth == 0,
        }
    }

    /// Whether the scanner is inside a string literal.
    pub(crate) fn in_string(&self) -> bool {
        self.quote.is_some()
    }
}

/// Byte offsets of every top-level occurrence of `separator`.
pub(crate) fn top_level_positions(
    text: &str,
    separator: u8,
) -> impl Iterator<Item = usize> + '_ {
    let mut nesting = Nesting::default();
    text.bytes().enumerate().filter_map(move |(index, byte)| {
        (nesting.advance(byte) && byte == separator).then_some(index)
    })
}

/// Split a declaration on its first top-level colon.
///
/// Returns `None` when there is no such colon or the name would be empty,
/// which makes the text a bare statement.
pub(crate) fn split_declaration(text: &str) -> Option<(&str, &str)> {
    let colon = top_level_positions(text, b':').next()?;
    let name = text[..colon].trim();
    if name.is_empty() {
        return None;
    }
    Some((name, text[colon + 1..].trim()))
}

/// Split a selector list on top-level commas, dropping empty pieces.
pub(crate) fn split_selector_list(selector: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    for comma in top_level_positions(selector, b',') {
        pieces.push(selector[start..comma].trim());
        start = comma + 1;
    }
    pieces.push(selector[start..].trim());
    pieces.retain(|piece| !piece.is_empty());
    pieces
}
