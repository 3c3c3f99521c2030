//! Lazy token stream over CSS text.
//!
//! Each step skips whitespace and yields exactly one of four tokens: a
//! comment, the header of a block, a closing brace, or a declaration line.
//! Anything the tokenizer cannot classify is skipped, so iteration always
//! makes progress and never fails.

use super::scan::Nesting;

/// A single structural token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// `/* ... */`, delimiters included.
    Comment(&'a str),
    /// Trimmed text before a `{`.
    Open(&'a str),
    /// `}`.
    Close,
    /// Trimmed text of a declaration or statement, terminator excluded.
    Declaration(&'a str),
}

/// Streaming tokenizer. The cursor only moves forward.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Current byte offset into the input.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Whether the whole input has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.input.len()
    }

    fn rest(&self) -> &'a str {
        &self.input[self.position..]
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.position += rest.len() - rest.trim_start().len();
    }

    fn comment(&mut self) -> Token<'a> {
        let start = self.position;
        let end = match self.input[start + 2..].find("*/") {
            Some(offset) => start + 2 + offset + 2,
            None => {
                tracing::debug!("Unterminated comment at byte {} runs to end of input", start);
                self.input.len()
            }
        };
        self.position = end;
        Token::Comment(&self.input[start..end])
    }

    /// Scan a selector or declaration run starting at the cursor.
    ///
    /// Braces always end a run. Semicolons end it only at top level. Comments
    /// inside a run are carried along as text.
    fn run(&mut self) -> Option<Token<'a>> {
        let start = self.position;
        let bytes = self.input.as_bytes();
        let mut nesting = Nesting::default();
        let mut index = start;

        while index < bytes.len() {
            let byte = bytes[index];
            match byte {
                b'{' => {
                    self.position = index + 1;
                    return Some(Token::Open(self.input[start..index].trim()));
                }
                b'}' => {
                    // Leave the brace for the next call so the block still closes.
                    self.position = index;
                    return Some(Token::Declaration(self.input[start..index].trim()));
                }
                b'/' if !nesting.in_string() && bytes.get(index + 1) == Some(&b'*') => {
                    index = match self.input[index + 2..].find("*/") {
                        Some(offset) => index + 2 + offset + 2,
                        None => bytes.len(),
                    };
                    continue;
                }
                _ => {}
            }
            if nesting.advance(byte) && byte == b';' {
                self.position = index + 1;
                return Some(Token::Declaration(self.input[start..index].trim()));
            }
            index += 1;
        }

        tracing::debug!(
            "Ignoring unterminated text at byte {}: {:?}",
            start,
            self.input[start..].trim()
        );
        self.position = bytes.len();
        None
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        loop {
            self.skip_whitespace();
            let rest = self.rest();
            if rest.starts_with("/*") {
                return Some(self.comment());
            }
            match rest.as_bytes().first().copied()? {
                b'}' => {
                    self.position += 1;
                    return Some(Token::Close);
                }
                stray @ (b'{' | b';') => {
                    tracing::trace!("Skipping stray '{}' at byte {}", stray as char, self.position);
                    self.position += 1;
                }
                _ => return self.run(),
            }
        }
    }
}
