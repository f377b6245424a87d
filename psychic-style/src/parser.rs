//! Selector Parser - Turns selector text into a compound chain
//!
//! Grammar:
//!
//! ```text
//! selector := compound (whitespace+ compound)*
//! compound := ident? ('.' ident | ':' ident)*
//! ```
//!
//! All names are lowercased. No other combinator or simple selector is
//! accepted.

use alloc::string::String;

use crate::selector::{Compound, Selector};

/// Selector parse error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Empty or whitespace-only input
    Empty,
    /// A character that is not part of the grammar
    UnexpectedChar(char, usize),
    /// `.` or `:` not followed by a name
    ExpectedIdentifier(usize),
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseError::Empty => write!(f, "Empty selector"),
            ParseError::UnexpectedChar(c, pos) => {
                write!(f, "Unexpected character {:?} at {}", c, pos)
            }
            ParseError::ExpectedIdentifier(pos) => write!(f, "Expected identifier at {}", pos),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Selector parser.
pub struct SelectorParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> SelectorParser<'a> {
    /// Create a new parser for the given input.
    pub fn new(input: &'a str) -> Self {
        SelectorParser { input, pos: 0 }
    }

    /// Parse the whole input as one selector.
    pub fn parse(&mut self) -> Result<Selector, ParseError> {
        let mut selector = Selector {
            compounds: alloc::vec::Vec::new(),
        };

        loop {
            self.skip_whitespace();
            if self.is_eof() {
                break;
            }
            let compound = self.parse_compound()?;
            selector.compounds.push(compound);
        }

        if selector.is_empty() {
            return Err(ParseError::Empty);
        }

        Ok(selector)
    }

    /// Parse one compound, stopping at whitespace or end of input.
    fn parse_compound(&mut self) -> Result<Compound, ParseError> {
        let mut compound = Compound::new();

        if let Some(c) = self.peek_char() {
            if is_ident_char(c) {
                compound.type_name = Some(self.parse_ident()?);
            }
        }

        loop {
            match self.peek_char() {
                None => break,
                Some(c) if c.is_whitespace() => break,
                Some('.') => {
                    self.consume_char();
                    let name = self.parse_ident()?;
                    compound.add_class(name);
                }
                Some(':') => {
                    self.consume_char();
                    let name = self.parse_ident()?;
                    compound.add_pseudo(name);
                }
                Some(c) => return Err(ParseError::UnexpectedChar(c, self.pos)),
            }
        }

        // Callers skip whitespace and stop at end of input first.
        debug_assert!(!compound.is_empty());
        Ok(compound)
    }

    // ========================================================================
    // Helper methods
    // ========================================================================

    fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn consume_char(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                self.consume_char();
            } else {
                break;
            }
        }
    }

    fn parse_ident(&mut self) -> Result<String, ParseError> {
        let start = self.pos;
        let mut result = String::new();

        while let Some(c) = self.peek_char() {
            if is_ident_char(c) {
                result.push(c.to_ascii_lowercase());
                self.consume_char();
            } else {
                break;
            }
        }

        if result.is_empty() {
            Err(ParseError::ExpectedIdentifier(start))
        } else {
            Ok(result)
        }
    }
}

/// Check if a character can be part of an identifier.
fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}
