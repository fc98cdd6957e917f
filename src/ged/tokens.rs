//! Line tokenization for the GEDCOM format
//!
//! A GEDCOM line is `LEVEL [POINTER] TAG [VALUE]`. The leading fields are
//! tokenized with the logos derive macro; the free-text value is everything
//! after the tag and is never tokenized, so names and dates keep their inner
//! whitespace.

use logos::Logos;
use serde::{Deserialize, Serialize};

use crate::ged::error::{ParseError, ParseResult};

/// Marker character that brackets cross-reference pointers like `@I3@`
pub const POINTER_MARKER: char = '@';

/// Leading fields of a GEDCOM line
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t]+")]
pub enum Token {
    /// Decimal nesting level, always the first field
    #[regex(r"[0-9]+", priority = 3)]
    Number,

    /// Cross-reference pointer, recognized by its leading marker
    #[regex(r"@[^ \t]*", priority = 5)]
    Pointer,

    /// Any other whitespace-delimited field
    #[regex(r"[^ \t]+", priority = 1)]
    Word,
}

impl Token {
    /// Check if this token is a decimal number
    pub fn is_number(&self) -> bool {
        matches!(self, Token::Number)
    }

    /// Check if this token is a cross-reference pointer
    pub fn is_pointer(&self) -> bool {
        matches!(self, Token::Pointer)
    }

    /// Check if this token is a plain field
    pub fn is_word(&self) -> bool {
        matches!(self, Token::Word)
    }
}

/// One tokenized GEDCOM line, before tree assembly
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLine {
    /// Nesting depth, 0 for top-level records
    pub level: u32,
    /// Tag name, lowercased
    pub tag: String,
    /// Free-text remainder of the line, or None when the line ends at the tag
    pub value: Option<String>,
    /// Cross-reference pointer in bracketed form
    pub pointer: Option<String>,
}

/// Split one non-blank line into level, optional pointer, tag, and value.
///
/// The tag is lowercased. The value is the untokenized remainder of the line
/// after the tag with surrounding whitespace trimmed; an empty remainder
/// yields no value. `line_number` is 1-based and used only for error context.
pub fn tokenize_line(line: &str, line_number: usize) -> ParseResult<RawLine> {
    let line = line.trim_end();
    let mut lexer = Token::lexer(line);

    let level = match lexer.next() {
        Some(Ok(Token::Number)) => {
            lexer
                .slice()
                .parse::<u32>()
                .map_err(|_| ParseError::InvalidLevel {
                    line_number,
                    field: lexer.slice().to_string(),
                })?
        }
        Some(_) => {
            return Err(ParseError::InvalidLevel {
                line_number,
                field: lexer.slice().to_string(),
            })
        }
        None => {
            return Err(ParseError::MissingTag {
                line_number,
                line: line.to_string(),
            })
        }
    };

    let mut pointer = None;
    let tag = match lexer.next() {
        Some(Ok(Token::Pointer)) => {
            pointer = Some(lexer.slice().to_string());
            match lexer.next() {
                Some(Ok(_)) => lexer.slice().to_ascii_lowercase(),
                _ => {
                    return Err(ParseError::MissingTag {
                        line_number,
                        line: line.to_string(),
                    })
                }
            }
        }
        Some(Ok(_)) => lexer.slice().to_ascii_lowercase(),
        _ => {
            return Err(ParseError::MissingTag {
                line_number,
                line: line.to_string(),
            })
        }
    };

    let rest = lexer.remainder().trim();
    let value = if rest.is_empty() {
        None
    } else {
        Some(rest.to_string())
    };

    Ok(RawLine {
        level,
        tag,
        value,
        pointer,
    })
}
