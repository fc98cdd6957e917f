//! Error types for GEDCOM parsing and queries
//!
//! Parsing is all-or-nothing: the first bad line aborts the whole document.
//! Lookup errors are separate so query callers don't match on parse cases
//! that cannot reach them.

use std::fmt;

/// Errors that can occur while parsing a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The line had fewer fields than a level and a tag
    MissingTag { line_number: usize, line: String },
    /// The first field was not a non-negative decimal level
    InvalidLevel { line_number: usize, field: String },
    /// A nested line arrived before the first level 0 record
    OrphanLine { line_number: usize, level: u32 },
}

impl std::error::Error for ParseError {}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MissingTag { line_number, line } => {
                write!(
                    f,
                    "line {}: expected a level and a tag: '{}'",
                    line_number, line
                )
            }
            ParseError::InvalidLevel { line_number, field } => {
                write!(f, "line {}: invalid level '{}'", line_number, field)
            }
            ParseError::OrphanLine { line_number, level } => {
                write!(
                    f,
                    "line {}: level {} line appears before any level 0 record",
                    line_number, level
                )
            }
        }
    }
}

/// Errors that can occur while resolving pointers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// No indexed record carries this pointer
    NotFound { pointer: String },
}

impl std::error::Error for LookupError {}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::NotFound { pointer } => {
                write!(f, "no record with pointer '{}'", pointer)
            }
        }
    }
}

/// Errors from the file-level loading and output layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessError {
    /// Reading the input file failed
    Io(String),
    /// The file contents failed to parse
    Parse(ParseError),
    /// Serializing the parsed document failed
    Serialize(String),
}

impl std::error::Error for ProcessError {}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::Io(message) => write!(f, "IO error: {}", message),
            ProcessError::Parse(error) => write!(f, "parse error: {}", error),
            ProcessError::Serialize(message) => write!(f, "serialization error: {}", message),
        }
    }
}

/// Result alias for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Result alias for pointer lookups
pub type LookupResult<T> = Result<T, LookupError>;
