//! GEDCOM parsing and ancestry queries
//!
//! The pipeline: lines are tokenized (`tokens`), folded into a forest of
//! records (`assembling`), indexed by pointer (`index`), and queried for
//! direct ancestor lines (`lineage`). `processor` owns file handling for
//! the command line tool.

pub mod assembling;
pub mod error;
pub mod index;
pub mod lineage;
pub mod processor;
pub mod record;
pub mod tags;
pub mod testing;
pub mod tokens;

pub use assembling::{parse_document, parse_source};
pub use error::{LookupError, LookupResult, ParseError, ParseResult, ProcessError};
pub use index::{normalize_pointer, DocumentIndex, FamilyIndex, PeopleIndex};
pub use lineage::{direct_ancestor_line, Parents};
pub use record::{Document, Family, Individual, Record, Value};
pub use tags::TagKind;
pub use tokens::{tokenize_line, RawLine, Token};
