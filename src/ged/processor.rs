//! Document loading and serialized output
//!
//! The parser itself only sees borrowed lines; this module owns file
//! handling and the output forms used by the command line tool.

use std::fs;
use std::path::Path;

use log::info;

use crate::ged::assembling::parse_source;
use crate::ged::error::ProcessError;
use crate::ged::record::Document;

/// Read and parse a GEDCOM file.
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Document, ProcessError> {
    let path = path.as_ref();
    info!("loading {}", path.display());
    let content = fs::read_to_string(path)
        .map_err(|error| ProcessError::Io(format!("{}: {}", path.display(), error)))?;
    parse_source(&content).map_err(ProcessError::Parse)
}

/// Serialize a document as pretty-printed JSON.
pub fn to_json(document: &Document) -> Result<String, ProcessError> {
    serde_json::to_string_pretty(document)
        .map_err(|error| ProcessError::Serialize(error.to_string()))
}
