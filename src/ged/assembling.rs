//! Tree assembly for tokenized GEDCOM lines
//!
//! Folds a stream of tokenized lines into a forest of records. A level 0
//! line starts a new top-level record; every deeper line is merged into the
//! current top-level record by comparing its level against the records along
//! the open descent chain. There is one descent chain: parallel subtrees are
//! not tracked, and lines deeper than the open chain are dropped.

use log::debug;

use crate::ged::error::{ParseError, ParseResult};
use crate::ged::record::{Document, Record};
use crate::ged::tokens::{tokenize_line, RawLine};

/// Parse a whole document from an iterator of lines.
///
/// Blank lines are skipped. The first non-blank line must be a level 0
/// line, and any malformed line aborts the parse.
pub fn parse_document<I, S>(lines: I) -> ParseResult<Document>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut assembler = Assembler::new();
    let mut seen = 0usize;
    for (index, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        if line.trim().is_empty() {
            continue;
        }
        seen += 1;
        let raw = tokenize_line(line, index + 1)?;
        assembler.push(raw, index + 1)?;
    }
    let document = assembler.finish();
    debug!(
        "assembled {} top-level records from {} lines",
        document.len(),
        seen
    );
    Ok(document)
}

/// Parse a whole document from one source string.
pub fn parse_source(source: &str) -> ParseResult<Document> {
    parse_document(source.lines())
}

/// Fold state while building the forest
struct Assembler {
    records: Vec<Record>,
    /// Open descent chain under the current top-level record: `descent[d]`
    /// names the child subtree that deeper lines are routed through at
    /// depth `d`.
    descent: Vec<String>,
}

impl Assembler {
    fn new() -> Assembler {
        Assembler {
            records: Vec::new(),
            descent: Vec::new(),
        }
    }

    fn push(&mut self, raw: RawLine, line_number: usize) -> ParseResult<()> {
        if raw.level == 0 {
            self.descent.clear();
            self.records.push(Record::from_raw(raw));
            return Ok(());
        }
        let Some(current) = self.records.last_mut() else {
            return Err(ParseError::OrphanLine {
                line_number,
                level: raw.level,
            });
        };
        merge(current, &mut self.descent, 0, raw);
        Ok(())
    }

    fn finish(self) -> Document {
        Document::new(self.records)
    }
}

/// Merge one line into `record` or a record beneath it.
///
/// `depth` is the descent chain slot for `record`'s children. A direct-child
/// line closes the chain at its depth; only a line that creates a fresh
/// child reopens it.
fn merge(record: &mut Record, descent: &mut Vec<String>, depth: usize, raw: RawLine) {
    if raw.level < record.level() {
        // A shallower line belongs to an enclosing record; nothing to do here.
        return;
    }
    if raw.level == record.level() {
        record.absorb(raw);
        return;
    }
    if raw.level == record.level() + 1 {
        descent.truncate(depth);
        if let Some(child) = record.child_mut(&raw.tag) {
            merge(child, descent, depth + 1, raw);
        } else {
            let tag = raw.tag.clone();
            record.push_child(Record::from_raw(raw));
            descent.push(tag);
        }
        return;
    }
    // Deeper than a direct child: only an open descent chain can route it.
    let Some(tag) = descent.get(depth).cloned() else {
        return;
    };
    let child = record
        .child_mut(&tag)
        .expect("descent chain entries name existing children");
    merge(child, descent, depth + 1, raw);
}
