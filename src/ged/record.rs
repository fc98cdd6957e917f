//! GEDCOM records and their value model
//!
//! A record is one line of a GEDCOM file plus the records nested beneath it.
//! Top-level records form a document. The tag decides a record's variant,
//! and the variant decides whether repeated lines accumulate values or keep
//! only the first.

use std::fmt;

use serde::Serialize;

use crate::ged::tags::TagKind;
use crate::ged::tokens::RawLine;

/// A record value: nothing, one string, or an accumulated sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub enum Value {
    /// The line ended at the tag
    #[default]
    Absent,
    /// The usual case: one free-text value
    Single(String),
    /// Values accumulated from repeated lines of a multi-valued tag
    Sequence(Vec<String>),
}

impl Value {
    /// Append one more value, promoting a single value to a sequence.
    ///
    /// Appending nothing leaves the value unchanged.
    pub fn append(&mut self, value: Option<String>) {
        let Some(value) = value else { return };
        *self = match std::mem::take(self) {
            Value::Absent => Value::Sequence(vec![value]),
            Value::Single(first) => Value::Sequence(vec![first, value]),
            Value::Sequence(mut values) => {
                values.push(value);
                Value::Sequence(values)
            }
        };
    }

    /// The first value, if there is one.
    pub fn first(&self) -> Option<&str> {
        match self {
            Value::Absent => None,
            Value::Single(value) => Some(value),
            Value::Sequence(values) => values.first().map(String::as_str),
        }
    }

    /// All values in order. Empty when absent.
    pub fn as_list(&self) -> Vec<&str> {
        match self {
            Value::Absent => Vec::new(),
            Value::Single(value) => vec![value.as_str()],
            Value::Sequence(values) => values.iter().map(String::as_str).collect(),
        }
    }

    /// Check if there is no value at all
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }
}

impl From<Option<String>> for Value {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(value) => Value::Single(value),
            None => Value::Absent,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Absent => Ok(()),
            Value::Single(value) => write!(f, "{}", value),
            Value::Sequence(values) => write!(f, "{}", values.join(" ")),
        }
    }
}

/// One GEDCOM record: a tagged line and the records nested beneath it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    tag: String,
    kind: TagKind,
    level: u32,
    value: Value,
    pointer: Option<String>,
    children: Vec<Record>,
}

impl Record {
    /// Build a childless record from a tokenized line.
    pub fn from_raw(raw: RawLine) -> Record {
        Record {
            kind: TagKind::for_tag(&raw.tag),
            tag: raw.tag,
            level: raw.level,
            value: Value::from(raw.value),
            pointer: raw.pointer,
            children: Vec::new(),
        }
    }

    /// The lowercased tag name
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The registry variant for this record's tag
    pub fn kind(&self) -> TagKind {
        self.kind
    }

    /// Nesting depth, 0 for top-level records
    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Cross-reference pointer in bracketed form, when the line carried one
    pub fn pointer(&self) -> Option<&str> {
        self.pointer.as_deref()
    }

    /// The nested records, in file order.
    pub fn children(&self) -> &[Record] {
        &self.children
    }

    /// Look up the nested record with the given tag.
    ///
    /// There is at most one child per tag; repeated tag lines merge into the
    /// existing child instead of adding a sibling.
    pub fn child(&self, tag: &str) -> Option<&Record> {
        self.children.iter().find(|child| child.tag == tag)
    }

    pub(crate) fn child_mut(&mut self, tag: &str) -> Option<&mut Record> {
        self.children.iter_mut().find(|child| child.tag == tag)
    }

    /// Attach a new child. The caller has checked the tag is not present.
    pub(crate) fn push_child(&mut self, child: Record) {
        debug_assert!(self.child(&child.tag).is_none(), "one child per tag");
        debug_assert_eq!(child.level, self.level + 1, "children sit one level down");
        self.children.push(child);
    }

    /// Fold a repeated line at this record's own level into the value.
    ///
    /// Multi-valued tags accumulate; every other tag keeps its first value
    /// and the repeat is dropped.
    pub(crate) fn absorb(&mut self, raw: RawLine) {
        debug_assert_eq!(self.tag, raw.tag, "repeated line routed to a different tag");
        if self.kind.is_multi_valued() {
            self.value.append(raw.value);
        }
    }

    /// Render this record and everything beneath it, one line per record.
    pub fn render_tree(&self, out: &mut String) {
        out.push_str(&self.to_string());
        out.push('\n');
        for child in &self.children {
            child.render_tree(out);
        }
    }

    /// The family view of this record, when it is a `fam` record.
    pub fn as_family(&self) -> Option<Family<'_>> {
        self.kind.is_family().then(|| Family(self))
    }

    /// The individual view of this record, when it is an `indi` record.
    pub fn as_individual(&self) -> Option<Individual<'_>> {
        self.kind.is_individual().then(|| Individual(self))
    }
}

impl fmt::Display for Record {
    /// Render the record's own line as `LEVEL [POINTER] TAG [VALUE]` with the
    /// tag uppercased and sequence values joined by single spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level)?;
        if let Some(pointer) = &self.pointer {
            write!(f, " {}", pointer)?;
        }
        write!(f, " {}", self.tag.to_ascii_uppercase())?;
        if !self.value.is_absent() {
            write!(f, " {}", self.value)?;
        }
        Ok(())
    }
}

/// Read-only family view over a `fam` record
#[derive(Debug, Clone, Copy)]
pub struct Family<'a>(&'a Record);

impl<'a> Family<'a> {
    /// The underlying record.
    pub fn record(&self) -> &'a Record {
        self.0
    }

    pub fn pointer(&self) -> Option<&'a str> {
        self.0.pointer()
    }

    /// Pointer to the husband individual, or None when unknown.
    pub fn husband(&self) -> Option<&'a str> {
        self.0.child("husb").and_then(|husb| husb.value().first())
    }

    /// Pointer to the wife individual, or None when unknown.
    pub fn wife(&self) -> Option<&'a str> {
        self.0.child("wife").and_then(|wife| wife.value().first())
    }

    /// Pointers to the children of this family, in declaration order.
    pub fn children(&self) -> Vec<&'a str> {
        self.0
            .child("chil")
            .map(|chil| chil.value().as_list())
            .unwrap_or_default()
    }
}

/// Read-only individual view over an `indi` record
#[derive(Debug, Clone, Copy)]
pub struct Individual<'a>(&'a Record);

impl<'a> Individual<'a> {
    /// The underlying record.
    pub fn record(&self) -> &'a Record {
        self.0
    }

    pub fn pointer(&self) -> Option<&'a str> {
        self.0.pointer()
    }
}

/// A parsed GEDCOM document: the top-level records in file order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(transparent)]
pub struct Document {
    records: Vec<Record>,
}

impl Document {
    pub(crate) fn new(records: Vec<Record>) -> Document {
        Document { records }
    }

    /// The top-level records, in file order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the top-level records.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Render the whole document back in normalized GEDCOM form.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for record in &self.records {
            record.render_tree(&mut out);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(level: u32, tag: &str, value: Option<&str>, pointer: Option<&str>) -> RawLine {
        RawLine {
            level,
            tag: tag.to_string(),
            value: value.map(str::to_string),
            pointer: pointer.map(str::to_string),
        }
    }

    #[test]
    fn test_value_append_promotes_single_to_sequence() {
        let mut value = Value::Single("@F1@".to_string());
        value.append(Some("@F2@".to_string()));
        assert_eq!(
            value,
            Value::Sequence(vec!["@F1@".to_string(), "@F2@".to_string()])
        );
    }

    #[test]
    fn test_value_append_from_absent() {
        let mut value = Value::Absent;
        value.append(Some("@F1@".to_string()));
        assert_eq!(value, Value::Sequence(vec!["@F1@".to_string()]));
    }

    #[test]
    fn test_value_append_nothing_is_a_no_op() {
        let mut value = Value::Single("@F1@".to_string());
        value.append(None);
        assert_eq!(value, Value::Single("@F1@".to_string()));
    }

    #[test]
    fn test_value_first_and_as_list() {
        assert_eq!(Value::Absent.first(), None);
        assert_eq!(Value::Absent.as_list(), Vec::<&str>::new());

        let single = Value::Single("a".to_string());
        assert_eq!(single.first(), Some("a"));
        assert_eq!(single.as_list(), vec!["a"]);

        let sequence = Value::Sequence(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(sequence.first(), Some("a"));
        assert_eq!(sequence.as_list(), vec!["a", "b"]);
    }

    #[test]
    fn test_record_from_raw_resolves_kind() {
        let record = Record::from_raw(raw(0, "indi", None, Some("@I1@")));
        assert_eq!(record.kind(), TagKind::Individual);
        assert_eq!(record.tag(), "indi");
        assert_eq!(record.level(), 0);
        assert_eq!(record.pointer(), Some("@I1@"));
        assert!(record.value().is_absent());

        let record = Record::from_raw(raw(1, "name", Some("John /Doe/"), None));
        assert_eq!(record.kind(), TagKind::Other);
        assert_eq!(record.value().first(), Some("John /Doe/"));
    }

    #[test]
    fn test_child_lookup() {
        let mut record = Record::from_raw(raw(0, "indi", None, None));
        record.push_child(Record::from_raw(raw(1, "birt", None, None)));
        record.push_child(Record::from_raw(raw(1, "deat", None, None)));

        assert_eq!(record.child("birt").unwrap().tag(), "birt");
        assert_eq!(record.child("deat").unwrap().tag(), "deat");
        assert!(record.child("buri").is_none());
        assert_eq!(record.children().len(), 2);
    }

    #[test]
    fn test_absorb_accumulates_multi_valued() {
        let mut record = Record::from_raw(raw(1, "fams", Some("@F1@"), None));
        record.absorb(raw(1, "fams", Some("@F2@"), None));
        assert_eq!(record.value().as_list(), vec!["@F1@", "@F2@"]);
    }

    #[test]
    fn test_absorb_drops_single_valued_repeat() {
        let mut record = Record::from_raw(raw(1, "sex", Some("M"), None));
        record.absorb(raw(1, "sex", Some("F"), None));
        assert_eq!(record.value(), &Value::Single("M".to_string()));
    }

    #[test]
    fn test_display_plain() {
        let record = Record::from_raw(raw(0, "head", None, None));
        assert_eq!(record.to_string(), "0 HEAD");
    }

    #[test]
    fn test_display_with_pointer() {
        let record = Record::from_raw(raw(0, "indi", None, Some("@I1@")));
        assert_eq!(record.to_string(), "0 @I1@ INDI");
    }

    #[test]
    fn test_display_with_value() {
        let record = Record::from_raw(raw(1, "name", Some("John /Doe/"), None));
        assert_eq!(record.to_string(), "1 NAME John /Doe/");
    }

    #[test]
    fn test_display_joins_sequences() {
        let mut record = Record::from_raw(raw(1, "fams", Some("@F1@"), None));
        record.absorb(raw(1, "fams", Some("@F2@"), None));
        assert_eq!(record.to_string(), "1 FAMS @F1@ @F2@");
    }

    #[test]
    fn test_render_tree_orders_children_by_insertion() {
        let mut record = Record::from_raw(raw(0, "indi", None, Some("@I1@")));
        let mut birt = Record::from_raw(raw(1, "birt", None, None));
        birt.push_child(Record::from_raw(raw(2, "date", Some("1900"), None)));
        record.push_child(birt);
        record.push_child(Record::from_raw(raw(1, "deat", None, None)));

        let mut out = String::new();
        record.render_tree(&mut out);
        assert_eq!(out, "0 @I1@ INDI\n1 BIRT\n2 DATE 1900\n1 DEAT\n");
    }

    #[test]
    fn test_family_view_accessors() {
        let mut family = Record::from_raw(raw(0, "fam", None, Some("@F1@")));
        family.push_child(Record::from_raw(raw(1, "husb", Some("@I2@"), None)));
        family.push_child(Record::from_raw(raw(1, "wife", Some("@I3@"), None)));
        family.push_child(Record::from_raw(raw(1, "chil", Some("@I1@"), None)));

        let view = family.as_family().unwrap();
        assert_eq!(view.pointer(), Some("@F1@"));
        assert_eq!(view.husband(), Some("@I2@"));
        assert_eq!(view.wife(), Some("@I3@"));
        assert_eq!(view.children(), vec!["@I1@"]);
    }

    #[test]
    fn test_family_view_missing_members() {
        let family = Record::from_raw(raw(0, "fam", None, Some("@F1@")));
        let view = family.as_family().unwrap();
        assert_eq!(view.husband(), None);
        assert_eq!(view.wife(), None);
        assert!(view.children().is_empty());
    }

    #[test]
    fn test_family_view_valueless_member() {
        let mut family = Record::from_raw(raw(0, "fam", None, Some("@F1@")));
        family.push_child(Record::from_raw(raw(1, "husb", None, None)));
        let view = family.as_family().unwrap();
        assert_eq!(view.husband(), None);
    }

    #[test]
    fn test_views_check_the_kind() {
        let individual = Record::from_raw(raw(0, "indi", None, Some("@I1@")));
        assert!(individual.as_family().is_none());
        assert!(individual.as_individual().is_some());

        let family = Record::from_raw(raw(0, "fam", None, Some("@F1@")));
        assert!(family.as_individual().is_none());
        assert!(family.as_family().is_some());
    }

    #[test]
    fn test_document_render() {
        let head = Record::from_raw(raw(0, "head", None, None));
        let trlr = Record::from_raw(raw(0, "trlr", None, None));
        let document = Document::new(vec![head, trlr]);
        assert_eq!(document.render(), "0 HEAD\n0 TRLR\n");
        assert_eq!(document.len(), 2);
        assert!(!document.is_empty());
    }
}
