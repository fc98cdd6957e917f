//! Pointer indexes over a parsed document
//!
//! Families and individuals are looked up by their cross-reference pointer.
//! Lookups accept both the bracketed form `@I3@` and the bare identifier
//! `I3`; bare identifiers are brought into bracketed form first. The indexes
//! borrow the document and are built in one scan of the top-level records.

use std::borrow::Cow;
use std::collections::HashMap;

use log::debug;

use crate::ged::error::LookupResult;
use crate::ged::lineage;
use crate::ged::record::{Document, Family, Individual};
use crate::ged::tokens::POINTER_MARKER;

/// Bring a pointer key into the bracketed form the indexes are keyed by.
pub fn normalize_pointer(key: &str) -> Cow<'_, str> {
    if key.starts_with(POINTER_MARKER) {
        Cow::Borrowed(key)
    } else {
        Cow::Owned(format!("{}{}{}", POINTER_MARKER, key, POINTER_MARKER))
    }
}

/// Families by pointer
#[derive(Debug, Clone)]
pub struct FamilyIndex<'a> {
    entries: HashMap<String, Family<'a>>,
}

impl<'a> FamilyIndex<'a> {
    /// Look up a family by pointer, bare or bracketed.
    pub fn get(&self, key: &str) -> Option<Family<'a>> {
        self.entries.get(normalize_pointer(key).as_ref()).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Individuals by pointer
#[derive(Debug, Clone)]
pub struct PeopleIndex<'a> {
    entries: HashMap<String, Individual<'a>>,
}

impl<'a> PeopleIndex<'a> {
    /// Look up an individual by pointer, bare or bracketed.
    pub fn get(&self, key: &str) -> Option<Individual<'a>> {
        self.entries.get(normalize_pointer(key).as_ref()).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The two pointer indexes over one document
#[derive(Debug, Clone)]
pub struct DocumentIndex<'a> {
    pub families: FamilyIndex<'a>,
    pub people: PeopleIndex<'a>,
}

impl<'a> DocumentIndex<'a> {
    /// Index every pointered family and individual record.
    ///
    /// Records without a pointer are skipped, and a repeated pointer keeps
    /// the later record.
    pub fn from_document(document: &'a Document) -> DocumentIndex<'a> {
        let mut families = HashMap::new();
        let mut people = HashMap::new();
        for record in document.iter() {
            let Some(pointer) = record.pointer() else {
                continue;
            };
            if let Some(family) = record.as_family() {
                families.insert(pointer.to_string(), family);
            } else if let Some(individual) = record.as_individual() {
                people.insert(pointer.to_string(), individual);
            }
        }
        debug!(
            "indexed {} families and {} people",
            families.len(),
            people.len()
        );
        DocumentIndex {
            families: FamilyIndex { entries: families },
            people: PeopleIndex { entries: people },
        }
    }

    /// Direct ancestor pointers of the given individual, closest first.
    pub fn direct_ancestor_line(&self, pointer: &str) -> LookupResult<Vec<String>> {
        lineage::direct_ancestor_line(&self.people, &self.families, pointer)
    }
}

impl Document {
    /// Build the pointer indexes over this document.
    pub fn index(&self) -> DocumentIndex<'_> {
        DocumentIndex::from_document(self)
    }
}
