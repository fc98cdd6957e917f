//! Tag variant registry for GEDCOM records
//!
//! Maps the tag names this parser distinguishes onto their variants. The
//! table is fixed at compile time and fully populated before any parsing;
//! every unlisted tag resolves to the generic variant.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

/// Record variants for the recognized GEDCOM tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TagKind {
    /// `head` file header
    Header,
    /// `date` event date
    Date,
    /// `plac` event place
    Place,
    /// `sex` individual sex
    Sex,
    /// `surn` surname
    Surname,
    /// `givn` given name
    GivenName,
    /// `birt` birth event
    Birth,
    /// `buri` burial event
    Burial,
    /// `deat` death event
    Death,
    /// `marr` marriage event
    Marriage,
    /// `fams` family this individual is a spouse in, accumulating
    FamilySpouse,
    /// `famc` family this individual is a child in, accumulating
    FamilyChild,
    /// `fam` family record
    Family,
    /// `indi` individual record
    Individual,
    /// Any tag the registry does not list
    Other,
}

/// Tag name to variant table. Names are lowercase.
const REGISTRY: &[(&str, TagKind)] = &[
    ("head", TagKind::Header),
    ("date", TagKind::Date),
    ("plac", TagKind::Place),
    ("sex", TagKind::Sex),
    ("surn", TagKind::Surname),
    ("givn", TagKind::GivenName),
    ("birt", TagKind::Birth),
    ("buri", TagKind::Burial),
    ("deat", TagKind::Death),
    ("marr", TagKind::Marriage),
    ("fams", TagKind::FamilySpouse),
    ("famc", TagKind::FamilyChild),
    ("fam", TagKind::Family),
    ("indi", TagKind::Individual),
];

static BY_NAME: Lazy<HashMap<&'static str, TagKind>> =
    Lazy::new(|| REGISTRY.iter().copied().collect());

impl TagKind {
    /// Look up the variant for a lowercased tag name.
    ///
    /// The tokenizer lowercases tags, so lookups are exact; an uppercase
    /// name is simply not in the table.
    pub fn for_tag(tag: &str) -> TagKind {
        BY_NAME.get(tag).copied().unwrap_or(TagKind::Other)
    }

    /// Whether repeated lines of this tag accumulate values instead of
    /// keeping only the first.
    pub fn is_multi_valued(&self) -> bool {
        matches!(self, TagKind::FamilySpouse | TagKind::FamilyChild)
    }

    /// Check if this is the family record variant
    pub fn is_family(&self) -> bool {
        matches!(self, TagKind::Family)
    }

    /// Check if this is the individual record variant
    pub fn is_individual(&self) -> bool {
        matches!(self, TagKind::Individual)
    }

    /// The registered tag name, or None for the generic variant.
    pub fn canonical_tag(&self) -> Option<&'static str> {
        REGISTRY
            .iter()
            .find(|(_, kind)| kind == self)
            .map(|(name, _)| *name)
    }
}
