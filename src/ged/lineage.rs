//! Parent resolution and the direct ancestor walk
//!
//! Ancestors are collected generation by generation: within a parent pair
//! the father comes before the mother, and a closer generation always comes
//! before a more distant one. Unknown parents are skipped silently; a
//! pointer that does not resolve fails the whole walk.

use std::collections::HashSet;

use log::trace;

use crate::ged::error::{LookupError, LookupResult};
use crate::ged::index::{FamilyIndex, PeopleIndex};
use crate::ged::record::Individual;

/// A father/mother pointer pair; None marks an unknown parent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Parents<'a> {
    pub father: Option<&'a str>,
    pub mother: Option<&'a str>,
}

impl<'a> Parents<'a> {
    /// The pair with both parents unknown.
    pub fn unknown() -> Parents<'a> {
        Parents::default()
    }

    /// Check if both parents are unknown
    pub fn is_unknown(&self) -> bool {
        self.father.is_none() && self.mother.is_none()
    }

    /// The known parents, father first.
    pub fn known(&self) -> impl Iterator<Item = &'a str> {
        [self.father, self.mother].into_iter().flatten()
    }
}

impl<'a> Individual<'a> {
    /// Resolve this individual's parents through the family index.
    ///
    /// The first `famc` value names the family the individual is a child in;
    /// a missing subtree, a missing value, or an unindexed family all yield
    /// the unknown pair.
    pub fn parents(&self, families: &FamilyIndex<'a>) -> Parents<'a> {
        let Some(famc) = self.record().child("famc") else {
            return Parents::unknown();
        };
        let Some(key) = famc.value().first() else {
            return Parents::unknown();
        };
        let Some(family) = families.get(key.trim()) else {
            return Parents::unknown();
        };
        Parents {
            father: family.husband(),
            mother: family.wife(),
        }
    }
}

/// Walk the direct ancestor line of the individual at `pointer`.
///
/// The result holds pointer values in encounter order and repeats a pointer
/// when two lines converge on the same ancestor. Each individual's parents
/// are expanded only once, so the walk terminates even on cyclic data. The
/// starting pointer and every parent pointer met along the walk must resolve
/// in the people index.
pub fn direct_ancestor_line<'a>(
    people: &PeopleIndex<'a>,
    families: &FamilyIndex<'a>,
    pointer: &str,
) -> LookupResult<Vec<String>> {
    let start = people.get(pointer).ok_or_else(|| LookupError::NotFound {
        pointer: pointer.to_string(),
    })?;

    let mut line = Vec::new();
    let mut expanded: HashSet<&str> = HashSet::new();
    let mut frontier = vec![start.parents(families)];
    let mut generation = 0usize;

    while !frontier.is_empty() {
        generation += 1;
        let mut next = Vec::new();
        for pair in frontier {
            for parent in pair.known() {
                line.push(parent.to_string());
                if expanded.insert(parent) {
                    let individual = people.get(parent).ok_or_else(|| LookupError::NotFound {
                        pointer: parent.to_string(),
                    })?;
                    next.push(individual.parents(families));
                }
            }
        }
        trace!("generation {}: {} ancestors so far", generation, line.len());
        frontier = next;
    }

    Ok(line)
}
