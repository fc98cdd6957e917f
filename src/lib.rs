//! # ged
//!
//! A parser for the GEDCOM genealogy format.
//!
//! GEDCOM files are line oriented; every line carries a nesting level, an
//! optional cross-reference pointer, a tag, and an optional value:
//!
//! ```text
//! 0 @I1@ INDI
//! 1 NAME Arthur /Waterman/
//! 1 FAMC @F1@
//! ```
//!
//! The library parses such text into a forest of records, indexes families
//! and individuals by pointer, and answers direct ancestor queries. See the
//! [ged] module for the pipeline and the [testing module](ged::testing) for
//! shared sample documents.

pub mod ged;
