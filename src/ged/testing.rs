//! Shared sample documents for tests
//!
//! Small self-contained GEDCOM sources used across unit and integration
//! tests, kept in one place so the scenarios stay consistent.

use crate::ged::assembling::parse_source;
use crate::ged::record::Document;

/// A header with nested version lines and a trailer, no family data.
pub const MINIMAL: &str = "\
0 HEAD
1 GEDC
2 VERS 5.5
1 CHAR ASCII
0 TRLR
";

/// Three generations: @I1@'s parents are @I2@ and @I3@, and @I2@'s parents
/// are @I4@ and @I5@. @I3@, @I4@ and @I5@ have no recorded parents.
pub const THREE_GENERATIONS: &str = "\
0 HEAD
1 SOUR ged
0 @F1@ FAM
1 HUSB @I2@
1 WIFE @I3@
1 CHIL @I1@
1 MARR
2 DATE 12 JUN 1924
0 @F2@ FAM
1 HUSB @I4@
1 WIFE @I5@
1 CHIL @I2@
0 @I1@ INDI
1 NAME Arthur /Waterman/
1 SEX M
1 BIRT
2 DATE 4 MAY 1950
2 PLAC Leiden
1 FAMC @F1@
0 @I2@ INDI
1 NAME Brian /Waterman/
1 SEX M
1 FAMC @F2@
1 FAMS @F1@
0 @I3@ INDI
1 NAME Clara /Verhoeven/
1 SEX F
1 FAMS @F1@
0 @I4@ INDI
1 NAME Dirk /Waterman/
1 SEX M
1 FAMS @F2@
0 @I5@ INDI
1 NAME Els /Bakker/
1 SEX F
1 FAMS @F2@
0 TRLR
";

/// Parse a source that tests treat as well-formed.
pub fn parse_fixture(source: &str) -> Document {
    parse_source(source).unwrap_or_else(|error| panic!("fixture failed to parse: {}", error))
}
