//! Document parsers: one pure function per document type.
//!
//! Each parser takes the ordered paragraph sequence and returns a header
//! record plus its sub-records. No parser ever fails: extraction misses
//! degrade field-by-field to `None` and unusable input yields defaults.

mod fatwa;
mod judgment;
mod law;

pub use fatwa::parse_fatwa;
pub use judgment::parse_judgment;
pub use law::parse_law;

use crate::types::{DocType, ParsedDocument};

/// Run the parser matching an already-classified document type.
///
/// `DocType::Unknown` short-circuits: the parsing core is not invoked.
#[must_use]
pub fn parse_classified(doc_type: DocType, paras: &[String]) -> ParsedDocument {
    match doc_type {
        DocType::Judgment => {
            let (record, principles) = parse_judgment(paras);
            ParsedDocument::Judgment { record, principles }
        }
        DocType::Fatwa => {
            let (record, principles) = parse_fatwa(paras);
            ParsedDocument::Fatwa { record, principles }
        }
        DocType::Law => {
            let (record, articles) = parse_law(paras);
            ParsedDocument::Law { record, articles }
        }
        DocType::Unknown => ParsedDocument::Unknown,
    }
}
