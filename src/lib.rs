//! SynQanun Ingest - Parse Arabic legal documents into structured records.
//!
//! This crate turns raw Egyptian legal documents (judgments, Fatawa and
//! laws from the State Council corpus) into typed records plus ordered
//! sub-records (articles or legal principles), ready for JSON export.
//!
//! # Example
//!
//! ```
//! use synqanun_ingest::types::DocType;
//!
//! assert_eq!(DocType::from_filename("judgment_123.xml"), DocType::Judgment);
//! assert_eq!(DocType::from_filename("قانون_10_2020.txt"), DocType::Law);
//! ```
//!
//! # Architecture
//!
//! The ingester is organized into several modules:
//!
//! - [`types`]: Core data types (records, articles, principles, DocType)
//! - [`error`]: Error types and Result alias
//! - [`dates`]: Date string normalization to ISO form
//! - [`paragraphs`]: Paragraph extraction from WordprocessingML or plain text
//! - [`segmenter`]: Heading-driven section segmentation machine
//! - [`parsers`]: Document-type parsers (judgment, fatwa, law)
//! - [`export`]: JSON envelope construction with content hashing
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod dates;
pub mod error;
pub mod export;
pub mod paragraphs;
pub mod parsers;
pub mod segmenter;
pub mod types;

// Re-export main functions
pub use parsers::{parse_classified, parse_fatwa, parse_judgment, parse_law};

// Re-export commonly used items
pub use error::{IngestError, Result};
pub use types::{
    Article, ArticleType, DocType, FatwaRecord, JudgmentRecord, LawRecord, ParsedDocument,
    Principle,
};
