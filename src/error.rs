//! Error types for the ingestion shell.
//!
//! Parsing itself never fails: a malformed field degrades to `None` and an
//! empty document yields an all-default record. `IngestError` covers the
//! shell around the parsers - reading files, decoding the paragraph XML,
//! and writing export output.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the ingest library.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Document payload is not valid WordprocessingML XML.
    #[error("Document XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// Input file has no filename component to classify.
    #[error("Cannot classify path without a filename: {0}")]
    MissingFilename(PathBuf),

    /// Input file extension is not one the ingester reads.
    #[error("Unsupported input extension for {path}: expected .xml or .txt")]
    UnsupportedExtension { path: PathBuf },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

/// Result type alias for ingest operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::MissingFilename(PathBuf::from("/"));
        assert!(err.to_string().contains("filename"));
    }

    #[test]
    fn test_unsupported_extension_display() {
        let err = IngestError::UnsupportedExtension {
            path: PathBuf::from("doc.pdf"),
        };
        assert!(err.to_string().contains("doc.pdf"));
        assert!(err.to_string().contains(".xml or .txt"));
    }
}
