//! JSON export envelopes for parsed documents.
//!
//! One envelope per source document:
//! `{source_file, content_hash, doc_type, <law|judgment|fatwa>,
//! <articles|principles>}`. Unknown documents get a metadata-only envelope
//! with a note instead of parsed content.

use serde_json::{json, Map, Value};
use sha2::{Digest, Sha256};

use crate::error::Result;
use crate::types::ParsedDocument;

/// Note attached to envelopes for unclassifiable filenames.
const UNKNOWN_NOTE: &str =
    "unknown doc type by filename; rename file to include judgment/fatwa/law or حكم/فتوى/قانون";

/// Lowercase hex SHA-256 of the raw document bytes.
#[must_use]
pub fn content_hash(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// Build the export envelope for one parsed document.
pub fn envelope(source_file: &str, raw: &[u8], parsed: &ParsedDocument) -> Result<Value> {
    let mut out = Map::new();
    out.insert("source_file".to_string(), json!(source_file));
    out.insert("content_hash".to_string(), json!(content_hash(raw)));
    out.insert("doc_type".to_string(), json!(parsed.doc_type().as_str()));

    match parsed {
        ParsedDocument::Judgment { record, principles } => {
            out.insert("judgment".to_string(), serde_json::to_value(record)?);
            out.insert("principles".to_string(), serde_json::to_value(principles)?);
        }
        ParsedDocument::Fatwa { record, principles } => {
            out.insert("fatwa".to_string(), serde_json::to_value(record)?);
            out.insert("principles".to_string(), serde_json::to_value(principles)?);
        }
        ParsedDocument::Law { record, articles } => {
            out.insert("law".to_string(), serde_json::to_value(record)?);
            out.insert("articles".to_string(), serde_json::to_value(articles)?);
        }
        ParsedDocument::Unknown => {
            out.insert("note".to_string(), json!(UNKNOWN_NOTE));
        }
    }

    Ok(Value::Object(out))
}

/// Serialize an envelope as pretty-printed JSON.
pub fn to_json_string(envelope: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(envelope)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Article, ArticleType, LawRecord, Principle};

    #[test]
    fn test_content_hash_known_value() {
        // sha256 of the empty input
        assert_eq!(
            content_hash(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_envelope_law_shape() {
        let parsed = ParsedDocument::Law {
            record: LawRecord {
                law_number: Some(10),
                ..LawRecord::default()
            },
            articles: vec![Article::new("1", ArticleType::Content, false)],
        };

        let env = envelope("law_10.xml", b"raw bytes", &parsed).unwrap();
        assert_eq!(env["source_file"], "law_10.xml");
        assert_eq!(env["doc_type"], "law");
        assert_eq!(env["content_hash"], content_hash(b"raw bytes"));
        assert_eq!(env["law"]["law_number"], 10);
        assert!(env["law"]["title"].is_null());
        assert_eq!(env["articles"][0]["article_number"], "1");
        assert_eq!(env["articles"][0]["article_type"], "content");
        assert_eq!(env["articles"][0]["is_repeated"], false);
        assert!(env.get("principles").is_none());
        assert!(env.get("note").is_none());
    }

    #[test]
    fn test_envelope_judgment_has_principles() {
        let parsed = ParsedDocument::Judgment {
            record: crate::types::JudgmentRecord::default(),
            principles: vec![Principle {
                principle_number: 2,
                principle_text: "نص".to_string(),
            }],
        };

        let env = envelope("judgment.xml", b"x", &parsed).unwrap();
        assert_eq!(env["doc_type"], "judgment");
        assert_eq!(env["principles"][0]["principle_number"], 2);
        assert!(env.get("articles").is_none());
    }

    #[test]
    fn test_envelope_unknown_metadata_only() {
        let env = envelope("notes.xml", b"x", &ParsedDocument::Unknown).unwrap();
        assert_eq!(env["doc_type"], "unknown");
        assert!(env["note"].as_str().unwrap().contains("judgment/fatwa/law"));
        assert!(env.get("law").is_none());
        assert!(env.get("judgment").is_none());
        assert!(env.get("fatwa").is_none());
    }

    #[test]
    fn test_to_json_string_round_trips() {
        let env = envelope("f.xml", b"x", &ParsedDocument::Unknown).unwrap();
        let text = to_json_string(&env).unwrap();
        let back: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(back, env);
    }
}
