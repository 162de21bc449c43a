//! Core data types for the ingestion pipeline.
//!
//! These types represent Arabic legal documents (court judgments, advisory
//! fatwas, statutes) and their sub-records, matching the relational schema
//! consumed downstream.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Kind of legal document, classified from the source filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocType {
    /// Court judgment (حكم).
    Judgment,

    /// Advisory opinion (فتوى).
    Fatwa,

    /// Statute (قانون).
    Law,

    /// Filename did not match any known keyword; the parsing core is skipped.
    Unknown,
}

impl DocType {
    /// Get the string value for JSON output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Judgment => "judgment",
            Self::Fatwa => "fatwa",
            Self::Law => "law",
            Self::Unknown => "unknown",
        }
    }

    /// Classify a filename by substring checks.
    ///
    /// Both the Latin keyword (case-insensitive) and the Arabic keyword are
    /// recognized, in judgment > fatwa > law precedence.
    ///
    /// # Examples
    /// ```
    /// use synqanun_ingest::types::DocType;
    ///
    /// assert_eq!(DocType::from_filename("judgment_412.xml"), DocType::Judgment);
    /// assert_eq!(DocType::from_filename("فتوى-87.xml"), DocType::Fatwa);
    /// assert_eq!(DocType::from_filename("notes.xml"), DocType::Unknown);
    /// ```
    #[must_use]
    pub fn from_filename(name: &str) -> Self {
        let low = name.to_lowercase();
        if low.contains("judgment") || name.contains("حكم") {
            Self::Judgment
        } else if low.contains("fatwa") || name.contains("فتوى") {
            Self::Fatwa
        } else if low.contains("law") || name.contains("قانون") {
            Self::Law
        } else {
            Self::Unknown
        }
    }

    /// Classify a path by its filename component.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        path.file_name()
            .and_then(|n| n.to_str())
            .map_or(Self::Unknown, Self::from_filename)
    }
}

/// Statute header record.
///
/// Every field defaults to `None`; an extraction miss on one field never
/// blocks another.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LawRecord {
    /// Law number from the title line.
    pub law_number: Option<i64>,

    /// Law year from the title line.
    pub law_year: Option<i64>,

    /// Issue date, normalized to YYYY-MM-DD.
    pub issue_date: Option<String>,

    /// Publication date, normalized to YYYY-MM-DD.
    pub publication_date: Option<String>,

    /// Effective date, normalized to YYYY-MM-DD.
    pub effective_date: Option<String>,

    /// Free-text subject, with any gazette reference stripped out.
    pub title: Option<String>,

    /// Gazette reference phrase removed from the title line.
    pub gazette_reference: Option<String>,
}

/// Court judgment header record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgmentRecord {
    /// Court name, from the second-to-last segment of the first line.
    pub court_name: Option<String>,

    /// Case type, from the last segment of the first line.
    pub case_type: Option<String>,

    /// Appeal number (رقم الطعن).
    pub appeal_number: Option<i64>,

    /// Judicial year (السنة القضائية).
    pub judicial_year: Option<i64>,

    /// Session date, normalized to YYYY-MM-DD and calendar-validated.
    pub session_date: Option<String>,

    /// Technical office number (مكتب فني).
    pub technical_office_number: Option<String>,

    /// Volume number (رقم الجزء).
    pub volume_number: Option<String>,

    /// Page number (رقم الصفحة).
    pub page_number: Option<String>,

    /// Rule number (القاعدة رقم).
    pub rule_number: Option<String>,

    /// Reference number (الرقم المرجعي).
    pub reference_number: Option<String>,

    /// Judicial panel attribution, first paragraph after the panel heading.
    pub judicial_panel: Option<String>,

    /// Facts section, paragraphs newline-joined.
    pub facts: Option<String>,

    /// Reasons section, paragraphs newline-joined.
    pub reasons: Option<String>,
}

/// Fatwa header record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FatwaRecord {
    /// Fatwa number from the title line.
    pub fatwa_number: Option<i64>,

    /// Fatwa year from the title line.
    pub fatwa_year: Option<i64>,

    /// Issue date, normalized to YYYY-MM-DD.
    pub issued_date: Option<String>,

    /// Session date, normalized to YYYY-MM-DD.
    pub session_date: Option<String>,

    /// File number (رقم الملف), kept verbatim (may contain "/").
    pub file_number: Option<String>,

    /// Issuing authority section.
    pub authority: Option<String>,

    /// Subject section.
    pub subject: Option<String>,

    /// Facts section.
    pub facts: Option<String>,

    /// Application section.
    pub application: Option<String>,

    /// Opinion section.
    pub opinion: Option<String>,
}

/// A numbered normative statement extracted from a judgment or fatwa.
///
/// Principles are kept in encounter order: source numbering may be
/// non-monotonic or repeated and the parser must not reorder or merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principle {
    /// Number from the principle header paragraph.
    pub principle_number: i64,

    /// Body text, space-joined across paragraphs.
    pub principle_text: String,
}

impl Principle {
    /// Create an empty principle for the given number.
    #[must_use]
    pub fn new(principle_number: i64) -> Self {
        Self {
            principle_number,
            principle_text: String::new(),
        }
    }
}

/// Whether an article belongs to the statute body or its issuance preamble.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleType {
    /// Regular statute article.
    #[default]
    Content,

    /// Issuance article (tagged اصدار in the header).
    Issuance,
}

impl ArticleType {
    /// Get the string value for JSON output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Content => "content",
            Self::Issuance => "issuance",
        }
    }
}

/// A numbered statute provision, possibly revised.
///
/// The number stays a string; the repeated-article suffix (مكرر) is carried
/// via `is_repeated` rather than baked into the number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Article number as captured from the header paragraph.
    pub article_number: String,

    /// Content vs issuance article.
    pub article_type: ArticleType,

    /// True iff the header carried the repeated-article tag.
    pub is_repeated: bool,

    /// Pre-revision text, if the document carries one.
    pub original_text: Option<String>,

    /// Current text; empty when the header had no body paragraphs.
    pub final_text: String,

    /// Revision date of the final text, normalized to YYYY-MM-DD.
    pub final_text_date: Option<String>,
}

impl Article {
    /// Open a fresh article from its header fields.
    #[must_use]
    pub fn new(article_number: impl Into<String>, article_type: ArticleType, is_repeated: bool) -> Self {
        Self {
            article_number: article_number.into(),
            article_type,
            is_repeated,
            original_text: None,
            final_text: String::new(),
            final_text_date: None,
        }
    }
}

/// Result of running the parsing core on one classified document.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedDocument {
    /// Judgment header plus its principles in encounter order.
    Judgment {
        record: JudgmentRecord,
        principles: Vec<Principle>,
    },

    /// Fatwa header plus its principles in encounter order.
    Fatwa {
        record: FatwaRecord,
        principles: Vec<Principle>,
    },

    /// Law header plus its articles in encounter order.
    Law {
        record: LawRecord,
        articles: Vec<Article>,
    },

    /// Classification miss; only envelope metadata is produced.
    Unknown,
}

impl ParsedDocument {
    /// The document type this result was parsed as.
    #[must_use]
    pub fn doc_type(&self) -> DocType {
        match self {
            Self::Judgment { .. } => DocType::Judgment,
            Self::Fatwa { .. } => DocType::Fatwa,
            Self::Law { .. } => DocType::Law,
            Self::Unknown => DocType::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doc_type_as_str() {
        assert_eq!(DocType::Judgment.as_str(), "judgment");
        assert_eq!(DocType::Fatwa.as_str(), "fatwa");
        assert_eq!(DocType::Law.as_str(), "law");
        assert_eq!(DocType::Unknown.as_str(), "unknown");
    }

    #[test]
    fn test_doc_type_from_filename_latin() {
        assert_eq!(DocType::from_filename("Judgment_2020_15.xml"), DocType::Judgment);
        assert_eq!(DocType::from_filename("fatwa-87.txt"), DocType::Fatwa);
        assert_eq!(DocType::from_filename("LAW_10_1990.xml"), DocType::Law);
    }

    #[test]
    fn test_doc_type_from_filename_arabic() {
        assert_eq!(DocType::from_filename("حكم النقض 412.xml"), DocType::Judgment);
        assert_eq!(DocType::from_filename("فتوى الجمعية.xml"), DocType::Fatwa);
        assert_eq!(DocType::from_filename("قانون 10.xml"), DocType::Law);
    }

    #[test]
    fn test_doc_type_from_filename_unknown() {
        assert_eq!(DocType::from_filename("document.xml"), DocType::Unknown);
        assert_eq!(DocType::from_filename(""), DocType::Unknown);
    }

    #[test]
    fn test_doc_type_from_path() {
        assert_eq!(
            DocType::from_path(Path::new("/data/in/law_10.xml")),
            DocType::Law
        );
        assert_eq!(DocType::from_path(Path::new("/")), DocType::Unknown);
    }

    #[test]
    fn test_article_type_serialization() {
        assert_eq!(
            serde_json::to_string(&ArticleType::Content).unwrap(),
            "\"content\""
        );
        assert_eq!(
            serde_json::to_string(&ArticleType::Issuance).unwrap(),
            "\"issuance\""
        );
    }

    #[test]
    fn test_article_new_defaults() {
        let article = Article::new("5", ArticleType::Content, false);
        assert_eq!(article.article_number, "5");
        assert_eq!(article.article_type, ArticleType::Content);
        assert!(!article.is_repeated);
        assert!(article.original_text.is_none());
        assert_eq!(article.final_text, "");
        assert!(article.final_text_date.is_none());
    }

    #[test]
    fn test_law_record_default_serializes_nulls() {
        let json = serde_json::to_value(LawRecord::default()).unwrap();
        assert!(json["law_number"].is_null());
        assert!(json["title"].is_null());
        assert!(json["gazette_reference"].is_null());
    }

    #[test]
    fn test_parsed_document_doc_type() {
        let parsed = ParsedDocument::Law {
            record: LawRecord::default(),
            articles: Vec::new(),
        };
        assert_eq!(parsed.doc_type(), DocType::Law);
        assert_eq!(ParsedDocument::Unknown.doc_type(), DocType::Unknown);
    }
}
