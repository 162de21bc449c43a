//! Statute parsing: title-line field extraction plus the article
//! boundary machine.
//!
//! The title line is cleaned of its gazette reference before extraction so
//! the reference does not pollute the free-text subject. The remaining
//! paragraphs are scanned for article headers ("المادة <n>" with an
//! optional issuance/repeated tag); each header flushes the open article
//! and opens the next one.

use regex::Regex;
use std::sync::LazyLock;

use crate::dates::normalize_flexible;
use crate::types::{Article, ArticleType, LawRecord};

/// How many leading paragraphs the subject fallback scan covers.
const SUBJECT_SCAN_PARAS: usize = 20;

/// Divider paragraph announcing the issuance-articles block. Skipped with
/// no state change: it neither opens nor closes an article.
const ISSUANCE_DIVIDER: &str = "مواد إصدار";

/// Marker prefix for a paragraph carrying the article's pre-revision text.
const ORIGINAL_TEXT_MARKER: &str = "النص الاصلى للمادة";

/// Marker phrase for a paragraph carrying the final-text revision date.
const FINAL_TEXT_DATE_MARKER: &str = "النص النهائى للمادة بتاريخ";

/// Subject marker for the fallback scan over the leading paragraphs.
const SUBJECT_MARKER: &str = "بشأن";

/// Gazette reference: the marker phrase up to the first digit, then the
/// rest of the line. The whole match is the reference.
#[allow(clippy::expect_used)] // Static regexes that are guaranteed to be valid
static GAZETTE_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"الجريدة الرسمية.*?[0-9].*").expect("valid regex"));

#[allow(clippy::expect_used)]
static LAW_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"قانون\s*-\s*رقم\s*([0-9]+)").expect("valid regex"));

#[allow(clippy::expect_used)]
static LAW_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"لسنة\s*([0-9]{4})").expect("valid regex"));

#[allow(clippy::expect_used)]
static ISSUE_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"الصادر\s+بتاريخ\s+([0-9/\-]+)").expect("valid regex"));

#[allow(clippy::expect_used)]
static PUBLICATION_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"نشر\s+بتاريخ\s+([0-9/\-]+)").expect("valid regex"));

#[allow(clippy::expect_used)]
static EFFECTIVE_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"يعمل\s+به\s+إ?عتبارا\s+من\s+([0-9/\-]+)").expect("valid regex")
});

#[allow(clippy::expect_used)]
static SUBJECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"بشأن\s+(.+)$").expect("valid regex"));

/// Article header: marker + integer + optional tag (issuance or repeated),
/// as the whole paragraph.
#[allow(clippy::expect_used)]
static ARTICLE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:المادة|مادة)\s+([0-9]+)(?:\s+(اصدار|مكرر))?$").expect("valid regex")
});

/// Date substring inside a final-text-date paragraph, slash or ISO form.
#[allow(clippy::expect_used)]
static FINAL_TEXT_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{1,2}/[0-9]{1,2}/[0-9]{4}|[0-9]{4}-[0-9]{2}-[0-9]{2})")
        .expect("valid regex")
});

/// Open article being accumulated by the boundary machine.
#[derive(Debug)]
struct ArticleBuilder {
    number: String,
    article_type: ArticleType,
    is_repeated: bool,
    original_parts: Vec<String>,
    final_parts: Vec<String>,
    final_text_date: Option<String>,
}

impl ArticleBuilder {
    fn new(number: String, tag: Option<&str>) -> Self {
        Self {
            number,
            article_type: if tag == Some("اصدار") {
                ArticleType::Issuance
            } else {
                ArticleType::Content
            },
            is_repeated: tag == Some("مكرر"),
            original_parts: Vec::new(),
            final_parts: Vec::new(),
            final_text_date: None,
        }
    }

    /// Finalize into an article, trimming the joined texts once.
    fn finish(self) -> Article {
        Article {
            article_number: self.number,
            article_type: self.article_type,
            is_repeated: self.is_repeated,
            original_text: if self.original_parts.is_empty() {
                None
            } else {
                Some(self.original_parts.join(" ").trim().to_string())
            },
            final_text: self.final_parts.join(" ").trim().to_string(),
            final_text_date: self.final_text_date,
        }
    }
}

/// Push the open article, if any, into the output list.
fn flush(open: &mut Option<ArticleBuilder>, out: &mut Vec<Article>) {
    if let Some(builder) = open.take() {
        out.push(builder.finish());
    }
}

/// Run the article boundary machine over the paragraph sequence.
///
/// Paragraphs before the first article header are dropped. Duplicate
/// article numbers are kept in encounter order; downstream owns dedup.
fn parse_articles(paras: &[String]) -> Vec<Article> {
    let mut articles = Vec::new();
    let mut open: Option<ArticleBuilder> = None;

    for para in paras {
        let text = para.trim();

        if text == ISSUANCE_DIVIDER {
            continue;
        }

        if let Some(caps) = ARTICLE_HEADER.captures(text) {
            flush(&mut open, &mut articles);
            let number = caps[1].to_string();
            let tag = caps.get(2).map(|m| m.as_str());
            open = Some(ArticleBuilder::new(number, tag));
            continue;
        }

        let Some(builder) = open.as_mut() else {
            continue;
        };

        if text.contains(FINAL_TEXT_DATE_MARKER) {
            if let Some(m) = FINAL_TEXT_DATE.find(text) {
                builder.final_text_date = normalize_flexible(m.as_str());
            }
            continue;
        }

        if let Some(rest) = text.strip_prefix(ORIGINAL_TEXT_MARKER) {
            builder.original_parts.push(rest.trim().to_string());
            continue;
        }

        builder.final_parts.push(text.to_string());
    }

    flush(&mut open, &mut articles);
    articles
}

/// Parse a statute document into its header record and article list.
#[must_use]
pub fn parse_law(paras: &[String]) -> (LawRecord, Vec<Article>) {
    let Some(first) = paras.first() else {
        return (LawRecord::default(), Vec::new());
    };

    let mut title_line = first.clone();
    let mut gazette_reference = None;
    if let Some(m) = GAZETTE_REFERENCE.find(&title_line) {
        gazette_reference = Some(m.as_str().to_string());
        title_line = title_line.replace(m.as_str(), "").trim().to_string();
    }

    let capture = |pattern: &Regex| {
        pattern
            .captures(&title_line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
    };

    // Subject from the cleaned title line, else the first later paragraph
    // opening with the subject marker.
    let title = capture(&SUBJECT).or_else(|| {
        paras.iter().take(SUBJECT_SCAN_PARAS).find_map(|p| {
            p.strip_prefix(SUBJECT_MARKER)
                .map(|rest| rest.trim().to_string())
        })
    });

    let record = LawRecord {
        law_number: capture(&LAW_NUMBER).and_then(|s| s.parse().ok()),
        law_year: capture(&LAW_YEAR).and_then(|s| s.parse().ok()),
        issue_date: capture(&ISSUE_DATE).and_then(|s| normalize_flexible(&s)),
        publication_date: capture(&PUBLICATION_DATE).and_then(|s| normalize_flexible(&s)),
        effective_date: capture(&EFFECTIVE_DATE).and_then(|s| normalize_flexible(&s)),
        title,
        gazette_reference,
    };

    (record, parse_articles(paras))
}
