//! Court judgment parsing.
//!
//! Header fields are extracted from a window over the first paragraphs by
//! independent anchored patterns; the body is segmented by the shared
//! heading machine into panel, principles, facts and reasons.

use regex::Regex;
use std::sync::LazyLock;

use crate::dates::normalize_validated;
use crate::segmenter::judgment_machine;
use crate::types::{JudgmentRecord, Principle};

/// Number of leading paragraphs joined into the header window. Judgment
/// metadata is spread over several lines rather than a single title line.
const HEADER_WINDOW_PARAS: usize = 12;

#[allow(clippy::expect_used)] // Static regexes that are guaranteed to be valid
static APPEAL_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"الطعن\s+رقم\s+([0-9]+)").expect("valid regex"));

#[allow(clippy::expect_used)]
static JUDICIAL_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"لسنة\s+([0-9]+)").expect("valid regex"));

#[allow(clippy::expect_used)]
static SESSION_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"تاريخ\s+الجلسة\s*:?\s*([0-9\s/]+)").expect("valid regex"));

#[allow(clippy::expect_used)]
static TECHNICAL_OFFICE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"مكتب\s+فني\s+([0-9]+)").expect("valid regex"));

#[allow(clippy::expect_used)]
static VOLUME_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"رقم\s+الجزء\s+([0-9]+)").expect("valid regex"));

#[allow(clippy::expect_used)]
static PAGE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"رقم\s+الصفحة\s+([0-9]+)").expect("valid regex"));

#[allow(clippy::expect_used)]
static RULE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"القاعدة\s+رقم\s+([0-9]+)").expect("valid regex"));

#[allow(clippy::expect_used)]
static REFERENCE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"الرقم\s+المرجعي\s*:\s*([0-9]+)").expect("valid regex"));

/// First captured group as an integer, `None` on miss.
fn capture_int(pattern: &Regex, window: &str) -> Option<i64> {
    pattern.captures(window)?.get(1)?.as_str().parse().ok()
}

/// First captured group, trimmed, `None` on miss.
fn capture_str(pattern: &Regex, window: &str) -> Option<String> {
    Some(pattern.captures(window)?.get(1)?.as_str().trim().to_string())
}

/// Split the first line on "-" into court name and case type.
///
/// Three or more segments: the last two are court and case type. Exactly
/// two: the second is the court, the case type is absent.
fn split_court_line(line: &str) -> (Option<String>, Option<String>) {
    let parts: Vec<&str> = line
        .split('-')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();
    match parts.len() {
        n if n >= 3 => (
            Some(parts[n - 2].to_string()),
            Some(parts[n - 1].to_string()),
        ),
        2 => (Some(parts[1].to_string()), None),
        _ => (None, None),
    }
}

/// Parse a judgment document into its header record and principle list.
#[must_use]
pub fn parse_judgment(paras: &[String]) -> (JudgmentRecord, Vec<Principle>) {
    let header_window = paras
        .iter()
        .take(HEADER_WINDOW_PARAS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n");

    let (court_name, case_type) =
        split_court_line(paras.first().map_or("", String::as_str));

    let session_date = capture_str(&SESSION_DATE, &header_window)
        .and_then(|fragment| normalize_validated(&fragment));

    let mut segmentation = judgment_machine().segment(paras);

    let record = JudgmentRecord {
        court_name,
        case_type,
        appeal_number: capture_int(&APPEAL_NUMBER, &header_window),
        judicial_year: capture_int(&JUDICIAL_YEAR, &header_window),
        session_date,
        technical_office_number: capture_str(&TECHNICAL_OFFICE, &header_window),
        volume_number: capture_str(&VOLUME_NUMBER, &header_window),
        page_number: capture_str(&PAGE_NUMBER, &header_window),
        rule_number: capture_str(&RULE_NUMBER, &header_window),
        reference_number: capture_str(&REFERENCE_NUMBER, &header_window),
        judicial_panel: segmentation.take("panel"),
        facts: segmentation.take("facts"),
        reasons: segmentation.take("reasons"),
    };

    (record, segmentation.principles)
}
