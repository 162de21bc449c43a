//! Fatwa (advisory opinion) parsing.
//!
//! Header fields come from the title line; the body is segmented by the
//! shared heading machine into authority, subject, facts, application and
//! opinion, with principle headers recognized in any state.

use regex::Regex;
use std::sync::LazyLock;

use crate::dates::normalize;
use crate::segmenter::fatwa_machine;
use crate::types::{FatwaRecord, Principle};

#[allow(clippy::expect_used)] // Static regexes that are guaranteed to be valid
static FATWA_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"الفتوى\s+رقم\s+([0-9]+)").expect("valid regex"));

#[allow(clippy::expect_used)]
static FATWA_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"لسنة\s+([0-9]{4})").expect("valid regex"));

#[allow(clippy::expect_used)]
static FILE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"رقم\s+الملف\s+([0-9/]+)").expect("valid regex"));

#[allow(clippy::expect_used)]
static ISSUED_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"بتاريخ\s+([0-9/\-]+)").expect("valid regex"));

#[allow(clippy::expect_used)]
static SESSION_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"تاريخ\s+الجلسة\s+([0-9/\-]+)").expect("valid regex"));

/// Parse a fatwa document into its header record and principle list.
#[must_use]
pub fn parse_fatwa(paras: &[String]) -> (FatwaRecord, Vec<Principle>) {
    let title = paras.first().map_or("", String::as_str);

    let capture = |pattern: &Regex| {
        pattern
            .captures(title)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
    };

    // Body starts after the title line
    let body = paras.get(1..).unwrap_or(&[]);
    let mut segmentation = fatwa_machine().segment(body);

    let record = FatwaRecord {
        fatwa_number: capture(&FATWA_NUMBER).and_then(|s| s.parse().ok()),
        fatwa_year: capture(&FATWA_YEAR).and_then(|s| s.parse().ok()),
        issued_date: capture(&ISSUED_DATE).and_then(|s| normalize(&s)),
        session_date: capture(&SESSION_DATE).and_then(|s| normalize(&s)),
        file_number: capture(&FILE_NUMBER),
        authority: segmentation.take("authority"),
        subject: segmentation.take("subject"),
        facts: segmentation.take("facts"),
        application: segmentation.take("application"),
        opinion: segmentation.take("opinion"),
    };

    (record, segmentation.principles)
}
