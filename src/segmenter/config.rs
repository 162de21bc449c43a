//! Section tables for judgment and fatwa bodies.

use regex::Regex;
use std::sync::LazyLock;

use super::engine::SectionMachine;
use super::types::{JoinStyle, SectionSpec};

/// Judgment body sections.
///
/// Facts and reasons are newline-joined text blocks; the panel section is a
/// single-line attribution that keeps only its first paragraph.
static JUDGMENT_SECTIONS: &[SectionSpec] = &[
    SectionSpec::first_paragraph("الهيئة", "panel"),
    SectionSpec::principles("المبادئ القانونية", "principles"),
    SectionSpec::accumulate("الوقائع", "facts", JoinStyle::Newline),
    SectionSpec::accumulate("الحيثيات", "reasons", JoinStyle::Newline),
];

/// Fatwa body sections, all space-joined narrative text.
static FATWA_SECTIONS: &[SectionSpec] = &[
    SectionSpec::accumulate("الجهة", "authority", JoinStyle::Space),
    SectionSpec::accumulate("موضوع الفتوى", "subject", JoinStyle::Space),
    SectionSpec::accumulate("الوقائع", "facts", JoinStyle::Space),
    SectionSpec::accumulate("التطبيق", "application", JoinStyle::Space),
    SectionSpec::accumulate("الرأى", "opinion", JoinStyle::Space),
];

/// Judgment principle header: "مبدأ رقم <n>" as a paragraph prefix, only
/// meaningful inside the principles section.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static JUDGMENT_PRINCIPLE_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^مبدأ\s+رقم\s+([0-9]+)").expect("valid regex"));

/// Fatwa principle header: "مبدأ <n>" or "مبدأ رقم <n>" as the whole
/// paragraph, recognized in any state.
#[allow(clippy::expect_used)]
static FATWA_PRINCIPLE_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^مبدأ(?:\s+رقم)?\s+([0-9]+)\s*$").expect("valid regex"));

/// Build the segmentation machine for judgment bodies.
#[must_use]
pub fn judgment_machine() -> SectionMachine {
    SectionMachine::new(JUDGMENT_SECTIONS, &JUDGMENT_PRINCIPLE_START, false)
}

/// Build the segmentation machine for fatwa bodies.
#[must_use]
pub fn fatwa_machine() -> SectionMachine {
    SectionMachine::new(FATWA_SECTIONS, &FATWA_PRINCIPLE_START, true)
}
