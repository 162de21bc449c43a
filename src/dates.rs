//! Date normalization for header fields.
//!
//! Every date field in the output is either canonical `YYYY-MM-DD` or
//! `None` - never a partially parsed string. Three variants exist and the
//! asymmetry between them is deliberate (it matches the source corpus):
//!
//! - [`normalize`]: ISO or `D/M/YYYY`, digit-class matching only (fatwa).
//! - [`normalize_flexible`]: additionally accepts `D-M-YYYY` (law).
//! - [`normalize_validated`]: whitespace-tolerant `D/M/YYYY`, rejected when
//!   the day/month combination is not a real calendar date (judgment
//!   session dates).

use chrono::NaiveDate;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// ISO date substring: YYYY-MM-DD.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{4}-[0-9]{2}-[0-9]{2}").expect("valid regex"));

/// Day/month/year with slash separators: D[D]/M[M]/YYYY.
#[allow(clippy::expect_used)]
static SLASH_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]{1,2})/([0-9]{1,2})/([0-9]{4})").expect("valid regex"));

/// Day/month/year with hyphen separators: D[D]-M[M]-YYYY.
#[allow(clippy::expect_used)]
static HYPHEN_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]{1,2})-([0-9]{1,2})-([0-9]{4})").expect("valid regex"));

/// Slash form with optional whitespace around the separators, as it appears
/// in judgment session-date lines.
#[allow(clippy::expect_used)]
static SPACED_SLASH_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{1,2})\s*/\s*([0-9]{1,2})\s*/\s*([0-9]{4})").expect("valid regex")
});

/// Reassemble (day, month, year) captures as zero-padded YYYY-MM-DD.
fn assemble(caps: &Captures<'_>) -> Option<String> {
    let day: u32 = caps.get(1)?.as_str().parse().ok()?;
    let month: u32 = caps.get(2)?.as_str().parse().ok()?;
    let year: i64 = caps.get(3)?.as_str().parse().ok()?;
    Some(format!("{year:04}-{month:02}-{day:02}"))
}

/// Normalize a date fragment, first match wins: ISO substring verbatim,
/// else slash form zero-padded and reassembled.
///
/// # Examples
/// ```
/// use synqanun_ingest::dates::normalize;
///
/// assert_eq!(normalize("2020-05-01"), Some("2020-05-01".to_string()));
/// assert_eq!(normalize("1/5/2020"), Some("2020-05-01".to_string()));
/// assert_eq!(normalize("not a date"), None);
/// ```
#[must_use]
pub fn normalize(fragment: &str) -> Option<String> {
    let fragment = fragment.trim();
    if let Some(m) = ISO_DATE.find(fragment) {
        return Some(m.as_str().to_string());
    }
    SLASH_DATE.captures(fragment).and_then(|caps| assemble(&caps))
}

/// Like [`normalize`], but also accepts the hyphen-separated D-M-YYYY form
/// found in statute title lines.
///
/// # Examples
/// ```
/// use synqanun_ingest::dates::normalize_flexible;
///
/// assert_eq!(normalize_flexible("15-6-1998"), Some("1998-06-15".to_string()));
/// ```
#[must_use]
pub fn normalize_flexible(fragment: &str) -> Option<String> {
    if let Some(date) = normalize(fragment) {
        return Some(date);
    }
    HYPHEN_DATE
        .captures(fragment.trim())
        .and_then(|caps| assemble(&caps))
}

/// Normalize a whitespace-tolerant slash-form date and reject fragments
/// that do not form a real calendar date.
///
/// # Examples
/// ```
/// use synqanun_ingest::dates::normalize_validated;
///
/// assert_eq!(normalize_validated("17 / 3 / 1999"), Some("1999-03-17".to_string()));
/// assert_eq!(normalize_validated("31/2/2020"), None);
/// ```
#[must_use]
pub fn normalize_validated(fragment: &str) -> Option<String> {
    let caps = SPACED_SLASH_DATE.captures(fragment)?;
    let day: u32 = caps.get(1)?.as_str().parse().ok()?;
    let month: u32 = caps.get(2)?.as_str().parse().ok()?;
    let year: i32 = caps.get(3)?.as_str().parse().ok()?;
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    Some(date.format("%Y-%m-%d").to_string())
}
