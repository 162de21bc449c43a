//! Paragraph extraction from document payloads.
//!
//! The parsers consume an ordered sequence of non-empty, whitespace-cleaned
//! paragraphs. This module produces that sequence from a WordprocessingML
//! `word/document.xml` payload (every `w:t` run of a `w:p`, concatenated),
//! or from plain text with one paragraph per line. Unzipping the `.docx`
//! container is the caller's job.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::Result;

/// Runs of spaces/tabs, collapsed to a single space by [`clean`].
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+").expect("valid regex"));

/// Trim a paragraph and collapse internal space/tab runs.
///
/// # Examples
/// ```
/// use synqanun_ingest::paragraphs::clean;
///
/// assert_eq!(clean("  المادة \t 1  "), "المادة 1");
/// ```
#[must_use]
pub fn clean(text: &str) -> String {
    SPACE_RUN.replace_all(text.trim(), " ").into_owned()
}

/// Extract ordered paragraphs from a WordprocessingML `document.xml` payload.
///
/// Each `<w:p>` becomes one paragraph: its `<w:t>` text runs are concatenated
/// in document order, cleaned, and dropped when empty.
pub fn from_docx_xml(xml: &str) -> Result<Vec<String>> {
    let doc = roxmltree::Document::parse(xml)?;

    let mut paras = Vec::new();
    for p in doc
        .descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "p")
    {
        let text: String = p
            .descendants()
            .filter(|n| n.is_element() && n.tag_name().name() == "t")
            .filter_map(|t| t.text())
            .collect();

        let cleaned = clean(&text);
        if !cleaned.is_empty() {
            paras.push(cleaned);
        }
    }

    Ok(paras)
}

/// Split plain text into ordered paragraphs, one per non-empty line.
#[must_use]
pub fn from_plain_text(text: &str) -> Vec<String> {
    text.lines()
        .map(clean)
        .filter(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE_DOCX_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>قانون - رقم 10 </w:t></w:r><w:r><w:t>لسنة 2020</w:t></w:r></w:p>
    <w:p><w:r><w:t>   </w:t></w:r></w:p>
    <w:p><w:r><w:t>المادة 1</w:t></w:r></w:p>
  </w:body>
</w:document>"#;

    #[test]
    fn test_clean_collapses_space_runs() {
        assert_eq!(clean("a \t b"), "a b");
        assert_eq!(clean("   "), "");
        assert_eq!(clean("نص  عادي"), "نص عادي");
    }

    #[test]
    fn test_from_docx_xml_joins_runs_and_skips_blank() {
        let paras = from_docx_xml(SAMPLE_DOCX_XML).unwrap();
        assert_eq!(
            paras,
            vec!["قانون - رقم 10 لسنة 2020".to_string(), "المادة 1".to_string()]
        );
    }

    #[test]
    fn test_from_docx_xml_empty_body() {
        let xml = r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body/></w:document>"#;
        assert!(from_docx_xml(xml).unwrap().is_empty());
    }

    #[test]
    fn test_from_docx_xml_invalid_payload() {
        assert!(from_docx_xml("not xml").is_err());
    }

    #[test]
    fn test_from_plain_text() {
        let paras = from_plain_text("الوقائع\n\n  نص  الوقائع \n");
        assert_eq!(paras, vec!["الوقائع".to_string(), "نص الوقائع".to_string()]);
    }
}
