//! Types for the body segmentation system.

use std::collections::BTreeMap;

use crate::types::Principle;

/// How a section's paragraphs are joined at flush time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinStyle {
    /// Space-joined narrative text (fatwa sections).
    Space,

    /// Newline-joined text blocks (judgment facts/reasons).
    Newline,
}

/// What the machine does with paragraphs while a section is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionBehavior {
    /// Append every paragraph to the section accumulator.
    Accumulate(JoinStyle),

    /// Keep only the first paragraph; later paragraphs are ignored
    /// (single-line attributions such as the judgment panel).
    FirstParagraph,

    /// Paragraphs belong to numbered principles opened by the
    /// principle-start pattern; text before the first start is dropped.
    Principles,
}

/// One row of a document type's section table: a literal heading label
/// bound to an output key and a behavior.
#[derive(Debug, Clone, Copy)]
pub struct SectionSpec {
    /// Exact (trimmed) paragraph text that triggers the transition.
    pub label: &'static str,

    /// Output key the section accumulates under.
    pub key: &'static str,

    /// Accumulation behavior while this section is active.
    pub behavior: SectionBehavior,
}

impl SectionSpec {
    /// A plain accumulation section.
    #[must_use]
    pub const fn accumulate(label: &'static str, key: &'static str, join: JoinStyle) -> Self {
        Self {
            label,
            key,
            behavior: SectionBehavior::Accumulate(join),
        }
    }

    /// A first-paragraph-wins section.
    #[must_use]
    pub const fn first_paragraph(label: &'static str, key: &'static str) -> Self {
        Self {
            label,
            key,
            behavior: SectionBehavior::FirstParagraph,
        }
    }

    /// A principles-bearing section.
    #[must_use]
    pub const fn principles(label: &'static str, key: &'static str) -> Self {
        Self {
            label,
            key,
            behavior: SectionBehavior::Principles,
        }
    }
}

/// Output of a segmentation run: non-empty section texts keyed by the
/// table's output keys, plus principles in encounter order.
#[derive(Debug, Default)]
pub struct Segmentation {
    sections: BTreeMap<&'static str, String>,

    /// Principles in encounter order, never reordered or deduplicated.
    pub principles: Vec<Principle>,
}

impl Segmentation {
    /// Create an empty segmentation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a section's joined text. Empty text is not stored.
    pub fn insert(&mut self, key: &'static str, text: String) {
        if !text.is_empty() {
            self.sections.insert(key, text);
        }
    }

    /// Remove and return a section's text, `None` when the section never
    /// accumulated anything.
    pub fn take(&mut self, key: &str) -> Option<String> {
        self.sections.remove(key)
    }

    /// Look at a section's text without consuming it.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.sections.get(key).map(String::as_str)
    }
}
