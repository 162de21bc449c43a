//! The shared heading-driven segmentation machine.

use std::collections::BTreeMap;

use regex::Regex;

use super::types::{JoinStyle, SectionBehavior, SectionSpec, Segmentation};
use crate::types::Principle;

/// Where the machine currently sends paragraphs.
#[derive(Debug, Clone, Copy)]
enum Mode {
    /// Before the first heading; paragraphs here are dropped.
    Initial,

    /// Inside the section at the given table index.
    Section(usize),

    /// Inside a principle opened outside any section (fatwa style).
    Principle,
}

/// Segmentation machine for one document type.
///
/// Built from an immutable section table plus the principle-start pattern.
/// `segment` is a pure function of the paragraph slice: the machine holds
/// no mutable state between runs and one instance can serve any number of
/// documents.
pub struct SectionMachine {
    specs: &'static [SectionSpec],
    principle_start: &'static Regex,
    principles_anywhere: bool,
}

impl SectionMachine {
    /// Create a machine from a section table.
    ///
    /// With `principles_anywhere`, the principle-start pattern is checked in
    /// every state (fatwa); otherwise it only applies inside a
    /// [`SectionBehavior::Principles`] section (judgment).
    #[must_use]
    pub fn new(
        specs: &'static [SectionSpec],
        principle_start: &'static Regex,
        principles_anywhere: bool,
    ) -> Self {
        Self {
            specs,
            principle_start,
            principles_anywhere,
        }
    }

    /// Run the machine over a paragraph sequence.
    ///
    /// Never fails: unmatched or empty input yields an empty segmentation.
    #[must_use]
    pub fn segment(&self, paras: &[String]) -> Segmentation {
        let mut acc: BTreeMap<&'static str, Vec<String>> = BTreeMap::new();
        let mut principles: Vec<Principle> = Vec::new();
        let mut open: Option<(i64, Vec<String>)> = None;
        let mut mode = Mode::Initial;

        for para in paras {
            let text = para.trim();

            // Heading labels switch sections; the label paragraph itself is
            // consumed, never accumulated.
            if let Some(idx) = self.specs.iter().position(|s| s.label == text) {
                flush_principle(&mut open, &mut principles);
                mode = Mode::Section(idx);
                continue;
            }

            if self.principles_anywhere {
                if let Some(number) = self.match_principle_start(text) {
                    flush_principle(&mut open, &mut principles);
                    open = Some((number, Vec::new()));
                    mode = Mode::Principle;
                    continue;
                }
            }

            match mode {
                Mode::Initial => {}
                Mode::Principle => {
                    if let Some((_, parts)) = open.as_mut() {
                        parts.push(text.to_string());
                    }
                }
                Mode::Section(idx) => {
                    let spec = &self.specs[idx];
                    match spec.behavior {
                        SectionBehavior::Accumulate(_) => {
                            acc.entry(spec.key).or_default().push(text.to_string());
                        }
                        SectionBehavior::FirstParagraph => {
                            let slot = acc.entry(spec.key).or_default();
                            if slot.is_empty() {
                                slot.push(text.to_string());
                            }
                        }
                        SectionBehavior::Principles => {
                            if let Some(number) = self.match_principle_start(text) {
                                flush_principle(&mut open, &mut principles);
                                open = Some((number, Vec::new()));
                            } else if let Some((_, parts)) = open.as_mut() {
                                parts.push(text.to_string());
                            }
                            // Text before the first principle start is dropped.
                        }
                    }
                }
            }
        }

        flush_principle(&mut open, &mut principles);

        let mut segmentation = Segmentation::new();
        segmentation.principles = principles;
        for spec in self.specs {
            if let Some(parts) = acc.remove(spec.key) {
                let joined = match spec.behavior {
                    SectionBehavior::Accumulate(JoinStyle::Newline) => parts.join("\n"),
                    _ => parts.join(" "),
                };
                segmentation.insert(spec.key, joined.trim().to_string());
            }
        }
        segmentation
    }

    /// Match a principle-start paragraph and parse its number.
    fn match_principle_start(&self, text: &str) -> Option<i64> {
        self.principle_start
            .captures(text)?
            .get(1)?
            .as_str()
            .parse()
            .ok()
    }
}

/// Push any open principle into the output list, space-joining its text.
fn flush_principle(open: &mut Option<(i64, Vec<String>)>, out: &mut Vec<Principle>) {
    if let Some((number, parts)) = open.take() {
        out.push(Principle {
            principle_number: number,
            principle_text: parts.join(" ").trim().to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmenter::config::{fatwa_machine, judgment_machine};
    use pretty_assertions::assert_eq;

    fn paras(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| (*t).to_string()).collect()
    }

    #[test]
    fn test_segment_empty_input() {
        let machine = judgment_machine();
        let seg = machine.segment(&[]);
        assert!(seg.principles.is_empty());
        assert_eq!(seg.get("facts"), None);
    }

    #[test]
    fn test_paragraphs_before_first_heading_dropped() {
        let machine = judgment_machine();
        let seg = machine.segment(&paras(&["نص تمهيدي", "الوقائع", "وقائع الدعوى"]));
        assert_eq!(seg.get("facts"), Some("وقائع الدعوى"));
    }

    #[test]
    fn test_heading_paragraph_not_accumulated() {
        let machine = judgment_machine();
        let seg = machine.segment(&paras(&["الوقائع", "أولا", "ثانيا"]));
        assert_eq!(seg.get("facts"), Some("أولا\nثانيا"));
    }

    #[test]
    fn test_first_paragraph_section_ignores_rest() {
        let machine = judgment_machine();
        let seg = machine.segment(&paras(&[
            "الهيئة",
            "برئاسة المستشار أحمد",
            "وعضوية المستشار سمير",
            "الوقائع",
            "نص",
        ]));
        assert_eq!(seg.get("panel"), Some("برئاسة المستشار أحمد"));
        assert_eq!(seg.get("facts"), Some("نص"));
    }

    #[test]
    fn test_principles_encounter_order_preserved() {
        let machine = judgment_machine();
        let seg = machine.segment(&paras(&[
            "المبادئ القانونية",
            "مبدأ رقم 2",
            "نص المبدأ الثاني",
            "مبدأ رقم 1",
            "نص المبدأ الأول",
            "مبدأ رقم 3",
            "نص المبدأ الثالث",
        ]));
        let numbers: Vec<i64> = seg.principles.iter().map(|p| p.principle_number).collect();
        assert_eq!(numbers, vec![2, 1, 3]);
        assert_eq!(seg.principles[1].principle_text, "نص المبدأ الأول");
    }

    #[test]
    fn test_principle_flushed_by_next_heading() {
        let machine = judgment_machine();
        let seg = machine.segment(&paras(&[
            "المبادئ القانونية",
            "مبدأ رقم 7",
            "سطر أول",
            "سطر ثان",
            "الحيثيات",
            "حيثيات الحكم",
        ]));
        assert_eq!(seg.principles.len(), 1);
        assert_eq!(seg.principles[0].principle_number, 7);
        assert_eq!(seg.principles[0].principle_text, "سطر أول سطر ثان");
        assert_eq!(seg.get("reasons"), Some("حيثيات الحكم"));
    }

    #[test]
    fn test_principle_flushed_at_end_of_stream() {
        let machine = judgment_machine();
        let seg = machine.segment(&paras(&["المبادئ القانونية", "مبدأ رقم 4", "نص"]));
        assert_eq!(seg.principles.len(), 1);
        assert_eq!(seg.principles[0].principle_text, "نص");
    }

    #[test]
    fn test_text_without_open_principle_dropped() {
        let machine = judgment_machine();
        let seg = machine.segment(&paras(&["المبادئ القانونية", "نص بلا مبدأ", "مبدأ رقم 1"]));
        assert_eq!(seg.principles.len(), 1);
        assert_eq!(seg.principles[0].principle_text, "");
    }

    #[test]
    fn test_judgment_principle_start_requires_its_section() {
        // Judgment principle headers outside the principles section are
        // ordinary text.
        let machine = judgment_machine();
        let seg = machine.segment(&paras(&["الوقائع", "مبدأ رقم 1", "نص"]));
        assert!(seg.principles.is_empty());
        assert_eq!(seg.get("facts"), Some("مبدأ رقم 1\nنص"));
    }

    #[test]
    fn test_fatwa_principle_start_in_any_state() {
        let machine = fatwa_machine();
        let seg = machine.segment(&paras(&[
            "الرأى",
            "رأي الجمعية",
            "مبدأ 3",
            "نص المبدأ",
        ]));
        assert_eq!(seg.get("opinion"), Some("رأي الجمعية"));
        assert_eq!(seg.principles.len(), 1);
        assert_eq!(seg.principles[0].principle_number, 3);
        assert_eq!(seg.principles[0].principle_text, "نص المبدأ");
    }

    #[test]
    fn test_fatwa_principle_start_must_be_whole_paragraph() {
        let machine = fatwa_machine();
        let seg = machine.segment(&paras(&["الرأى", "مبدأ 3 مع ذيل"]));
        assert!(seg.principles.is_empty());
        assert_eq!(seg.get("opinion"), Some("مبدأ 3 مع ذيل"));
    }

    #[test]
    fn test_fatwa_sections_space_joined() {
        let machine = fatwa_machine();
        let seg = machine.segment(&paras(&["الوقائع", "فقرة أولى", "فقرة ثانية"]));
        assert_eq!(seg.get("facts"), Some("فقرة أولى فقرة ثانية"));
    }
}
