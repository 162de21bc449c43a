//! Heading-driven body segmentation for judgments and fatwas.
//!
//! Both document types share one machine shape: literal heading paragraphs
//! switch the current section, section paragraphs accumulate into the bound
//! field, and principle-start paragraphs open numbered sub-records. The
//! per-document differences live entirely in a configuration table.

mod config;
mod engine;
mod types;

pub use config::{fatwa_machine, judgment_machine};
pub use engine::SectionMachine;
pub use types::{JoinStyle, SectionBehavior, SectionSpec, Segmentation};
