//! Text pipeline for language-model legal drafts.
//!
//! Turns raw generated output into a clean document (`strip_and_clean`),
//! renders an alternate numbered layout (`format_structured`), and pulls a
//! handful of best-effort fields out of a draft (`extract_fields`).

pub mod boundary;
pub mod draft;
mod error;
pub mod extract;
pub mod filler;
pub mod layout;
pub mod normalize;
pub mod pipeline;
pub mod structure;

pub use draft::{AgentReply, take_completed_draft};
pub use error::CoreError;
pub use extract::{ExtractedFields, NOT_FOUND, extract_fields};
pub use layout::{ExportFormat, LineKind, export_filename, layout_lines, layout_sentences};
pub use pipeline::{CleanReport, CleanStages, clean_stages, clean_with_report, strip_and_clean};
pub use structure::format_structured;
