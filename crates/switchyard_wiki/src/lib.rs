//! Structured content extraction from wiki-style HTML pages.
//!
//! A page is reduced to a flat list of [`ContentNode`]s (headings,
//! paragraphs, spans, list items) in document order, which
//! [`extract_sections`] then folds into [`Section`]s: one per heading, plus
//! an optional untitled preamble.
//!
//! [`PageScraper`] ties both steps to an HTTP fetch.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod document;
mod node;
mod page;
mod sections;

pub use document::{CONTENT_ROOTS, flatten_html, sections_from_html};
pub use node::{ContentNode, NodeKind, join_text_runs};
pub use page::{DEFAULT_BASE_URL, PageOutcome, PageReport, PageScraper};
pub use sections::{BULLET, Section, extract_sections};
