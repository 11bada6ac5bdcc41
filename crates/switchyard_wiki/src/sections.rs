//! Folding flattened nodes into sections.

use crate::{ContentNode, NodeKind};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Prefix marking a block that came from a list item.
pub const BULLET: &str = "• ";

/// A heading and the text blocks that follow it.
///
/// `heading` and `level` are both absent for the preamble before the first
/// heading, and `heading` alone is absent for a heading with no text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Section {
    /// Heading text.
    heading: Option<String>,
    /// Heading level, 1 to 6.
    level: Option<u8>,
    /// Paragraphs, spans and bulleted list items in document order.
    blocks: Vec<String>,
}

impl Section {
    fn open(heading: Option<String>, level: Option<u8>) -> Self {
        Self {
            heading,
            level,
            blocks: Vec::new(),
        }
    }

    /// True when the section has a heading or at least one block.
    pub fn has_content(&self) -> bool {
        self.heading.is_some() || !self.blocks.is_empty()
    }

    fn push(&mut self, text: String) {
        if !text.is_empty() {
            self.blocks.push(text);
        }
    }
}

/// Folds flattened nodes into sections in a single pass.
///
/// Each heading closes the section being built (if it has anything in it)
/// and opens a new one. List items become `"• "`-prefixed blocks;
/// paragraphs and spans are added as-is. Empty text is dropped, and so is
/// every other node kind. Extraction is a pure function of its input.
///
/// ```
/// use switchyard_wiki::{ContentNode, extract_sections};
///
/// let sections = extract_sections(&[
///     ContentNode::heading(1, "Title"),
///     ContentNode::paragraph("intro"),
/// ]);
/// assert_eq!(sections.len(), 1);
/// assert_eq!(sections[0].blocks(), &vec!["intro".to_string()]);
/// ```
pub fn extract_sections(nodes: &[ContentNode]) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current = Section::default();

    for node in nodes {
        let text = node.text.trim().to_string();
        match node.kind {
            NodeKind::Heading(level) => {
                let next = Section::open(Some(text).filter(|t| !t.is_empty()), Some(level));
                let sealed = std::mem::replace(&mut current, next);
                if sealed.has_content() {
                    sections.push(sealed);
                }
            }
            NodeKind::ListItem => {
                if !text.is_empty() {
                    current.push(format!("{}{}", BULLET, text));
                }
            }
            NodeKind::Paragraph | NodeKind::Span => current.push(text),
            NodeKind::List => {}
        }
    }

    if current.has_content() {
        sections.push(current);
    }

    sections.retain(Section::has_content);
    sections
}
