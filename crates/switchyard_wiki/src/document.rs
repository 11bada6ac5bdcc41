//! HTML flattening.

use crate::{ContentNode, NodeKind, Section, extract_sections, join_text_runs};
use scraper::{ElementRef, Html, Node, Selector};
use tracing::{debug, warn};

/// Elements whose text is never part of the page content.
const NON_TEXT_TAGS: [&str; 3] = ["script", "style", "template"];

/// Selectors tried in order to locate the main content of a page.
pub const CONTENT_ROOTS: [&str; 4] = ["article", "div.markdown-body", "div#content", "body"];

/// Flattens the content root of an HTML document into nodes.
///
/// The root is the first element matching one of [`CONTENT_ROOTS`]. Every
/// allowed descendant of the root (not the root itself) becomes one node,
/// in document order, nested elements included. Returns an empty list when
/// no root is found.
pub fn flatten_html(html: &str) -> Vec<ContentNode> {
    let document = Html::parse_document(html);

    let Some(root) = content_root(&document) else {
        debug!("No content root found");
        return Vec::new();
    };
    debug!(root = root.value().name(), "Located content root");

    root.descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .filter_map(|element| {
            NodeKind::from_tag(element.value().name())
                .map(|kind| ContentNode::new(kind, element_text(element)))
        })
        .collect()
}

/// Flattens an HTML document and folds it into sections.
pub fn sections_from_html(html: &str) -> Vec<Section> {
    extract_sections(&flatten_html(html))
}

fn content_root(document: &Html) -> Option<ElementRef<'_>> {
    CONTENT_ROOTS.iter().find_map(|pattern| {
        let selector = Selector::parse(pattern)
            .map_err(|e| warn!(pattern, error = ?e, "Invalid content root selector"))
            .ok()?;
        document.select(&selector).next()
    })
}

/// Descendant text runs, trimmed and joined by a space.
fn element_text(element: ElementRef<'_>) -> String {
    let mut runs = Vec::new();
    collect_text_runs(element, &mut runs);
    join_text_runs(runs)
}

fn collect_text_runs<'a>(element: ElementRef<'a>, runs: &mut Vec<&'a str>) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => runs.push(&**text),
            Node::Element(el) if NON_TEXT_TAGS.contains(&el.name()) => {}
            Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(child) {
                    collect_text_runs(child, runs);
                }
            }
            _ => {}
        }
    }
}
