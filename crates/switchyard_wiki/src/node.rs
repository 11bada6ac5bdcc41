//! Flattened content nodes.

/// Kind of a flattened element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// `h1` to `h6`; the payload is the level.
    Heading(u8),
    /// `p`
    Paragraph,
    /// `span`
    Span,
    /// `li`
    ListItem,
    /// `ul` or `ol`. Carries the text of all its items, so section
    /// extraction skips it.
    List,
}

impl NodeKind {
    /// Maps an HTML tag name to a node kind, `None` for tags outside the
    /// allow-list.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let kind = match tag.to_ascii_lowercase().as_str() {
            "h1" => Self::Heading(1),
            "h2" => Self::Heading(2),
            "h3" => Self::Heading(3),
            "h4" => Self::Heading(4),
            "h5" => Self::Heading(5),
            "h6" => Self::Heading(6),
            "p" => Self::Paragraph,
            "span" => Self::Span,
            "li" => Self::ListItem,
            "ul" | "ol" => Self::List,
            _ => return None,
        };
        Some(kind)
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Heading(level) => write!(f, "h{}", level),
            Self::Paragraph => write!(f, "p"),
            Self::Span => write!(f, "span"),
            Self::ListItem => write!(f, "li"),
            Self::List => write!(f, "list"),
        }
    }
}

/// One element of the flattened document with its extracted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentNode {
    /// Element kind.
    pub kind: NodeKind,
    /// Text of the element and all its descendants.
    pub text: String,
}

impl ContentNode {
    /// Creates a node.
    pub fn new(kind: NodeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Heading node of the given level.
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Self::new(NodeKind::Heading(level), text)
    }

    /// Paragraph node.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::new(NodeKind::Paragraph, text)
    }

    /// Span node.
    pub fn span(text: impl Into<String>) -> Self {
        Self::new(NodeKind::Span, text)
    }

    /// List item node.
    pub fn list_item(text: impl Into<String>) -> Self {
        Self::new(NodeKind::ListItem, text)
    }
}

/// Trims each text run, drops the empty ones and joins the rest with a
/// single space. Whitespace inside a run is kept.
///
/// ```
/// use switchyard_wiki::join_text_runs;
///
/// assert_eq!(join_text_runs(["  Early\n", " ", "life "]), "Early life");
/// assert_eq!(join_text_runs(["two  words"]), "two  words");
/// ```
pub fn join_text_runs<'a>(runs: impl IntoIterator<Item = &'a str>) -> String {
    runs.into_iter()
        .map(str::trim)
        .filter(|run| !run.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
