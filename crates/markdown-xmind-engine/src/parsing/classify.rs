use regex::Regex;
use std::sync::OnceLock;

/// Classification of a single line containing only local facts.
///
/// Each line is classified independently without reference to surrounding context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// ATX heading: 1-6 `#` markers, whitespace, then a title.
    Heading { level: usize, title: String },
    /// Bullet item (`-`, `*` or `+`) with the width of its leading whitespace.
    ListItem { indent: usize, title: String },
    /// Empty or whitespace-only line.
    Blank,
    /// Anything else, trimmed.
    PlainText(String),
}

impl LineKind {
    /// Heading level if this line is a heading.
    pub fn heading_level(&self) -> Option<usize> {
        match self {
            LineKind::Heading { level, .. } => Some(*level),
            _ => None,
        }
    }
}

fn heading_regex() -> &'static Regex {
    static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
    HEADING_REGEX
        .get_or_init(|| Regex::new(r"^(#{1,6})\s+(.+)$").expect("Invalid heading regex"))
}

fn list_item_regex() -> &'static Regex {
    static LIST_ITEM_REGEX: OnceLock<Regex> = OnceLock::new();
    LIST_ITEM_REGEX
        .get_or_init(|| Regex::new(r"^(\s*)[-*+]\s+(.+)$").expect("Invalid list item regex"))
}

/// Classifies individual lines of an outline document.
pub struct OutlineLineClassifier;

impl OutlineLineClassifier {
    /// Classifies a line into a [`LineKind`].
    ///
    /// Headings are checked first, then list items, then blank, then plain text.
    pub fn classify(&self, line: &str) -> LineKind {
        let raw = line.trim_end();
        let trimmed = raw.trim();

        if let Some(caps) = heading_regex().captures(trimmed) {
            return LineKind::Heading {
                level: caps[1].len(),
                title: caps[2].trim().to_string(),
            };
        }

        if let Some(caps) = list_item_regex().captures(raw) {
            return LineKind::ListItem {
                indent: caps[1].chars().count(),
                title: caps[2].trim().to_string(),
            };
        }

        if trimmed.is_empty() {
            return LineKind::Blank;
        }

        LineKind::PlainText(trimmed.to_string())
    }
}
