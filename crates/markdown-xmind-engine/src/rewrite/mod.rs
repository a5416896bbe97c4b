//! Heading-level inference pass.
//!
//! Drops every level-2 heading and re-inserts one immediately before each level-3
//! heading, titled after the nearest level-2 heading that preceded it in the input.
//! All other lines pass through untouched and in order.

use crate::parsing::OutlineLineClassifier;

/// Title used when a level-3 heading has no level-2 heading before it.
pub const DEFAULT_PLACEHOLDER: &str = "未分类";

/// A heading found during the collection pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderRecord {
    pub line_index: usize,
    pub level: usize,
    pub title: String,
}

/// Collect every heading line with its position.
pub fn collect_headers<S: AsRef<str>>(lines: &[S]) -> Vec<HeaderRecord> {
    let classifier = OutlineLineClassifier;
    lines
        .iter()
        .enumerate()
        .filter_map(|(line_index, line)| match classifier.classify(line.as_ref()) {
            crate::parsing::LineKind::Heading { level, title } => Some(HeaderRecord {
                line_index,
                level,
                title,
            }),
            _ => None,
        })
        .collect()
}

/// Title of the nearest level-2 record before `records[index]`.
fn parent_h2<'a>(records: &'a [HeaderRecord], index: usize, placeholder: &'a str) -> &'a str {
    records[..index]
        .iter()
        .rev()
        .find(|record| record.level == 2)
        .map_or(placeholder, |record| record.title.as_str())
}

/// Rewrite a sequence of lines.
pub fn rewrite_lines<S: AsRef<str>>(lines: &[S], placeholder: &str) -> Vec<String> {
    let records = collect_headers(lines);
    let mut out = Vec::with_capacity(lines.len() + records.len());
    let mut next_record = 0;

    for (line_index, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        let record_index = match records.get(next_record) {
            Some(record) if record.line_index == line_index => {
                next_record += 1;
                Some(next_record - 1)
            }
            _ => None,
        };

        match record_index.map(|i| (i, records[i].level)) {
            Some((_, 2)) => {}
            Some((i, 3)) => {
                out.push(format!("## {}", parent_h2(&records, i, placeholder)));
                out.push(line.to_string());
            }
            _ => out.push(line.to_string()),
        }
    }

    out
}

/// Rewrite a whole document, preserving its line separators.
pub fn rewrite_document(content: &str, placeholder: &str) -> String {
    if content.is_empty() {
        return String::new();
    }
    let lines: Vec<&str> = content.split('\n').collect();
    rewrite_lines(&lines, placeholder).join("\n")
}

/// Number of level-1/2/3 headings in a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeadingCounts {
    pub h1: usize,
    pub h2: usize,
    pub h3: usize,
}

impl HeadingCounts {
    pub fn from_records(records: &[HeaderRecord]) -> Self {
        let count = |level| records.iter().filter(|r| r.level == level).count();
        Self {
            h1: count(1),
            h2: count(2),
            h3: count(3),
        }
    }
}

/// Summary of one rewrite, for reporting only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewriteStats {
    pub total_lines: usize,
    pub before: HeadingCounts,
    pub after: HeadingCounts,
}

impl RewriteStats {
    pub fn compute(original: &str, rewritten: &str) -> Self {
        let before: Vec<&str> = original.split('\n').collect();
        let after: Vec<&str> = rewritten.split('\n').collect();
        Self {
            total_lines: before.len(),
            before: HeadingCounts::from_records(&collect_headers(&before)),
            after: HeadingCounts::from_records(&collect_headers(&after)),
        }
    }
}
