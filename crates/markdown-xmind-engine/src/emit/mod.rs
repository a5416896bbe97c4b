//! Tree-to-text emission.
//!
//! Walks a [`Tree`] depth-first (node before children, siblings in order) and
//! produces Markdown lines in one of two layouts.

use crate::models::{NodeId, Tree};

/// Deepest level that still renders as an ATX heading.
pub const MAX_HEADING_LEVEL: usize = 6;

/// Sections at this level or shallower are followed by a blank separator line.
const SECTION_BREAK_LEVEL: usize = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmitMode {
    /// Depth maps to heading level; beyond level 6 nodes become indented bullets.
    #[default]
    Heading,
    /// Root becomes a level-1 heading, everything else nested bullets.
    List,
}

/// Emit `tree` as a sequence of lines.
pub fn emit(tree: &Tree, mode: EmitMode) -> Vec<String> {
    let mut out = Vec::new();
    match mode {
        EmitMode::Heading => emit_heading(tree, tree.root(), 1, &mut out),
        EmitMode::List => emit_list(tree, tree.root(), 0, &mut out),
    }
    out
}

/// Emit `tree` and join the lines with `\n`.
pub fn render(tree: &Tree, mode: EmitMode) -> String {
    emit(tree, mode).join("\n")
}

/// Emit several trees back to back, e.g. one per workbook sheet.
pub fn render_all<'a>(trees: impl IntoIterator<Item = &'a Tree>, mode: EmitMode) -> String {
    trees
        .into_iter()
        .flat_map(|tree| emit(tree, mode))
        .collect::<Vec<_>>()
        .join("\n")
}

fn note_lines(tree: &Tree, id: NodeId) -> Option<impl Iterator<Item = &str>> {
    let note = tree.node(id).note.as_deref()?.trim();
    if note.is_empty() {
        return None;
    }
    Some(note.split('\n'))
}

fn emit_heading(tree: &Tree, id: NodeId, level: usize, out: &mut Vec<String>) {
    let title = &tree.node(id).title;
    if level <= MAX_HEADING_LEVEL {
        out.push(format!("{} {title}", "#".repeat(level)));
    } else {
        let indent = "  ".repeat(level - MAX_HEADING_LEVEL - 1);
        out.push(format!("{indent}- {title}"));
    }

    if let Some(lines) = note_lines(tree, id) {
        out.push(String::new());
        out.extend(lines.map(|line| format!("> {line}")));
        out.push(String::new());
    }

    for &child in tree.children(id) {
        emit_heading(tree, child, level + 1, out);
    }

    if level <= SECTION_BREAK_LEVEL {
        out.push(String::new());
    }
}

fn emit_list(tree: &Tree, id: NodeId, depth: usize, out: &mut Vec<String>) {
    let title = &tree.node(id).title;
    let indent = "  ".repeat(depth);

    if depth == 0 {
        out.push(format!("# {title}"));
        out.push(String::new());
        if let Some(lines) = note_lines(tree, id) {
            out.extend(lines.map(|line| format!("> {line}")));
        }
    } else {
        out.push(format!("{indent}- {title}"));
        if let Some(lines) = note_lines(tree, id) {
            out.extend(lines.map(|line| format!("{indent}  > {line}")));
        }
    }

    for &child in tree.children(id) {
        emit_list(tree, child, depth + 1, out);
    }
}
