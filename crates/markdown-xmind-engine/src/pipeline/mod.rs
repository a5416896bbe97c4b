//! File-level conversions wiring the pure transforms to disk I/O.

use std::path::Path;

use crate::emit::{EmitMode, render_all};
use crate::io::{self, IoError};
use crate::models::Tree;
use crate::parsing::parse_document;
use crate::rewrite::{RewriteStats, rewrite_document};
use crate::xmind::{self, IdGenerator, XmindError};

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error(transparent)]
    Xmind(#[from] XmindError),
}

/// Parse Markdown into the tree handed to the container encoder.
///
/// A document with exactly one top-level entry is rooted at that entry; anything
/// else hangs under a root titled `default_title`.
pub fn markdown_to_tree(content: &str, default_title: &str) -> Tree {
    parse_document(content, default_title).into_document()
}

/// Convert a Markdown file into an `.xmind` archive.
pub fn convert_markdown_file(
    input: &Path,
    output: &Path,
    default_title: &str,
    ids: &mut impl IdGenerator,
) -> Result<Tree, ConvertError> {
    let content = io::read_file(input)?;
    let tree = markdown_to_tree(&content, default_title);
    log::info!(
        "Parsed {} into {} node(s) rooted at '{}'",
        input.display(),
        tree.len(),
        tree.node(tree.root()).title
    );

    let workbook = xmind::encode_workbook(&tree, ids);
    xmind::write_xmind(&workbook, output)?;
    Ok(tree)
}

/// Convert an `.xmind` archive into Markdown, returning the written text.
pub fn convert_xmind_file(
    input: &Path,
    output: &Path,
    mode: EmitMode,
) -> Result<String, ConvertError> {
    let trees = xmind::read_xmind(input)?;
    if trees.is_empty() {
        log::warn!("{} contains no sheets", input.display());
    }

    let markdown = render_all(&trees, mode);
    io::write_file(output, &markdown)?;
    Ok(markdown)
}

/// Rewrite a Markdown file's level-2 headings, returning the statistics summary.
pub fn rewrite_file(
    input: &Path,
    output: &Path,
    placeholder: &str,
) -> Result<RewriteStats, ConvertError> {
    let content = io::read_file(input)?;
    let rewritten = rewrite_document(&content, placeholder);
    io::write_file(output, &rewritten)?;
    Ok(RewriteStats::compute(&content, &rewritten))
}
