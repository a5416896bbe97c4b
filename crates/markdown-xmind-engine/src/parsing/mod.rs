pub mod builder;
pub mod classify;

#[cfg(test)]
mod tests;

pub use builder::TreeBuilder;
pub use classify::{LineKind, OutlineLineClassifier};

use crate::models::Tree;

/// Build a tree from already split lines.
///
/// The returned tree is rooted at a synthetic node titled `root_title`; use
/// [`Tree::into_document`] to collapse a single top-level heading into the root.
pub fn parse_lines<I, S>(lines: I, root_title: &str) -> Tree
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let classifier = OutlineLineClassifier;
    let mut builder = TreeBuilder::new(root_title);

    for line in lines {
        let kind = classifier.classify(line.as_ref());
        builder.push(&kind);
    }

    builder.finish()
}

/// Convenience: split `content` into lines and build a tree.
pub fn parse_document(content: &str, root_title: &str) -> Tree {
    parse_lines(content.lines(), root_title)
}
