pub mod emit;
pub mod io;
pub mod models;
pub mod parsing;
pub mod pipeline;
pub mod rewrite;
pub mod xmind;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use emit::{EmitMode, emit, render};
pub use models::{Node, NodeId, Tree};
pub use parsing::{LineKind, OutlineLineClassifier, TreeBuilder, parse_document, parse_lines};
pub use pipeline::*;
pub use rewrite::{HeaderRecord, HeadingCounts, RewriteStats, rewrite_document, rewrite_lines};
