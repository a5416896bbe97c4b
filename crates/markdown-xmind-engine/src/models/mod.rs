pub mod tree;

pub use tree::{Node, NodeId, Tree, Walk};
