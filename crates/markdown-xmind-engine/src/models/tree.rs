/// Typed index of a node inside a [`Tree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A titled entry in the outline tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Text of the heading, list item or plain line. May be empty.
    pub title: String,
    /// Free text attached to the node, lines joined with `\n`.
    pub note: Option<String>,
    /// Children in document order.
    pub children: Vec<NodeId>,
}

impl Node {
    fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            note: None,
            children: Vec::new(),
        }
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Arena-backed outline tree with exactly one root.
///
/// Nodes are only ever appended, so a `NodeId` handed out by [`Tree::add_child`]
/// stays valid for the lifetime of the tree. The root always lives at index 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    /// Create a tree holding only a root node.
    pub fn new(root_title: impl Into<String>) -> Self {
        Self {
            nodes: vec![Node::new(root_title)],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Append a new child under `parent` and return its id.
    pub fn add_child(&mut self, parent: NodeId, title: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(title));
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Append a line to a node's note, newline-joined with any existing note.
    pub fn append_note(&mut self, id: NodeId, text: &str) {
        let node = &mut self.nodes[id.0];
        match node.note {
            Some(ref mut note) => {
                note.push('\n');
                note.push_str(text);
            }
            None => node.note = Some(text.to_string()),
        }
    }

    /// Replace a node's note wholesale.
    pub fn set_note(&mut self, id: NodeId, note: Option<String>) {
        self.nodes[id.0].note = note;
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Total number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the tree holds nothing but an empty root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1 && self.nodes[0].note.is_none()
    }

    /// Pre-order walk yielding each node with its depth (root depth is 0).
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            tree: self,
            stack: vec![(self.root(), 0)],
        }
    }

    /// Copy the subtree rooted at `id` into a fresh tree.
    pub fn subtree(&self, id: NodeId) -> Tree {
        let source = self.node(id);
        let mut out = Tree::new(source.title.clone());
        out.set_note(out.root(), source.note.clone());
        let mut pending = vec![(id, out.root())];

        while let Some((from, to)) = pending.pop() {
            for &child in self.children(from) {
                let node = self.node(child);
                let copied = out.add_child(to, node.title.clone());
                out.set_note(copied, node.note.clone());
                pending.push((child, copied));
            }
        }

        out
    }

    /// Collapse a synthetic document root into the tree handed to outer pipelines.
    ///
    /// When the root carries no note and has exactly one child, that child becomes
    /// the root. Otherwise the root is kept and the top-level entries stay its children.
    pub fn into_document(self) -> Tree {
        let root = self.node(self.root());
        match root.children.as_slice() {
            [only] if root.note.is_none() => self.subtree(*only),
            _ => self,
        }
    }
}

/// Iterator returned by [`Tree::walk`].
pub struct Walk<'a> {
    tree: &'a Tree,
    stack: Vec<(NodeId, usize)>,
}

impl Iterator for Walk<'_> {
    type Item = (NodeId, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (id, depth) = self.stack.pop()?;
        for &child in self.tree.children(id).iter().rev() {
            self.stack.push((child, depth + 1));
        }
        Some((id, depth))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Tree {
        let mut tree = Tree::new("root");
        let a = tree.add_child(tree.root(), "a");
        tree.add_child(a, "a1");
        tree.add_child(a, "a2");
        tree.add_child(tree.root(), "b");
        tree
    }

    #[test]
    fn test_walk_is_pre_order_with_depths() {
        let tree = sample();
        let visited: Vec<(&str, usize)> = tree
            .walk()
            .map(|(id, depth)| (tree.node(id).title.as_str(), depth))
            .collect();

        assert_eq!(
            visited,
            vec![("root", 0), ("a", 1), ("a1", 2), ("a2", 2), ("b", 1)]
        );
    }

    #[test]
    fn test_append_note_joins_with_newline() {
        let mut tree = Tree::new("root");
        let root = tree.root();
        tree.append_note(root, "first");
        tree.append_note(root, "second");

        assert_eq!(tree.node(root).note.as_deref(), Some("first\nsecond"));
    }

    #[test]
    fn test_subtree_preserves_order_and_notes() {
        let mut tree = sample();
        let a = tree.children(tree.root())[0];
        tree.append_note(a, "about a");

        let sub = tree.subtree(a);
        let root = sub.node(sub.root());
        assert_eq!(root.title, "a");
        assert_eq!(root.note.as_deref(), Some("about a"));
        let titles: Vec<&str> = sub
            .children(sub.root())
            .iter()
            .map(|&c| sub.node(c).title.as_str())
            .collect();
        assert_eq!(titles, vec!["a1", "a2"]);
    }

    #[test]
    fn test_into_document_promotes_single_child() {
        let mut tree = Tree::new("synthetic");
        let only = tree.add_child(tree.root(), "Title");
        tree.add_child(only, "Section");

        let doc = tree.into_document();
        assert_eq!(doc.node(doc.root()).title, "Title");
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn test_into_document_keeps_root_for_forest() {
        let doc = sample().into_document();
        assert_eq!(doc.node(doc.root()).title, "root");
        assert_eq!(doc.children(doc.root()).len(), 2);
    }

    #[test]
    fn test_into_document_keeps_root_with_note() {
        let mut tree = Tree::new("synthetic");
        tree.append_note(tree.root(), "preamble");
        tree.add_child(tree.root(), "Title");

        let doc = tree.into_document();
        assert_eq!(doc.node(doc.root()).title, "synthetic");
    }

    #[test]
    fn test_empty_tree() {
        let tree = Tree::new("root");
        assert!(tree.is_empty());
        assert_eq!(tree.walk().count(), 1);
    }
}
