use crate::models::{NodeId, Tree};

use super::classify::LineKind;

/// What opened a frame on the path stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Opener {
    /// The synthetic document root.
    Root,
    Heading,
    /// List nesting level, 1-indexed.
    List(usize),
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    node: NodeId,
    opener: Opener,
}

/// Builds a [`Tree`] from classified lines using a path stack of open nodes.
///
/// Index 0 of the stack is always the synthetic root. A heading of level `n`
/// shrinks the stack to at most `n` frames, whatever opened them; list items close
/// list items of the same or a deeper nesting level. Anything left open becomes
/// the parent, so skipped levels attach under the deepest open node.
pub struct TreeBuilder {
    tree: Tree,
    path: Vec<Frame>,
}

impl TreeBuilder {
    pub fn new(root_title: impl Into<String>) -> Self {
        let tree = Tree::new(root_title);
        let path = vec![Frame {
            node: tree.root(),
            opener: Opener::Root,
        }];
        Self { tree, path }
    }

    pub fn push(&mut self, line: &LineKind) {
        match line {
            LineKind::Heading { level, title } => self.open_heading(*level, title),
            LineKind::ListItem { indent, title } => self.open_list_item(indent / 2 + 1, title),
            LineKind::Blank => {}
            LineKind::PlainText(text) => self.attach_text(text),
        }
    }

    pub fn finish(self) -> Tree {
        self.tree
    }

    fn top(&self) -> NodeId {
        // The root frame is never popped.
        self.path[self.path.len() - 1].node
    }

    fn open_heading(&mut self, level: usize, title: &str) {
        self.path.truncate(level.max(1));
        self.open(Opener::Heading, title);
    }

    fn open_list_item(&mut self, list_level: usize, title: &str) {
        self.pop_while(|opener| matches!(opener, Opener::List(open) if open >= list_level));
        self.open(Opener::List(list_level), title);
    }

    fn open(&mut self, opener: Opener, title: &str) {
        let node = self.tree.add_child(self.top(), title);
        self.path.push(Frame { node, opener });
    }

    /// Plain text becomes a note line until the open node has children,
    /// after which it becomes a leaf child of that node.
    fn attach_text(&mut self, text: &str) {
        let top = self.top();
        if self.tree.node(top).has_children() {
            self.tree.add_child(top, text);
        } else {
            self.tree.append_note(top, text);
        }
    }

    fn pop_while(&mut self, mut should_pop: impl FnMut(Opener) -> bool) {
        while self.path.len() > 1 && should_pop(self.path[self.path.len() - 1].opener) {
            self.path.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::classify::OutlineLineClassifier;
    use pretty_assertions::assert_eq;

    fn build(lines: &[&str]) -> Tree {
        let mut builder = TreeBuilder::new("root");
        for line in lines {
            builder.push(&OutlineLineClassifier.classify(line));
        }
        builder.finish()
    }

    /// Render the tree as `depth:title` strings for compact assertions.
    fn shape(tree: &Tree) -> Vec<String> {
        tree.walk()
            .map(|(id, depth)| format!("{depth}:{}", tree.node(id).title))
            .collect()
    }

    #[test]
    fn test_headings_nest_by_level() {
        let tree = build(&["# A", "## B", "### C", "## D", "# E"]);
        assert_eq!(
            shape(&tree),
            vec!["0:root", "1:A", "2:B", "3:C", "2:D", "1:E"]
        );
    }

    #[test]
    fn test_skipped_heading_level_attaches_to_deepest_open() {
        let tree = build(&["# A", "### Deep", "## Back"]);
        assert_eq!(shape(&tree), vec!["0:root", "1:A", "2:Deep", "2:Back"]);
    }

    #[test]
    fn test_shallower_heading_after_orphan_nests_under_it() {
        let tree = build(&["### Orphan", "## Next", "# Top"]);
        assert_eq!(shape(&tree), vec!["0:root", "1:Orphan", "2:Next", "1:Top"]);
    }

    #[test]
    fn test_heading_after_list_keeps_stack_prefix() {
        let tree = build(&["# A", "- i", "  - j", "### C"]);
        assert_eq!(shape(&tree), vec!["0:root", "1:A", "2:i", "3:j", "3:C"]);
    }

    #[test]
    fn test_heading_closes_list_at_its_level() {
        let tree = build(&["# A", "- i", "  - j", "## B", "- k"]);
        assert_eq!(
            shape(&tree),
            vec!["0:root", "1:A", "2:i", "3:j", "2:B", "3:k"]
        );
    }

    #[test]
    fn test_list_indentation_maps_to_depth() {
        let tree = build(&["- A", "  - B", "    - C"]);
        assert_eq!(shape(&tree), vec!["0:root", "1:A", "2:B", "3:C"]);
    }

    #[test]
    fn test_list_items_anchor_below_current_heading() {
        let tree = build(&["# Doc", "## Section", "- one", "  - one.a", "- two", "## Other"]);
        assert_eq!(
            shape(&tree),
            vec![
                "0:root",
                "1:Doc",
                "2:Section",
                "3:one",
                "4:one.a",
                "3:two",
                "2:Other"
            ]
        );
    }

    #[test]
    fn test_over_indented_list_item_attaches_to_deepest_open() {
        let tree = build(&["- A", "      - far", "  - B"]);
        assert_eq!(shape(&tree), vec!["0:root", "1:A", "2:far", "2:B"]);
    }

    #[test]
    fn test_odd_indent_rounds_down() {
        let tree = build(&["- A", "   - B", " - C"]);
        assert_eq!(shape(&tree), vec!["0:root", "1:A", "2:B", "1:C"]);
    }

    #[test]
    fn test_plain_text_merges_into_note_before_children() {
        let tree = build(&["# Heading", "first line", "second line", "## Child"]);
        let heading = tree.children(tree.root())[0];

        assert_eq!(
            tree.node(heading).note.as_deref(),
            Some("first line\nsecond line")
        );
        assert_eq!(shape(&tree), vec!["0:root", "1:Heading", "2:Child"]);
    }

    #[test]
    fn test_text_after_child_does_not_touch_stale_note() {
        let tree = build(&["# Heading", "intro", "## Child", "after child"]);
        let heading = tree.children(tree.root())[0];
        let child = tree.children(heading)[0];

        assert_eq!(tree.node(heading).note.as_deref(), Some("intro"));
        assert_eq!(tree.node(child).note.as_deref(), Some("after child"));
        assert_eq!(shape(&tree), vec!["0:root", "1:Heading", "2:Child"]);
    }

    #[test]
    fn test_list_continuation_text_is_item_note() {
        let tree = build(&["# Heading", "- item", "  - sub", "  detail", "- other"]);
        let heading = tree.children(tree.root())[0];
        let item = tree.children(heading)[0];
        let sub = tree.children(item)[0];

        assert_eq!(tree.node(sub).note.as_deref(), Some("detail"));
        assert_eq!(tree.node(tree.children(heading)[1]).title, "other");
    }

    #[test]
    fn test_text_on_node_with_children_becomes_leaf() {
        let mut builder = TreeBuilder::new("root");
        builder.push(&LineKind::Heading {
            level: 1,
            title: "H".to_string(),
        });
        let open = builder.top();
        builder.tree.add_child(open, "existing");
        builder.push(&LineKind::PlainText("loose".to_string()));
        builder.push(&LineKind::PlainText("again".to_string()));
        let tree = builder.finish();

        assert_eq!(tree.node(open).note, None);
        assert_eq!(
            shape(&tree),
            vec!["0:root", "1:H", "2:existing", "2:loose", "2:again"]
        );
    }

    #[test]
    fn test_text_before_any_heading_is_root_note() {
        let tree = build(&["preamble", "# Title"]);
        assert_eq!(tree.node(tree.root()).note.as_deref(), Some("preamble"));
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        let tree = build(&["", "# A", "", "   ", "## B", ""]);
        assert_eq!(shape(&tree), vec!["0:root", "1:A", "2:B"]);
    }

    #[test]
    fn test_empty_input_yields_bare_root() {
        let tree = build(&[]);
        assert_eq!(tree.len(), 1);
        assert!(tree.children(tree.root()).is_empty());
    }

    #[test]
    fn test_depth_monotonicity() {
        let tree = build(&[
            "### x", "- a", "      - b", "# y", "text", "## z", "- c", "more", "#### w",
        ]);
        let mut depths = vec![0; tree.len()];
        for (id, depth) in tree.walk() {
            depths[id.index()] = depth;
            for &child in tree.children(id) {
                assert!(child.index() > id.index());
            }
        }
        for (id, depth) in tree.walk() {
            for &child in tree.children(id) {
                assert_eq!(depths[child.index()], depth + 1);
            }
        }
        assert_eq!(depths[tree.root().index()], 0);
    }
}
