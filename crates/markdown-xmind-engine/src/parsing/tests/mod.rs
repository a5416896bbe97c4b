//! Whole-document tests for the parsing module.
//!
//! Each case feeds a complete document through [`parse_document`] and compares the
//! resulting tree against a nested expectation.


use normalize::{branch, leaf, normalize, with_note};
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::parse_document;

const ROOT: &str = "root";

#[test]
fn headings_lists_and_notes_together() {
    let md = "\
# Project

Overview of the project.
Second overview line.

## Goals
- Fast
  - Really fast
- Simple

## Risks
Nothing known yet.
";
    let tree = parse_document(md, ROOT);
    invariants::check(&tree);

    let expected = branch(
        ROOT,
        vec![with_note(
            branch(
                "Project",
                vec![
                    branch(
                        "Goals",
                        vec![branch("Fast", vec![leaf("Really fast")]), leaf("Simple")],
                    ),
                    with_note(leaf("Risks"), "Nothing known yet."),
                ],
            ),
            "Overview of the project.\nSecond overview line.",
        )],
    );
    assert_eq!(normalize(&tree), expected);
}

#[test]
fn multiple_top_level_headings_form_a_forest() {
    let tree = parse_document("# One\n# Two\n# Three", ROOT);
    invariants::check(&tree);

    assert_eq!(
        normalize(&tree),
        branch(ROOT, vec![leaf("One"), leaf("Two"), leaf("Three")])
    );

    let doc = tree.into_document();
    assert_eq!(doc.node(doc.root()).title, ROOT);
}

#[test]
fn single_top_level_heading_becomes_document_root() {
    let doc = parse_document("# Only\n## Child", ROOT).into_document();
    invariants::check(&doc);

    assert_eq!(normalize(&doc), branch("Only", vec![leaf("Child")]));
}

#[test]
fn empty_document_is_bare_root() {
    let tree = parse_document("", ROOT);
    invariants::check(&tree);

    assert_eq!(normalize(&tree), leaf(ROOT));
}

#[rstest]
#[case("# A\n## B\n### C\n#### D\n##### E\n###### F")]
#[case("### Orphan\n# Top\n#### Skip\n## Mid")]
#[case("- a\n    - b\n  - c\n        - d\n- e")]
#[case("text\n# h\n- a\ntext\n  - b\n## h2\nmore\n\n\n- c")]
#[case("+ plus\n* star\n  + nested plus\n\t- tab")]
fn invariants_hold_for_messy_documents(#[case] md: &str) {
    let tree = parse_document(md, ROOT);
    invariants::check(&tree);
}

#[test]
fn list_indentation_mapping() {
    let tree = parse_document("- A\n  - B\n    - C", ROOT);
    let depths: Vec<(String, usize)> = tree
        .walk()
        .map(|(id, depth)| (tree.node(id).title.clone(), depth))
        .collect();

    assert_eq!(
        depths,
        vec![
            (ROOT.to_string(), 0),
            ("A".to_string(), 1),
            ("B".to_string(), 2),
            ("C".to_string(), 3),
        ]
    );
}
