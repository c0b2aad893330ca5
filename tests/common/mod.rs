#![allow(dead_code)]

use neattree::text::display_width;
use neattree::{Node, TreePrinter};

/// Leaf node with a string label.
pub fn leaf(label: &str) -> Node<String> {
    Node::leaf(label.to_string())
}

/// Inner node with optional children.
pub fn node(label: &str, left: Option<Node<String>>, right: Option<Node<String>>) -> Node<String> {
    Node::new(label.to_string(), left, right)
}

/// `1` with children `2` and `3`.
pub fn balanced() -> Node<String> {
    node("1", Some(leaf("2")), Some(leaf("3")))
}

/// Chain of labels where each node is the left child of the previous one.
pub fn left_chain(labels: &[&str]) -> Node<String> {
    let mut iter = labels.iter().rev();
    let mut tree = leaf(iter.next().expect("at least one label"));
    for label in iter {
        tree = leaf(label).with_left(tree);
    }
    tree
}

/// Chain of labels where each node is the right child of the previous one.
pub fn right_chain(labels: &[&str]) -> Node<String> {
    let mut iter = labels.iter().rev();
    let mut tree = leaf(iter.next().expect("at least one label"));
    for label in iter {
        tree = leaf(label).with_right(tree);
    }
    tree
}

/// Printer with square branches.
pub fn square_printer() -> TreePrinter {
    TreePrinter::default().square_branches(true)
}

/// Render `tree` with `printer` into padded lines.
pub fn lines(printer: &TreePrinter, tree: &Node<String>) -> Vec<String> {
    printer.to_lines(Some(tree))
}

/// Assert every line occupies the same number of terminal columns.
pub fn assert_uniform_width(lines: &[String]) {
    if let Some(first) = lines.first() {
        let width = display_width(first);
        for line in lines {
            assert_eq!(
                display_width(line),
                width,
                "line {:?} should be {} columns wide",
                line,
                width
            );
        }
    }
}
