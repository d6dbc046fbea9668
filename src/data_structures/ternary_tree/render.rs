// Copyright (c) 2026 TST Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Diagnostic tree diagrams.

use termtree::Tree;

use super::node::Node;

/// Text printed for a tree without nodes.
pub(crate) const EMPTY_DIAGRAM: &str = "(empty)";

/// Draws the subtree at `root` as an indented diagram.
pub(crate) fn render(root: Option<&Node>) -> String {
    match root {
        Some(node) => to_tree(None, node).to_string(),
        None => format!("{EMPTY_DIAGRAM}\n"),
    }
}

fn to_tree(edge: Option<char>, node: &Node) -> Tree<String> {
    let leaves = [('<', node.less()), ('=', node.equal()), ('>', node.greater())]
        .into_iter()
        .filter_map(|(edge, child)| child.map(|child| to_tree(Some(edge), child)));

    Tree::new(label(edge, node)).with_leaves(leaves)
}

fn label(edge: Option<char>, node: &Node) -> String {
    let marker = if node.terminates() { " *" } else { "" };
    match edge {
        Some(edge) => format!("{edge} {}{marker}", node.symbol()),
        None => format!("{}{marker}", node.symbol()),
    }
}
