// Copyright (c) 2026 TST Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Ordered enumeration over the strings stored in a ternary search tree.

use std::iter::FusedIterator;

use super::node::Node;

/// Pending work for the traversal.
///
/// The `usize` is the byte length of the path prefix in effect when the step
/// was scheduled.
#[derive(Debug)]
enum Step<'a> {
    /// Walk a whole subtree: less side, the node itself, then greater side.
    Descend(&'a Node, usize),
    /// Extend the path with the node's symbol, emit it if terminal, then walk `equal`.
    Visit(&'a Node, usize),
}

/// An iterator over stored strings in ascending code-point order.
///
/// Produced by [`TernarySearchTree::iter`](super::TernarySearchTree::iter).
/// The traversal keeps an explicit stack, so enumerating long strings does not
/// deepen the call stack. Inserting them still does.
#[derive(Debug)]
pub struct Iter<'a> {
    stack: Vec<Step<'a>>,
    path: String,
}

impl<'a> Iter<'a> {
    /// Enumerates the subtree at `start`, prepending `prefix` to every string.
    pub(crate) fn new(start: Option<&'a Node>, prefix: String) -> Self {
        let mut stack = Vec::new();
        if let Some(node) = start {
            stack.push(Step::Descend(node, prefix.len()));
        }
        Self {
            stack,
            path: prefix,
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(step) = self.stack.pop() {
            match step {
                Step::Descend(node, len) => {
                    // Stack is LIFO: push in reverse of the visiting order.
                    if let Some(greater) = node.greater() {
                        self.stack.push(Step::Descend(greater, len));
                    }
                    self.stack.push(Step::Visit(node, len));
                    if let Some(less) = node.less() {
                        self.stack.push(Step::Descend(less, len));
                    }
                }
                Step::Visit(node, len) => {
                    self.path.truncate(len);
                    node.symbol().push_onto(&mut self.path);
                    if let Some(equal) = node.equal() {
                        self.stack.push(Step::Descend(equal, self.path.len()));
                    }
                    if node.terminates() {
                        return Some(self.path.clone());
                    }
                }
            }
        }
        None
    }
}

impl FusedIterator for Iter<'_> {}
