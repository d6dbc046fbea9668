// Copyright (c) 2026 TST Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Ternary search tree for ordered string sets.
//!
//! A ternary search tree stores strings one character per node. Every node has
//! three children: `less` and `greater` hold other characters at the same
//! position, `equal` continues the current string with its next character.
//! Compared to a trie with one child per alphabet symbol this trades branching
//! factor for space, and an in-order walk yields the strings sorted.
//!
//! # Example
//!
//! ```
//! use tst_lib::data_structures::ternary_tree::TernarySearchTree;
//!
//! let mut tree = TernarySearchTree::new();
//! for word in ["this", "list", "is", "not", "sorted"] {
//!     tree.insert(word);
//! }
//!
//! assert_eq!(tree.len(), 5);
//! assert_eq!(tree.all_strings(), vec!["is", "list", "not", "sorted", "this"]);
//! assert!(tree.search("sort", false));
//! assert!(!tree.search("sort", true));
//! ```
//!
//! # Empty string
//!
//! The empty string is stored on a dedicated sentinel node. Prefix search for
//! `""` answers whether the tree holds anything at all; exact search for `""`
//! answers whether `""` itself was inserted.
//!
//! # Limits
//!
//! Insert and search recurse once per character and per sibling hop, so very
//! long terms need a correspondingly deep stack; so do `clone` and `==`.
//! Counting, enumeration and dropping use explicit stacks. The tree has no
//! internal locking: mutation takes `&mut self`.

mod error;
mod iter;
mod node;
mod render;

#[cfg(test)]
mod tests;

use std::cmp::Ordering;
use std::fmt;

pub use error::{TernaryTreeError, TernaryTreeResult};
pub use iter::Iter;
pub use node::{Node, Symbol};

/// An ordered set of strings backed by a ternary search tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TernarySearchTree {
    /// The root node; `None` iff the tree is empty
    root: Option<Box<Node>>,
}

impl TernarySearchTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Returns the root node, if any.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Inserts `term` into the tree.
    ///
    /// Any string is accepted, including the empty string. Inserting a term
    /// that is already present leaves the stored set unchanged.
    ///
    /// # Returns
    ///
    /// Always `true`.
    pub fn insert<T: AsRef<str>>(&mut self, term: T) -> bool {
        let chars: Vec<char> = term.as_ref().chars().collect();
        self.root = Some(Self::insert_at(self.root.take(), &chars, 0));
        true
    }

    /// Inserts the symbol at `term[index]` below `node` and returns the node
    /// the caller must link back in its place.
    fn insert_at(node: Option<Box<Node>>, term: &[char], index: usize) -> Box<Node> {
        let symbol = Symbol::at(term, index);
        let mut node = node.unwrap_or_else(|| {
            tracing::trace!(%symbol, index, "allocating node");
            Box::new(Node::new(symbol))
        });

        match symbol.cmp(&node.symbol) {
            Ordering::Less => {
                node.less = Some(Self::insert_at(node.less.take(), term, index));
            }
            Ordering::Greater => {
                node.greater = Some(Self::insert_at(node.greater.take(), term, index));
            }
            Ordering::Equal => {
                if term.is_empty() || index + 1 == term.len() {
                    node.terminates = true;
                } else {
                    node.equal = Some(Self::insert_at(node.equal.take(), term, index + 1));
                }
            }
        }

        node
    }

    /// Tests whether `term` is stored (`exact`) or is a prefix of some stored
    /// string (not `exact`).
    ///
    /// The empty string is a prefix of every string, so a prefix search for
    /// `""` is `true` exactly when the tree is non-empty.
    pub fn search<T: AsRef<str>>(&self, term: T, exact: bool) -> bool {
        let term = term.as_ref();
        if term.is_empty() && !exact {
            return self.len() > 0;
        }

        let chars: Vec<char> = term.chars().collect();
        Self::search_at(self.root(), &chars, 0, exact)
    }

    fn search_at(node: Option<&Node>, term: &[char], index: usize, exact: bool) -> bool {
        let Some(node) = node else {
            return false;
        };

        match Symbol::at(term, index).cmp(&node.symbol) {
            Ordering::Less => Self::search_at(node.less(), term, index, exact),
            Ordering::Greater => Self::search_at(node.greater(), term, index, exact),
            Ordering::Equal => {
                if term.is_empty() {
                    node.terminates
                } else if index + 1 == term.len() {
                    !exact || node.terminates
                } else {
                    Self::search_at(node.equal(), term, index + 1, exact)
                }
            }
        }
    }

    /// Returns `true` if `term` was inserted.
    pub fn contains<T: AsRef<str>>(&self, term: T) -> bool {
        self.search(term, true)
    }

    /// Returns `true` if some stored string starts with `prefix`.
    pub fn contains_prefix<T: AsRef<str>>(&self, prefix: T) -> bool {
        self.search(prefix, false)
    }

    /// Returns the number of distinct strings stored.
    ///
    /// This walks the entire tree, so it's an O(n) operation in the node count.
    pub fn len(&self) -> usize {
        Self::count_terminals(self.root())
    }

    fn count_terminals(root: Option<&Node>) -> usize {
        let mut count = 0;
        let mut pending: Vec<&Node> = root.into_iter().collect();

        while let Some(node) = pending.pop() {
            count += usize::from(node.terminates);
            pending.extend(node.less());
            pending.extend(node.equal());
            pending.extend(node.greater());
        }

        count
    }

    /// Returns `true` if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns an iterator over the stored strings in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.root(), String::new())
    }

    /// Returns every stored string in ascending order.
    pub fn all_strings(&self) -> Vec<String> {
        self.iter().collect()
    }

    /// Returns the stored strings starting with `prefix`, in ascending order.
    pub fn strings_with_prefix<T: AsRef<str>>(&self, prefix: T) -> Vec<String> {
        let prefix = prefix.as_ref();
        if prefix.is_empty() {
            return self.all_strings();
        }

        let chars: Vec<char> = prefix.chars().collect();
        let Some(node) = self.find_node(&chars) else {
            return Vec::new();
        };

        let mut result = Vec::new();
        if node.terminates {
            result.push(prefix.to_string());
        }
        result.extend(Iter::new(node.equal(), prefix.to_string()));
        result
    }

    /// Finds the node holding the last character of a non-empty `term`.
    fn find_node(&self, term: &[char]) -> Option<&Node> {
        let mut node = self.root();
        let mut index = 0;

        while let Some(current) = node {
            match Symbol::Char(term[index]).cmp(&current.symbol) {
                Ordering::Less => node = current.less(),
                Ordering::Greater => node = current.greater(),
                Ordering::Equal if index + 1 == term.len() => return Some(current),
                Ordering::Equal => {
                    index += 1;
                    node = current.equal();
                }
            }
        }

        None
    }

    /// Draws the tree for diagnostics: one line per node, labelled with its
    /// character, a `*` when terminal, and `<`, `=` or `>` for the edge from
    /// its parent.
    pub fn render(&self) -> String {
        render::render(self.root())
    }
}

impl Drop for TernarySearchTree {
    fn drop(&mut self) {
        // Unlink children before each box is freed so dropping never recurses.
        let mut pending: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.less.take());
            pending.extend(node.equal.take());
            pending.extend(node.greater.take());
        }
    }
}

impl fmt::Display for TernarySearchTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl<'a> IntoIterator for &'a TernarySearchTree {
    type Item = String;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: AsRef<str>> Extend<S> for TernarySearchTree {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        let mut inserted = 0usize;
        for term in iter {
            self.insert(term);
            inserted += 1;
        }
        tracing::debug!(inserted, "extended ternary search tree");
    }
}

impl<S: AsRef<str>> FromIterator<S> for TernarySearchTree {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
