// Copyright (c) 2026 TST Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Node implementation for the ternary search tree.
//!
//! Each node holds one character slot of a stored string, a terminal flag, and
//! three exclusively owned children ordered by code point.

use std::cmp::Ordering;
use std::fmt;

use super::error::{TernaryTreeError, TernaryTreeResult};

/// The character held by a node.
///
/// `Sentinel` marks the terminator of the empty string and is never a real
/// character. It orders before every `Char`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// The "no character" marker.
    Sentinel,
    /// A single Unicode scalar value.
    Char(char),
}

impl Symbol {
    /// Returns the symbol at `index` of `term`, or the sentinel for an empty term.
    pub(crate) fn at(term: &[char], index: usize) -> Self {
        if term.is_empty() {
            Symbol::Sentinel
        } else {
            Symbol::Char(term[index])
        }
    }

    /// Appends this symbol to `path`. The sentinel contributes nothing.
    pub(crate) fn push_onto(self, path: &mut String) {
        if let Symbol::Char(c) = self {
            path.push(c);
        }
    }
}

impl Ord for Symbol {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Symbol::Sentinel, Symbol::Sentinel) => Ordering::Equal,
            (Symbol::Sentinel, Symbol::Char(_)) => Ordering::Less,
            (Symbol::Char(_), Symbol::Sentinel) => Ordering::Greater,
            (Symbol::Char(a), Symbol::Char(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for Symbol {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Symbol::Char(c)
    }
}

impl TryFrom<&str> for Symbol {
    type Error = TernaryTreeError;

    fn try_from(value: &str) -> TernaryTreeResult<Self> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Ok(Symbol::Sentinel),
            (Some(c), None) => Ok(Symbol::Char(c)),
            (Some(_), Some(_)) => Err(TernaryTreeError::InvalidArgument {
                value: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Sentinel => f.write_str("ε"),
            Symbol::Char(c) => write!(f, "{c:?}"),
        }
    }
}

/// A node in the ternary search tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Character stored at this position
    pub(crate) symbol: Symbol,

    /// Whether some inserted string ends here
    pub(crate) terminates: bool,

    /// Siblings with a smaller character at the same position
    pub(crate) less: Option<Box<Node>>,

    /// Next character of the same string
    pub(crate) equal: Option<Box<Node>>,

    /// Siblings with a larger character at the same position
    pub(crate) greater: Option<Box<Node>>,
}

impl Node {
    /// Creates a non-terminal node without children.
    pub fn new(symbol: Symbol) -> Self {
        Self {
            symbol,
            terminates: false,
            less: None,
            equal: None,
            greater: None,
        }
    }

    /// The character held by this node.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Whether an inserted string ends at this node.
    pub fn terminates(&self) -> bool {
        self.terminates
    }

    /// Sibling subtree with smaller characters at this position.
    pub fn less(&self) -> Option<&Node> {
        self.less.as_deref()
    }

    /// Subtree continuing the string with its next character.
    pub fn equal(&self) -> Option<&Node> {
        self.equal.as_deref()
    }

    /// Sibling subtree with larger characters at this position.
    pub fn greater(&self) -> Option<&Node> {
        self.greater.as_deref()
    }
}

impl TryFrom<&str> for Node {
    type Error = TernaryTreeError;

    fn try_from(value: &str) -> TernaryTreeResult<Self> {
        Symbol::try_from(value).map(Node::new)
    }
}
