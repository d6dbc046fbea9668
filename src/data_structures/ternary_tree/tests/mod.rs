// Copyright (c) 2026 TST Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Unit and property-based tests for the ternary search tree.


use test_case::test_case;

use super::*;

fn tree_of(words: &[&str]) -> TernarySearchTree {
    words.iter().collect()
}

#[test]
fn test_empty_tree() {
    let tree = TernarySearchTree::new();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert!(tree.all_strings().is_empty());
    assert!(tree.root().is_none());
}

#[test]
fn test_insert_single_word() {
    let mut tree = TernarySearchTree::new();
    assert!(tree.insert("word"));
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.all_strings(), vec!["word"]);
    assert!(!tree.is_empty());
}

#[test]
fn test_insert_duplicate_word() {
    let mut tree = TernarySearchTree::new();
    assert!(tree.insert("word"));
    assert!(tree.insert("word"));

    assert_eq!(tree.len(), 1);
    assert_eq!(tree.all_strings(), vec!["word"]);
    assert!(tree.search("wo", false));
    assert!(!tree.search("woo", false));
}

#[test]
fn test_insert_empty_string() {
    let mut tree = TernarySearchTree::new();
    assert!(tree.insert(""));
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.all_strings(), vec![""]);
    assert_eq!(tree.root().map(Node::symbol), Some(Symbol::Sentinel));
}

#[test]
fn test_all_strings_sorted() {
    let tree = tree_of(&["this", "list", "is", "not", "sorted"]);
    assert_eq!(tree.all_strings(), vec!["is", "list", "not", "sorted", "this"]);
}

// (inserted words, term, exact, expected)
#[test_case(&[], "", true, false ; "empty tree exact empty")]
#[test_case(&[], "", false, false ; "empty tree prefix empty")]
#[test_case(&["word"], "", true, false ; "word only exact empty")]
#[test_case(&["word"], "", false, true ; "word only prefix empty")]
#[test_case(&[""], "", true, true ; "empty inserted exact empty")]
#[test_case(&[""], "", false, true ; "empty inserted prefix empty")]
#[test_case(&["word"], "word", true, true ; "exact hit")]
#[test_case(&["word"], "nonexistent", true, false ; "exact miss")]
#[test_case(&["word"], "wo", true, false ; "prefix is not exact")]
#[test_case(&["word"], "wo", false, true ; "prefix hit")]
#[test_case(&["word"], "woo", false, false ; "prefix miss")]
#[test_case(&["word"], "words", false, false ; "longer than stored")]
fn test_search_boundaries(words: &[&str], term: &str, exact: bool, expected: bool) {
    let tree = tree_of(words);
    assert_eq!(tree.search(term, exact), expected);
}

#[test]
fn test_empty_string_after_words() {
    // Sentinel inserted below an existing root must still enumerate first
    let tree = tree_of(&["b", "a", "", "c"]);
    assert_eq!(tree.all_strings(), vec!["", "a", "b", "c"]);
    assert!(tree.contains(""));
    assert!(tree.contains("a"));
    assert_eq!(tree.len(), 4);
}

#[test]
fn test_words_after_empty_string() {
    let tree = tree_of(&["", "b", "a"]);
    assert_eq!(tree.all_strings(), vec!["", "a", "b"]);
    assert!(!tree.contains("ab"));
}

#[test]
fn test_nested_prefixes() {
    let tree = tree_of(&["car", "ca", "cart", "c"]);
    assert_eq!(tree.all_strings(), vec!["c", "ca", "car", "cart"]);
    for word in ["c", "ca", "car", "cart"] {
        assert!(tree.contains(word), "{word} should be stored");
    }
    assert!(!tree.contains("carts"));
    assert!(tree.contains_prefix("car"));
}

#[test]
fn test_code_point_ordering() {
    // Uppercase sorts before lowercase, accents after ASCII
    let tree = tree_of(&["é", "e", "E", "z"]);
    assert_eq!(tree.all_strings(), vec!["E", "e", "z", "é"]);
}

#[test]
fn test_multibyte_characters() {
    let tree = tree_of(&["日本", "日本語", "日曜"]);
    assert!(tree.contains("日本"));
    assert!(tree.contains_prefix("日"));
    assert!(!tree.contains("日"));
    assert_eq!(tree.all_strings(), vec!["日曜", "日本", "日本語"]);
}

#[test]
fn test_iter_matches_all_strings() {
    let tree = tree_of(&["delta", "alpha", "charlie", "bravo", "alp"]);
    let mut iter = tree.iter();
    let collected: Vec<String> = iter.by_ref().collect();

    assert_eq!(collected, tree.all_strings());
    assert_eq!(iter.next(), None);
    assert_eq!((&tree).into_iter().count(), 5);
}

#[test]
fn test_strings_with_prefix() {
    let tree = tree_of(&["apple", "application", "apply", "banana", "app"]);

    assert_eq!(
        tree.strings_with_prefix("app"),
        vec!["app", "apple", "application", "apply"]
    );
    assert_eq!(tree.strings_with_prefix("appl"), vec!["apple", "application", "apply"]);
    assert_eq!(tree.strings_with_prefix("b"), vec!["banana"]);
    assert!(tree.strings_with_prefix("orange").is_empty());
    assert_eq!(tree.strings_with_prefix(""), tree.all_strings());
}

#[test]
fn test_render_leaves_tree_unchanged() {
    let tree = tree_of(&["this", "list", "is", "not", "sorted"]);
    let before = tree.clone();

    let diagram = tree.render();
    assert!(!diagram.is_empty());
    assert_eq!(format!("{tree}"), diagram);
    assert_eq!(tree, before);
    assert_eq!(tree.all_strings(), before.all_strings());
}

#[test]
fn test_long_term() {
    let long: String = std::iter::repeat('x').take(2_000).collect();
    let mut tree = TernarySearchTree::new();
    tree.insert(&long);

    assert!(tree.contains(&long));
    assert!(tree.contains_prefix(&long[..1_000]));
    assert_eq!(tree.all_strings(), vec![long]);
}

#[test]
fn test_deep_tree_counts_and_drops_on_small_stack() {
    let long: String = std::iter::repeat('y').take(50_000).collect();

    // Insertion recurses per character, so it gets a generous stack.
    let tree = std::thread::Builder::new()
        .stack_size(256 * 1024 * 1024)
        .spawn(move || {
            let mut tree = TernarySearchTree::new();
            tree.insert(&long);
            tree
        })
        .unwrap()
        .join()
        .unwrap();

    let walked = std::thread::Builder::new()
        .stack_size(128 * 1024)
        .spawn(move || {
            let counts = (tree.len(), tree.iter().count(), tree.is_empty());
            drop(tree);
            counts
        })
        .unwrap()
        .join()
        .unwrap();

    assert_eq!(walked, (1, 1, false));
}
