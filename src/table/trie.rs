//! A prefix tree over Braille cell sequences
//!
//! Used by the decoding direction to find the longest contraction whose cell
//! sequence starts at the current position. Several contractions can share a
//! cell sequence; the first one inserted keeps the node, so declaration order
//! decides ties.

use std::collections::HashMap;

#[derive(Default, Debug)]
struct TrieNode {
    entry: Option<usize>,
    transitions: HashMap<char, TrieNode>,
}

#[derive(Default, Debug)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    pub fn new() -> Self {
        Trie {
            root: TrieNode::default(),
        }
    }

    /// Insert `cells` pointing at `entry`. The first insertion for a given
    /// cell sequence wins; later ones are ignored.
    pub fn insert(&mut self, cells: &str, entry: usize) {
        let mut current_node = &mut self.root;
        for c in cells.chars() {
            current_node = current_node.transitions.entry(c).or_default();
        }
        current_node.entry.get_or_insert(entry);
    }

    /// The entry with the longest cell sequence matching a prefix of `input`
    pub fn find_longest(&self, input: &str) -> Option<usize> {
        let mut current_node = &self.root;
        let mut found = None;
        for c in input.chars() {
            match current_node.transitions.get(&c) {
                Some(node) => {
                    current_node = node;
                    if node.entry.is_some() {
                        found = node.entry;
                    }
                }
                None => break,
            }
        }
        found
    }
}
