use fst::{IntoStreamer, Set, Streamer};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::tree::{NodeData, NodeId, Tree};

/// Payload of a prefix tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Letter {
    /// Lowercased letter, `None` only at the root
    pub letter: Option<char>,
    /// Some word ends exactly at this node
    pub terminal: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterAttr {
    Letter(char),
    Terminal(bool),
}

impl NodeData for Letter {
    type Attr = LetterAttr;

    fn matches(&self, attr: &LetterAttr) -> bool {
        match *attr {
            LetterAttr::Letter(l) => self.letter == Some(l),
            LetterAttr::Terminal(t) => self.terminal == t,
        }
    }
}

/// Prefix tree of every valid word. Built once, then only read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dictionary {
    tree: Tree<Letter>,
    root: NodeId,
    n_words: usize,
}

impl Dictionary {
    pub fn new() -> Self {
        let mut tree = Tree::new();
        let root = tree.insert(Letter {
            letter: None,
            terminal: false,
        });
        Self {
            tree,
            root,
            n_words: 0,
        }
    }

    /// Builds the trie from an already filtered word sequence
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = Self::new();
        dict.extend(words);
        info!(
            words = dict.n_words,
            nodes = dict.tree.len(),
            "dictionary trie built"
        );
        dict
    }

    /// Builds the trie from the keys of an fst set. Keys that are not valid utf-8
    /// are skipped.
    pub fn from_set<D: AsRef<[u8]>>(set: &Set<D>) -> Self {
        let mut dict = Self::new();
        let mut stream = set.into_stream();
        while let Some(key) = stream.next() {
            if let Ok(word) = std::str::from_utf8(key) {
                dict.insert(word);
            }
        }
        info!(
            words = dict.n_words,
            nodes = dict.tree.len(),
            "dictionary trie built from fst set"
        );
        dict
    }

    /// Adds a word, one node per lowercased letter. Empty words are ignored.
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        let mut curr = self.root;
        for c in word.chars().flat_map(char::to_lowercase) {
            curr = match self.next_node(curr, c) {
                Some(next) => next,
                None => {
                    let new = self.tree.insert(Letter {
                        letter: Some(c),
                        terminal: false,
                    });
                    self.tree.graft(curr, new);
                    new
                }
            };
        }
        let end = self.tree.data_mut(curr);
        if !end.terminal {
            end.terminal = true;
            self.n_words += 1;
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn tree(&self) -> &Tree<Letter> {
        &self.tree
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.n_words
    }

    pub fn is_empty(&self) -> bool {
        self.n_words == 0
    }

    /// Child of `node` for the given letter
    pub fn next_node(&self, node: NodeId, c: char) -> Option<NodeId> {
        self.tree
            .children_by_data(node, &LetterAttr::Letter(c))
            .next()
    }

    /// Follows every (lowercased) letter of `letters` from `node`. Returns None if
    /// any step is missing or if there are no letters at all.
    pub fn walk(&self, node: NodeId, letters: &str) -> Option<NodeId> {
        if letters.is_empty() {
            return None;
        }
        letters
            .chars()
            .flat_map(char::to_lowercase)
            .try_fold(node, |curr, c| self.next_node(curr, c))
    }

    pub fn is_terminal(&self, node: NodeId) -> bool {
        self.tree.data(node).terminal
    }

    pub fn contains(&self, word: &str) -> bool {
        self.walk(self.root, word)
            .map_or(false, |node| self.is_terminal(node))
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>> Extend<S> for Dictionary {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        iter.into_iter().for_each(|w| self.insert(w.as_ref()));
    }
}

impl<S: AsRef<str>> std::iter::FromIterator<S> for Dictionary {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::from_words(iter)
    }
}
