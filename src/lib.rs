//! # Anagram
//!
//! Finds every dictionary word that can be spelled from a set of letter tiles,
//! optionally with tiles pinned to positions or known to be misplaced, and ranks
//! the results by points.
//!
//! The dictionary is a prefix tree built once from a word list. Each query walks
//! it in lockstep with a tree of tile choices, prunes the branches that never
//! spell a word and returns the surviving words as tile sequences.

pub mod anagram;
pub mod error;
pub mod tree;
pub mod utils;

pub use anagram::dictionary::Dictionary;
pub use anagram::tile::{LetterTile, Tile};
pub use anagram::wordlist::WordList;
pub use anagram::{Query, Solver};
pub use error::{AnagramError, Result};
pub use tree::{NodeId, Tree};
