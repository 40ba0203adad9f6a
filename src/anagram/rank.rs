use std::cmp::Reverse;
use std::collections::HashSet;

use tracing::trace;

use super::tile::Tile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankOptions {
    /// Keep only the best scoring word for each spelling
    pub unique: bool,
    /// Maximum number of words returned
    pub limit: Option<usize>,
    /// Lowest scores first
    pub ascending: bool,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            unique: true,
            limit: None,
            ascending: false,
        }
    }
}

/// Sum of the points of every tile in the word
pub fn score<T: Tile>(word: &[T]) -> i32 {
    word.iter().map(|t| t.points()).sum()
}

/// Concatenated letters of the word
pub fn spell<T: Tile>(word: &[T]) -> String {
    word.iter().map(|t| t.letters()).collect()
}

/// Sorts words by score, then optionally removes repeated spellings and truncates.
/// The sort is stable, so equal scores keep the order they were found in.
pub fn rank<T: Tile>(mut words: Vec<Vec<T>>, options: &RankOptions) -> Vec<Vec<T>> {
    if options.ascending {
        words.sort_by_cached_key(|w| score(w));
    } else {
        words.sort_by_cached_key(|w| Reverse(score(w)));
    }

    if options.unique {
        let mut seen = HashSet::new();
        words.retain(|w| seen.insert(spell(w)));
    }

    if let Some(limit) = options.limit {
        words.truncate(limit);
    }
    trace!(words = words.len(), "ranked words");
    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anagram::tile::LetterTile;

    fn word(tiles: &[(&str, i32)]) -> Vec<LetterTile> {
        tiles.iter().map(|&(l, p)| LetterTile::new(l, p)).collect()
    }

    fn spelled(words: &[Vec<LetterTile>]) -> Vec<String> {
        words.iter().map(|w| spell(w)).collect()
    }

    fn found() -> Vec<Vec<LetterTile>> {
        vec![
            word(&[("a", 1), ("t", 1)]),
            word(&[("c", 1), ("a", 1), ("t", 1), ("s", 1)]),
            word(&[("c", 1), ("a", 1), ("t", 1)]),
            // Same spelling, better tile
            word(&[("c", 1), ("a", 5), ("t", 1)]),
        ]
    }

    #[test]
    fn test_descending_keeps_best_duplicate() {
        let ranked = rank(found(), &RankOptions::default());
        assert_eq!(spelled(&ranked), vec!["cat", "cats", "at"]);
        assert_eq!(score(&ranked[0]), 7);
    }

    #[test]
    fn test_ascending_keeps_lowest_duplicate() {
        let options = RankOptions {
            ascending: true,
            ..Default::default()
        };
        let ranked = rank(found(), &options);
        assert_eq!(spelled(&ranked), vec!["at", "cat", "cats"]);
        assert_eq!(score(&ranked[1]), 3);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let words = vec![word(&[("b", 2)]), word(&[("a", 2)]), word(&[("c", 2)])];
        let ranked = rank(words, &RankOptions::default());
        assert_eq!(spelled(&ranked), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_not_unique() {
        let options = RankOptions {
            unique: false,
            ..Default::default()
        };
        let ranked = rank(found(), &options);
        assert_eq!(spelled(&ranked), vec!["cat", "cats", "cat", "at"]);
    }

    #[test]
    fn test_limit() {
        let limited = |limit| {
            let options = RankOptions {
                limit: Some(limit),
                ..Default::default()
            };
            rank(found(), &options).len()
        };
        assert_eq!(limited(0), 0);
        assert_eq!(limited(1), 1);
        assert_eq!(limited(100), 3);
    }
}
