pub mod constraint;
pub mod dictionary;
pub mod rank;
pub mod search;
pub mod tile;
pub mod wordlist;

use rayon::prelude::*;
use tracing::debug;

use self::constraint::SearchConstraints;
use self::dictionary::Dictionary;
use self::rank::RankOptions;
use self::tile::Tile;

/// A single word search request. Built with `Query::new` and refined with the
/// builder methods; unset options fall back to their defaults.
#[derive(Debug)]
pub struct Query<'a, T> {
    pub free_tiles: &'a [T],
    pub constraints: SearchConstraints<'a, T>,
    pub ranking: RankOptions,
}

impl<'a, T> Clone for Query<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for Query<'a, T> {}

impl<'a, T> Query<'a, T> {
    pub fn new(free_tiles: &'a [T]) -> Self {
        Self {
            free_tiles,
            constraints: SearchConstraints::default(),
            ranking: RankOptions::default(),
        }
    }

    /// Tiles pinned per position. `None` leaves a position open.
    pub fn fixed(mut self, fixed_tiles: &'a [Option<T>]) -> Self {
        self.constraints.fixed_tiles = fixed_tiles;
        self
    }

    /// Tiles known to be in the word but not at that position
    pub fn wrong_positions(mut self, wrong_position_tiles: &'a [Vec<T>]) -> Self {
        self.constraints.wrong_position_tiles = wrong_position_tiles;
        self
    }

    pub fn min_tiles(mut self, min_tiles: Option<usize>) -> Self {
        self.constraints.min_tiles = min_tiles;
        self
    }

    pub fn max_tiles(mut self, max_tiles: Option<usize>) -> Self {
        self.constraints.max_tiles = max_tiles;
        self
    }

    pub fn unique(mut self, unique: bool) -> Self {
        self.ranking.unique = unique;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.ranking.limit = Some(limit);
        self
    }

    pub fn ascending(mut self, ascending: bool) -> Self {
        self.ranking.ascending = ascending;
        self
    }
}

/// Finds the best words that can be built from a set of tiles
#[derive(Debug, Clone)]
pub struct Solver {
    dictionary: Dictionary,
}

impl Solver {
    pub fn new(dictionary: Dictionary) -> Self {
        Self { dictionary }
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(Dictionary::from_words(words))
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Every dictionary word that the query's tiles can spell, as tile sequences
    /// ordered by total points
    pub fn find_words<'a, T: Tile>(&self, query: &Query<'a, T>) -> Vec<Vec<&'a T>> {
        let constraints = &query.constraints;
        let tile_tree = search::search(&self.dictionary, query.free_tiles, constraints);
        let words = tile_tree.words(constraints.min_tiles, constraints.max_tiles);
        debug!(found = words.len(), "extracted words");
        rank::rank(words, &query.ranking)
    }

    /// Runs independent queries in parallel against the shared dictionary
    pub fn find_words_many<'a, T: Tile + Sync>(
        &self,
        queries: &[Query<'a, T>],
    ) -> Vec<Vec<Vec<&'a T>>> {
        queries.par_iter().map(|q| self.find_words(q)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::rank::spell;
    use super::tile::LetterTile;
    use super::*;

    fn tiles(letters: &str) -> Vec<LetterTile> {
        letters.chars().map(|c| LetterTile::new(c, 1)).collect()
    }

    fn spelled(words: &[Vec<&LetterTile>]) -> Vec<String> {
        words.iter().map(|w| spell(w)).collect()
    }

    #[test]
    fn test_query_defaults() {
        let free = tiles("ab");
        let q = Query::new(&free);
        assert_eq!(q.constraints.min_tiles, Some(1));
        assert_eq!(q.constraints.max_tiles, None);
        assert!(q.ranking.unique);
        assert!(!q.ranking.ascending);
        assert_eq!(q.ranking.limit, None);
    }

    #[test]
    fn test_find_words() {
        let solver = Solver::from_words(["cat", "cats", "at"]);
        let free = tiles("cats");
        let query = Query::new(&free).min_tiles(Some(2)).max_tiles(Some(4));
        let found = solver.find_words(&query);
        assert_eq!(spelled(&found), vec!["cats", "cat", "at"]);

        let found = solver.find_words(&query.limit(1));
        assert_eq!(spelled(&found), vec!["cats"]);

        let found = solver.find_words(&query.ascending(true));
        assert_eq!(spelled(&found), vec!["at", "cat", "cats"]);
    }

    #[test]
    fn test_find_words_many_matches_sequential() {
        let solver = Solver::from_words(["cat", "cats", "at", "tab", "bat", "stab"]);
        let a = tiles("cats");
        let b = tiles("bats");
        let queries = vec![Query::new(&a), Query::new(&b), Query::new(&b).limit(2)];
        let parallel = solver.find_words_many(&queries);
        for (q, words) in queries.iter().zip(parallel.iter()) {
            assert_eq!(&solver.find_words(q), words);
        }
    }
}
