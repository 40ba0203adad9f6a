use super::tile::Tile;

/// Positional and length restrictions applied while searching. Lists shorter than
/// the word being built leave the remaining positions unconstrained.
#[derive(Debug)]
pub struct SearchConstraints<'a, T> {
    /// Tile pinned to each position, `None` where any free tile may go
    pub fixed_tiles: &'a [Option<T>],
    /// Tiles that belong in the word but not at this position
    pub wrong_position_tiles: &'a [Vec<T>],
    pub min_tiles: Option<usize>,
    pub max_tiles: Option<usize>,
}

impl<'a, T> Clone for SearchConstraints<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for SearchConstraints<'a, T> {}

impl<'a, T> Default for SearchConstraints<'a, T> {
    fn default() -> Self {
        Self {
            fixed_tiles: &[],
            wrong_position_tiles: &[],
            min_tiles: Some(1),
            max_tiles: None,
        }
    }
}

impl<'a, T: Tile> SearchConstraints<'a, T> {
    pub fn fixed_at(&self, position: usize) -> Option<&'a T> {
        self.fixed_tiles.get(position).and_then(Option::as_ref)
    }

    /// The tile's letters are reported as misplaced at this position
    pub fn is_wrong_position(&self, tile: &T, position: usize) -> bool {
        self.wrong_position_tiles
            .get(position)
            .map_or(false, |wrong| {
                wrong.iter().any(|w| w.letters() == tile.letters())
            })
    }

    pub fn accepts_length(&self, n_tiles: usize) -> bool {
        self.min_tiles.map_or(true, |min| n_tiles >= min)
            && self.max_tiles.map_or(true, |max| n_tiles <= max)
    }

    /// Longer words than `n_tiles` are still allowed
    pub fn can_extend(&self, n_tiles: usize) -> bool {
        self.max_tiles.map_or(true, |max| n_tiles < max)
    }

    /// Every misplaced tile has to show up somewhere in the finished word
    pub fn contains_misplaced<W: Tile>(&self, word: &[W]) -> bool {
        self.wrong_position_tiles.iter().flatten().all(|wrong| {
            word.iter().any(|tile| tile.letters() == wrong.letters())
        })
    }
}
