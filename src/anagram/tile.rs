use serde::{Deserialize, Serialize};

/// Anything that can be played as a tile. Equality and hashing are left to the
/// implementor; the search only ever looks at `letters` and `points`.
pub trait Tile {
    /// One or more letters printed on the tile
    fn letters(&self) -> &str;
    /// Score contributed by this tile
    fn points(&self) -> i32;
}

impl<T: Tile + ?Sized> Tile for &T {
    fn letters(&self) -> &str {
        (**self).letters()
    }

    fn points(&self) -> i32 {
        (**self).points()
    }
}

/// Standard per-letter values, a..z
const LETTER_VALUES: [i32; 26] = [
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, 1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10,
];

/// Value of a single letter. Anything outside a..z is worth nothing.
pub fn letter_points(letter: char) -> i32 {
    let l = letter.to_ascii_lowercase();
    if l.is_ascii_lowercase() {
        LETTER_VALUES[l as usize - 'a' as usize]
    } else {
        0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LetterTile {
    letters: String,
    points: i32,
}

impl LetterTile {
    pub fn new(letters: impl Into<String>, points: i32) -> Self {
        Self {
            letters: letters.into(),
            points,
        }
    }

    /// Tile scored with the standard letter values. Multi-letter tiles are worth
    /// the sum of their letters.
    pub fn scored(letters: impl Into<String>) -> Self {
        let letters = letters.into();
        let points = letters.chars().map(letter_points).sum();
        Self { letters, points }
    }
}

impl Tile for LetterTile {
    fn letters(&self) -> &str {
        &self.letters
    }

    fn points(&self) -> i32 {
        self.points
    }
}

impl std::fmt::Display for LetterTile {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.letters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scored_tiles() {
        assert_eq!(LetterTile::scored("a").points(), 1);
        assert_eq!(LetterTile::scored("Z").points(), 10);
        assert_eq!(LetterTile::scored("qu").points(), 11);
        assert_eq!(LetterTile::scored("-").points(), 0);
    }

    #[test]
    fn test_equality_is_by_value() {
        assert_eq!(LetterTile::new("a", 1), LetterTile::new("a", 1));
        assert_ne!(LetterTile::new("a", 1), LetterTile::new("a", 2));
    }
}
