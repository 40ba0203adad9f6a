use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{AnagramError, Result};

/// Marks the plural form of an uncountable noun in the word list
const PLURAL_UNCOUNTABLE: char = '%';

/// Raw word list, one word per line
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut words = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(AnagramError::WordList)?;
            let word = line.trim();
            if !word.is_empty() {
                words.push(word.to_lowercase());
            }
        }
        Ok(Self { words })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path).map_err(AnagramError::WordList)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Lazily yields the words whose length (in characters, after stripping the
    /// plural-uncountable marker) lies within the bounds
    pub fn filter_by(
        &self,
        min_length: Option<usize>,
        max_length: Option<usize>,
        plural_uncountables: bool,
    ) -> impl Iterator<Item = String> + '_ {
        self.words
            .iter()
            .filter(move |w| plural_uncountables || !w.contains(PLURAL_UNCOUNTABLE))
            .map(|w| w.replace(PLURAL_UNCOUNTABLE, ""))
            .filter(move |w| {
                let length = w.chars().count();
                min_length.map_or(true, |min| length >= min)
                    && max_length.map_or(true, |max| length <= max)
            })
    }

    /// Every word, marker stripped
    pub fn iter(&self) -> impl Iterator<Item = String> + '_ {
        self.filter_by(None, None, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list() -> WordList {
        let raw = "a\nat\nCat\n\nsheep%\nelephant\n";
        WordList::from_reader(raw.as_bytes()).unwrap()
    }

    #[test]
    fn test_reads_lowercase_lines() {
        let words = list();
        assert_eq!(words.len(), 5);
        assert_eq!(
            words.iter().collect::<Vec<_>>(),
            vec!["a", "at", "cat", "sheep", "elephant"]
        );
    }

    #[test]
    fn test_filter_by_length() {
        let words = list();
        let short: Vec<_> = words.filter_by(Some(2), Some(3), true).collect();
        assert_eq!(short, vec!["at", "cat"]);
        let long: Vec<_> = words.filter_by(Some(5), None, true).collect();
        assert_eq!(long, vec!["sheep", "elephant"]);
    }

    #[test]
    fn test_plural_uncountables() {
        let words = list();
        let countable: Vec<_> = words.filter_by(Some(5), None, false).collect();
        assert_eq!(countable, vec!["elephant"]);
    }

    #[test]
    fn test_missing_file() {
        let err = WordList::from_file("definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, AnagramError::WordList(_)));
    }
}
