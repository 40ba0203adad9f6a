use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use bincode::Options;

use crate::error::Result;

pub fn save_to_disk<T: Serialize, TPath: AsRef<Path>>(data: &T, path: TPath) -> Result<()> {
    let options = bincode::DefaultOptions::new();
    let options = options.with_no_limit();
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    options.serialize_into(writer, data)?;
    Ok(())
}

pub fn load_from_disk<T: DeserializeOwned, TPath: AsRef<Path>>(path: TPath) -> Result<T> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let options = bincode::DefaultOptions::new();
    let options = options.with_no_limit();
    Ok(options.deserialize_from(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anagram::tile::LetterTile;
    use crate::anagram::{Query, Solver};
    use crate::error::AnagramError;
    use crate::Dictionary;

    #[test]
    fn test_cached_dictionary_answers_the_same() {
        let dict = Dictionary::from_words(["cat", "cats", "at", "act", "scat"]);
        let path = std::env::temp_dir().join(format!("anagram-cache-{}.bin", std::process::id()));
        save_to_disk(&dict, &path).unwrap();
        let cached: Dictionary = load_from_disk(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        let free: Vec<LetterTile> = "tacs".chars().map(LetterTile::scored).collect();
        let query = Query::new(&free);
        assert_eq!(
            Solver::new(dict).find_words(&query),
            Solver::new(cached).find_words(&query)
        );
    }

    #[test]
    fn test_missing_cache() {
        let result: Result<Dictionary> = load_from_disk("definitely/not/a/cache.bin");
        assert!(matches!(result, Err(AnagramError::CacheIo(_))));
    }
}
