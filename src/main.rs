use std::io::{self, BufRead, Write};
use std::path::Path;

use anagram::anagram::rank::{score, spell};
use anagram::utils::serialization;
use anagram::{Dictionary, LetterTile, Query, Solver, WordList};
use anyhow::{Context, Result};

const MIN_LETTERS: usize = 2;
// Leaves room for a few "qu" tiles
const MAX_LETTERS: usize = 20;
const LIST_LIMIT: usize = 10;

/// Loads the cached trie, or rebuilds it from the word list and caches it again
fn load_dictionary(word_path: &Path, cache_path: &Path) -> Result<Dictionary> {
    match serialization::load_from_disk(cache_path) {
        Ok(dict) => return Ok(dict),
        Err(e) => println!("Error loading word tree cache ({}). Creating a new one.", e),
    }

    let words = WordList::from_file(word_path)
        .with_context(|| format!("reading word list {}", word_path.display()))?;
    let dict = Dictionary::from_words(words.filter_by(Some(MIN_LETTERS), Some(MAX_LETTERS), true));
    if let Err(e) = serialization::save_to_disk(&dict, cache_path) {
        println!("Could not cache word tree: {}", e);
    }
    Ok(dict)
}

/// Prompts for letters until `Q` or the end of input
fn play<R: BufRead, W: Write>(solver: &Solver, mut input: R, mut output: W) -> Result<()> {
    let mut line = String::new();
    loop {
        writeln!(output, "Letters or Q (Qu already included):")?;
        line.clear();
        if input.read_line(&mut line).context("reading letters")? == 0 {
            break;
        }
        let letters = line.trim();
        if letters.eq_ignore_ascii_case("q") {
            break;
        }
        if letters.is_empty() || !letters.chars().all(char::is_alphabetic) {
            continue;
        }

        let mut tiles: Vec<LetterTile> = letters.chars().map(LetterTile::scored).collect();
        tiles.push(LetterTile::scored("qu"));
        let best = solver.find_words(&Query::new(&tiles).limit(LIST_LIMIT));
        for word in best.iter() {
            writeln!(output, "{:<20} {}", spell(word), score(word))?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let word_path = args.get(1).map(String::as_str).unwrap_or("words.txt");
    let cache_path = args.get(2).map(String::as_str).unwrap_or("wordtree.bin");

    let dict = load_dictionary(Path::new(word_path), Path::new(cache_path))?;
    println!("Number of Words: {}", dict.len());
    let solver = Solver::new(dict);

    play(&solver, io::stdin().lock(), io::stdout().lock())
}
