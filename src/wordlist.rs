use crate::game::ALPHABET;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub const EMBEDDED_WORDLIST: &str = include_str!("resources/words.txt");

/// Inclusive bounds on target word length, in characters (not bytes).
pub const MIN_WORD_LEN: usize = 4;
pub const MAX_WORD_LEN: usize = 8;

/// The word list contains nothing of eligible length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoEligibleWords;

impl fmt::Display for NoEligibleWords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "word list has no words of {MIN_WORD_LEN} to {MAX_WORD_LEN} letters"
        )
    }
}

impl std::error::Error for NoEligibleWords {}

pub fn load_words_from_str(data: &str) -> Vec<String> {
    data.lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| !word.is_empty() && word.chars().all(|c| ALPHABET.contains(c)))
        .collect()
}

pub fn load_words_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        let word = line?.trim().to_lowercase();
        if !word.is_empty() && word.chars().all(|c| ALPHABET.contains(c)) {
            words.push(word);
        }
    }
    Ok(words)
}

/// Pick a target word uniformly at random among words whose character count
/// lies in [`MIN_WORD_LEN`, `MAX_WORD_LEN`]. The returned word is lowercased.
pub fn pick_word<R: Rng + ?Sized>(words: &[String], rng: &mut R) -> Result<String, NoEligibleWords> {
    let eligible: Vec<&String> = words
        .iter()
        .filter(|word| {
            let len = word.chars().count();
            (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&len)
        })
        .collect();

    eligible
        .choose(rng)
        .map(|word| word.to_lowercase())
        .ok_or(NoEligibleWords)
}
