use crate::wordlist::{NoEligibleWords, pick_word};
use std::collections::HashSet;

/// The 33 letters of the Russian alphabet, in alphabet order.
pub const ALPHABET: &str = "абвгдеёжзийклмнопрстуфхцчшщъыьэюя";

pub const MAX_ATTEMPTS: u8 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    InProgress,
    Win,
    Loss,
}

/// Snapshot handed to the presentation layer after each transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayState {
    /// Target word with guessed letters uppercase and `_` placeholders,
    /// space-separated. Fully revealed once the game is over.
    pub masked: String,
    pub attempts_left: u8,
    pub result: GameResult,
    /// Used letters in alphabet order, for the alphabet grid.
    pub used: Vec<char>,
    /// Correctly guessed letters in alphabet order.
    pub guessed: Vec<char>,
    /// The uppercased target word, available once the game is over.
    pub answer: Option<String>,
}

/// One hangman session. The word list is injected once at construction and
/// never mutated; `reset` reselects against the same list.
pub struct Game {
    words: Vec<String>,
    word: String,
    guessed: HashSet<char>,
    used: HashSet<char>,
    attempts_left: u8,
    result: GameResult,
}

impl Game {
    pub fn new(words: Vec<String>) -> Result<Self, NoEligibleWords> {
        let word = pick_word(&words, &mut rand::rng())?;
        Ok(Self {
            words,
            word,
            guessed: HashSet::new(),
            used: HashSet::new(),
            attempts_left: MAX_ATTEMPTS,
            result: GameResult::InProgress,
        })
    }

    /// Replace the session wholesale: new target word, empty letter sets,
    /// full attempts, back to `InProgress`.
    pub fn reset(&mut self) -> Result<(), NoEligibleWords> {
        self.word = pick_word(&self.words, &mut rand::rng())?;
        self.guessed.clear();
        self.used.clear();
        self.attempts_left = MAX_ATTEMPTS;
        self.result = GameResult::InProgress;
        Ok(())
    }

    /// Apply one letter guess. No-op once the game is over, for characters
    /// outside the alphabet, and for letters already used. A wrong guess
    /// costs one attempt.
    pub fn guess(&mut self, letter: char) {
        if self.result != GameResult::InProgress {
            return;
        }
        let letter = letter.to_lowercase().next().unwrap_or(letter);
        if !ALPHABET.contains(letter) {
            return;
        }
        if !self.used.insert(letter) {
            return;
        }

        if self.word.contains(letter) {
            self.guessed.insert(letter);
        } else {
            self.attempts_left = self.attempts_left.saturating_sub(1);
        }

        self.result = self.compute_result();
    }

    fn compute_result(&self) -> GameResult {
        if self.word.chars().all(|c| self.guessed.contains(&c)) {
            GameResult::Win
        } else if self.attempts_left == 0 {
            GameResult::Loss
        } else {
            GameResult::InProgress
        }
    }

    pub fn render_state(&self) -> DisplayState {
        let reveal_all = self.result != GameResult::InProgress;
        let mut masked = String::new();
        for (i, c) in self.word.chars().enumerate() {
            if i > 0 {
                masked.push(' ');
            }
            if reveal_all || self.guessed.contains(&c) {
                masked.extend(c.to_uppercase());
            } else {
                masked.push('_');
            }
        }

        DisplayState {
            masked,
            attempts_left: self.attempts_left,
            result: self.result,
            used: self.letters_in_alphabet_order(&self.used),
            guessed: self.letters_in_alphabet_order(&self.guessed),
            answer: if reveal_all {
                Some(self.word.to_uppercase())
            } else {
                None
            },
        }
    }

    fn letters_in_alphabet_order(&self, set: &HashSet<char>) -> Vec<char> {
        ALPHABET.chars().filter(|c| set.contains(c)).collect()
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    pub fn is_over(&self) -> bool {
        self.result != GameResult::InProgress
    }

    pub fn attempts_left(&self) -> u8 {
        self.attempts_left
    }

    pub fn word(&self) -> &str {
        &self.word
    }
}
