// Library interface for hangman
// This allows integration tests to access internal modules

pub mod cli;
pub mod game;
pub mod game_state;
pub mod logging;
pub mod tui;
pub mod wordlist;

// Re-export commonly used items for easier testing
pub use game::{ALPHABET, DisplayState, Game, GameResult, MAX_ATTEMPTS};
pub use game_state::{GameInterface, UserAction, game_loop};
pub use wordlist::{
    EMBEDDED_WORDLIST, NoEligibleWords, load_words_from_file, load_words_from_str, pick_word,
};
