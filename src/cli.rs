use crate::game::{DisplayState, GameResult};
use crate::game_state::{GameInterface, UserAction};
use clap::Parser;
use std::io::BufRead;

/// Hangman CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word list file
    #[arg(short = 'i', long = "input")]
    pub wordlist_path: Option<String>,

    /// Run the plain stdin/stdout interface instead of the TUI
    #[arg(long)]
    pub simple: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Plain-text implementation of the `GameInterface` trait over any
/// `BufRead`, used by `--simple` mode and by the integration tests.
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn render(&mut self, state: &DisplayState) {
        println!();
        println!("{}", state.masked);
        println!("Attempts left: {}", state.attempts_left);
        if !state.used.is_empty() {
            let used: String = state
                .used
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            println!("Used letters: {used}");
        }
        match state.result {
            GameResult::Win => println!("You win!"),
            GameResult::Loss => {
                if let Some(answer) = &state.answer {
                    println!("You lose! The word was: {answer}");
                } else {
                    println!("You lose!");
                }
            }
            GameResult::InProgress => {}
        }
    }

    fn read_action(&mut self) -> Option<UserAction> {
        println!("\nEnter a letter (or 'next' for a new game, 'exit' to quit):");
        let mut input = String::new();
        match self.reader.read_line(&mut input) {
            Ok(0) | Err(_) => return Some(UserAction::Exit),
            Ok(_) => {}
        }
        let input = input.trim().to_lowercase();

        match input.as_str() {
            "exit" => Some(UserAction::Exit),
            "next" => Some(UserAction::NewGame),
            _ if input.chars().count() == 1 => input.chars().next().map(UserAction::Letter),
            _ => {
                println!("Please enter a single letter.");
                None
            }
        }
    }

    fn display_error(&mut self, message: &str) {
        eprintln!("Error: {message}");
    }

    fn display_exit_message(&mut self) {
        println!("Exiting.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read_one(input: &str) -> Option<UserAction> {
        let mut interface = CliInterface::new(Cursor::new(input));
        interface.read_action()
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli {
            wordlist_path: None,
            simple: false,
        };
        assert_eq!(cli.wordlist_path, None);
        assert!(!cli.simple);
    }

    #[test]
    fn test_cli_with_path() {
        let cli = Cli {
            wordlist_path: Some("words.txt".to_string()),
            simple: true,
        };
        assert_eq!(cli.wordlist_path.as_deref(), Some("words.txt"));
        assert!(cli.simple);
    }

    #[test]
    fn test_read_action_letter() {
        assert_eq!(read_one("м\n"), Some(UserAction::Letter('м')));
    }

    #[test]
    fn test_read_action_uppercase_letter_lowercased() {
        assert_eq!(read_one("М\n"), Some(UserAction::Letter('м')));
    }

    #[test]
    fn test_read_action_trims_whitespace() {
        assert_eq!(read_one("  с  \n"), Some(UserAction::Letter('с')));
    }

    #[test]
    fn test_read_action_exit() {
        assert_eq!(read_one("exit\n"), Some(UserAction::Exit));
        assert_eq!(read_one("EXIT\n"), Some(UserAction::Exit));
    }

    #[test]
    fn test_read_action_next() {
        assert_eq!(read_one("next\n"), Some(UserAction::NewGame));
    }

    #[test]
    fn test_read_action_eof_exits() {
        assert_eq!(read_one(""), Some(UserAction::Exit));
    }

    #[test]
    fn test_read_action_multi_character_input_rejected() {
        assert_eq!(read_one("мост\n"), None);
    }

    #[test]
    fn test_read_action_empty_line_rejected() {
        assert_eq!(read_one("\n"), None);
    }
}
