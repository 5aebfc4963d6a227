use hangman::cli::{CliInterface, parse_cli};
use hangman::game::Game;
use hangman::game_state::game_loop;
use hangman::tui::TuiInterface;
use hangman::wordlist::{EMBEDDED_WORDLIST, load_words_from_file, load_words_from_str};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    let cli = parse_cli();

    let words = match &cli.wordlist_path {
        Some(path) => match load_words_from_file(path) {
            Ok(words) => words,
            Err(e) => {
                eprintln!("Failed to load word list from '{path}': {e}");
                return ExitCode::FAILURE;
            }
        },
        None => load_words_from_str(EMBEDDED_WORDLIST),
    };

    // Selection failure is fatal: no placeholder word is substituted.
    let mut game = match Game::new(words) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("Cannot start game: {e}");
            return ExitCode::FAILURE;
        }
    };

    if cli.simple {
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock());
        game_loop(&mut game, &mut interface);
    } else {
        let mut interface = match TuiInterface::new() {
            Ok(interface) => interface,
            Err(e) => {
                eprintln!("Failed to initialize terminal: {e}");
                return ExitCode::FAILURE;
            }
        };
        game_loop(&mut game, &mut interface);
    }

    ExitCode::SUCCESS
}
