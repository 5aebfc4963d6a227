use crate::game::{DisplayState, Game};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserAction {
    Letter(char),
    NewGame,
    Exit,
}

/// Seam between the game loop and a presentation layer (TUI or plain CLI).
/// The loop mutates the [`Game`] and re-renders after every transition; the
/// interface only captures input and paints state.
pub trait GameInterface {
    fn render(&mut self, state: &DisplayState);
    /// Block until the next user action. `None` means "nothing actionable
    /// yet" and the loop simply asks again.
    fn read_action(&mut self) -> Option<UserAction>;
    fn display_error(&mut self, message: &str);
    fn display_exit_message(&mut self);
}

/// Drive one session to completion: one serialized input event per
/// iteration, processed fully before the next is accepted.
pub fn game_loop<I: GameInterface>(game: &mut Game, interface: &mut I) {
    interface.render(&game.render_state());

    loop {
        match interface.read_action() {
            Some(UserAction::Letter(letter)) => {
                game.guess(letter);
                interface.render(&game.render_state());
            }
            Some(UserAction::NewGame) => match game.reset() {
                Ok(()) => interface.render(&game.render_state()),
                Err(e) => {
                    interface.display_error(&e.to_string());
                    break;
                }
            },
            Some(UserAction::Exit) => {
                interface.display_exit_message();
                break;
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameResult;

    /// Scripted interface: feeds a fixed action sequence and records what
    /// gets rendered.
    struct ScriptedInterface {
        actions: Vec<UserAction>,
        rendered: Vec<DisplayState>,
        errors: Vec<String>,
        exited: bool,
    }

    impl ScriptedInterface {
        fn new(mut actions: Vec<UserAction>) -> Self {
            actions.reverse();
            Self {
                actions,
                rendered: Vec::new(),
                errors: Vec::new(),
                exited: false,
            }
        }
    }

    impl GameInterface for ScriptedInterface {
        fn render(&mut self, state: &DisplayState) {
            self.rendered.push(state.clone());
        }

        fn read_action(&mut self) -> Option<UserAction> {
            Some(self.actions.pop().unwrap_or(UserAction::Exit))
        }

        fn display_error(&mut self, message: &str) {
            self.errors.push(message.to_string());
        }

        fn display_exit_message(&mut self) {
            self.exited = true;
        }
    }

    fn new_game(word: &str) -> Game {
        Game::new(vec![word.to_string()]).unwrap()
    }

    #[test]
    fn test_loop_renders_initial_state() {
        let mut game = new_game("мост");
        let mut interface = ScriptedInterface::new(vec![UserAction::Exit]);
        game_loop(&mut game, &mut interface);
        assert_eq!(interface.rendered.len(), 1);
        assert_eq!(interface.rendered[0].masked, "_ _ _ _");
        assert!(interface.exited);
    }

    #[test]
    fn test_loop_rerenders_after_each_guess() {
        let mut game = new_game("мост");
        let mut interface = ScriptedInterface::new(vec![
            UserAction::Letter('м'),
            UserAction::Letter('з'),
            UserAction::Exit,
        ]);
        game_loop(&mut game, &mut interface);
        assert_eq!(interface.rendered.len(), 3);
        assert_eq!(interface.rendered[1].masked, "М _ _ _");
        assert_eq!(interface.rendered[1].attempts_left, 5);
        assert_eq!(interface.rendered[2].attempts_left, 4);
    }

    #[test]
    fn test_loop_plays_to_win() {
        let mut game = new_game("мост");
        let mut interface = ScriptedInterface::new(vec![
            UserAction::Letter('м'),
            UserAction::Letter('о'),
            UserAction::Letter('с'),
            UserAction::Letter('т'),
            UserAction::Exit,
        ]);
        game_loop(&mut game, &mut interface);
        assert_eq!(game.result(), GameResult::Win);
        let last = interface.rendered.last().unwrap();
        assert_eq!(last.result, GameResult::Win);
        assert_eq!(last.masked, "М О С Т");
    }

    #[test]
    fn test_loop_new_game_resets_session() {
        let mut game = new_game("мост");
        let mut interface = ScriptedInterface::new(vec![
            UserAction::Letter('з'),
            UserAction::NewGame,
            UserAction::Exit,
        ]);
        game_loop(&mut game, &mut interface);
        assert_eq!(game.result(), GameResult::InProgress);
        assert_eq!(game.attempts_left(), 5);
        let last = interface.rendered.last().unwrap();
        assert!(last.used.is_empty());
    }
}
