//! Terminal interface for the hangman game, built on Ratatui.
//!
//! Masked word, attempts, and result on the left; alphabet grid on the
//! right. Used letters are struck out in the grid; correctly guessed ones
//! are highlighted.

use crate::game::{ALPHABET, DisplayState, GameResult};
use crate::game_state::{GameInterface, UserAction};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const GRID_COLUMNS: usize = 6;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const WORD_STYLE: Style = Style::new().add_modifier(Modifier::BOLD);
const WIN_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const LOSS_STYLE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);
const GUESSED_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const USED_STYLE: Style = Style::new()
    .fg(Color::DarkGray)
    .add_modifier(Modifier::CROSSED_OUT);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);

/// Context for rendering the UI - groups related parameters to avoid too
/// many function arguments.
struct RenderContext<'a> {
    state: Option<&'a DisplayState>,
    status: &'a str,
    error_message: &'a str,
}

/// Main TUI interface component.
///
/// Manages terminal setup, rendering, and key input.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    state: Option<DisplayState>,
    status: String,
    error_message: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete: raw mode, alternate screen, cursor hidden");

        Ok(Self {
            terminal,
            state: None,
            status: "Type a letter to start guessing".to_string(),
            error_message: String::new(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            state: self.state.as_ref(),
            status: &self.status,
            error_message: &self.error_message,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Title
                Constraint::Min(12),    // Word panel + alphabet grid
                Constraint::Length(3),  // Status line
                Constraint::Length(3),  // Instructions
            ])
            .split(f.area());

        let board = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(30), Constraint::Length(32)])
            .split(chunks[1]);

        Self::render_title(f, chunks[0]);
        Self::render_word_panel(f, board[0], ctx);
        Self::render_alphabet(f, board[1], ctx.state);
        Self::render_status(f, chunks[2], ctx.status);
        Self::render_instructions(f, chunks[3], ctx.state);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("HANGMAN")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_word_panel(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let mut lines = Vec::new();

        if let Some(state) = ctx.state {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(state.masked.clone(), WORD_STYLE)));
            lines.push(Line::from(""));
            lines.push(Line::from(format!("Attempts left: {}", state.attempts_left)));
            lines.push(Line::from(""));
            match state.result {
                GameResult::Win => {
                    lines.push(Line::from(Span::styled("YOU WIN!", WIN_STYLE)));
                }
                GameResult::Loss => {
                    lines.push(Line::from(Span::styled("YOU LOSE!", LOSS_STYLE)));
                    if let Some(answer) = &state.answer {
                        lines.push(Line::from(format!("The word was: {answer}")));
                    }
                }
                GameResult::InProgress => {}
            }
        }

        if !ctx.error_message.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                ctx.error_message.to_string(),
                ERROR_STYLE,
            )));
        }

        let paragraph =
            Paragraph::new(lines).block(Block::default().title("Word").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_alphabet(f: &mut Frame, area: Rect, state: Option<&DisplayState>) {
        let letters: Vec<char> = ALPHABET.chars().collect();
        let mut lines = Vec::new();

        for row in letters.chunks(GRID_COLUMNS) {
            let mut spans = vec![Span::raw(" ")];
            for &letter in row {
                let style = match state {
                    Some(s) if s.guessed.contains(&letter) => GUESSED_STYLE,
                    Some(s) if s.used.contains(&letter) => USED_STYLE,
                    _ => Style::default(),
                };
                let shown: String = letter.to_uppercase().collect();
                spans.push(Span::styled(shown, style));
                spans.push(Span::raw("  "));
            }
            lines.push(Line::from(spans));
            lines.push(Line::from(""));
        }

        let paragraph =
            Paragraph::new(lines).block(Block::default().title("Alphabet").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: Option<&DisplayState>) {
        let over = state.is_some_and(|s| s.result != GameResult::InProgress);
        let text = if over {
            "N: New game | ESC: Quit"
        } else {
            "Type a letter to guess | N: New game | ESC: Quit"
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        let event = event::read()?;
        debug_log!("handle_input() - Event received: {:?}", event);

        // Filter out non-key events (mouse, focus, etc.)
        let key = match event {
            Event::Key(key) => key,
            Event::Mouse(_)
            | Event::FocusGained
            | Event::FocusLost
            | Event::Paste(_)
            | Event::Resize(_, _) => {
                debug_log!("handle_input() - Ignoring non-key event");
                return Ok(None);
            }
        };

        // Only process Press events, ignore Release and Repeat to avoid
        // double input
        if key.kind != event::KeyEventKind::Press {
            return Ok(None);
        }

        if Self::has_modifier_keys(&key) {
            debug_log!(
                "handle_input() - Ignoring key with modifier: {:?}",
                key.modifiers
            );
            return Ok(None);
        }

        Ok(Self::map_key(key))
    }

    fn has_modifier_keys(key: &KeyEvent) -> bool {
        key.modifiers.contains(event::KeyModifiers::ALT)
            || key.modifiers.contains(event::KeyModifiers::CONTROL)
    }

    /// `n` starts a new game and ESC quits; these are outside the Cyrillic
    /// alphabet, so any alphabet letter is unambiguously a guess.
    fn map_key(key: KeyEvent) -> Option<UserAction> {
        match key.code {
            KeyCode::Esc => Some(UserAction::Exit),
            KeyCode::Char('n' | 'N') => Some(UserAction::NewGame),
            KeyCode::Char(c) => {
                let letter = c.to_lowercase().next().unwrap_or(c);
                if ALPHABET.contains(letter) {
                    info_log!("map_key() - Guessing letter '{}'", letter);
                    Some(UserAction::Letter(letter))
                } else {
                    debug_log!("map_key() - Ignoring character '{}'", c);
                    None
                }
            }
            _ => None,
        }
    }
}

impl GameInterface for TuiInterface {
    fn render(&mut self, state: &DisplayState) {
        self.status = match state.result {
            GameResult::InProgress => {
                format!("In progress - {} attempts left", state.attempts_left)
            }
            GameResult::Win => "Game over - you win".to_string(),
            GameResult::Loss => "Game over - you lose".to_string(),
        };
        self.error_message.clear();
        self.state = Some(state.clone());
        self.draw_or_log();
    }

    fn read_action(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_action() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }

            match self.handle_input() {
                Ok(Some(action)) => {
                    info_log!("read_action() - Action received: {:?}", action);
                    return Some(action);
                }
                Ok(None) => {}
                Err(_e) => {
                    info_log!("read_action() - Error handling input, returning Exit");
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_error(&mut self, message: &str) {
        self.error_message = message.to_string();
        self.status = "Error".to_string();
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.status = "Exiting...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
