//! TUI application state and logic

use crate::core::SubmissionOutcome;
use crate::dictionary::WordSetDictionary;
use crate::game::Game;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// The game session the TUI drives
pub type Session = Game<WordSetDictionary, StdRng>;

/// Longest input the text field accepts
const MAX_INPUT_LEN: usize = 32;

/// Application state
pub struct App {
    pub game: Session,
    pub input_buffer: String,
    pub input_mode: InputMode,
    pub alert: Option<Alert>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Typing a word
    Typing,
    /// A rejection alert is open and must be acknowledged
    Alert,
}

/// Modal rejection notice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl From<SubmissionOutcome> for Alert {
    fn from(outcome: SubmissionOutcome) -> Self {
        Self {
            title: outcome.title().to_string(),
            message: outcome.message(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_played: usize,
    pub best_score: Option<i32>,
    pub total_words: usize,
}

impl Statistics {
    fn record_round(&mut self, score: i32, words: usize) {
        self.games_played += 1;
        self.total_words += words;
        self.best_score = Some(self.best_score.map_or(score, |best| best.max(score)));
    }
}

impl App {
    #[must_use]
    pub fn new(game: Session) -> Self {
        Self {
            game,
            input_buffer: String::new(),
            input_mode: InputMode::Typing,
            alert: None,
            messages: vec![
                Message {
                    text: "Make words from the letters of the root word.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "3+ letters, no repeats, no made-up words. +10 each.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Submit whatever is in the text field, then clear it
    pub fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        let Some(outcome) = self.game.submit(&input) else {
            return;
        };

        if outcome.is_accepted() {
            let word = self
                .game
                .used_words()
                .first()
                .map(|w| w.text().to_uppercase())
                .unwrap_or_default();
            self.add_message(&format!("{word} {:+}", outcome.score_delta()), MessageStyle::Success);
        } else {
            self.add_message(
                &format!("{} {:+}", outcome.title(), outcome.score_delta()),
                MessageStyle::Error,
            );
            self.alert = Some(Alert::from(outcome));
            self.input_mode = InputMode::Alert;
        }
    }

    /// Acknowledge the open alert
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
        self.input_mode = InputMode::Typing;
    }

    pub fn new_game(&mut self) {
        self.stats
            .record_round(self.game.score(), self.game.used_words().len());
        self.game.new_game();
        self.input_buffer.clear();
        self.dismiss_alert();
        self.messages.clear();
        self.add_message(
            &format!(
                "New game! Root word: {}",
                self.game.root_word().text().to_uppercase()
            ),
            MessageStyle::Info,
        );
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 8 messages
        if self.messages.len() > 8 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Alert => match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => self.dismiss_alert(),
                _ => {
                    // Alert stays open until acknowledged
                }
            },
            InputMode::Typing => match key.code {
                KeyCode::Esc => {
                    self.should_quit = true;
                }
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.new_game();
                }
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    if self.input_buffer.chars().count() < MAX_INPUT_LEN {
                        self.input_buffer.push(c);
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => {
                    self.submit_input();
                }
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    tracing::info!(
        score = app.game.score(),
        words = app.game.used_words().len(),
        games = app.stats.games_played + 1,
        "session ended"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{LoadError, RootWordPool, WordListProvider};
    use rand::SeedableRng;

    struct OnlySilkworm;

    impl WordListProvider for OnlySilkworm {
        fn load(&self) -> Result<RootWordPool, LoadError> {
            Ok(RootWordPool::new(["silkworm"]))
        }
    }

    fn app() -> App {
        let game = Game::start(
            &OnlySilkworm,
            WordSetDictionary::new("en", ["silk", "worm", "milk"]),
            StdRng::seed_from_u64(0),
        )
        .unwrap();
        App::new(game)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn typing_and_enter_submits() {
        let mut app = app();
        type_word(&mut app, "silk");

        assert_eq!(app.game.score(), 10);
        assert_eq!(app.game.used_words(), ["silk"]);
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.input_mode, InputMode::Typing);
    }

    #[test]
    fn rejection_opens_alert() {
        let mut app = app();
        type_word(&mut app, "silk");
        type_word(&mut app, "silk");

        assert_eq!(app.input_mode, InputMode::Alert);
        let alert = app.alert.clone().unwrap();
        assert_eq!(alert.title, "Word used already");
        assert_eq!(alert.message, "Be more original. You lose 2 score points.");
        assert_eq!(app.game.score(), 8);
    }

    #[test]
    fn alert_blocks_typing_until_dismissed() {
        let mut app = app();
        type_word(&mut app, "xyz");
        assert_eq!(app.input_mode, InputMode::Alert);

        press(&mut app, KeyCode::Char('w'));
        assert!(app.input_buffer.is_empty());

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Typing);
        assert!(app.alert.is_none());

        type_word(&mut app, "worm");
        assert_eq!(app.game.score(), 7);
    }

    #[test]
    fn blank_submission_does_nothing() {
        let mut app = app();
        type_word(&mut app, "   ");
        assert_eq!(app.game.score(), 0);
        assert_eq!(app.input_mode, InputMode::Typing);
    }

    #[test]
    fn backspace_edits_input() {
        let mut app = app();
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "s");
    }

    #[test]
    fn ctrl_n_starts_new_game() {
        let mut app = app();
        type_word(&mut app, "silk");
        type_word(&mut app, "worm");

        app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL));

        assert_eq!(app.game.score(), 0);
        assert!(app.game.used_words().is_empty());
        assert_eq!(app.stats.games_played, 1);
        assert_eq!(app.stats.best_score, Some(20));
        assert_eq!(app.stats.total_words, 2);
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let mut escaped = app();
        press(&mut escaped, KeyCode::Esc);
        assert!(escaped.should_quit);

        let mut interrupted = app();
        type_word(&mut interrupted, "xyz");
        interrupted.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(interrupted.should_quit);
    }

    #[test]
    fn input_length_is_capped() {
        let mut app = app();
        for _ in 0..100 {
            press(&mut app, KeyCode::Char('a'));
        }
        assert_eq!(app.input_buffer.len(), MAX_INPUT_LEN);
    }

    #[test]
    fn messages_are_bounded() {
        let mut app = app();
        for i in 0..20 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 8);
        assert_eq!(app.messages.last().unwrap().text, "message 19");
    }
}
