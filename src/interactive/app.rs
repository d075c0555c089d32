//! TUI application state and logic

use crate::core::{EQUATION_LENGTH, VALID_CHARACTERS};
use crate::game::{GameState, Outcome, Statistics};
use crate::generator::generate_equation_with;
use crate::output::share_text;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, info};

/// Application state
pub struct App {
    pub game: GameState,
    pub stats: Statistics,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    pub input_mode: InputMode,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    /// Start a session with a freshly generated target
    ///
    /// # Errors
    ///
    /// Returns an error if no target equation can be generated.
    pub fn new(mut rng: StdRng) -> Result<Self> {
        let game = GameState::new(generate_equation_with(&mut rng)?);
        Ok(Self {
            game,
            stats: Statistics::default(),
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Guess the hidden 8-character equation in 6 tries.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type a guess like 12+34=46 and press Enter.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
            input_mode: InputMode::Guessing,
            rng,
        })
    }

    /// Route one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => self.push_char(c),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit(),
                _ => {}
            },
        }
    }

    fn push_char(&mut self, c: char) {
        if self.input_buffer.len() < EQUATION_LENGTH && VALID_CHARACTERS.contains(c) {
            self.input_buffer.push(c);
        }
    }

    /// Submit the input buffer as a guess
    pub fn submit(&mut self) {
        let guess = std::mem::take(&mut self.input_buffer);
        let outcome = self.game.submit_guess(&guess);
        debug!(%guess, outcome = outcome.label(), "guess submitted");

        match &outcome {
            Outcome::Invalid(_) => {
                self.add_message(&outcome.to_string(), MessageStyle::Error);
                // Keep the text so the player can fix it
                self.input_buffer = guess;
            }
            Outcome::AlreadyOver => self.add_message(&outcome.to_string(), MessageStyle::Error),
            Outcome::Continue { .. } => self.add_message(&outcome.to_string(), MessageStyle::Info),
            Outcome::Won { .. } | Outcome::Lost { .. } => {
                let style = if self.game.is_won() {
                    MessageStyle::Success
                } else {
                    MessageStyle::Error
                };
                self.add_message(&outcome.to_string(), style);
                self.finish_game();
            }
        }
    }

    fn finish_game(&mut self) {
        self.stats.record(&self.game);
        self.input_mode = InputMode::GameOver;
        info!(
            won = self.game.is_won(),
            attempts = self.game.attempts(),
            "game finished"
        );

        let share = share_text(&self.game);
        if let Some(headline) = share.lines().next() {
            self.add_message(headline, MessageStyle::Info);
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        match generate_equation_with(&mut self.rng) {
            Ok(target) => {
                self.game = GameState::new(target);
                self.input_buffer.clear();
                self.messages.clear();
                self.input_mode = InputMode::Guessing;
                self.add_message("New game started! Good luck.", MessageStyle::Info);
            }
            Err(err) => {
                self.add_message(&format!("Could not start a game: {err}"), MessageStyle::Error);
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// Returns the session statistics once the player quits.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<Statistics> {
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

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<Statistics> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.stats)
}
