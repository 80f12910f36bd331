//! TUI application state and logic

use crate::game::{GameStatus, InputEvent, MAX_ATTEMPTS, Session, Transition};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept on screen
const MESSAGE_LIMIT: usize = 5;

/// Application state
pub struct App {
    pub session: Session,
    pub messages: Vec<Message>,
    pub should_quit: bool,
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
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self {
            session,
            messages: vec![Message {
                text: format!("Guess the five-letter word in {MAX_ATTEMPTS} tries."),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        }
    }

    /// Map a key press to a session event or an app command
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('q') if self.session.status().is_over() => self.should_quit = true,
            KeyCode::Char(c) => self.dispatch(InputEvent::Letter(c)),
            KeyCode::Backspace => self.dispatch(InputEvent::Backspace),
            KeyCode::Enter => self.dispatch(InputEvent::Submit),
            _ => {}
        }
    }

    fn dispatch(&mut self, event: InputEvent) {
        match self.session.handle(event) {
            Transition::Won { attempts_used, .. } => {
                self.add_message(
                    &format!(
                        "Congratulations! You guessed the word in {attempts_used}/{MAX_ATTEMPTS} guesses!"
                    ),
                    MessageStyle::Success,
                );
                self.add_message("Press 'q' or Esc to quit.", MessageStyle::Info);
            }
            Transition::Lost { secret, .. } => {
                self.add_message(
                    &format!("Nice try! The word was {secret}"),
                    MessageStyle::Error,
                );
                self.add_message("Press 'q' or Esc to quit.", MessageStyle::Info);
            }
            Transition::Revealed(_) => {
                let remaining = self.session.attempts_remaining();
                self.add_message(
                    &format!(
                        "{remaining} {} left",
                        if remaining == 1 { "guess" } else { "guesses" }
                    ),
                    MessageStyle::Info,
                );
            }
            Transition::Ignored | Transition::Edited => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MESSAGE_LIMIT {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.session.status() != GameStatus::InProgress
    }
}

/// Run the TUI application
///
/// Returns the app in its final state so the caller can report the result
/// after the terminal is restored.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<App> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<App> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app)
}
