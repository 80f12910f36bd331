//! TUI rendering with ratatui
//!
//! Board, keyboard and message panels for the game interface.

use super::app::{App, MessageStyle};
use crate::core::{QWERTY_ROWS, Verdict, WORD_LENGTH};
use crate::game::{GameStatus, MAX_ATTEMPTS};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const TILE_WIDTH: u16 = 5;
const TILE_HEIGHT: u16 = 3;
const KEY_WIDTH: u16 = 5;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                                 // Header
            Constraint::Length(TILE_HEIGHT * MAX_ATTEMPTS as u16 + 2), // Board
            Constraint::Length(TILE_HEIGHT * 3 + 2),               // Keyboard
            Constraint::Min(4),                                    // Messages
            Constraint::Length(1),                                 // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Colors for a tile or key in a given state
fn verdict_style(verdict: Option<Verdict>) -> Style {
    match verdict {
        Some(Verdict::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(Verdict::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(Verdict::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default().fg(Color::White),
    }
}

fn render_tile(f: &mut Frame, area: Rect, letter: Option<char>, style: Style, border: BorderType) {
    let text = letter.map(String::from).unwrap_or_default();
    let tile = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL).border_type(border));
    f.render_widget(tile, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Guesses ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::vertical([Constraint::Length(TILE_HEIGHT); MAX_ATTEMPTS]).split(inner);
    let session = &app.session;
    let attempts = session.attempts();

    for (row_index, row_area) in rows.iter().enumerate() {
        let tiles = Layout::horizontal([Constraint::Length(TILE_WIDTH); WORD_LENGTH])
            .flex(Flex::Center)
            .split(*row_area);

        if let Some(attempt) = attempts.get(row_index) {
            for (i, letter) in attempt.word.text().chars().enumerate() {
                let style = verdict_style(Some(attempt.feedback.verdict_at(i)));
                render_tile(f, tiles[i], Some(letter), style, BorderType::Plain);
            }
        } else if row_index == attempts.len() && session.status() == GameStatus::InProgress {
            // Row being typed
            let mut typed = session.current_guess().chars();
            for tile in tiles.iter() {
                let style = Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD);
                render_tile(f, *tile, typed.next(), style, BorderType::Double);
            }
        } else {
            for tile in tiles.iter() {
                let style = Style::default().fg(Color::DarkGray);
                render_tile(f, *tile, None, style, BorderType::Plain);
            }
        }
    }
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Keyboard ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let keyboard = app.session.keyboard();
    let rows = Layout::vertical([Constraint::Length(TILE_HEIGHT); 3]).split(inner);

    for (row, row_area) in QWERTY_ROWS.iter().zip(rows.iter()) {
        let keys = Layout::horizontal(vec![Constraint::Length(KEY_WIDTH); row.len()])
            .flex(Flex::Center)
            .split(*row_area);

        for (key, key_area) in row.bytes().zip(keys.iter()) {
            let style = verdict_style(keyboard.state(key));
            render_tile(f, *key_area, Some(key as char), style, BorderType::Rounded);
        }
    }
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let session = &app.session;
    let status_text = match session.status() {
        GameStatus::InProgress => format!(
            "Guess {}/{MAX_ATTEMPTS}",
            session.attempts().len() + 1
        ),
        GameStatus::Won => "Solved!".to_string(),
        GameStatus::Lost => "Out of guesses".to_string(),
    };
    let status = Paragraph::new(status_text).alignment(Alignment::Center);
    f.render_widget(status, chunks[0]);

    let help_text = if session.status().is_over() {
        "q/Esc: Quit"
    } else {
        "A-Z: Type | Backspace: Delete | Enter: Submit | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
