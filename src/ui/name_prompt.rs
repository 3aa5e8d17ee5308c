use super::Tui;
use crate::core::constants::{DEFAULT_HERO_NAME, MAX_HERO_NAME_LENGTH};
use crate::core::normalize_player_name;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::io;

/// Text entry for the hero's name.
#[derive(Debug, Default)]
pub struct NamePromptScreen {
    pub name_input: String,
}

impl NamePromptScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draw(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(1), // Spacer
                Constraint::Length(4), // Input label + field
                Constraint::Length(2), // Hint
                Constraint::Min(0),    // Filler
                Constraint::Length(3), // Controls
            ])
            .split(area);

        let title = Paragraph::new("GLADIATOR ARENA")
            .style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        f.render_widget(title, chunks[0]);

        f.render_widget(Paragraph::new("Enter your gladiator's name:"), chunks[2]);

        let input_area = Rect {
            x: chunks[2].x,
            y: chunks[2].y + 1,
            width: chunks[2].width,
            height: 3,
        };
        let input_widget = Paragraph::new(format!("{}_", self.name_input))
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::White));
        f.render_widget(input_widget, input_area);

        let hint = Paragraph::new(format!(
            "Up to {} characters. Leave blank to fight as \"{}\".",
            MAX_HERO_NAME_LENGTH, DEFAULT_HERO_NAME
        ))
        .style(Style::default().fg(Color::Gray));
        f.render_widget(hint, chunks[3]);

        let controls = Paragraph::new("[Enter] Enter the arena    [Esc] Use default name")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(controls, chunks[5]);
    }

    pub fn handle_char_input(&mut self, c: char) {
        if self.name_input.chars().count() < MAX_HERO_NAME_LENGTH && !c.is_control() {
            self.name_input.push(c);
        }
    }

    pub fn handle_backspace(&mut self) {
        self.name_input.pop();
    }

    pub fn get_name(&self) -> String {
        normalize_player_name(&self.name_input)
    }
}

/// Blocks until the player confirms a name. Esc falls back to the default.
pub fn prompt_player_name(terminal: &mut Tui) -> io::Result<String> {
    let mut screen = NamePromptScreen::new();

    loop {
        terminal.draw(|f| {
            let area = f.size();
            screen.draw(f, area);
        })?;

        if let Event::Key(key_event) = event::read()? {
            match key_event.code {
                KeyCode::Char(c) => screen.handle_char_input(c),
                KeyCode::Backspace => screen.handle_backspace(),
                KeyCode::Enter => return Ok(screen.get_name()),
                KeyCode::Esc => return Ok(DEFAULT_HERO_NAME.to_string()),
                _ => {}
            }
        }
    }
}
