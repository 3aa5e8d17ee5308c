use crate::combat::Combatant;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

fn centered(size: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(size.width.saturating_sub(4));
    let height = height.min(size.height.saturating_sub(4));
    let x = size.width.saturating_sub(width) / 2;
    let y = size.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}

/// Draws the end-of-run dialog as an overlay
pub fn draw_game_over(frame: &mut Frame, won: bool, hero: &Combatant) {
    let dialog_area = centered(frame.size(), 50, 11);
    frame.render_widget(Clear, dialog_area);

    let (heading, color) = if won {
        (" LEGENDARY VICTORY ", Color::Green)
    } else {
        (" GAME OVER ", Color::Red)
    };

    let verdict = if won {
        format!("{} has defeated The Immortal!", hero.name)
    } else {
        format!("{} has fallen in the arena.", hero.name)
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(verdict, Style::default().fg(color))),
        Line::from(""),
        Line::from(format!("Final Score: {} victories", hero.wins)),
        Line::from(""),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "[R] Restart",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled(
                "[Q] Quit",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(Span::styled(
                    heading,
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ))
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, dialog_area);
}

/// Shown briefly before the terminal is restored.
pub fn draw_farewell(frame: &mut Frame, hero_name: &str) {
    let area = centered(frame.size(), 44, 7);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Farewell, {}.", hero_name),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("The crowd will remember your name."),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
