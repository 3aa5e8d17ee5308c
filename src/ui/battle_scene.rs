use crate::combat::{Combatant, LogEntry, LogKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};
use std::collections::VecDeque;

/// Draws both fighters and the scrolling battle log.
pub fn draw_battle_scene(
    frame: &mut Frame,
    area: Rect,
    hero: &Combatant,
    enemy: &Combatant,
    log: &VecDeque<LogEntry>,
    tier: u32,
) {
    let arena_block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Gladiator Arena - Opponent {} ", tier))
        .title_alignment(Alignment::Center);

    let inner = arena_block.inner(area);
    frame.render_widget(arena_block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Fighters
            Constraint::Min(5),    // Log
        ])
        .split(inner);

    let fighters = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);

    draw_fighter(frame, fighters[0], hero, Color::Cyan);
    draw_fighter(frame, fighters[1], enemy, Color::Red);
    draw_log(frame, chunks[1], log);
}

fn health_color(ratio: f64) -> Color {
    if ratio > 0.66 {
        Color::Green
    } else if ratio > 0.33 {
        Color::Yellow
    } else {
        Color::Red
    }
}

fn draw_fighter(frame: &mut Frame, area: Rect, fighter: &Combatant, accent: Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .title(Span::styled(
            format!(" {} ", fighter.name),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(inner);

    let ratio = fighter.health_ratio();
    let gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(health_color(ratio))
                .add_modifier(Modifier::BOLD),
        )
        .label(format!("HP {}/{}", fighter.health, fighter.max_health))
        .ratio(ratio);
    frame.render_widget(gauge, rows[0]);

    let mut lines = vec![
        Line::from(format!(
            "ATK {}-{}  DEF {}",
            fighter.attack_min, fighter.attack_max, fighter.defense
        )),
        Line::from(format!(
            "Crit {}%  Block {}%",
            fighter.crit_chance, fighter.block_chance
        )),
    ];

    let mut extras = Vec::new();
    if fighter.life_steal > 0 {
        extras.push(format!("Lifesteal {}%", fighter.life_steal));
    }
    if fighter.crit_damage > 0 {
        extras.push(format!("Crit dmg +{}%", fighter.crit_damage));
    }
    if fighter.regeneration > 0 {
        extras.push(format!("Regen {}%", fighter.regeneration));
    }
    if fighter.life_on_kill > 0 {
        extras.push(format!("On kill +{}", fighter.life_on_kill));
    }
    if !extras.is_empty() {
        lines.push(Line::from(Span::styled(
            extras.join("  "),
            Style::default().fg(Color::Magenta),
        )));
    }
    if fighter.is_hero {
        lines.push(Line::from(Span::styled(
            format!("Victories: {}", fighter.wins),
            Style::default().fg(Color::Yellow),
        )));
    }

    frame.render_widget(Paragraph::new(lines), rows[1]);
}

pub fn log_style(kind: LogKind) -> Style {
    match kind {
        LogKind::Title => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LogKind::Hero => Style::default().fg(Color::Cyan),
        LogKind::Enemy => Style::default().fg(Color::Red),
        LogKind::Info => Style::default().fg(Color::Gray),
        LogKind::Critical => Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
        LogKind::Block => Style::default().fg(Color::Blue),
        LogKind::Victory => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LogKind::Defeat => Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD),
    }
}

fn draw_log(frame: &mut Frame, area: Rect, log: &VecDeque<LogEntry>) {
    let lines: Vec<Line> = log
        .iter()
        .map(|entry| Line::from(Span::styled(entry.message.as_str(), log_style(entry.kind))))
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Battle Log"));
    frame.render_widget(paragraph, area);
}
