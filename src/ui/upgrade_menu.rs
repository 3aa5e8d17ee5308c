use crate::combat::Combatant;
use crate::upgrades::{OfferedUpgrade, Rarity};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn rarity_color(rarity: Rarity) -> Color {
    match rarity {
        Rarity::Common => Color::White,
        Rarity::Uncommon => Color::Green,
        Rarity::Rare => Color::Magenta,
    }
}

/// Cursor state for the between-battle upgrade menu.
#[derive(Debug, Default)]
pub struct UpgradeMenu {
    pub selected: usize,
}

impl UpgradeMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn draw(&self, f: &mut Frame, area: Rect, hero: &Combatant, offers: &[OfferedUpgrade]) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(4), // Hero summary
                Constraint::Min(5),    // Offers
                Constraint::Length(1), // Controls
            ])
            .split(area);

        let title = Paragraph::new(format!("{} wins! Choose an upgrade", hero.name))
            .style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::BOTTOM));
        f.render_widget(title, chunks[0]);

        let summary = vec![
            Line::from(format!(
                "HP {}/{}   ATK {}-{}   DEF {}",
                hero.health, hero.max_health, hero.attack_min, hero.attack_max, hero.defense
            )),
            Line::from(format!(
                "Crit {}%   Block {}%   Lifesteal {}%   Regen {}%",
                hero.crit_chance, hero.block_chance, hero.life_steal, hero.regeneration
            )),
            Line::from(format!("Victories: {}", hero.wins)),
        ];
        f.render_widget(
            Paragraph::new(summary).style(Style::default().fg(Color::Gray)),
            chunks[1],
        );

        let mut lines = Vec::new();
        for (i, offer) in offers.iter().enumerate() {
            let is_selected = i == self.selected;
            let marker = if is_selected { "> " } else { "  " };
            let name_style = if is_selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(rarity_color(offer.rarity()))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(rarity_color(offer.rarity()))
                    .add_modifier(Modifier::BOLD)
            };

            lines.push(Line::from(vec![
                Span::raw(marker),
                Span::styled(offer.name(), name_style),
                Span::styled(
                    format!("  [{}]", offer.rarity().name()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
            lines.push(Line::from(format!("    {}", offer.description)));
            lines.push(Line::from(""));
        }

        let list = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Upgrades"));
        f.render_widget(list, chunks[2]);

        let controls = Paragraph::new("[↑/↓] Select    [Enter] Confirm    [Q] Quit")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(controls, chunks[3]);
    }
}
