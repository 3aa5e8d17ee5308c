//! Simulation report generation.

use crate::core::GameRecord;
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregated results from many simulated games.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SimReport {
    pub runs: u32,
    pub wins: u32,
    pub win_rate: f64,
    pub avg_tier_reached: f64,
    pub avg_turns_per_battle: f64,
    /// Losses keyed by the enemy that dealt the final blow
    pub deaths_by_enemy: BTreeMap<String, u32>,
    pub upgrade_picks: BTreeMap<String, u32>,
}

impl SimReport {
    pub fn from_games(games: &[GameRecord]) -> Self {
        let runs = games.len() as u32;
        let wins = games.iter().filter(|g| g.won).count() as u32;
        let total_battles: u32 = games.iter().map(|g| g.battles).sum();
        let total_turns: u32 = games.iter().map(|g| g.turns).sum();

        let mut deaths_by_enemy = BTreeMap::new();
        let mut upgrade_picks = BTreeMap::new();
        for game in games {
            if let Some(enemy) = &game.killed_by {
                *deaths_by_enemy.entry(enemy.clone()).or_insert(0) += 1;
            }
            for (name, count) in &game.upgrades {
                *upgrade_picks.entry(name.to_string()).or_insert(0) += count;
            }
        }

        Self {
            runs,
            wins,
            win_rate: wins as f64 / runs.max(1) as f64,
            avg_tier_reached: games.iter().map(|g| g.tier_reached as f64).sum::<f64>()
                / runs.max(1) as f64,
            avg_turns_per_battle: total_turns as f64 / total_battles.max(1) as f64,
            deaths_by_enemy,
            upgrade_picks,
        }
    }

    pub fn summary_line(&self) -> String {
        format!(
            "runs={} wins={} win_rate={:.1}% avg_tier={:.2} avg_turns={:.1}",
            self.runs,
            self.wins,
            self.win_rate * 100.0,
            self.avg_tier_reached,
            self.avg_turns_per_battle
        )
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    ARENA SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {}, Victories: {} ({:.1}%)\n",
            self.runs,
            self.wins,
            self.win_rate * 100.0
        ));
        report.push_str(&format!(
            "  Avg Tier Reached:      {:.2}\n",
            self.avg_tier_reached
        ));
        report.push_str(&format!(
            "  Avg Turns per Battle:  {:.1}\n\n",
            self.avg_turns_per_battle
        ));

        report.push_str("── DEATHS BY OPPONENT ───────────────────────────────────────────\n");
        let mut deaths: Vec<_> = self.deaths_by_enemy.iter().collect();
        deaths.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));
        for (enemy, count) in deaths {
            let pct = *count as f64 / self.runs.max(1) as f64 * 100.0;
            let bar = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!("  {:<20} {:>5} {:>5.1}% {}\n", enemy, count, pct, bar));
        }
        report.push('\n');

        report.push_str("── UPGRADE PICKS ────────────────────────────────────────────────\n");
        let mut picks: Vec<_> = self.upgrade_picks.iter().collect();
        picks.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));
        for (name, count) in picks {
            report.push_str(&format!("  {:<28} {:>6}\n", name, count));
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");
        report
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn print_summary(&self) {
        print!("{}", self.to_text());
    }
}
