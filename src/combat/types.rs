use crate::core::constants::{
    HERO_ATTACK_MAX, HERO_ATTACK_MIN, HERO_BLOCK_CHANCE, HERO_CRIT_CHANCE, HERO_DEFENSE,
    HERO_HEALTH,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A fighter in the arena. Used for both the hero and generated enemies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    pub name: String,
    pub health: u32,
    pub max_health: u32,
    pub attack_min: u32,
    pub attack_max: u32,
    /// Flat damage reduction applied to every incoming hit.
    pub defense: u32,
    pub is_hero: bool,
    pub wins: u32,
    /// Percent chance to crit. 0 means "use the arena default".
    pub crit_chance: u32,
    /// Percent chance to block. 0 means "use the arena default".
    pub block_chance: u32,
    /// Percent of dealt damage healed back.
    pub life_steal: u32,
    /// Bonus crit multiplier in percent, on top of the base 2.0x.
    pub crit_damage: u32,
    /// Percent of max health healed each time this fighter is hit.
    pub regeneration: u32,
    /// Flat heal after landing a killing blow.
    pub life_on_kill: u32,
    #[serde(default)]
    pub description: String,
}

impl Combatant {
    /// Creates a hero with the fixed starting stats.
    pub fn new_hero(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            health: HERO_HEALTH,
            max_health: HERO_HEALTH,
            attack_min: HERO_ATTACK_MIN,
            attack_max: HERO_ATTACK_MAX,
            defense: HERO_DEFENSE,
            is_hero: true,
            wins: 0,
            crit_chance: HERO_CRIT_CHANCE,
            block_chance: HERO_BLOCK_CHANCE,
            life_steal: 0,
            crit_damage: 0,
            regeneration: 0,
            life_on_kill: 0,
            description: String::new(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    /// Heals up to `max_health`, returning the amount actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.health;
        self.health = self.health.saturating_add(amount).min(self.max_health);
        self.health.saturating_sub(before)
    }

    pub fn reset_health(&mut self) {
        self.health = self.max_health;
    }

    /// Health as a fraction of max health for gauges. A zero max is treated as 1.
    pub fn health_ratio(&self) -> f64 {
        let max = self.max_health.max(1) as f64;
        (self.health as f64 / max).clamp(0.0, 1.0)
    }
}

/// Outcome of a single attack. Attacker and defender are snapshots taken after
/// the attack was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleResult {
    pub attacker: Combatant,
    pub defender: Combatant,
    pub damage: u32,
    pub is_critical: bool,
    pub is_blocked: bool,
    pub is_game_over: bool,
    pub winner_name: Option<String>,
    /// Health the defender actually regained after being hit, after the max-health cap.
    pub regeneration: u32,
    /// Health the attacker actually regained through lifesteal, after the cap.
    pub life_stolen: u32,
}

/// Styling hint for a battle log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogKind {
    Title,
    Hero,
    Enemy,
    Info,
    Critical,
    Block,
    Victory,
    Defeat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub message: String,
    pub kind: LogKind,
}

impl LogEntry {
    pub fn new(message: impl Into<String>, kind: LogKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    pub fn blank() -> Self {
        Self::new("", LogKind::Info)
    }
}

/// One step of battle playback: both fighters as they stood after the step,
/// the log line it produced, and how long the renderer should linger on it.
#[derive(Debug, Clone)]
pub struct BattleFrame {
    pub hero: Combatant,
    pub enemy: Combatant,
    pub log: LogEntry,
    pub delay: Duration,
}

/// A fully simulated battle, ready for playback.
#[derive(Debug, Clone)]
pub struct BattleOutcome {
    pub frames: Vec<BattleFrame>,
    pub hero_won: bool,
    pub turns: u32,
    pub crits: u32,
    pub blocks: u32,
    /// True when the turn cap ended the fight rather than a killing blow.
    pub exhausted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fighter(health: u32, max_health: u32) -> Combatant {
        Combatant {
            name: "Test".to_string(),
            health,
            max_health,
            attack_min: 1,
            attack_max: 2,
            defense: 0,
            is_hero: false,
            wins: 0,
            crit_chance: 0,
            block_chance: 0,
            life_steal: 0,
            crit_damage: 0,
            regeneration: 0,
            life_on_kill: 0,
            description: String::new(),
        }
    }

    #[test]
    fn test_take_damage_saturates_at_zero() {
        let mut c = fighter(10, 10);
        c.take_damage(25);
        assert_eq!(c.health, 0);
        assert!(!c.is_alive());
    }

    #[test]
    fn test_heal_caps_at_max_and_reports_amount() {
        let mut c = fighter(90, 100);
        assert_eq!(c.heal(25), 10);
        assert_eq!(c.health, 100);
        assert_eq!(c.heal(5), 0);
    }

    #[test]
    fn test_health_ratio_guards_zero_max() {
        let c = fighter(0, 0);
        assert_eq!(c.health_ratio(), 0.0);

        let half = fighter(50, 100);
        assert!((half.health_ratio() - 0.5).abs() < f64::EPSILON);
    }
}
