use crate::combat::Combatant;
use crate::core::constants::{DEFAULT_HERO_NAME, MAX_HERO_NAME_LENGTH};
use crate::enemies::generate_enemy;
use crate::upgrades::{OfferedUpgrade, UpgradeTracker};
use rand::Rng;

/// Everything that belongs to a single run. Replaced wholesale on restart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunState {
    /// Enemy difficulty index, starting at 1.
    pub tier: u32,
    pub hero: Combatant,
    pub enemy: Combatant,
    pub game_over: bool,
    pub upgrades: UpgradeTracker,
}

impl RunState {
    /// Fresh hero, tier 1 enemy, no upgrades.
    pub fn new(hero_name: &str, rng: &mut impl Rng) -> Self {
        Self {
            tier: 1,
            hero: Combatant::new_hero(hero_name),
            enemy: generate_enemy(1, rng),
            game_over: false,
            upgrades: UpgradeTracker::new(),
        }
    }
}

/// Where the run currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Battling,
    /// The hero won and may pick one of these. May be empty.
    ChoosingUpgrade(Vec<OfferedUpgrade>),
    GameOver {
        won: bool,
    },
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Battling => "battling",
            Phase::ChoosingUpgrade(_) => "choosing an upgrade",
            Phase::GameOver { .. } => "game over",
        }
    }
}

/// Cleans up a typed name: trimmed, capped in length, with a default when blank.
pub fn normalize_player_name(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return DEFAULT_HERO_NAME.to_string();
    }
    trimmed
        .chars()
        .take(MAX_HERO_NAME_LENGTH)
        .collect::<String>()
        .trim_end()
        .to_string()
}
