//! Arena balance numbers. Change once, test everywhere.

// =============================================================================
// COMBAT
// =============================================================================

/// Crit chance used when a fighter's own crit chance is zero.
pub const DEFAULT_CRIT_CHANCE: u32 = 10;

/// Block chance used when a fighter's own block chance is zero.
pub const DEFAULT_BLOCK_CHANCE: u32 = 10;

/// Crit multiplier before any crit-damage bonus (2.0 = double damage).
pub const BASE_CRIT_MULTIPLIER: f64 = 2.0;

/// Every landed hit deals at least this much.
pub const MIN_DAMAGE: u32 = 1;

/// Upper bound for crit and block chance, in percent.
pub const MAX_CHANCE_PERCENT: u32 = 100;

/// Turns after which a fight ends with the hero collapsing from exhaustion.
pub const MAX_BATTLE_TURNS: u32 = 500;

// =============================================================================
// HERO
// =============================================================================

pub const HERO_HEALTH: u32 = 130;
pub const HERO_ATTACK_MIN: u32 = 10;
pub const HERO_ATTACK_MAX: u32 = 15;
pub const HERO_DEFENSE: u32 = 1;
pub const HERO_CRIT_CHANCE: u32 = 10;
pub const HERO_BLOCK_CHANCE: u32 = 10;

pub const DEFAULT_HERO_NAME: &str = "Hero";
pub const MAX_HERO_NAME_LENGTH: usize = 20;

// =============================================================================
// ENEMY SCALING
// =============================================================================

pub const ENEMY_BASE_HEALTH: u32 = 80;
pub const ENEMY_HEALTH_PER_TIER: u32 = 8;
pub const ENEMY_BASE_ATTACK_MIN: u32 = 5;
pub const ENEMY_ATTACK_MIN_PER_TIER: u32 = 1;
pub const ENEMY_BASE_ATTACK_MAX: u32 = 10;
pub const ENEMY_ATTACK_MAX_PER_TIER: u32 = 2;
/// Base defense = tier / ENEMY_DEFENSE_DIVISOR.
pub const ENEMY_DEFENSE_DIVISOR: u32 = 2;

/// Health variance (+/-) rolled for every regular enemy.
pub const ENEMY_HEALTH_VARIANCE: i64 = 5;
/// Attack variance (+/-) applied to both ends of the attack range.
pub const ENEMY_ATTACK_VARIANCE: i64 = 1;

// Final boss uses a steeper base curve: defense = tier.
pub const BOSS_HEALTH_PER_TIER: u32 = 10;
pub const BOSS_ATTACK_MIN_PER_TIER: u32 = 2;
pub const BOSS_ATTACK_MAX_PER_TIER: u32 = 3;

// =============================================================================
// UPGRADES
// =============================================================================

/// Upgrades offered after each victory.
pub const UPGRADE_OFFER_SIZE: usize = 3;

/// Selection weight = RARITY_WEIGHT_BASE - rarity * RARITY_WEIGHT_STEP.
pub const RARITY_WEIGHT_BASE: u32 = 8;
pub const RARITY_WEIGHT_STEP: u32 = 2;

/// Upper bound of the random amount granted by a lucky upgrade.
pub const LUCKY_MAX_AMOUNT: u32 = 10;

// =============================================================================
// PRESENTATION TIMING
// =============================================================================

pub const TURN_DELAY_MS: u64 = 800;
pub const INTRO_DELAY_MS: u64 = 400;
pub const OUTRO_DELAY_MS: u64 = 600;

/// Log lines kept on screen during playback.
pub const MAX_LOG_ENTRIES: usize = 14;
