use super::data::{archetype_count, archetype_for_tier, Archetype, FINAL_BOSS};
use crate::combat::Combatant;
use crate::core::constants::{
    BOSS_ATTACK_MAX_PER_TIER, BOSS_ATTACK_MIN_PER_TIER, BOSS_HEALTH_PER_TIER,
    ENEMY_ATTACK_MAX_PER_TIER, ENEMY_ATTACK_MIN_PER_TIER, ENEMY_ATTACK_VARIANCE,
    ENEMY_BASE_ATTACK_MAX, ENEMY_BASE_ATTACK_MIN, ENEMY_BASE_HEALTH, ENEMY_DEFENSE_DIVISOR,
    ENEMY_HEALTH_PER_TIER, ENEMY_HEALTH_VARIANCE,
};
use rand::Rng;

/// Unmodified stats for a tier, before the archetype is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BaseStats {
    health: u32,
    attack_min: u32,
    attack_max: u32,
    defense: u32,
}

fn regular_base_stats(tier: u32) -> BaseStats {
    BaseStats {
        health: ENEMY_BASE_HEALTH + tier * ENEMY_HEALTH_PER_TIER,
        attack_min: ENEMY_BASE_ATTACK_MIN + tier * ENEMY_ATTACK_MIN_PER_TIER,
        attack_max: ENEMY_BASE_ATTACK_MAX + tier * ENEMY_ATTACK_MAX_PER_TIER,
        defense: tier / ENEMY_DEFENSE_DIVISOR,
    }
}

fn boss_base_stats(tier: u32) -> BaseStats {
    BaseStats {
        health: ENEMY_BASE_HEALTH + tier * BOSS_HEALTH_PER_TIER,
        attack_min: ENEMY_BASE_ATTACK_MIN + tier * BOSS_ATTACK_MIN_PER_TIER,
        attack_max: ENEMY_BASE_ATTACK_MAX + tier * BOSS_ATTACK_MAX_PER_TIER,
        defense: tier,
    }
}

fn scale(value: u32, modifier: f64) -> u32 {
    (value as f64 * modifier) as u32
}

fn vary(value: u32, delta: i64) -> u32 {
    (value as i64 + delta).max(1) as u32
}

fn apply_archetype(base: BaseStats, archetype: &Archetype) -> BaseStats {
    BaseStats {
        health: scale(base.health, archetype.health_mod),
        attack_min: scale(base.attack_min, archetype.attack_mod),
        attack_max: scale(base.attack_max, archetype.attack_mod),
        defense: scale(base.defense, archetype.defense_mod),
    }
}

fn build_enemy(stats: BaseStats, archetype: &Archetype) -> Combatant {
    Combatant {
        name: archetype.name.to_string(),
        health: stats.health,
        max_health: stats.health,
        attack_min: stats.attack_min,
        attack_max: stats.attack_max,
        defense: stats.defense,
        is_hero: false,
        wins: 0,
        crit_chance: archetype.crit_chance,
        block_chance: archetype.block_chance,
        life_steal: archetype.life_steal,
        crit_damage: archetype.crit_damage,
        regeneration: archetype.regeneration,
        life_on_kill: 0,
        description: archetype.description.to_string(),
    }
}

/// First tier that is fought against the final boss.
pub fn final_boss_tier() -> u32 {
    archetype_count() as u32 + 1
}

pub fn is_final_boss_tier(tier: u32) -> bool {
    tier >= final_boss_tier()
}

/// Generates the opponent for a 1-based tier.
///
/// Regular tiers roll health variance and then attack variance. The final
/// boss rolls nothing, so it is the same fighter every time.
pub fn generate_enemy(tier: u32, rng: &mut impl Rng) -> Combatant {
    let tier = tier.max(1);

    if is_final_boss_tier(tier) {
        let stats = apply_archetype(boss_base_stats(tier), &FINAL_BOSS);
        return build_enemy(stats, &FINAL_BOSS);
    }

    let archetype = archetype_for_tier(tier);
    let mut stats = apply_archetype(regular_base_stats(tier), archetype);

    let health_variance = rng.gen_range(-ENEMY_HEALTH_VARIANCE..=ENEMY_HEALTH_VARIANCE);
    let attack_variance = rng.gen_range(-ENEMY_ATTACK_VARIANCE..=ENEMY_ATTACK_VARIANCE);

    stats.health = vary(stats.health, health_variance);
    stats.attack_min = vary(stats.attack_min, attack_variance);
    stats.attack_max = vary(stats.attack_max, attack_variance);

    build_enemy(stats, archetype)
}
