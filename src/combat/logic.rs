//! Damage resolution and full-battle simulation.
//!
//! `resolve_attack` is the single source of truth for how one hit plays out.
//! The roll and the arithmetic are split (`roll_attack` / `apply_attack`) so the
//! arithmetic can be exercised with fixed rolls.

use super::types::{BattleFrame, BattleOutcome, BattleResult, Combatant, LogEntry, LogKind};
use crate::core::constants::{
    BASE_CRIT_MULTIPLIER, DEFAULT_BLOCK_CHANCE, DEFAULT_CRIT_CHANCE, INTRO_DELAY_MS,
    MAX_BATTLE_TURNS, MIN_DAMAGE, OUTRO_DELAY_MS, TURN_DELAY_MS,
};
use rand::Rng;
use std::time::Duration;
use tracing::{debug, trace};

/// The random part of an attack, drawn in a fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackRoll {
    pub base_damage: u32,
    pub is_critical: bool,
    pub is_blocked: bool,
}

/// Recommended playback delays for battle frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattleTiming {
    pub intro: Duration,
    pub turn: Duration,
    pub outro: Duration,
}

impl Default for BattleTiming {
    fn default() -> Self {
        Self {
            intro: Duration::from_millis(INTRO_DELAY_MS),
            turn: Duration::from_millis(TURN_DELAY_MS),
            outro: Duration::from_millis(OUTRO_DELAY_MS),
        }
    }
}

impl BattleTiming {
    /// No delays at all, for headless runs.
    pub fn instant() -> Self {
        Self {
            intro: Duration::ZERO,
            turn: Duration::ZERO,
            outro: Duration::ZERO,
        }
    }

    pub fn scaled(factor: f64) -> Self {
        let base = Self::default();
        let factor = factor.max(0.0);
        Self {
            intro: base.intro.mul_f64(factor),
            turn: base.turn.mul_f64(factor),
            outro: base.outro.mul_f64(factor),
        }
    }
}

pub fn effective_crit_chance(attacker: &Combatant) -> u32 {
    if attacker.crit_chance > 0 {
        attacker.crit_chance
    } else {
        DEFAULT_CRIT_CHANCE
    }
}

pub fn effective_block_chance(defender: &Combatant) -> u32 {
    if defender.block_chance > 0 {
        defender.block_chance
    } else {
        DEFAULT_BLOCK_CHANCE
    }
}

/// 2.0x plus the attacker's crit-damage bonus in percent.
pub fn crit_multiplier(crit_damage: u32) -> f64 {
    if crit_damage == 0 {
        BASE_CRIT_MULTIPLIER
    } else {
        BASE_CRIT_MULTIPLIER + crit_damage as f64 / 100.0
    }
}

/// Draws base damage, then the crit roll, then the block roll.
pub fn roll_attack(attacker: &Combatant, defender: &Combatant, rng: &mut impl Rng) -> AttackRoll {
    let low = attacker.attack_min.min(attacker.attack_max);
    let high = attacker.attack_min.max(attacker.attack_max);
    let base_damage = rng.gen_range(low..=high);

    let is_critical = rng.gen_range(0..100) < effective_crit_chance(attacker);
    let is_blocked = rng.gen_range(0..100) < effective_block_chance(defender);

    AttackRoll {
        base_damage,
        is_critical,
        is_blocked,
    }
}

/// Crit multiply, then halve on block, then subtract defense with a floor of 1.
pub fn calculate_damage(roll: AttackRoll, crit_damage: u32, defense: u32) -> u32 {
    let mut damage = roll.base_damage;

    if roll.is_critical {
        damage = (damage as f64 * crit_multiplier(crit_damage)) as u32;
    }

    if roll.is_blocked {
        damage /= 2;
    }

    damage.saturating_sub(defense).max(MIN_DAMAGE)
}

/// Applies a rolled attack to both fighters.
///
/// Lifesteal heals the attacker, regeneration heals the defender even on a
/// killing blow, but only the health left right after the hit decides whether
/// the defender died. A dead defender is left at 0 health.
pub fn apply_attack(
    attacker: &mut Combatant,
    defender: &mut Combatant,
    roll: AttackRoll,
) -> BattleResult {
    let damage = calculate_damage(roll, attacker.crit_damage, defender.defense);

    defender.take_damage(damage);
    let is_game_over = !defender.is_alive();

    let mut life_stolen = 0;
    if attacker.life_steal > 0 {
        let amount = (damage as u64 * attacker.life_steal as u64 / 100) as u32;
        life_stolen = attacker.heal(amount);
    }

    let mut regeneration = 0;
    if defender.regeneration > 0 {
        let amount = (defender.max_health as u64 * defender.regeneration as u64 / 100) as u32;
        regeneration = defender.heal(amount);
    }

    let mut winner_name = None;
    if is_game_over {
        defender.health = 0;
        attacker.wins += 1;
        if attacker.life_on_kill > 0 {
            attacker.heal(attacker.life_on_kill);
        }
        winner_name = Some(attacker.name.clone());
    }

    BattleResult {
        attacker: attacker.clone(),
        defender: defender.clone(),
        damage,
        is_critical: roll.is_critical,
        is_blocked: roll.is_blocked,
        is_game_over,
        winner_name,
        regeneration,
        life_stolen,
    }
}

/// Resolves one attack, mutating both fighters in place.
pub fn resolve_attack(
    attacker: &mut Combatant,
    defender: &mut Combatant,
    rng: &mut impl Rng,
) -> BattleResult {
    let roll = roll_attack(attacker, defender, rng);
    apply_attack(attacker, defender, roll)
}

/// Builds the battle-log line for one attack.
pub fn format_battle_message(result: &BattleResult) -> LogEntry {
    let mut message = format!(
        "{} strikes {} for {} damage!",
        result.attacker.name, result.defender.name, result.damage
    );

    if result.is_critical {
        message.push_str(" CRITICAL HIT!");
    }
    if result.is_blocked {
        message.push_str(" BLOCKED!");
    }
    if result.life_stolen > 0 {
        message.push_str(&format!(
            " {} drains {} HP.",
            result.attacker.name, result.life_stolen
        ));
    }
    if result.regeneration > 0 && !result.is_game_over {
        message.push_str(&format!(
            " {} regenerates {} HP.",
            result.defender.name, result.regeneration
        ));
    }

    let kind = if result.is_critical {
        LogKind::Critical
    } else if result.is_blocked {
        LogKind::Block
    } else if result.attacker.is_hero {
        LogKind::Hero
    } else {
        LogKind::Enemy
    };

    LogEntry::new(message, kind)
}

fn push_frame(
    frames: &mut Vec<BattleFrame>,
    hero: &Combatant,
    enemy: &Combatant,
    log: LogEntry,
    delay: Duration,
) {
    frames.push(BattleFrame {
        hero: hero.clone(),
        enemy: enemy.clone(),
        log,
        delay,
    });
}

/// Fights `hero` against `enemy` until one of them falls, hero striking first.
///
/// The whole battle is computed up front; the returned frames are meant for
/// playback only.
pub fn simulate_battle(
    hero: &mut Combatant,
    enemy: &mut Combatant,
    timing: &BattleTiming,
    rng: &mut impl Rng,
) -> BattleOutcome {
    let mut frames = Vec::new();

    push_frame(
        &mut frames,
        hero,
        enemy,
        LogEntry::new("GLADIATOR BATTLE", LogKind::Title),
        timing.intro,
    );
    push_frame(
        &mut frames,
        hero,
        enemy,
        LogEntry::new(format!("{} vs {}", hero.name, enemy.name), LogKind::Info),
        timing.intro,
    );
    if !enemy.description.is_empty() {
        let description = LogEntry::new(enemy.description.clone(), LogKind::Info);
        push_frame(&mut frames, hero, enemy, description, timing.intro);
    }
    push_frame(&mut frames, hero, enemy, LogEntry::blank(), timing.intro);

    let mut turns = 0;
    let mut crits = 0;
    let mut blocks = 0;
    let mut exhausted = false;

    while hero.is_alive() && enemy.is_alive() {
        if turns >= MAX_BATTLE_TURNS {
            hero.health = 0;
            exhausted = true;
            let log = LogEntry::new(
                format!("{} collapses from exhaustion!", hero.name),
                LogKind::Defeat,
            );
            push_frame(&mut frames, hero, enemy, log, timing.turn);
            break;
        }

        let result = if turns % 2 == 0 {
            resolve_attack(hero, enemy, rng)
        } else {
            resolve_attack(enemy, hero, rng)
        };
        turns += 1;

        if result.is_critical {
            crits += 1;
        }
        if result.is_blocked {
            blocks += 1;
        }
        trace!(
            attacker = %result.attacker.name,
            damage = result.damage,
            critical = result.is_critical,
            blocked = result.is_blocked,
            "turn resolved"
        );

        push_frame(
            &mut frames,
            hero,
            enemy,
            format_battle_message(&result),
            timing.turn,
        );

        if result.is_game_over {
            break;
        }
    }

    let hero_won = hero.is_alive();
    push_frame(&mut frames, hero, enemy, LogEntry::blank(), timing.outro);
    if hero_won {
        let log = LogEntry::new(
            format!("{} is VICTORIOUS!", hero.name),
            LogKind::Victory,
        );
        push_frame(&mut frames, hero, enemy, log, timing.outro);
    } else {
        let fallen = LogEntry::new(
            format!("{} has fallen! GAME OVER", hero.name),
            LogKind::Defeat,
        );
        push_frame(&mut frames, hero, enemy, fallen, timing.outro);
        let score = LogEntry::new(
            format!("Final Score: {} victories", hero.wins),
            LogKind::Info,
        );
        push_frame(&mut frames, hero, enemy, score, timing.outro);
    }

    debug!(
        hero = %hero.name,
        enemy = %enemy.name,
        turns,
        crits,
        blocks,
        hero_won,
        "battle finished"
    );

    BattleOutcome {
        frames,
        hero_won,
        turns,
        crits,
        blocks,
        exhausted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    fn fighter(name: &str, health: u32) -> Combatant {
        Combatant {
            name: name.to_string(),
            health,
            max_health: health,
            attack_min: 10,
            attack_max: 15,
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

    fn plain_roll(base_damage: u32) -> AttackRoll {
        AttackRoll {
            base_damage,
            is_critical: false,
            is_blocked: false,
        }
    }

    #[test]
    fn test_effective_chances_fall_back_to_defaults() {
        let mut c = fighter("A", 10);
        assert_eq!(effective_crit_chance(&c), DEFAULT_CRIT_CHANCE);
        assert_eq!(effective_block_chance(&c), DEFAULT_BLOCK_CHANCE);

        c.crit_chance = 35;
        c.block_chance = 3;
        assert_eq!(effective_crit_chance(&c), 35);
        assert_eq!(effective_block_chance(&c), 3);
    }

    #[test]
    fn test_crit_multiplier() {
        assert_eq!(crit_multiplier(0), 2.0);
        assert_eq!(crit_multiplier(50), 2.5);
        assert_eq!(crit_multiplier(175), 3.75);
    }

    #[test]
    fn test_calculate_damage_plain_subtracts_defense() {
        assert_eq!(calculate_damage(plain_roll(12), 0, 3), 9);
        assert_eq!(calculate_damage(plain_roll(12), 0, 0), 12);
    }

    #[test]
    fn test_calculate_damage_floors_at_one() {
        assert_eq!(calculate_damage(plain_roll(5), 0, 5), 1);
        assert_eq!(calculate_damage(plain_roll(5), 0, 500), 1);
    }

    #[test]
    fn test_crit_then_block_order() {
        // 15 * 2 = 30, halved = 15, minus 4 defense = 11
        let roll = AttackRoll {
            base_damage: 15,
            is_critical: true,
            is_blocked: true,
        };
        assert_eq!(calculate_damage(roll, 0, 4), 11);
    }

    #[test]
    fn test_block_rounds_toward_zero() {
        let roll = AttackRoll {
            base_damage: 11,
            is_critical: false,
            is_blocked: true,
        };
        assert_eq!(calculate_damage(roll, 0, 0), 5);
    }

    #[test]
    fn test_crit_damage_bonus_truncates() {
        // 11 * 2.75 = 30.25 -> 30
        let roll = AttackRoll {
            base_damage: 11,
            is_critical: true,
            is_blocked: false,
        };
        assert_eq!(calculate_damage(roll, 75, 0), 30);
    }

    #[test]
    fn test_apply_attack_lifesteal_heals_attacker() {
        let mut attacker = fighter("Vamp", 100);
        attacker.health = 50;
        attacker.life_steal = 20;
        let mut defender = fighter("Victim", 100);

        let result = apply_attack(&mut attacker, &mut defender, plain_roll(15));

        assert_eq!(result.damage, 15);
        assert_eq!(result.life_stolen, 3);
        assert_eq!(attacker.health, 53);
        assert_eq!(defender.health, 85);
    }

    #[test]
    fn test_apply_attack_lifesteal_capped_at_max() {
        let mut attacker = fighter("Vamp", 100);
        attacker.health = 99;
        attacker.life_steal = 50;
        let mut defender = fighter("Victim", 100);

        apply_attack(&mut attacker, &mut defender, plain_roll(20));
        assert_eq!(attacker.health, 100);
    }

    #[test]
    fn test_apply_attack_regeneration_heals_surviving_defender() {
        let mut attacker = fighter("A", 100);
        let mut defender = fighter("Troll", 200);
        defender.regeneration = 5;

        let result = apply_attack(&mut attacker, &mut defender, plain_roll(15));

        assert_eq!(result.regeneration, 10);
        assert_eq!(defender.health, 195);
        assert!(!result.is_game_over);
    }

    #[test]
    fn test_regeneration_records_only_health_restored() {
        let mut attacker = fighter("A", 100);
        let mut defender = fighter("Troll", 200);
        defender.regeneration = 10;

        // 200 - 5 + min(20, 5)
        let result = apply_attack(&mut attacker, &mut defender, plain_roll(5));

        assert_eq!(result.regeneration, 5);
        assert_eq!(defender.health, 200);
    }

    #[test]
    fn test_regeneration_does_not_save_a_dead_defender() {
        let mut attacker = fighter("A", 100);
        let mut defender = fighter("Troll", 200);
        defender.health = 5;
        defender.regeneration = 50;

        let result = apply_attack(&mut attacker, &mut defender, plain_roll(15));

        assert!(result.is_game_over);
        assert_eq!(result.regeneration, 100);
        assert_eq!(defender.health, 0);
        assert_eq!(result.winner_name.as_deref(), Some("A"));
    }

    #[test]
    fn test_kill_increments_wins_and_life_on_kill() {
        let mut attacker = fighter("Hero", 100);
        attacker.health = 40;
        attacker.life_on_kill = 30;
        let mut defender = fighter("Foe", 100);
        defender.health = 5;

        let result = apply_attack(&mut attacker, &mut defender, plain_roll(20));

        assert!(result.is_game_over);
        assert_eq!(attacker.wins, 1);
        assert_eq!(attacker.health, 70);
        assert_eq!(defender.health, 0);
    }

    #[test]
    fn test_no_kill_leaves_wins_untouched() {
        let mut attacker = fighter("Hero", 100);
        let mut defender = fighter("Foe", 100);

        let result = apply_attack(&mut attacker, &mut defender, plain_roll(10));

        assert!(!result.is_game_over);
        assert!(result.winner_name.is_none());
        assert_eq!(attacker.wins, 0);
    }

    #[test]
    fn test_roll_attack_damage_within_range() {
        let mut rng = create_test_rng();
        let attacker = fighter("A", 100);
        let defender = fighter("B", 100);

        for _ in 0..500 {
            let roll = roll_attack(&attacker, &defender, &mut rng);
            assert!(
                (10..=15).contains(&roll.base_damage),
                "base damage {} outside 10-15",
                roll.base_damage
            );
        }
    }

    #[test]
    fn test_roll_attack_handles_inverted_range() {
        let mut rng = create_test_rng();
        let mut attacker = fighter("A", 100);
        attacker.attack_min = 20;
        attacker.attack_max = 12;
        let defender = fighter("B", 100);

        for _ in 0..100 {
            let roll = roll_attack(&attacker, &defender, &mut rng);
            assert!((12..=20).contains(&roll.base_damage));
        }
    }

    #[test]
    fn test_always_crit_and_always_block() {
        let mut rng = create_test_rng();
        let mut attacker = fighter("A", 100);
        attacker.crit_chance = 100;
        let mut defender = fighter("B", 100);
        defender.block_chance = 100;

        for _ in 0..50 {
            let roll = roll_attack(&attacker, &defender, &mut rng);
            assert!(roll.is_critical);
            assert!(roll.is_blocked);
        }
    }

    #[test]
    fn test_resolve_attack_is_seed_reproducible() {
        let run = |seed: u64| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut a = fighter("A", 100);
            let mut b = fighter("B", 100);
            (0..20)
                .map(|_| resolve_attack(&mut a, &mut b, &mut rng))
                .collect::<Vec<_>>()
        };
        assert_eq!(run(7), run(7));
    }

    #[test]
    fn test_format_battle_message_flags() {
        let mut attacker = fighter("Hero", 100);
        attacker.is_hero = true;
        let mut defender = fighter("Orc", 100);
        let roll = AttackRoll {
            base_damage: 10,
            is_critical: true,
            is_blocked: true,
        };
        let result = apply_attack(&mut attacker, &mut defender, roll);
        let entry = format_battle_message(&result);

        assert_eq!(
            entry.message,
            "Hero strikes Orc for 10 damage! CRITICAL HIT! BLOCKED!"
        );
        assert_eq!(entry.kind, LogKind::Critical);
    }

    #[test]
    fn test_format_battle_message_kind_follows_attacker() {
        let mut attacker = fighter("Orc", 100);
        let mut defender = fighter("Hero", 100);
        defender.is_hero = true;
        let result = apply_attack(&mut attacker, &mut defender, plain_roll(10));
        assert_eq!(format_battle_message(&result).kind, LogKind::Enemy);
    }

    #[test]
    fn test_simulate_battle_ends_with_one_survivor() {
        let mut rng = create_test_rng();
        let mut hero = Combatant::new_hero("Max");
        let mut enemy = fighter("Dummy", 60);

        let outcome = simulate_battle(&mut hero, &mut enemy, &BattleTiming::instant(), &mut rng);

        assert!(hero.is_alive() != enemy.is_alive());
        assert_eq!(outcome.hero_won, hero.is_alive());
        assert!(outcome.turns > 0);
        assert_eq!(outcome.frames[0].log.kind, LogKind::Title);
        assert!(outcome.frames.iter().all(|f| f.delay.is_zero()));
    }

    #[test]
    fn test_simulate_battle_hero_strikes_first() {
        let mut rng = create_test_rng();
        let mut hero = Combatant::new_hero("Max");
        let mut enemy = fighter("Dummy", 1000);

        let outcome = simulate_battle(&mut hero, &mut enemy, &BattleTiming::instant(), &mut rng);

        let first_turn = outcome
            .frames
            .iter()
            .find(|f| f.log.message.contains("strikes"))
            .map(|f| f.log.message.clone())
            .unwrap_or_default();
        assert!(first_turn.starts_with("Max strikes Dummy"));
    }

    #[test]
    fn test_simulate_battle_turn_cap_exhausts_hero() {
        let mut rng = create_test_rng();
        let mut hero = Combatant::new_hero("Max");
        hero.attack_min = 1;
        hero.attack_max = 1;
        let mut enemy = fighter("Wall", 1000);
        enemy.attack_min = 1;
        enemy.attack_max = 1;
        enemy.regeneration = 10;
        hero.regeneration = 10;

        let outcome = simulate_battle(&mut hero, &mut enemy, &BattleTiming::instant(), &mut rng);

        assert!(outcome.exhausted);
        assert!(!outcome.hero_won);
        assert_eq!(hero.health, 0);
        assert_eq!(outcome.turns, MAX_BATTLE_TURNS);
    }

    #[test]
    fn test_battle_timing_scaled() {
        let timing = BattleTiming::scaled(0.5);
        assert_eq!(timing.turn, Duration::from_millis(TURN_DELAY_MS / 2));
        assert_eq!(BattleTiming::scaled(-1.0), BattleTiming::instant());
    }
}
