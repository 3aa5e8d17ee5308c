use super::tracker::UpgradeTracker;
use crate::combat::Combatant;
use crate::core::constants::{
    LUCKY_MAX_AMOUNT, MAX_CHANCE_PERCENT, RARITY_WEIGHT_BASE, RARITY_WEIGHT_STEP,
};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// How often an upgrade shows up in offers. Rarer means a lower weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common = 1,
    Uncommon = 2,
    Rare = 3,
}

impl Rarity {
    /// Common 6, Uncommon 4, Rare 2.
    pub fn weight(self) -> u32 {
        RARITY_WEIGHT_BASE - self as u32 * RARITY_WEIGHT_STEP
    }

    pub fn name(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
        }
    }
}

/// Additive stat changes. Negative values subtract, never below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatBoost {
    pub attack_min: i32,
    pub attack_max: i32,
    pub defense: i32,
    pub max_health: i32,
    /// Current health change. A boost never drops health below 1.
    pub health: i32,
    pub crit_chance: i32,
    pub block_chance: i32,
    pub life_steal: i32,
    pub crit_damage: i32,
    pub regeneration: i32,
    pub life_on_kill: i32,
}

impl StatBoost {
    pub const NONE: StatBoost = StatBoost {
        attack_min: 0,
        attack_max: 0,
        defense: 0,
        max_health: 0,
        health: 0,
        crit_chance: 0,
        block_chance: 0,
        life_steal: 0,
        crit_damage: 0,
        regeneration: 0,
        life_on_kill: 0,
    };

    pub fn apply(&self, hero: &mut Combatant) {
        fn add(stat: &mut u32, delta: i32) {
            *stat = (*stat as i64 + delta as i64).clamp(0, u32::MAX as i64) as u32;
        }

        add(&mut hero.attack_min, self.attack_min);
        add(&mut hero.attack_max, self.attack_max);
        add(&mut hero.defense, self.defense);
        add(&mut hero.max_health, self.max_health);
        add(&mut hero.crit_chance, self.crit_chance);
        add(&mut hero.block_chance, self.block_chance);
        add(&mut hero.life_steal, self.life_steal);
        add(&mut hero.crit_damage, self.crit_damage);
        add(&mut hero.regeneration, self.regeneration);
        add(&mut hero.life_on_kill, self.life_on_kill);
        hero.crit_chance = hero.crit_chance.min(MAX_CHANCE_PERCENT);
        hero.block_chance = hero.block_chance.min(MAX_CHANCE_PERCENT);

        if self.health != 0 {
            add(&mut hero.health, self.health);
            hero.health = hero.health.max(1);
        }
        hero.health = hero.health.min(hero.max_health);
    }
}

/// Stats a lucky upgrade can land on, in roll order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LuckyStat {
    AttackMin,
    AttackMax,
    Defense,
    MaxHealth,
    CritChance,
    BlockChance,
    LifeSteal,
    CritDamage,
    Regeneration,
}

impl LuckyStat {
    pub const ALL: [LuckyStat; 9] = [
        LuckyStat::AttackMin,
        LuckyStat::AttackMax,
        LuckyStat::Defense,
        LuckyStat::MaxHealth,
        LuckyStat::CritChance,
        LuckyStat::BlockChance,
        LuckyStat::LifeSteal,
        LuckyStat::CritDamage,
        LuckyStat::Regeneration,
    ];

    pub fn boost(self, amount: i32) -> StatBoost {
        match self {
            LuckyStat::AttackMin => StatBoost {
                attack_min: amount,
                ..StatBoost::NONE
            },
            LuckyStat::AttackMax => StatBoost {
                attack_max: amount,
                ..StatBoost::NONE
            },
            LuckyStat::Defense => StatBoost {
                defense: amount,
                ..StatBoost::NONE
            },
            LuckyStat::MaxHealth => StatBoost {
                max_health: amount,
                health: amount,
                ..StatBoost::NONE
            },
            LuckyStat::CritChance => StatBoost {
                crit_chance: amount,
                ..StatBoost::NONE
            },
            LuckyStat::BlockChance => StatBoost {
                block_chance: amount,
                ..StatBoost::NONE
            },
            LuckyStat::LifeSteal => StatBoost {
                life_steal: amount,
                ..StatBoost::NONE
            },
            LuckyStat::CritDamage => StatBoost {
                crit_damage: amount,
                ..StatBoost::NONE
            },
            LuckyStat::Regeneration => StatBoost {
                regeneration: amount,
                ..StatBoost::NONE
            },
        }
    }
}

/// What picking an upgrade does to the hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpgradeEffect {
    /// Restore health to max.
    FullHeal,
    Boost(StatBoost),
    /// Raise minimum attack to a percentage of maximum attack.
    Precision { percent_of_max: u32 },
    /// +1..=LUCKY_MAX_AMOUNT to one random stat.
    Lucky,
}

impl UpgradeEffect {
    /// Applies the effect. Only `Lucky` draws from `rng`.
    pub fn apply(&self, hero: &mut Combatant, rng: &mut impl Rng) {
        match self {
            UpgradeEffect::FullHeal => hero.reset_health(),
            UpgradeEffect::Boost(boost) => boost.apply(hero),
            UpgradeEffect::Precision { percent_of_max } => {
                hero.attack_min = hero.attack_max * percent_of_max / 100;
            }
            UpgradeEffect::Lucky => {
                let stat = LuckyStat::ALL[rng.gen_range(0..LuckyStat::ALL.len())];
                let amount = rng.gen_range(1..=LUCKY_MAX_AMOUNT) as i32;
                stat.boost(amount).apply(hero);
            }
        }
    }
}

/// When an upgrade may be offered. Checked against the current hero and the
/// current acquisition counts every time an offer is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Always,
    /// Another upgrade has been taken at least `times` times this run.
    Acquired { name: &'static str, times: u32 },
    CritChanceAbove(u32),
    CritChanceAtLeast(u32),
    /// Minimum attack is below this percentage of maximum attack.
    AttackSpreadAbove { percent_of_max: u32 },
    All(&'static [Availability]),
}

impl Availability {
    pub fn is_met(&self, hero: &Combatant, tracker: &UpgradeTracker) -> bool {
        match self {
            Availability::Always => true,
            Availability::Acquired { name, times } => tracker.times_acquired(name) >= *times,
            Availability::CritChanceAbove(value) => hero.crit_chance > *value,
            Availability::CritChanceAtLeast(value) => hero.crit_chance >= *value,
            Availability::AttackSpreadAbove { percent_of_max } => {
                hero.attack_min < hero.attack_max * percent_of_max / 100
            }
            Availability::All(conditions) => conditions.iter().all(|c| c.is_met(hero, tracker)),
        }
    }
}

/// A catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpgradeDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub effect: UpgradeEffect,
    /// `None` means the upgrade can be taken any number of times.
    pub max_acquisitions: Option<u32>,
    pub rarity: Rarity,
    pub availability: Availability,
}

impl UpgradeDefinition {
    pub fn has_uses_left(&self, tracker: &UpgradeTracker) -> bool {
        match self.max_acquisitions {
            Some(max) => tracker.times_acquired(self.name) < max,
            None => true,
        }
    }

    /// Eligible for an offer right now.
    pub fn is_eligible(&self, hero: &Combatant, tracker: &UpgradeTracker) -> bool {
        self.has_uses_left(tracker) && self.availability.is_met(hero, tracker)
    }

    /// Description with a "(current/max)" suffix for capped upgrades.
    pub fn display_description(&self, tracker: &UpgradeTracker) -> String {
        match self.max_acquisitions {
            Some(max) => format!(
                "{} ({}/{})",
                self.description,
                tracker.times_acquired(self.name),
                max
            ),
            None => self.description.to_string(),
        }
    }
}

/// An upgrade as presented to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferedUpgrade {
    pub definition: &'static UpgradeDefinition,
    pub description: String,
}

impl OfferedUpgrade {
    pub fn name(&self) -> &'static str {
        self.definition.name
    }

    pub fn rarity(&self) -> Rarity {
        self.definition.rarity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_rarity_weights() {
        assert_eq!(Rarity::Common.weight(), 6);
        assert_eq!(Rarity::Uncommon.weight(), 4);
        assert_eq!(Rarity::Rare.weight(), 2);
    }

    #[test]
    fn test_stat_boost_adds_and_keeps_health_in_range() {
        let mut hero = Combatant::new_hero("Max");
        let boost = StatBoost {
            max_health: 40,
            health: 40,
            defense: 5,
            ..StatBoost::NONE
        };
        boost.apply(&mut hero);
        assert_eq!(hero.max_health, 170);
        assert_eq!(hero.health, 170);
        assert_eq!(hero.defense, 6);
    }

    #[test]
    fn test_stat_boost_health_penalty_never_kills() {
        let mut hero = Combatant::new_hero("Max");
        hero.health = 10;
        let boost = StatBoost {
            attack_max: 25,
            health: -15,
            ..StatBoost::NONE
        };
        boost.apply(&mut hero);
        assert_eq!(hero.health, 1);
        assert_eq!(hero.attack_max, 40);
    }

    #[test]
    fn test_chances_capped_at_one_hundred() {
        let mut hero = Combatant::new_hero("Max");
        hero.crit_chance = 95;
        hero.block_chance = 92;
        let boost = StatBoost {
            crit_chance: 10,
            block_chance: 15,
            ..StatBoost::NONE
        };
        boost.apply(&mut hero);
        assert_eq!(hero.crit_chance, MAX_CHANCE_PERCENT);
        assert_eq!(hero.block_chance, MAX_CHANCE_PERCENT);
    }

    #[test]
    fn test_stacked_block_upgrades_and_lucky_stay_capped() {
        let mut hero = Combatant::new_hero("Max");
        let block = StatBoost {
            block_chance: 15,
            ..StatBoost::NONE
        };
        for _ in 0..7 {
            block.apply(&mut hero);
        }
        assert_eq!(hero.block_chance, MAX_CHANCE_PERCENT);

        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            UpgradeEffect::Lucky.apply(&mut hero, &mut rng);
            assert!(hero.crit_chance <= MAX_CHANCE_PERCENT);
            assert!(hero.block_chance <= MAX_CHANCE_PERCENT);
        }
    }

    #[test]
    fn test_precision_sets_min_from_max() {
        let mut hero = Combatant::new_hero("Max");
        hero.attack_max = 40;
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        UpgradeEffect::Precision { percent_of_max: 85 }.apply(&mut hero, &mut rng);
        assert_eq!(hero.attack_min, 34);
    }

    #[test]
    fn test_full_heal() {
        let mut hero = Combatant::new_hero("Max");
        hero.health = 3;
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        UpgradeEffect::FullHeal.apply(&mut hero, &mut rng);
        assert_eq!(hero.health, hero.max_health);
    }

    #[test]
    fn test_lucky_raises_exactly_one_stat() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..50 {
            let before = Combatant::new_hero("Max");
            let mut hero = before.clone();
            UpgradeEffect::Lucky.apply(&mut hero, &mut rng);

            let deltas = [
                hero.attack_min - before.attack_min,
                hero.attack_max - before.attack_max,
                hero.defense - before.defense,
                hero.max_health - before.max_health,
                hero.crit_chance - before.crit_chance,
                hero.block_chance - before.block_chance,
                hero.life_steal - before.life_steal,
                hero.crit_damage - before.crit_damage,
                hero.regeneration - before.regeneration,
            ];
            let changed: Vec<u32> = deltas.into_iter().filter(|d| *d > 0).collect();
            assert_eq!(changed.len(), 1, "exactly one stat should change");
            assert!((1..=LUCKY_MAX_AMOUNT).contains(&changed[0]));
        }
    }

    #[test]
    fn test_availability_stat_conditions() {
        let tracker = UpgradeTracker::new();
        let mut hero = Combatant::new_hero("Max");

        assert!(!Availability::CritChanceAbove(10).is_met(&hero, &tracker));
        hero.crit_chance = 11;
        assert!(Availability::CritChanceAbove(10).is_met(&hero, &tracker));
        assert!(!Availability::CritChanceAtLeast(20).is_met(&hero, &tracker));

        // 10 < 15 * 70% = 10 is false
        assert!(!Availability::AttackSpreadAbove { percent_of_max: 70 }.is_met(&hero, &tracker));
        hero.attack_max = 40;
        assert!(Availability::AttackSpreadAbove { percent_of_max: 70 }.is_met(&hero, &tracker));
    }

    #[test]
    fn test_availability_prerequisite_reads_tracker() {
        let mut tracker = UpgradeTracker::new();
        let hero = Combatant::new_hero("Max");
        let gate = Availability::Acquired {
            name: "Strength Training",
            times: 2,
        };

        assert!(!gate.is_met(&hero, &tracker));
        tracker.record("Strength Training");
        assert!(!gate.is_met(&hero, &tracker));
        tracker.record("Strength Training");
        assert!(gate.is_met(&hero, &tracker));
    }

    #[test]
    fn test_availability_all_requires_every_condition() {
        static BOTH: [Availability; 2] = [
            Availability::Acquired {
                name: "Executioner",
                times: 1,
            },
            Availability::CritChanceAtLeast(20),
        ];
        let mut tracker = UpgradeTracker::new();
        let mut hero = Combatant::new_hero("Max");
        let gate = Availability::All(&BOTH);

        hero.crit_chance = 25;
        assert!(!gate.is_met(&hero, &tracker));
        tracker.record("Executioner");
        assert!(gate.is_met(&hero, &tracker));
        hero.crit_chance = 19;
        assert!(!gate.is_met(&hero, &tracker));
    }
}
