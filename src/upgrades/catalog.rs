//! Every upgrade the arena can offer.

use super::types::{Availability, Rarity, StatBoost, UpgradeDefinition, UpgradeEffect};

static DEATHBLOW_REQUIREMENTS: [Availability; 2] = [
    Availability::Acquired {
        name: "Executioner",
        times: 1,
    },
    Availability::CritChanceAtLeast(20),
];

pub static CATALOG: [UpgradeDefinition; 18] = [
    UpgradeDefinition {
        name: "Full Heal",
        description: "Restore all health points",
        effect: UpgradeEffect::FullHeal,
        max_acquisitions: None,
        rarity: Rarity::Common,
        availability: Availability::Always,
    },
    UpgradeDefinition {
        name: "Strength Training",
        description: "Increase minimum and maximum damage by 8",
        effect: UpgradeEffect::Boost(StatBoost {
            attack_min: 8,
            attack_max: 8,
            ..StatBoost::NONE
        }),
        max_acquisitions: Some(3),
        rarity: Rarity::Common,
        availability: Availability::Always,
    },
    UpgradeDefinition {
        name: "Advanced Strength Training",
        description: "Increase minimum and maximum damage by 15",
        effect: UpgradeEffect::Boost(StatBoost {
            attack_min: 15,
            attack_max: 15,
            ..StatBoost::NONE
        }),
        max_acquisitions: Some(1),
        rarity: Rarity::Rare,
        availability: Availability::Acquired {
            name: "Strength Training",
            times: 2,
        },
    },
    UpgradeDefinition {
        name: "Defensive Stance",
        description: "Gain 5 defense points",
        effect: UpgradeEffect::Boost(StatBoost {
            defense: 5,
            ..StatBoost::NONE
        }),
        max_acquisitions: Some(5),
        rarity: Rarity::Common,
        availability: Availability::Always,
    },
    UpgradeDefinition {
        name: "Iron Skin",
        description: "Gain 12 defense points and +10% block chance",
        effect: UpgradeEffect::Boost(StatBoost {
            defense: 12,
            block_chance: 10,
            ..StatBoost::NONE
        }),
        max_acquisitions: Some(1),
        rarity: Rarity::Rare,
        availability: Availability::Acquired {
            name: "Defensive Stance",
            times: 2,
        },
    },
    UpgradeDefinition {
        name: "Vitality",
        description: "Increase maximum health by 40",
        effect: UpgradeEffect::Boost(StatBoost {
            max_health: 40,
            health: 40,
            ..StatBoost::NONE
        }),
        max_acquisitions: Some(4),
        rarity: Rarity::Common,
        availability: Availability::Always,
    },
    UpgradeDefinition {
        name: "Critical Eye",
        description: "Increase critical hit chance by 12%",
        effect: UpgradeEffect::Boost(StatBoost {
            crit_chance: 12,
            ..StatBoost::NONE
        }),
        max_acquisitions: Some(5),
        rarity: Rarity::Common,
        availability: Availability::Always,
    },
    UpgradeDefinition {
        name: "Vampiric Strike",
        description: "Heal for 20% of damage dealt",
        effect: UpgradeEffect::Boost(StatBoost {
            life_steal: 20,
            ..StatBoost::NONE
        }),
        max_acquisitions: Some(3),
        rarity: Rarity::Uncommon,
        availability: Availability::Always,
    },
    UpgradeDefinition {
        name: "Blood Frenzy",
        description: "Increase lifesteal by 15% and gain +10 attack",
        effect: UpgradeEffect::Boost(StatBoost {
            life_steal: 15,
            attack_min: 10,
            attack_max: 10,
            ..StatBoost::NONE
        }),
        max_acquisitions: Some(2),
        rarity: Rarity::Uncommon,
        availability: Availability::Acquired {
            name: "Vampiric Strike",
            times: 1,
        },
    },
    UpgradeDefinition {
        name: "Berserker",
        description: "Gain +25 max damage but -15 health",
        effect: UpgradeEffect::Boost(StatBoost {
            attack_max: 25,
            health: -15,
            ..StatBoost::NONE
        }),
        max_acquisitions: Some(3),
        rarity: Rarity::Uncommon,
        availability: Availability::Always,
    },
    UpgradeDefinition {
        name: "Precision",
        description: "Increase minimum damage to 85% of maximum damage",
        effect: UpgradeEffect::Precision { percent_of_max: 85 },
        max_acquisitions: Some(5),
        rarity: Rarity::Uncommon,
        availability: Availability::AttackSpreadAbove { percent_of_max: 70 },
    },
    UpgradeDefinition {
        name: "Block Master",
        description: "Increase block chance by 15%",
        effect: UpgradeEffect::Boost(StatBoost {
            block_chance: 15,
            ..StatBoost::NONE
        }),
        max_acquisitions: Some(5),
        rarity: Rarity::Common,
        availability: Availability::Always,
    },
    UpgradeDefinition {
        name: "Executioner",
        description: "Critical hits deal 75% more damage",
        effect: UpgradeEffect::Boost(StatBoost {
            crit_damage: 75,
            ..StatBoost::NONE
        }),
        max_acquisitions: Some(3),
        rarity: Rarity::Uncommon,
        availability: Availability::CritChanceAbove(10),
    },
    UpgradeDefinition {
        name: "Deathblow",
        description: "Critical hits deal 100% more damage and +5% crit chance",
        effect: UpgradeEffect::Boost(StatBoost {
            crit_damage: 100,
            crit_chance: 5,
            ..StatBoost::NONE
        }),
        max_acquisitions: Some(1),
        rarity: Rarity::Rare,
        availability: Availability::All(&DEATHBLOW_REQUIREMENTS),
    },
    UpgradeDefinition {
        name: "Second Wind",
        description: "Regenerate 10% of max health whenever you are hit",
        effect: UpgradeEffect::Boost(StatBoost {
            regeneration: 10,
            ..StatBoost::NONE
        }),
        max_acquisitions: Some(2),
        rarity: Rarity::Rare,
        availability: Availability::Always,
    },
    UpgradeDefinition {
        name: "Battle Meditation",
        description: "Heal 30 health after each kill",
        effect: UpgradeEffect::Boost(StatBoost {
            life_on_kill: 30,
            ..StatBoost::NONE
        }),
        max_acquisitions: Some(1),
        rarity: Rarity::Uncommon,
        availability: Availability::Always,
    },
    UpgradeDefinition {
        name: "Balanced Training",
        description: "Gain a bit of all stats",
        effect: UpgradeEffect::Boost(StatBoost {
            attack_min: 5,
            attack_max: 5,
            defense: 4,
            max_health: 20,
            health: 20,
            ..StatBoost::NONE
        }),
        max_acquisitions: Some(5),
        rarity: Rarity::Common,
        availability: Availability::Always,
    },
    UpgradeDefinition {
        name: "I'm Feeling Lucky",
        description: "Gain a random boost to a random stat",
        effect: UpgradeEffect::Lucky,
        max_acquisitions: None,
        rarity: Rarity::Rare,
        availability: Availability::Always,
    },
];

pub fn find_upgrade(name: &str) -> Option<&'static UpgradeDefinition> {
    CATALOG.iter().find(|u| u.name == name)
}
