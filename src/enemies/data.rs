//! Static archetype table. Index 0 is tier 1.

/// A named enemy template. Multipliers scale the tier's base stats; the flat
/// fields are copied onto the generated enemy as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Archetype {
    pub name: &'static str,
    pub health_mod: f64,
    pub attack_mod: f64,
    pub defense_mod: f64,
    pub crit_chance: u32,
    pub block_chance: u32,
    pub life_steal: u32,
    pub crit_damage: u32,
    pub regeneration: u32,
    pub description: &'static str,
}

impl Archetype {
    const fn base(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            health_mod: 1.0,
            attack_mod: 1.0,
            defense_mod: 1.0,
            crit_chance: 0,
            block_chance: 0,
            life_steal: 0,
            crit_damage: 0,
            regeneration: 0,
            description,
        }
    }
}

pub static ARCHETYPES: [Archetype; 15] = [
    Archetype {
        health_mod: 1.0,
        attack_mod: 0.9,
        defense_mod: 0.8,
        crit_chance: 5,
        block_chance: 5,
        ..Archetype::base(
            "Novice Gladiator",
            "A fresh recruit to the arena, eager but inexperienced.",
        )
    },
    Archetype {
        health_mod: 1.1,
        crit_chance: 8,
        block_chance: 10,
        ..Archetype::base(
            "Veteran Fighter",
            "Seasoned by countless battles, this warrior knows the arena well.",
        )
    },
    Archetype {
        health_mod: 1.4,
        attack_mod: 1.1,
        defense_mod: 1.2,
        crit_chance: 10,
        block_chance: 15,
        crit_damage: 20,
        ..Archetype::base(
            "Arena Champion",
            "A celebrated fighter who has claimed many lives in the arena.",
        )
    },
    Archetype {
        health_mod: 0.9,
        attack_mod: 1.3,
        defense_mod: 0.7,
        crit_chance: 15,
        block_chance: 5,
        crit_damage: 30,
        ..Archetype::base(
            "Blood Reaper",
            "Known for swift, devastating attacks that leave opponents bleeding.",
        )
    },
    Archetype {
        health_mod: 1.2,
        attack_mod: 1.4,
        defense_mod: 0.8,
        crit_chance: 12,
        block_chance: 8,
        crit_damage: 40,
        ..Archetype::base(
            "Skull Crusher",
            "Wields a massive weapon that can shatter bone with a single blow.",
        )
    },
    Archetype {
        attack_mod: 1.5,
        defense_mod: 0.6,
        crit_chance: 20,
        block_chance: 5,
        crit_damage: 50,
        ..Archetype::base(
            "Death Dealer",
            "An executioner who specializes in finishing opponents quickly.",
        )
    },
    Archetype {
        health_mod: 0.8,
        attack_mod: 1.2,
        defense_mod: 0.5,
        crit_chance: 10,
        block_chance: 5,
        life_steal: 15,
        ..Archetype::base(
            "Soul Harvester",
            "Drains the life force from opponents to sustain itself.",
        )
    },
    Archetype {
        health_mod: 1.3,
        attack_mod: 1.3,
        crit_chance: 15,
        block_chance: 10,
        crit_damage: 35,
        ..Archetype::base(
            "Bone Breaker",
            "Targets joints and weak points, causing crippling injuries.",
        )
    },
    Archetype {
        health_mod: 1.2,
        attack_mod: 1.4,
        defense_mod: 1.1,
        crit_chance: 15,
        block_chance: 15,
        crit_damage: 40,
        life_steal: 10,
        ..Archetype::base(
            "Doom Bringer",
            "A harbinger of death whose mere presence strikes fear into opponents.",
        )
    },
    Archetype {
        health_mod: 0.7,
        attack_mod: 1.6,
        defense_mod: 0.4,
        crit_chance: 25,
        block_chance: 15,
        crit_damage: 60,
        ..Archetype::base(
            "Shadow Assassin",
            "Strikes from the darkness with lethal precision.",
        )
    },
    Archetype {
        health_mod: 1.6,
        attack_mod: 0.9,
        defense_mod: 1.5,
        crit_chance: 5,
        block_chance: 25,
        regeneration: 2,
        ..Archetype::base("Hans", "A walking fortress clad in impenetrable armor.")
    },
    Archetype {
        health_mod: 1.1,
        attack_mod: 1.5,
        defense_mod: 0.3,
        crit_chance: 20,
        crit_damage: 50,
        ..Archetype::base(
            "Berserker",
            "Fights with reckless abandon, caring nothing for defense.",
        )
    },
    Archetype {
        health_mod: 0.9,
        attack_mod: 1.3,
        defense_mod: 0.6,
        crit_chance: 15,
        block_chance: 10,
        life_steal: 20,
        regeneration: 3,
        ..Archetype::base(
            "Blood Mage",
            "Wields forbidden magic that manipulates life essence.",
        )
    },
    Archetype {
        health_mod: 1.3,
        defense_mod: 0.8,
        crit_chance: 10,
        block_chance: 10,
        regeneration: 5,
        ..Archetype::base(
            "Undying One",
            "A fighter who refuses to fall, healing from even grievous wounds.",
        )
    },
    Archetype {
        health_mod: 0.8,
        attack_mod: 1.4,
        defense_mod: 0.7,
        crit_chance: 18,
        block_chance: 18,
        crit_damage: 30,
        ..Archetype::base(
            "Twin Blade",
            "Wields a blade in each hand, attacking with blinding speed.",
        )
    },
];

/// Waits at the end of the line for anyone who clears every archetype.
pub static FINAL_BOSS: Archetype = Archetype {
    health_mod: 2.0,
    attack_mod: 1.8,
    defense_mod: 1.5,
    crit_chance: 20,
    block_chance: 20,
    life_steal: 15,
    crit_damage: 50,
    regeneration: 3,
    ..Archetype::base(
        "The Immortal",
        "The legendary undefeated champion of the arena. None have survived his wrath.",
    )
};

pub fn archetype_count() -> usize {
    ARCHETYPES.len()
}

/// Archetype for a 1-based tier. Tier 0 is treated as tier 1; anything past
/// the table is the final boss.
pub fn archetype_for_tier(tier: u32) -> &'static Archetype {
    let index = tier.saturating_sub(1) as usize;
    ARCHETYPES.get(index).unwrap_or(&FINAL_BOSS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_archetype_table_has_at_least_fourteen_entries() {
        assert!(archetype_count() >= 14);
    }

    #[test]
    fn test_archetype_names_are_unique() {
        let names: HashSet<_> = ARCHETYPES.iter().map(|a| a.name).collect();
        assert_eq!(names.len(), ARCHETYPES.len());
        assert!(!names.contains(FINAL_BOSS.name));
    }

    #[test]
    fn test_archetype_for_tier_indexing() {
        assert_eq!(archetype_for_tier(1).name, "Novice Gladiator");
        assert_eq!(archetype_for_tier(0).name, "Novice Gladiator");
        assert_eq!(archetype_for_tier(15).name, "Twin Blade");
        assert_eq!(archetype_for_tier(16).name, "The Immortal");
        assert_eq!(archetype_for_tier(99).name, "The Immortal");
    }

    #[test]
    fn test_archetype_percentages_in_range() {
        for a in ARCHETYPES.iter().chain(std::iter::once(&FINAL_BOSS)) {
            assert!(a.crit_chance <= 100, "{} crit chance", a.name);
            assert!(a.block_chance <= 100, "{} block chance", a.name);
            assert!(a.health_mod > 0.0 && a.attack_mod > 0.0 && a.defense_mod > 0.0);
            assert!(!a.description.is_empty());
        }
    }
}
