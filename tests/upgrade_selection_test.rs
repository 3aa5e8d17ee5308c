use arena::combat::Combatant;
use arena::upgrades::{find_upgrade, offer_upgrades, UpgradeTracker, CATALOG};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

proptest! {
    #[test]
    fn prop_offers_respect_caps_and_never_repeat(seed in any::<u64>(), picks in 0usize..40) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut hero = Combatant::new_hero("Hero");
        let mut tracker = UpgradeTracker::new();

        for _ in 0..picks {
            let offer = offer_upgrades(&hero, &tracker, 3, &mut rng);

            let names: HashSet<_> = offer.iter().map(|o| o.name()).collect();
            prop_assert_eq!(names.len(), offer.len());
            for o in &offer {
                if let Some(max) = o.definition.max_acquisitions {
                    prop_assert!(tracker.times_acquired(o.name()) < max);
                }
            }

            match offer.first() {
                Some(choice) => tracker.apply_offer(choice, &mut hero, &mut rng),
                None => break,
            }
        }
    }
}

#[test]
fn test_prerequisite_unlocks_advanced_upgrade() {
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let mut hero = Combatant::new_hero("Hero");
    let mut tracker = UpgradeTracker::new();
    let basic = find_upgrade("Strength Training").expect("in catalog");
    let advanced = find_upgrade("Advanced Strength Training").expect("in catalog");

    assert!(!advanced.is_eligible(&hero, &tracker));
    tracker.apply(basic, &mut hero, &mut rng);
    assert!(!advanced.is_eligible(&hero, &tracker));
    tracker.apply(basic, &mut hero, &mut rng);
    assert!(advanced.is_eligible(&hero, &tracker));
    assert_eq!(hero.attack_min, 10 + 16);
}

#[test]
fn test_exhausting_a_cap_removes_it_from_offers() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut hero = Combatant::new_hero("Hero");
    let mut tracker = UpgradeTracker::new();
    let berserker = find_upgrade("Berserker").expect("in catalog");

    for _ in 0..3 {
        tracker.apply(berserker, &mut hero, &mut rng);
    }
    assert!(hero.health >= 1);
    assert_eq!(hero.attack_max, 15 + 75);

    for _ in 0..100 {
        let offer = offer_upgrades(&hero, &tracker, 3, &mut rng);
        assert!(offer.iter().all(|o| o.name() != "Berserker"));
    }
}

#[test]
fn test_catalog_has_every_upgrade() {
    assert_eq!(CATALOG.len(), 18);
    for name in ["Full Heal", "Deathblow", "I'm Feeling Lucky", "Second Wind"] {
        assert!(find_upgrade(name).is_some(), "{} missing", name);
    }
}

#[test]
fn test_block_chance_never_exceeds_one_hundred() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let mut hero = Combatant::new_hero("Hero");
    let mut tracker = UpgradeTracker::new();

    for name in ["Block Master"; 5]
        .into_iter()
        .chain(["Defensive Stance"; 2])
        .chain(["Iron Skin"])
    {
        let upgrade = find_upgrade(name).expect("in catalog");
        tracker.apply(upgrade, &mut hero, &mut rng);
    }

    let lucky = find_upgrade("I'm Feeling Lucky").expect("in catalog");
    for _ in 0..100 {
        tracker.apply(lucky, &mut hero, &mut rng);
        assert!(hero.block_chance <= 100, "block chance {}", hero.block_chance);
        assert!(hero.crit_chance <= 100, "crit chance {}", hero.crit_chance);
    }
}
