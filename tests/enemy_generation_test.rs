use arena::enemies::{archetype_count, generate_enemy, ARCHETYPES, FINAL_BOSS};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn test_last_listed_tier_uses_last_archetype() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let tier = archetype_count() as u32;
    let enemy = generate_enemy(tier, &mut rng);
    assert_eq!(enemy.name, ARCHETYPES[ARCHETYPES.len() - 1].name);
}

#[test]
fn test_tier_past_the_list_is_the_fixed_final_boss() {
    let tier = archetype_count() as u32 + 1;
    let a = generate_enemy(tier, &mut ChaCha8Rng::seed_from_u64(1));
    let b = generate_enemy(tier, &mut ChaCha8Rng::seed_from_u64(999));
    assert_eq!(a.name, FINAL_BOSS.name);
    assert_eq!(a, b, "final boss should not vary between runs");
}

#[test]
fn test_enemies_are_never_heroes_and_start_full() {
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    for tier in 1..=(archetype_count() as u32 + 1) {
        let enemy = generate_enemy(tier, &mut rng);
        assert!(!enemy.is_hero);
        assert_eq!(enemy.health, enemy.max_health);
        assert!(enemy.attack_min <= enemy.attack_max, "tier {}", tier);
        assert!(enemy.health >= 1);
    }
}

#[test]
fn test_generation_is_seed_reproducible() {
    for tier in 1..=5 {
        let a = generate_enemy(tier, &mut ChaCha8Rng::seed_from_u64(21));
        let b = generate_enemy(tier, &mut ChaCha8Rng::seed_from_u64(21));
        assert_eq!(a, b);
    }
}
