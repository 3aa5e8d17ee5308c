use super::catalog::CATALOG;
use super::tracker::UpgradeTracker;
use super::types::{OfferedUpgrade, UpgradeDefinition};
use crate::combat::Combatant;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

/// Builds an offer of up to `count` distinct upgrades from the full catalog.
pub fn offer_upgrades(
    hero: &Combatant,
    tracker: &UpgradeTracker,
    count: usize,
    rng: &mut impl Rng,
) -> Vec<OfferedUpgrade> {
    offer_from(&CATALOG, hero, tracker, count, rng)
}

/// Builds an offer from `catalog`.
///
/// Only eligible upgrades are considered. When there are no more than `count`
/// of them, all are offered in shuffled order. Otherwise `count` are drawn
/// without replacement, weighted by rarity.
pub fn offer_from(
    catalog: &'static [UpgradeDefinition],
    hero: &Combatant,
    tracker: &UpgradeTracker,
    count: usize,
    rng: &mut impl Rng,
) -> Vec<OfferedUpgrade> {
    let mut pool: Vec<&'static UpgradeDefinition> = catalog
        .iter()
        .filter(|u| u.is_eligible(hero, tracker))
        .collect();
    pool.shuffle(rng);

    trace!(eligible = pool.len(), count, "building upgrade offer");

    let chosen = if pool.len() <= count {
        pool
    } else {
        weighted_draw(pool, count, rng)
    };

    chosen
        .into_iter()
        .map(|definition| OfferedUpgrade {
            definition,
            description: definition.display_description(tracker),
        })
        .collect()
}

fn weighted_draw(
    mut pool: Vec<&'static UpgradeDefinition>,
    count: usize,
    rng: &mut impl Rng,
) -> Vec<&'static UpgradeDefinition> {
    let mut chosen = Vec::with_capacity(count);

    while chosen.len() < count && !pool.is_empty() {
        let total: u32 = pool.iter().map(|u| u.rarity.weight()).sum();
        if total == 0 {
            break;
        }

        let mut roll = rng.gen_range(0..total);
        let mut index = pool.len() - 1;
        for (i, upgrade) in pool.iter().enumerate() {
            let weight = upgrade.rarity.weight();
            if roll < weight {
                index = i;
                break;
            }
            roll -= weight;
        }
        chosen.push(pool.remove(index));
    }

    chosen
}
