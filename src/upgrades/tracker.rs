use super::types::{OfferedUpgrade, UpgradeDefinition};
use crate::combat::Combatant;
use rand::Rng;
use std::collections::HashMap;
use tracing::debug;

/// Per-run count of how many times each upgrade has been chosen.
///
/// Owned by the run. Availability checks read it; only `apply` writes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpgradeTracker {
    acquired: HashMap<&'static str, u32>,
}

impl UpgradeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn times_acquired(&self, name: &str) -> u32 {
        self.acquired.get(name).copied().unwrap_or(0)
    }

    /// Total upgrades taken this run.
    pub fn total_acquired(&self) -> u32 {
        self.acquired.values().sum()
    }

    /// (name, count) pairs sorted by name.
    pub fn acquired(&self) -> Vec<(&'static str, u32)> {
        let mut entries: Vec<_> = self.acquired.iter().map(|(k, v)| (*k, *v)).collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    pub fn is_empty(&self) -> bool {
        self.acquired.is_empty()
    }

    pub fn clear(&mut self) {
        self.acquired.clear();
    }

    pub(crate) fn record(&mut self, name: &'static str) {
        *self.acquired.entry(name).or_insert(0) += 1;
    }

    /// Applies an upgrade's effect to the hero, then counts it once.
    pub fn apply(
        &mut self,
        definition: &'static UpgradeDefinition,
        hero: &mut Combatant,
        rng: &mut impl Rng,
    ) {
        definition.effect.apply(hero, rng);
        self.record(definition.name);
        debug!(
            upgrade = definition.name,
            times = self.times_acquired(definition.name),
            "upgrade applied"
        );
    }

    /// Applies an offered upgrade chosen by the player.
    pub fn apply_offer(&mut self, offer: &OfferedUpgrade, hero: &mut Combatant, rng: &mut impl Rng) {
        self.apply(offer.definition, hero, rng);
    }
}
