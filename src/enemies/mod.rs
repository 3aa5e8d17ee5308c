//! Enemy archetypes and tier-based generation.

pub mod data;
pub mod generation;

pub use data::{archetype_count, archetype_for_tier, Archetype, ARCHETYPES, FINAL_BOSS};
pub use generation::{final_boss_tier, generate_enemy, is_final_boss_tier};
