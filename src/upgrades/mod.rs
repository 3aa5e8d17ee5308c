//! Upgrades offered between battles.

pub mod catalog;
pub mod selection;
pub mod tracker;
pub mod types;

pub use catalog::{find_upgrade, CATALOG};
pub use selection::{offer_from, offer_upgrades};
pub use tracker::UpgradeTracker;
pub use types::{
    Availability, LuckyStat, OfferedUpgrade, Rarity, StatBoost, UpgradeDefinition, UpgradeEffect,
};
