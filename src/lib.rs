//! Gladiator Arena - turn-based terminal combat.
//!
//! The library holds the whole game: combat resolution, enemy generation,
//! upgrades and the run state machine. The `arena` binary puts a terminal in
//! front of it; the `simulator` binary puts an autopilot in front of it.

pub mod build_info;
pub mod combat;
pub mod core;
pub mod enemies;
pub mod simulator;
pub mod ui;
pub mod upgrades;
pub mod utils;
