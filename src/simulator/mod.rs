//! Headless balance simulator.
//!
//! Plays whole games through `GameEngine` with an autopilot in place of the
//! terminal, so results follow the real progression rules.

mod autopilot;
mod config;
mod report;
mod runner;

pub use autopilot::AutoPilot;
pub use config::{SimCommand, SimConfig, Strategy};
pub use report::SimReport;
pub use runner::{run_simulation, simulate_single_run};
