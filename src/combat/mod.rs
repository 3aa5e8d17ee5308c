//! Fighters, damage resolution and battle simulation.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
