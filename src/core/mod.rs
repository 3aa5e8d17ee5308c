//! Run state, progression and configuration.

pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod frontend;
pub mod game_state;

pub use config::{Command, ConfigError, GameConfig};
pub use engine::{GameEngine, GameRecord, RunSummary};
pub use error::GameError;
pub use frontend::{EndChoice, Frontend, Playback};
pub use game_state::{normalize_player_name, Phase, RunState};
