//! Command-line configuration for the `arena` binary.

use crate::combat::BattleTiming;
use std::time::Duration;
use thiserror::Error;

/// Turn delay multiplier for `--fast`.
pub const FAST_DELAY_FACTOR: f64 = 0.25;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{flag} requires a value")]
    MissingValue { flag: String },
    #[error("invalid value for {flag}: {value}")]
    InvalidValue { flag: String, value: String },
    #[error("unknown argument: {0}")]
    UnknownArgument(String),
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Play(GameConfig),
    Version,
    Help,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameConfig {
    /// Fixed RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
    pub timing: BattleTiming,
}

impl GameConfig {
    /// Parses arguments, not including the program name.
    pub fn from_args<I, S>(args: I) -> Result<Command, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|a| a.as_ref().to_string()).collect();
        let mut config = GameConfig::default();
        let mut i = 0;

        while i < args.len() {
            match args[i].as_str() {
                "--version" | "-v" => return Ok(Command::Version),
                "--help" | "-h" => return Ok(Command::Help),
                "--seed" => {
                    i += 1;
                    config.seed = Some(parse_value("--seed", args.get(i))?);
                }
                "--fast" => {
                    config.timing = BattleTiming::scaled(FAST_DELAY_FACTOR);
                }
                "--turn-delay" => {
                    i += 1;
                    let ms: u64 = parse_value("--turn-delay", args.get(i))?;
                    config.timing.turn = Duration::from_millis(ms);
                }
                other => return Err(ConfigError::UnknownArgument(other.to_string())),
            }
            i += 1;
        }

        Ok(Command::Play(config))
    }

    pub fn timing(&self) -> BattleTiming {
        self.timing
    }
}

/// Parses the value following a flag.
pub fn parse_value<T: std::str::FromStr>(
    flag: &str,
    value: Option<&String>,
) -> Result<T, ConfigError> {
    let value = value.ok_or_else(|| ConfigError::MissingValue {
        flag: flag.to_string(),
    })?;
    value.parse().map_err(|_| ConfigError::InvalidValue {
        flag: flag.to_string(),
        value: value.clone(),
    })
}
