//! Simulation configuration.

use crate::core::config::parse_value;
use crate::core::ConfigError;
use std::fmt;
use std::str::FromStr;

/// How the autopilot picks from an upgrade offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Always the first offer.
    #[default]
    First,
    /// Uniformly random offer.
    Random,
    /// Rarest offer, first on ties.
    Greedy,
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first" => Ok(Strategy::First),
            "random" => Ok(Strategy::Random),
            "greedy" => Ok(Strategy::Greedy),
            other => Err(format!("unknown strategy: {}", other)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::First => "first",
            Strategy::Random => "random",
            Strategy::Greedy => "greedy",
        };
        f.write_str(name)
    }
}

/// Configuration for a simulation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    /// Number of complete games to play
    pub runs: u32,

    /// Base seed; game `i` uses `seed + i`
    pub seed: u64,

    pub strategy: Strategy,

    /// Print the report as JSON instead of text
    pub json: bool,

    /// Debug-level logging to stderr
    pub verbose: bool,

    /// Only the final summary line
    pub quiet: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            runs: 100,
            seed: 42,
            strategy: Strategy::First,
            json: false,
            verbose: false,
            quiet: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimCommand {
    Run(SimConfig),
    Help,
    Version,
}

impl SimConfig {
    /// Parses arguments, not including the program name.
    pub fn from_args<I, S>(args: I) -> Result<SimCommand, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|a| a.as_ref().to_string()).collect();
        let mut config = SimConfig::default();
        let mut i = 0;

        while i < args.len() {
            match args[i].as_str() {
                "--runs" => {
                    i += 1;
                    config.runs = parse_value("--runs", args.get(i))?;
                }
                "--seed" => {
                    i += 1;
                    config.seed = parse_value("--seed", args.get(i))?;
                }
                "--strategy" => {
                    i += 1;
                    config.strategy = parse_value("--strategy", args.get(i))?;
                }
                "--json" => config.json = true,
                "--verbose" => config.verbose = true,
                "--quiet" => config.quiet = true,
                "--help" | "-h" => return Ok(SimCommand::Help),
                "--version" | "-v" => return Ok(SimCommand::Version),
                other => return Err(ConfigError::UnknownArgument(other.to_string())),
            }
            i += 1;
        }

        Ok(SimCommand::Run(config))
    }
}
