//! Plays complete games through the real engine with an autopilot frontend.

use super::autopilot::AutoPilot;
use super::config::{SimConfig, Strategy};
use super::report::SimReport;
use crate::combat::BattleTiming;
use crate::core::{GameEngine, GameRecord};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut games = Vec::with_capacity(config.runs as usize);

    for run_idx in 0..config.runs {
        let seed = config.seed.wrapping_add(run_idx as u64);
        match simulate_single_run(seed, config.strategy) {
            Some(game) => {
                debug!(
                    run = run_idx + 1,
                    seed,
                    won = game.won,
                    tier = game.tier_reached,
                    killed_by = ?game.killed_by,
                    "run finished"
                );
                games.push(game);
            }
            None => warn!(run = run_idx + 1, seed, "run ended without a game over"),
        }
    }

    SimReport::from_games(&games)
}

/// One game from tier 1 to game over. Same seed, same game.
pub fn simulate_single_run(seed: u64, strategy: Strategy) -> Option<GameRecord> {
    let mut engine = GameEngine::new("Autopilot", ChaCha8Rng::seed_from_u64(seed))
        .with_timing(BattleTiming::instant());
    // Separate stream so the strategy cannot shift the game's own rolls.
    let mut pilot = AutoPilot::new(strategy, ChaCha8Rng::seed_from_u64(seed.rotate_left(32)));

    engine.run(&mut pilot).games.into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_run_reaches_game_over() {
        let game = simulate_single_run(42, Strategy::First).expect("game over");
        assert!(game.tier_reached >= 1);
        assert!(game.battles >= 1);
        assert_eq!(game.won, game.killed_by.is_none());
    }

    #[test]
    fn test_same_seed_same_result() {
        let a = simulate_single_run(7, Strategy::Random);
        let b = simulate_single_run(7, Strategy::Random);
        assert_eq!(a, b);
    }

    #[test]
    fn test_run_simulation_counts_runs() {
        let config = SimConfig {
            runs: 5,
            seed: 3,
            ..Default::default()
        };
        let report = run_simulation(&config);
        assert_eq!(report.runs, 5);
        assert!(report.wins <= 5);
    }
}
