//! The run state machine: battle, upgrade, next battle, until the hero falls
//! or The Immortal does.

use super::error::GameError;
use super::frontend::{EndChoice, Frontend, Playback};
use super::game_state::{normalize_player_name, Phase, RunState};
use crate::combat::{
    simulate_battle, BattleFrame, BattleOutcome, BattleTiming, Combatant, LogEntry, LogKind,
};
use crate::core::constants::UPGRADE_OFFER_SIZE;
use crate::enemies::{archetype_count, final_boss_tier, generate_enemy};
use crate::upgrades::{offer_upgrades, UpgradeTracker};
use rand::Rng;
use tracing::{debug, info, warn};

/// How one game (start to game over) went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub won: bool,
    pub tier_reached: u32,
    pub battles: u32,
    pub turns: u32,
    /// Name of the enemy that ended the run, if the hero lost.
    pub killed_by: Option<String>,
    pub upgrades: Vec<(&'static str, u32)>,
}

/// Everything `GameEngine::run` played before the player quit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub games: Vec<GameRecord>,
    /// The player quit mid-game rather than from the end screen.
    pub quit_mid_game: bool,
}

impl RunSummary {
    pub fn victories(&self) -> usize {
        self.games.iter().filter(|g| g.won).count()
    }
}

#[derive(Debug, Default)]
struct GameTally {
    battles: u32,
    turns: u32,
}

pub struct GameEngine<R: Rng> {
    state: RunState,
    phase: Phase,
    rng: R,
    timing: BattleTiming,
}

impl<R: Rng> GameEngine<R> {
    /// Starts a run at tier 1. The name is normalized first.
    pub fn new(hero_name: &str, mut rng: R) -> Self {
        let name = normalize_player_name(hero_name);
        let state = RunState::new(&name, &mut rng);
        info!(hero = %name, enemy = %state.enemy.name, "run started");
        Self {
            state,
            phase: Phase::Battling,
            rng,
            timing: BattleTiming::default(),
        }
    }

    /// Resumes a run from an existing state, battling its current enemy.
    pub fn from_state(state: RunState, rng: R) -> Self {
        Self {
            state,
            phase: Phase::Battling,
            rng,
            timing: BattleTiming::default(),
        }
    }

    pub fn with_timing(mut self, timing: BattleTiming) -> Self {
        self.timing = timing;
        self
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn run_state(&self) -> &RunState {
        &self.state
    }

    pub fn hero(&self) -> &Combatant {
        &self.state.hero
    }

    pub fn enemy(&self) -> &Combatant {
        &self.state.enemy
    }

    pub fn tier(&self) -> u32 {
        self.state.tier
    }

    pub fn upgrades(&self) -> &UpgradeTracker {
        &self.state.upgrades
    }

    /// Fights the current enemy to the end.
    ///
    /// Moves to `GameOver` if the hero fell or The Immortal did, otherwise to
    /// `ChoosingUpgrade` with a fresh offer.
    pub fn fight(&mut self) -> Result<BattleOutcome, GameError> {
        match self.phase {
            Phase::Battling => Ok(self.battle()),
            _ => Err(self.wrong_phase("fight")),
        }
    }

    fn battle(&mut self) -> BattleOutcome {
        let state = &mut self.state;
        let mut outcome = simulate_battle(
            &mut state.hero,
            &mut state.enemy,
            &self.timing,
            &mut self.rng,
        );

        debug!(
            tier = state.tier,
            enemy = %state.enemy.name,
            hero_won = outcome.hero_won,
            turns = outcome.turns,
            crits = outcome.crits,
            blocks = outcome.blocks,
            "battle finished"
        );

        if !outcome.hero_won {
            info!(tier = state.tier, killed_by = %state.enemy.name, "hero defeated");
            state.game_over = true;
            self.phase = Phase::GameOver { won: false };
            return outcome;
        }

        if state.hero.wins >= final_boss_tier() {
            info!(wins = state.hero.wins, "final boss defeated");
            self.push_closing_line(
                &mut outcome,
                "LEGENDARY VICTORY! You've defeated The Immortal!",
                LogKind::Victory,
            );
            self.state.game_over = true;
            self.phase = Phase::GameOver { won: true };
            return outcome;
        }

        if state.hero.wins as usize == archetype_count() {
            self.push_closing_line(
                &mut outcome,
                "You've defeated all champions! Now face THE IMMORTAL!",
                LogKind::Title,
            );
        }
        self.push_closing_line(
            &mut outcome,
            "Choose an upgrade to continue your journey!",
            LogKind::Info,
        );

        let offers = offer_upgrades(
            &self.state.hero,
            &self.state.upgrades,
            UPGRADE_OFFER_SIZE,
            &mut self.rng,
        );
        debug!(
            offers = ?offers.iter().map(|o| o.name()).collect::<Vec<_>>(),
            "upgrades offered"
        );
        self.phase = Phase::ChoosingUpgrade(offers);
        outcome
    }

    fn push_closing_line(&self, outcome: &mut BattleOutcome, message: &str, kind: LogKind) {
        outcome.frames.push(BattleFrame {
            hero: self.state.hero.clone(),
            enemy: self.state.enemy.clone(),
            log: LogEntry::new(message, kind),
            delay: self.timing.outro,
        });
    }

    /// Applies the chosen offer and moves on to the next tier.
    ///
    /// An empty offer is skipped and returns `Ok(None)`.
    pub fn select_upgrade(&mut self, index: usize) -> Result<Option<&'static str>, GameError> {
        let chosen = match &self.phase {
            Phase::ChoosingUpgrade(offers) if offers.is_empty() => None,
            Phase::ChoosingUpgrade(offers) => match offers.get(index) {
                Some(offer) => Some(offer.clone()),
                None => {
                    return Err(GameError::SelectionOutOfRange {
                        index,
                        len: offers.len(),
                    })
                }
            },
            _ => return Err(self.wrong_phase("select an upgrade")),
        };

        let name = chosen.map(|offer| {
            self.state
                .upgrades
                .apply_offer(&offer, &mut self.state.hero, &mut self.rng);
            offer.name()
        });
        if name.is_none() {
            info!("no upgrades available, skipping");
        }
        self.advance();
        Ok(name)
    }

    /// Moves on to the next tier without taking an upgrade.
    pub fn skip_upgrade(&mut self) -> Result<(), GameError> {
        match self.phase {
            Phase::ChoosingUpgrade(_) => {
                self.advance();
                Ok(())
            }
            _ => Err(self.wrong_phase("skip an upgrade")),
        }
    }

    fn advance(&mut self) {
        self.state.tier += 1;
        self.state.enemy = generate_enemy(self.state.tier, &mut self.rng);
        self.phase = Phase::Battling;
        debug!(tier = self.state.tier, enemy = %self.state.enemy.name, "next opponent");
    }

    /// Starts over at tier 1 with a fresh hero. Only the name carries over.
    pub fn restart(&mut self) {
        let name = self.state.hero.name.clone();
        self.state = RunState::new(&name, &mut self.rng);
        self.phase = Phase::Battling;
        info!(hero = %name, "run restarted");
    }

    /// Drives the state machine until the player quits.
    pub fn run(&mut self, frontend: &mut impl Frontend) -> RunSummary {
        let mut summary = RunSummary::default();
        let mut tally = GameTally::default();

        loop {
            match &self.phase {
                Phase::Battling => {
                    let tier = self.state.tier;
                    let outcome = self.battle();
                    tally.battles += 1;
                    tally.turns += outcome.turns;
                    if frontend.render_battle(tier, &outcome.frames) == Playback::QuitRequested {
                        info!("quit during battle");
                        summary.quit_mid_game = true;
                        break;
                    }
                }
                Phase::ChoosingUpgrade(offers) if offers.is_empty() => {
                    info!("no upgrades available, skipping");
                    self.advance();
                }
                Phase::ChoosingUpgrade(offers) => {
                    let len = offers.len();
                    let Some(index) = frontend.choose_upgrade(&self.state.hero, offers) else {
                        info!("quit during upgrade selection");
                        summary.quit_mid_game = true;
                        break;
                    };
                    let index = if index >= len {
                        warn!(index, len, "upgrade selection out of range, clamping");
                        len - 1
                    } else {
                        index
                    };
                    if let Err(e) = self.select_upgrade(index) {
                        warn!(error = %e, "upgrade selection rejected");
                    }
                }
                Phase::GameOver { won } => {
                    let won = *won;
                    summary.games.push(GameRecord {
                        won,
                        tier_reached: self.state.tier,
                        battles: tally.battles,
                        turns: tally.turns,
                        killed_by: (!won).then(|| self.state.enemy.name.clone()),
                        upgrades: self.state.upgrades.acquired(),
                    });
                    tally = GameTally::default();

                    match frontend.end_of_game(won, &self.state.hero) {
                        EndChoice::Restart => self.restart(),
                        EndChoice::Quit => break,
                    }
                }
            }
        }

        summary
    }

    fn wrong_phase(&self, action: &'static str) -> GameError {
        GameError::WrongPhase {
            action,
            phase: self.phase.name(),
        }
    }
}
