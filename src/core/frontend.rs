//! The boundary between the progression engine and whatever shows it.

use crate::combat::{BattleFrame, Combatant};
use crate::upgrades::OfferedUpgrade;

/// How battle playback ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    Finished,
    /// The player asked to quit. Only honored between frames.
    QuitRequested,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndChoice {
    Restart,
    Quit,
}

/// Presentation and input for a run. Implementations never touch run state;
/// they only report what the player wants.
pub trait Frontend {
    /// Plays back a battle that has already been fully computed. `tier` is the
    /// tier the battle was fought at.
    fn render_battle(&mut self, tier: u32, frames: &[BattleFrame]) -> Playback;

    /// Returns the index of the chosen offer, or `None` to quit.
    fn choose_upgrade(&mut self, hero: &Combatant, offers: &[OfferedUpgrade]) -> Option<usize>;

    fn end_of_game(&mut self, won: bool, hero: &Combatant) -> EndChoice;
}
