use super::config::Strategy;
use crate::combat::{BattleFrame, Combatant};
use crate::core::{EndChoice, Frontend, Playback};
use crate::upgrades::OfferedUpgrade;
use rand::Rng;

/// A headless player: watches nothing, picks upgrades by strategy and quits
/// at the first game over.
pub struct AutoPilot<R: Rng> {
    strategy: Strategy,
    rng: R,
}

impl<R: Rng> AutoPilot<R> {
    pub fn new(strategy: Strategy, rng: R) -> Self {
        Self { strategy, rng }
    }

    pub fn pick(&mut self, offers: &[OfferedUpgrade]) -> usize {
        match self.strategy {
            Strategy::First => 0,
            Strategy::Random => self.rng.gen_range(0..offers.len()),
            Strategy::Greedy => offers
                .iter()
                .enumerate()
                .fold((0, 0), |best, (i, offer)| {
                    let rank = offer.rarity() as u32;
                    if rank > best.1 {
                        (i, rank)
                    } else {
                        best
                    }
                })
                .0,
        }
    }
}

impl<R: Rng> Frontend for AutoPilot<R> {
    fn render_battle(&mut self, _tier: u32, _frames: &[BattleFrame]) -> Playback {
        Playback::Finished
    }

    fn choose_upgrade(&mut self, _hero: &Combatant, offers: &[OfferedUpgrade]) -> Option<usize> {
        if offers.is_empty() {
            return None;
        }
        Some(self.pick(offers))
    }

    fn end_of_game(&mut self, _won: bool, _hero: &Combatant) -> EndChoice {
        EndChoice::Quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upgrades::find_upgrade;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn offer(name: &str) -> OfferedUpgrade {
        let definition = find_upgrade(name).expect("known upgrade");
        OfferedUpgrade {
            definition,
            description: definition.description.to_string(),
        }
    }

    #[test]
    fn test_greedy_picks_rarest() {
        let offers = vec![
            offer("Full Heal"),
            offer("Vampiric Strike"),
            offer("Second Wind"),
            offer("I'm Feeling Lucky"),
        ];
        let mut pilot = AutoPilot::new(Strategy::Greedy, ChaCha8Rng::seed_from_u64(1));
        assert_eq!(pilot.pick(&offers), 2);
    }

    #[test]
    fn test_first_and_random_stay_in_range() {
        let offers = vec![offer("Full Heal"), offer("Vitality"), offer("Berserker")];
        let mut first = AutoPilot::new(Strategy::First, ChaCha8Rng::seed_from_u64(1));
        assert_eq!(first.pick(&offers), 0);

        let mut random = AutoPilot::new(Strategy::Random, ChaCha8Rng::seed_from_u64(1));
        for _ in 0..50 {
            assert!(random.pick(&offers) < offers.len());
        }
    }
}
