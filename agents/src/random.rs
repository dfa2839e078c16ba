// ═══════════════════════════════════════════════════════════════════════
// Random strategy — uniformly random legal-ish play.
// Serves as baseline opposition and for engine stability testing.
// ═══════════════════════════════════════════════════════════════════════

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use risk_engine::strategy::{BoardView, Invasion, Maneuver, Strategy};
use risk_engine::types::TerritoryId;

pub struct RandomStrategy {
    rng: ChaCha8Rng,
}

impl RandomStrategy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &str {
        "Random"
    }

    fn claim_territory(
        &mut self,
        _view: &BoardView,
        unclaimed: &[TerritoryId],
    ) -> TerritoryId {
        *unclaimed
            .choose(&mut self.rng)
            .expect("claim is only requested while territories remain")
    }

    fn place_initial_troop(&mut self, view: &BoardView) -> TerritoryId {
        let owned: Vec<TerritoryId> = view.owned().iter().copied().collect();
        *owned
            .choose(&mut self.rng)
            .expect("placement is only requested while holdings exist")
    }

    fn allocate_reinforcements(
        &mut self,
        view: &BoardView,
        granted: u32,
    ) -> Vec<(TerritoryId, u32)> {
        if granted == 0 {
            return Vec::new();
        }
        let owned: Vec<TerritoryId> = view.owned().iter().copied().collect();
        match owned.choose(&mut self.rng) {
            Some(&target) => vec![(target, granted)],
            None => Vec::new(),
        }
    }

    /// Biggest stack worth attacking with (more than 3 troops) throws
    /// everything but one troop at its weakest adjacent target.
    fn choose_invasion(
        &mut self,
        view: &BoardView,
        candidates: &[(TerritoryId, Vec<TerritoryId>)],
    ) -> Option<Invasion> {
        let entry = candidates
            .iter()
            .filter(|(_, targets)| !targets.is_empty())
            .max_by_key(|(source, _)| view.troops(*source))?;
        let from = entry.0;
        if view.troops(from) <= 3 {
            return None;
        }
        let to = *entry.1.iter().min_by_key(|&&t| view.troops(t))?;
        Some(Invasion {
            from,
            to,
            troops: view.troops(from) - 1,
        })
    }

    /// Random movable source, random reachable destination, random
    /// count leaving at least one troop behind.
    fn choose_maneuver(
        &mut self,
        view: &BoardView,
        candidates: &[(TerritoryId, Vec<TerritoryId>)],
    ) -> Option<Maneuver> {
        let movable: Vec<&(TerritoryId, Vec<TerritoryId>)> = candidates
            .iter()
            .filter(|(source, targets)| view.troops(*source) > 1 && !targets.is_empty())
            .collect();
        let entry = movable.choose(&mut self.rng)?;
        let to = *entry.1.choose(&mut self.rng)?;
        let troops = self.rng.gen_range(1..view.troops(entry.0));
        Some(Maneuver {
            from: entry.0,
            to,
            troops,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use risk_engine::setup::create_game;

    #[test]
    fn plays_full_games_to_completion() {
        let mut game = create_game(3, 2024);
        let mut strategies: Vec<Box<dyn Strategy>> = vec![
            Box::new(RandomStrategy::new(1)),
            Box::new(RandomStrategy::new(2)),
            Box::new(RandomStrategy::new(3)),
        ];
        let outcome = game.play_game(&mut strategies).unwrap();
        assert_eq!(outcome.fitness.len(), 3);
        assert!(outcome.rounds_played <= game.config().max_rounds);
    }

    #[test]
    fn same_seeds_reproduce_the_same_game() {
        let play = || {
            let mut game = create_game(4, 55);
            let mut strategies: Vec<Box<dyn Strategy>> = (0..4)
                .map(|i| Box::new(RandomStrategy::new(100 + i)) as Box<dyn Strategy>)
                .collect();
            game.play_game(&mut strategies).unwrap()
        };
        let first = play();
        let second = play();
        assert_eq!(first.winner, second.winner);
        assert_eq!(first.fitness, second.fitness);
    }
}
