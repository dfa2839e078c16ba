// ═══════════════════════════════════════════════════════════════════════
// Tall strategy — builds one dominant stack instead of spreading wide.
// Reinforcements go to the largest frontier stack and the end-of-turn
// maneuver funnels the next-largest stacks into it.
// ═══════════════════════════════════════════════════════════════════════

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use risk_engine::map;
use risk_engine::strategy::{BoardView, Invasion, Maneuver, Strategy};
use risk_engine::types::TerritoryId;

pub struct TallStrategy {
    rng: ChaCha8Rng,
}

impl TallStrategy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// A frontier territory borders at least one non-owned territory.
    fn is_frontier(view: &BoardView, territory: TerritoryId) -> bool {
        map::neighbors(territory)
            .iter()
            .any(|&n| view.owner(n) != Some(view.viewer()))
    }

    /// Largest owned frontier stack, if any.
    fn biggest_frontier(view: &BoardView) -> Option<TerritoryId> {
        view.owned()
            .iter()
            .copied()
            .filter(|&t| Self::is_frontier(view, t))
            .max_by_key(|&t| view.troops(t))
    }
}

impl Strategy for TallStrategy {
    fn name(&self) -> &str {
        "Tall"
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
        match Self::biggest_frontier(view) {
            Some(t) => t,
            None => *view
                .owned()
                .iter()
                .next()
                .expect("placement is only requested while holdings exist"),
        }
    }

    fn allocate_reinforcements(
        &mut self,
        view: &BoardView,
        granted: u32,
    ) -> Vec<(TerritoryId, u32)> {
        if granted == 0 {
            return Vec::new();
        }
        let target = Self::biggest_frontier(view)
            .or_else(|| view.owned().iter().next().copied());
        match target {
            Some(t) => vec![(t, granted)],
            None => Vec::new(),
        }
    }

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

    /// Pull the second- or third-largest stack into the main one when
    /// they share a connected component.
    fn choose_maneuver(
        &mut self,
        view: &BoardView,
        candidates: &[(TerritoryId, Vec<TerritoryId>)],
    ) -> Option<Maneuver> {
        let main = Self::biggest_frontier(view)?;
        let mut by_size: Vec<TerritoryId> = view.owned().iter().copied().collect();
        by_size.sort_by_key(|&t| std::cmp::Reverse(view.troops(t)));

        for &source in by_size.iter().filter(|&&t| t != main).take(2) {
            if view.troops(source) <= 1 {
                continue;
            }
            let reachable = candidates
                .iter()
                .find(|(s, _)| *s == source)
                .map(|(_, targets)| targets.contains(&main))
                .unwrap_or(false);
            if reachable {
                return Some(Maneuver {
                    from: source,
                    to: main,
                    troops: view.troops(source) - 1,
                });
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use risk_engine::setup::create_game;

    #[test]
    fn full_game_against_itself_completes() {
        let mut game = create_game(2, 314);
        let mut strategies: Vec<Box<dyn Strategy>> = vec![
            Box::new(TallStrategy::new(1)),
            Box::new(TallStrategy::new(2)),
        ];
        let outcome = game.play_game(&mut strategies).unwrap();
        assert_eq!(outcome.fitness.len(), 2);
    }
}
