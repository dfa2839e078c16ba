// ═══════════════════════════════════════════════════════════════════════
// Aggressive strategy — greedy expansion steered by a 10-gene weight
// vector. The vector is the individual evolved by the tournament
// crate's genetic search; the default genes give sane hand-tuned play.
// ═══════════════════════════════════════════════════════════════════════

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use risk_engine::map;
use risk_engine::strategy::{BoardView, Invasion, Maneuver, Strategy};
use risk_engine::types::{Region, TerritoryId};
use serde::{Deserialize, Serialize};

/// Chokepoints and landing zones worth holding, with a relative value.
/// Indonesia and Mexico guard continent doors; the rest are bridges.
const POINTS_OF_INTEREST: [(TerritoryId, f64); 11] = [
    (map::INDONESIA, 1.0),
    (map::MEXICO, 1.0),
    (map::VENEZUELA, 0.75),
    (map::GREENLAND, 0.75),
    (map::BRAZIL, 0.75),
    (map::NORTH_AFRICA, 0.75),
    (map::EAST_AFRICA, 0.5),
    (map::EGYPT, 0.5),
    (map::ALASKA, 0.5),
    (map::SIAM, 0.25),
    (map::KAMCHATKA, 0.25),
];

/// Regions in claim-preference order: cheap continents first.
const CLAIM_PREFERENCE: [Region; 6] = [
    Region::NorthAmerica,
    Region::SouthAmerica,
    Region::Australia,
    Region::Africa,
    Region::Europe,
    Region::Asia,
];

const GENE_COUNT: usize = 10;

// Gene roles. The last gene scales the attack threshold.
const W_POI: usize = 0;
const W_REGION: usize = 1;
const W_ADVANTAGE: usize = 2;
const W_STEP: usize = 3;
const W_WEAKNESS: usize = 4;
const W_THRESHOLD: usize = 9;

/// The genetic individual: all genes live in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggressiveWeights(pub [f64; GENE_COUNT]);

impl Default for AggressiveWeights {
    fn default() -> Self {
        let mut genes = [1.0; GENE_COUNT];
        genes[W_THRESHOLD] = 0.7;
        Self(genes)
    }
}

impl AggressiveWeights {
    pub fn random(rng: &mut impl Rng) -> Self {
        let mut genes = [0.0; GENE_COUNT];
        for gene in &mut genes {
            *gene = rng.gen_range(0.0..1.0);
        }
        Self(genes)
    }

    pub fn genes(&self) -> &[f64; GENE_COUNT] {
        &self.0
    }

    /// Minimum attack score, on the 0..10 scale the scoring produces.
    fn threshold(&self) -> f64 {
        self.0[W_THRESHOLD] * 10.0
    }
}

pub struct AggressiveStrategy {
    rng: ChaCha8Rng,
    weights: AggressiveWeights,
}

impl AggressiveStrategy {
    pub fn new(seed: u64) -> Self {
        Self::with_weights(seed, AggressiveWeights::default())
    }

    pub fn with_weights(seed: u64, weights: AggressiveWeights) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            weights,
        }
    }

    pub fn weights(&self) -> &AggressiveWeights {
        &self.weights
    }

    fn poi_value(territory: TerritoryId) -> f64 {
        POINTS_OF_INTEREST
            .iter()
            .find(|(t, _)| *t == territory)
            .map(|(_, v)| *v)
            .unwrap_or(0.0)
    }

    /// Would capturing `target` hand the viewer its whole region?
    fn completes_region(view: &BoardView, target: TerritoryId) -> bool {
        map::region_members(map::region(target))
            .iter()
            .all(|&t| t == target || view.owner(t) == Some(view.viewer()))
    }

    fn attack_score(&self, view: &BoardView, from: TerritoryId, to: TerritoryId) -> f64 {
        let w = self.weights.genes();
        let mut score = w[W_POI] * Self::poi_value(to);
        if Self::completes_region(view, to) {
            score += w[W_REGION];
        }
        let advantage =
            (view.troops(from) as f64 - view.troops(to) as f64).clamp(0.0, 10.0) / 10.0;
        score += w[W_ADVANTAGE] * advantage;
        // One more territory away from the next reinforcement step.
        let owned = view.owned().len() as u32;
        if (owned + 1) % 3 == 0 && owned + 1 >= 9 {
            score += w[W_STEP];
        }
        score += w[W_WEAKNESS] / view.troops(to).max(1) as f64;
        score
    }
}

impl Strategy for AggressiveStrategy {
    fn name(&self) -> &str {
        "Aggressive"
    }

    /// Claim inside the most preferred region that still has openings.
    fn claim_territory(
        &mut self,
        _view: &BoardView,
        unclaimed: &[TerritoryId],
    ) -> TerritoryId {
        for region in CLAIM_PREFERENCE {
            let open: Vec<TerritoryId> = unclaimed
                .iter()
                .copied()
                .filter(|&t| map::region(t) == region)
                .collect();
            if let Some(&pick) = open.choose(&mut self.rng) {
                return pick;
            }
        }
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

    /// Score every (source, target) pair; strike the best one if it
    /// clears the threshold, otherwise fall back to the biggest-stack
    /// rule so the strategy keeps expanding.
    fn choose_invasion(
        &mut self,
        view: &BoardView,
        candidates: &[(TerritoryId, Vec<TerritoryId>)],
    ) -> Option<Invasion> {
        let mut best: Option<(f64, TerritoryId, TerritoryId)> = None;
        for (source, targets) in candidates {
            if view.troops(*source) <= 3 {
                continue;
            }
            for &target in targets {
                let score = self.attack_score(view, *source, target);
                if best.map_or(true, |(b, _, _)| score > b) {
                    best = Some((score, *source, target));
                }
            }
        }

        if let Some((score, from, to)) = best {
            if score >= self.weights.threshold() {
                return Some(Invasion {
                    from,
                    to,
                    troops: view.troops(from) - 1,
                });
            }
        }

        // Fallback: biggest stack on the weakest neighbor.
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
    fn default_weights_are_in_range() {
        let weights = AggressiveWeights::default();
        for &gene in weights.genes() {
            assert!((0.0..=1.0).contains(&gene));
        }
    }

    #[test]
    fn random_weights_are_seed_deterministic() {
        let mut a = ChaCha8Rng::seed_from_u64(7);
        let mut b = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(
            AggressiveWeights::random(&mut a),
            AggressiveWeights::random(&mut b)
        );
    }

    #[test]
    fn weights_round_trip_through_json() {
        let weights = AggressiveWeights::default();
        let json = serde_json::to_string(&weights).unwrap();
        let back: AggressiveWeights = serde_json::from_str(&json).unwrap();
        assert_eq!(weights, back);
    }

    #[test]
    fn beats_nobody_in_particular_but_finishes_games() {
        let mut game = create_game(3, 808);
        let mut strategies: Vec<Box<dyn Strategy>> = vec![
            Box::new(AggressiveStrategy::new(1)),
            Box::new(AggressiveStrategy::new(2)),
            Box::new(AggressiveStrategy::new(3)),
        ];
        let outcome = game.play_game(&mut strategies).unwrap();
        assert_eq!(outcome.fitness.len(), 3);
    }
}
