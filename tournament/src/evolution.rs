// ═══════════════════════════════════════════════════════════════════════
// Evolution — population search over the aggressive strategy's weight
// vector. Fitness of an individual is its mean game fitness over a
// batch of playouts against opponents sampled from the population.
// Evaluation is parallel; every worker builds its own Game, and every
// game seed is derived from (generation, individual, game index) so a
// run is reproducible regardless of thread scheduling.
// ═══════════════════════════════════════════════════════════════════════

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use risk_agents::{AggressiveStrategy, AggressiveWeights};
use risk_engine::setup::create_game;
use risk_engine::strategy::Strategy;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EvolutionConfig {
    pub generations: usize,
    pub population_size: usize,
    /// Games averaged per fitness evaluation.
    pub games_per_eval: usize,
    pub players_per_game: usize,
    pub base_seed: u64,
    /// Per-gene mutation probability.
    pub mutation_rate: f64,
    /// Maximum absolute jitter applied to a mutated gene.
    pub mutation_step: f64,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            generations: 30,
            population_size: 30,
            games_per_eval: 10,
            players_per_game: 4,
            base_seed: 12345,
            mutation_rate: 0.15,
            mutation_step: 0.25,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionOutcome {
    pub best: AggressiveWeights,
    pub best_fitness: f64,
    pub generations_run: usize,
}

/// Run the full evolutionary loop and return the best individual seen.
pub fn evolve(config: &EvolutionConfig) -> EvolutionOutcome {
    assert!(config.population_size >= 2, "population needs at least two");
    assert!(
        (2..=5).contains(&config.players_per_game),
        "games support 2 to 5 players"
    );

    let mut rng = ChaCha8Rng::seed_from_u64(config.base_seed);
    let mut population: Vec<AggressiveWeights> = (0..config.population_size)
        .map(|_| AggressiveWeights::random(&mut rng))
        .collect();

    let mut best = population[0].clone();
    let mut best_fitness = f64::MIN;

    for generation in 0..config.generations {
        let scores: Vec<f64> = population
            .par_iter()
            .enumerate()
            .map(|(index, individual)| {
                evaluate(individual, &population, config, generation as u64, index as u64)
            })
            .collect();

        let mut order: Vec<usize> = (0..population.len()).collect();
        order.sort_by(|&a, &b| {
            scores[b]
                .partial_cmp(&scores[a])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let top = order[0];
        if scores[top] > best_fitness {
            best_fitness = scores[top];
            best = population[top].clone();
        }
        let mean: f64 = scores.iter().sum::<f64>() / scores.len() as f64;
        info!(generation, best = scores[top], mean, "generation complete");

        // Truncation selection: the top half survives, the rest is
        // rebuilt from crossover plus jitter mutation.
        let survivors: Vec<AggressiveWeights> = order
            .iter()
            .take((population.len() / 2).max(1))
            .map(|&i| population[i].clone())
            .collect();
        let mut next = survivors.clone();
        while next.len() < config.population_size {
            let mother = survivors
                .choose(&mut rng)
                .cloned()
                .unwrap_or_else(AggressiveWeights::default);
            let father = survivors
                .choose(&mut rng)
                .cloned()
                .unwrap_or_else(AggressiveWeights::default);
            let mut child = crossover(&mother, &father, &mut rng);
            mutate(&mut child, config, &mut rng);
            next.push(child);
        }
        population = next;
    }

    EvolutionOutcome {
        best,
        best_fitness,
        generations_run: config.generations,
    }
}

/// Mean fitness of `individual` seated first against opponents drawn
/// from the current population.
fn evaluate(
    individual: &AggressiveWeights,
    population: &[AggressiveWeights],
    config: &EvolutionConfig,
    generation: u64,
    index: u64,
) -> f64 {
    let mut total = 0.0;
    for game_index in 0..config.games_per_eval {
        let seed = config
            .base_seed
            .wrapping_add(generation.wrapping_mul(1_000_003))
            .wrapping_add(index.wrapping_mul(7919))
            .wrapping_add(game_index as u64 * 104_729);

        let mut game = create_game(config.players_per_game, seed);
        let mut opponent_rng = ChaCha8Rng::seed_from_u64(seed ^ 0x6f70_706f);
        let mut strategies: Vec<Box<dyn Strategy>> =
            Vec::with_capacity(config.players_per_game);
        strategies.push(Box::new(AggressiveStrategy::with_weights(
            seed,
            individual.clone(),
        )));
        for slot in 1..config.players_per_game {
            let rival = population
                .choose(&mut opponent_rng)
                .cloned()
                .unwrap_or_default();
            strategies.push(Box::new(AggressiveStrategy::with_weights(
                seed.wrapping_add(slot as u64),
                rival,
            )));
        }

        if let Ok(outcome) = game.play_game(&mut strategies) {
            total += outcome.fitness[0] as f64;
        }
    }
    total / config.games_per_eval as f64
}

/// Uniform crossover: each gene comes from either parent.
fn crossover(
    mother: &AggressiveWeights,
    father: &AggressiveWeights,
    rng: &mut impl Rng,
) -> AggressiveWeights {
    let mut genes = *mother.genes();
    for (gene, &theirs) in genes.iter_mut().zip(father.genes()) {
        if rng.gen_bool(0.5) {
            *gene = theirs;
        }
    }
    AggressiveWeights(genes)
}

fn mutate(child: &mut AggressiveWeights, config: &EvolutionConfig, rng: &mut impl Rng) {
    for gene in &mut child.0 {
        if rng.gen_bool(config.mutation_rate) {
            *gene = (*gene + rng.gen_range(-config.mutation_step..config.mutation_step))
                .clamp(0.0, 1.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_config() -> EvolutionConfig {
        EvolutionConfig {
            generations: 2,
            population_size: 4,
            games_per_eval: 1,
            players_per_game: 2,
            base_seed: 99,
            ..EvolutionConfig::default()
        }
    }

    #[test]
    fn evolve_is_reproducible() {
        let first = evolve(&tiny_config());
        let second = evolve(&tiny_config());
        assert_eq!(first.best, second.best);
        assert_eq!(first.best_fitness, second.best_fitness);
        assert_eq!(first.generations_run, 2);
    }

    #[test]
    fn genes_stay_in_range_under_mutation() {
        let config = EvolutionConfig {
            mutation_rate: 1.0,
            ..EvolutionConfig::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut child = AggressiveWeights::default();
        for _ in 0..100 {
            mutate(&mut child, &config, &mut rng);
            for &gene in child.genes() {
                assert!((0.0..=1.0).contains(&gene));
            }
        }
    }
}
