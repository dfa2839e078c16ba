// ═══════════════════════════════════════════════════════════════════════
// Game runner — plays one headless game and packages the terminal
// state into a storable result.
// ═══════════════════════════════════════════════════════════════════════

use risk_engine::engine::Game;
use risk_engine::strategy::Strategy;
use risk_engine::types::{EngineError, PlayerId};
use serde::{Deserialize, Serialize};

/// Result of a completed game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameResult {
    pub seed: u64,
    pub winner: PlayerId,
    pub rounds_played: u32,
    pub player_results: Vec<PlayerResult>,
}

/// Per-player terminal summary, in stored player order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerResult {
    pub player: PlayerId,
    pub strategy_name: String,
    pub territories: u32,
    pub reinforcement_rate: u32,
    pub fitness: u32,
}

/// Play one game on an existing `Game` with the given seed. The game
/// resets itself, so the same instance can be reused across seeds.
pub fn run_game(
    game: &mut Game,
    strategies: &mut [Box<dyn Strategy>],
    seed: u64,
) -> Result<GameResult, EngineError> {
    game.reseed(seed);
    let outcome = game.play_game(strategies)?;

    let player_results = game
        .players()
        .iter()
        .map(|player| PlayerResult {
            player: player.id(),
            strategy_name: strategies[player.id().index()].name().to_string(),
            territories: player.territory_count() as u32,
            reinforcement_rate: player.base_reinforcement(),
            fitness: outcome.fitness[player.id().index()],
        })
        .collect();

    Ok(GameResult {
        seed,
        winner: outcome.winner,
        rounds_played: outcome.rounds_played,
        player_results,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use risk_agents::RandomStrategy;
    use risk_engine::setup::create_game;

    fn lineup(count: usize, seed: u64) -> Vec<Box<dyn Strategy>> {
        (0..count)
            .map(|i| {
                Box::new(RandomStrategy::new(seed.wrapping_add(i as u64)))
                    as Box<dyn Strategy>
            })
            .collect()
    }

    #[test]
    fn result_covers_every_player() {
        let mut game = create_game(3, 0);
        let mut strategies = lineup(3, 90);
        let result = run_game(&mut game, &mut strategies, 42).unwrap();
        assert_eq!(result.seed, 42);
        assert_eq!(result.player_results.len(), 3);
        let winner = &result.player_results[result.winner.index()];
        assert!(winner.fitness >= 20);
    }

    #[test]
    fn one_game_instance_reproduces_across_reruns() {
        let mut game = create_game(3, 0);
        let first = {
            let mut strategies = lineup(3, 7);
            run_game(&mut game, &mut strategies, 500).unwrap()
        };
        let second = {
            let mut strategies = lineup(3, 7);
            run_game(&mut game, &mut strategies, 500).unwrap()
        };
        assert_eq!(first.winner, second.winner);
        assert_eq!(first.rounds_played, second.rounds_played);
    }
}
