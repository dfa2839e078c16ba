// ═══════════════════════════════════════════════════════════════════════
// Game setup — builds a ready-to-play Game for N players.
// ═══════════════════════════════════════════════════════════════════════

use crate::engine::Game;
use crate::player::Player;
use crate::types::{GameConfig, PlayerId};

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 5;

/// Starting infantry pool per player for a given table size.
///
/// Panics outside [2, 5] players; `create_game` checks first.
pub fn starting_infantry(player_count: usize) -> u32 {
    match player_count {
        2 => 40,
        3 => 35,
        4 => 30,
        5 => 25,
        n => panic!("unsupported player count {}", n),
    }
}

/// Build a game with the default config.
pub fn create_game(player_count: usize, seed: u64) -> Game {
    create_game_with_config(player_count, seed, GameConfig::default())
}

/// Build a game with an explicit config. Player ids run 0..count in
/// stored order; the turn order is shuffled from the seed.
pub fn create_game_with_config(
    player_count: usize,
    seed: u64,
    config: GameConfig,
) -> Game {
    assert!(
        (MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count),
        "player count must be between {} and {}",
        MIN_PLAYERS,
        MAX_PLAYERS
    );
    let pool = starting_infantry(player_count);
    let players = (0..player_count)
        .map(|i| Player::new(PlayerId(i as u8), pool))
        .collect();
    Game::new(players, config, seed)
}
