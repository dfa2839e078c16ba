// ═══════════════════════════════════════════════════════════════════════
// Fitness scoring — pure readout of a terminal game state, used by the
// tournament and evolution layers to rank strategies.
// ═══════════════════════════════════════════════════════════════════════

use crate::engine::Game;
use crate::types::PlayerId;

/// Score every player of a finished game, in stored player order:
/// territories held, plus the base reinforcement rate those holdings
/// produce, plus the win bonus for the winner.
pub fn fitness_scores(game: &Game, winner: PlayerId) -> Vec<u32> {
    game.players()
        .iter()
        .map(|player| {
            let mut score =
                player.territory_count() as u32 + player.base_reinforcement();
            if player.id() == winner {
                score += game.config().win_bonus;
            }
            score
        })
        .collect()
}
