// ═══════════════════════════════════════════════════════════════════════
// Game engine — the synchronous turn loop and phase machine.
//
// Architecture:
//   The engine owns all state and calls the strategies directly:
//   CLAIM → PLACEMENT → MAIN rounds (reinforce, invade loop, maneuver
//   per active player) → TERMINAL. Strategies receive a BoardView and
//   the per-player candidate lists; they never touch the Game itself.
//
// Strategy-mistake policy:
//   The common sloppy proposals on the invasion and maneuver paths
//   (attacking your own territory, committing more troops than the
//   source holds) are tolerated: logged, skipped, and in the maneuver
//   case punished with a one-unit loss. Everything else — allocating
//   past the grant, touching unowned territories, claiming a taken
//   territory — aborts the game with an EngineError.
// ═══════════════════════════════════════════════════════════════════════

use crate::cards::{self, Deck};
use crate::fitness;
use crate::map::{self, ALL_TERRITORIES, TABLE_SIZE};
use crate::player::Player;
use crate::strategy::{BoardView, Strategy};
use crate::territory::{AttackOutcome, Territory};
use crate::types::{EngineError, GameConfig, PlayerId, TerritoryId};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Terminal summary of one playout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameOutcome {
    pub winner: PlayerId,
    /// Fitness per player, in stored player order.
    pub fitness: Vec<u32>,
    pub rounds_played: u32,
}

/// A full game: board, players, deck, and the seeded RNG every random
/// event draws from. Reusable across playouts via `reset_game`.
pub struct Game {
    territories: Vec<Territory>,
    players: Vec<Player>,
    turn_order: Vec<PlayerId>,
    deck: Deck,
    sets_traded: u32,
    round: u32,
    config: GameConfig,
    rng: ChaCha8Rng,
    seed: u64,
}

impl Game {
    pub(crate) fn new(players: Vec<Player>, config: GameConfig, seed: u64) -> Self {
        let territories = (0..TABLE_SIZE as u8)
            .map(|i| Territory::new(TerritoryId(i)))
            .collect();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::new(&mut rng);
        let turn_order = players.iter().map(Player::id).collect();
        let mut game = Self {
            territories,
            players,
            turn_order,
            deck,
            sets_traded: 0,
            round: 0,
            config,
            rng,
            seed,
        };
        game.reset_game();
        game
    }

    // ── Accessors ──────────────────────────────────────────────────────

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn territory(&self, id: TerritoryId) -> &Territory {
        &self.territories[id.index()]
    }

    pub(crate) fn territory_mut(&mut self, id: TerritoryId) -> &mut Territory {
        &mut self.territories[id.index()]
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub(crate) fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    /// Players in stored order (PlayerId order), not turn order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn turn_order(&self) -> &[PlayerId] {
        &self.turn_order
    }

    pub fn sets_traded(&self) -> u32 {
        self.sets_traded
    }

    /// Total units a player has on the board plus their pool.
    pub fn total_units(&self, player: PlayerId) -> u32 {
        let deployed: u32 = self
            .player(player)
            .owned()
            .iter()
            .map(|&t| self.territory(t).troops())
            .sum();
        deployed + self.player(player).unassigned()
    }

    // ── Lifecycle ──────────────────────────────────────────────────────

    /// Change the seed for subsequent playouts. Takes effect on the
    /// next `reset_game`.
    pub fn reseed(&mut self, seed: u64) {
        self.seed = seed;
    }

    /// Restore the pre-game state: empty board, full pools, fresh deck,
    /// reshuffled turn order. Reseeds the RNG so two reset+play cycles
    /// with the same seed are identical.
    pub fn reset_game(&mut self) {
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
        for territory in &mut self.territories {
            territory.reset();
        }
        for player in &mut self.players {
            player.reset();
        }
        self.turn_order = self.players.iter().map(Player::id).collect();
        self.turn_order.shuffle(&mut self.rng);
        self.deck = Deck::new(&mut self.rng);
        self.sets_traded = 0;
        self.round = 0;
    }

    /// Play one full game from scratch. `strategies` must be indexed by
    /// PlayerId, one per player.
    pub fn play_game(
        &mut self,
        strategies: &mut [Box<dyn Strategy>],
    ) -> Result<GameOutcome, EngineError> {
        assert_eq!(
            strategies.len(),
            self.players.len(),
            "one strategy per player"
        );
        self.reset_game();

        self.run_claim(strategies)?;
        self.run_placement(strategies)?;

        loop {
            let order = self.turn_order.clone();
            for player in order {
                if self.player(player).is_eliminated() {
                    continue;
                }
                self.reinforce_phase(player, strategies)?;
                self.invade_phase(player, strategies)?;
                self.maneuver_phase(player, strategies)?;
            }
            self.round += 1;

            let active = self.players.iter().filter(|p| !p.is_eliminated()).count();
            if active <= 1 || self.round >= self.config.max_rounds {
                break;
            }
        }

        // Reinforcement rates can lag the final conquests; bring them
        // up to date before scoring the terminal state.
        for player in &mut self.players {
            player.base_reinforcement_for_turn();
        }
        let winner = self.decide_winner();
        let fitness = fitness::fitness_scores(self, winner);
        Ok(GameOutcome {
            winner,
            fitness,
            rounds_played: self.round,
        })
    }

    /// Most territories wins; ties go to the earliest stored player.
    fn decide_winner(&self) -> PlayerId {
        let mut winner = self.players[0].id();
        let mut best = self.players[0].territory_count();
        for player in &self.players[1..] {
            if player.territory_count() > best {
                best = player.territory_count();
                winner = player.id();
            }
        }
        winner
    }

    // ── CLAIM ──────────────────────────────────────────────────────────

    pub(crate) fn run_claim(
        &mut self,
        strategies: &mut [Box<dyn Strategy>],
    ) -> Result<(), EngineError> {
        for pick in 0..ALL_TERRITORIES.len() {
            let player = self.turn_order[pick % self.turn_order.len()];
            let unclaimed: Vec<TerritoryId> = ALL_TERRITORIES
                .iter()
                .copied()
                .filter(|&t| self.territory(t).owner().is_none())
                .collect();
            let choice = {
                let view = BoardView::new(self, player);
                strategies[player.index()].claim_territory(&view, &unclaimed)
            };
            if self.territory(choice).owner().is_some() {
                return Err(EngineError::UnavailableClaim(choice));
            }
            let cell = self.territory_mut(choice);
            cell.set_owner(player);
            cell.set_troops(1);
            let p = self.player_mut(player);
            p.grant(choice);
            p.take_unit();
        }
        Ok(())
    }

    // ── PLACEMENT ──────────────────────────────────────────────────────

    pub(crate) fn run_placement(
        &mut self,
        strategies: &mut [Box<dyn Strategy>],
    ) -> Result<(), EngineError> {
        while self.players.iter().any(|p| p.unassigned() > 0) {
            let order = self.turn_order.clone();
            for player in order {
                if self.player(player).unassigned() == 0 {
                    continue;
                }
                let choice = {
                    let view = BoardView::new(self, player);
                    strategies[player.index()].place_initial_troop(&view)
                };
                if !self.player(player).owns(choice) {
                    return Err(EngineError::NotOwned {
                        territory: choice,
                        player,
                    });
                }
                self.territory_mut(choice).add_troops(1)?;
                self.player_mut(player).take_unit();
            }
        }
        Ok(())
    }

    // ── MAIN: reinforce ────────────────────────────────────────────────

    pub(crate) fn reinforce_phase(
        &mut self,
        player: PlayerId,
        strategies: &mut [Box<dyn Strategy>],
    ) -> Result<(), EngineError> {
        let mut granted = self.player_mut(player).base_reinforcement_for_turn();

        // Card trade happens before the cap check, so a capped player
        // still burns a completed set.
        if let Some(set) = self.player(player).hand().best_set() {
            let value = cards::set_value(self.sets_traded);
            self.player_mut(player).hand_mut().remove_set(&set);
            self.sets_traded += 1;
            granted += value;
            debug!(%player, value, "traded card set");
        }

        if self.total_units(player) + granted >= self.config.unit_cap {
            debug!(%player, "unit cap reached, no reinforcements");
            granted = 0;
        }
        if granted > 0 {
            self.player_mut(player).give_units(granted);
        }

        let allocation = {
            let view = BoardView::new(self, player);
            strategies[player.index()].allocate_reinforcements(&view, granted)
        };
        let requested: u32 = allocation.iter().map(|(_, n)| n).sum();
        if requested > granted {
            return Err(EngineError::AllocationExceedsGrant { requested, granted });
        }
        for (territory, troops) in allocation {
            if troops == 0 {
                continue;
            }
            if !self.player(player).owns(territory) {
                return Err(EngineError::NotOwned { territory, player });
            }
            self.territory_mut(territory).add_troops(troops)?;
        }

        // Whatever was not placed is forfeit.
        self.player_mut(player).clear_units();
        Ok(())
    }

    // ── MAIN: invade ───────────────────────────────────────────────────

    pub(crate) fn invade_phase(
        &mut self,
        player: PlayerId,
        strategies: &mut [Box<dyn Strategy>],
    ) -> Result<(), EngineError> {
        let mut conquered_any = false;

        loop {
            self.player_mut(player).refresh_connectivity();
            let proposal = {
                let view = BoardView::new(self, player);
                let candidates = self.player(player).invasion_candidates();
                strategies[player.index()].choose_invasion(&view, candidates)
            };
            let Some(invasion) = proposal else { break };

            if !self.player(player).owns(invasion.from) {
                warn!(%player, from = %invasion.from, "invasion from unowned territory, skipping");
                continue;
            }
            if self.player(player).owns(invasion.to) {
                debug!(%player, to = %invasion.to, "self-invasion proposed, skipping");
                continue;
            }
            let available = self.territory(invasion.from).troops();
            if invasion.troops == 0 || invasion.troops > available {
                warn!(
                    %player,
                    from = %invasion.from,
                    committed = invasion.troops,
                    available,
                    "overcommitted invasion, skipping"
                );
                continue;
            }

            self.territory_mut(invasion.from).remove_troops(invasion.troops)?;
            let outcome = self.territories[invasion.to.index()]
                .resolve_attack(invasion.troops, &mut self.rng)?;

            if let AttackOutcome::Conquered { survivors } = outcome {
                let previous = self.territory(invasion.to).owner();
                if let Some(loser) = previous {
                    self.player_mut(loser).revoke(invasion.to);
                }
                let cell = self.territory_mut(invasion.to);
                cell.set_owner(player);
                cell.set_troops(survivors);
                self.player_mut(player).grant(invasion.to);
                conquered_any = true;
                debug!(%player, to = %map::territory_name(invasion.to), "conquered");
            }
        }

        // One card per turn, however many conquests.
        if conquered_any {
            let card = self.deck.draw(&mut self.rng);
            self.player_mut(player).hand_mut().add(card);
        }
        Ok(())
    }

    // ── MAIN: maneuver ─────────────────────────────────────────────────

    pub(crate) fn maneuver_phase(
        &mut self,
        player: PlayerId,
        strategies: &mut [Box<dyn Strategy>],
    ) -> Result<(), EngineError> {
        self.player_mut(player).refresh_connectivity();
        let proposal = {
            let view = BoardView::new(self, player);
            let candidates = self.player(player).maneuver_candidates();
            strategies[player.index()].choose_maneuver(&view, candidates)
        };
        let Some(maneuver) = proposal else {
            return Ok(());
        };
        if maneuver.troops == 0 {
            return Ok(());
        }
        if !self.player(player).owns(maneuver.from)
            || !self.player(player).owns(maneuver.to)
        {
            warn!(%player, from = %maneuver.from, to = %maneuver.to, "maneuver outside holdings, skipping");
            return Ok(());
        }

        let available = self.territory(maneuver.from).troops();
        if maneuver.troops > available {
            // Overcommitting costs a unit when the source can spare one.
            if available > 1 {
                self.territory_mut(maneuver.from).remove_troops(1)?;
                warn!(
                    %player,
                    from = %maneuver.from,
                    committed = maneuver.troops,
                    available,
                    "overcommitted maneuver, one-unit penalty"
                );
            }
            return Ok(());
        }

        self.territory_mut(maneuver.from).remove_troops(maneuver.troops)?;
        self.territory_mut(maneuver.to).add_troops(maneuver.troops)?;
        Ok(())
    }
}
