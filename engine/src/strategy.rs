// ═══════════════════════════════════════════════════════════════════════
// Strategy interface — the engine consumes implementations of this
// trait, it never provides them. Strategies only ever see a BoardView,
// a read-only borrow of the live game, so they cannot mutate engine
// state by construction.
// ═══════════════════════════════════════════════════════════════════════

use crate::engine::Game;
use crate::types::{PlayerId, TerritoryId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A proposed attack: commit `troops` from `from` against `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invasion {
    pub from: TerritoryId,
    pub to: TerritoryId,
    pub troops: u32,
}

/// A proposed end-of-turn redeployment between two owned territories
/// connected through owned ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maneuver {
    pub from: TerritoryId,
    pub to: TerritoryId,
    pub troops: u32,
}

/// Read-only snapshot handed to every strategy decision.
pub struct BoardView<'a> {
    game: &'a Game,
    viewer: PlayerId,
}

impl<'a> BoardView<'a> {
    pub(crate) fn new(game: &'a Game, viewer: PlayerId) -> Self {
        Self { game, viewer }
    }

    pub fn viewer(&self) -> PlayerId {
        self.viewer
    }

    pub fn round(&self) -> u32 {
        self.game.round()
    }

    pub fn owner(&self, territory: TerritoryId) -> Option<PlayerId> {
        self.game.territory(territory).owner()
    }

    pub fn troops(&self, territory: TerritoryId) -> u32 {
        self.game.territory(territory).troops()
    }

    /// The viewer's holdings in ascending id order.
    pub fn owned(&self) -> &BTreeSet<TerritoryId> {
        self.game.player(self.viewer).owned()
    }

    pub fn player_count(&self) -> usize {
        self.game.players().len()
    }

    pub fn territory_count_of(&self, player: PlayerId) -> usize {
        self.game.player(player).territory_count()
    }
}

/// The five decisions a participant makes over the course of a game.
///
/// Candidate slices passed to `choose_invasion` / `choose_maneuver` are
/// `(source, targets)` pairs; a legal choice picks a source and one of
/// its targets. Illegal proposals on those two paths are tolerated by
/// the engine (logged no-ops or a one-unit penalty), everything else is
/// a hard error.
pub trait Strategy {
    fn name(&self) -> &str;

    /// Claim phase: pick one of the still-unclaimed territories.
    fn claim_territory(
        &mut self,
        view: &BoardView,
        unclaimed: &[TerritoryId],
    ) -> TerritoryId;

    /// Placement phase: pick one of your territories for a single
    /// troop from the starting pool.
    fn place_initial_troop(&mut self, view: &BoardView) -> TerritoryId;

    /// Reinforcement: distribute up to `granted` troops over your
    /// territories. Requests summing past the grant abort the game;
    /// anything left unallocated is forfeit.
    fn allocate_reinforcements(
        &mut self,
        view: &BoardView,
        granted: u32,
    ) -> Vec<(TerritoryId, u32)>;

    /// Invasion: propose an attack or `None` to stop invading this
    /// turn. Called repeatedly until `None`.
    fn choose_invasion(
        &mut self,
        view: &BoardView,
        candidates: &[(TerritoryId, Vec<TerritoryId>)],
    ) -> Option<Invasion>;

    /// Maneuver: optionally move troops between two connected owned
    /// territories. Called once per turn.
    fn choose_maneuver(
        &mut self,
        view: &BoardView,
        candidates: &[(TerritoryId, Vec<TerritoryId>)],
    ) -> Option<Maneuver>;
}
