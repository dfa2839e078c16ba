// ═══════════════════════════════════════════════════════════════════════
// Player state — owned territories, the unassigned troop pool, the card
// hand, and the memoized derived data (base reinforcement, connectivity
// candidates) keyed on an ownership version counter.
// ═══════════════════════════════════════════════════════════════════════

use crate::cards::Hand;
use crate::connectivity::{self, Candidates};
use crate::map;
use crate::types::{PlayerId, Region, TerritoryId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

const DEFAULT_BASE_REINFORCEMENT: u32 = 3;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ConnectivityCache {
    version: u64,
    invasion: Candidates,
    maneuver: Candidates,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    /// BTreeSet so every iteration over holdings is id-ordered.
    owned: BTreeSet<TerritoryId>,
    starting_pool: u32,
    unassigned: u32,
    hand: Hand,
    /// Bumped on every grant/revoke; derived data checks it for
    /// staleness instead of recomputing each turn.
    ownership_version: u64,
    base_reinforcement: u32,
    reinforcement_version: Option<u64>,
    cache: Option<ConnectivityCache>,
}

impl Player {
    pub fn new(id: PlayerId, starting_pool: u32) -> Self {
        Self {
            id,
            owned: BTreeSet::new(),
            starting_pool,
            unassigned: starting_pool,
            hand: Hand::new(),
            ownership_version: 0,
            base_reinforcement: DEFAULT_BASE_REINFORCEMENT,
            reinforcement_version: None,
            cache: None,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn owned(&self) -> &BTreeSet<TerritoryId> {
        &self.owned
    }

    pub fn owns(&self, territory: TerritoryId) -> bool {
        self.owned.contains(&territory)
    }

    pub fn territory_count(&self) -> usize {
        self.owned.len()
    }

    /// An eliminated player holds nothing and is skipped in turn order.
    pub fn is_eliminated(&self) -> bool {
        self.owned.is_empty()
    }

    pub fn grant(&mut self, territory: TerritoryId) {
        if self.owned.insert(territory) {
            self.ownership_version += 1;
        }
    }

    pub fn revoke(&mut self, territory: TerritoryId) {
        if self.owned.remove(&territory) {
            self.ownership_version += 1;
        }
    }

    // ── Troop pool ─────────────────────────────────────────────────────

    pub fn unassigned(&self) -> u32 {
        self.unassigned
    }

    pub fn give_units(&mut self, n: u32) {
        self.unassigned += n;
    }

    pub fn take_unit(&mut self) {
        self.unassigned = self.unassigned.saturating_sub(1);
    }

    /// Drop whatever is left in the pool. Unspent reinforcements do not
    /// carry over between turns.
    pub fn clear_units(&mut self) {
        self.unassigned = 0;
    }

    // ── Cards ──────────────────────────────────────────────────────────

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    // ── Derived data ───────────────────────────────────────────────────

    /// Last computed base reinforcement, as used by fitness scoring.
    pub fn base_reinforcement(&self) -> u32 {
        self.base_reinforcement
    }

    /// Base reinforcement for the current turn:
    /// max(3, floor(owned / 3)) plus the bonus of every fully held
    /// region. Recomputed only when ownership changed since last call.
    pub fn base_reinforcement_for_turn(&mut self) -> u32 {
        if self.reinforcement_version != Some(self.ownership_version) {
            let mut base =
                DEFAULT_BASE_REINFORCEMENT.max(self.owned.len() as u32 / 3);
            for region in Region::ALL {
                let members = map::region_members(region);
                if members.iter().all(|t| self.owned.contains(t)) {
                    base += region.bonus();
                }
            }
            self.base_reinforcement = base;
            self.reinforcement_version = Some(self.ownership_version);
        }
        self.base_reinforcement
    }

    /// Recompute the connectivity candidate lists if ownership moved.
    pub fn refresh_connectivity(&mut self) {
        let stale = match &self.cache {
            Some(cache) => cache.version != self.ownership_version,
            None => true,
        };
        if stale {
            self.cache = Some(ConnectivityCache {
                version: self.ownership_version,
                invasion: connectivity::invasion_candidates(&self.owned),
                maneuver: connectivity::maneuver_components(&self.owned),
            });
        }
    }

    /// Cached invasion candidates. Empty until `refresh_connectivity`
    /// has run for the current ownership version.
    pub fn invasion_candidates(&self) -> &[(TerritoryId, Vec<TerritoryId>)] {
        self.cache.as_ref().map(|c| c.invasion.as_slice()).unwrap_or(&[])
    }

    /// Cached maneuver reachability, same staleness contract.
    pub fn maneuver_candidates(&self) -> &[(TerritoryId, Vec<TerritoryId>)] {
        self.cache.as_ref().map(|c| c.maneuver.as_slice()).unwrap_or(&[])
    }

    /// Restore the pre-game state: no holdings, full starting pool,
    /// empty hand.
    pub fn reset(&mut self) {
        self.owned.clear();
        self.ownership_version += 1;
        self.unassigned = self.starting_pool;
        self.hand.clear();
        self.base_reinforcement = DEFAULT_BASE_REINFORCEMENT;
        self.reinforcement_version = None;
        self.cache = None;
    }
}
