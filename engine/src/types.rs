// ═══════════════════════════════════════════════════════════════════════
// Core types — ids, regions, errors, game configuration
// ═══════════════════════════════════════════════════════════════════════

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ── Ids ────────────────────────────────────────────────────────────────

/// Stable territory id. Valid ids lie in [1, 43]; 0 and 2 are unused
/// slots kept so the id doubles as an index into the dense map table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct TerritoryId(pub u8);

impl TerritoryId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for TerritoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Index of a player in the game's stored player list.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct PlayerId(pub u8);

impl PlayerId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{}", self.0)
    }
}

// ── Regions ────────────────────────────────────────────────────────────

/// A continent. Owning every territory of a region grants its bonus on
/// top of the territory-count reinforcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    NorthAmerica,
    SouthAmerica,
    Europe,
    Africa,
    Asia,
    Australia,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::NorthAmerica,
        Region::SouthAmerica,
        Region::Europe,
        Region::Africa,
        Region::Asia,
        Region::Australia,
    ];

    /// Reinforcement bonus for holding the whole region.
    pub fn bonus(self) -> u32 {
        match self {
            Region::NorthAmerica => 5,
            Region::SouthAmerica => 2,
            Region::Europe => 5,
            Region::Africa => 3,
            Region::Asia => 7,
            Region::Australia => 2,
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Region::NorthAmerica => write!(f, "North America"),
            Region::SouthAmerica => write!(f, "South America"),
            Region::Europe => write!(f, "Europe"),
            Region::Africa => write!(f, "Africa"),
            Region::Asia => write!(f, "Asia"),
            Region::Australia => write!(f, "Australia"),
        }
    }
}

// ── Errors ─────────────────────────────────────────────────────────────

/// Fatal rule violations. Recoverable strategy mistakes (self-invasion,
/// overcommitted moves) are handled in the engine as logged no-ops and
/// never reach this type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("troop adjustment must be positive")]
    NonPositiveAdjustment,
    #[error("cannot remove {requested} troops, only {available} present")]
    TroopUnderflow { requested: u32, available: u32 },
    #[error("an attack must commit at least one troop")]
    NonPositiveAttack,
    #[error("territory {0} has no troops left to defend")]
    EmptyDefender(TerritoryId),
    #[error("territory {0} is not available to claim")]
    UnavailableClaim(TerritoryId),
    #[error("territory {territory} is not owned by player {player}")]
    NotOwned {
        territory: TerritoryId,
        player: PlayerId,
    },
    #[error("allocated {requested} troops but only {granted} were granted")]
    AllocationExceedsGrant { requested: u32, granted: u32 },
}

// ── Configuration ──────────────────────────────────────────────────────

/// Tunables for a single game. Defaults match the standard ruleset used
/// for strategy evaluation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GameConfig {
    /// Full rounds played before the game is called on territory count.
    pub max_rounds: u32,
    /// A player at or above this many total units receives no
    /// reinforcements.
    pub unit_cap: u32,
    /// Fitness bonus awarded to the winner.
    pub win_bonus: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_rounds: 200,
            unit_cap: 130,
            win_bonus: 20,
        }
    }
}
