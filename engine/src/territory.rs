// ═══════════════════════════════════════════════════════════════════════
// Territory state — the mutable cell behind each map node: owner plus
// troop count. Also hosts the dice combat resolution, since a combat
// round is entirely a defender-side affair once the attacker has
// committed troops.
// ═══════════════════════════════════════════════════════════════════════

use crate::types::{EngineError, PlayerId, TerritoryId};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Result of one round of dice combat against this territory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackOutcome {
    /// Defender wiped out; `survivors` of the committed troops move in.
    Conquered { survivors: u32 },
    /// Defender holds. All committed troops that lost their dice pair
    /// are gone; the rest do not return.
    Repelled,
}

/// Mutable per-territory game state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Territory {
    id: TerritoryId,
    owner: Option<PlayerId>,
    troops: u32,
}

impl Territory {
    pub fn new(id: TerritoryId) -> Self {
        Self {
            id,
            owner: None,
            troops: 0,
        }
    }

    pub fn id(&self) -> TerritoryId {
        self.id
    }

    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    pub fn troops(&self) -> u32 {
        self.troops
    }

    pub fn set_owner(&mut self, owner: PlayerId) {
        self.owner = Some(owner);
    }

    pub fn set_troops(&mut self, troops: u32) {
        self.troops = troops;
    }

    /// Clear back to the unclaimed zero-troop state.
    pub fn reset(&mut self) {
        self.owner = None;
        self.troops = 0;
    }

    pub fn add_troops(&mut self, n: u32) -> Result<(), EngineError> {
        if n == 0 {
            return Err(EngineError::NonPositiveAdjustment);
        }
        self.troops += n;
        Ok(())
    }

    pub fn remove_troops(&mut self, n: u32) -> Result<(), EngineError> {
        if n == 0 {
            return Err(EngineError::NonPositiveAdjustment);
        }
        if n > self.troops {
            return Err(EngineError::TroopUnderflow {
                requested: n,
                available: self.troops,
            });
        }
        self.troops -= n;
        Ok(())
    }

    /// Resolve one round of dice combat. The attacker has already
    /// deducted `attacking` troops from the source territory; they
    /// either move in on conquest or are lost with the failed assault.
    ///
    /// Attacker rolls min(attacking, 3) dice, defender min(troops, 2).
    /// Ties go to the defender.
    pub fn resolve_attack(
        &mut self,
        attacking: u32,
        rng: &mut impl Rng,
    ) -> Result<AttackOutcome, EngineError> {
        if attacking == 0 {
            return Err(EngineError::NonPositiveAttack);
        }
        if self.troops == 0 {
            return Err(EngineError::EmptyDefender(self.id));
        }

        let attacker_dice = roll_sorted(attacking.min(3), rng);
        let defender_dice = roll_sorted(self.troops.min(2), rng);
        let (attacker_losses, defender_losses) =
            resolve_dice(&attacker_dice, &defender_dice);

        self.troops -= defender_losses;
        if self.troops == 0 {
            Ok(AttackOutcome::Conquered {
                survivors: attacking - attacker_losses,
            })
        } else {
            Ok(AttackOutcome::Repelled)
        }
    }
}

fn roll_sorted(count: u32, rng: &mut impl Rng) -> Vec<u8> {
    let mut dice: Vec<u8> = (0..count).map(|_| rng.gen_range(1..=6)).collect();
    dice.sort_unstable_by(|a, b| b.cmp(a));
    dice
}

/// Compare two descending-sorted dice sets pairwise and return
/// (attacker losses, defender losses). A tie is a defender win.
///
/// Pure so tests can force specific rolls.
pub fn resolve_dice(attacker: &[u8], defender: &[u8]) -> (u32, u32) {
    let mut attacker_losses = 0;
    let mut defender_losses = 0;
    for (a, d) in attacker.iter().zip(defender.iter()) {
        if a > d {
            defender_losses += 1;
        } else {
            attacker_losses += 1;
        }
    }
    (attacker_losses, defender_losses)
}
