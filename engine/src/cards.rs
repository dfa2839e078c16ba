// ═══════════════════════════════════════════════════════════════════════
// Conquest cards — typed deck, player hands, and set valuation.
//
// The deck holds 14 Infantry, 14 Cavalry, 14 Artillery and 2 Wild
// cards. One card is earned per turn with at least one successful
// invasion. Three of a matchable kind, or any three including a wild,
// form a set; the trade-in value escalates with every set traded over
// the course of a game.
// ═══════════════════════════════════════════════════════════════════════

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Infantry,
    Cavalry,
    Artillery,
    Wild,
}

impl CardKind {
    /// Kinds that can form a three-of-a-kind set on their own.
    pub const MATCHABLE: [CardKind; 3] =
        [CardKind::Infantry, CardKind::Cavalry, CardKind::Artillery];
}

pub const MATCHABLE_COPIES: usize = 14;
pub const WILD_COPIES: usize = 2;

/// Reinforcements granted for the nth set traded in a game (0-based).
/// 5, 6, 7, then 10 for every set after the third.
pub fn set_value(sets_traded: u32) -> u32 {
    match sets_traded {
        0 => 5,
        1 => 6,
        2 => 7,
        _ => 10,
    }
}

// ── Deck ───────────────────────────────────────────────────────────────

/// The shared draw pile. Reshuffles a freshly recomposed deck when it
/// runs out, so draws never fail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<CardKind>,
}

impl Deck {
    pub fn new(rng: &mut impl Rng) -> Self {
        let mut cards = Self::fresh_cards();
        cards.shuffle(rng);
        Self { cards }
    }

    fn fresh_cards() -> Vec<CardKind> {
        let mut cards =
            Vec::with_capacity(MATCHABLE_COPIES * CardKind::MATCHABLE.len() + WILD_COPIES);
        for kind in CardKind::MATCHABLE {
            cards.extend(std::iter::repeat(kind).take(MATCHABLE_COPIES));
        }
        cards.extend(std::iter::repeat(CardKind::Wild).take(WILD_COPIES));
        cards
    }

    pub fn draw(&mut self, rng: &mut impl Rng) -> CardKind {
        if self.cards.is_empty() {
            self.cards = Self::fresh_cards();
            self.cards.shuffle(rng);
        }
        self.cards.pop().expect("deck is non-empty after reshuffle")
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}

// ── Hand ───────────────────────────────────────────────────────────────

/// A player's card hand, a small multiset of kinds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<CardKind>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, kind: CardKind) {
        self.cards.push(kind);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[CardKind] {
        &self.cards
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Best tradable set, if any. Prefers a three-of-a-kind (Infantry,
    /// Cavalry, Artillery order), then a wild-completed set.
    pub fn best_set(&self) -> Option<[CardKind; 3]> {
        for kind in CardKind::MATCHABLE {
            if self.count(kind) >= 3 {
                return Some([kind, kind, kind]);
            }
        }

        if self.count(CardKind::Wild) > 0 && self.cards.len() >= 3 {
            let mut set = [CardKind::Wild; 3];
            let mut filled = 1;
            let mut wilds_left = self.count(CardKind::Wild) - 1;
            for kind in CardKind::MATCHABLE {
                let mut available = self.count(kind);
                while filled < 3 && available > 0 {
                    set[filled] = kind;
                    filled += 1;
                    available -= 1;
                }
            }
            while filled < 3 && wilds_left > 0 {
                set[filled] = CardKind::Wild;
                filled += 1;
                wilds_left -= 1;
            }
            if filled == 3 {
                return Some(set);
            }
        }

        None
    }

    /// Remove exactly the three traded cards from the hand. Each entry
    /// of `set` must be present (callers pass what `best_set` returned).
    pub fn remove_set(&mut self, set: &[CardKind; 3]) {
        for kind in set {
            if let Some(pos) = self.cards.iter().position(|c| c == kind) {
                self.cards.remove(pos);
            }
        }
    }

    fn count(&self, kind: CardKind) -> usize {
        self.cards.iter().filter(|&&c| c == kind).count()
    }
}
