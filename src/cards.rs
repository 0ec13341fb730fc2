//! Chance and risk card decks.
//!
//! Each deck is a shuffled stack drawn from a fixed multiset of effects.
//! Drawing pops the top card; an empty deck is refilled from the
//! canonical multiset and reshuffled before the draw completes, so a
//! draw never fails.

use rand::seq::SliceRandom;
use rand::Rng;

/// A card effect applied to the drawing player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardEffect {
    /// Credit 500.
    Raise,
    /// Credit 400.
    Bonus,
    /// Move forward 3 slots and resolve the new landing.
    Advance,
    /// Roll a fresh die, move forward that many slots, and resolve the
    /// new landing.
    Move,
    /// Debit 300. Risk deck only.
    Loose,
    /// No change. Risk deck only.
    Nothing,
}

impl CardEffect {
    /// Returns the message shown to the drawing player.
    pub const fn announcement(self) -> &'static str {
        match self {
            CardEffect::Raise => "Claim 500$",
            CardEffect::Bonus => "Claim 400$",
            CardEffect::Advance => "Move forward 3 slots",
            CardEffect::Move => "Roll the dice again",
            CardEffect::Loose => "You lose 300$",
            CardEffect::Nothing => "Nothing happens",
        }
    }

    /// Returns true if the effect changes the player's position.
    pub const fn moves_player(self) -> bool {
        matches!(self, CardEffect::Advance | CardEffect::Move)
    }
}

/// Which deck a card came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeckKind {
    Chance,
    Risk,
}

/// One fresh chance deck: good effects only.
const CHANCE_SET: [CardEffect; 4] = [
    CardEffect::Raise,
    CardEffect::Bonus,
    CardEffect::Advance,
    CardEffect::Move,
];

/// One fresh risk deck: the good effects plus one bad and one neutral.
const RISK_SET: [CardEffect; 6] = [
    CardEffect::Raise,
    CardEffect::Bonus,
    CardEffect::Advance,
    CardEffect::Move,
    CardEffect::Loose,
    CardEffect::Nothing,
];

/// A finite-supply, reshuffle-on-empty draw stack.
#[derive(Debug, Clone)]
pub struct Deck {
    kind: DeckKind,
    cards: Vec<CardEffect>,
}

impl Deck {
    /// Creates a shuffled chance deck.
    pub fn chance<R: Rng>(rng: &mut R) -> Deck {
        Deck {
            kind: DeckKind::Chance,
            cards: Self::fresh(DeckKind::Chance, rng),
        }
    }

    /// Creates a shuffled risk deck.
    pub fn risk<R: Rng>(rng: &mut R) -> Deck {
        Deck {
            kind: DeckKind::Risk,
            cards: Self::fresh(DeckKind::Risk, rng),
        }
    }

    fn fresh<R: Rng>(kind: DeckKind, rng: &mut R) -> Vec<CardEffect> {
        let mut cards: Vec<CardEffect> = match kind {
            DeckKind::Chance => CHANCE_SET.to_vec(),
            DeckKind::Risk => RISK_SET.to_vec(),
        };
        cards.shuffle(rng);
        cards
    }

    /// Returns which deck this is.
    pub fn kind(&self) -> DeckKind {
        self.kind
    }

    /// Returns the number of cards left before the next refill.
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Draws the top card, refilling and reshuffling first if the deck
    /// is empty.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> CardEffect {
        if self.cards.is_empty() {
            self.cards = Self::fresh(self.kind, rng);
        }
        self.cards.pop().expect("refilled deck is never empty")
    }
}
