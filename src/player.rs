//! Seats and player account state.
//!
//! The two players are addressed everywhere by `Seat`, a two-valued
//! index into the game's player registry. Account state is plain data;
//! the win and loss predicates live here next to it.

use crate::board::ring::START_SLOT;
use crate::board::tile::{ComponentKind, COLLECTIBLE_KINDS};

/// Number of players in a game.
pub const SEAT_COUNT: usize = 2;

/// One of the two player seats.
///
/// The `#[repr(u8)]` attribute enables use as an array index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Seat {
    P1 = 0,
    P2 = 1,
}

/// Both seats in turn order.
pub const ALL_SEATS: [Seat; SEAT_COUNT] = [Seat::P1, Seat::P2];

impl Seat {
    /// Returns the registry index for this seat.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the opposing seat.
    pub const fn other(self) -> Seat {
        match self {
            Seat::P1 => Seat::P2,
            Seat::P2 => Seat::P1,
        }
    }

    /// Returns the default display name.
    pub const fn default_name(self) -> &'static str {
        match self {
            Seat::P1 => "P1",
            Seat::P2 => "P2",
        }
    }
}

/// Mutable account state for one player.
#[derive(Debug, Clone)]
pub struct Player {
    pub name: String,
    /// Cash balance. Signed: rent and bad cards may push it negative.
    pub balance: i64,
    /// Current slot index on the ring.
    pub slot: usize,
    /// Component kinds bought so far, duplicates included.
    pub owned: Vec<ComponentKind>,
}

impl Player {
    /// Creates a player on the start slot with the given balance.
    pub fn new(name: impl Into<String>, starting_balance: i64) -> Player {
        Player {
            name: name.into(),
            balance: starting_balance,
            slot: START_SLOT,
            owned: Vec::new(),
        }
    }

    /// Adds to the balance.
    pub fn credit(&mut self, amount: i64) {
        self.balance += amount;
    }

    /// Subtracts from the balance. The balance may go negative; that is
    /// how bankruptcy occurs.
    pub fn debit(&mut self, amount: i64) {
        self.balance -= amount;
    }

    /// Records a purchased component kind.
    pub fn record_part(&mut self, kind: ComponentKind) {
        self.owned.push(kind);
    }

    /// A balance at or below zero loses the game.
    pub fn is_bankrupt(&self) -> bool {
        self.balance <= 0
    }

    /// Owning at least one of every collectible kind wins the game.
    /// Duplicates and service tiles do not count.
    pub fn has_full_collection(&self) -> bool {
        COLLECTIBLE_KINDS.iter().all(|kind| self.owned.contains(kind))
    }
}
