//! The turn engine.
//!
//! Owns the board ring, the player registry, and the two card decks, and
//! applies every rule with a state transition: movement and the
//! passing-start bonus, rent and purchases, card effects, travel, and
//! the end-of-turn verdict. All blocking decisions are delegated to an
//! [`Input`] implementation; all display output goes to a caller-supplied
//! `Write` sink.

use std::io::{self, Write};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::ring::{LayoutError, Ring, START_SLOT};
use crate::board::tile::{ComponentKind, SpecialKind, Tile, RING_SIZE};
use crate::cards::{CardEffect, Deck};
use crate::config::GameConfig;
use crate::input::Input;
use crate::player::{Player, Seat, ALL_SEATS, SEAT_COUNT};
use crate::render;

/// Cap on chained landing resolutions within one turn. A travel hop can
/// land on a chance tile whose card moves the player again; the chain is
/// cut here instead of recursing without bound.
pub const MAX_RESOLUTION_HOPS: usize = 32;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The losing seat's balance fell to zero or below.
    Bankruptcy { winner: Seat },
    /// The winning seat owns one of every collectible component kind.
    Collection { winner: Seat },
}

impl Verdict {
    /// Returns the winning seat.
    pub const fn winner(self) -> Seat {
        match self {
            Verdict::Bankruptcy { winner } => winner,
            Verdict::Collection { winner } => winner,
        }
    }
}

/// One running game: board, players, decks, and the active seat.
pub struct Game {
    pub ring: Ring,
    pub players: [Player; SEAT_COUNT],
    chance: Deck,
    risk: Deck,
    rng: SmallRng,
    start_bonus: i64,
    turn: Seat,
}

fn seeded_rng(seed: u64) -> SmallRng {
    if seed == 0 {
        SmallRng::from_entropy()
    } else {
        SmallRng::seed_from_u64(seed)
    }
}

impl Game {
    /// Creates a game with a freshly shuffled board. A zero seed in the
    /// settings draws the rng from entropy.
    pub fn new(config: &GameConfig) -> Game {
        Game::with_rng(config, seeded_rng(config.seed))
    }

    /// Creates a game with a shuffled board over a caller-supplied rng.
    pub fn with_rng(config: &GameConfig, mut rng: SmallRng) -> Game {
        let ring = Ring::shuffled(&mut rng);
        Game::assemble(config, ring, rng)
    }

    /// Creates a game over an explicit tile layout.
    pub fn from_layout(config: &GameConfig, layout: Vec<Tile>) -> Result<Game, LayoutError> {
        let ring = Ring::from_layout(layout)?;
        Ok(Game::assemble(config, ring, seeded_rng(config.seed)))
    }

    fn assemble(config: &GameConfig, mut ring: Ring, mut rng: SmallRng) -> Game {
        let players = [
            Player::new(config.player_names[0].clone(), config.starting_balance),
            Player::new(config.player_names[1].clone(), config.starting_balance),
        ];
        for seat in ALL_SEATS {
            ring.add_occupant(START_SLOT, seat);
        }
        let chance = Deck::chance(&mut rng);
        let risk = Deck::risk(&mut rng);
        Game {
            ring,
            players,
            chance,
            risk,
            rng,
            start_bonus: config.start_bonus,
            turn: Seat::P1,
        }
    }

    /// Returns the seat that acts next.
    pub fn current_seat(&self) -> Seat {
        self.turn
    }

    /// Rolls the game die.
    pub fn roll_die(&mut self) -> u32 {
        self.rng.gen_range(1..=6)
    }

    /// Moves a seat forward along the ring, crediting the passing-start
    /// bonus once per completed lap.
    pub fn advance(&mut self, seat: Seat, steps: usize) {
        let from = self.players[seat.index()].slot;
        self.ring.remove_occupant(from, seat);
        let mut pos = from;
        for _ in 0..steps {
            pos = self.ring.successor(pos, 1);
            if pos == START_SLOT {
                self.players[seat.index()].credit(self.start_bonus);
            }
        }
        self.ring.add_occupant(pos, seat);
        self.players[seat.index()].slot = pos;
    }

    /// Places a seat directly on a 1-indexed slot number, counted along
    /// the ring from the start slot. Numbers outside [1, 16] are a
    /// no-op. No passing-start bonus is granted.
    pub fn teleport(&mut self, seat: Seat, slot_number: usize) {
        if slot_number < 1 || slot_number > RING_SIZE {
            return;
        }
        let from = self.players[seat.index()].slot;
        self.ring.remove_occupant(from, seat);
        let dest = self.ring.successor(START_SLOT, slot_number - 1);
        self.ring.add_occupant(dest, seat);
        self.players[seat.index()].slot = dest;
    }

    /// Applies the landing rules for `seat`'s current slot, following
    /// card and travel effects until the chain settles or the hop cap is
    /// reached. `last_roll` is the roll shown on intermediate redraws.
    pub fn resolve_landing<I: Input, W: Write>(
        &mut self,
        seat: Seat,
        last_roll: Option<u32>,
        input: &mut I,
        out: &mut W,
    ) -> io::Result<()> {
        let mut last_roll = last_roll;
        for _ in 0..MAX_RESOLUTION_HOPS {
            let idx = self.players[seat.index()].slot;
            let tile = self.ring.slot(idx).tile;
            match tile {
                Tile::Component(kind) => {
                    self.resolve_component(seat, idx, kind, input);
                    return Ok(());
                }
                Tile::Special(SpecialKind::Start) => {
                    // The passing bonus was granted during movement.
                    return Ok(());
                }
                Tile::Special(SpecialKind::Chance) => {
                    let effect = self.chance.draw(&mut self.rng);
                    if !self.apply_card(seat, effect, input, out, &mut last_roll)? {
                        return Ok(());
                    }
                }
                Tile::Special(SpecialKind::Risk) => {
                    let effect = self.risk.draw(&mut self.rng);
                    if !self.apply_card(seat, effect, input, out, &mut last_roll)? {
                        return Ok(());
                    }
                }
                Tile::Special(SpecialKind::Travel) => {
                    let dest = input.ask_slot_number(1, RING_SIZE);
                    self.teleport(seat, dest);
                    self.redraw(out, seat, last_roll)?;
                }
            }
        }
        Ok(())
    }

    /// Resolves landing on a component slot: rent to the other seat's
    /// holdings, a purchase offer on unowned slots, nothing on own
    /// slots.
    fn resolve_component<I: Input>(
        &mut self,
        seat: Seat,
        idx: usize,
        kind: ComponentKind,
        input: &mut I,
    ) {
        let price = kind.price();
        let owner = self.ring.slot(idx).owner;
        match owner {
            Some(owner) if owner == seat => {}
            Some(owner) => {
                self.players[seat.index()].debit(price);
                self.players[owner.index()].credit(price);
            }
            None => {
                if self.players[seat.index()].balance >= price {
                    let prompt =
                        format!("Are you willing to buy {} for {}$ [yes | no]: ", kind.name(), price);
                    if input.ask_yes_no(&prompt) {
                        self.ring.slot_mut(idx).owner = Some(seat);
                        self.players[seat.index()].debit(price);
                        self.players[seat.index()].record_part(kind);
                    }
                }
            }
        }
    }

    /// Applies a drawn card to `seat`. Returns true if the effect moved
    /// the player, in which case the new landing must be resolved.
    fn apply_card<I: Input, W: Write>(
        &mut self,
        seat: Seat,
        effect: CardEffect,
        input: &mut I,
        out: &mut W,
        last_roll: &mut Option<u32>,
    ) -> io::Result<bool> {
        match effect {
            CardEffect::Raise => {
                input.acknowledge(effect.announcement());
                self.players[seat.index()].credit(500);
                Ok(false)
            }
            CardEffect::Bonus => {
                input.acknowledge(effect.announcement());
                self.players[seat.index()].credit(400);
                Ok(false)
            }
            CardEffect::Advance => {
                input.acknowledge(effect.announcement());
                self.advance(seat, 3);
                *last_roll = None;
                self.redraw(out, seat, *last_roll)?;
                Ok(true)
            }
            CardEffect::Move => {
                input.confirm_roll("Roll the dice");
                let roll = self.roll_die();
                self.advance(seat, roll as usize);
                *last_roll = Some(roll);
                self.redraw(out, seat, *last_roll)?;
                Ok(true)
            }
            CardEffect::Loose => {
                input.acknowledge(effect.announcement());
                self.players[seat.index()].debit(300);
                Ok(false)
            }
            CardEffect::Nothing => {
                input.acknowledge(effect.announcement());
                Ok(false)
            }
        }
    }

    /// Evaluates the end-of-turn predicates. Bankruptcy is checked for
    /// both seats before the collection win.
    pub fn verdict(&self) -> Option<Verdict> {
        for seat in ALL_SEATS {
            if self.players[seat.index()].is_bankrupt() {
                return Some(Verdict::Bankruptcy {
                    winner: seat.other(),
                });
            }
        }
        for seat in ALL_SEATS {
            if self.players[seat.index()].has_full_collection() {
                return Some(Verdict::Collection { winner: seat });
            }
        }
        None
    }

    /// Plays one full turn for the active seat and toggles the turn.
    /// Returns the verdict if an end condition is met.
    pub fn play_turn<I: Input, W: Write>(
        &mut self,
        input: &mut I,
        out: &mut W,
    ) -> io::Result<Option<Verdict>> {
        let seat = self.turn;
        self.redraw(out, seat, None)?;
        input.confirm_roll("Roll the dice");
        let roll = self.roll_die();
        self.advance(seat, roll as usize);
        self.redraw(out, seat, Some(roll))?;
        self.resolve_landing(seat, Some(roll), input, out)?;
        self.turn = seat.other();
        Ok(self.verdict())
    }

    /// Runs turns until the game ends, then draws the final board and
    /// the winner banner.
    pub fn play<I: Input, W: Write>(&mut self, input: &mut I, out: &mut W) -> io::Result<Verdict> {
        loop {
            if let Some(verdict) = self.play_turn(input, out)? {
                self.redraw(out, verdict.winner(), None)?;
                render::draw_winner(out, verdict, &self.players)?;
                out.flush()?;
                return Ok(verdict);
            }
        }
    }

    fn redraw<W: Write>(&self, out: &mut W, seat: Seat, roll: Option<u32>) -> io::Result<()> {
        render::clear_screen(out)?;
        render::draw_header(out, &self.players, seat, roll)?;
        render::draw_board(out, &self.ring, &self.players)?;
        out.flush()
    }
}
