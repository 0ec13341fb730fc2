//! The circular board of slots.
//!
//! The board is an array-backed ring of 16 slots addressed by index;
//! successor and predecessor are index arithmetic modulo the ring size,
//! and slot 0 always holds the start tile. Slots reference players by
//! seat and never own player state.

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use super::tile::{catalog, Tile, RING_SIZE};
use crate::player::Seat;

/// Index of the start slot. Fixed by construction.
pub const START_SLOT: usize = 0;

/// Errors for explicit board layouts.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("expected 16 tiles, got {0}")]
    WrongTileCount(usize),

    #[error("expected the start tile at slot 1, found {0}")]
    StartNotFirst(&'static str),

    #[error("expected exactly one start tile, got {0}")]
    WrongStartCount(usize),
}

/// One position on the board: a tile, an optional owning seat, and the
/// seats currently standing on it.
#[derive(Debug, Clone)]
pub struct Slot {
    pub tile: Tile,
    pub owner: Option<Seat>,
    pub occupants: Vec<Seat>,
}

impl Slot {
    fn new(tile: Tile) -> Slot {
        Slot {
            tile,
            owner: None,
            occupants: Vec::new(),
        }
    }
}

/// The fixed-size circular board.
#[derive(Debug, Clone)]
pub struct Ring {
    slots: Vec<Slot>,
}

impl Ring {
    /// Builds a board with a freshly shuffled layout: the start tile at
    /// slot 1 and the remaining 15 catalog tiles in uniformly random
    /// order after it.
    pub fn shuffled<R: Rng>(rng: &mut R) -> Ring {
        let mut tiles = catalog();
        let start_idx = tiles
            .iter()
            .position(|t| t.is_start())
            .expect("catalog contains a start tile");
        let start = tiles.swap_remove(start_idx);
        tiles.shuffle(rng);
        tiles.insert(0, start);
        Ring::from_layout(tiles).expect("catalog layout is always valid")
    }

    /// Builds a board from an explicit tile layout.
    ///
    /// The layout must hold exactly [`RING_SIZE`] tiles with a single
    /// start tile in first position; any tile multiset is otherwise
    /// accepted, so tests can pin down layouts the shuffle never
    /// produces.
    pub fn from_layout(tiles: Vec<Tile>) -> Result<Ring, LayoutError> {
        if tiles.len() != RING_SIZE {
            return Err(LayoutError::WrongTileCount(tiles.len()));
        }
        let start_count = tiles.iter().filter(|t| t.is_start()).count();
        if start_count != 1 {
            return Err(LayoutError::WrongStartCount(start_count));
        }
        if !tiles[START_SLOT].is_start() {
            return Err(LayoutError::StartNotFirst(tiles[START_SLOT].name()));
        }
        Ok(Ring {
            slots: tiles.into_iter().map(Slot::new).collect(),
        })
    }

    /// Returns the number of slots, always [`RING_SIZE`].
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// The ring is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the slot at `index`.
    pub fn slot(&self, index: usize) -> &Slot {
        &self.slots[index]
    }

    /// Returns the slot at `index` mutably.
    pub fn slot_mut(&mut self, index: usize) -> &mut Slot {
        &mut self.slots[index]
    }

    /// Returns all slots in ring order, slot 1 first.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Returns the index reached by following `steps` successor links
    /// from `from`, wrapping past the end of the ring.
    pub fn successor(&self, from: usize, steps: usize) -> usize {
        (from + steps) % self.slots.len()
    }

    /// Returns the index reached by following `steps` predecessor links
    /// from `from`.
    pub fn predecessor(&self, from: usize, steps: usize) -> usize {
        let len = self.slots.len();
        (from + len - steps % len) % len
    }

    /// Removes a seat from a slot's occupants, if present.
    pub fn remove_occupant(&mut self, index: usize, seat: Seat) {
        self.slots[index].occupants.retain(|s| *s != seat);
    }

    /// Adds a seat to a slot's occupants, if not already present.
    pub fn add_occupant(&mut self, index: usize, seat: Seat) {
        if !self.slots[index].occupants.contains(&seat) {
            self.slots[index].occupants.push(seat);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::tile::{ComponentKind, SpecialKind, ALL_COMPONENT_KINDS, ALL_SPECIAL_KINDS};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn shuffled_ring_has_sixteen_slots_with_start_first() {
        let mut rng = SmallRng::seed_from_u64(1);
        let ring = Ring::shuffled(&mut rng);
        assert_eq!(ring.len(), RING_SIZE);
        assert!(ring.slot(START_SLOT).tile.is_start());
    }

    #[test]
    fn shuffled_ring_preserves_the_catalog_multiset() {
        // Re-derive per-tile counts over several layouts: one of each
        // special, two of each component, regardless of shuffle order.
        for seed in 0..20 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let ring = Ring::shuffled(&mut rng);
            for kind in ALL_SPECIAL_KINDS {
                let count = ring
                    .slots()
                    .iter()
                    .filter(|s| s.tile == Tile::Special(kind))
                    .count();
                assert_eq!(count, 1, "seed {}: {:?}", seed, kind);
            }
            for kind in ALL_COMPONENT_KINDS {
                let count = ring
                    .slots()
                    .iter()
                    .filter(|s| s.tile == Tile::Component(kind))
                    .count();
                assert_eq!(count, 2, "seed {}: {:?}", seed, kind);
            }
        }
    }

    #[test]
    fn shuffled_rings_differ_between_seeds() {
        let mut rng_a = SmallRng::seed_from_u64(7);
        let mut rng_b = SmallRng::seed_from_u64(8);
        let a: Vec<Tile> = Ring::shuffled(&mut rng_a)
            .slots()
            .iter()
            .map(|s| s.tile)
            .collect();
        let b: Vec<Tile> = Ring::shuffled(&mut rng_b)
            .slots()
            .iter()
            .map(|s| s.tile)
            .collect();
        assert_ne!(a, b);
    }

    #[test]
    fn from_layout_rejects_wrong_tile_count() {
        let err = Ring::from_layout(vec![Tile::Special(SpecialKind::Start)]).unwrap_err();
        assert!(matches!(err, LayoutError::WrongTileCount(1)));
    }

    #[test]
    fn from_layout_rejects_missing_start() {
        let tiles = vec![Tile::Component(ComponentKind::Gpu); RING_SIZE];
        let err = Ring::from_layout(tiles).unwrap_err();
        assert!(matches!(err, LayoutError::WrongStartCount(0)));
    }

    #[test]
    fn from_layout_rejects_duplicate_start() {
        let mut tiles = vec![Tile::Special(SpecialKind::Start); 2];
        tiles.extend(vec![Tile::Component(ComponentKind::Gpu); RING_SIZE - 2]);
        let err = Ring::from_layout(tiles).unwrap_err();
        assert!(matches!(err, LayoutError::WrongStartCount(2)));
    }

    #[test]
    fn from_layout_rejects_start_not_first() {
        let mut tiles = vec![Tile::Component(ComponentKind::Gpu); RING_SIZE];
        tiles[3] = Tile::Special(SpecialKind::Start);
        let err = Ring::from_layout(tiles).unwrap_err();
        assert!(matches!(err, LayoutError::StartNotFirst("GPU")));
    }

    #[test]
    fn successor_wraps_around_the_ring() {
        let mut rng = SmallRng::seed_from_u64(2);
        let ring = Ring::shuffled(&mut rng);
        assert_eq!(ring.successor(0, 1), 1);
        assert_eq!(ring.successor(15, 1), 0);
        assert_eq!(ring.successor(10, 16), 10);
        assert_eq!(ring.successor(10, 22), 0);
    }

    #[test]
    fn predecessor_inverts_successor() {
        let mut rng = SmallRng::seed_from_u64(3);
        let ring = Ring::shuffled(&mut rng);
        for from in 0..RING_SIZE {
            for steps in 0..=RING_SIZE {
                let fwd = ring.successor(from, steps);
                assert_eq!(ring.predecessor(fwd, steps), from);
            }
        }
    }

    #[test]
    fn occupant_bookkeeping_is_idempotent() {
        let mut rng = SmallRng::seed_from_u64(4);
        let mut ring = Ring::shuffled(&mut rng);
        ring.add_occupant(5, Seat::P1);
        ring.add_occupant(5, Seat::P1);
        assert_eq!(ring.slot(5).occupants, vec![Seat::P1]);
        ring.remove_occupant(5, Seat::P1);
        ring.remove_occupant(5, Seat::P1);
        assert!(ring.slot(5).occupants.is_empty());
    }

    #[test]
    fn both_seats_can_share_a_slot() {
        let mut rng = SmallRng::seed_from_u64(5);
        let mut ring = Ring::shuffled(&mut rng);
        ring.add_occupant(9, Seat::P1);
        ring.add_occupant(9, Seat::P2);
        assert_eq!(ring.slot(9).occupants.len(), 2);
    }
}
