//! Board representation.
//!
//! Contains the tile catalog and the circular ring of slots the players
//! move along.

pub mod ring;
pub mod tile;

pub use ring::{LayoutError, Ring, Slot, START_SLOT};
pub use tile::{
    catalog, ComponentKind, SpecialKind, Tile, ALL_COMPONENT_KINDS, ALL_SPECIAL_KINDS,
    COLLECTIBLE_KINDS, COMPONENT_KIND_COUNT, RING_SIZE, SPECIAL_KIND_COUNT,
};
