//! Tile definitions and the board catalog.
//!
//! Every board is built from the same fixed multiset of tiles: the four
//! special tiles once each and the six component tiles twice each, 16 in
//! total. Component prices are fixed per kind.

/// Number of slots on the board ring.
pub const RING_SIZE: usize = 16;

/// A priced, ownable component tile.
///
/// The `#[repr(u8)]` attribute enables use as an array index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ComponentKind {
    Gpu = 0,
    Cpu = 1,
    Mem = 2,
    Ram = 3,
    Nic = 4,
    Service = 5,
}

/// The number of component kinds.
pub const COMPONENT_KIND_COUNT: usize = 6;

/// All component kinds in index order.
pub const ALL_COMPONENT_KINDS: [ComponentKind; COMPONENT_KIND_COUNT] = [
    ComponentKind::Gpu,
    ComponentKind::Cpu,
    ComponentKind::Mem,
    ComponentKind::Ram,
    ComponentKind::Nic,
    ComponentKind::Service,
];

/// Component kinds that count toward the collection victory.
/// Service tiles collect rent but never complete the collection.
pub const COLLECTIBLE_KINDS: [ComponentKind; 5] = [
    ComponentKind::Gpu,
    ComponentKind::Cpu,
    ComponentKind::Mem,
    ComponentKind::Ram,
    ComponentKind::Nic,
];

impl ComponentKind {
    /// Returns the purchase price, which is also the rent charged to an
    /// opponent landing on an owned slot.
    pub const fn price(self) -> i64 {
        match self {
            ComponentKind::Gpu => 2000,
            ComponentKind::Cpu => 1500,
            ComponentKind::Mem => 600,
            ComponentKind::Ram => 700,
            ComponentKind::Nic => 500,
            ComponentKind::Service => 800,
        }
    }

    /// Returns the display name.
    pub const fn name(self) -> &'static str {
        match self {
            ComponentKind::Gpu => "GPU",
            ComponentKind::Cpu => "CPU",
            ComponentKind::Mem => "MEM",
            ComponentKind::Ram => "RAM",
            ComponentKind::Nic => "NIC",
            ComponentKind::Service => "SERVICE",
        }
    }

    /// Returns true if owning this kind counts toward the collection win.
    pub const fn is_collectible(self) -> bool {
        !matches!(self, ComponentKind::Service)
    }
}

/// An unpriced special tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SpecialKind {
    Start = 0,
    Chance = 1,
    Risk = 2,
    Travel = 3,
}

/// The number of special kinds.
pub const SPECIAL_KIND_COUNT: usize = 4;

/// All special kinds in index order.
pub const ALL_SPECIAL_KINDS: [SpecialKind; SPECIAL_KIND_COUNT] = [
    SpecialKind::Start,
    SpecialKind::Chance,
    SpecialKind::Risk,
    SpecialKind::Travel,
];

impl SpecialKind {
    /// Returns the display name.
    pub const fn name(self) -> &'static str {
        match self {
            SpecialKind::Start => "START",
            SpecialKind::Chance => "CHANCE",
            SpecialKind::Risk => "RISK",
            SpecialKind::Travel => "TRAVEL",
        }
    }
}

/// One tile on the board: either a special action tile or a priced
/// component tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Special(SpecialKind),
    Component(ComponentKind),
}

impl Tile {
    /// Returns the display name.
    pub const fn name(self) -> &'static str {
        match self {
            Tile::Special(kind) => kind.name(),
            Tile::Component(kind) => kind.name(),
        }
    }

    /// Returns the price for component tiles, None for specials.
    pub const fn price(self) -> Option<i64> {
        match self {
            Tile::Special(_) => None,
            Tile::Component(kind) => Some(kind.price()),
        }
    }

    /// Returns true for the unique start tile.
    pub const fn is_start(self) -> bool {
        matches!(self, Tile::Special(SpecialKind::Start))
    }
}

/// Returns the full tile multiset for one board: every special tile once
/// and every component tile twice, 16 tiles in catalog order.
pub fn catalog() -> Vec<Tile> {
    let mut tiles = Vec::with_capacity(RING_SIZE);
    for kind in ALL_SPECIAL_KINDS {
        tiles.push(Tile::Special(kind));
    }
    for kind in ALL_COMPONENT_KINDS {
        tiles.push(Tile::Component(kind));
        tiles.push(Tile::Component(kind));
    }
    tiles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_prices_match_rules() {
        assert_eq!(ComponentKind::Gpu.price(), 2000);
        assert_eq!(ComponentKind::Cpu.price(), 1500);
        assert_eq!(ComponentKind::Mem.price(), 600);
        assert_eq!(ComponentKind::Ram.price(), 700);
        assert_eq!(ComponentKind::Nic.price(), 500);
        assert_eq!(ComponentKind::Service.price(), 800);
    }

    #[test]
    fn service_is_not_collectible() {
        assert!(!ComponentKind::Service.is_collectible());
        for kind in COLLECTIBLE_KINDS {
            assert!(kind.is_collectible());
        }
    }

    #[test]
    fn catalog_has_ring_size_tiles() {
        assert_eq!(catalog().len(), RING_SIZE);
    }

    #[test]
    fn catalog_has_one_of_each_special() {
        let tiles = catalog();
        for kind in ALL_SPECIAL_KINDS {
            let count = tiles
                .iter()
                .filter(|t| **t == Tile::Special(kind))
                .count();
            assert_eq!(count, 1, "special {:?} should appear once", kind);
        }
    }

    #[test]
    fn catalog_has_two_of_each_component() {
        let tiles = catalog();
        for kind in ALL_COMPONENT_KINDS {
            let count = tiles
                .iter()
                .filter(|t| **t == Tile::Component(kind))
                .count();
            assert_eq!(count, 2, "component {:?} should appear twice", kind);
        }
    }

    #[test]
    fn tile_price_only_for_components() {
        assert_eq!(Tile::Special(SpecialKind::Travel).price(), None);
        assert_eq!(Tile::Component(ComponentKind::Gpu).price(), Some(2000));
    }
}
