//! Vessel definitions and per-vessel damage tracking.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::coord::Coordinate;

/// Fleet entry: name and size of a vessel class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VesselKind {
    name: &'static str,
    size: usize,
}

impl VesselKind {
    /// Create a new vessel kind.
    pub const fn new(name: &'static str, size: usize) -> Self {
        Self { name, size }
    }

    /// Kind's name, also the identity of vessels built from it.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of cells a vessel of this kind occupies.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Fresh, undamaged vessel of this kind.
    pub fn build(&self) -> Vessel {
        Vessel::new(self.name, self.size)
    }
}

/// A vessel with a fixed size and a damage counter.
///
/// `occupied_cells` is filled by the board during placement, in placement
/// order (leftmost cell first).
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Vessel {
    name: String,
    size: usize,
    damage: usize,
    occupied_cells: Vec<Coordinate>,
}

impl Vessel {
    pub fn new(name: impl Into<String>, size: usize) -> Self {
        Self {
            name: name.into(),
            size,
            damage: 0,
            occupied_cells: Vec::new(),
        }
    }

    /// Vessel identity, unique per board.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Hits taken so far. May exceed `size`.
    pub fn damage(&self) -> usize {
        self.damage
    }

    /// Count one hit against this vessel.
    pub fn register_hit(&mut self) {
        self.damage += 1;
    }

    /// `true` once damage has reached size. Never reverts.
    pub fn is_destroyed(&self) -> bool {
        self.damage >= self.size
    }

    /// Append a cell the vessel now occupies.
    pub fn record_occupied_cell(&mut self, cell: Coordinate) {
        self.occupied_cells.push(cell);
    }

    /// Occupied cells in placement order.
    pub fn occupied_cells(&self) -> &[Coordinate] {
        &self.occupied_cells
    }

    /// First and last occupied cells, used to draw a sunk vessel's outline.
    pub fn ends(&self) -> Option<(Coordinate, Coordinate)> {
        Some((*self.occupied_cells.first()?, *self.occupied_cells.last()?))
    }
}

impl fmt::Debug for Vessel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vessel {{ name: \"{}\", size: {}, damage: {}, cells: [",
            self.name, self.size, self.damage
        )?;
        for (i, c) in self.occupied_cells.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, "] }}")
    }
}
