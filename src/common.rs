//! Common types: attack outcomes and board errors.

use alloc::string::String;
use alloc::vec::Vec;

use crate::coord::Coordinate;

/// Result of an attack on a board.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(tag = "kind", rename_all = "snake_case"))]
pub enum AttackOutcome {
    /// No vessel at the target.
    Miss,
    /// Struck a vessel that is still afloat.
    Hit { vessel: String },
    /// Struck the last intact cell of a vessel. Carries its cells in
    /// placement order.
    Sunk { vessel: String, cells: Vec<Coordinate> },
}

impl AttackOutcome {
    /// `true` for `Hit` and `Sunk`.
    pub fn is_hit(&self) -> bool {
        !matches!(self, AttackOutcome::Miss)
    }

    /// Name of the vessel struck, if any.
    pub fn vessel(&self) -> Option<&str> {
        match self {
            AttackOutcome::Miss => None,
            AttackOutcome::Hit { vessel } | AttackOutcome::Sunk { vessel, .. } => Some(vessel),
        }
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Vessel would run past column J (or has no size).
    OutOfBounds,
    /// Vessel placement overlaps another vessel.
    Overlaps,
    /// A vessel with this name is already on the board.
    AlreadyPlaced,
    /// Target cell was already attacked.
    AlreadyAttacked,
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::OutOfBounds => write!(f, "Vessel placement is out of bounds"),
            BoardError::Overlaps => write!(f, "Vessel placement overlaps with another vessel"),
            BoardError::AlreadyPlaced => write!(f, "Vessel is already placed on the board"),
            BoardError::AlreadyAttacked => write!(f, "Cell was already attacked"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// The two sides of a match. A board's side is its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum Side {
    Human,
    Automated,
}

impl Side {
    /// The other side.
    pub fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Automated,
            Side::Automated => Side::Human,
        }
    }
}

impl core::fmt::Display for Side {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Side::Human => write!(f, "human"),
            Side::Automated => write!(f, "automated"),
        }
    }
}
