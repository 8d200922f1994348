//! Board state: cells, placed vessels and the miss log.

use alloc::vec::Vec;
use core::fmt;
use log::debug;
use rand::Rng;

use crate::common::{AttackOutcome, BoardError, Side};
use crate::config::{CELL_COUNT, FLEET, NUM_SHIPS};
use crate::coord::Coordinate;
use crate::vessel::Vessel;

/// Attack state of a single cell. `Hit` and `Missed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum CellStatus {
    Untouched,
    Hit,
    Missed,
}

/// One addressable cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    coord: Coordinate,
    occupant: Option<usize>,
    status: CellStatus,
}

impl Cell {
    fn new(coord: Coordinate) -> Self {
        Self {
            coord,
            occupant: None,
            status: CellStatus::Untouched,
        }
    }

    pub fn coord(&self) -> Coordinate {
        self.coord
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    pub fn status(&self) -> CellStatus {
        self.status
    }

    pub fn is_attacked(&self) -> bool {
        self.status != CellStatus::Untouched
    }
}

/// One side's grid, fleet and miss log.
#[derive(Clone)]
pub struct Board {
    side: Side,
    cells: [Cell; CELL_COUNT],
    // append-only; `Cell::occupant` indexes into it
    vessels: Vec<Vessel>,
    missed: Vec<Coordinate>,
}

impl Board {
    /// Create an empty board owned by `side`.
    pub fn new(side: Side) -> Self {
        Board {
            side,
            cells: core::array::from_fn(|i| Cell::new(Coordinate::nth(i))),
            vessels: Vec::new(),
            missed: Vec::new(),
        }
    }

    /// Side that owns this board.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Place `vessel` horizontally, starting at `origin` and extending right.
    ///
    /// Checks bounds, then free cells, then name uniqueness. Nothing changes
    /// unless every check passes. `vessel` is expected to be fresh (no
    /// occupied cells recorded).
    pub fn place_vessel(&mut self, origin: Coordinate, mut vessel: Vessel) -> Result<(), BoardError> {
        let targets = Self::span(origin, vessel.size())?;
        if targets.iter().any(|c| self.cells[c.index()].is_occupied()) {
            return Err(BoardError::Overlaps);
        }
        if self.vessel(vessel.name()).is_some() {
            return Err(BoardError::AlreadyPlaced);
        }

        let slot = self.vessels.len();
        for coord in targets {
            self.cells[coord.index()].occupant = Some(slot);
            vessel.record_occupied_cell(coord);
        }
        debug!("{} board: placed {} at {}", self.side, vessel.name(), origin);
        self.vessels.push(vessel);
        Ok(())
    }

    /// Place every canonical fleet entry not yet on the board, sampling
    /// origins uniformly from all 100 coordinates until one fits.
    /// Returns how many vessels were placed.
    ///
    /// While an entry is missing at most four vessels are on the board, so
    /// at least six rows are empty and a fitting origin always exists.
    pub fn place_remaining_fleet_randomly<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        let mut placed = 0;
        for kind in FLEET.iter() {
            if self.fleet_complete() {
                break;
            }
            if self.vessel(kind.name()).is_some() {
                continue;
            }
            loop {
                let origin = Coordinate::nth(rng.random_range(0..CELL_COUNT));
                if self.place_vessel(origin, kind.build()).is_ok() {
                    placed += 1;
                    break;
                }
            }
        }
        placed
    }

    /// Resolve an attack at `target`.
    ///
    /// A cell can only be attacked once; repeats return
    /// `BoardError::AlreadyAttacked` and change nothing.
    pub fn receive_attack(&mut self, target: Coordinate) -> Result<AttackOutcome, BoardError> {
        let cell = &mut self.cells[target.index()];
        if cell.is_attacked() {
            return Err(BoardError::AlreadyAttacked);
        }
        match cell.occupant {
            Some(slot) => {
                cell.status = CellStatus::Hit;
                let vessel = &mut self.vessels[slot];
                let was_destroyed = vessel.is_destroyed();
                vessel.register_hit();
                debug!("{} board: {} hit at {}", self.side, vessel.name(), target);
                if vessel.is_destroyed() && !was_destroyed {
                    Ok(AttackOutcome::Sunk {
                        vessel: vessel.name().into(),
                        cells: vessel.occupied_cells().to_vec(),
                    })
                } else {
                    Ok(AttackOutcome::Hit {
                        vessel: vessel.name().into(),
                    })
                }
            }
            None => {
                cell.status = CellStatus::Missed;
                self.missed.push(target);
                debug!("{} board: miss at {}", self.side, target);
                Ok(AttackOutcome::Miss)
            }
        }
    }

    /// `true` when every placed vessel is destroyed. Vacuously `true` for a
    /// board with no vessels.
    pub fn all_vessels_destroyed(&self) -> bool {
        self.vessels.iter().all(Vessel::is_destroyed)
    }

    /// All 100 coordinates in row-major order.
    pub fn list_coordinates(&self) -> Vec<Coordinate> {
        self.cells.iter().map(Cell::coord).collect()
    }

    /// `true` once the board holds a full fleet.
    pub fn fleet_complete(&self) -> bool {
        self.vessels.len() >= NUM_SHIPS
    }

    /// Number of placed vessels still afloat.
    pub fn remaining_vessels(&self) -> usize {
        self.vessels.iter().filter(|v| !v.is_destroyed()).count()
    }

    pub fn cell(&self, coord: Coordinate) -> &Cell {
        &self.cells[coord.index()]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Placed vessels, in placement order.
    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    pub fn vessel(&self, name: &str) -> Option<&Vessel> {
        self.vessels.iter().find(|v| v.name() == name)
    }

    /// Vessel occupying `coord`, if any.
    pub fn occupant(&self, coord: Coordinate) -> Option<&Vessel> {
        self.cells[coord.index()]
            .occupant
            .map(|slot| &self.vessels[slot])
    }

    /// Missed attacks, oldest first.
    pub fn missed_attacks(&self) -> &[Coordinate] {
        &self.missed
    }

    fn span(origin: Coordinate, size: usize) -> Result<Vec<Coordinate>, BoardError> {
        if size == 0 {
            return Err(BoardError::OutOfBounds);
        }
        (0..size)
            .map(|i| origin.step_right(i).ok_or(BoardError::OutOfBounds))
            .collect()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  side: {:?},\n  vessels: {:?},\n  missed: {:?}\n}}",
            self.side, self.vessels, self.missed
        )
    }
}
