use alloc::vec::Vec;
use rand::Rng;

use crate::coord::Coordinate;

/// Uniform random opponent that never fires at the same cell twice.
#[derive(Debug, Clone)]
pub struct AutomatedSelector {
    available: Vec<Coordinate>,
}

impl AutomatedSelector {
    /// Selector with all 100 coordinates available.
    pub fn new() -> Self {
        Self {
            available: Coordinate::all().collect(),
        }
    }

    /// Draw a random remaining coordinate and remove it from the pool.
    /// Returns `None` once every coordinate has been used.
    pub fn next_move<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Coordinate> {
        if self.available.is_empty() {
            return None;
        }
        let idx = rng.random_range(0..self.available.len());
        Some(self.available.swap_remove(idx))
    }

    /// Coordinates not yet chosen.
    pub fn remaining(&self) -> usize {
        self.available.len()
    }
}

impl Default for AutomatedSelector {
    fn default() -> Self {
        Self::new()
    }
}
