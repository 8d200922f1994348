use crate::coord::{CoordError, Coordinate};

/// Turns raw human input into an attack target.
///
/// Only the text format is checked here. Whether the target was already
/// attacked is decided by the board.
#[derive(Debug, Default, Clone, Copy)]
pub struct HumanSelector;

impl HumanSelector {
    pub fn new() -> Self {
        Self
    }

    /// Parse `input` (e.g. `"C3"`) into a coordinate.
    pub fn select(&self, input: &str) -> Result<Coordinate, CoordError> {
        input.parse()
    }
}
