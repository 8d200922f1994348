//! Commonly used types for ease of import.

pub use crate::{
    AttackOutcome, AttackReport, Board, Coordinate, EventLog, MatchEngine, MatchError,
    MatchEvent, Notifier, Phase, Side, FLEET,
};

#[cfg(feature = "std")]
pub use crate::{cli::render_board, init_logging};
