//! Match orchestration: setup, alternating turns and match end.
//!
//! The engine never waits on anything. Each public call runs to completion
//! and returns; a front-end decides when the next call happens (for example
//! after a delay before the automated side's move).

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::board::Board;
use crate::common::{AttackOutcome, BoardError, Side};
use crate::config::fleet_kind;
use crate::coord::{CoordError, Coordinate};
use crate::events::{MatchEvent, NullNotifier, Notifier};
use crate::player::HumanSelector;
use crate::player_ai::AutomatedSelector;

/// Where a match currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(tag = "phase", rename_all = "snake_case"))]
pub enum Phase {
    /// Fleets are being placed.
    Setup,
    HumanTurn,
    AutomatedTurn,
    /// Terminal until restart.
    MatchOver { winner: Side },
}

impl Phase {
    fn turn_of(side: Side) -> Phase {
        match side {
            Side::Human => Phase::HumanTurn,
            Side::Automated => Phase::AutomatedTurn,
        }
    }

    /// Side allowed to attack, if any.
    pub fn active_side(self) -> Option<Side> {
        match self {
            Phase::HumanTurn => Some(Side::Human),
            Phase::AutomatedTurn => Some(Side::Automated),
            Phase::Setup | Phase::MatchOver { .. } => None,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Setup => write!(f, "setup"),
            Phase::HumanTurn => write!(f, "human turn"),
            Phase::AutomatedTurn => write!(f, "automated turn"),
            Phase::MatchOver { winner } => write!(f, "match over ({} won)", winner),
        }
    }
}

/// Rejected engine calls. None of them change any state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// The call is not allowed in the current phase.
    OutOfTurn { phase: Phase },
    /// The human fleet is already complete.
    FleetComplete,
    /// The name is not an entry of the canonical fleet.
    UnknownVessel(String),
    /// The size does not match the fleet entry with that name.
    WrongSize { vessel: &'static str, expected: usize },
    Board(BoardError),
    Coord(CoordError),
    /// The automated selector has no coordinates left.
    NoMovesLeft,
}

impl From<BoardError> for MatchError {
    fn from(err: BoardError) -> Self {
        MatchError::Board(err)
    }
}

impl From<CoordError> for MatchError {
    fn from(err: CoordError) -> Self {
        MatchError::Coord(err)
    }
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::OutOfTurn { phase } => write!(f, "Not allowed during {}", phase),
            MatchError::FleetComplete => write!(f, "All vessels are already placed"),
            MatchError::UnknownVessel(name) => write!(f, "No vessel named {} in the fleet", name),
            MatchError::WrongSize { vessel, expected } => {
                write!(f, "The {} has length {}", vessel, expected)
            }
            MatchError::Board(e) => write!(f, "{}", e),
            MatchError::Coord(e) => write!(f, "{}", e),
            MatchError::NoMovesLeft => write!(f, "No moves left to play"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MatchError {}

/// What a single resolved attack did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackReport {
    pub attacker: Side,
    pub target: Coordinate,
    pub outcome: AttackOutcome,
    /// Phase after the attack was resolved.
    pub phase: Phase,
}

/// Owns both boards and both move selectors for one match at a time.
pub struct MatchEngine<N: Notifier = NullNotifier> {
    phase: Phase,
    human_board: Board,
    opponent_board: Board,
    human: HumanSelector,
    automated: AutomatedSelector,
    rng: SmallRng,
    notifier: N,
}

impl<N: Notifier> MatchEngine<N> {
    /// New engine in setup, drawing randomness from `rng`.
    pub fn new(notifier: N, rng: SmallRng) -> Self {
        Self {
            phase: Phase::Setup,
            human_board: Board::new(Side::Human),
            opponent_board: Board::new(Side::Automated),
            human: HumanSelector::new(),
            automated: AutomatedSelector::new(),
            rng,
            notifier,
        }
    }

    /// Reproducible engine: the same seed and inputs give the same match.
    pub fn with_seed(notifier: N, seed: u64) -> Self {
        Self::new(notifier, SmallRng::seed_from_u64(seed))
    }

    #[cfg(feature = "std")]
    pub fn from_entropy(notifier: N) -> Self {
        let mut seed_rng = rand::rng();
        Self::new(notifier, SmallRng::from_rng(&mut seed_rng))
    }

    /// Place the automated fleet. Calling again has no effect.
    pub fn start_match(&mut self) {
        if self.phase != Phase::Setup || self.opponent_board.fleet_complete() {
            return;
        }
        info!("starting match");
        self.place_randomly(Side::Automated);
    }

    /// Place one human vessel during setup. `name` and `size` must match an
    /// entry of [`FLEET`](crate::config::FLEET).
    pub fn submit_placement(
        &mut self,
        origin: Coordinate,
        name: &str,
        size: usize,
    ) -> Result<(), MatchError> {
        self.expect_phase(Phase::Setup)?;
        if self.human_board.fleet_complete() {
            return Err(MatchError::FleetComplete);
        }
        let kind = fleet_kind(name).ok_or_else(|| MatchError::UnknownVessel(name.into()))?;
        if kind.size() != size {
            return Err(MatchError::WrongSize {
                vessel: kind.name(),
                expected: kind.size(),
            });
        }
        self.human_board.place_vessel(origin, kind.build())?;
        self.after_placement(Side::Human, false);
        Ok(())
    }

    /// Randomly place whatever part of `side`'s canonical fleet is missing.
    /// Returns how many vessels were placed.
    pub fn request_random_placement(&mut self, side: Side) -> Result<usize, MatchError> {
        self.expect_phase(Phase::Setup)?;
        Ok(self.place_randomly(side))
    }

    /// Resolve a human attack on the automated side's board.
    pub fn submit_human_attack(&mut self, target: Coordinate) -> Result<AttackReport, MatchError> {
        self.expect_phase(Phase::HumanTurn)?;
        let outcome = self.opponent_board.receive_attack(target)?;
        Ok(self.resolve(Side::Human, target, outcome))
    }

    /// Like [`Self::submit_human_attack`], taking raw text such as `"C3"`.
    pub fn submit_human_input(&mut self, input: &str) -> Result<AttackReport, MatchError> {
        self.expect_phase(Phase::HumanTurn)?;
        let target = self.human.select(input)?;
        self.submit_human_attack(target)
    }

    /// Resolve exactly one automated move. After a hit the phase stays
    /// `AutomatedTurn` and the caller should schedule another move.
    pub fn play_automated_move(&mut self) -> Result<AttackReport, MatchError> {
        self.expect_phase(Phase::AutomatedTurn)?;
        let target = self
            .automated
            .next_move(&mut self.rng)
            .ok_or(MatchError::NoMovesLeft)?;
        let outcome = self.human_board.receive_attack(target)?;
        Ok(self.resolve(Side::Automated, target, outcome))
    }

    /// Keep playing automated moves until a miss or a win.
    pub fn play_automated_turn(&mut self) -> Result<Vec<AttackReport>, MatchError> {
        let mut reports = Vec::new();
        loop {
            let report = self.play_automated_move()?;
            let done = report.phase != Phase::AutomatedTurn;
            reports.push(report);
            if done {
                return Ok(reports);
            }
        }
    }

    /// Throw the current match away and return to setup with fresh boards
    /// and selectors. Allowed from any phase.
    pub fn restart_match(&mut self) {
        self.phase = Phase::Setup;
        self.human_board = Board::new(Side::Human);
        self.opponent_board = Board::new(Side::Automated);
        self.human = HumanSelector::new();
        self.automated = AutomatedSelector::new();
        info!("match restarted");
        self.notifier.notify(&MatchEvent::Restarted);
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Side whose turn it is, `None` during setup and after the match.
    pub fn active_side(&self) -> Option<Side> {
        self.phase.active_side()
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            Phase::MatchOver { winner } => Some(winner),
            _ => None,
        }
    }

    /// Board owned by `side`.
    pub fn board(&self, side: Side) -> &Board {
        match side {
            Side::Human => &self.human_board,
            Side::Automated => &self.opponent_board,
        }
    }

    pub fn human_board(&self) -> &Board {
        &self.human_board
    }

    pub fn opponent_board(&self) -> &Board {
        &self.opponent_board
    }

    /// Whether every vessel on `side`'s board is destroyed.
    pub fn all_vessels_destroyed(&self, side: Side) -> bool {
        self.board(side).all_vessels_destroyed()
    }

    /// All 100 coordinates in row-major order.
    pub fn list_coordinates(&self) -> Vec<Coordinate> {
        self.human_board.list_coordinates()
    }

    /// Moves the automated side can still make.
    pub fn automated_moves_remaining(&self) -> usize {
        self.automated.remaining()
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), MatchError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(MatchError::OutOfTurn { phase: self.phase })
        }
    }

    fn place_randomly(&mut self, side: Side) -> usize {
        let was_complete = self.board(side).fleet_complete();
        // split borrow: board and rng are separate fields
        let board = match side {
            Side::Human => &mut self.human_board,
            Side::Automated => &mut self.opponent_board,
        };
        let placed = board.place_remaining_fleet_randomly(&mut self.rng);
        self.after_placement(side, was_complete);
        placed
    }

    fn after_placement(&mut self, side: Side, was_complete: bool) {
        if was_complete || !self.board(side).fleet_complete() {
            return;
        }
        info!("{} fleet ready", side);
        if side == Side::Human {
            self.notifier.notify(&MatchEvent::FleetReady { side });
        }
        if self.human_board.fleet_complete() && self.opponent_board.fleet_complete() {
            self.phase = Phase::HumanTurn;
            info!("setup complete, human to move");
            self.notifier
                .notify(&MatchEvent::TurnChanged { active: Side::Human });
        }
    }

    fn resolve(&mut self, attacker: Side, target: Coordinate, outcome: AttackOutcome) -> AttackReport {
        let defender = attacker.opponent();
        self.notifier.notify(&MatchEvent::AttackResolved {
            attacker,
            target,
            outcome: outcome.clone(),
        });

        if let AttackOutcome::Sunk { vessel, cells } = &outcome {
            let message = sunk_message(attacker, vessel);
            info!("{}", message);
            self.notifier.notify(&MatchEvent::VesselSunk {
                owner: defender,
                vessel: vessel.clone(),
                cells: cells.clone(),
                message,
            });
        }

        if self.board(defender).all_vessels_destroyed() {
            self.phase = Phase::MatchOver { winner: attacker };
            info!("match over, {} side wins", attacker);
            self.notifier.notify(&MatchEvent::MatchOver { winner: attacker });
        } else if !outcome.is_hit() {
            self.phase = Phase::turn_of(defender);
            self.notifier
                .notify(&MatchEvent::TurnChanged { active: defender });
        }

        AttackReport {
            attacker,
            target,
            outcome,
            phase: self.phase,
        }
    }
}

fn sunk_message(attacker: Side, vessel: &str) -> String {
    match attacker {
        Side::Human => format!("You sunk the enemy's {}!", vessel),
        Side::Automated => format!("The enemy sunk your {}!", vessel),
    }
}
