#![cfg(feature = "std")]

//! Text rendering for the terminal front-end.

use std::fmt::Write;
use std::string::String;

use crate::{
    board::{Board, CellStatus},
    common::{AttackOutcome, Side},
    config::BOARD_SIZE,
    coord::Coordinate,
    events::{MatchEvent, Notifier},
    game::{AttackReport, MatchEngine},
};

/// Draw `board` as a grid. `X` hit, `o` miss, `S` vessel (only when
/// `reveal` is set), `.` anything else.
pub fn render_board(board: &Board, reveal: bool) -> String {
    let mut out = String::new();
    out.push_str("   ");
    for c in 0..BOARD_SIZE as usize {
        let ch = (b'A' + c as u8) as char;
        let _ = write!(out, " {}", ch);
    }
    out.push('\n');
    for coord in Coordinate::all() {
        if coord.col() == 0 {
            let _ = write!(out, "{:2} ", coord.number());
        }
        let cell = board.cell(coord);
        let ch = match cell.status() {
            CellStatus::Hit => 'X',
            CellStatus::Missed => 'o',
            CellStatus::Untouched if reveal && cell.is_occupied() => 'S',
            CellStatus::Untouched => '.',
        };
        let _ = write!(out, " {}", ch);
        if coord.col() == BOARD_SIZE as usize - 1 {
            out.push('\n');
        }
    }
    out
}

/// Display the opponent board (top, hidden) and the player's board (bottom).
pub fn print_player_view<N: Notifier>(engine: &MatchEngine<N>) {
    std::println!("Opponent board:");
    std::print!("{}", render_board(engine.opponent_board(), false));
    std::println!("\nYour board:");
    std::print!("{}", render_board(engine.human_board(), true));
}

/// One-line summary of a resolved attack.
pub fn describe_report(report: &AttackReport) -> String {
    let who = match report.attacker {
        Side::Human => "You",
        Side::Automated => "Opponent",
    };
    let what = match &report.outcome {
        AttackOutcome::Miss => String::from("miss"),
        AttackOutcome::Hit { vessel } => std::format!("hit ({})", vessel),
        AttackOutcome::Sunk { vessel, .. } => std::format!("hit, {} sunk", vessel),
    };
    std::format!("{} fired at {} -> {}", who, report.target, what)
}

/// Human-readable text for events worth announcing, `None` for the rest.
pub fn describe_event(event: &MatchEvent) -> Option<String> {
    match event {
        MatchEvent::VesselSunk { message, cells, .. } => {
            let span = match (cells.first(), cells.last()) {
                (Some(a), Some(b)) => std::format!(" ({}-{})", a, b),
                _ => String::new(),
            };
            Some(std::format!("{}{}", message, span))
        }
        MatchEvent::MatchOver { winner: Side::Human } => Some("You win!".into()),
        MatchEvent::MatchOver { winner: Side::Automated } => Some("You lose.".into()),
        MatchEvent::FleetReady { side: Side::Human } => {
            Some("Fleet ready. Take your shot.".into())
        }
        _ => None,
    }
}
