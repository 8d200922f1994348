use naval_duel::{
    AttackOutcome, AttackReport, BoardError, CellStatus, CoordError, Coordinate, EventLog,
    MatchEngine, MatchError,
    MatchEvent, Phase, Side, FLEET, TOTAL_SHIP_CELLS,
};

const LAYOUT: [(&str, &str, usize); 5] = [
    ("A1", "carrier", 5),
    ("C3", "battleship", 4),
    ("D5", "destroyer", 3),
    ("B7", "submarine", 3),
    ("G9", "patrol", 2),
];

fn at(s: &str) -> Coordinate {
    s.parse().unwrap()
}

fn place_layout(engine: &mut MatchEngine<EventLog>) {
    for (origin, name, size) in LAYOUT {
        engine.submit_placement(at(origin), name, size).unwrap();
    }
}

fn started(seed: u64) -> MatchEngine<EventLog> {
    let mut engine = MatchEngine::with_seed(EventLog::new(), seed);
    engine.start_match();
    place_layout(&mut engine);
    engine
}

fn opponent_cells(engine: &MatchEngine<EventLog>) -> Vec<Coordinate> {
    engine
        .opponent_board()
        .vessels()
        .iter()
        .flat_map(|v| v.occupied_cells().to_vec())
        .collect()
}

fn first_opponent_miss(engine: &MatchEngine<EventLog>) -> Coordinate {
    Coordinate::all()
        .find(|c| {
            let cell = engine.opponent_board().cell(*c);
            !cell.is_occupied() && !cell.is_attacked()
        })
        .unwrap()
}

#[test]
fn test_setup_to_human_turn() {
    let mut engine = MatchEngine::with_seed(EventLog::new(), 1);
    assert_eq!(engine.phase(), Phase::Setup);
    assert_eq!(engine.active_side(), None);

    engine.start_match();
    assert!(engine.opponent_board().fleet_complete());
    assert!(engine.notifier().events().is_empty());

    // idempotent
    let layout = engine.opponent_board().vessels().to_vec();
    engine.start_match();
    assert_eq!(engine.opponent_board().vessels(), &layout[..]);
    assert!(engine.notifier().events().is_empty());

    for (origin, name, size) in LAYOUT[..4].iter() {
        engine.submit_placement(at(origin), name, *size).unwrap();
        assert_eq!(engine.phase(), Phase::Setup);
    }
    engine.submit_placement(at("G9"), "patrol", 2).unwrap();
    assert_eq!(engine.phase(), Phase::HumanTurn);
    assert_eq!(engine.active_side(), Some(Side::Human));

    let events = engine.notifier_mut().drain();
    assert_eq!(
        events,
        [
            MatchEvent::FleetReady { side: Side::Human },
            MatchEvent::TurnChanged {
                active: Side::Human
            },
        ]
    );

    assert_eq!(
        engine.submit_placement(at("A10"), "extra", 2),
        Err(MatchError::OutOfTurn {
            phase: Phase::HumanTurn
        })
    );
    assert_eq!(
        engine.request_random_placement(Side::Human),
        Err(MatchError::OutOfTurn {
            phase: Phase::HumanTurn
        })
    );
}

#[test]
fn test_human_fleet_before_start() {
    let mut engine = MatchEngine::with_seed(EventLog::new(), 2);
    place_layout(&mut engine);
    assert_eq!(engine.phase(), Phase::Setup);
    assert_eq!(
        engine.submit_placement(at("A10"), "extra", 2),
        Err(MatchError::FleetComplete)
    );

    engine.start_match();
    assert_eq!(engine.phase(), Phase::HumanTurn);
    let ready: Vec<_> = engine
        .notifier()
        .events()
        .iter()
        .filter(|e| matches!(e, MatchEvent::FleetReady { .. }))
        .collect();
    assert_eq!(ready, [&MatchEvent::FleetReady { side: Side::Human }]);
}

#[test]
fn test_placement_must_match_fleet_entry() {
    let mut engine = MatchEngine::with_seed(EventLog::new(), 13);
    engine.start_match();
    assert_eq!(
        engine.submit_placement(at("A1"), "dinghy", 1),
        Err(MatchError::UnknownVessel("dinghy".into()))
    );
    assert_eq!(
        engine.submit_placement(at("A1"), "carrier", 1),
        Err(MatchError::WrongSize {
            vessel: "carrier",
            expected: 5
        })
    );
    assert!(engine.human_board().vessels().is_empty());
    assert!(engine.human_board().cells().iter().all(|c| !c.is_occupied()));

    engine.request_random_placement(Side::Human).unwrap();
    assert_eq!(engine.phase(), Phase::HumanTurn);
    assert_eq!(engine.human_board().vessel("carrier").unwrap().size(), 5);
    let cells = engine
        .human_board()
        .cells()
        .iter()
        .filter(|c| c.is_occupied())
        .count();
    assert_eq!(cells, TOTAL_SHIP_CELLS);
}

#[test]
fn test_invalid_placement_surfaces_board_error() {
    let mut engine = MatchEngine::with_seed(EventLog::new(), 3);
    engine.start_match();
    engine.submit_placement(at("A1"), "carrier", 5).unwrap();
    assert_eq!(
        engine.submit_placement(at("C1"), "battleship", 4),
        Err(MatchError::Board(BoardError::Overlaps))
    );
    assert_eq!(
        engine.submit_placement(at("I2"), "battleship", 4),
        Err(MatchError::Board(BoardError::OutOfBounds))
    );
    assert_eq!(
        engine.submit_placement(at("A2"), "carrier", 5),
        Err(MatchError::Board(BoardError::AlreadyPlaced))
    );
    assert_eq!(engine.human_board().vessels().len(), 1);
}

#[test]
fn test_random_human_placement_completes_setup() {
    let mut engine = MatchEngine::with_seed(EventLog::new(), 4);
    engine.start_match();
    engine.submit_placement(at("A1"), "carrier", 5).unwrap();
    assert_eq!(engine.request_random_placement(Side::Human), Ok(FLEET.len() - 1));
    assert_eq!(engine.phase(), Phase::HumanTurn);
    assert_eq!(
        engine.human_board().vessel("carrier").unwrap().occupied_cells()[0],
        at("A1")
    );
}

#[test]
fn test_attack_before_setup_is_rejected() {
    let mut engine = MatchEngine::with_seed(EventLog::new(), 5);
    assert_eq!(
        engine.submit_human_attack(at("A1")),
        Err(MatchError::OutOfTurn {
            phase: Phase::Setup
        })
    );
    assert_eq!(
        engine.play_automated_move(),
        Err(MatchError::OutOfTurn {
            phase: Phase::Setup
        })
    );
}

#[test]
fn test_human_hit_keeps_turn_miss_passes_it() {
    let mut engine = started(6);
    let target = opponent_cells(&engine)[0];

    let report = engine.submit_human_attack(target).unwrap();
    assert!(report.outcome.is_hit());
    assert_eq!(report.phase, Phase::HumanTurn);

    assert_eq!(
        engine.submit_human_attack(target),
        Err(MatchError::Board(BoardError::AlreadyAttacked))
    );
    assert_eq!(engine.phase(), Phase::HumanTurn);

    let miss = first_opponent_miss(&engine);
    let report = engine.submit_human_attack(miss).unwrap();
    assert_eq!(report.outcome, AttackOutcome::Miss);
    assert_eq!(report.phase, Phase::AutomatedTurn);
    assert_eq!(engine.opponent_board().missed_attacks(), &[miss]);

    assert_eq!(
        engine.submit_human_attack(first_opponent_miss(&engine)),
        Err(MatchError::OutOfTurn {
            phase: Phase::AutomatedTurn
        })
    );
}

#[test]
fn test_raw_input_is_validated() {
    let mut engine = started(7);
    assert_eq!(
        engine.submit_human_input("Z9"),
        Err(MatchError::Coord(CoordError::BadColumn('Z')))
    );
    assert_eq!(
        engine.submit_human_input("A11"),
        Err(MatchError::Coord(CoordError::BadRow))
    );
    assert_eq!(engine.phase(), Phase::HumanTurn);
    assert!(engine
        .opponent_board()
        .cells()
        .iter()
        .all(|c| !c.is_attacked()));

    let miss = first_opponent_miss(&engine);
    let report = engine.submit_human_input(&miss.to_string()).unwrap();
    assert_eq!(report.target, miss);
}

/// Pass the turn with human misses until an automated turn lands at least
/// `min_hits` hits and then misses. Returns that turn's reports.
fn automated_streak(
    engine: &mut MatchEngine<EventLog>,
    min_hits: usize,
) -> Option<Vec<AttackReport>> {
    while engine.phase() == Phase::HumanTurn {
        let miss = Coordinate::all().find(|c| {
            let cell = engine.opponent_board().cell(*c);
            !cell.is_occupied() && !cell.is_attacked()
        })?;
        engine.submit_human_attack(miss).unwrap();
        let reports = engine.play_automated_turn().unwrap();
        if reports.len() > min_hits && engine.phase() == Phase::HumanTurn {
            return Some(reports);
        }
    }
    None
}

#[test]
fn test_automated_turn_runs_until_miss() {
    let (mut engine, reports) = (0..200)
        .find_map(|seed| {
            let mut engine = started(seed);
            automated_streak(&mut engine, 3).map(|reports| (engine, reports))
        })
        .expect("some seed gives a streak of three hits");

    let (last, hits) = reports.split_last().unwrap();
    assert!(hits.len() >= 3);
    for r in hits {
        assert_eq!(r.attacker, Side::Automated);
        assert!(r.outcome.is_hit());
        assert_eq!(r.phase, Phase::AutomatedTurn);
        assert_eq!(engine.human_board().cell(r.target).status(), CellStatus::Hit);
    }
    assert_eq!(last.attacker, Side::Automated);
    assert_eq!(last.outcome, AttackOutcome::Miss);
    assert_eq!(last.phase, Phase::HumanTurn);
    assert_eq!(engine.active_side(), Some(Side::Human));
    assert_eq!(engine.human_board().missed_attacks().last(), Some(&last.target));
    assert_eq!(
        engine.play_automated_move(),
        Err(MatchError::OutOfTurn {
            phase: Phase::HumanTurn
        })
    );

    let turns = engine
        .notifier()
        .events()
        .iter()
        .filter(|e| matches!(e, MatchEvent::TurnChanged { active: Side::Human }))
        .count();
    assert!(turns >= 2);
    assert!(engine.winner().is_none());
}

#[test]
fn test_human_sinks_fleet_and_wins() {
    let mut engine = started(9);
    let targets = opponent_cells(&engine);
    assert_eq!(targets.len(), TOTAL_SHIP_CELLS);
    engine.notifier_mut().drain();

    for (i, t) in targets.iter().enumerate() {
        assert_eq!(engine.winner(), None, "won early after {} hits", i);
        engine.submit_human_attack(*t).unwrap();
    }
    assert_eq!(
        engine.phase(),
        Phase::MatchOver {
            winner: Side::Human
        }
    );
    assert_eq!(engine.winner(), Some(Side::Human));
    assert!(engine.all_vessels_destroyed(Side::Automated));
    assert!(!engine.all_vessels_destroyed(Side::Human));

    let events = engine.notifier().events();
    let sunk: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            MatchEvent::VesselSunk {
                owner,
                vessel,
                cells,
                message,
            } => Some((*owner, vessel.clone(), cells.len(), message.clone())),
            _ => None,
        })
        .collect();
    assert_eq!(sunk.len(), FLEET.len());
    for (owner, vessel, len, message) in sunk {
        assert_eq!(owner, Side::Automated);
        assert_eq!(len, FLEET.iter().find(|k| k.name() == vessel).unwrap().size());
        assert_eq!(message, format!("You sunk the enemy's {}!", vessel));
    }
    assert_eq!(
        events.last(),
        Some(&MatchEvent::MatchOver {
            winner: Side::Human
        })
    );

    let over = engine.phase();
    assert_eq!(
        engine.submit_human_attack(first_opponent_miss(&engine)),
        Err(MatchError::OutOfTurn { phase: over })
    );
    assert_eq!(
        engine.play_automated_move(),
        Err(MatchError::OutOfTurn { phase: over })
    );
}

#[test]
fn test_sunk_event_carries_cells_in_order() {
    let mut engine = started(10);
    let patrol = engine
        .opponent_board()
        .vessel("patrol")
        .unwrap()
        .occupied_cells()
        .to_vec();
    for c in &patrol {
        engine.submit_human_attack(*c).unwrap();
    }
    let sunk = engine
        .notifier()
        .events()
        .iter()
        .find_map(|e| match e {
            MatchEvent::VesselSunk { vessel, cells, .. } => Some((vessel.clone(), cells.clone())),
            _ => None,
        })
        .unwrap();
    assert_eq!(sunk, ("patrol".to_string(), patrol));
}

#[test]
fn test_restart_resets_everything() {
    let mut engine = started(11);
    engine.submit_human_attack(first_opponent_miss(&engine)).unwrap();
    engine.play_automated_turn().unwrap();

    engine.restart_match();
    assert_eq!(engine.phase(), Phase::Setup);
    assert!(engine.human_board().vessels().is_empty());
    assert!(engine.opponent_board().vessels().is_empty());
    assert!(engine.opponent_board().missed_attacks().is_empty());
    assert!(engine.human_board().cells().iter().all(|c| !c.is_attacked()));
    assert_eq!(engine.automated_moves_remaining(), 100);
    assert_eq!(engine.notifier().events().last(), Some(&MatchEvent::Restarted));

    engine.start_match();
    place_layout(&mut engine);
    assert_eq!(engine.phase(), Phase::HumanTurn);
}

#[test]
fn test_same_seed_same_match() {
    let a = started(12);
    let b = started(12);
    assert_eq!(a.opponent_board().vessels(), b.opponent_board().vessels());
}
