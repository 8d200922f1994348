use naval_duel::{Board, Cell, Coordinate, Side, Vessel, FLEET, TOTAL_SHIP_CELLS};
use proptest::prelude::*;
use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new(Side::Automated);
    board.place_remaining_fleet_randomly(&mut rng);
    board
}

fn damages(board: &Board) -> Vec<usize> {
    board.vessels().iter().map(Vessel::damage).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn attack_only_damages_the_occupant(seed in any::<u64>(), idx in 0usize..100) {
        let mut board = random_board(seed);
        let target = Coordinate::from_index(idx).unwrap();
        let before = damages(&board);
        let owner = board.occupant(target).map(|v| v.name().to_string());

        let outcome = board.receive_attack(target).unwrap();
        prop_assert_eq!(outcome.is_hit(), owner.is_some());
        prop_assert_eq!(outcome.vessel().map(str::to_string), owner.clone());

        let after = damages(&board);
        for (i, v) in board.vessels().iter().enumerate() {
            let expected = if Some(v.name()) == owner.as_deref() { before[i] + 1 } else { before[i] };
            prop_assert_eq!(after[i], expected);
        }
    }

    #[test]
    fn failed_placement_changes_nothing(
        seed in any::<u64>(),
        idx in 0usize..100,
        kind in 0usize..5,
        extra in 0usize..4,
    ) {
        let mut board = random_board(seed);
        let cells_before: Vec<Cell> = board.cells().to_vec();
        let vessels_before = board.vessels().to_vec();

        let origin = Coordinate::from_index(idx).unwrap();
        let vessel = Vessel::new(FLEET[kind].name(), FLEET[kind].size() + extra);
        // the full fleet is on the board, so the name is always taken
        prop_assert!(board.place_vessel(origin, vessel).is_err());

        prop_assert_eq!(board.cells().to_vec(), cells_before);
        prop_assert_eq!(board.vessels().to_vec(), vessels_before);
    }

    #[test]
    fn placement_is_all_or_nothing_on_empty_row(col in 0usize..10, size in 1usize..8) {
        let mut board = Board::new(Side::Human);
        let origin = Coordinate::new(col, 4).unwrap();
        let fits = col + size <= 10;
        prop_assert_eq!(board.place_vessel(origin, Vessel::new("probe", size)).is_ok(), fits);
        let occupied = board.cells().iter().filter(|c| c.is_occupied()).count();
        prop_assert_eq!(occupied, if fits { size } else { 0 });
    }

    #[test]
    fn destroyed_is_monotonic(size in 1usize..6, hits in 0usize..20) {
        let mut vessel = Vessel::new("probe", size);
        let mut sunk = false;
        for _ in 0..hits {
            vessel.register_hit();
            if sunk {
                prop_assert!(vessel.is_destroyed());
            }
            sunk = vessel.is_destroyed();
        }
        prop_assert_eq!(vessel.is_destroyed(), hits >= size);
    }

    #[test]
    fn fleet_destroyed_exactly_on_last_hit(seed in any::<u64>()) {
        let mut board = random_board(seed);
        let mut rng = SmallRng::seed_from_u64(seed ^ 0x5eed);
        let mut order: Vec<Coordinate> = board.list_coordinates();
        order.shuffle(&mut rng);

        let mut hits = 0;
        for target in order {
            prop_assert_eq!(board.all_vessels_destroyed(), hits == TOTAL_SHIP_CELLS);
            if board.receive_attack(target).unwrap().is_hit() {
                hits += 1;
            }
        }
        prop_assert_eq!(hits, TOTAL_SHIP_CELLS);
        prop_assert!(board.all_vessels_destroyed());
    }
}
