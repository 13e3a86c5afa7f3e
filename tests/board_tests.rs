use seabattle::{Board, FireOutcome, FleetRules, PlacementError};

type Pair = ((usize, usize), (usize, usize));

/// A legal classic layout: one 4-deck, two 3-deck, three 2-deck, four
/// 1-deck ships, all separated by at least one empty cell.
fn classic_layout() -> Vec<Pair> {
    vec![
        ((0, 0), (0, 3)),
        ((2, 0), (2, 2)),
        ((2, 4), (2, 6)),
        ((4, 0), (4, 1)),
        ((4, 3), (4, 4)),
        ((4, 6), (4, 7)),
        ((6, 0), (6, 0)),
        ((6, 2), (6, 2)),
        ((6, 4), (6, 4)),
        ((6, 6), (6, 6)),
    ]
}

#[test]
fn test_valid_layout_constructs() {
    let board = Board::new(&classic_layout()).unwrap();
    assert_eq!(board.ships().len(), 10);
    assert_eq!(board.occupied().count_ones(), 20);
    assert!(!board.all_sunk());
}

#[test]
fn test_wrong_ship_count() {
    let mut layout = classic_layout();
    layout.pop();
    assert_eq!(
        Board::new(&layout).unwrap_err(),
        PlacementError::WrongShipCount {
            expected: 10,
            found: 9,
        }
    );
}

#[test]
fn test_wrong_size_histogram() {
    let mut layout = classic_layout();
    // swap a single for a second 4-deck ship, far from everything else
    layout[6] = ((10, 0), (10, 3));
    let err = Board::new(&layout).unwrap_err();
    assert!(matches!(err, PlacementError::WrongSizeCounts { .. }));
}

#[test]
fn test_overlong_ship_rejected_by_histogram() {
    let mut layout = classic_layout();
    // stretch the 4-deck ship to 5 decks
    layout[0] = ((0, 0), (0, 4));
    let err = Board::new(&layout).unwrap_err();
    assert_eq!(
        err,
        PlacementError::WrongSizeCounts {
            length: 5,
            expected: 0,
            found: 1,
        }
    );
}

#[test]
fn test_overlapping_ships_rejected() {
    let mut layout = classic_layout();
    // move a single onto a cell of the 4-deck ship
    layout[6] = ((0, 1), (0, 1));
    assert_eq!(
        Board::new(&layout).unwrap_err(),
        PlacementError::ShipsOverlap { row: 0, col: 1 }
    );
}

#[test]
fn test_touching_ships_rejected() {
    let mut layout = classic_layout();
    // single directly below the 4-deck ship
    layout[6] = ((1, 0), (1, 0));
    let err = Board::new(&layout).unwrap_err();
    assert!(matches!(err, PlacementError::ShipsTouching { .. }));
}

#[test]
fn test_diagonally_touching_ships_rejected() {
    let mut layout = classic_layout();
    // single at (5, 5) touches (4, 4), (4, 6), (6, 4) and (6, 6) only
    // diagonally; every orthogonal neighbor is empty
    layout[6] = ((5, 5), (5, 5));
    let err = Board::new(&layout).unwrap_err();
    assert!(matches!(err, PlacementError::ShipsTouching { .. }));
}

#[test]
fn test_slanted_pair_fails_construction() {
    let mut layout = classic_layout();
    layout[6] = ((6, 0), (7, 1));
    assert_eq!(
        Board::new(&layout).unwrap_err(),
        PlacementError::SlantedShip {
            start: (6, 0),
            end: (7, 1),
        }
    );
}

#[test]
fn test_miss_changes_nothing() {
    let mut board = Board::new(&classic_layout()).unwrap();
    assert_eq!(board.fire(10, 10), FireOutcome::Miss);
    assert_eq!(board.fire(1, 1), FireOutcome::Miss);
    for ship in board.ships() {
        assert!(ship.decks().iter().all(|d| d.alive));
        assert!(!ship.is_sunk());
    }
}

#[test]
fn test_out_of_range_shot_is_miss() {
    let mut board = Board::new(&classic_layout()).unwrap();
    assert_eq!(board.fire(11, 0), FireOutcome::Miss);
    assert_eq!(board.fire(0, 11), FireOutcome::Miss);
    assert_eq!(board.fire(100, 100), FireOutcome::Miss);
}

#[test]
fn test_hit_then_sink_three_decker() {
    let mut board = Board::new(&classic_layout()).unwrap();
    assert_eq!(board.fire(2, 0), FireOutcome::Hit);
    assert_eq!(board.fire(2, 1), FireOutcome::Hit);
    assert_eq!(board.fire(2, 2), FireOutcome::Sunk);
    assert!(board.ship_at(2, 0).unwrap().is_sunk());
}

#[test]
fn test_refire_repeats_outcome() {
    let mut board = Board::new(&classic_layout()).unwrap();
    assert_eq!(board.fire(0, 0), FireOutcome::Hit);
    // same dead deck, ship still afloat
    assert_eq!(board.fire(0, 0), FireOutcome::Hit);
    assert_eq!(board.fire(0, 1), FireOutcome::Hit);
    assert_eq!(board.fire(0, 2), FireOutcome::Hit);
    assert_eq!(board.fire(0, 3), FireOutcome::Sunk);
    // any cell of a sunk ship keeps reporting Sunk
    assert_eq!(board.fire(0, 0), FireOutcome::Sunk);
    assert_eq!(board.fire(0, 3), FireOutcome::Sunk);
}

#[test]
fn test_single_deck_ship_sinks_immediately() {
    // layout with a lone single at (0, 0) and nothing at (5, 5)
    let layout: Vec<Pair> = vec![
        ((0, 0), (0, 0)),
        ((2, 0), (2, 3)),
        ((0, 5), (0, 7)),
        ((2, 5), (2, 7)),
        ((4, 0), (4, 1)),
        ((6, 0), (6, 1)),
        ((8, 0), (8, 1)),
        ((8, 3), (8, 3)),
        ((10, 0), (10, 0)),
        ((10, 5), (10, 5)),
    ];
    let mut board = Board::new(&layout).unwrap();
    assert_eq!(board.fire(0, 0), FireOutcome::Sunk);
    assert_eq!(board.fire(5, 5), FireOutcome::Miss);
}

#[test]
fn test_two_decker_hit_sunk_refire() {
    // layout with a 2-deck ship spanning (2, 2)-(2, 3)
    let layout: Vec<Pair> = vec![
        ((2, 2), (2, 3)),
        ((0, 6), (0, 9)),
        ((4, 0), (4, 2)),
        ((4, 4), (4, 6)),
        ((6, 0), (6, 1)),
        ((6, 3), (6, 4)),
        ((8, 0), (8, 0)),
        ((8, 2), (8, 2)),
        ((8, 4), (8, 4)),
        ((8, 6), (8, 6)),
    ];
    let mut board = Board::new(&layout).unwrap();
    assert_eq!(board.fire(2, 2), FireOutcome::Hit);
    assert_eq!(board.fire(2, 3), FireOutcome::Sunk);
    // already-dead deck of a sunk ship still reports Sunk
    assert_eq!(board.fire(2, 2), FireOutcome::Sunk);
}

#[test]
fn test_all_sunk() {
    let mut board = Board::new(&classic_layout()).unwrap();
    let targets: Vec<(usize, usize)> = board
        .ships()
        .iter()
        .flat_map(|s| s.decks().iter().map(|d| (d.row, d.col)))
        .collect();
    for (row, col) in targets {
        board.fire(row, col);
    }
    assert!(board.all_sunk());
}

#[test]
fn test_custom_rules() {
    // a tiny fleet of two singles, far apart
    let rules = FleetRules::new([2, 0, 0, 0]);
    let layout: Vec<Pair> = vec![((0, 0), (0, 0)), ((5, 5), (5, 5))];
    let board = Board::with_rules(&layout, rules).unwrap();
    assert_eq!(board.ships().len(), 2);

    // the classic rules reject the same layout
    assert_eq!(
        Board::new(&layout).unwrap_err(),
        PlacementError::WrongShipCount {
            expected: 10,
            found: 2,
        }
    );
}

#[test]
fn test_rules_accessors() {
    let rules = FleetRules::classic();
    assert_eq!(rules.ship_count(), 10);
    assert_eq!(rules.deck_count(), 20);
    assert_eq!(rules.required(1), 4);
    assert_eq!(rules.required(4), 1);
    assert_eq!(rules.required(5), 0);
    assert_eq!(rules.required(0), 0);
}
