use seabattle::{Board, BoardError, CellState, Coord, Orientation, Ship, ShotOutcome};

#[test]
fn test_place_and_sink_sequence() {
    let mut board = Board::new(6);
    board
        .place(Ship::new(Coord::new(0, 0), 3, Orientation::Horizontal))
        .unwrap();
    board.reset_shot_history();

    assert_eq!(board.shot(Coord::new(0, 0)).unwrap(), ShotOutcome::Hit);
    assert_eq!(board.ships()[0].remaining_hits(), 2);
    assert_eq!(board.shot(Coord::new(0, 1)).unwrap(), ShotOutcome::Hit);
    assert_eq!(board.ships()[0].remaining_hits(), 1);
    assert_eq!(
        board.shot(Coord::new(0, 2)).unwrap(),
        ShotOutcome::Destroyed
    );
    assert_eq!(board.ships()[0].remaining_hits(), 0);
    assert!(board.is_defeated());
}

#[test]
fn test_shot_out_of_bounds() {
    let mut board = Board::new(6);
    assert_eq!(
        board.shot(Coord::new(6, 0)).unwrap_err(),
        BoardError::OutOfBounds
    );
    assert_eq!(
        board.shot(Coord::new(0, 6)).unwrap_err(),
        BoardError::OutOfBounds
    );
}

#[test]
fn test_shot_already_targeted() {
    let mut board = Board::new(6);
    assert_eq!(board.shot(Coord::new(2, 2)).unwrap(), ShotOutcome::Miss);
    assert_eq!(
        board.shot(Coord::new(2, 2)).unwrap_err(),
        BoardError::AlreadyTargeted
    );
}

#[test]
fn test_place_out_of_bounds() {
    let mut board = Board::new(6);
    let err = board
        .place(Ship::new(Coord::new(0, 4), 3, Orientation::Horizontal))
        .unwrap_err();
    assert_eq!(err, BoardError::OutOfBounds);
    assert!(board.ships().is_empty());
}

#[test]
fn test_diagonal_adjacency_rejected() {
    let mut board = Board::new(6);
    board
        .place(Ship::new(Coord::new(0, 0), 1, Orientation::Horizontal))
        .unwrap();
    let err = board
        .place(Ship::new(Coord::new(1, 1), 1, Orientation::Horizontal))
        .unwrap_err();
    assert_eq!(err, BoardError::Overlap);
}

#[test]
fn test_place_clear_of_halo_succeeds() {
    let mut board = Board::new(6);
    board
        .place(Ship::new(Coord::new(0, 0), 1, Orientation::Horizontal))
        .unwrap();
    board
        .place(Ship::new(Coord::new(0, 2), 1, Orientation::Vertical))
        .unwrap();
    assert_eq!(board.ships().len(), 2);
}

#[test]
fn test_reset_shot_history() {
    let mut board = Board::new(6);
    board
        .place(Ship::new(Coord::new(0, 0), 1, Orientation::Horizontal))
        .unwrap();
    // the halo cell is excluded while placing
    assert!(board.is_used(Coord::new(1, 1)));
    board.reset_shot_history();
    assert!(!board.is_used(Coord::new(1, 1)));
    // and is a fresh target once play begins
    assert_eq!(board.shot(Coord::new(1, 1)).unwrap(), ShotOutcome::Miss);
}

#[test]
fn test_destroyed_ship_clears_perimeter() {
    let mut board = Board::new(6);
    board
        .place(Ship::new(Coord::new(0, 0), 1, Orientation::Horizontal))
        .unwrap();
    board.reset_shot_history();
    assert_eq!(
        board.shot(Coord::new(0, 0)).unwrap(),
        ShotOutcome::Destroyed
    );
    // the perimeter shows as cleared water and is blocked from targeting
    assert_eq!(board.cell(Coord::new(1, 1)), CellState::Miss);
    assert_eq!(
        board.shot(Coord::new(1, 1)).unwrap_err(),
        BoardError::AlreadyTargeted
    );
}

#[test]
fn test_cell_states_after_shots() {
    let mut board = Board::new(6);
    board
        .place(Ship::new(Coord::new(2, 2), 2, Orientation::Vertical))
        .unwrap();
    board.reset_shot_history();
    assert_eq!(board.cell(Coord::new(2, 2)), CellState::Ship);
    board.shot(Coord::new(2, 2)).unwrap();
    assert_eq!(board.cell(Coord::new(2, 2)), CellState::Hit);
    board.shot(Coord::new(0, 0)).unwrap();
    assert_eq!(board.cell(Coord::new(0, 0)), CellState::Miss);
    assert_eq!(board.cell(Coord::new(3, 2)), CellState::Ship);
}

#[test]
fn test_defeat_requires_all_ships() {
    let mut board = Board::new(6);
    board
        .place(Ship::new(Coord::new(0, 0), 1, Orientation::Horizontal))
        .unwrap();
    board
        .place(Ship::new(Coord::new(3, 3), 1, Orientation::Horizontal))
        .unwrap();
    board.reset_shot_history();
    assert_eq!(
        board.shot(Coord::new(0, 0)).unwrap(),
        ShotOutcome::Destroyed
    );
    assert_eq!(board.destroyed(), 1);
    assert!(!board.is_defeated());
    assert_eq!(
        board.shot(Coord::new(3, 3)).unwrap(),
        ShotOutcome::Destroyed
    );
    assert!(board.is_defeated());
}
