//! Randomized fleet placement.

use rand::Rng;

use crate::board::Board;
use crate::common::BoardError;
use crate::config::MAX_PLACEMENT_ATTEMPTS;
use crate::coord::Coord;
use crate::ship::{Orientation, Ship};

/// Try to fill a fresh board with one ship per entry of `fleet`.
///
/// Each candidate gets a uniformly random bow in `[0, size)²` and a
/// uniformly random orientation; collisions and out-of-bounds candidates
/// are discarded and retried. A single attempt counter spans the whole
/// fleet and aborts the layout with [`BoardError::PlacementExhausted`]
/// once it passes [`MAX_PLACEMENT_ATTEMPTS`], so a crowded board cannot
/// loop forever. On success the board's shot history is reset and the
/// board is ready for play.
pub fn try_place_fleet<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    fleet: &[usize],
) -> Result<Board, BoardError> {
    let mut board = Board::new(size);
    let mut attempts: u32 = 0;
    for &length in fleet {
        loop {
            attempts += 1;
            if attempts > MAX_PLACEMENT_ATTEMPTS {
                log::debug!("fleet placement exhausted after {} attempts", attempts - 1);
                return Err(BoardError::PlacementExhausted);
            }
            let bow = Coord::new(rng.random_range(0..size), rng.random_range(0..size));
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            match board.place(Ship::new(bow, length, orientation)) {
                Ok(()) => break,
                Err(BoardError::OutOfBounds) | Err(BoardError::Overlap) => continue,
                Err(e) => return Err(e),
            }
        }
    }
    board.reset_shot_history();
    Ok(board)
}

/// Generate a playable board, retrying fresh layouts until one succeeds.
///
/// The outer retry is unbounded; the attempt cap inside
/// [`try_place_fleet`] keeps each individual layout finite.
pub fn generate_board<R: Rng + ?Sized>(rng: &mut R, size: usize, fleet: &[usize]) -> Board {
    loop {
        match try_place_fleet(rng, size, fleet) {
            Ok(board) => return board,
            Err(_) => log::debug!("restarting fleet placement on a fresh board"),
        }
    }
}
