//! Player capability and the move retry loop.

use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{BoardError, ShotOutcome};
use crate::coord::Coord;

/// Interface implemented by the two player kinds.
///
/// A player supplies one thing: the next candidate target on the
/// opposing board. Validity is the board's business, not the player's.
pub trait Player {
    /// Choose the next target coordinate. `size` is the opposing board's
    /// edge length.
    fn select_target(&mut self, rng: &mut SmallRng, size: usize) -> Coord;

    /// Called when the board rejected the last candidate. The default
    /// stays quiet and lets the retry loop continue.
    fn handle_rejected(&mut self, _coord: Coord, _err: &BoardError) {}
}

/// Drive one complete move of `player` against `enemy`.
///
/// Invalid targets (out of bounds, already fired upon) are reported back
/// to the player and retried locally; they never escape the turn.
/// Returns the resolved target and its outcome.
pub fn make_move(
    player: &mut dyn Player,
    rng: &mut SmallRng,
    enemy: &mut Board,
) -> (Coord, ShotOutcome) {
    loop {
        let target = player.select_target(rng, enemy.size());
        match enemy.shot(target) {
            Ok(outcome) => return (target, outcome),
            Err(err) => {
                log::debug!("shot at {} rejected: {}", target, err);
                player.handle_rejected(target, &err);
            }
        }
    }
}
