//! Scripted player with uniform random targeting.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::coord::Coord;
use crate::player::Player;

/// Scripted opponent. Picks uniformly random targets and keeps no memory
/// of earlier shots; the opposing board rejects repeats, so the move
/// retry loop absorbs the waste.
pub struct RandomPlayer;

impl RandomPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for RandomPlayer {
    fn select_target(&mut self, rng: &mut SmallRng, size: usize) -> Coord {
        Coord::new(rng.random_range(0..size), rng.random_range(0..size))
    }
}
