//! Shared outcome and error types for board operations.

use core::fmt;

/// Result of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum ShotOutcome {
    /// Shot hit a ship segment without destroying the ship.
    Hit,
    /// Shot destroyed the last remaining segment of a ship.
    Destroyed,
    /// Shot landed in open water.
    Miss,
}

impl ShotOutcome {
    /// A non-destroying hit grants the shooter another turn.
    pub fn repeats_turn(self) -> bool {
        matches!(self, ShotOutcome::Hit)
    }
}

/// Errors returned by board and placement operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate lies outside the grid.
    OutOfBounds,
    /// Shot repeats a coordinate that was already fired upon.
    AlreadyTargeted,
    /// Placement collides with an occupied or adjacency-excluded cell.
    Overlap,
    /// Randomized fleet placement exceeded its global attempt cap.
    PlacementExhausted,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds => write!(f, "coordinate is outside the board"),
            BoardError::AlreadyTargeted => write!(f, "this tile was already shot"),
            BoardError::Overlap => write!(f, "placement overlaps a ship or its surroundings"),
            BoardError::PlacementExhausted => write!(f, "fleet placement ran out of attempts"),
        }
    }
}

impl std::error::Error for BoardError {}
