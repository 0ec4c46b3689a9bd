//! Ship shape and hit tracking.

use crate::coord::Coord;

/// Orientation of a ship on the board. Horizontal ships extend along
/// columns, vertical ships along rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A line of cells anchored at a bow coordinate, tracking how many
/// segments remain undamaged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    bow: Coord,
    length: usize,
    orientation: Orientation,
    remaining_hits: usize,
}

impl Ship {
    /// Create a ship of `length` cells starting at `bow`. Length must be
    /// positive.
    pub fn new(bow: Coord, length: usize, orientation: Orientation) -> Self {
        debug_assert!(length > 0);
        Ship {
            bow,
            length,
            orientation,
            remaining_hits: length,
        }
    }

    pub fn bow(&self) -> Coord {
        self.bow
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Undamaged segments left. Zero once the ship is sunk.
    pub fn remaining_hits(&self) -> usize {
        self.remaining_hits
    }

    /// The cells this ship occupies, bow first.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.length).map(move |i| match self.orientation {
            Orientation::Horizontal => Coord::new(self.bow.row, self.bow.col + i),
            Orientation::Vertical => Coord::new(self.bow.row + i, self.bow.col),
        })
    }

    /// Whether `coord` is one of this ship's cells.
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells().any(|c| c == coord)
    }

    /// Record one confirmed hit on this ship.
    pub fn take_hit(&mut self) {
        self.remaining_hits = self.remaining_hits.saturating_sub(1);
    }

    /// True once every segment has been hit.
    pub fn is_sunk(&self) -> bool {
        self.remaining_hits == 0
    }
}
