//! Board state: cell grid, placed ships, shot resolution.

use std::collections::HashSet;

use crate::common::{BoardError, ShotOutcome};
use crate::coord::Coord;
use crate::ship::Ship;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Empty,
    Ship,
    Hit,
    Miss,
}

/// Offsets covering a cell's 8-neighborhood plus the cell itself.
const NEAR: [(i64, i64); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A single player's grid: cell states, placed ships and the set of
/// coordinates excluded from targeting.
///
/// During placement the used set holds every occupied cell plus its
/// adjacency halo; [`Board::reset_shot_history`] clears it before play so
/// that it tracks only fired shots from then on.
#[derive(Debug)]
pub struct Board {
    size: usize,
    hidden: bool,
    cells: Vec<CellState>,
    ships: Vec<Ship>,
    used: HashSet<Coord>,
    destroyed: usize,
}

impl Board {
    /// Create an empty `size`×`size` board.
    pub fn new(size: usize) -> Self {
        Board {
            size,
            hidden: false,
            cells: vec![CellState::Empty; size * size],
            ships: Vec::new(),
            used: HashSet::new(),
            destroyed: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether ship markers should be suppressed when rendering.
    pub fn hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Ships on this board, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of ships destroyed so far.
    pub fn destroyed(&self) -> usize {
        self.destroyed
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    /// Whether `coord` is excluded from targeting: occupied or inside a
    /// halo during placement, already fired upon during play.
    pub fn is_used(&self, coord: Coord) -> bool {
        self.used.contains(&coord)
    }

    /// State of the cell at `coord`.
    ///
    /// Panics if `coord` is out of bounds.
    pub fn cell(&self, coord: Coord) -> CellState {
        assert!(self.in_bounds(coord), "coordinate outside the board");
        self.cells[self.index(coord)]
    }

    fn index(&self, coord: Coord) -> usize {
        coord.row * self.size + coord.col
    }

    fn set_cell(&mut self, coord: Coord, state: CellState) {
        let i = self.index(coord);
        self.cells[i] = state;
    }

    /// Place `ship`, marking its cells and reserving its adjacency halo
    /// so no later ship can touch it, even diagonally.
    ///
    /// Fails with [`BoardError::OutOfBounds`] if any cell falls outside
    /// the grid and with [`BoardError::Overlap`] if any cell is already
    /// occupied or reserved.
    pub fn place(&mut self, ship: Ship) -> Result<(), BoardError> {
        let cells: Vec<Coord> = ship.cells().collect();
        for &c in &cells {
            if !self.in_bounds(c) {
                return Err(BoardError::OutOfBounds);
            }
        }
        for &c in &cells {
            if self.used.contains(&c) {
                return Err(BoardError::Overlap);
            }
        }
        for &c in &cells {
            self.set_cell(c, CellState::Ship);
            self.used.insert(c);
        }
        self.ships.push(ship);
        self.mark_adjacency(&cells, false);
        Ok(())
    }

    /// Reserve the 8-neighborhood of every cell in `cells`, skipping
    /// out-of-bounds neighbors and coordinates already used. With
    /// `render` set, newly reserved cells are shown as cleared water
    /// around a destroyed ship.
    fn mark_adjacency(&mut self, cells: &[Coord], render: bool) {
        for &cell in cells {
            for &(dr, dc) in NEAR.iter() {
                let row = cell.row as i64 + dr;
                let col = cell.col as i64 + dc;
                if row < 0 || col < 0 {
                    continue;
                }
                let near = Coord::new(row as usize, col as usize);
                if !self.in_bounds(near) || self.used.contains(&near) {
                    continue;
                }
                self.used.insert(near);
                if render {
                    self.set_cell(near, CellState::Miss);
                }
            }
        }
    }

    /// Clear targeting history. Called once after fleet placement so the
    /// placement halo does not read as "already fired" during play.
    pub fn reset_shot_history(&mut self) {
        self.used.clear();
    }

    /// Resolve a shot at `coord`.
    ///
    /// Rejects out-of-bounds targets and repeats of earlier shots.
    /// Otherwise reports exactly one of hit, destroyed or miss; a
    /// destroyed ship has its perimeter marked as cleared water.
    pub fn shot(&mut self, coord: Coord) -> Result<ShotOutcome, BoardError> {
        if !self.in_bounds(coord) {
            return Err(BoardError::OutOfBounds);
        }
        if self.used.contains(&coord) {
            return Err(BoardError::AlreadyTargeted);
        }
        self.used.insert(coord);
        if let Some(i) = self.ships.iter().position(|s| s.contains(coord)) {
            self.ships[i].take_hit();
            self.set_cell(coord, CellState::Hit);
            if self.ships[i].is_sunk() {
                self.destroyed += 1;
                let cells: Vec<Coord> = self.ships[i].cells().collect();
                self.mark_adjacency(&cells, true);
                return Ok(ShotOutcome::Destroyed);
            }
            return Ok(ShotOutcome::Hit);
        }
        self.set_cell(coord, CellState::Miss);
        Ok(ShotOutcome::Miss)
    }

    /// True once every placed ship has been destroyed.
    pub fn is_defeated(&self) -> bool {
        self.destroyed == self.ships.len()
    }
}
