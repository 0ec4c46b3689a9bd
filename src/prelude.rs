//! Commonly used types and utilities for ease of import.

pub use crate::{
    Board, BoardError, CellState, CliPlayer, Coord, GameConfig, GameSession, Orientation, Player,
    RandomPlayer, SessionState, Ship, ShotOutcome, Side,
};
