//! Turn-based sea battle on a small square grid.
//!
//! One human and one scripted player each hide a fleet on their own
//! board, then trade shots until a fleet is fully destroyed. Fleet
//! layouts are randomized with an adjacency-exclusion rule (ships never
//! touch, even diagonally) and a capped number of retries; a
//! non-destroying hit grants the shooter another turn.

mod board;
mod common;
mod config;
mod coord;
mod game;
mod logging;
mod placement;
mod player;
mod player_ai;
mod player_cli;
pub mod prelude;
mod ship;

pub use board::*;
pub use common::*;
pub use config::*;
pub use coord::*;
pub use game::*;
pub use logging::init_logging;
pub use placement::*;
pub use player::*;
pub use player_ai::*;
pub use player_cli::*;
pub use ship::*;
