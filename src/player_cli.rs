//! Interactive player reading targets from stdin, plus board rendering.

use std::io::{self, Write};

use rand::rngs::SmallRng;

use crate::board::{Board, CellState};
use crate::common::BoardError;
use crate::coord::Coord;
use crate::game::GameSession;
use crate::player::Player;

/// Human player. Prompts for a 1-indexed "row column" pair and converts
/// it to a 0-indexed coordinate; malformed input is re-prompted locally
/// and never reaches the board.
pub struct CliPlayer;

impl CliPlayer {
    pub fn new() -> Self {
        Self
    }
}

fn parse_coord(input: &str) -> Option<Coord> {
    let mut parts = input.split_whitespace();
    let row: usize = parts.next()?.parse().ok()?;
    let col: usize = parts.next()?.parse().ok()?;
    if parts.next().is_some() || row == 0 || col == 0 {
        return None;
    }
    Some(Coord::new(row - 1, col - 1))
}

impl Player for CliPlayer {
    fn select_target(&mut self, _rng: &mut SmallRng, _size: usize) -> Coord {
        loop {
            print!("Your move (row column): ");
            io::stdout().flush().unwrap();
            let mut line = String::new();
            io::stdin().read_line(&mut line).unwrap();
            match parse_coord(line.trim()) {
                Some(coord) => return coord,
                None => println!("Enter two numbers, e.g. 2 5"),
            }
        }
    }

    fn handle_rejected(&mut self, _coord: Coord, err: &BoardError) {
        println!("{}", err);
    }
}

fn cell_glyph(state: CellState, hidden: bool) -> char {
    match state {
        CellState::Empty => '.',
        CellState::Ship => {
            if hidden {
                '.'
            } else {
                'S'
            }
        }
        CellState::Hit => 'X',
        CellState::Miss => 'o',
    }
}

/// Print a board with 1-indexed numeric headers on both axes. Ship
/// markers are suppressed when the board is hidden.
pub fn print_board(board: &Board) {
    print!("   ");
    for c in 0..board.size() {
        print!(" {}", c + 1);
    }
    println!();
    for r in 0..board.size() {
        print!("{:2} ", r + 1);
        for c in 0..board.size() {
            let state = board.cell(Coord::new(r, c));
            print!(" {}", cell_glyph(state, board.hidden()));
        }
        println!();
    }
}

/// Show both boards of a session, own fleet first.
pub fn print_session(session: &GameSession) {
    println!("Your board:");
    print_board(session.user_board());
    println!();
    println!("Opponent board:");
    print_board(session.ai_board());
}
