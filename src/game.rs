//! Game session: two boards, two players, the turn state machine.

use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::ShotOutcome;
use crate::config::GameConfig;
use crate::coord::Coord;
use crate::placement::generate_board;
use crate::player::{make_move, Player};

/// The two sides of a session. `User` moves on even turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Side {
    User,
    Ai,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::User => Side::Ai,
            Side::Ai => Side::User,
        }
    }
}

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Boards are not yet populated.
    Setup,
    /// Moves are being exchanged.
    Active,
    /// Terminal: the given side destroyed the opposing fleet.
    Finished(Side),
}

/// One resolved move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnRecord {
    pub side: Side,
    pub target: Coord,
    pub outcome: ShotOutcome,
}

/// Orchestrates two boards and two players through
/// `Setup → Active → Finished`.
pub struct GameSession {
    config: GameConfig,
    user_board: Board,
    ai_board: Board,
    user: Box<dyn Player>,
    ai: Box<dyn Player>,
    rng: SmallRng,
    turn: u32,
    state: SessionState,
}

impl GameSession {
    /// Create a session in the `Setup` state.
    ///
    /// Panics if the configured fleet is empty.
    pub fn new(
        config: GameConfig,
        user: Box<dyn Player>,
        ai: Box<dyn Player>,
        rng: SmallRng,
    ) -> Self {
        assert!(
            !config.fleet.is_empty(),
            "fleet must contain at least one ship"
        );
        let user_board = Board::new(config.size);
        let mut ai_board = Board::new(config.size);
        ai_board.set_hidden(true);
        GameSession {
            config,
            user_board,
            ai_board,
            user,
            ai,
            rng,
            turn: 0,
            state: SessionState::Setup,
        }
    }

    /// Populate both boards and activate the session.
    ///
    /// Each board retries fresh randomized layouts until one succeeds;
    /// the attempt cap inside each layout keeps every retry finite. Does
    /// nothing unless the session is in `Setup`.
    pub fn setup(&mut self) {
        if self.state != SessionState::Setup {
            return;
        }
        self.user_board = generate_board(&mut self.rng, self.config.size, &self.config.fleet);
        self.ai_board = generate_board(&mut self.rng, self.config.size, &self.config.fleet);
        self.ai_board.set_hidden(true);
        self.state = SessionState::Active;
        log::info!("session started on a {0}x{0} board", self.config.size);
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Winner of a finished session.
    pub fn winner(&self) -> Option<Side> {
        match self.state {
            SessionState::Finished(side) => Some(side),
            _ => None,
        }
    }

    /// Side that moves next. Turn parity: even turns belong to the user.
    pub fn active_side(&self) -> Side {
        if self.turn % 2 == 0 {
            Side::User
        } else {
            Side::Ai
        }
    }

    pub fn user_board(&self) -> &Board {
        &self.user_board
    }

    pub fn ai_board(&self) -> &Board {
        &self.ai_board
    }

    /// Execute one complete move of the active side.
    ///
    /// Returns `None` unless the session is active. A non-destroying hit
    /// leaves the turn counter untouched so the same side moves again;
    /// destroying the last enemy ship finishes the session with the
    /// mover as winner.
    pub fn play_turn(&mut self) -> Option<TurnRecord> {
        if self.state != SessionState::Active {
            return None;
        }
        let side = self.active_side();
        let (player, enemy) = match side {
            Side::User => (&mut self.user, &mut self.ai_board),
            Side::Ai => (&mut self.ai, &mut self.user_board),
        };
        let (target, outcome) = make_move(player.as_mut(), &mut self.rng, enemy);
        if enemy.is_defeated() {
            self.state = SessionState::Finished(side);
            log::info!("{:?} wins on turn {}", side, self.turn + 1);
        } else if !outcome.repeats_turn() {
            self.turn += 1;
        }
        Some(TurnRecord {
            side,
            target,
            outcome,
        })
    }

    /// Run the session to completion and return the winner. Performs
    /// setup first if needed.
    pub fn run(&mut self) -> Side {
        self.setup();
        loop {
            if let SessionState::Finished(winner) = self.state {
                return winner;
            }
            self.play_turn();
        }
    }
}
