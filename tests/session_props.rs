use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{GameConfig, GameSession, RandomPlayer, SessionState, Side};

fn random_session(seed: u64) -> GameSession {
    GameSession::new(
        GameConfig::default(),
        Box::new(RandomPlayer::new()),
        Box::new(RandomPlayer::new()),
        SmallRng::seed_from_u64(seed),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Whole sessions between two scripted players always finish with a
    /// winner in a bounded number of moves.
    #[test]
    fn session_always_terminates(seed in any::<u64>()) {
        let mut session = random_session(seed);
        session.setup();
        let mut moves = 0;
        while session.winner().is_none() {
            session.play_turn();
            moves += 1;
            prop_assert!(moves <= 72);
        }
        prop_assert!(matches!(session.state(), SessionState::Finished(_)));
    }

    /// Exactly the losing side's fleet ends up fully destroyed.
    #[test]
    fn loser_board_is_the_defeated_one(seed in any::<u64>()) {
        let mut session = random_session(seed);
        let winner = session.run();
        let (winner_board, loser_board) = match winner {
            Side::User => (session.user_board(), session.ai_board()),
            Side::Ai => (session.ai_board(), session.user_board()),
        };
        prop_assert!(loser_board.is_defeated());
        prop_assert!(!winner_board.is_defeated());
    }
}
