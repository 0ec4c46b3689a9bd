use anyhow::Result;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::json;

use seabattle::{GameConfig, GameSession, RandomPlayer, SessionState, Side};

#[derive(serde::Serialize)]
struct GameSummary {
    seed: u64,
    winner: Side,
    moves: u32,
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [games]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: u64 = if args.len() == 3 { args[2].parse()? } else { 1 };

    let mut summaries = Vec::new();
    let mut user_wins = 0u64;
    let mut ai_wins = 0u64;
    for i in 0..games {
        let game_seed = seed.wrapping_add(i);
        let mut session = GameSession::new(
            GameConfig::default(),
            Box::new(RandomPlayer::new()),
            Box::new(RandomPlayer::new()),
            SmallRng::seed_from_u64(game_seed),
        );
        session.setup();
        let mut moves = 0u32;
        let winner = loop {
            session.play_turn();
            moves += 1;
            if let SessionState::Finished(winner) = session.state() {
                break winner;
            }
        };
        match winner {
            Side::User => user_wins += 1,
            Side::Ai => ai_wins += 1,
        }
        summaries.push(GameSummary {
            seed: game_seed,
            winner,
            moves,
        });
    }

    let result = json!({
        "seed": seed,
        "games": games,
        "wins": { "player1": user_wins, "player2": ai_wins },
        "results": summaries,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
