use anyhow::{ensure, Result};
use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use seabattle::{
    init_logging, print_session, CliPlayer, GameConfig, GameSession, RandomPlayer, SessionState,
    Side, DEFAULT_BOARD_SIZE, DEFAULT_FLEET,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game against the computer.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,
    },
    /// Watch two scripted players battle each other.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn side_label(side: Side) -> &'static str {
    match side {
        Side::User => "You",
        Side::Ai => "Computer",
    }
}

fn play(mut session: GameSession) {
    session.setup();
    println!("Game begins.");
    loop {
        println!();
        print_session(&session);
        println!();
        println!("{} to move.", side_label(session.active_side()));
        let Some(turn) = session.play_turn() else {
            break;
        };
        println!(
            "{} fired at {} -> {:?}",
            side_label(turn.side),
            turn.target,
            turn.outcome
        );
        if let SessionState::Finished(winner) = session.state() {
            println!();
            print_session(&session);
            println!();
            match winner {
                Side::User => println!("You win."),
                Side::Ai => println!("Computer wins."),
            }
            break;
        }
    }
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed, size } => {
            ensure!(size >= 6, "the default fleet needs at least a 6x6 board");
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let config = GameConfig::new(size, DEFAULT_FLEET.to_vec());
            let session = GameSession::new(
                config,
                Box::new(CliPlayer::new()),
                Box::new(RandomPlayer::new()),
                make_rng(seed),
            );
            play(session);
        }
        Commands::Auto { seed, size } => {
            ensure!(size >= 6, "the default fleet needs at least a 6x6 board");
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let config = GameConfig::new(size, DEFAULT_FLEET.to_vec());
            let session = GameSession::new(
                config,
                Box::new(RandomPlayer::new()),
                Box::new(RandomPlayer::new()),
                make_rng(seed),
            );
            play(session);
        }
    }
    Ok(())
}
