use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use broadside::{
    init_logging,
    ui::{coord_to_string, write_enemy_fleet_status, write_fleet_status, write_own_board, write_probability_board},
    AiPlayer, CliPlayer, GameConfig, GameEngine, GuessResult, Player, Session, Side, TurnReport,
};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Largest board the A-Z column labels can address.
const MAX_CLI_BOARD: usize = 26;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level (error, warn, info, debug, trace); overrides BROADSIDE_LOG.
    #[arg(long, global = true)]
    log_level: Option<LevelFilter>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer in this terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        /// JSON file with `board_size` and `fleet`.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Show the computer's probability map over your board after each shot.
        #[arg(long)]
        heatmap: bool,
    },
    /// Watch the computer play against itself.
    Demo {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<GameConfig> {
    let config = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            GameConfig::from_json(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => GameConfig::default(),
    };
    if config.board_size() > MAX_CLI_BOARD {
        anyhow::bail!("board size {} exceeds the terminal limit of {}", config.board_size(), MAX_CLI_BOARD);
    }
    Ok(config)
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn describe(report: &TurnReport) -> String {
    let at = coord_to_string(report.target.0, report.target.1);
    match &report.result {
        GuessResult::Miss => format!("{:?} fires at {}: miss", report.side, at),
        GuessResult::Hit(name) => format!("{:?} fires at {}: hit {}", report.side, at, name),
        GuessResult::Sink(name) => format!("{:?} fires at {}: sank {}", report.side, at, name),
    }
}

fn play<H: Player>(session: &mut Session<H, AiPlayer>, rng: &mut SmallRng, heatmap: bool) -> anyhow::Result<()> {
    session.place_fleets(rng)?;
    let mut out = io::stdout();
    loop {
        let report = session.play_turn()?;
        if report.side == Side::Computer {
            writeln!(out, "\nYour fleet:")?;
            write_own_board(&mut out, session.engine().board(Side::Human))?;
            write_fleet_status(&mut out, session.engine().board(Side::Human))?;
            writeln!(out, "\nEnemy fleet:")?;
            write_enemy_fleet_status(&mut out, session.engine().board(Side::Computer).public_view())?;
            if heatmap {
                let pdf = session.computer().engine().normalized_probability_map();
                write_probability_board(&mut out, &pdf)?;
            }
        }
        if let Some(winner) = report.winner {
            match winner {
                Side::Human => writeln!(out, "\nCongratulations! You won!")?,
                Side::Computer => writeln!(out, "\nThe computer won. Better luck next time!")?,
            }
            writeln!(
                out,
                "Shots fired - you: {}, computer: {}",
                session.engine().shots_fired(Side::Human),
                session.engine().shots_fired(Side::Computer)
            )?;
            return Ok(());
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    match cli.command {
        Commands::Play { seed, config, heatmap } => {
            let config = load_config(config.as_ref())?;
            let mut rng = make_rng(seed);
            for round in 1.. {
                if round > 1 {
                    println!("\n=== New game ({}) ===", round);
                }
                // Fresh boards, fleets and targeting state every match.
                let human = CliPlayer::stdio(&config);
                let computer = AiPlayer::new(&config);
                let mut session = Session::new(GameEngine::new(config.clone()), human, computer);
                play(&mut session, &mut rng, heatmap)?;
                if !session.human_mut().play_again()? {
                    break;
                }
            }
        }
        Commands::Demo { seed, config } => {
            let config = load_config(config.as_ref())?;
            let mut rng = make_rng(seed);
            let mut session = Session::new(
                GameEngine::new(config.clone()),
                AiPlayer::new(&config),
                AiPlayer::new(&config),
            );
            session.place_fleets(&mut rng)?;
            loop {
                let report = session.play_turn()?;
                println!("{}", describe(&report));
                if let Some(winner) = report.winner {
                    println!("\n{:?} side wins.", winner);
                    let mut out = io::stdout();
                    for side in [Side::Human, Side::Computer] {
                        writeln!(out, "\n{:?} board:", side)?;
                        write_own_board(&mut out, session.engine().board(side))?;
                    }
                    break;
                }
            }
        }
    }
    Ok(())
}
