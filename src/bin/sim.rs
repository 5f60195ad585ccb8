use broadside::{AiPlayer, GameConfig, GameEngine, Session, Side};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

/// Plays one computer-vs-computer match. `seed1` drives fleet placement,
/// `seed2` is mixed in so distinct pairs give distinct layouts.
fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;
    broadside::init_logging(None);

    let mut rng = SmallRng::seed_from_u64(seed1 ^ seed2.rotate_left(32));
    let config = GameConfig::default();
    let mut session = Session::new(
        GameEngine::new(config.clone()),
        AiPlayer::new(&config),
        AiPlayer::new(&config),
    );
    let summary = session.run(&mut rng)?;

    let status = |side: Side| format!("{:?}", session.engine().status(side));
    let winner = match summary.winner {
        Side::Human => "player1",
        Side::Computer => "player2",
    };

    let result = json!({
        "player1": {"status": status(Side::Human), "guesses": summary.human_shots},
        "player2": {"status": status(Side::Computer), "guesses": summary.computer_shots},
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
