use broadside::{AiPlayer, GameConfig, GameEngine, GameStatus, MatchPhase, Session, ShipType, Side};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_ai_vs_ai_game() {
    let mut rng = SmallRng::seed_from_u64(123);
    let config = GameConfig::default();
    let mut session = Session::new(
        GameEngine::new(config.clone()),
        AiPlayer::new(&config),
        AiPlayer::new(&config),
    );
    let summary = session.run(&mut rng).unwrap();

    let engine = session.engine();
    assert_eq!(engine.phase(), MatchPhase::Finished { winner: summary.winner });
    assert_eq!(engine.status(summary.winner), GameStatus::Won);
    assert_eq!(engine.status(summary.winner.opponent()), GameStatus::Lost);
    assert!(engine.board(summary.winner.opponent()).all_sunk());

    // The human side fires first, so it has fired as often or once more.
    let (h, c) = (summary.human_shots, summary.computer_shots);
    assert!(h == c || h == c + 1);
    assert!(h >= config.total_ship_cells() && h <= 100);
}

#[test]
fn test_engines_track_their_own_shots() {
    let mut rng = SmallRng::seed_from_u64(9);
    let config = GameConfig::default();
    let mut session = Session::new(
        GameEngine::new(config.clone()),
        AiPlayer::new(&config),
        AiPlayer::new(&config),
    );
    session.place_fleets(&mut rng).unwrap();
    for _ in 0..20 {
        let report = session.play_turn().unwrap();
        assert!(report.winner.is_none());
    }
    let human_engine = session.human().engine();
    let recorded = human_engine.known_hits().len() + human_engine.known_misses().len();
    assert_eq!(recorded, session.engine().shots_fired(Side::Human));
    assert_eq!(recorded, 10);
}

#[test]
fn test_custom_fleet_match() {
    let config = GameConfig::new(
        6,
        vec![ShipType::new("Frigate", 3), ShipType::new("Sloop", 2), ShipType::new("Skiff", 1)],
    )
    .unwrap();
    for seed in 0..5 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut session = Session::new(
            GameEngine::new(config.clone()),
            AiPlayer::new(&config),
            AiPlayer::new(&config),
        );
        let summary = session.run(&mut rng).unwrap();
        assert!(summary.human_shots <= 36);
        assert!(summary.computer_shots <= 36);
    }
}
