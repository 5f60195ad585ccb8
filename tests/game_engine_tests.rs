use broadside::{
    BoardError, GameConfig, GameEngine, GameStatus, GuessResult, MatchPhase, Orientation,
    ShipType, Side,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn small_engine() -> GameEngine {
    let config = GameConfig::new(4, vec![ShipType::new("Destroyer", 2)]).unwrap();
    GameEngine::new(config)
}

fn placed_engine() -> GameEngine {
    let mut engine = small_engine();
    engine
        .place_ship(Side::Human, "Destroyer", 2, (0, 0), Orientation::Horizontal)
        .unwrap();
    engine
        .place_ship(Side::Computer, "Destroyer", 2, (3, 2), Orientation::Horizontal)
        .unwrap();
    engine
}

#[test]
fn test_no_fire_during_placement() {
    let mut engine = small_engine();
    engine
        .place_ship(Side::Human, "Destroyer", 2, (0, 0), Orientation::Horizontal)
        .unwrap();
    assert_eq!(engine.phase(), MatchPhase::Placement);
    assert_eq!(engine.fire(Side::Human, 1, 1).unwrap_err(), BoardError::OutOfTurn);
}

#[test]
fn test_battle_starts_when_both_fleets_placed() {
    let engine = placed_engine();
    assert_eq!(engine.phase(), MatchPhase::InProgress);
    assert_eq!(engine.turn(), Side::Human);
    assert_eq!(engine.status(Side::Human), GameStatus::InProgress);
}

#[test]
fn test_turns_alternate() {
    let mut engine = placed_engine();
    assert_eq!(engine.fire(Side::Computer, 0, 0).unwrap_err(), BoardError::OutOfTurn);

    let report = engine.fire(Side::Human, 0, 0).unwrap();
    assert_eq!(report.result, GuessResult::Miss);
    assert_eq!(report.winner, None);
    assert_eq!(engine.turn(), Side::Computer);
    assert_eq!(engine.fire(Side::Human, 1, 1).unwrap_err(), BoardError::OutOfTurn);

    let report = engine.fire(Side::Computer, 0, 0).unwrap();
    assert_eq!(report.result, GuessResult::Hit("Destroyer".into()));
    assert_eq!(engine.shots_fired(Side::Human), 1);
    assert_eq!(engine.shots_fired(Side::Computer), 1);
}

#[test]
fn test_rejected_shot_keeps_turn() {
    let mut engine = placed_engine();
    engine.fire(Side::Human, 0, 0).unwrap();
    engine.fire(Side::Computer, 2, 2).unwrap();
    assert!(engine.fire(Side::Human, 0, 0).is_err());
    assert_eq!(engine.turn(), Side::Human);
    assert!(engine.fire(Side::Human, 4, 0).is_err());
    assert_eq!(engine.turn(), Side::Human);
}

#[test]
fn test_no_placement_after_start() {
    let mut engine = placed_engine();
    assert_eq!(
        engine
            .place_ship(Side::Human, "Destroyer", 2, (2, 0), Orientation::Horizontal)
            .unwrap_err(),
        BoardError::OutOfTurn
    );
    assert_eq!(engine.reset_placement(Side::Human).unwrap_err(), BoardError::OutOfTurn);
    let mut rng = SmallRng::seed_from_u64(3);
    assert_eq!(
        engine.place_fleet_randomly(Side::Computer, &mut rng).unwrap_err(),
        BoardError::OutOfTurn
    );
}

#[test]
fn test_win_detection() {
    let mut engine = placed_engine();
    engine.fire(Side::Human, 3, 2).unwrap();
    engine.fire(Side::Computer, 3, 3).unwrap();
    let report = engine.fire(Side::Human, 3, 3).unwrap();
    assert_eq!(report.result, GuessResult::Sink("Destroyer".into()));
    assert_eq!(report.winner, Some(Side::Human));
    assert_eq!(engine.phase(), MatchPhase::Finished { winner: Side::Human });
    assert_eq!(engine.status(Side::Human), GameStatus::Won);
    assert_eq!(engine.status(Side::Computer), GameStatus::Lost);
    assert_eq!(engine.fire(Side::Computer, 0, 1).unwrap_err(), BoardError::OutOfTurn);
}

#[test]
fn test_random_fleets_and_reset() {
    let mut engine = GameEngine::default();
    let mut rng = SmallRng::seed_from_u64(11);
    engine.place_fleet_randomly(Side::Human, &mut rng).unwrap();
    engine.reset_placement(Side::Human).unwrap();
    assert_eq!(engine.board(Side::Human).occupied_cells(), 0);

    engine.place_fleet_randomly(Side::Human, &mut rng).unwrap();
    assert_eq!(engine.phase(), MatchPhase::Placement);
    engine.place_fleet_randomly(Side::Computer, &mut rng).unwrap();
    assert_eq!(engine.phase(), MatchPhase::InProgress);
    assert_eq!(
        engine.board(Side::Computer).occupied_cells(),
        engine.config().total_ship_cells()
    );
}
