use broadside::{ConfigError, GameConfig, ShipType, BOARD_SIZE, MAX_BOARD_SIZE, STANDARD_FLEET};

#[test]
fn test_default_is_standard_fleet() {
    let config = GameConfig::default();
    assert_eq!(config.board_size(), BOARD_SIZE);
    assert_eq!(config.fleet().len(), STANDARD_FLEET.len());
    assert_eq!(config.total_ship_cells(), 17);
    assert_eq!(config.ship_type("Submarine").map(ShipType::length), Some(3));
    assert!(config.ship_type("Dreadnought").is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_rejects_bad_configs() {
    assert_eq!(
        GameConfig::new(0, vec![ShipType::new("A", 1)]).unwrap_err(),
        ConfigError::EmptyBoard
    );
    assert_eq!(GameConfig::new(5, vec![]).unwrap_err(), ConfigError::EmptyFleet);
    assert_eq!(
        GameConfig::new(5, vec![ShipType::new("Ghost", 0)]).unwrap_err(),
        ConfigError::ZeroLength { name: "Ghost".into() }
    );
    assert_eq!(
        GameConfig::new(4, vec![ShipType::new("Carrier", 5)]).unwrap_err(),
        ConfigError::ShipTooLong {
            name: "Carrier".into(),
            length: 5,
            board_size: 4
        }
    );
    assert_eq!(
        GameConfig::new(5, vec![ShipType::new("Twin", 2), ShipType::new("Twin", 3)]).unwrap_err(),
        ConfigError::DuplicateName { name: "Twin".into() }
    );
}

#[test]
fn test_from_json() {
    let config = GameConfig::from_json(
        r#"{"board_size": 8, "fleet": [{"name": "Sloop", "length": 2}, {"name": "Brig", "length": 4}]}"#,
    )
    .unwrap();
    assert_eq!(config.board_size(), 8);
    assert_eq!(config.fleet()[1], ShipType::new("Brig", 4));
    assert_eq!(config.total_ship_cells(), 6);
}

#[test]
fn test_from_json_validates() {
    assert!(GameConfig::from_json(r#"{"board_size": 3, "fleet": [{"name": "Long", "length": 4}]}"#).is_err());
    assert!(GameConfig::from_json(r#"{"board_size": 3}"#).is_err());
    assert!(GameConfig::from_json("not json").is_err());
}

#[test]
fn test_board_size_is_capped() {
    assert!(GameConfig::new(MAX_BOARD_SIZE, vec![ShipType::new("Sloop", 2)]).is_ok());
    assert_eq!(
        GameConfig::new(MAX_BOARD_SIZE + 1, vec![ShipType::new("Sloop", 2)]).unwrap_err(),
        ConfigError::BoardTooLarge {
            size: MAX_BOARD_SIZE + 1,
            max: MAX_BOARD_SIZE
        }
    );
    let err = GameConfig::from_json(r#"{"board_size": 4294967296, "fleet": [{"name": "Sloop", "length": 2}]}"#)
        .unwrap_err();
    assert!(err.to_string().contains("exceeds the maximum"));
}
