use std::path::PathBuf;

use fruit_catch::EngineConfig;

#[test]
fn defaults_match_stock_game() {
    let c = EngineConfig::default();
    assert_eq!(c.game_width, 200.0);
    assert_eq!(c.game_height, 200.0);
    assert_eq!(c.basket_y, 170.0);
    assert_eq!(c.catch_band, 20.0);
    assert_eq!(c.spawn_offset, 30.0);
    assert_eq!(c.base_spawn_interval_ms, 1500.0);
    assert_eq!(c.spawn_interval_step_ms, 100.0);
    assert_eq!(c.min_spawn_interval_ms, 500.0);
    assert_eq!(c.base_speed, 100.0);
    assert_eq!(c.speed_per_level, 20.0);
    assert_eq!(c.level_score_step, 1000);
    assert_eq!(c.initial_lives, 3);
    assert!(c.validate().is_ok());
}

#[test]
fn with_playfield_keeps_other_defaults() {
    let c = EngineConfig::with_playfield(500.0, 500.0);
    assert_eq!(c.game_width, 500.0);
    assert_eq!(c.game_height, 500.0);
    assert_eq!(c.basket_y, 170.0);
    assert!((c.lane_width() - 500.0 / 3.0).abs() < 1e-9);
}

#[test]
fn ini_overrides_only_given_keys() {
    let c = EngineConfig::from_ini_str(
        "[playfield]\nwidth = 500\nheight = 500\nbasket_y = 450\n\n[spawn]\ninterval_ms = 2000\n\n[rules]\ninitial_lives = 5\n",
    )
    .unwrap();
    assert_eq!(c.game_width, 500.0);
    assert_eq!(c.game_height, 500.0);
    assert_eq!(c.basket_y, 450.0);
    assert_eq!(c.base_spawn_interval_ms, 2000.0);
    assert_eq!(c.initial_lives, 5);
    // untouched
    assert_eq!(c.catch_band, 20.0);
    assert_eq!(c.speed_per_level, 20.0);
}

#[test]
fn empty_ini_gives_defaults() {
    assert_eq!(EngineConfig::from_ini_str("").unwrap(), EngineConfig::default());
}

#[test]
fn non_numeric_value_is_rejected() {
    let err = EngineConfig::from_ini_str("[speed]\nbase = fast\n").unwrap_err();
    assert!(format!("{err:#}").contains("[speed] base"));
}

#[test]
fn invalid_playfield_is_rejected() {
    assert!(EngineConfig::from_ini_str("[playfield]\nwidth = 0\n").is_err());
}

#[test]
fn floor_above_base_interval_is_rejected() {
    let ini = "[spawn]\ninterval_ms = 400\nmin_interval_ms = 500\n";
    assert!(EngineConfig::from_ini_str(ini).is_err());
}

#[test]
fn load_from_file_reads_ini() {
    let path: PathBuf = std::env::temp_dir().join(format!(
        "fruit_catch_config_test_{}.ini",
        std::process::id()
    ));
    std::fs::write(&path, "[speed]\nbase = 150\nper_level = 10\n").unwrap();

    let c = EngineConfig::load_from_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(c.base_speed, 150.0);
    assert_eq!(c.speed_per_level, 10.0);
}

#[test]
fn missing_file_is_an_error() {
    let err = EngineConfig::load_from_file("/nonexistent/fruit_catch.ini").unwrap_err();
    assert!(format!("{err:#}").contains("failed to load config file"));
}
