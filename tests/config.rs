use std::path::PathBuf;

use gorillas::config::*;
use gorillas::game::Player;
use gorillas::window::WindowMode;

#[test]
fn defaults_match_the_classic_game() {
    let cfg = GameConfig::default();
    assert_eq!(cfg.screen.width, 800);
    assert_eq!(cfg.screen.height, 480);
    assert_eq!(cfg.screen.window_mode, WindowMode::Windowed);
    assert_eq!(cfg.match_rules.target_score, 3);
    assert!((cfg.match_rules.gravity - 9.8).abs() < 1e-6);
    assert_eq!(cfg.starting_player(), Player::One);
    assert!((cfg.fixed_dt() - 1.0 / 30.0).abs() < 1e-6);
    cfg.validate().unwrap();
}

#[test]
fn empty_file_is_all_defaults() {
    assert_eq!(GameConfig::from_toml("").unwrap(), GameConfig::default());
}

#[test]
fn partial_file_keeps_other_defaults() {
    let cfg = GameConfig::from_toml(
        r#"
        [game]
        target_score = 5
        player_one = "Kong"
        seed = 77
        "#,
    )
    .unwrap();
    assert_eq!(cfg.match_rules.target_score, 5);
    assert_eq!(cfg.match_rules.player_one, "Kong");
    assert_eq!(cfg.match_rules.player_two, "Player 2");
    assert_eq!(cfg.match_rules.seed, Some(77));
    assert_eq!(cfg.screen, ScreenConfig::default());
}

#[test]
fn window_mode_parses_lowercase() {
    let cfg = GameConfig::from_toml("[screen]\nwindow_mode = \"borderless\"\n").unwrap();
    assert_eq!(cfg.screen.window_mode, WindowMode::Borderless);
}

#[test]
fn narrow_screen_is_rejected() {
    let err = GameConfig::from_toml("[screen]\nwidth = 200\n").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "screen.width", .. }), "{err}");
}

#[test]
fn oversized_screen_is_rejected() {
    let err = GameConfig::from_toml("[screen]\nheight = 70000\n").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "screen.height", .. }), "{err}");

    let cfg = GameConfig::from_toml(&format!("[screen]\nwidth = {MAX_SIDE}\n")).unwrap();
    assert_eq!(cfg.screen.width, MAX_SIDE);
}

#[test]
fn starting_player_must_be_one_or_two() {
    let err = GameConfig::from_toml("[game]\nstarting_player = 3\n").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "game.starting_player", .. }));

    let cfg = GameConfig::from_toml("[game]\nstarting_player = 2\n").unwrap();
    assert_eq!(cfg.starting_player(), Player::Two);
}

#[test]
fn zero_update_rate_is_rejected() {
    let err = GameConfig::from_toml("[screen]\nupdates_per_second = 0\n").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { .. }));
}

#[test]
fn bad_toml_is_a_parse_error() {
    let err = GameConfig::from_toml("[screen\nwidth = ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn missing_file_is_an_io_error() {
    let path = PathBuf::from("definitely/not/here/gorillas.toml");
    let err = GameConfig::load(&path).unwrap_err();
    match err {
        ConfigError::Io { path: p, .. } => assert_eq!(p, path),
        other => panic!("expected Io error, got {other}"),
    }
}

#[test]
fn load_reads_a_file_from_disk() {
    let path = std::env::temp_dir().join(format!("gorillas-config-{}.toml", std::process::id()));
    std::fs::write(&path, "[game]\ngravity = 3.7\n").unwrap();
    let cfg = GameConfig::load(&path);
    std::fs::remove_file(&path).unwrap();
    assert!((cfg.unwrap().match_rules.gravity - 3.7).abs() < 1e-6);
}
