/// Screen flow tests.
///
/// `Engine::new` builds a headless engine (no window, no GPU), so whole
/// screens can be driven tick by tick with synthetic input.
use gorillas::config::GameConfig;
use gorillas::input::{InputState, KeyCode};
use gorillas::scene::{Scene, SceneAction, SceneManager};
use gorillas::scenes::play::Phase;
use gorillas::scenes::*;
use gorillas::{Engine, Game, GameError};

fn engine() -> Engine {
    let mut config = GameConfig::default();
    config.match_rules.seed = Some(7);
    Engine::new(config)
}

fn key_code(ch: char) -> KeyCode {
    match ch {
        '0' => KeyCode::Digit0,
        '1' => KeyCode::Digit1,
        '2' => KeyCode::Digit2,
        '3' => KeyCode::Digit3,
        '4' => KeyCode::Digit4,
        '5' => KeyCode::Digit5,
        '6' => KeyCode::Digit6,
        '7' => KeyCode::Digit7,
        '8' => KeyCode::Digit8,
        '9' => KeyCode::Digit9,
        '.' => KeyCode::Period,
        'p' | 'P' => KeyCode::KeyP,
        'v' | 'V' => KeyCode::KeyV,
        _ => KeyCode::KeyA,
    }
}

/// Queue `text` followed by Enter.
fn type_line(input: &mut InputState, text: &str) {
    for ch in text.chars() {
        input.press_key(key_code(ch), Some(ch));
        input.release_key(key_code(ch));
    }
    input.press_key(KeyCode::Enter, Some('\r'));
    input.release_key(KeyCode::Enter);
}

fn tap_key(input: &mut InputState) {
    input.press_key(KeyCode::Space, Some(' '));
    input.release_key(KeyCode::Space);
}

fn switched_to(action: SceneAction) -> Option<&'static str> {
    match action {
        SceneAction::Switch(next) => Some(next.name()),
        SceneAction::None => None,
    }
}

// ── Scene manager ────────────────────────────────────────────────────────────

#[test]
fn start_to_settings_to_play() {
    let mut engine = engine();
    let mut game = SceneManager::new(Box::new(StartScene::new()));
    game.on_enter(&mut engine).unwrap();
    assert_eq!(game.current(), "start");

    // Nothing pressed: stay put.
    engine.step(&mut game).unwrap();
    assert_eq!(game.current(), "start");

    tap_key(&mut engine.input);
    engine.step(&mut game).unwrap();
    assert_eq!(game.current(), "settings");

    // Accept every default, then choose play.
    for _ in 0..4 {
        type_line(&mut engine.input, "");
        engine.step(&mut game).unwrap();
    }
    assert_eq!(game.current(), "settings");
    type_line(&mut engine.input, "p");
    engine.step(&mut game).unwrap();
    assert_eq!(game.current(), "play");
    assert_eq!(engine.tick(), 7);
}

#[test]
fn escape_cancels_from_any_screen() {
    let mut engine = engine();
    let mut game = SceneManager::new(Box::new(StartScene::new()));
    game.on_enter(&mut engine).unwrap();
    engine.input.press_key(KeyCode::Escape, None);
    let err = engine.step(&mut game).unwrap_err();
    assert!(matches!(err, GameError::InputCancelled));
    // The quit chord is not left behind for the next tick.
    assert!(engine.input.key_events.is_empty());
}

#[test]
fn game_over_returns_to_settings() {
    let mut engine = engine();
    let settings = MatchSettings::from_config(&engine.config);
    let mut game = SceneManager::new(Box::new(GameOverScene::new(settings, [3, 1])));
    game.on_enter(&mut engine).unwrap();
    engine.step(&mut game).unwrap();
    assert_eq!(game.current(), "game_over");
    tap_key(&mut engine.input);
    engine.step(&mut game).unwrap();
    assert_eq!(game.current(), "settings");
}

#[test]
fn intro_plays_through_then_starts_the_match() {
    let mut engine = engine();
    let settings = MatchSettings::from_config(&engine.config);
    let mut game = SceneManager::new(Box::new(IntroScene::new(settings)));
    game.on_enter(&mut engine).unwrap();

    // Keys other than the quit chord are ignored.
    tap_key(&mut engine.input);
    engine.step(&mut game).unwrap();
    assert_eq!(game.current(), "intro");

    let mut ticks = 1;
    while game.current() == "intro" {
        engine.step(&mut game).unwrap();
        ticks += 1;
        assert!(ticks < 400, "intro never ended");
    }
    assert_eq!(game.current(), "play");
    // 8.4 s at 30 updates per second.
    assert!((250..=255).contains(&ticks), "intro took {ticks} ticks");
}

#[test]
fn every_screen_draws_without_a_window() {
    let mut engine = engine();
    let settings = MatchSettings::from_config(&engine.config);
    let screens: Vec<Box<dyn Scene>> = vec![
        Box::new(StartScene::new()),
        Box::new(SettingsScene::new(&engine.config)),
        Box::new(IntroScene::new(settings.clone())),
        Box::new(PlayScene::new(settings.clone())),
        Box::new(GameOverScene::new(settings, [0, 3])),
    ];
    for screen in screens {
        let name = screen.name();
        let mut game = SceneManager::new(screen);
        game.on_enter(&mut engine).unwrap();
        engine.ctx.canvas.clear(gorillas::Color::WHITE);
        game.render(&mut engine);
        assert!(
            engine.ctx.canvas.pixel(0, 0) != Some(gorillas::Color::WHITE),
            "{name} did not paint the frame"
        );
    }
}

// ── Settings ─────────────────────────────────────────────────────────────────

/// Type one answer into the settings screen and run a single update.
fn answer(engine: &mut Engine, screen: &mut SettingsScene, text: &str) -> Option<&'static str> {
    type_line(&mut engine.input, text);
    let action = screen.update(engine).unwrap();
    engine.input.clear_frame_state();
    switched_to(action)
}

#[test]
fn settings_keep_answers_and_reject_zero_points() {
    let mut engine = engine();
    let mut screen = SettingsScene::new(&engine.config);

    assert_eq!(answer(&mut engine, &mut screen, ""), None);
    assert_eq!(answer(&mut engine, &mut screen, ""), None);
    // Zero points re-prompts.
    assert_eq!(answer(&mut engine, &mut screen, "0"), None);
    assert_eq!(screen.settings().target_score, 3);
    assert_eq!(answer(&mut engine, &mut screen, "5"), None);
    assert_eq!(answer(&mut engine, &mut screen, "1.6"), None);
    assert_eq!(screen.settings().target_score, 5);
    assert!((screen.settings().gravity - 1.6).abs() < 1e-6);
    assert_eq!(screen.settings().names[0], "Player 1");

    assert_eq!(answer(&mut engine, &mut screen, "v"), Some("intro"));
}

#[test]
fn gravity_prompt_quotes_earth() {
    let mut engine = engine();
    engine.config.match_rules.gravity = 1.6;
    let mut screen = SettingsScene::new(&engine.config);
    for _ in 0..3 {
        answer(&mut engine, &mut screen, "");
    }
    assert_eq!(screen.prompt(), "Gravity in Meters/Sec (Earth = 9.8)?  ");
    // An empty answer still keeps the configured gravity.
    answer(&mut engine, &mut screen, "");
    assert!((screen.settings().gravity - 1.6).abs() < 1e-6);
    assert_eq!(screen.prompt(), "Your Choice?  ");
}

/// Only lowercase `v` or `p` is typed into the menu choice; a capital `V` is
/// dropped and the empty answer means play.
#[test]
fn menu_choice_ignores_capitals() {
    let mut engine = engine();
    let mut screen = SettingsScene::new(&engine.config);
    for _ in 0..4 {
        answer(&mut engine, &mut screen, "");
    }
    assert_eq!(answer(&mut engine, &mut screen, "V"), Some("play"));
}

// ── Play ─────────────────────────────────────────────────────────────────────

#[test]
fn aiming_then_throwing_resolves_the_shot() {
    let mut engine = engine();
    let mut play = PlayScene::new(MatchSettings::from_config(&engine.config));
    play.on_enter(&mut engine).unwrap();
    assert!(play.round().is_some());
    assert!(matches!(play.phase(), Phase::Aiming(_)));
    let thrower = play.match_state().turn();

    type_line(&mut engine.input, "45");
    play.update(&mut engine).unwrap();
    engine.input.clear_frame_state();
    assert!(matches!(play.phase(), Phase::Aiming(aim) if aim.angle() == Some(45)));

    type_line(&mut engine.input, "50");
    play.update(&mut engine).unwrap();
    engine.input.clear_frame_state();
    assert!(matches!(play.phase(), Phase::Throwing(_)));

    let mut ticks = 0;
    while matches!(play.phase(), Phase::Throwing(_)) {
        play.update(&mut engine).unwrap();
        ticks += 1;
        assert!(ticks < 20_000, "shot never resolved");
    }

    match play.phase() {
        Phase::Aiming(_) => {
            assert_eq!(play.match_state().scores(), [0, 0]);
            assert_eq!(play.match_state().turn(), thrower.other());
        }
        Phase::Celebrating { scorer, .. } => {
            assert_eq!(play.match_state().score(*scorer), 1);
        }
        Phase::Throwing(_) => unreachable!(),
    }
}

#[test]
fn bad_aim_reprompts() {
    let mut engine = engine();
    let mut play = PlayScene::new(MatchSettings::from_config(&engine.config));
    play.on_enter(&mut engine).unwrap();

    type_line(&mut engine.input, "..");
    play.update(&mut engine).unwrap();
    engine.input.clear_frame_state();
    assert!(matches!(play.phase(), Phase::Aiming(aim) if aim.angle().is_none()));

    type_line(&mut engine.input, "");
    play.update(&mut engine).unwrap();
    assert!(matches!(play.phase(), Phase::Aiming(aim) if aim.angle().is_none()));
}
