/// Text-entry and quit-chord tests.
///
/// Each update gets a fresh `InputState`, the same way the engine clears
/// per-frame input between ticks.
use gorillas::GameError;
use gorillas::input::{InputState, KeyCode, MouseButton};
use gorillas::ui::widgets::{numeric_key, parse_number, parse_whole_number};
use gorillas::ui::{InputBox, InputMode};

fn keys(presses: &[(KeyCode, Option<char>)]) -> InputState {
    let mut input = InputState::new();
    for &(code, text) in presses {
        input.press_key(code, text);
        input.release_key(code);
    }
    input
}

fn enter() -> (KeyCode, Option<char>) {
    (KeyCode::Enter, Some('\r'))
}

// ── Numeric entry ─────────────────────────────────────────────────────────────

#[test]
fn top_letter_row_types_digits() {
    assert_eq!(numeric_key(KeyCode::KeyQ), Some('1'));
    assert_eq!(numeric_key(KeyCode::KeyO), Some('9'));
    assert_eq!(numeric_key(KeyCode::KeyP), Some('0'));
    assert_eq!(numeric_key(KeyCode::NumpadDecimal), Some('.'));
    assert_eq!(numeric_key(KeyCode::KeyA), None);
}

#[test]
fn numeric_box_mixes_digits_and_mapped_letters() {
    let mut input = InputBox::numeric("Angle: ", 3);
    let state = keys(&[
        (KeyCode::Digit4, Some('4')),
        (KeyCode::KeyT, Some('t')),
        enter(),
    ]);
    assert_eq!(input.update(&state, 0.0).unwrap(), Some("45".to_string()));
    assert!(input.is_done());
}

#[test]
fn numeric_box_ignores_other_letters() {
    let mut input = InputBox::numeric("Angle: ", 3);
    let state = keys(&[(KeyCode::KeyA, Some('a')), (KeyCode::Digit7, Some('7')), enter()]);
    assert_eq!(input.update(&state, 0.0).unwrap(), Some("7".to_string()));
}

#[test]
fn leading_decimal_point_gets_a_zero() {
    let mut input = InputBox::numeric("Gravity: ", 6);
    let state = keys(&[(KeyCode::Period, Some('.')), (KeyCode::Digit5, Some('5')), enter()]);
    assert_eq!(input.update(&state, 0.0).unwrap(), Some("0.5".to_string()));
}

#[test]
fn answer_is_capped_at_max_length() {
    let mut input = InputBox::numeric("Velocity: ", 3);
    let state = keys(&[
        (KeyCode::Digit1, Some('1')),
        (KeyCode::Digit2, Some('2')),
        (KeyCode::Digit3, Some('3')),
        (KeyCode::Digit4, Some('4')),
        enter(),
    ]);
    assert_eq!(input.update(&state, 0.0).unwrap(), Some("123".to_string()));
}

#[test]
fn backspace_removes_the_last_character() {
    let mut input = InputBox::text("Name: ", 10);
    let state = keys(&[
        (KeyCode::KeyA, Some('a')),
        (KeyCode::KeyB, Some('b')),
        (KeyCode::Backspace, None),
        (KeyCode::KeyC, Some('c')),
    ]);
    assert_eq!(input.update(&state, 0.0).unwrap(), None);
    assert_eq!(input.value, "ac");

    // Backspace on an empty box is harmless.
    let mut empty = InputBox::text("Name: ", 10);
    assert_eq!(empty.update(&keys(&[(KeyCode::Backspace, None)]), 0.0).unwrap(), None);
    assert_eq!(empty.value, "");
}

#[test]
fn input_spans_several_updates() {
    let mut input = InputBox::text("Name: ", 10);
    input.update(&keys(&[(KeyCode::KeyK, Some('K'))]), 0.0).unwrap();
    input.update(&keys(&[(KeyCode::KeyO, Some('o'))]), 0.0).unwrap();
    let answer = input.update(&keys(&[enter()]), 0.0).unwrap();
    assert_eq!(answer, Some("Ko".to_string()));
}

#[test]
fn allowed_set_filters_text() {
    let mut input = InputBox::text("Your choice? ", 1).with_allowed("vp");
    assert_eq!(input.mode(), &InputMode::Text { allowed: Some("vp".into()) });
    let state = keys(&[
        (KeyCode::KeyX, Some('x')),
        (KeyCode::KeyP, Some('P')),
        (KeyCode::KeyP, Some('p')),
        enter(),
    ]);
    assert_eq!(input.update(&state, 0.0).unwrap(), Some("p".to_string()));
}

#[test]
fn empty_submit_returns_empty_string() {
    let mut input = InputBox::numeric("Points: ", 6);
    assert_eq!(input.update(&keys(&[enter()]), 0.0).unwrap(), Some(String::new()));
}

#[test]
fn pointer_press_submits() {
    let mut input = InputBox::numeric("Angle: ", 3);
    input.update(&keys(&[(KeyCode::Digit9, Some('9'))]), 0.0).unwrap();
    let mut tap = InputState::new();
    tap.press_mouse(MouseButton::Left);
    assert_eq!(input.update(&tap, 0.0).unwrap(), Some("9".to_string()));
}

#[test]
fn finished_box_waits_for_reset() {
    let mut input = InputBox::text("Name: ", 10);
    input.update(&keys(&[(KeyCode::KeyA, Some('a')), enter()]), 0.0).unwrap();
    assert_eq!(input.update(&keys(&[(KeyCode::KeyB, Some('b')), enter()]), 0.0).unwrap(), None);

    input.reset();
    assert!(!input.is_done());
    let again = input.update(&keys(&[(KeyCode::KeyB, Some('b')), enter()]), 0.0).unwrap();
    assert_eq!(again, Some("b".to_string()));
}

#[test]
fn escape_cancels_entry() {
    let mut input = InputBox::text("Name: ", 10);
    let err = input.update(&keys(&[(KeyCode::Escape, None)]), 0.0).unwrap_err();
    assert!(matches!(err, GameError::InputCancelled));
}

// ── Parsing ───────────────────────────────────────────────────────────────────

#[test]
fn whole_numbers_drop_the_fraction() {
    assert_eq!(parse_whole_number("45.9").unwrap(), 45);
    assert_eq!(parse_whole_number("0.5").unwrap(), 0);
    assert_eq!(parse_whole_number("180").unwrap(), 180);
}

#[test]
fn malformed_numbers_are_rejected() {
    for text in ["1.2.3", ".", "", "abc"] {
        let err = parse_number(text).unwrap_err();
        assert!(matches!(err, GameError::InvalidNumericInput(_)), "{text:?}");
    }
    assert!((parse_number("9.8").unwrap() - 9.8).abs() < 1e-6);
}

// ── InputState ────────────────────────────────────────────────────────────────

#[test]
fn ctrl_q_is_the_quit_chord() {
    let mut input = InputState::new();
    input.press_key(KeyCode::KeyQ, Some('q'));
    assert!(!input.quit_requested());

    let mut input = InputState::new();
    input.ctrl_held = true;
    input.press_key(KeyCode::KeyQ, Some('q'));
    assert!(input.quit_requested());
    assert!(matches!(input.check_quit(), Err(GameError::InputCancelled)));
}

#[test]
fn held_keys_do_not_repeat_presses() {
    let mut input = InputState::new();
    input.press_key(KeyCode::KeyA, Some('a'));
    input.clear_frame_state();
    input.press_key(KeyCode::KeyA, Some('a'));
    assert!(input.is_key_held(KeyCode::KeyA));
    assert!(!input.is_key_pressed(KeyCode::KeyA));
    // Auto-repeat still types.
    assert_eq!(input.key_events.len(), 1);
}

#[test]
fn release_or_tap_counts_as_any_key() {
    let mut input = InputState::new();
    assert!(!input.any_key_or_tap());
    input.press_key(KeyCode::Space, Some(' '));
    assert!(!input.any_key_or_tap());
    input.release_key(KeyCode::Space);
    assert!(input.any_key_or_tap());

    input.clear_frame_state();
    input.press_mouse(MouseButton::Left);
    assert!(input.any_key_or_tap());
    assert!(input.is_mouse_held(MouseButton::Left));
}
