use std::collections::HashSet;

pub use winit::event::MouseButton;
pub use winit::keyboard::KeyCode;

use crate::error::GameError;

/// One key press, in the order it arrived.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct KeyPress {
    /// Physical key, independent of layout.
    pub code: KeyCode,
    /// Printable character the key produced, if any.
    pub text: Option<char>,
    /// Ctrl was held when the key went down.
    pub ctrl: bool,
}

impl KeyPress {
    /// Escape, or Ctrl+Q.
    pub fn is_quit_chord(&self) -> bool {
        self.code == KeyCode::Escape || (self.ctrl && self.code == KeyCode::KeyQ)
    }
}

/// Raw hardware state, accumulated by the event loop and consumed by one
/// fixed update.
#[derive(Debug, Default)]
pub struct InputState {
    pub keys_held: HashSet<KeyCode>,
    pub keys_pressed: HashSet<KeyCode>,
    pub keys_released: HashSet<KeyCode>,
    /// Every key press since the last update, oldest first.
    pub key_events: Vec<KeyPress>,
    pub ctrl_held: bool,

    pub mouse_pos: [f32; 2],
    pub mouse_held: HashSet<MouseButton>,
    pub mouse_pressed: HashSet<MouseButton>,
    pub mouse_released: HashSet<MouseButton>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key going down. Auto-repeat reaches `key_events` but does not
    /// re-trigger `keys_pressed`.
    pub fn press_key(&mut self, code: KeyCode, text: Option<char>) {
        if self.keys_held.insert(code) {
            self.keys_pressed.insert(code);
        }
        self.key_events.push(KeyPress { code, text, ctrl: self.ctrl_held });
    }

    pub fn release_key(&mut self, code: KeyCode) {
        self.keys_held.remove(&code);
        self.keys_released.insert(code);
    }

    pub fn press_mouse(&mut self, button: MouseButton) {
        if self.mouse_held.insert(button) {
            self.mouse_pressed.insert(button);
        }
    }

    pub fn release_mouse(&mut self, button: MouseButton) {
        self.mouse_held.remove(&button);
        self.mouse_released.insert(button);
    }

    pub fn clear_frame_state(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.key_events.clear();
        self.mouse_pressed.clear();
        self.mouse_released.clear();
    }

    pub fn is_key_held(&self, key: KeyCode) -> bool { self.keys_held.contains(&key) }
    pub fn is_key_pressed(&self, key: KeyCode) -> bool { self.keys_pressed.contains(&key) }

    pub fn is_mouse_held(&self, button: MouseButton) -> bool { self.mouse_held.contains(&button) }

    /// Any pointer button went down this update. Taps count as Enter.
    pub fn any_mouse_pressed(&self) -> bool {
        !self.mouse_pressed.is_empty()
    }

    /// A key was released or the pointer pressed: what "press any key"
    /// screens wait for.
    pub fn any_key_or_tap(&self) -> bool {
        !self.keys_released.is_empty() || self.any_mouse_pressed()
    }

    pub fn quit_requested(&self) -> bool {
        self.key_events.iter().any(KeyPress::is_quit_chord)
    }

    /// Checked once per update before any screen sees the input.
    pub fn check_quit(&self) -> Result<(), GameError> {
        if self.quit_requested() {
            return Err(GameError::InputCancelled);
        }
        Ok(())
    }
}
