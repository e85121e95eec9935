/// Text entry widget.
///
/// `InputBox` is a small state machine (buffer, blink timer, done flag) fed
/// once per update from `InputState::key_events`. Screens keep one alive per
/// prompt, call `update` every tick until it yields the submitted text, then
/// drop it or call `reset` to ask again.
///
/// # Numeric entry
///
/// Numeric boxes accept typed digits and also map physical keys so numbers
/// can be entered without a number row: the top letter row `Q`..`P` types
/// `1`..`0`, and both period keys type `.`.
use crate::canvas::Canvas;
use crate::engine::Color;
use crate::error::GameError;
use crate::input::{InputState, KeyCode, KeyPress};
use crate::ui::font::{Align, Font};
use crate::geometry::Rect;

/// Caret glyph, and the blank drawn in its place while it blinks off.
const CURSOR: &str = "_";
const CURSOR_OFF: &str = " ";
/// Seconds between caret toggles.
const BLINK_PERIOD: f32 = 1.0;

// ── Modes ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputMode {
    /// Printable ASCII, optionally limited to the characters in `allowed`.
    Text { allowed: Option<String> },
    /// Digits and a decimal point.
    Numeric,
}

/// Physical keys that type a numeric character in numeric mode.
pub fn numeric_key(code: KeyCode) -> Option<char> {
    match code {
        KeyCode::Period | KeyCode::NumpadDecimal => Some('.'),
        KeyCode::KeyQ => Some('1'),
        KeyCode::KeyW => Some('2'),
        KeyCode::KeyE => Some('3'),
        KeyCode::KeyR => Some('4'),
        KeyCode::KeyT => Some('5'),
        KeyCode::KeyY => Some('6'),
        KeyCode::KeyU => Some('7'),
        KeyCode::KeyI => Some('8'),
        KeyCode::KeyO => Some('9'),
        KeyCode::KeyP => Some('0'),
        _ => None,
    }
}

// ── InputBox ──────────────────────────────────────────────────────────────────

/// Single-line prompt with an editable answer.
///
/// Enter, numpad Enter or a pointer press submits. Backspace removes the
/// last character. Escape or Ctrl+Q cancels with `GameError::InputCancelled`.
#[derive(Clone, Debug)]
pub struct InputBox {
    pub prompt: String,
    /// Current text content.
    pub value: String,
    /// Maximum number of characters allowed.
    pub max_chars: usize,
    mode: InputMode,
    blinks: bool,
    /// Time since the caret last toggled.
    cursor_blink: f32,
    cursor_visible: bool,
    done: bool,
}

impl InputBox {
    pub fn new(prompt: impl Into<String>, max_chars: usize, mode: InputMode) -> Self {
        Self {
            prompt: prompt.into(),
            value: String::new(),
            max_chars: max_chars.max(1),
            mode,
            blinks: false,
            cursor_blink: 0.0,
            cursor_visible: true,
            done: false,
        }
    }

    pub fn text(prompt: impl Into<String>, max_chars: usize) -> Self {
        Self::new(prompt, max_chars, InputMode::Text { allowed: None })
    }

    pub fn numeric(prompt: impl Into<String>, max_chars: usize) -> Self {
        Self::new(prompt, max_chars, InputMode::Numeric)
    }

    /// Restrict text entry to the characters of `allowed`.
    pub fn with_allowed(mut self, allowed: &str) -> Self {
        self.mode = InputMode::Text { allowed: Some(allowed.to_string()) };
        self
    }

    pub fn with_blink(mut self) -> Self {
        self.blinks = true;
        self
    }

    pub fn is_done(&self) -> bool { self.done }
    pub fn mode(&self) -> &InputMode { &self.mode }

    /// Clear the answer and start accepting input again.
    pub fn reset(&mut self) {
        self.value.clear();
        self.done = false;
        self.cursor_blink = 0.0;
        self.cursor_visible = true;
    }

    fn accepts(&self, key: &KeyPress) -> Option<char> {
        match &self.mode {
            InputMode::Text { allowed } => {
                let ch = key.text.filter(|c| c.is_ascii() && !c.is_ascii_control())?;
                match allowed {
                    Some(set) if !set.contains(ch) => None,
                    _ => Some(ch),
                }
            }
            InputMode::Numeric => match key.text {
                Some(c) if c.is_ascii_digit() => Some(c),
                _ => numeric_key(key.code),
            },
        }
    }

    fn submit(&mut self) -> String {
        self.done = true;
        self.cursor_visible = false;
        if self.mode == InputMode::Numeric && self.value.starts_with('.') {
            self.value.insert(0, '0');
        }
        self.value.clone()
    }

    /// Feed one update's worth of input. Returns the answer once submitted;
    /// after that the box ignores input until `reset`.
    pub fn update(&mut self, input: &InputState, dt: f32) -> Result<Option<String>, GameError> {
        if input.quit_requested() {
            return Err(GameError::InputCancelled);
        }
        if self.done {
            return Ok(None);
        }

        if self.blinks {
            self.cursor_blink += dt;
            if self.cursor_blink >= BLINK_PERIOD {
                self.cursor_blink -= BLINK_PERIOD;
                self.cursor_visible = !self.cursor_visible;
            }
        }

        if input.any_mouse_pressed() {
            return Ok(Some(self.submit()));
        }

        for key in &input.key_events {
            match key.code {
                KeyCode::Enter | KeyCode::NumpadEnter => return Ok(Some(self.submit())),
                KeyCode::Backspace => {
                    self.value.pop();
                }
                _ => {
                    if self.value.chars().count() >= self.max_chars {
                        continue;
                    }
                    if let Some(ch) = self.accepts(key) {
                        self.value.push(ch);
                    }
                }
            }
        }
        Ok(None)
    }

    /// Draw prompt, answer and caret. `align` positions the prompt plus caret
    /// around `x`; the answer then grows to the right.
    pub fn draw(
        &self,
        canvas: &mut Canvas,
        font: &Font,
        x: i32,
        y: i32,
        fg: Color,
        bg: Color,
        align: Align,
    ) -> Rect {
        let anchor_w = font.text_width(&self.prompt) as i32 + font.text_width(CURSOR) as i32;
        let left = match align {
            Align::Left => x,
            Align::Center => x - anchor_w / 2,
            Align::Right => x - anchor_w,
        };
        // Erase a full-width field so deleted characters disappear.
        let full = format!("{}{}{}", self.prompt, " ".repeat(self.max_chars), CURSOR);
        font.draw_text(canvas, &full, left, y, bg, Some(bg), Align::Left);

        let caret = if self.cursor_visible && !self.done { CURSOR } else { CURSOR_OFF };
        let line = format!("{}{}{}", self.prompt, self.value, caret);
        font.draw_text(canvas, &line, left, y, fg, Some(bg), Align::Left)
    }

    /// Pixel width of the prompt plus a full answer and caret.
    pub fn field_width(&self, font: &Font) -> i32 {
        (self.prompt.chars().count() + self.max_chars + 1) as i32 * font.advance() as i32
    }
}

// ── Parsing ───────────────────────────────────────────────────────────────────

/// Parse numeric-box output as a float.
pub fn parse_number(text: &str) -> Result<f32, GameError> {
    text.trim()
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| GameError::InvalidNumericInput(text.to_string()))
}

/// Parse numeric-box output and drop the fraction, so `"45.9"` is 45.
pub fn parse_whole_number(text: &str) -> Result<u32, GameError> {
    let v = parse_number(text)?;
    if v < 0.0 || v > u32::MAX as f32 {
        return Err(GameError::InvalidNumericInput(text.to_string()));
    }
    Ok(v.trunc() as u32)
}
