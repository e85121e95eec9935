use std::sync::Arc;
use std::time::Instant;

use tracing::{error, info, warn};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use crate::canvas::Canvas;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::geometry::Rect;
use crate::input::InputState;
use crate::renderer::Renderer;
use crate::shot::{BananaSizes, Orientation};
use crate::sprite::SpriteSet;
use crate::ui::Font;
use crate::window::{WindowConfig, apply_window_settings};

// ── Color ──────────────────────────────────────────────────────────────────

/// An sRGB RGBA8 colour. Laid out as four bytes so a slice of colours is a
/// texture upload as-is.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Color(pub [u8; 4]);

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, 255])
    }

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const GRAY: Self = Self::rgb(173, 170, 173);
    pub const TEAL: Self = Self::rgb(0, 170, 173);
    pub const DARK_RED: Self = Self::rgb(173, 0, 0);
    pub const SKY: Self = Self::rgb(0, 0, 173);
    pub const LIGHT_WINDOW: Self = Self::rgb(255, 255, 82);
    pub const DARK_WINDOW: Self = Self::rgb(82, 85, 82);
    pub const GORILLA: Self = Self::rgb(255, 170, 82);
    pub const BANANA: Self = Self::rgb(255, 255, 82);
    pub const EXPLOSION: Self = Self::rgb(255, 0, 0);
    pub const SUN: Self = Self::rgb(255, 255, 0);
}

// ── RenderContext ───────────────────────────────────────────────────────────

/// Everything a screen needs to draw a frame: the frame canvas plus the
/// font and sprites. Built once and passed around; nothing global.
pub struct RenderContext {
    pub canvas: Canvas,
    pub font: Font,
    pub sprites: SpriteSet,
}

impl RenderContext {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            canvas: Canvas::new(width, height, Color::BLACK),
            font: Font::default(),
            sprites: SpriteSet::new(),
        }
    }

    pub fn width(&self) -> i32 { self.canvas.width() as i32 }
    pub fn height(&self) -> i32 { self.canvas.height() as i32 }

    /// Sun hit box: top-left corner at the horizontal middle, a twentieth of
    /// the way down.
    pub fn sun_rect(&self) -> Rect {
        let (w, h) = self.sprites.sun(false).size();
        Rect::new(self.width() / 2, self.height() / 20, w, h)
    }

    pub fn banana_sizes(&self) -> BananaSizes {
        let s = &self.sprites;
        BananaSizes {
            up: s.banana(Orientation::Up).size(),
            down: s.banana(Orientation::Down).size(),
            left: s.banana(Orientation::Left).size(),
            right: s.banana(Orientation::Right).size(),
        }
    }
}

// ── Game trait ──────────────────────────────────────────────────────────────

pub trait Game {
    fn on_enter(&mut self, _engine: &mut Engine) -> Result<(), GameError> { Ok(()) }
    fn update(&mut self, engine: &mut Engine) -> Result<(), GameError>;
    fn render(&mut self, engine: &mut Engine);
}

// ── Engine ──────────────────────────────────────────────────────────────────

/// Per-run state handed to the game every tick. Owns no GPU resources, so a
/// headless engine can drive screens in tests.
pub struct Engine {
    pub ctx: RenderContext,
    /// Unified input state (keyboard, pointer).
    pub input: InputState,
    pub config: GameConfig,
    /// Seeded from `config.match_rules.seed` when present.
    pub rng: fastrand::Rng,
    dt: f32,
    tick: u64,
}

impl Engine {
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    pub fn new(config: GameConfig) -> Self {
        let rng = match config.match_rules.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        Self {
            ctx: RenderContext::new(config.screen.width, config.screen.height),
            input: InputState::new(),
            dt: config.fixed_dt(),
            tick: 0,
            rng,
            config,
        }
    }

    pub fn dt(&self) -> f32 { self.dt }
    pub fn tick(&self) -> u64 { self.tick }

    /// Run one fixed update: quit check, game update, then drop the input
    /// that update consumed.
    pub fn step(&mut self, game: &mut dyn Game) -> Result<(), GameError> {
        self.tick += 1;
        let result = self.input.check_quit().and_then(|_| game.update(self));
        self.input.clear_frame_state();
        result
    }
}

// ── EngineBuilder ───────────────────────────────────────────────────────────

pub struct EngineBuilder {
    title: String,
    config: GameConfig,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self {
            title: "Gorillas".into(),
            config: GameConfig::default(),
        }
    }
}

impl EngineBuilder {
    pub fn with_title(mut self, title: &str) -> Self { self.title = title.into(); self }
    pub fn with_config(mut self, config: GameConfig) -> Self { self.config = config; self }

    /// Open the window and run `game` until it quits. Returns the error that
    /// stopped the loop, if any; a player quit is a clean exit.
    pub fn run(self, game: impl Game + 'static) -> Result<(), GameError> {
        let event_loop = EventLoop::new().map_err(|e| GameError::Graphics(e.to_string()))?;
        let fixed_dt = self.config.fixed_dt();
        let mut app = App {
            builder: self,
            game: Box::new(game),
            engine: None,
            renderer: None,
            last_instant: None,
            accumulator: 0.0,
            fixed_dt,
            failure: None,
        };
        event_loop
            .run_app(&mut app)
            .map_err(|e| GameError::Graphics(e.to_string()))?;
        match app.failure.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

// ── App (winit ApplicationHandler) ──────────────────────────────────────────

struct App {
    builder: EngineBuilder,
    game: Box<dyn Game>,
    engine: Option<Engine>,
    renderer: Option<Renderer>,
    last_instant: Option<Instant>,
    accumulator: f32,
    fixed_dt: f32,
    failure: Option<GameError>,
}

impl App {
    /// Stop the loop. A player quit is logged and swallowed; anything else is
    /// kept for `run` to return.
    fn shut_down(&mut self, event_loop: &ActiveEventLoop, err: GameError) {
        if err.is_cancel() {
            info!("Quit requested");
        } else {
            error!("Fatal error: {err}");
            self.failure = Some(err);
        }
        event_loop.exit();
    }

    fn start(&mut self, event_loop: &ActiveEventLoop) -> Result<(), GameError> {
        let screen = &self.builder.config.screen;
        let window = Arc::new(
            event_loop
                .create_window(
                    Window::default_attributes()
                        .with_title(&self.builder.title)
                        .with_inner_size(winit::dpi::PhysicalSize::new(screen.width, screen.height))
                        .with_resizable(true),
                )
                .map_err(|e| GameError::Graphics(e.to_string()))?,
        );

        let window_config = WindowConfig::new(screen.width, screen.height, screen.window_mode);
        apply_window_settings(&window, &window_config);

        let renderer = pollster::block_on(Renderer::new(window, window_config))?;
        let mut engine = Engine::new(self.builder.config.clone());
        self.game.on_enter(&mut engine)?;

        self.renderer = Some(renderer);
        self.engine = Some(engine);
        Ok(())
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.engine.is_some() {
            return;
        }
        if let Err(e) = self.start(event_loop) {
            self.shut_down(event_loop, e);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(renderer) = self.renderer.as_ref() {
            renderer.window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let (Some(engine), Some(renderer)) = (self.engine.as_mut(), self.renderer.as_mut()) else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                info!("Window closed");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => renderer.resize(size),

            WindowEvent::ModifiersChanged(modifiers) => {
                engine.input.ctrl_held = modifiers.state().control_key();
            }

            WindowEvent::CursorMoved { position, .. } => {
                engine.input.mouse_pos = [position.x as f32, position.y as f32];
            }

            WindowEvent::MouseInput { button, state, .. } => match state {
                ElementState::Pressed => engine.input.press_mouse(button),
                ElementState::Released => engine.input.release_mouse(button),
            },

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        ref text,
                        ..
                    },
                ..
            } => match state {
                ElementState::Pressed => {
                    let ch = text.as_ref().and_then(|t| t.chars().find(|c| !c.is_control()));
                    engine.input.press_key(code, ch);
                }
                ElementState::Released => engine.input.release_key(code),
            },

            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let elapsed = match self.last_instant {
                    Some(prev) => now.duration_since(prev).as_secs_f32().min(0.25),
                    None => self.fixed_dt,
                };
                self.last_instant = Some(now);
                self.accumulator += elapsed;

                while self.accumulator >= self.fixed_dt {
                    self.accumulator -= self.fixed_dt;
                    if let Err(e) = engine.step(self.game.as_mut()) {
                        self.shut_down(event_loop, e);
                        return;
                    }
                }

                self.game.render(engine);

                match renderer.render(&engine.ctx.canvas) {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        let size = renderer.window.inner_size();
                        renderer.resize(size);
                    }
                    Err(e) => warn!("Render error: {e}"),
                }
            }

            _ => {}
        }
    }
}
