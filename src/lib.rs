pub mod animation;
pub mod canvas;
pub mod config;
pub mod engine;
pub mod error;
pub mod explosion;
pub mod game;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod placement;
pub mod renderer;
pub mod scene;
pub mod scenes;
pub mod shot;
pub mod skyline;
pub mod sprite;
pub mod ui;
pub mod window;

pub use engine::{Color, Engine, Game, RenderContext};
pub use error::GameError;
