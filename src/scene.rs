use crate::engine::{Engine, Game};
use crate::error::GameError;

pub enum SceneAction {
    None,
    Switch(Box<dyn Scene>),
}

/// One screen of the game. Scenes own their state and hand over to the next
/// screen by returning `SceneAction::Switch`.
pub trait Scene {
    fn on_enter(&mut self, _engine: &mut Engine) -> Result<(), GameError> { Ok(()) }
    fn on_exit(&mut self, _engine: &mut Engine) {}
    fn update(&mut self, engine: &mut Engine) -> Result<SceneAction, GameError>;
    fn draw(&mut self, engine: &mut Engine);
    fn name(&self) -> &'static str;
}

pub struct SceneManager {
    current: Box<dyn Scene>,
    initialized: bool,
}

impl SceneManager {
    pub fn new(initial: Box<dyn Scene>) -> Self {
        Self { current: initial, initialized: false }
    }

    /// Name of the active scene.
    pub fn current(&self) -> &'static str {
        self.current.name()
    }

    fn ensure_entered(&mut self, engine: &mut Engine) -> Result<(), GameError> {
        if !self.initialized {
            self.initialized = true;
            self.current.on_enter(engine)?;
        }
        Ok(())
    }

    fn switch(&mut self, engine: &mut Engine, mut next: Box<dyn Scene>) -> Result<(), GameError> {
        self.current.on_exit(engine);
        tracing::debug!(from = self.current.name(), to = next.name(), "Scene switch");
        next.on_enter(engine)?;
        self.current = next;
        Ok(())
    }
}

impl Game for SceneManager {
    fn on_enter(&mut self, engine: &mut Engine) -> Result<(), GameError> {
        self.ensure_entered(engine)
    }

    fn update(&mut self, engine: &mut Engine) -> Result<(), GameError> {
        self.ensure_entered(engine)?;
        match self.current.update(engine)? {
            SceneAction::None => {}
            SceneAction::Switch(next) => self.switch(engine, next)?,
        }
        Ok(())
    }

    fn render(&mut self, engine: &mut Engine) {
        self.current.draw(engine);
    }
}
