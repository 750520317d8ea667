//! Named scenes and transitions between them.
//!
//! Scenes are registered as factories; entering a scene tears down the
//! world and builds a fresh instance, so every visit starts clean.

use std::collections::HashMap;

use crate::api::error::EngineError;
use crate::api::game::EngineContext;
use crate::input::state::InputState;

/// One playable scene (a level, a menu, the game-over screen).
pub trait Scene {
    /// Spawn entities and configure the camera. The world is empty.
    fn init(&mut self, ctx: &mut EngineContext);

    /// One fixed step of scene logic.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputState);
}

type SceneFactory = Box<dyn Fn() -> Box<dyn Scene>>;

struct ActiveScene {
    name: String,
    scene: Box<dyn Scene>,
}

#[derive(Default)]
pub struct SceneDirector {
    factories: HashMap<String, SceneFactory>,
    active: Option<ActiveScene>,
}

impl SceneDirector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> Box<dyn Scene> + 'static,
    {
        self.factories.insert(name.into(), Box::new(factory));
    }

    pub fn with_scene<F>(mut self, name: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> Box<dyn Scene> + 'static,
    {
        self.register(name, factory);
        self
    }

    pub fn has_scene(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    pub fn active_name(&self) -> Option<&str> {
        self.active.as_ref().map(|a| a.name.as_str())
    }

    /// Tear down the current scene and enter `name`.
    /// An unknown name leaves the current scene running.
    pub fn go_to(&mut self, name: &str, ctx: &mut EngineContext) -> Result<(), EngineError> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| EngineError::UnknownScene(name.to_string()))?;

        ctx.reset_world();
        let mut scene = factory();
        scene.init(ctx);
        log::info!("scene: entered {}", name);

        self.active = Some(ActiveScene {
            name: name.to_string(),
            scene,
        });
        Ok(())
    }

    /// Update the active scene, then honor a transition it requested.
    pub fn update(&mut self, ctx: &mut EngineContext, input: &InputState) -> Result<(), EngineError> {
        let active = self.active.as_mut().ok_or(EngineError::NoActiveScene)?;
        active.scene.update(ctx, input);

        match ctx.take_scene_request() {
            Some(next) => self.go_to(&next, ctx),
            None => Ok(()),
        }
    }
}
