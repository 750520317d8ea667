use glam::Vec2;
use rockbound_engine::{EngineContext, Game, GameConfig, InputState, SceneDirector, SharedStore};

use crate::game_over::GameOverScene;
use crate::inventory::InventoryStore;
use crate::layout::{LEVEL1_JSON, LEVEL2_JSON};
use crate::level::LevelScene;
use crate::tuning::PlayerTuning;

pub const LEVEL1: &str = "level1";
pub const LEVEL2: &str = "level2";
pub const GAME_OVER: &str = "gameover";

const GRAVITY: f32 = 800.0;

pub struct Rockbound {
    director: SceneDirector,
}

impl Rockbound {
    /// Build the game over `store`, which keeps the inventory between scenes.
    pub fn new(store: SharedStore) -> Self {
        Self::with_tuning(store, PlayerTuning::default())
    }

    pub fn with_tuning(store: SharedStore, tuning: PlayerTuning) -> Self {
        let inventory = InventoryStore::new(store);
        let level = |json: &'static str| {
            let inventory = inventory.clone();
            move || -> Box<dyn rockbound_engine::Scene> { Box::new(LevelScene::new(json, inventory.clone(), tuning)) }
        };

        let director = SceneDirector::new()
            .with_scene(LEVEL1, level(LEVEL1_JSON))
            .with_scene(LEVEL2, level(LEVEL2_JSON))
            .with_scene(GAME_OVER, || Box::new(GameOverScene::new()));

        Self { director }
    }
}

impl Game for Rockbound {
    fn config(&self) -> GameConfig {
        GameConfig {
            gravity: Vec2::new(0.0, GRAVITY),
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        if let Err(err) = self.director.go_to(LEVEL1, ctx) {
            log::error!("{}", err);
        }
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputState) {
        if let Err(err) = self.director.update(ctx, input) {
            log::error!("{}", err);
        }
    }

    fn active_scene(&self) -> Option<&str> {
        self.director.active_name()
    }
}
