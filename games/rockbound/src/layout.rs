//! Level layouts, embedded as JSON.

use glam::Vec2;
use rockbound_engine::Bounds;
use serde::Deserialize;

pub const LEVEL1_JSON: &str = include_str!("../assets/levels/level1.json");
pub const LEVEL2_JSON: &str = include_str!("../assets/levels/level2.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlacementKind {
    RockFloor,
    Rock,
    Coin,
    Powerup,
    Key,
    Door,
    Enemy,
}

/// One entity of a level.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Placement {
    pub kind: PlacementKind,
    pub x: f32,
    pub y: f32,
    /// Enemy patrol half-range. Ignored by other kinds.
    #[serde(default)]
    pub patrol: f32,
}

impl Placement {
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CameraLayout {
    #[serde(default = "default_zoom")]
    pub zoom: f32,
    /// min_x, min_y, max_x, max_y
    pub bounds: [f32; 4],
}

fn default_zoom() -> f32 {
    2.0
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LevelLayout {
    pub name: String,
    /// Player spawn point.
    pub player: [f32; 2],
    pub camera: CameraLayout,
    pub entities: Vec<Placement>,
}

impl LevelLayout {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn player_spawn(&self) -> Vec2 {
        Vec2::from(self.player)
    }

    pub fn bounds(&self) -> Bounds {
        let [min_x, min_y, max_x, max_y] = self.camera.bounds;
        Bounds::new(min_x, min_y, max_x, max_y)
    }

    pub fn count(&self, kind: PlacementKind) -> usize {
        self.entities.iter().filter(|p| p.kind == kind).count()
    }
}
