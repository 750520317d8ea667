use rockbound_engine::EntityId;

use crate::door::Door;
use crate::enemy::Enemy;
use crate::pickup::{Coin, Powerup};

/// Game-side state of everything in a level besides the player.
/// The engine world holds their bodies and sprites; this holds their rules.
#[derive(Debug, Default)]
pub struct Actors {
    pub coins: Vec<Coin>,
    pub powerups: Vec<Powerup>,
    pub doors: Vec<Door>,
    pub enemies: Vec<Enemy>,
}

impl Actors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn coin_mut(&mut self, id: EntityId) -> Option<&mut Coin> {
        self.coins.iter_mut().find(|c| c.id() == id)
    }

    pub fn powerup_mut(&mut self, id: EntityId) -> Option<&mut Powerup> {
        self.powerups.iter_mut().find(|p| p.id() == id)
    }

    pub fn door(&self, id: EntityId) -> Option<&Door> {
        self.doors.iter().find(|d| d.id() == id)
    }

    pub fn clear(&mut self) {
        self.coins.clear();
        self.powerups.clear();
        self.doors.clear();
        self.enemies.clear();
    }
}
