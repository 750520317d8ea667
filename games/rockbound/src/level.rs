//! A playable level built from a `LevelLayout`.

use rockbound_engine::{EngineContext, InputState, Scene};

use crate::actors::Actors;
use crate::door::{Door, Key};
use crate::enemy::Enemy;
use crate::inventory::InventoryStore;
use crate::layout::{LevelLayout, PlacementKind};
use crate::pickup::{Coin, Powerup};
use crate::player::Player;
use crate::terrain::{Rock, RockFloor};
use crate::tuning::PlayerTuning;

pub struct LevelScene {
    layout_json: &'static str,
    inventory: InventoryStore,
    tuning: PlayerTuning,
    player: Option<Player>,
    actors: Actors,
}

impl LevelScene {
    pub fn new(layout_json: &'static str, inventory: InventoryStore, tuning: PlayerTuning) -> Self {
        Self {
            layout_json,
            inventory,
            tuning,
            player: None,
            actors: Actors::new(),
        }
    }

    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    pub fn actors(&self) -> &Actors {
        &self.actors
    }

    fn build(&mut self, ctx: &mut EngineContext, layout: &LevelLayout) {
        for placement in &layout.entities {
            let pos = placement.pos();
            match placement.kind {
                PlacementKind::RockFloor => {
                    RockFloor::spawn(ctx, pos);
                }
                PlacementKind::Rock => {
                    Rock::spawn(ctx, pos);
                }
                PlacementKind::Key => {
                    Key::spawn(ctx, pos);
                }
                PlacementKind::Coin => self.actors.coins.push(Coin::spawn(ctx, pos)),
                PlacementKind::Powerup => self.actors.powerups.push(Powerup::spawn(ctx, pos)),
                PlacementKind::Door => self.actors.doors.push(Door::spawn(ctx, pos)),
                PlacementKind::Enemy => self.actors.enemies.push(Enemy::spawn(ctx, pos, placement.patrol)),
            }
        }

        let spawn = layout.player_spawn();
        self.player = Some(Player::spawn(ctx, spawn, self.tuning, self.inventory.clone()));

        ctx.camera.set_zoom(layout.camera.zoom);
        ctx.camera.set_bounds(layout.bounds());
        ctx.camera.look_at(spawn);

        log::info!("{}: built {} entities", layout.name, ctx.world.len());
    }
}

impl Scene for LevelScene {
    fn init(&mut self, ctx: &mut EngineContext) {
        self.inventory.reset();
        self.actors.clear();
        self.player = None;

        match LevelLayout::from_json(self.layout_json) {
            Ok(layout) => self.build(ctx, &layout),
            Err(err) => log::error!("level layout: {}", err),
        }
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputState) {
        for enemy in &mut self.actors.enemies {
            enemy.update(ctx);
        }

        let Some(player) = self.player.as_mut() else {
            return;
        };
        player.update(ctx, input, &mut self.actors);

        if let Some(pos) = ctx.position(player.id()) {
            let dt = ctx.config().fixed_dt;
            ctx.camera.follow(pos, dt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use rockbound_engine::{GameConfig, MemoryStore};

    use crate::contact;
    use crate::inventory::KEY_ITEM;
    use crate::layout::{LEVEL1_JSON, LEVEL2_JSON};

    fn ctx() -> EngineContext {
        EngineContext::new(GameConfig {
            gravity: Vec2::new(0.0, 800.0),
            ..GameConfig::default()
        })
    }

    #[test]
    fn init_resets_inventory_and_spawns_layout() {
        let store = MemoryStore::shared();
        let inventory = InventoryStore::new(store);
        inventory.append(KEY_ITEM);

        let mut ctx = ctx();
        let mut scene = LevelScene::new(LEVEL2_JSON, inventory.clone(), PlayerTuning::default());
        scene.init(&mut ctx);

        assert!(!inventory.contains(KEY_ITEM));
        let player = scene.player().unwrap();
        assert_eq!(ctx.position(player.id()), Some(Vec2::new(450.0, 200.0)));
        assert_eq!(scene.actors().coins.len(), 1);
        assert_eq!(scene.actors().powerups.len(), 1);
        assert_eq!(scene.actors().doors.len(), 1);
        assert_eq!(scene.actors().enemies.len(), 1);
        assert!(ctx.world.find_by_tag(contact::ROCK).is_some());
        // 4 floors, rock, enemy, door, coin, powerup, player
        assert_eq!(ctx.world.len(), 10);
    }

    #[test]
    fn camera_is_zoomed_bounded_and_on_player() {
        let mut ctx = ctx();
        let mut scene = LevelScene::new(LEVEL2_JSON, InventoryStore::new(MemoryStore::shared()), PlayerTuning::default());
        scene.init(&mut ctx);

        assert_eq!(ctx.camera.zoom(), 2.0);
        assert_eq!(ctx.camera.bounds(), Some(rockbound_engine::Bounds::new(0.0, 0.0, 3000.0, 700.0)));
        assert!(ctx.camera.is_visible(Vec2::new(450.0, 200.0)));
    }

    #[test]
    fn bad_layout_spawns_nothing() {
        let mut ctx = ctx();
        let mut scene = LevelScene::new("not json", InventoryStore::new(MemoryStore::shared()), PlayerTuning::default());
        scene.init(&mut ctx);
        scene.update(&mut ctx, &InputState::new());

        assert!(ctx.world.is_empty());
        assert!(scene.player().is_none());
    }

    #[test]
    fn level1_has_key_and_door() {
        let mut ctx = ctx();
        let mut scene = LevelScene::new(LEVEL1_JSON, InventoryStore::new(MemoryStore::shared()), PlayerTuning::default());
        scene.init(&mut ctx);

        assert!(ctx.world.find_by_tag(contact::KEY).is_some());
        assert!(ctx.world.find_by_tag(contact::DOOR).is_some());
        assert!(ctx.world.find_by_tag(contact::PLAYER).is_some());
    }
}
