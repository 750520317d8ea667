//! Static ground pieces. Built once, never touched again.

use glam::Vec2;
use rockbound_engine::{BodyDesc, ColliderDesc, EngineContext, Entity, EntityId, SpriteComponent};

use crate::contact;

const TERRAIN_ROW: f32 = 4.0;
const ROCK_FLOOR_SIZE: Vec2 = Vec2::new(400.0, 50.0);
const ROCK_SIZE: Vec2 = Vec2::new(50.0, 50.0);

fn spawn_fixed(ctx: &mut EngineContext, tag: &str, pos: Vec2, size: Vec2, col: f32) -> EntityId {
    let id = ctx.next_id();
    let entity = Entity::new(id)
        .with_tag(tag)
        .with_scale(size)
        .with_sprite(SpriteComponent::cell(col, TERRAIN_ROW));
    let desc = BodyDesc::fixed(ColliderDesc::rect(size.x, size.y))
        .with_position(pos)
        .with_friction(0.0);
    ctx.spawn_with_body(entity, desc)
}

/// Wide platform.
#[derive(Debug, Clone, Copy)]
pub struct RockFloor {
    pub id: EntityId,
}

impl RockFloor {
    pub fn spawn(ctx: &mut EngineContext, pos: Vec2) -> Self {
        Self {
            id: spawn_fixed(ctx, contact::ROCK_FLOOR, pos, ROCK_FLOOR_SIZE, 0.0),
        }
    }
}

/// Small block.
#[derive(Debug, Clone, Copy)]
pub struct Rock {
    pub id: EntityId,
}

impl Rock {
    pub fn spawn(ctx: &mut EngineContext, pos: Vec2) -> Self {
        Self {
            id: spawn_fixed(ctx, contact::ROCK, pos, ROCK_SIZE, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terrain_is_fixed_solid() {
        let mut ctx = EngineContext::default();
        let floor = RockFloor::spawn(&mut ctx, Vec2::new(450.0, 450.0));
        let rock = Rock::spawn(&mut ctx, Vec2::new(370.0, 350.0));

        assert!(ctx.is_fixed_solid(floor.id));
        assert!(ctx.is_fixed_solid(rock.id));
        assert_eq!(ctx.position(rock.id), Some(Vec2::new(370.0, 350.0)));
    }

    #[test]
    fn terrain_does_not_move() {
        let mut ctx = EngineContext::default();
        let floor = RockFloor::spawn(&mut ctx, Vec2::new(300.0, 200.0));
        for _ in 0..5 {
            ctx.step_physics();
        }
        assert_eq!(ctx.position(floor.id), Some(Vec2::new(300.0, 200.0)));
    }
}
