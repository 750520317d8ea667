use glam::Vec2;
use rockbound_engine::{BodyDesc, ColliderDesc, EngineContext, Entity, EntityId, SpriteComponent};

use crate::contact;

const ENEMY_SIZE: f32 = 50.0;
const ENEMY_ROW: f32 = 5.0;
const PATROL_SPEED: f32 = 60.0;

/// Hazard walking back and forth around its spawn point.
/// Touching it ends the run.
#[derive(Debug, Clone)]
pub struct Enemy {
    id: EntityId,
    min_x: f32,
    max_x: f32,
    direction: f32,
}

impl Enemy {
    /// `patrol` is the distance covered on each side of `pos`; 0 stands still.
    pub fn spawn(ctx: &mut EngineContext, pos: Vec2, patrol: f32) -> Self {
        let id = ctx.next_id();
        let entity = Entity::new(id)
            .with_tag(contact::ENEMY)
            .with_scale(Vec2::splat(ENEMY_SIZE))
            .with_z(8)
            .with_sprite(SpriteComponent::cell(0.0, ENEMY_ROW));
        let desc = BodyDesc::kinematic(ColliderDesc::rect(ENEMY_SIZE, ENEMY_SIZE)).with_position(pos);
        ctx.spawn_with_body(entity, desc);

        let patrol = patrol.max(0.0);
        Self {
            id,
            min_x: pos.x - patrol,
            max_x: pos.x + patrol,
            direction: 1.0,
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Turn around at either end of the patrol range.
    pub fn update(&mut self, ctx: &mut EngineContext) {
        let Some(pos) = ctx.position(self.id) else {
            return;
        };
        if self.max_x <= self.min_x {
            return;
        }
        if pos.x >= self.max_x {
            self.direction = -1.0;
        } else if pos.x <= self.min_x {
            self.direction = 1.0;
        }
        ctx.set_velocity(self.id, Vec2::new(PATROL_SPEED * self.direction, 0.0));
        if let Some(sprite) = ctx.world.get_mut(self.id).and_then(|e| e.sprite.as_mut()) {
            sprite.flip_x = self.direction < 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patrols_and_turns_around() {
        let mut ctx = EngineContext::default();
        let mut enemy = Enemy::spawn(&mut ctx, Vec2::new(100.0, 300.0), 10.0);

        let mut max_seen: f32 = 100.0;
        for _ in 0..120 {
            enemy.update(&mut ctx);
            ctx.step_physics();
            let x = ctx.position(enemy.id()).map_or(100.0, |p| p.x);
            max_seen = max_seen.max(x);
        }
        assert!(max_seen >= 110.0);
        assert!(max_seen < 115.0);
        assert_eq!(ctx.position(enemy.id()).map(|p| p.y), Some(300.0));
    }

    #[test]
    fn zero_patrol_stands_still() {
        let mut ctx = EngineContext::default();
        let mut enemy = Enemy::spawn(&mut ctx, Vec2::new(0.0, 350.0), 0.0);
        enemy.update(&mut ctx);
        ctx.step_physics();
        assert_eq!(ctx.velocity(enemy.id()), Vec2::ZERO);
        assert_eq!(ctx.position(enemy.id()), Some(Vec2::new(0.0, 350.0)));
    }

    #[test]
    fn despawned_enemy_is_ignored() {
        let mut ctx = EngineContext::default();
        let mut enemy = Enemy::spawn(&mut ctx, Vec2::ZERO, 50.0);
        ctx.despawn(enemy.id());
        enemy.update(&mut ctx);
        assert!(!ctx.exists(enemy.id()));
    }
}
