// extensions/tween.rs
//
// Timed property animations keyed by EntityId.
// A tween can ask for its entity to be removed when it finishes
// ("fade out, then die").

use crate::api::types::EntityId;
use crate::core::world::World;
use super::easing::{ease, Easing};

/// What happens to the entity when the tween completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TweenEnd {
    #[default]
    Keep,
    Despawn,
}

/// Sprite opacity animation.
#[derive(Debug, Clone)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    /// Duration in seconds.
    pub duration: f32,
    pub elapsed: f32,
    pub easing: Easing,
    pub end: TweenEnd,
}

impl Tween {
    pub fn alpha(from: f32, to: f32, duration: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: 0.0,
            easing,
            end: TweenEnd::Keep,
        }
    }

    /// Fade to transparent over `duration` seconds.
    pub fn fade_out(duration: f32) -> Self {
        Self::alpha(1.0, 0.0, duration, Easing::Linear)
    }

    pub fn then_despawn(mut self) -> Self {
        self.end = TweenEnd::Despawn;
        self
    }

    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// All running tweens of a scene.
#[derive(Debug, Default)]
pub struct TweenState {
    tweens: Vec<(EntityId, Tween)>,
}

impl TweenState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entity: EntityId, tween: Tween) {
        self.tweens.push((entity, tween));
    }

    pub fn remove_entity(&mut self, entity: EntityId) {
        self.tweens.retain(|(e, _)| *e != entity);
    }

    /// Advance all tweens and write their values into the world.
    /// Returns the entities whose finished tween asked for removal.
    pub fn tick(&mut self, dt: f32, world: &mut World) -> Vec<EntityId> {
        let mut despawn = Vec::new();

        for (entity_id, tween) in self.tweens.iter_mut() {
            tween.elapsed += dt;
            let value = ease(tween.from, tween.to, tween.progress(), tween.easing);
            if let Some(sprite) = world.get_mut(*entity_id).and_then(|e| e.sprite.as_mut()) {
                sprite.alpha = value;
            }
            if tween.is_complete() && tween.end == TweenEnd::Despawn {
                despawn.push(*entity_id);
            }
        }

        self.tweens.retain(|(_, tween)| !tween.is_complete());
        despawn
    }

    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    pub fn clear(&mut self) {
        self.tweens.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::entity::Entity;
    use crate::components::sprite::SpriteComponent;

    #[test]
    fn fade_out_reaches_zero_and_requests_despawn() {
        let mut tweens = TweenState::new();
        let mut world = World::new();
        let id = EntityId(7);
        world.spawn(Entity::new(id).with_sprite(SpriteComponent::default()));
        tweens.add(id, Tween::fade_out(0.2).then_despawn());

        assert!(tweens.tick(0.1, &mut world).is_empty());
        let alpha = world.get(id).unwrap().sprite.as_ref().unwrap().alpha;
        assert!((alpha - 0.5).abs() < 1e-4);

        assert_eq!(tweens.tick(0.1, &mut world), vec![id]);
        assert!(tweens.is_empty());
    }

    #[test]
    fn keep_tween_finishes_silently() {
        let mut tweens = TweenState::new();
        let mut world = World::new();
        world.spawn(Entity::new(EntityId(1)).with_sprite(SpriteComponent::default()));
        tweens.add(EntityId(1), Tween::fade_out(0.1));
        assert!(tweens.tick(0.2, &mut world).is_empty());
        assert!(tweens.is_empty());
    }

    #[test]
    fn remove_entity_drops_its_tweens() {
        let mut tweens = TweenState::new();
        tweens.add(EntityId(1), Tween::fade_out(1.0));
        tweens.add(EntityId(2), Tween::fade_out(1.0));
        tweens.remove_entity(EntityId(1));
        assert_eq!(tweens.len(), 1);
    }
}
