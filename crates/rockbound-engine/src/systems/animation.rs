//! Animation system: advances animators and copies the frame into sprites.

use crate::core::world::World;

/// Tick all entity animators and update their sprite cell. Call once per step.
pub fn tick_animations(world: &mut World, dt: f32) {
    for entity in world.iter_mut() {
        let Some(anim) = entity.animation.as_mut() else {
            continue;
        };
        anim.tick(dt);
        if let (Some((col, row)), Some(sprite)) = (anim.current_frame(), entity.sprite.as_mut()) {
            sprite.col = col;
            sprite.row = row;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use crate::components::animation::{AnimationClip, Animator};
    use crate::components::entity::Entity;
    use crate::components::sprite::SpriteComponent;

    #[test]
    fn tick_updates_sprite_cell() {
        let mut world = World::new();
        world.spawn(
            Entity::new(EntityId(1))
                .with_sprite(SpriteComponent::default())
                .with_animation(Animator::new().with_clip("walk", AnimationClip::strip(3, 1..=7, 100))),
        );

        tick_animations(&mut world, 0.15);

        let sprite = world.get(EntityId(1)).unwrap().sprite.as_ref().unwrap();
        assert_eq!((sprite.col, sprite.row), (2.0, 3.0));
    }
}
