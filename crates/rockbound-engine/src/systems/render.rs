use crate::components::entity::Entity;
use crate::renderer::instance::{RenderBuffer, RenderInstance};

/// Build the frame's instance buffer from visible entities, ordered by `z`.
/// Entities with equal `z` keep their spawn order.
pub fn build_render_buffer<'a>(entities: impl Iterator<Item = &'a Entity>, buffer: &mut RenderBuffer) {
    buffer.clear();

    let mut visible: Vec<&Entity> = entities
        .filter(|e| e.active && e.sprite.is_some())
        .collect();
    visible.sort_by_key(|e| e.z);

    for entity in visible {
        let Some(sprite) = &entity.sprite else {
            continue;
        };
        let width = if sprite.flip_x { -entity.scale.x } else { entity.scale.x };
        buffer.push(RenderInstance {
            x: entity.pos.x,
            y: entity.pos.y,
            width,
            height: entity.scale.y,
            col: sprite.col,
            row: sprite.row,
            alpha: sprite.alpha,
            rotation: entity.rotation,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use crate::components::sprite::SpriteComponent;
    use glam::Vec2;

    #[test]
    fn sorted_by_draw_order() {
        let entities = vec![
            Entity::new(EntityId(1)).with_z(10).with_sprite(SpriteComponent::cell(1.0, 0.0)),
            Entity::new(EntityId(2)).with_sprite(SpriteComponent::cell(2.0, 0.0)),
            Entity::new(EntityId(3)),
        ];
        let mut buffer = RenderBuffer::default();
        build_render_buffer(entities.iter(), &mut buffer);

        assert_eq!(buffer.instance_count(), 2);
        assert_eq!(buffer.instances()[0].col, 2.0);
        assert_eq!(buffer.instances()[1].col, 1.0);
    }

    #[test]
    fn flipped_sprite_has_negative_width() {
        let entities = vec![Entity::new(EntityId(1))
            .with_scale(Vec2::new(48.0, 48.0))
            .with_sprite(SpriteComponent {
                flip_x: true,
                ..Default::default()
            })];
        let mut buffer = RenderBuffer::default();
        build_render_buffer(entities.iter(), &mut buffer);
        assert_eq!(buffer.instances()[0].width, -48.0);
    }
}
