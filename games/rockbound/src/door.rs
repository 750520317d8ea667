use glam::Vec2;
use rockbound_engine::{BodyDesc, ColliderDesc, EngineContext, Entity, EntityId, SpriteComponent};

use crate::contact;

const ITEM_ROW: f32 = 3.0;
const KEY_COL: f32 = 2.0;
const DOOR_COL: f32 = 3.0;
const KEY_SIZE: f32 = 30.0;
const DOOR_SIZE: Vec2 = Vec2::new(60.0, 100.0);

/// Exit of a level. Whether it opens is decided by the player's
/// inventory, not by the door.
#[derive(Debug, Clone)]
pub struct Door {
    id: EntityId,
    pos: Vec2,
}

impl Door {
    pub fn spawn(ctx: &mut EngineContext, pos: Vec2) -> Self {
        let id = ctx.next_id();
        let entity = Entity::new(id)
            .with_tag(contact::DOOR)
            .with_scale(DOOR_SIZE)
            .with_z(2)
            .with_sprite(SpriteComponent::cell(DOOR_COL, ITEM_ROW));
        let desc = BodyDesc::passive(ColliderDesc::rect(DOOR_SIZE.x, DOOR_SIZE.y)).with_position(pos);
        ctx.spawn_with_body(entity, desc);
        Self { id, pos }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    /// Show `text` to the player, attributed to this door.
    pub fn display_message(&self, ctx: &mut EngineContext, text: &str) {
        log::debug!("door {:?} at {}: {}", self.id, self.pos, text);
        ctx.show_message(text);
    }
}

/// Collected by touching it; opens doors.
#[derive(Debug, Clone)]
pub struct Key {
    id: EntityId,
}

impl Key {
    pub fn spawn(ctx: &mut EngineContext, pos: Vec2) -> Self {
        let id = ctx.next_id();
        let entity = Entity::new(id)
            .with_tag(contact::KEY)
            .with_scale(Vec2::splat(KEY_SIZE))
            .with_z(5)
            .with_sprite(SpriteComponent::cell(KEY_COL, ITEM_ROW));
        let desc = BodyDesc::passive(ColliderDesc::rect(KEY_SIZE, KEY_SIZE)).with_position(pos);
        ctx.spawn_with_body(entity, desc);
        Self { id }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn door_and_key_are_passive() {
        let mut ctx = EngineContext::default();
        let door = Door::spawn(&mut ctx, Vec2::new(1200.0, 320.0));
        let key = Key::spawn(&mut ctx, Vec2::new(1000.0, 350.0));

        assert_eq!(ctx.world.tag_of(door.id()), Some(contact::DOOR));
        assert_eq!(ctx.world.tag_of(key.id()), Some(contact::KEY));
        assert!(!ctx.is_fixed_solid(door.id()));
        assert!(!ctx.is_fixed_solid(key.id()));
        assert_eq!(ctx.position(door.id()), Some(Vec2::new(1200.0, 320.0)));
    }

    #[test]
    fn display_message_reaches_the_page() {
        let mut ctx = EngineContext::default();
        let door = Door::spawn(&mut ctx, Vec2::ZERO);
        door.display_message(&mut ctx, "locked");
        assert_eq!(ctx.messages, vec!["locked".to_string()]);
    }
}
