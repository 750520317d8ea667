use glam::Vec2;
use rockbound_engine::{keys, EngineContext, Entity, InputState, Scene, SpriteComponent};

use crate::game::LEVEL1;

pub const GAME_OVER_MESSAGE: &str = "Game over! Press Enter to try again";

const BANNER_ROW: f32 = 6.0;

/// Shown after the player dies or falls out of the level.
#[derive(Debug, Default)]
pub struct GameOverScene;

impl GameOverScene {
    pub fn new() -> Self {
        Self
    }
}

impl Scene for GameOverScene {
    fn init(&mut self, ctx: &mut EngineContext) {
        let center = Vec2::new(ctx.config().viewport_width, ctx.config().viewport_height) / 2.0;
        let id = ctx.next_id();
        ctx.spawn(
            Entity::new(id)
                .with_tag("gameover")
                .with_pos(center)
                .with_scale(Vec2::new(400.0, 100.0))
                .with_sprite(SpriteComponent::cell(0.0, BANNER_ROW)),
        );
        ctx.camera.look_at(center);
        ctx.show_message(GAME_OVER_MESSAGE);
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputState) {
        if input.was_pressed(keys::ENTER) {
            ctx.go_to_scene(LEVEL1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rockbound_engine::InputEvent;

    #[test]
    fn shows_message_and_restarts_on_enter() {
        let mut ctx = EngineContext::default();
        let mut scene = GameOverScene::new();
        scene.init(&mut ctx);
        assert_eq!(ctx.messages, vec![GAME_OVER_MESSAGE.to_string()]);

        scene.update(&mut ctx, &InputState::new());
        assert_eq!(ctx.pending_scene(), None);

        let mut input = InputState::new();
        input.apply(&[InputEvent::KeyDown { key_code: keys::ENTER }]);
        scene.update(&mut ctx, &input);
        assert_eq!(ctx.pending_scene(), Some(LEVEL1));
    }
}
