use glam::Vec2;

use crate::api::types::{EntityId, GameEvent};
use crate::components::entity::Entity;
use crate::core::physics::{BodyDesc, CollisionPair, PhysicsWorld};
use crate::core::time::Clock;
use crate::core::world::World;
use crate::extensions::tween::TweenState;
use crate::input::state::InputState;
use crate::renderer::camera::Camera2D;
use crate::systems::animation::tick_animations;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Viewport width in screen units.
    pub viewport_width: f32,
    /// Viewport height in screen units.
    pub viewport_height: f32,
    /// Gravity for the physics world. Y-down: positive Y pulls downward.
    pub gravity: Vec2,
    /// Maximum number of render instances (default: 512).
    pub max_instances: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            viewport_width: 800.0,
            viewport_height: 600.0,
            gravity: Vec2::ZERO,
            max_instances: 512,
            max_events: 32,
        }
    }
}

/// The contract every game fulfills.
pub trait Game {
    /// Engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Build the first scene.
    fn init(&mut self, ctx: &mut EngineContext);

    /// One fixed step of game logic. Physics runs after it returns.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputState);

    /// Name of the scene currently running, for the host page.
    fn active_scene(&self) -> Option<&str> {
        None
    }
}

/// Mutable access to engine state, passed to games and scenes.
pub struct EngineContext {
    pub world: World,
    pub physics: PhysicsWorld,
    pub camera: Camera2D,
    pub clock: Clock,
    pub tweens: TweenState,
    pub events: Vec<GameEvent>,
    pub messages: Vec<String>,
    config: GameConfig,
    next_id: u32,
    collision_events: Vec<CollisionPair>,
    scene_request: Option<String>,
}

impl EngineContext {
    pub fn new(config: GameConfig) -> Self {
        let mut physics = PhysicsWorld::new(config.gravity);
        physics.set_dt(config.fixed_dt);
        Self {
            world: World::new(),
            physics,
            camera: Camera2D::new(config.viewport_width, config.viewport_height),
            clock: Clock::new(),
            tweens: TweenState::new(),
            events: Vec::with_capacity(config.max_events),
            messages: Vec::new(),
            config,
            next_id: 1,
            collision_events: Vec::new(),
            scene_request: None,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Generate the next unique entity ID. IDs are never reused, even across scenes.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn spawn(&mut self, entity: Entity) -> EntityId {
        let id = entity.id;
        self.world.spawn(entity);
        id
    }

    /// Spawn an entity with a physics body positioned at the body's position.
    pub fn spawn_with_body(&mut self, entity: Entity, desc: BodyDesc) -> EntityId {
        let id = entity.id;
        let body = self.physics.create_body(id, &desc);
        let entity = entity.with_pos(desc.position).with_body(body);
        self.world.spawn(entity);
        id
    }

    /// Remove an entity, its physics body and its tweens. Unknown IDs are ignored.
    pub fn despawn(&mut self, id: EntityId) {
        if let Some(entity) = self.world.despawn(id) {
            if let Some(body) = &entity.body {
                self.physics.remove_body(body);
            }
        }
        self.tweens.remove_entity(id);
    }

    pub fn exists(&self, id: EntityId) -> bool {
        self.world.contains(id)
    }

    pub fn position(&self, id: EntityId) -> Option<Vec2> {
        self.world.get(id).map(|e| e.pos)
    }

    pub fn apply_impulse(&mut self, id: EntityId, impulse: Vec2) {
        if let Some(body) = self.world.get(id).and_then(|e| e.body) {
            self.physics.apply_impulse(&body, impulse);
        }
    }

    pub fn set_velocity(&mut self, id: EntityId, vel: Vec2) {
        if let Some(body) = self.world.get(id).and_then(|e| e.body) {
            self.physics.set_velocity(&body, vel);
        }
    }

    pub fn velocity(&self, id: EntityId) -> Vec2 {
        self.world
            .get(id)
            .and_then(|e| e.body.as_ref())
            .map(|body| self.physics.velocity(body))
            .unwrap_or(Vec2::ZERO)
    }

    /// Whether the entity has a fixed, non-sensor body (ground and walls).
    pub fn is_fixed_solid(&self, id: EntityId) -> bool {
        self.world
            .get(id)
            .and_then(|e| e.body.as_ref())
            .is_some_and(|body| self.physics.is_fixed_solid(body))
    }

    /// Contacts begun or ended during the most recent physics step.
    pub fn collisions(&self) -> &[CollisionPair] {
        &self.collision_events
    }

    /// Queue a contact as if the physics step had reported it.
    pub fn push_collision(&mut self, pair: CollisionPair) {
        self.collision_events.push(pair);
    }

    /// Emit a game event to the browser overlay.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Show a text message to the player.
    pub fn show_message(&mut self, text: impl Into<String>) {
        let text = text.into();
        log::info!("message: {}", text);
        self.messages.push(text);
    }

    /// Ask for a scene change. Applied after the current update returns;
    /// the last request of a step wins.
    pub fn go_to_scene(&mut self, name: impl Into<String>) {
        self.scene_request = Some(name.into());
    }

    pub fn pending_scene(&self) -> Option<&str> {
        self.scene_request.as_deref()
    }

    pub fn take_scene_request(&mut self) -> Option<String> {
        self.scene_request.take()
    }

    /// Clear per-frame outputs (events, messages).
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
        self.messages.clear();
    }

    /// Step physics and copy body positions back into entities.
    pub fn step_physics(&mut self) {
        self.collision_events.clear();
        self.physics.step_into(&mut self.collision_events);

        for entity in self.world.iter_mut() {
            if let Some(body) = &entity.body {
                let (pos, rot) = self.physics.body_position(body);
                entity.pos = pos;
                entity.rotation = rot;
            }
        }
    }

    /// Advance clock, animations and tweens by one step.
    pub fn advance(&mut self, dt: f32) {
        self.clock.advance(dt);
        tick_animations(&mut self.world, dt);
        for id in self.tweens.tick(dt, &mut self.world) {
            self.despawn(id);
        }
    }

    /// Tear down everything scene-scoped before the next scene is built.
    pub fn reset_world(&mut self) {
        self.world.clear();
        self.physics = PhysicsWorld::new(self.config.gravity);
        self.physics.set_dt(self.config.fixed_dt);
        self.camera = Camera2D::new(self.config.viewport_width, self.config.viewport_height);
        self.clock = Clock::new();
        self.tweens.clear();
        self.collision_events.clear();
        self.scene_request = None;
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::sprite::SpriteComponent;
    use crate::core::physics::ColliderDesc;
    use crate::extensions::tween::Tween;

    #[test]
    fn spawn_with_body_creates_entity_and_physics() {
        let mut ctx = EngineContext::default();
        let id = ctx.next_id();
        let desc = BodyDesc::dynamic(ColliderDesc::rect(20.0, 20.0)).with_position(Vec2::new(100.0, 200.0));
        ctx.spawn_with_body(Entity::new(id), desc);

        assert_eq!(ctx.world.len(), 1);
        assert_eq!(ctx.physics.body_count(), 1);
        assert_eq!(ctx.position(id), Some(Vec2::new(100.0, 200.0)));
    }

    #[test]
    fn despawn_cleans_up_physics_and_tweens() {
        let mut ctx = EngineContext::default();
        let id = ctx.next_id();
        ctx.spawn_with_body(
            Entity::new(id).with_sprite(SpriteComponent::default()),
            BodyDesc::passive(ColliderDesc::rect(10.0, 10.0)),
        );
        ctx.tweens.add(id, Tween::fade_out(1.0));

        ctx.despawn(id);
        assert!(!ctx.exists(id));
        assert_eq!(ctx.physics.body_count(), 0);
        assert!(ctx.tweens.is_empty());
    }

    #[test]
    fn step_physics_syncs_positions() {
        let mut ctx = EngineContext::new(GameConfig {
            gravity: Vec2::new(0.0, 800.0),
            ..GameConfig::default()
        });
        let id = ctx.next_id();
        ctx.spawn_with_body(Entity::new(id), BodyDesc::dynamic(ColliderDesc::rect(10.0, 10.0)));
        for _ in 0..10 {
            ctx.step_physics();
        }
        assert!(ctx.position(id).unwrap().y > 0.0);
    }

    #[test]
    fn fade_tween_despawns_through_advance() {
        let mut ctx = EngineContext::default();
        let id = ctx.next_id();
        ctx.spawn(Entity::new(id).with_sprite(SpriteComponent::default()));
        ctx.tweens.add(id, Tween::fade_out(0.2).then_despawn());

        ctx.advance(0.1);
        assert!(ctx.exists(id));
        ctx.advance(0.1);
        assert!(!ctx.exists(id));
    }

    #[test]
    fn scene_request_is_taken_once() {
        let mut ctx = EngineContext::default();
        ctx.go_to_scene("gameover");
        assert_eq!(ctx.pending_scene(), Some("gameover"));
        assert_eq!(ctx.take_scene_request().as_deref(), Some("gameover"));
        assert_eq!(ctx.take_scene_request(), None);
    }

    #[test]
    fn reset_world_keeps_ids_unique() {
        let mut ctx = EngineContext::default();
        let first = ctx.next_id();
        ctx.spawn(Entity::new(first));
        ctx.clock.advance(3.0);
        ctx.reset_world();

        assert!(ctx.world.is_empty());
        assert_eq!(ctx.clock.now(), 0.0);
        assert_ne!(ctx.next_id(), first);
    }
}
