use glam::Vec2;
use crate::api::types::EntityId;
use crate::components::animation::Animator;
use crate::components::sprite::SpriteComponent;
use crate::core::physics::PhysicsBody;

/// Fat Entity: a single struct with optional components.
/// Games identify entities by `tag` ("player", "key", "door", ...).
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// String tag for finding entities by name.
    pub tag: String,
    /// Whether this entity is active (inactive entities are not rendered).
    pub active: bool,
    /// Position in world space (Y down).
    pub pos: Vec2,
    /// Rotation in radians.
    pub rotation: f32,
    /// Rendered size in world units.
    pub scale: Vec2,
    /// Draw order. Higher values are drawn on top.
    pub z: i32,
    /// Sprite component (entities without sprites are invisible).
    pub sprite: Option<SpriteComponent>,
    /// Named animation clips driving the sprite frame.
    pub animation: Option<Animator>,
    /// Physics body handles, set by `EngineContext::spawn_with_body`.
    pub body: Option<PhysicsBody>,
}

impl Entity {
    /// Create a new entity with the given ID at the origin.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            pos: Vec2::ZERO,
            rotation: 0.0,
            scale: Vec2::ONE,
            z: 0,
            sprite: None,
            animation: None,
            body: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_scale(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_z(mut self, z: i32) -> Self {
        self.z = z;
        self
    }

    pub fn with_sprite(mut self, sprite: SpriteComponent) -> Self {
        self.sprite = Some(sprite);
        self
    }

    pub fn with_animation(mut self, animation: Animator) -> Self {
        self.animation = Some(animation);
        self
    }

    pub fn with_body(mut self, body: PhysicsBody) -> Self {
        self.body = Some(body);
        self
    }
}
