pub mod api;
pub mod components;
pub mod core;
pub mod extensions;
pub mod input;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::error::EngineError;
pub use api::game::{EngineContext, Game, GameConfig};
pub use api::types::{EntityId, GameEvent};
pub use components::animation::{AnimationClip, Animator};
pub use components::entity::Entity;
pub use components::sprite::SpriteComponent;
pub use crate::core::director::{Scene, SceneDirector};
pub use crate::core::physics::{BodyDesc, BodyType, ColliderDesc, CollisionPair, PhysicsBody, PhysicsWorld};
pub use crate::core::storage::{KeyValueStore, MemoryStore, SharedStore};
pub use crate::core::time::{Clock, FixedTimestep};
pub use crate::core::world::World;
pub use extensions::{Easing, Tween, TweenEnd, TweenState};
pub use input::keys;
pub use input::queue::{InputEvent, InputQueue};
pub use input::state::InputState;
pub use renderer::camera::{Bounds, Camera2D};
pub use renderer::instance::{RenderBuffer, RenderInstance};
pub use systems::animation::tick_animations;
pub use systems::render::build_render_buffer;
