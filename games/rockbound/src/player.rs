//! The player character.
//!
//! Each fixed step runs, in order: boost expiry, contacts reported by the
//! previous physics step, horizontal movement, jump, door interaction and
//! the out-of-view check. Scene changes are only requested here; the
//! director applies them after the step.

use std::collections::BTreeSet;

use glam::Vec2;
use rockbound_engine::{
    keys, AnimationClip, Animator, BodyDesc, ColliderDesc, CollisionPair, EngineContext, Entity,
    EntityId, InputState, SpriteComponent,
};

use crate::actors::Actors;
use crate::contact::{self, ContactKind};
use crate::game::{GAME_OVER, LEVEL2};
use crate::hud::Hud;
use crate::inventory::{InventoryStore, KEY_ITEM};
use crate::pickup::{CollectedItem, Collector};
use crate::tuning::PlayerTuning;

pub const LOCKED_MESSAGE: &str = "This door is locked, find the key";

const IDLE: &str = "idle";
const WALK: &str = "walk";
const RUN: &str = "run";
const JUMP: &str = "jump";

const PLAYER_Z: i32 = 10;
const BODY_SIZE: Vec2 = Vec2::new(40.0, 70.0);
const SPRITE_SIZE: f32 = 82.0;

/// Raised jump impulse, valid until `expires_at` on the scene clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpBoost {
    pub expires_at: f64,
}

pub struct Player {
    id: EntityId,
    tuning: PlayerTuning,
    health: i32,
    score: u32,
    jump_impulse: f32,
    boost: Option<JumpBoost>,
    /// Fixed solid bodies currently touched.
    ground: BTreeSet<EntityId>,
    collection: Vec<CollectedItem>,
    /// Last door touched. Kept after walking away from it.
    nearby_door: Option<EntityId>,
    facing_left: bool,
    hud: Hud,
    inventory: InventoryStore,
}

fn animator() -> Animator {
    Animator::new()
        .with_clip(IDLE, AnimationClip::strip(0, 1..=9, 100))
        .with_clip(WALK, AnimationClip::strip(1, 1..=7, 130))
        .with_clip(RUN, AnimationClip::strip(1, 1..=7, 80))
        .with_clip(JUMP, AnimationClip::strip(2, 1..=5, 20))
}

impl Player {
    pub fn spawn(ctx: &mut EngineContext, pos: Vec2, tuning: PlayerTuning, inventory: InventoryStore) -> Self {
        let id = ctx.next_id();
        let entity = Entity::new(id)
            .with_tag(contact::PLAYER)
            .with_scale(Vec2::splat(SPRITE_SIZE))
            .with_z(PLAYER_Z)
            .with_sprite(SpriteComponent::cell(1.0, 0.0))
            .with_animation(animator());
        let desc = BodyDesc::dynamic(ColliderDesc::rect(BODY_SIZE.x, BODY_SIZE.y))
            .with_position(pos)
            .with_fixed_rotation(true)
            .with_mass(tuning.mass)
            .with_friction(0.0);
        ctx.spawn_with_body(entity, desc);

        let hud = Hud::new(0, tuning.starting_health);
        hud.init(ctx);

        Self {
            id,
            tuning,
            health: tuning.starting_health,
            score: 0,
            jump_impulse: tuning.jump_impulse,
            boost: None,
            ground: BTreeSet::new(),
            collection: Vec::new(),
            nearby_door: None,
            facing_left: false,
            hud,
            inventory,
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn jump_impulse(&self) -> f32 {
        self.jump_impulse
    }

    pub fn is_grounded(&self) -> bool {
        !self.ground.is_empty()
    }

    pub fn collection(&self) -> &[CollectedItem] {
        &self.collection
    }

    pub fn nearby_door(&self) -> Option<EntityId> {
        self.nearby_door
    }

    pub fn hud(&self) -> &Hud {
        &self.hud
    }

    pub fn update(&mut self, ctx: &mut EngineContext, input: &InputState, actors: &mut Actors) {
        self.expire_boost(ctx);
        self.handle_contacts(ctx, actors);

        let clip = self.move_horizontally(ctx, input);
        let clip = if self.try_jump(ctx, input) { JUMP } else { clip };
        self.show(ctx, clip);

        self.interact(ctx, input, actors);
        self.check_in_view(ctx);
    }

    fn expire_boost(&mut self, ctx: &EngineContext) {
        if let Some(boost) = self.boost {
            if ctx.clock.now() >= boost.expires_at {
                self.boost = None;
                self.jump_impulse = self.tuning.jump_impulse;
                log::info!("player: jump boost expired");
            }
        }
    }

    fn handle_contacts(&mut self, ctx: &mut EngineContext, actors: &mut Actors) {
        let pairs: Vec<CollisionPair> = ctx.collisions().to_vec();
        for pair in pairs {
            let Some(other) = pair.other(self.id) else {
                continue;
            };
            if pair.started {
                self.on_contact_begin(ctx, other, actors);
            } else {
                self.ground.remove(&other);
            }
        }
    }

    fn on_contact_begin(&mut self, ctx: &mut EngineContext, other: EntityId, actors: &mut Actors) {
        let Some(tag) = ctx.world.tag_of(other) else {
            return;
        };
        let kind = ContactKind::from_tag(tag);

        if ctx.is_fixed_solid(other) {
            self.ground.insert(other);
        }

        match kind {
            ContactKind::Hazard => {
                ctx.despawn(other);
                log::info!("player: hit an enemy");
                ctx.go_to_scene(GAME_OVER);
            }
            ContactKind::KeyItem => {
                ctx.despawn(other);
                self.inventory.append(KEY_ITEM);
            }
            ContactKind::Door => self.nearby_door = Some(other),
            ContactKind::Coin => {
                let picked = actors.coin_mut(other).is_some_and(|coin| coin.pick_up(ctx, self));
                if picked {
                    self.score += self.tuning.coin_value;
                    self.hud.update_field(ctx, self.score);
                }
            }
            ContactKind::Powerup => {
                let picked = actors.powerup_mut(other).is_some_and(|p| p.pick_up(ctx, self));
                if picked {
                    self.jump_impulse = self.tuning.boosted_jump_impulse;
                    self.boost = Some(JumpBoost {
                        expires_at: ctx.clock.after(self.tuning.boost_duration),
                    });
                }
            }
            ContactKind::Terrain | ContactKind::Other => {}
        }
    }

    /// Set horizontal velocity from the held keys. Left is checked last and
    /// wins when both directions are held.
    fn move_horizontally(&mut self, ctx: &mut EngineContext, input: &InputState) -> &'static str {
        let running = input.is_held(keys::SHIFT);
        let (mut speed, mut clip) = (0.0, IDLE);

        if input.any_held(&[keys::D, keys::ARROW_RIGHT]) {
            (speed, clip) = if running {
                (self.tuning.run_speed, RUN)
            } else {
                (self.tuning.walk_speed, WALK)
            };
            self.facing_left = false;
        }
        if input.any_held(&[keys::A, keys::ARROW_LEFT]) {
            (speed, clip) = if running {
                (-self.tuning.run_speed, RUN)
            } else {
                (-self.tuning.walk_speed, WALK)
            };
            self.facing_left = true;
        }

        let vel = ctx.velocity(self.id);
        ctx.set_velocity(self.id, Vec2::new(speed, vel.y));
        clip
    }

    fn try_jump(&mut self, ctx: &mut EngineContext, input: &InputState) -> bool {
        if !input.was_pressed(keys::SPACE) || !self.is_grounded() {
            return false;
        }
        self.ground.clear();
        ctx.apply_impulse(self.id, Vec2::new(0.0, -self.jump_impulse));
        true
    }

    fn show(&self, ctx: &mut EngineContext, clip: &str) {
        let Some(entity) = ctx.world.get_mut(self.id) else {
            return;
        };
        if let Some(animation) = entity.animation.as_mut() {
            animation.play_if_different(clip);
        }
        if let Some(sprite) = entity.sprite.as_mut() {
            sprite.flip_x = self.facing_left;
        }
    }

    fn interact(&mut self, ctx: &mut EngineContext, input: &InputState, actors: &Actors) {
        if !input.was_pressed(keys::E) {
            return;
        }
        let Some(door_id) = self.nearby_door else {
            return;
        };

        if self.inventory.contains(KEY_ITEM) {
            ctx.despawn(door_id);
            self.nearby_door = None;
            log::info!("player: door opened");
            ctx.go_to_scene(LEVEL2);
        } else if let Some(door) = actors.door(door_id) {
            door.display_message(ctx, LOCKED_MESSAGE);
        }
    }

    fn check_in_view(&self, ctx: &mut EngineContext) {
        let Some(pos) = ctx.position(self.id) else {
            return;
        };
        if !ctx.camera.is_visible(pos) {
            log::info!("player: left the screen at {}", pos);
            ctx.go_to_scene(GAME_OVER);
        }
    }
}

impl Collector for Player {
    fn add_to_collection(&mut self, item: CollectedItem) {
        self.collection.push(item);
    }
}
