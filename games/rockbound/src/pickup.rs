//! Coins and powerups: passive sensors collected on touch.
//!
//! Collecting latches once. The pickup then fades out over
//! `PICKUP_FADE_SECS` and removes itself; contacts that arrive during the
//! fade are ignored.

use glam::Vec2;
use rockbound_engine::{BodyDesc, ColliderDesc, EngineContext, Entity, EntityId, SpriteComponent, Tween};

use crate::contact;

pub const PICKUP_FADE_SECS: f32 = 0.2;

const PICKUP_SIZE: f32 = 30.0;
const ITEM_ROW: f32 = 3.0;
const COIN_COL: f32 = 0.0;
const POWERUP_COL: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Coin,
    Powerup,
}

/// Entry in a player's collection list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectedItem {
    pub id: EntityId,
    pub kind: ItemKind,
}

/// Anything that keeps the items it picks up.
///
/// This per-scene list is separate from the persistent `InventoryStore`,
/// which only ever holds door keys.
pub trait Collector {
    fn add_to_collection(&mut self, item: CollectedItem);
}

impl Collector for Vec<CollectedItem> {
    fn add_to_collection(&mut self, item: CollectedItem) {
        self.push(item);
    }
}

#[derive(Debug)]
struct Collectible {
    id: EntityId,
    kind: ItemKind,
    collected: bool,
}

impl Collectible {
    fn spawn(ctx: &mut EngineContext, pos: Vec2, kind: ItemKind) -> Self {
        let (tag, col) = match kind {
            ItemKind::Coin => (contact::COIN, COIN_COL),
            ItemKind::Powerup => (contact::POWERUP, POWERUP_COL),
        };
        let id = ctx.next_id();
        let entity = Entity::new(id)
            .with_tag(tag)
            .with_scale(Vec2::splat(PICKUP_SIZE))
            .with_z(5)
            .with_sprite(SpriteComponent::cell(col, ITEM_ROW));
        let desc = BodyDesc::passive(ColliderDesc::Ball { radius: PICKUP_SIZE / 2.0 }).with_position(pos);
        ctx.spawn_with_body(entity, desc);

        Self {
            id,
            kind,
            collected: false,
        }
    }

    fn collect<C: Collector + ?Sized>(&mut self, ctx: &mut EngineContext, collector: &mut C) -> bool {
        if self.collected {
            return false;
        }
        self.collected = true;
        ctx.tweens.add(self.id, Tween::fade_out(PICKUP_FADE_SECS).then_despawn());
        collector.add_to_collection(CollectedItem {
            id: self.id,
            kind: self.kind,
        });
        log::info!("picked up {:?} {:?}", self.kind, self.id);
        true
    }
}

#[derive(Debug)]
pub struct Coin(Collectible);

impl Coin {
    pub fn spawn(ctx: &mut EngineContext, pos: Vec2) -> Self {
        Self(Collectible::spawn(ctx, pos, ItemKind::Coin))
    }

    pub fn id(&self) -> EntityId {
        self.0.id
    }

    pub fn is_collected(&self) -> bool {
        self.0.collected
    }

    /// Returns `true` only for the call that actually collected the coin.
    pub fn pick_up<C: Collector + ?Sized>(&mut self, ctx: &mut EngineContext, collector: &mut C) -> bool {
        self.0.collect(ctx, collector)
    }
}

#[derive(Debug)]
pub struct Powerup(Collectible);

impl Powerup {
    pub fn spawn(ctx: &mut EngineContext, pos: Vec2) -> Self {
        Self(Collectible::spawn(ctx, pos, ItemKind::Powerup))
    }

    pub fn id(&self) -> EntityId {
        self.0.id
    }

    pub fn is_collected(&self) -> bool {
        self.0.collected
    }

    pub fn pick_up<C: Collector + ?Sized>(&mut self, ctx: &mut EngineContext, collector: &mut C) -> bool {
        self.0.collect(ctx, collector)
    }
}
