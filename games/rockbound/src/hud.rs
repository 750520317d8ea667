//! Score and health overlay.
//!
//! The overlay itself is drawn by the page; Rust publishes the values as
//! game events whenever they change.

use rockbound_engine::{EngineContext, GameEvent};

/// Game event kinds read by the page.
pub const EVENT_SCORE: f32 = 1.0;
pub const EVENT_HEALTH: f32 = 2.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Hud {
    score: u32,
    health: i32,
}

impl Hud {
    pub fn new(score: u32, health: i32) -> Self {
        Self { score, health }
    }

    /// Publish both fields so the overlay matches a freshly built scene.
    pub fn init(&self, ctx: &mut EngineContext) {
        ctx.emit_event(GameEvent::value(EVENT_SCORE, self.score as f32));
        ctx.emit_event(GameEvent::value(EVENT_HEALTH, self.health as f32));
    }

    pub fn update_field(&mut self, ctx: &mut EngineContext, score: u32) {
        self.score = score;
        ctx.emit_event(GameEvent::value(EVENT_SCORE, score as f32));
    }

    pub fn set_health(&mut self, ctx: &mut EngineContext, health: i32) {
        self.health = health;
        ctx.emit_event(GameEvent::value(EVENT_HEALTH, health as f32));
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn health(&self) -> i32 {
        self.health
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_publishes_both_fields() {
        let mut ctx = EngineContext::default();
        Hud::new(0, 100).init(&mut ctx);
        assert_eq!(
            ctx.events,
            vec![GameEvent::value(EVENT_SCORE, 0.0), GameEvent::value(EVENT_HEALTH, 100.0)]
        );
    }

    #[test]
    fn updates_emit_events() {
        let mut ctx = EngineContext::default();
        let mut hud = Hud::new(0, 100);
        hud.update_field(&mut ctx, 20);
        hud.set_health(&mut ctx, 80);

        assert_eq!(hud.score(), 20);
        assert_eq!(hud.health(), 80);
        assert_eq!(ctx.events.len(), 2);
        assert_eq!(ctx.events[0].a, 20.0);
        assert_eq!(ctx.events[1].kind, EVENT_HEALTH);
    }
}
