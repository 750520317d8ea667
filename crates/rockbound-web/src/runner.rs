use rockbound_engine::{
    build_render_buffer, EngineContext, FixedTimestep, Game, GameConfig, InputEvent, InputQueue,
    InputState, RenderBuffer,
};

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game keeps one runner in a `thread_local!` and exports free
/// functions via `#[wasm_bindgen]` (see `export_game!`), because
/// wasm-bindgen cannot export generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    queue: InputQueue,
    input: InputState,
    render_buffer: RenderBuffer,
    timestep: FixedTimestep,
    config: GameConfig,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        Self {
            game,
            ctx: EngineContext::new(config.clone()),
            queue: InputQueue::new(),
            input: InputState::new(),
            render_buffer: RenderBuffer::with_capacity(config.max_instances),
            timestep: FixedTimestep::new(config.fixed_dt),
            config,
            initialized: false,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.initialized = true;
        self.rebuild_render_buffer();
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.queue.push(event);
    }

    /// Run one browser frame: as many fixed steps as `dt` covers, each one
    /// game update, physics, then clock/animation/tween advance.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();
        self.input.apply(&self.queue.drain());

        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.game.update(&mut self.ctx, &self.input);
            self.ctx.step_physics();
            self.ctx.advance(self.timestep.dt());
            self.input.end_step();
        }

        self.rebuild_render_buffer();
    }

    fn rebuild_render_buffer(&mut self) {
        build_render_buffer(self.ctx.world.iter(), &mut self.render_buffer);
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    // ---- Accessors for the TypeScript side ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    /// Messages raised since the last call.
    pub fn take_messages(&mut self) -> Vec<String> {
        std::mem::take(&mut self.ctx.messages)
    }

    pub fn camera_x(&self) -> f32 {
        self.ctx.camera.center.x
    }

    pub fn camera_y(&self) -> f32 {
        self.ctx.camera.center.y
    }

    pub fn camera_zoom(&self) -> f32 {
        self.ctx.camera.zoom()
    }

    pub fn active_scene(&self) -> String {
        self.game.active_scene().unwrap_or_default().to_string()
    }

    pub fn viewport_width(&self) -> f32 {
        self.config.viewport_width
    }

    pub fn viewport_height(&self) -> f32 {
        self.config.viewport_height
    }

    pub fn max_instances(&self) -> u32 {
        self.config.max_instances as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rockbound_engine::{keys, Entity, GameEvent, SpriteComponent};

    /// Counts steps and Space presses; spawns one sprite.
    #[derive(Default)]
    struct Probe {
        steps: u32,
        jumps: u32,
    }

    impl Game for Probe {
        fn init(&mut self, ctx: &mut EngineContext) {
            let id = ctx.next_id();
            ctx.spawn(Entity::new(id).with_sprite(SpriteComponent::default()));
        }

        fn update(&mut self, ctx: &mut EngineContext, input: &InputState) {
            self.steps += 1;
            if input.was_pressed(keys::SPACE) {
                self.jumps += 1;
                ctx.emit_event(GameEvent::value(1.0, self.jumps as f32));
            }
        }
    }

    #[test]
    fn tick_before_init_does_nothing() {
        let mut runner = GameRunner::new(Probe::default());
        runner.tick(1.0 / 60.0);
        assert_eq!(runner.game().steps, 0);
    }

    #[test]
    fn init_builds_render_buffer() {
        let mut runner = GameRunner::new(Probe::default());
        runner.init();
        assert_eq!(runner.instance_count(), 1);
    }

    #[test]
    fn press_is_seen_by_one_step_only() {
        let mut runner = GameRunner::new(Probe::default());
        runner.init();
        runner.push_input(InputEvent::KeyDown { key_code: keys::SPACE });
        // Three fixed steps in one frame.
        runner.tick(3.0 / 60.0 + 0.001);

        assert_eq!(runner.game().steps, 3);
        assert_eq!(runner.game().jumps, 1);
        assert_eq!(runner.game_events_len(), 1);
    }

    #[test]
    fn press_waits_for_a_step() {
        let mut runner = GameRunner::new(Probe::default());
        runner.init();
        runner.push_input(InputEvent::KeyDown { key_code: keys::SPACE });
        runner.tick(0.001);
        assert_eq!(runner.game().jumps, 0);

        runner.tick(1.0 / 60.0);
        assert_eq!(runner.game().jumps, 1);
    }
}
