/// Player movement and pickup numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerTuning {
    /// Horizontal speed while walking (units/s).
    pub walk_speed: f32,
    /// Horizontal speed while Shift is held.
    pub run_speed: f32,
    /// Upward impulse of a normal jump.
    pub jump_impulse: f32,
    /// Upward impulse while a powerup is active.
    pub boosted_jump_impulse: f32,
    /// Powerup duration in seconds of scene clock.
    pub boost_duration: f32,
    pub coin_value: u32,
    pub starting_health: i32,
    /// Body mass; impulses above are scaled for it.
    pub mass: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            walk_speed: 200.0,
            run_speed: 300.0,
            jump_impulse: 5000.0,
            boosted_jump_impulse: 8000.0,
            boost_duration: 5.0,
            coin_value: 10,
            starting_health: 100,
            mass: 10.0,
        }
    }
}
