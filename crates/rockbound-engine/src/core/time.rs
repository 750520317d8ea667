/// Fixed timestep accumulator.
/// Game logic and physics advance in equal steps regardless of frame time.
pub struct FixedTimestep {
    dt: f32,
    accumulator: f32,
}

/// Upper bound on steps per frame, so a long stall does not snowball.
const MAX_STEPS_PER_FRAME: f32 = 10.0;

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator = (self.accumulator + frame_dt).min(self.dt * MAX_STEPS_PER_FRAME);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }
}

/// Scene clock: simulated seconds since the scene started.
/// Delayed effects compare against `now()` instead of scheduling callbacks.
#[derive(Debug, Clone, Copy, Default)]
pub struct Clock {
    elapsed: f64,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt as f64;
    }

    pub fn now(&self) -> f64 {
        self.elapsed
    }

    /// Time `seconds` from now.
    pub fn after(&self, seconds: f32) -> f64 {
        self.elapsed + seconds as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_step_exact() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.accumulate(1.0 / 60.0), 1);
    }

    #[test]
    fn accumulates_partial_frames() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.accumulate(0.008), 0);
        assert_eq!(ts.accumulate(0.010), 1);
    }

    #[test]
    fn caps_at_ten_steps() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.accumulate(1.0), 10);
    }

    #[test]
    fn clock_deadlines() {
        let mut clock = Clock::new();
        let deadline = clock.after(5.0);
        clock.advance(2.5);
        clock.advance(2.5);
        assert!(clock.now() >= deadline);
    }
}
