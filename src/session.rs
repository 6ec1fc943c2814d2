//! Fixed-timestep scheduling
//!
//! Frames arrive at whatever rate the host manages; the simulation always
//! advances in `SIM_DT` ticks. `Session` is the single writer of the world
//! and hands out completed snapshots only.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::input::KeyState;
use crate::sim::{LevelError, WorldState, step, validate_level};

/// Frame-time accumulator that converts wall time into whole ticks
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FixedStep {
    accumulator: f32,
}

impl FixedStep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a frame's elapsed time and return how many ticks are due.
    ///
    /// Long frames (tab in background, debugger) are capped so the
    /// simulation never tries to catch up more than `MAX_SUBSTEPS` ticks.
    /// A non-finite delta counts as no time at all.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        if !frame_dt.is_finite() {
            log::warn!("Ignoring non-finite frame delta {frame_dt}");
            return 0;
        }
        let dt = frame_dt.clamp(0.0, MAX_FRAME_DT);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        substeps
    }

    /// Time carried over to the next frame (seconds)
    pub fn pending(&self) -> f32 {
        self.accumulator
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

/// A running game: world, held keys, and the tick clock
#[derive(Debug, Clone)]
pub struct Session {
    world: WorldState,
    keys: KeyState,
    clock: FixedStep,
    running: bool,
}

impl Session {
    /// Wrap an initial world. The session starts stopped.
    pub fn new(world: WorldState) -> Result<Self, LevelError> {
        validate_level(&world)?;
        Ok(Self {
            world,
            keys: KeyState::new(),
            clock: FixedStep::new(),
            running: false,
        })
    }

    pub fn start(&mut self) {
        if !self.running {
            log::info!("Session started at tick {}", self.world.tick);
            self.running = true;
        }
    }

    /// Stop issuing ticks. The current snapshot stays readable.
    pub fn stop(&mut self) {
        if self.running {
            log::info!(
                "Session stopped at tick {} (score {})",
                self.world.tick,
                self.world.score
            );
            self.running = false;
            self.clock.reset();
            self.keys.clear();
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn key_down(&mut self, name: &str) -> bool {
        self.keys.key_down(name)
    }

    pub fn key_up(&mut self, name: &str) -> bool {
        self.keys.key_up(name)
    }

    pub fn keys_mut(&mut self) -> &mut KeyState {
        &mut self.keys
    }

    /// Latest completed snapshot
    pub fn world(&self) -> &WorldState {
        &self.world
    }

    /// Run the ticks due for a frame of `frame_dt` seconds. Does nothing
    /// while stopped.
    pub fn frame(&mut self, frame_dt: f32) -> &WorldState {
        if !self.running {
            return &self.world;
        }
        let due = self.clock.advance(frame_dt);
        for _ in 0..due {
            self.advance();
        }
        &self.world
    }

    /// Run exactly one tick regardless of wall time or running state
    pub fn step_once(&mut self) -> &WorldState {
        self.advance();
        &self.world
    }

    fn advance(&mut self) {
        let next = step(&self.world, &self.keys.intent(), SIM_DT);
        if next.score != self.world.score {
            log::info!("Score: {} (tick {})", next.score, next.tick);
        }
        self.world = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::demo_level;
    use crate::tuning::Tuning;

    fn session() -> Session {
        Session::new(demo_level(Tuning::default())).unwrap()
    }

    #[test]
    fn test_fixed_step_counts_whole_ticks() {
        let mut clock = FixedStep::new();
        assert_eq!(clock.advance(SIM_DT * 0.5), 0);
        assert_eq!(clock.advance(SIM_DT * 0.5), 1);
        assert_eq!(clock.advance(SIM_DT * 3.5), 3);
        assert!(clock.pending() < SIM_DT);
    }

    #[test]
    fn test_fixed_step_caps_long_frames() {
        let mut clock = FixedStep::new();
        let due = clock.advance(5.0);
        assert!(due <= MAX_SUBSTEPS);
        assert!(clock.pending() < MAX_FRAME_DT);
    }

    #[test]
    fn test_fixed_step_ignores_non_finite_frames() {
        let mut clock = FixedStep::new();
        assert_eq!(clock.advance(f32::NAN), 0);
        assert_eq!(clock.advance(f32::INFINITY), 0);
        assert_eq!(clock.pending(), 0.0);
        assert_eq!(clock.advance(SIM_DT * 1.5), 1);
    }

    #[test]
    fn test_nan_frame_does_not_stall_session() {
        let mut s = session();
        s.start();
        s.frame(f32::NAN);
        for _ in 0..120 {
            s.frame(SIM_DT);
        }
        assert!(s.world().tick >= 119);
    }

    #[test]
    fn test_stopped_session_does_not_tick() {
        let mut s = session();
        assert_eq!(s.frame(0.06).tick, 0);

        s.start();
        assert_eq!(s.frame(0.06).tick, 3);

        s.stop();
        assert_eq!(s.frame(0.06).tick, 3);
        assert!(!s.is_running());
    }

    #[test]
    fn test_held_keys_drive_ticks() {
        let mut s = session();
        s.start();
        let x0 = s.world().player.pos.x;
        assert!(s.key_down("ArrowRight"));
        for _ in 0..10 {
            s.frame(SIM_DT);
        }
        assert!(s.world().player.pos.x > x0);
        assert!(!s.key_down("Tab"));
    }

    #[test]
    fn test_stop_releases_keys() {
        let mut s = session();
        s.start();
        s.key_down("ArrowLeft");
        s.stop();
        s.start();
        let before = s.world().player.vel.x;
        s.step_once();
        // No acceleration from the released key
        assert!(s.world().player.vel.x.abs() <= before.abs());
    }

    #[test]
    fn test_rejects_invalid_level() {
        let mut world = demo_level(Tuning::default());
        world.enemies[0].direction = 3;
        assert!(Session::new(world).is_err());
    }
}
