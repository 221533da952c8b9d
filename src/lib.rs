//! Sidehill - a side-scrolling obstacle-run arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacle stream, game state)
//! - `highscores`: Session-scoped ranked score history
//! - `tuning`: Data-driven game balance

pub mod highscores;
pub mod sim;
pub mod tuning;

pub use highscores::ScoreLedger;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, matches the presentation frame rate)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Ticks per second
    pub const TICK_RATE: u32 = 60;

    /// World dimensions (screen coordinates, +y down)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 400.0;
    /// Ground line the character runs on
    pub const GROUND_Y: f32 = SCREEN_HEIGHT - 60.0;

    /// Character defaults
    pub const CHARACTER_X: f32 = 50.0;
    pub const CHARACTER_SIZE: f32 = 40.0;

    /// Obstacle defaults - bottom edge rests on the ground line
    pub const OBSTACLE_WIDTH: f32 = 20.0;
    pub const OBSTACLE_HEIGHT: f32 = 40.0;
    /// Horizontal clearance from the right edge that triggers new spawns
    pub const SPAWN_MARGIN: f32 = 150.0;
    /// Obstacles seeded into the stream on each (re)start
    pub const INITIAL_OBSTACLES: u32 = 3;

    /// Physics (per-tick at `TICK_RATE`)
    pub const GRAVITY: f32 = 0.8;
    pub const JUMP_IMPULSE: f32 = -15.0;
    /// Added to vertical velocity per fast-fall press; stacks without cap
    pub const FAST_FALL_BOOST: f32 = 8.0;

    /// World scroll speed
    pub const INITIAL_VELOCITY: f32 = 5.0;
    pub const VELOCITY_RAMP: f32 = 0.0005;

    /// Score accrued per tick is this constant times the world velocity
    pub const SCORE_INCREMENT: f32 = 0.1;
}
