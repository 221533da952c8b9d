//! Game state and core simulation types
//!
//! All state for one play session lives here, owned by [`GameSession`].
//! The session aggregate is the only mutable root: the loop driver feeds it
//! input batches through [`crate::sim::tick`] and queries it for rendering.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::spawn;
use crate::consts::*;
use crate::highscores::ScoreLedger;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    /// Fresh session, waiting for the first jump input to begin
    AwaitingStart,
    /// Active gameplay
    Playing,
    /// Run suspended; simulation time does not advance
    Paused,
    /// Run ended on a collision, waiting for a jump input to restart
    AwaitingRestart,
    /// Showing the ranked score history
    ScoreBoard,
}

/// The runner the player controls
///
/// Horizontal position is fixed; the world scrolls instead. Only the
/// vertical axis integrates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterBody {
    pub rect: Rect,
    pub vertical_velocity: f32,
    pub grounded: bool,
}

impl CharacterBody {
    pub fn new() -> Self {
        Self {
            rect: Rect::new(
                CHARACTER_X,
                GROUND_Y - CHARACTER_SIZE,
                CHARACTER_SIZE,
                CHARACTER_SIZE,
            ),
            vertical_velocity: 0.0,
            grounded: true,
        }
    }

    /// Reinitialize in place for a new run
    pub fn reset(&mut self) {
        self.rect.pos.y = GROUND_Y - CHARACTER_SIZE;
        self.vertical_velocity = 0.0;
        self.grounded = true;
    }

    /// Apply one tick of gravity and vertical motion.
    ///
    /// The bottom edge never passes the ground line: on contact it is
    /// clamped there, velocity zeroes, and the body is grounded again.
    pub fn integrate(&mut self, gravity: f32) {
        self.vertical_velocity += gravity;
        self.rect.pos.y += self.vertical_velocity;

        if self.rect.bottom() >= GROUND_Y {
            self.rect.set_bottom(GROUND_Y);
            self.vertical_velocity = 0.0;
            self.grounded = true;
        } else {
            self.grounded = false;
        }
    }

    /// Launch upward. No-op while airborne.
    pub fn jump(&mut self, impulse: f32) {
        if self.grounded {
            self.vertical_velocity = impulse;
            self.grounded = false;
        }
    }

    /// Sharpen the descent. No-op while grounded.
    ///
    /// Repeated presses mid-air stack without a cap; an aggressive player
    /// can slam down arbitrarily fast.
    pub fn fast_fall(&mut self, boost: f32) {
        if !self.grounded {
            self.vertical_velocity += boost;
        }
    }
}

impl Default for CharacterBody {
    fn default() -> Self {
        Self::new()
    }
}

/// A single ground obstacle scrolling toward the character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub rect: Rect,
}

impl Obstacle {
    /// Create an obstacle with its bottom edge on the ground line
    pub fn new(x: f32) -> Self {
        Self {
            rect: Rect::new(
                x,
                GROUND_Y - OBSTACLE_HEIGHT,
                OBSTACLE_WIDTH,
                OBSTACLE_HEIGHT,
            ),
        }
    }

    /// Live obstacles still matter for collision and rendering
    #[inline]
    pub fn is_live(&self) -> bool {
        self.rect.pos.x > -OBSTACLE_WIDTH
    }
}

/// The ordered stream of obstacles, left-to-right in world order
///
/// Insertion order is spawn order; all obstacles move at the same world
/// velocity, so the order never changes after creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObstacleStream {
    obstacles: Vec<Obstacle>,
}

impl ObstacleStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shift every obstacle left by the current world velocity
    pub fn advance(&mut self, world_velocity: f32) {
        for obstacle in &mut self.obstacles {
            obstacle.rect.pos.x -= world_velocity;
        }
    }

    /// Drop obstacles that have fully left the screen, preserving order
    pub fn prune(&mut self) {
        self.obstacles.retain(|o| o.is_live());
    }

    /// x position of the rightmost (most recently spawned) obstacle
    pub fn rightmost_x(&self) -> Option<f32> {
        self.obstacles.last().map(|o| o.rect.pos.x)
    }

    pub fn push(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    /// Empty the stream, keeping its allocation for the next run
    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }
}

/// Complete play-session state
///
/// Owns the character, the obstacle stream, the seeded RNG, and the score
/// ledger. Restarting a run resets entities in place; nothing is
/// reconstructed, so allocations survive across restarts.
#[derive(Debug)]
pub struct GameSession {
    /// Session seed; the same seed replays the same obstacle course
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub(crate) tuning: Tuning,
    pub phase: RunPhase,
    /// Phase the scoreboard was opened from, so it can return there
    pub(crate) scoreboard_from: RunPhase,
    pub character: CharacterBody,
    pub obstacles: ObstacleStream,
    pub world_velocity: f32,
    /// Ticks simulated in the current run
    pub time_ticks: u64,
    pub ledger: ScoreLedger,
}

impl GameSession {
    /// Create a new session with the given seed and balance values
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            world_velocity: tuning.initial_velocity,
            tuning,
            phase: RunPhase::AwaitingStart,
            scoreboard_from: RunPhase::AwaitingStart,
            character: CharacterBody::new(),
            obstacles: ObstacleStream::new(),
            time_ticks: 0,
            ledger: ScoreLedger::new(),
        }
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Begin a fresh run (the AwaitingStart/AwaitingRestart -> Playing
    /// transition): reset entities in place, reseed the initial obstacle
    /// batch, and zero the live score.
    pub fn start_run(&mut self) {
        self.character.reset();
        self.obstacles.clear();
        spawn::spawn_batch(
            &mut self.obstacles,
            &mut self.rng,
            &self.tuning.spawn,
            INITIAL_OBSTACLES,
        );
        self.world_velocity = self.tuning.initial_velocity;
        self.time_ticks = 0;
        self.ledger.reset_live();
        self.phase = RunPhase::Playing;
        log::info!("run started (seed {})", self.seed);
    }

    /// Live score, truncated for display
    pub fn display_score(&self) -> u64 {
        self.ledger.live_score()
    }

    /// The n best committed scores, descending
    pub fn top_scores(&self, n: usize) -> Vec<u64> {
        self.ledger.top_n(n)
    }

    /// Character rectangle for the presentation layer
    pub fn character_rect(&self) -> Rect {
        self.character.rect
    }

    /// Obstacle rectangles for the presentation layer
    pub fn obstacle_rects(&self) -> Vec<Rect> {
        self.obstacles.iter().map(|o| o.rect).collect()
    }

    /// Tear the session down on Quit, releasing the ledger's store.
    pub fn shutdown(mut self) {
        self.ledger.close();
        log::info!("session shut down");
    }
}
