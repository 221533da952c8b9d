//! Procedural obstacle spawning
//!
//! New obstacles appear off the right edge whenever the stream runs low,
//! spaced by bounded random gaps so the course is fair at any world
//! velocity: the trigger margin guarantees nothing materializes on top of
//! the character, and the spacing bounds guarantee the stream never runs
//! dry.
//!
//! The spacing bounds and batch sizes are one fixed policy for the whole
//! session, injected at construction.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::state::{Obstacle, ObstacleStream};
use crate::consts::*;

/// Spacing and batch-size policy for the spawner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnPolicy {
    /// Minimum gap between consecutive obstacles (pixels)
    pub min_spacing: u32,
    /// Maximum gap between consecutive obstacles (pixels)
    pub max_spacing: u32,
    /// Batch sizes the spawner picks from on each trigger
    pub batch_choices: Vec<u32>,
}

impl Default for SpawnPolicy {
    fn default() -> Self {
        Self {
            min_spacing: 300,
            max_spacing: 600,
            batch_choices: vec![1, 2, 3],
        }
    }
}

impl SpawnPolicy {
    fn sample_spacing(&self, rng: &mut Pcg32) -> f32 {
        rng.random_range(self.min_spacing..=self.max_spacing) as f32
    }

    fn sample_batch(&self, rng: &mut Pcg32) -> u32 {
        match self.batch_choices.len() {
            0 => 1,
            1 => self.batch_choices[0],
            n => self.batch_choices[rng.random_range(0..n)],
        }
    }
}

/// Top up the stream if it is empty or its rightmost obstacle has crossed
/// the spawn margin. Returns the number of obstacles appended.
pub fn maybe_spawn(stream: &mut ObstacleStream, rng: &mut Pcg32, policy: &SpawnPolicy) -> u32 {
    let triggered = stream
        .rightmost_x()
        .is_none_or(|x| x < SCREEN_WIDTH - SPAWN_MARGIN);
    if !triggered {
        return 0;
    }

    let count = policy.sample_batch(rng);
    spawn_batch(stream, rng, policy, count);
    count
}

/// Append `count` obstacles beyond the right screen edge.
///
/// Offsets accumulate from the rightmost obstacle's position (zero for an
/// empty stream), each plus a sampled spacing, so the batch lands in
/// strictly increasing x order.
pub fn spawn_batch(stream: &mut ObstacleStream, rng: &mut Pcg32, policy: &SpawnPolicy, count: u32) {
    let mut last_x = stream.rightmost_x().unwrap_or(0.0);
    for _ in 0..count {
        let spacing = policy.sample_spacing(rng);
        stream.push(Obstacle::new(SCREEN_WIDTH + last_x + spacing));
        last_x += spacing;
    }
}
