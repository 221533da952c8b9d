//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Single-threaded ownership, one mutation site per tick phase
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{collides, rects_overlap};
pub use rect::Rect;
pub use spawn::SpawnPolicy;
pub use state::{CharacterBody, GameSession, Obstacle, ObstacleStream, RunPhase};
pub use tick::{TickInput, tick};
