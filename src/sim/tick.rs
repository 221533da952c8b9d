//! Fixed timestep simulation tick
//!
//! One call per externally paced frame. Input events are resolved first
//! (they only move the state machine and issue character commands); the
//! physics / spawn / score / collision pipeline then runs iff the session
//! is Playing. Every other phase is inert: obstacles, score, and the
//! difficulty ramp all stand still.

use super::collision;
use super::spawn;
use super::state::{GameSession, RunPhase};

/// Input commands for a single tick
///
/// One-shot flags; the loop driver clears them after each processed tick.
/// Quit is not a tick input: the driver consumes the session via
/// [`GameSession::shutdown`] instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Jump, and start/restart from the waiting phases (space)
    pub jump: bool,
    /// Fast-fall while airborne (down arrow)
    pub fast_fall: bool,
    /// Pause toggle (enter)
    pub pause: bool,
    /// Scoreboard toggle (tab)
    pub scoreboard: bool,
}

/// Advance the session by one fixed timestep
pub fn tick(session: &mut GameSession, input: &TickInput) {
    // Scoreboard overlays the inert phases only; Playing ignores the key
    if input.scoreboard {
        match session.phase {
            RunPhase::AwaitingStart | RunPhase::Paused | RunPhase::AwaitingRestart => {
                session.scoreboard_from = session.phase;
                session.phase = RunPhase::ScoreBoard;
                return;
            }
            RunPhase::ScoreBoard => {
                session.phase = session.scoreboard_from;
                return;
            }
            RunPhase::Playing => {}
        }
    }

    if input.pause {
        match session.phase {
            RunPhase::Playing => {
                session.phase = RunPhase::Paused;
                log::info!("paused at tick {}", session.time_ticks);
                return;
            }
            RunPhase::Paused => {
                session.phase = RunPhase::Playing;
            }
            _ => {}
        }
    }

    if input.jump {
        match session.phase {
            RunPhase::AwaitingStart | RunPhase::AwaitingRestart => session.start_run(),
            RunPhase::Playing => {
                let impulse = session.tuning.jump_impulse;
                session.character.jump(impulse);
            }
            _ => {}
        }
    }

    if input.fast_fall && session.phase == RunPhase::Playing {
        let boost = session.tuning.fast_fall_boost;
        session.character.fast_fall(boost);
    }

    if session.phase != RunPhase::Playing {
        return;
    }

    session.time_ticks += 1;

    // Physics, then the obstacle stream: advance -> prune -> top up
    session.character.integrate(session.tuning.gravity);
    session.obstacles.advance(session.world_velocity);
    session.obstacles.prune();
    let spawned = spawn::maybe_spawn(&mut session.obstacles, &mut session.rng, &session.tuning.spawn);
    if spawned > 0 {
        log::debug!("spawned {spawned} obstacles at tick {}", session.time_ticks);
    }

    // Score and difficulty accrue every Playing tick
    session
        .ledger
        .accrue(session.tuning.score_increment * session.world_velocity);
    session.world_velocity += session.tuning.velocity_ramp;

    // Collision ends the run with the score as of this tick
    if collision::collides(&session.character, &session.obstacles) {
        session.ledger.commit();
        session.phase = RunPhase::AwaitingRestart;
        log::info!(
            "game over at tick {} (velocity {:.2})",
            session.time_ticks,
            session.world_velocity
        );
    }
}
