//! Sidehill entry point
//!
//! Headless demo driver: runs the simulation at its fixed timestep with a
//! scripted auto-jumping player, then reports the score board. A real
//! presentation layer would poll a keyboard and draw the rects this loop
//! only logs.

use std::path::Path;

use sidehill::Tuning;
use sidehill::sim::{GameSession, RunPhase, TickInput, tick};

/// Demo runs to play before quitting
const DEMO_RUNS: u32 = 3;
/// Hard tick cap so a lucky demo player cannot run forever
const DEMO_TICK_CAP: u32 = 60_000;

/// Scripted player: start/restart when waiting, jump when the next
/// obstacle gets close.
fn demo_input(session: &GameSession) -> TickInput {
    let mut input = TickInput::default();
    match session.phase {
        RunPhase::AwaitingStart | RunPhase::AwaitingRestart => input.jump = true,
        RunPhase::Playing => {
            let lead = session.world_velocity * 20.0;
            let near = session.obstacles.iter().any(|o| {
                let gap = o.rect.left() - session.character.rect.right();
                gap > 0.0 && gap < lead
            });
            if near && session.character.grounded {
                input.jump = true;
            }
        }
        _ => {}
    }
    input
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(rand::random::<u64>);
    let tuning = match std::env::var_os("SIDEHILL_TUNING") {
        Some(path) => Tuning::load(Path::new(&path)),
        None => Tuning::default(),
    };

    log::info!("Sidehill (headless) starting with seed {seed}");
    let mut session = GameSession::new(seed, tuning);

    let mut runs = 0;
    for _ in 0..DEMO_TICK_CAP {
        let input = demo_input(&session);
        let was_playing = session.phase == RunPhase::Playing;
        tick(&mut session, &input);

        if was_playing && session.phase == RunPhase::AwaitingRestart {
            runs += 1;
            log::info!("demo run {runs} ended after {} ticks", session.time_ticks);
            if runs >= DEMO_RUNS {
                break;
            }
        }
    }

    println!("Top scores after {runs} runs (seed {seed}):");
    for (rank, score) in session.top_scores(DEMO_RUNS as usize).iter().enumerate() {
        println!("  {}. {score}", rank + 1);
    }

    session.shutdown();
}
