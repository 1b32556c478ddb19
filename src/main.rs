//! Slingshot headless demo
//!
//! Plays through the level set at the reference tick rate without a window:
//! one seeded pseudo-random throw per level, outcome logged.
//!
//! Usage: `slingshot [seed] [levels]` (set `RUST_LOG=debug` for per-hit logs)

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use slingshot::consts::{SIM_DT, TICK_RATE};
use slingshot::sim::{GameEvent, Session, TickInput, tick};

/// Give up on a throw after this many ticks
const MAX_TICKS_PER_LEVEL: u32 = 20 * TICK_RATE;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse::<u64>().ok()).unwrap_or(42);
    let rounds = args.next().and_then(|s| s.parse::<usize>().ok()).unwrap_or(2);

    log::info!("Slingshot demo starting (seed {}, {} levels)", seed, rounds);

    let mut rng = Pcg32::seed_from_u64(seed);
    let mut state = Session::default();
    let mut total = 0;

    for round in 0..rounds {
        if round > 0 {
            tick(
                &mut state,
                &TickInput {
                    next_level: true,
                    ..Default::default()
                },
            );
        }
        total += play_level(&mut state, &mut rng);
    }

    log::info!("Demo finished, total score {}", total);
}

/// Throw once and run until everything settles. Returns the level score.
fn play_level(state: &mut Session, rng: &mut Pcg32) -> u32 {
    let grab = state.projectile().start;
    // Pull back and down so the throw goes up and to the right
    let pull = Vec2::new(rng.random_range(60.0..150.0), rng.random_range(20.0..120.0));
    let release = Vec2::new(grab.x - pull.x, grab.y + pull.y);

    tick(
        state,
        &TickInput {
            drag_start: Some(grab),
            ..Default::default()
        },
    );
    tick(
        state,
        &TickInput {
            drag_release: Some(release),
            ..Default::default()
        },
    );

    let ground = state.ground_line() as f32;
    let idle = TickInput::default();
    let mut ticks = 0;
    let mut complete = false;
    while ticks < MAX_TICKS_PER_LEVEL {
        tick(state, &idle);
        ticks += 1;

        for event in state.drain_events() {
            match event {
                GameEvent::TargetScored { id, points } => {
                    log::info!("  target {} knocked (+{})", id, points)
                }
                GameEvent::LevelCompleted { .. } => complete = true,
                _ => {}
            }
        }

        if state.projectile().is_at_rest(ground) && complete {
            break;
        }
    }

    log::info!(
        "Level {}: score {}, {} after {:.1}s",
        state.level_index() + 1,
        state.score(),
        if state.is_level_complete() {
            "complete"
        } else {
            "targets still standing"
        },
        ticks as f32 * SIM_DT,
    );
    state.score()
}
