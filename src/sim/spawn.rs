//! Ball spawning
//!
//! New balls drop in from just above the canvas top with randomized size,
//! horizontal position, drift, and kind. All randomness draws from the
//! state-owned seeded RNG.

use glam::Vec2;
use rand::Rng;

use super::state::{Ball, BallKind, GameState};

/// Create one randomized ball and append it to the collection.
///
/// Radius is uniform in [min, max); x keeps the whole ball inside the side
/// walls; y starts at -radius (fully off-screen); each velocity component
/// is uniform in [-h, h); kind is a uniform pick over the 4 variants.
pub fn spawn_ball(state: &mut GameState) {
    let t = &state.tuning;
    let radius = state.rng.random_range(t.ball_radius_min..t.ball_radius_max);
    let x = state.rng.random_range(radius..t.canvas_width - radius);
    let h = t.ball_start_speed_half_range;
    let vel = Vec2::new(
        state.rng.random_range(-h..h),
        state.rng.random_range(-h..h),
    );
    let kind = BallKind::ALL[state.rng.random_range(0..BallKind::ALL.len())];

    state
        .balls
        .push(Ball::new(Vec2::new(x, -radius), vel, radius, kind));
}

/// Spawn the initial batch (startup and restart)
pub fn seed_initial(state: &mut GameState) {
    for _ in 0..state.tuning.initial_ball_count {
        spawn_ball(state);
    }
}

/// Timed spawn check, run every frame.
///
/// Fires when more than the spawn interval has elapsed since the timestamp
/// captured at the previous spawn. This is not a fixed-rate scheduler: a
/// stalled host produces one spawn on resume, not a backlog.
pub fn maybe_spawn(state: &mut GameState, now_ms: u64) {
    if now_ms.saturating_sub(state.last_spawn_ms) > state.tuning.spawn_interval_ms {
        spawn_ball(state);
        state.last_spawn_ms = now_ms;
    }
}
