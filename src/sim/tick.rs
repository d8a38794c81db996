//! Per-frame simulation driver
//!
//! One [`tick`] advances the world by one rendered frame: paddle motion,
//! the timed spawn check, then the ordered physics step for every live
//! ball. The host calls this once per display refresh and keeps calling it
//! after game over so a restart can resume cleanly.

use super::collision;
use super::spawn;
use super::state::{EventSink, GameState, PaddleDirection};

/// Host input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Host timestamp in milliseconds, drives the spawn cadence. The core
    /// never reads a clock itself.
    pub now_ms: u64,
    /// Paddle steering for this frame. `None` leaves whatever the last
    /// [`GameState::set_paddle_direction`] command set.
    pub direction: Option<PaddleDirection>,
    /// Restart the run before anything else this tick
    pub restart: bool,
}

/// Advance the simulation by one frame
pub fn tick(state: &mut GameState, input: &TickInput, events: &mut dyn EventSink) {
    // Restarts apply atomically at the top of the tick, never mid-frame
    if input.restart || state.restart_pending {
        state.restart(events);
        log::info!("run restarted (seed {})", state.seed);
    }

    // Frozen after game over; the host keeps scheduling frames but
    // gameplay waits for a restart
    if state.game_over {
        return;
    }

    if let Some(direction) = input.direction {
        state.paddle.steer(direction);
    }
    let canvas_width = state.tuning.canvas_width;
    state.paddle.update(canvas_width);

    spawn::maybe_spawn(state, input.now_ms);

    // One in-place pass over the live collection. A ball stepped later in
    // the pass sees the already-mutated state of earlier ones, so iteration
    // order shapes exact trajectories. That order dependence is an accepted
    // approximation; double-buffering would change observable behavior.
    // The pass also keeps going if game over trips partway through.
    for index in 0..state.balls.len() {
        if state.balls[index].active {
            step_ball(state, index, events);
        }
    }

    // Compaction keeps memory bounded on long runs. Inactive balls are
    // already excluded from every stage, so purging them cannot change
    // trajectories, and insertion order of survivors is preserved.
    state.balls.retain(|b| b.active);
}

/// Ordered physics step for one live ball. Stages may end the step early
/// for this frame; a paddle bounce does not.
fn step_ball(state: &mut GameState, index: usize, events: &mut dyn EventSink) {
    let gravity = state.tuning.gravity;
    let friction = state.tuning.friction;
    let bounce = state.tuning.bounce;
    let damping = state.tuning.ball_damping;
    let canvas_width = state.tuning.canvas_width;
    let canvas_height = state.tuning.canvas_height;

    // Integrate forces
    {
        let ball = &mut state.balls[index];
        ball.vel.y += gravity;
        ball.vel *= friction;
    }

    // Paddle contact
    if collision::paddle_overlaps(&state.balls[index], &state.paddle) {
        let kind = state.balls[index].kind;
        if kind.is_dangerous() {
            state.lives = state.lives.saturating_sub(1);
            state.balls[index].active = false;
            events.on_life_lost(state.lives);
            state.check_game_over(events);
            return;
        }
        if kind.is_coin() {
            state.coins += kind.points();
            state.balls[index].active = false;
            events.on_coins_changed(state.coins);
            return;
        }
        // Normal/Special: reflect upward and score. The ball stays live
        // and still runs the remaining stages this same frame.
        let ball = &mut state.balls[index];
        ball.vel.y = -ball.vel.y.abs() * bounce;
        state.score += kind.points();
        events.on_score_changed(state.score);
    }

    // Floor. Non-coins drop out of play; a coin past the bottom edge stays
    // active but stops integrating, parked below the canvas where the
    // paddle span can still collect it. Preserved quirk, flagged for
    // product clarification in DESIGN.md.
    if state.balls[index].bottom() > canvas_height {
        if !state.balls[index].kind.is_coin() {
            state.balls[index].active = false;
            state.check_game_over(events);
        }
        return;
    }

    // Side and top walls
    collision::reflect_walls(&mut state.balls[index], canvas_width, bounce);

    // Pairwise collision against every other live ball, read and mutated
    // in the same pass
    let (before, rest) = state.balls.split_at_mut(index);
    if let Some((ball, after)) = rest.split_first_mut() {
        for other in before.iter_mut().chain(after.iter_mut()) {
            if !other.active {
                continue;
            }
            collision::resolve_pair(ball, other, damping);
        }
    }

    // Position integration
    let ball = &mut state.balls[index];
    ball.pos += ball.vel;
}
