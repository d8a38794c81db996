//! Ball Rain headless demo
//!
//! Runs the simulation without a renderer: a small autopilot steers the
//! paddle, an event sink logs every tally change, and the final state
//! prints at the end.
//!
//! Usage: `ball-rain [seed] [frames]` (defaults: seed 0, 3600 frames at a
//! synthesized 16 ms per frame).

use ball_rain::settings::Tuning;
use ball_rain::sim::{BallKind, EventSink, GameState, PaddleDirection, TickInput, tick};

/// Event sink that narrates the run through the log facade
struct LoggingSink;

impl EventSink for LoggingSink {
    fn on_score_changed(&mut self, score: u32) {
        log::info!("score: {score}");
    }

    fn on_coins_changed(&mut self, coins: u32) {
        log::info!("coins: {coins}");
    }

    fn on_life_lost(&mut self, remaining: u32) {
        log::warn!("life lost, {remaining} remaining");
    }

    fn on_game_over(&mut self, score: u32, coins: u32) {
        log::warn!("game over - score {score}, coins {coins}");
    }
}

/// Steer toward the lowest falling ball worth catching, away from
/// dangerous ones already over the paddle
fn autopilot(state: &GameState) -> PaddleDirection {
    let paddle_center = state.paddle.x + state.paddle.width / 2.0;

    let target = state
        .balls
        .iter()
        .filter(|b| b.active && b.kind != BallKind::Dangerous && b.vel.y > 0.0)
        .filter(|b| b.bottom() <= state.paddle.y)
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y));

    match target {
        Some(ball) if ball.pos.x < paddle_center - 4.0 => PaddleDirection::Left,
        Some(ball) if ball.pos.x > paddle_center + 4.0 => PaddleDirection::Right,
        Some(_) => PaddleDirection::None,
        // Nothing worth chasing: dodge toward whichever side is clear
        None => {
            let danger = state.balls.iter().any(|b| {
                b.active
                    && b.kind == BallKind::Dangerous
                    && b.pos.x > state.paddle.x
                    && b.pos.x < state.paddle.x + state.paddle.width
            });
            if danger {
                if paddle_center < state.tuning.canvas_width / 2.0 {
                    PaddleDirection::Right
                } else {
                    PaddleDirection::Left
                }
            } else {
                PaddleDirection::None
            }
        }
    }
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(0);
    let frames: u64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(3600);

    let tuning = Tuning::load(std::path::Path::new("tuning.json"));
    let mut state = GameState::new(seed, tuning);
    let mut sink = LoggingSink;

    log::info!("Ball Rain demo starting (seed {seed}, {frames} frames)");

    for frame in 0..frames {
        let input = TickInput {
            now_ms: frame * 16,
            direction: Some(autopilot(&state)),
            restart: false,
        };
        tick(&mut state, &input, &mut sink);

        if state.game_over {
            log::info!("run ended after {frame} frames");
            break;
        }
    }

    println!(
        "final: score {} | coins {} | lives {} | balls in play {}",
        state.score,
        state.coins,
        state.lives,
        state.ball_views().count()
    );
}
