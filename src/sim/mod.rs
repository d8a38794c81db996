//! Simulation core
//!
//! All gameplay logic lives here. This module is pure and host-agnostic:
//! - Single-threaded, cooperative: one tick per rendered frame
//! - Seeded RNG only; no clocks (the host supplies timestamps)
//! - No rendering or platform dependencies - the host draws from the
//!   render views and listens on the event sink

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{paddle_overlaps, reflect_walls, resolve_pair};
pub use spawn::{maybe_spawn, spawn_ball};
pub use state::{
    Ball, BallKind, BallView, EventSink, GameEvent, GameState, Paddle, PaddleDirection, PaddleView,
};
pub use tick::{TickInput, tick};
