//! Ball Rain - a falling-ball paddle-catch arcade game
//!
//! Core modules:
//! - `sim`: Simulation core (entities, spawning, physics, tick driver)
//! - `settings`: Data-driven gameplay tuning
//!
//! The crate owns no rendering surface. A host drives the game by calling
//! [`sim::tick`] once per display frame and draws from the render views the
//! state exposes; score/coin/life/game-over changes reach the host through
//! the [`sim::EventSink`] callbacks.

pub mod settings;
pub mod sim;

pub use settings::Tuning;
pub use sim::{GameState, TickInput, tick};

/// Gameplay constants (defaults for [`settings::Tuning`])
pub mod consts {
    /// Playfield dimensions (pixels)
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Downward acceleration added to a ball's vertical velocity each frame
    pub const GRAVITY: f32 = 0.02;
    /// Per-frame multiplicative velocity decay
    pub const FRICTION: f32 = 0.998;
    /// Restitution applied on paddle and wall reflection
    pub const BOUNCE: f32 = 0.98;
    /// Damping applied to the elastic ball-ball collision response
    pub const BALL_DAMPING: f32 = 0.98;

    /// Paddle geometry and motion
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    pub const PADDLE_SPEED: f32 = 8.0;
    /// Distance from the canvas bottom to the paddle top edge
    pub const PADDLE_BOTTOM_MARGIN: f32 = 40.0;

    /// Ball radius range [min, max)
    pub const BALL_RADIUS_MIN: f32 = 10.0;
    pub const BALL_RADIUS_MAX: f32 = 30.0;
    /// Initial velocity components are uniform in [-half_range, half_range)
    pub const BALL_START_SPEED_HALF_RANGE: f32 = 4.0;

    /// Balls seeded at startup and on restart
    pub const INITIAL_BALL_COUNT: usize = 10;
    /// Minimum elapsed time between timed spawns
    pub const SPAWN_INTERVAL_MS: u64 = 2000;

    /// Starting lives
    pub const START_LIVES: u32 = 3;

    /// Center distance below which a ball pair is treated as coincident
    /// (guards the collision-normal angle against a degenerate atan2)
    pub const DIST_EPSILON: f32 = 1e-6;
}
