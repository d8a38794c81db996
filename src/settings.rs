//! Gameplay tuning
//!
//! Every constant the simulation uses, as a serde struct so hosts can load
//! overrides from JSON. Defaults come from [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay tuning values
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Playfield ===
    pub canvas_width: f32,
    pub canvas_height: f32,

    // === Ball physics ===
    /// Per-frame downward acceleration
    pub gravity: f32,
    /// Per-frame multiplicative velocity decay
    pub friction: f32,
    /// Restitution on paddle/wall reflection
    pub bounce: f32,
    /// Damping on the ball-ball collision response
    pub ball_damping: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    /// Distance from canvas bottom to paddle top edge
    pub paddle_bottom_margin: f32,

    // === Spawning ===
    /// Ball radius range [min, max)
    pub ball_radius_min: f32,
    pub ball_radius_max: f32,
    /// Initial velocity components are uniform in [-h, h)
    pub ball_start_speed_half_range: f32,
    /// Balls seeded at startup and on restart
    pub initial_ball_count: usize,
    /// Minimum elapsed time between timed spawns
    pub spawn_interval_ms: u64,

    // === Run ===
    pub start_lives: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            gravity: GRAVITY,
            friction: FRICTION,
            bounce: BOUNCE,
            ball_damping: BALL_DAMPING,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_bottom_margin: PADDLE_BOTTOM_MARGIN,
            ball_radius_min: BALL_RADIUS_MIN,
            ball_radius_max: BALL_RADIUS_MAX,
            ball_start_speed_half_range: BALL_START_SPEED_HALF_RANGE,
            initial_ball_count: INITIAL_BALL_COUNT,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            start_lives: START_LIVES,
        }
    }
}

impl Tuning {
    /// Paddle top edge y coordinate
    pub fn paddle_y(&self) -> f32 {
        self.canvas_height - self.paddle_bottom_margin
    }

    /// Load tuning from a JSON file, falling back to defaults on any error
    pub fn load(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Err(e) => {
                    log::warn!("Bad tuning file {}: {e}; using defaults", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No tuning file at {}; using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Save tuning as pretty JSON
    pub fn save(&self, path: &std::path::Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }
}
