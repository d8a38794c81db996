//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in [`GameState`]; there are no
//! module-level statics. The host observes changes through [`EventSink`]
//! callbacks and the render views.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::settings::Tuning;
use crate::sim::spawn;

/// Ball variety - determines color, scoring, and paddle-contact behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallKind {
    Normal,
    Special,
    Dangerous,
    Coin,
}

impl BallKind {
    /// All variants, in spawn-roll order
    pub const ALL: [BallKind; 4] = [
        BallKind::Normal,
        BallKind::Special,
        BallKind::Dangerous,
        BallKind::Coin,
    ];

    /// Fill color for the draw collaborator (CSS hex)
    pub fn color(&self) -> &'static str {
        match self {
            BallKind::Normal => "#FF69B4",
            BallKind::Special => "#9370DB",
            BallKind::Dangerous => "#FF0000",
            BallKind::Coin => "#FFD700",
        }
    }

    /// Points awarded on paddle contact (score for Normal/Special,
    /// coin value for Coin; Dangerous awards nothing)
    pub fn points(&self) -> u32 {
        match self {
            BallKind::Normal => 10,
            BallKind::Special => 20,
            BallKind::Dangerous => 0,
            BallKind::Coin => 50,
        }
    }

    /// Paddle contact costs a life instead of bouncing
    pub fn is_dangerous(&self) -> bool {
        matches!(self, BallKind::Dangerous)
    }

    /// Paddle contact collects into the coin tally
    pub fn is_coin(&self) -> bool {
        matches!(self, BallKind::Coin)
    }
}

/// A ball entity
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Collision mass, equal to the radius
    pub mass: f32,
    pub kind: BallKind,
    /// Inactive balls take no part in physics or rendering; they are never
    /// revived, only compacted away
    pub active: bool,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, kind: BallKind) -> Self {
        Self {
            pos,
            vel,
            radius,
            mass: radius,
            kind,
            active: true,
        }
    }

    /// Lowest point of the ball
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}

/// Paddle steering command from the host's key state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaddleDirection {
    Left,
    Right,
    #[default]
    None,
}

/// The player's paddle - a rectangle sliding along a fixed horizontal line
#[derive(Debug, Clone)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    /// Top edge (fixed)
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Horizontal velocity, one of -speed, 0, +speed
    pub dx: f32,
    pub speed: f32,
}

impl Paddle {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            x: tuning.canvas_width / 2.0 - tuning.paddle_width / 2.0,
            y: tuning.paddle_y(),
            width: tuning.paddle_width,
            height: tuning.paddle_height,
            dx: 0.0,
            speed: tuning.paddle_speed,
        }
    }

    /// Set horizontal velocity from a steering command
    pub fn steer(&mut self, direction: PaddleDirection) {
        self.dx = match direction {
            PaddleDirection::Left => -self.speed,
            PaddleDirection::Right => self.speed,
            PaddleDirection::None => 0.0,
        };
    }

    /// Advance one frame: apply velocity, then clamp to the playfield.
    /// Constant velocity while a key is held, applied once per frame.
    pub fn update(&mut self, canvas_width: f32) {
        self.x += self.dx;
        self.x = self.x.clamp(0.0, canvas_width - self.width);
    }
}

/// A state change the presentation layer cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    ScoreChanged(u32),
    CoinsChanged(u32),
    LifeLost { remaining: u32 },
    GameOver { score: u32, coins: u32 },
}

/// Outbound boundary to the presentation layer, fired synchronously
/// during a tick. All methods default to no-ops; `()` is the null sink.
pub trait EventSink {
    fn on_score_changed(&mut self, _score: u32) {}
    fn on_coins_changed(&mut self, _coins: u32) {}
    fn on_life_lost(&mut self, _remaining: u32) {}
    fn on_game_over(&mut self, _score: u32, _coins: u32) {}
}

impl EventSink for () {}

/// Recording sink for tests and replay tooling
impl EventSink for Vec<GameEvent> {
    fn on_score_changed(&mut self, score: u32) {
        self.push(GameEvent::ScoreChanged(score));
    }

    fn on_coins_changed(&mut self, coins: u32) {
        self.push(GameEvent::CoinsChanged(coins));
    }

    fn on_life_lost(&mut self, remaining: u32) {
        self.push(GameEvent::LifeLost { remaining });
    }

    fn on_game_over(&mut self, score: u32, coins: u32) {
        self.push(GameEvent::GameOver { score, coins });
    }
}

/// Per-ball draw data. The reference look is a filled circle of `color`,
/// with an inner white disc at half radius when `is_coin`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BallView {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: &'static str,
    pub is_coin: bool,
}

/// Paddle draw data - a filled rectangle
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PaddleView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: &'static str,
}

/// Complete simulation state, owned by the driver
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducible spawns
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub score: u32,
    pub coins: u32,
    pub lives: u32,
    /// Monotonic within a run; cleared only by restart
    pub game_over: bool,
    pub paddle: Paddle,
    /// Insertion-order collection; entries flip active -> false during a
    /// tick and are compacted at tick end
    pub balls: Vec<Ball>,
    /// Host timestamp captured at the previous timed spawn
    pub last_spawn_ms: u64,
    /// Restart requested between ticks; applied atomically at tick start
    pub restart_pending: bool,
}

impl GameState {
    /// Create a fresh run and seed the initial ball batch
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            paddle: Paddle::new(&tuning),
            score: 0,
            coins: 0,
            lives: tuning.start_lives,
            game_over: false,
            balls: Vec::new(),
            last_spawn_ms: 0,
            restart_pending: false,
            tuning,
        };
        spawn::seed_initial(&mut state);
        state
    }

    /// Steer the paddle. Key events are asynchronous to ticks and take
    /// effect immediately; the next tick observes the latest command.
    pub fn set_paddle_direction(&mut self, direction: PaddleDirection) {
        self.paddle.steer(direction);
    }

    /// Request a restart. Applied at the start of the next tick so a
    /// mid-frame caller never observes a half-reset world.
    pub fn request_restart(&mut self) {
        self.restart_pending = true;
    }

    /// Reset the run: zero the tallies, restore lives, clear and re-seed
    /// the ball collection. The spawn-cadence timestamp is deliberately
    /// left alone. Re-emits the tally events so a display resets.
    pub fn restart(&mut self, events: &mut dyn EventSink) {
        self.restart_pending = false;
        self.score = 0;
        self.coins = 0;
        self.lives = self.tuning.start_lives;
        self.game_over = false;
        self.balls.clear();
        spawn::seed_initial(self);
        events.on_score_changed(self.score);
        events.on_coins_changed(self.coins);
    }

    /// Transition to game over when lives are exhausted. Emits the final
    /// tally exactly once; the flag only clears via restart.
    pub fn check_game_over(&mut self, events: &mut dyn EventSink) {
        if self.lives == 0 && !self.game_over {
            self.game_over = true;
            events.on_game_over(self.score, self.coins);
        }
    }

    /// Draw data for every active ball, in insertion order
    pub fn ball_views(&self) -> impl Iterator<Item = BallView> + '_ {
        self.balls.iter().filter(|b| b.active).map(|b| BallView {
            x: b.pos.x,
            y: b.pos.y,
            radius: b.radius,
            color: b.kind.color(),
            is_coin: b.kind.is_coin(),
        })
    }

    /// Draw data for the paddle
    pub fn paddle_view(&self) -> PaddleView {
        PaddleView {
            x: self.paddle.x,
            y: self.paddle.y,
            width: self.paddle.width,
            height: self.paddle.height,
            color: "#FF69B4",
        }
    }
}
