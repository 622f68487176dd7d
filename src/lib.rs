//! Duo Pong - a classic two-player paddle-and-ball simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `tuning`: Data-driven game balance
//!
//! Rendering, raw input capture and networking live in the host application;
//! this crate only consumes normalized control signals and elapsed time, and
//! exposes read-only state snapshots for a renderer to consume.

pub mod sim;
pub mod tuning;

pub use sim::{Control, GameSimulation, Player, Score, Snapshot};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 10.0;
    /// Base serve speed; rally amplification never carries past a reset
    pub const BALL_BASE_SPEED: f32 = 300.0;
    /// Velocity at construction, before the first serve
    pub const BALL_INITIAL_VX: f32 = 300.0;
    pub const BALL_INITIAL_VY: f32 = 200.0;

    /// Paddle defaults - left paddle sits at x = INSET, right paddle mirrored
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 400.0;
    pub const PADDLE_INSET: f32 = 20.0;

    /// Horizontal speed multiplier per paddle exchange (uncapped over a rally)
    pub const RALLY_SPEEDUP: f32 = 1.05;
    /// Vertical velocity added per unit of normalized hit offset
    pub const SPIN_STRENGTH: f32 = 200.0;
    /// Hard cap on |vertical velocity| after collision resolution
    pub const MAX_VERTICAL_SPEED: f32 = 500.0;
    /// Serve angle envelope: uniform in [-30°, +30°] from horizontal
    pub const SERVE_ANGLE: f32 = std::f32::consts::PI / 6.0;
}
