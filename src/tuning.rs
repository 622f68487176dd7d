//! Data-driven game balance
//!
//! Every gameplay number lives in [`Tuning`] so a host can reshape the court
//! without recompiling. `Tuning::default()` reproduces the classic setup.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Playfield;

/// Gameplay parameters, fixed at simulation construction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    /// Simulation area bounding ball and paddle motion
    pub playfield: Playfield,

    // === Ball ===
    pub ball_size: Vec2,
    /// Base serve speed (velocity magnitude after every reset)
    pub ball_speed: f32,
    /// Velocity at construction, before the first serve
    pub ball_initial_vel: Vec2,

    // === Paddles ===
    pub paddle_size: Vec2,
    pub paddle_speed: f32,
    /// Horizontal distance from each goal line to its paddle
    pub paddle_inset: f32,

    // === Paddle response ===
    /// Horizontal speed multiplier per exchange; uncapped within a rally
    pub rally_speedup: f32,
    /// Vertical velocity added per unit of normalized hit offset
    pub spin_strength: f32,
    /// Cap on |vy| after collision resolution
    pub max_vertical_speed: f32,

    // === Serve ===
    /// Launch angle drawn uniformly from [-serve_angle, serve_angle]
    pub serve_angle: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            playfield: Playfield::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT),
            ball_size: Vec2::splat(BALL_SIZE),
            ball_speed: BALL_BASE_SPEED,
            ball_initial_vel: Vec2::new(BALL_INITIAL_VX, BALL_INITIAL_VY),
            paddle_size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            paddle_speed: PADDLE_SPEED,
            paddle_inset: PADDLE_INSET,
            rally_speedup: RALLY_SPEEDUP,
            spin_strength: SPIN_STRENGTH,
            max_vertical_speed: MAX_VERTICAL_SPEED,
            serve_angle: SERVE_ANGLE,
        }
    }
}

impl Tuning {
    /// Tuning for a playfield of the given size, everything else classic
    pub fn with_playfield(width: f32, height: f32) -> Self {
        Self {
            playfield: Playfield::new(width, height),
            ..Self::default()
        }
    }
}
