//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Elapsed time and control signals come from the host
//! - Seeded RNG only (serve direction is the sole random decision)
//! - No rendering or platform dependencies

pub mod collision;
pub mod simulation;
pub mod state;
pub mod tick;

pub use collision::{Aabb, reflect};
pub use simulation::{GameSimulation, ScoreHook};
pub use state::{
    Ball, Control, ControlInput, GamePhase, GameState, Paddle, Player, Playfield, Score, Snapshot,
};
pub use tick::tick;
