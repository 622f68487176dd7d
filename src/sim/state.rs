//! Game state and core simulation types
//!
//! Everything a renderer needs to draw a frame lives here, and all of it is
//! serde-serializable so hosts can snapshot or inspect a running game.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::collision::Aabb;
use crate::tuning::Tuning;

/// The fixed rectangular simulation area (y-down, origin at top-left)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Which side of the court a player defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Player {
    Left,
    Right,
}

/// The four logical controls; key-to-control mapping is a host concern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Control {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
}

/// Most-recent pressed/released state of each control
///
/// Written by the host's input handlers, read once at the start of every
/// update; last write wins, nothing is queued. Only sound under
/// single-threaded cooperative scheduling - this record is not a
/// synchronization point.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ControlInput {
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
}

impl ControlInput {
    pub fn set(&mut self, control: Control, pressed: bool) {
        match control {
            Control::LeftUp => self.left_up = pressed,
            Control::LeftDown => self.left_down = pressed,
            Control::RightUp => self.right_up = pressed,
            Control::RightDown => self.right_down = pressed,
        }
    }

    /// Vertical axis for one player's paddle: -1 up, +1 down, 0 idle.
    /// Down wins when both controls are held.
    pub fn axis(&self, side: Player) -> f32 {
        let (up, down) = match side {
            Player::Left => (self.left_up, self.left_down),
            Player::Right => (self.right_up, self.right_down),
        };
        if down {
            1.0
        } else if up {
            -1.0
        } else {
            0.0
        }
    }
}

/// The ball
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    /// Base serve speed; rally amplification resets to this every round
    pub speed: f32,
}

impl Ball {
    #[inline]
    pub fn rect(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    /// Relaunch from the playfield center at the given angle and direction
    ///
    /// `direction` is -1.0 (toward the left goal) or +1.0 (toward the right);
    /// the resulting velocity magnitude is exactly the base speed.
    pub fn serve(&mut self, center: Vec2, angle: f32, direction: f32) {
        self.pos = center;
        self.vel = Vec2::new(
            angle.cos() * self.speed * direction,
            angle.sin() * self.speed,
        );
    }
}

/// One player's paddle; x never changes, y is clamped to the playfield
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical speed while a control is held
    pub speed: f32,
}

impl Paddle {
    #[inline]
    pub fn rect(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// Points per player; monotone, incremented exactly once per goal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn award(&mut self, scorer: Player) {
        match scorer {
            Player::Left => self.left += 1,
            Player::Right => self.right += 1,
        }
    }
}

/// Lifecycle of the simulation; Running never terminates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Constructed, not yet accepting update ticks
    #[default]
    Idle,
    /// Accepting update ticks, forever
    Running,
}

/// Complete mutable simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub ball: Ball,
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub score: Score,
    pub input: ControlInput,
}

impl GameState {
    /// Create the initial state: ball centered with the configured pre-serve
    /// velocity, paddles vertically centered on their goal lines, score 0-0.
    pub fn new(tuning: Tuning) -> Self {
        let field = tuning.playfield;
        let paddle_y = field.height / 2.0 - tuning.paddle_size.y / 2.0;

        let ball = Ball {
            pos: field.center(),
            size: tuning.ball_size,
            vel: tuning.ball_initial_vel,
            speed: tuning.ball_speed,
        };
        let left_paddle = Paddle {
            pos: Vec2::new(tuning.paddle_inset, paddle_y),
            size: tuning.paddle_size,
            speed: tuning.paddle_speed,
        };
        let right_paddle = Paddle {
            pos: Vec2::new(
                field.width - tuning.paddle_inset - tuning.paddle_size.x,
                paddle_y,
            ),
            size: tuning.paddle_size,
            speed: tuning.paddle_speed,
        };

        Self {
            tuning,
            phase: GamePhase::Idle,
            ball,
            left_paddle,
            right_paddle,
            score: Score::default(),
            input: ControlInput::default(),
        }
    }

    #[inline]
    pub fn playfield(&self) -> Playfield {
        self.tuning.playfield
    }

    pub fn paddle(&self, side: Player) -> &Paddle {
        match side {
            Player::Left => &self.left_paddle,
            Player::Right => &self.right_paddle,
        }
    }

    pub fn paddle_mut(&mut self, side: Player) -> &mut Paddle {
        match side {
            Player::Left => &mut self.left_paddle,
            Player::Right => &mut self.right_paddle,
        }
    }

    /// Owned copy of everything a renderer consumes; never aliases live state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            ball: self.ball,
            left_paddle: self.left_paddle,
            right_paddle: self.right_paddle,
            score: self.score,
            playfield: self.playfield(),
        }
    }
}

/// Read-only copy of the renderable state as of the last completed update
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Snapshot {
    pub ball: Ball,
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub score: Score,
    pub playfield: Playfield,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let state = GameState::new(Tuning::default());
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.ball.vel, Vec2::new(300.0, 200.0));
        assert_eq!(state.left_paddle.pos, Vec2::new(20.0, 250.0));
        assert_eq!(state.right_paddle.pos, Vec2::new(770.0, 250.0));
        assert_eq!(state.score, Score::default());
    }

    #[test]
    fn test_axis_precedence_down_wins() {
        let mut input = ControlInput::default();
        input.set(Control::LeftUp, true);
        assert_eq!(input.axis(Player::Left), -1.0);
        input.set(Control::LeftDown, true);
        assert_eq!(input.axis(Player::Left), 1.0);
        input.set(Control::LeftDown, false);
        assert_eq!(input.axis(Player::Left), -1.0);
        input.set(Control::LeftUp, false);
        assert_eq!(input.axis(Player::Left), 0.0);
    }

    #[test]
    fn test_axis_sides_are_independent() {
        let mut input = ControlInput::default();
        input.set(Control::RightDown, true);
        assert_eq!(input.axis(Player::Left), 0.0);
        assert_eq!(input.axis(Player::Right), 1.0);
    }

    #[test]
    fn test_serve_restores_base_speed() {
        let mut state = GameState::new(Tuning::default());
        // Simulate a long rally having amplified the velocity
        state.ball.vel = Vec2::new(-2000.0, 450.0);
        state.ball.serve(state.playfield().center(), 0.2, -1.0);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
        assert!((state.ball.vel.length() - state.ball.speed).abs() < 0.001);
        assert!(state.ball.vel.x < 0.0);
    }

    #[test]
    fn test_snapshot_does_not_alias() {
        let mut state = GameState::new(Tuning::default());
        let snap = state.snapshot();
        state.ball.pos.x += 50.0;
        state.score.award(Player::Right);
        assert_eq!(snap.ball.pos.x, 400.0);
        assert_eq!(snap.score.right, 0);
    }
}
