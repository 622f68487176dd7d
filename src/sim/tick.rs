//! Per-update simulation step
//!
//! Advances the whole game state once per host invocation, in a fixed order:
//! paddle velocities from input, paddle integration with hard clamping, ball
//! integration, wall reflection, paddle collision resolution, goal detection.

use glam::Vec2;

use super::collision::reflect;
use super::state::{GamePhase, GameState, Player};

/// Advance the game state by one elapsed-time slice
///
/// Returns the player who scored this update, if any; the score has already
/// been incremented when `Some` is returned. The ball is intentionally left
/// past the goal line so the caller can notify and reset in its own order.
///
/// Degenerate timing input is guarded here: a non-finite `dt` skips the tick
/// entirely, a negative one clamps to a zero-length (no-op) step.
pub fn tick(state: &mut GameState, dt: f32) -> Option<Player> {
    if state.phase != GamePhase::Running {
        return None;
    }
    if !dt.is_finite() {
        log::warn!("ignoring update with non-finite dt: {dt}");
        return None;
    }
    let dt = dt.max(0.0);

    move_paddles(state, dt);
    move_ball(state, dt);
    bounce_walls(state);

    // Left paddle first, then right; at most one can overlap the ball
    resolve_paddle_hit(state, Player::Left);
    resolve_paddle_hit(state, Player::Right);

    check_goal(state)
}

/// Derive paddle velocities from the input record, integrate and clamp
fn move_paddles(state: &mut GameState, dt: f32) {
    let input = state.input;
    let max_y = state.playfield().height;
    for side in [Player::Left, Player::Right] {
        let paddle = state.paddle_mut(side);
        let vel_y = input.axis(side) * paddle.speed;
        paddle.pos.y += vel_y * dt;
        // Hard stop at the walls, no bounce
        paddle.pos.y = paddle.pos.y.clamp(0.0, max_y - paddle.size.y);
    }
}

fn move_ball(state: &mut GameState, dt: f32) {
    let ball = &mut state.ball;
    ball.pos += ball.vel * dt;
}

/// Top/bottom wall contact: invert vy and clamp back inside the bound.
/// Reflect-and-clamp, not an exact bounce; no energy is lost or gained.
fn bounce_walls(state: &mut GameState) {
    let field = state.playfield();
    let ball = &mut state.ball;
    if ball.pos.y <= 0.0 || ball.pos.y + ball.size.y >= field.height {
        ball.vel = reflect(ball.vel, Vec2::Y);
        ball.pos.y = ball.pos.y.clamp(0.0, field.height - ball.size.y);
    }
}

/// Exact rectangle-overlap test against one paddle, with full response:
/// push out along the MTV, reflect and amplify vx, add spin from the hit
/// offset, cap vy.
fn resolve_paddle_hit(state: &mut GameState, side: Player) {
    let paddle_rect = state.paddle(side).rect();
    let Some(mtv) = state.ball.rect().mtv(&paddle_rect) else {
        return;
    };

    let tuning = &state.tuning;
    let ball = &mut state.ball;

    // Resolve interpenetration toward the shallowest axis of overlap
    ball.pos += mtv;

    // Reverse horizontal velocity with the per-exchange speed-up
    ball.vel.x = -ball.vel.x * tuning.rally_speedup;

    // Spin: normalized offset of the ball center across the paddle's
    // half-height, -1 at the top edge through +1 at the bottom
    let ball_center = ball.pos.y + ball.size.y / 2.0;
    let hit_offset = (ball_center - paddle_rect.center().y) / (paddle_rect.size.y / 2.0);
    ball.vel.y += hit_offset * tuning.spin_strength;

    ball.vel.y = ball
        .vel
        .y
        .clamp(-tuning.max_vertical_speed, tuning.max_vertical_speed);
}

/// Goal detection on the ball's left edge, exactly as the classic rules:
/// crossing x <= 0 scores for the right player, x >= width for the left.
fn check_goal(state: &mut GameState) -> Option<Player> {
    let field = state.playfield();
    let scorer = if state.ball.pos.x <= 0.0 {
        Player::Right
    } else if state.ball.pos.x >= field.width {
        Player::Left
    } else {
        return None;
    };

    state.score.award(scorer);
    log::info!(
        "goal for {scorer:?}, score {}-{}",
        state.score.left,
        state.score.right
    );
    Some(scorer)
}
