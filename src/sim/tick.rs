//! Fixed timestep simulation tick
//!
//! One tick performs exactly one state update: ball motion and wall/paddle
//! resolution, paddle movement from input, then the brick pass with its
//! win aggregation. Terminal phases are absorbing; ticking an ended game is
//! a no-op.

use crate::sim::collision::{
    PaddleCheck, resolve_ceiling, resolve_paddle_plane, resolve_side_walls, strike_brick,
};
use crate::sim::state::{Ball, GameOutcome, GamePhase, GameState, Paddle};

/// Input snapshot for a single tick
///
/// Key flags are edge state (held between key-down and key-up); `pointer_x`
/// is a one-shot absolute coordinate the caller clears after each tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left_pressed: bool,
    pub right_pressed: bool,
    /// Absolute pointer x on the canvas, if the pointer moved since last tick
    pub pointer_x: Option<f32>,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.is_over() {
        return;
    }
    state.time_ticks += 1;

    if update_ball(&mut state.ball, &state.paddle) == PaddleCheck::Loss {
        state.phase = GamePhase::Over(GameOutcome::Loss);
        log::info!("ball lost past the paddle at tick {}", state.time_ticks);
        return;
    }

    update_paddle(&mut state.paddle, input);

    // Win aggregation runs on pre-pass brick state, so the win fires on the
    // tick after the last brick died
    if state.active_bricks() == 0 {
        state.phase = GamePhase::Over(GameOutcome::Win);
        log::info!("all bricks cleared at tick {}", state.time_ticks);
        return;
    }

    // Bricks are pass-through: a hit deactivates the brick without
    // reflecting the ball
    for brick in &mut state.bricks {
        strike_brick(brick, &state.ball);
    }
}

/// Move the ball and resolve wall/paddle contacts in source order:
/// x advance, side walls, y advance, paddle plane, then ceiling
fn update_ball(ball: &mut Ball, paddle: &Paddle) -> PaddleCheck {
    ball.pos.x += ball.vel.x;
    resolve_side_walls(ball);

    ball.pos.y += ball.vel.y;
    let check = resolve_paddle_plane(ball, paddle);
    resolve_ceiling(ball);
    check
}

/// Move the paddle from the tick's input.
///
/// A pointer position is an absolute set (centered on the pointer) and is
/// applied first; held keys then adjust relative to it. Left wins when both
/// keys are held. Every path is clamped so the paddle never leaves the
/// canvas.
fn update_paddle(paddle: &mut Paddle, input: &TickInput) {
    if let Some(px) = input.pointer_x {
        paddle.x = paddle.clamp_x(px - paddle.width / 2.0);
    }
    if input.left_pressed {
        paddle.x = paddle.clamp_x(paddle.x - paddle.speed);
    } else if input.right_pressed {
        paddle.x = paddle.clamp_x(paddle.x + paddle.speed);
    }
}
