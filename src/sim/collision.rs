//! Collision detection and response
//!
//! Wall and paddle contacts are resolved as instantaneous mirror reflections
//! (no sub-stepping), so a fast ball can tunnel through thin geometry; that
//! limitation is inherited from the original game and accepted. Brick contact
//! is a decomposed axis-aligned overlap test between the ball's bounding
//! square and the brick rectangle.

use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::mirror_about;
use crate::sim::state::{Ball, Brick, Paddle, Rect};

/// Result of testing the ball against the paddle plane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleCheck {
    /// Ball has not reached the plane
    Clear,
    /// Ball bounced off the paddle (position and velocity already corrected)
    Bounce,
    /// Ball is fully past the paddle, outside its span: terminal loss
    Loss,
}

/// Result of striking a brick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrickStrike {
    /// Brick was active and the ball overlaps it; brick is now inactive
    Hit,
    /// Brick is active but the ball does not touch it
    Miss,
    /// Brick was already destroyed; collision tests are no-ops
    AlreadyInactive,
}

/// Reflect the ball off the left and right canvas walls.
///
/// Position is mirrored about the boundary (`x' = 2*b - x`), never clipped,
/// and the horizontal velocity flips sign once per crossing.
pub fn resolve_side_walls(ball: &mut Ball) {
    let effective_width = CANVAS_WIDTH - ball.radius;
    if ball.pos.x > effective_width {
        ball.pos.x = mirror_about(ball.pos.x, effective_width);
        ball.vel.x = -ball.vel.x;
    }
    if ball.pos.x < ball.radius {
        ball.pos.x = mirror_about(ball.pos.x, ball.radius);
        ball.vel.x = -ball.vel.x;
    }
}

/// Reflect the ball off the top canvas wall
pub fn resolve_ceiling(ball: &mut Ball) {
    if ball.pos.y < ball.radius {
        ball.pos.y = mirror_about(ball.pos.y, ball.radius);
        ball.vel.y = -ball.vel.y;
    }
}

/// Test the ball against the paddle plane at the bottom of the canvas.
///
/// Once below `CANVAS_HEIGHT - radius - paddle.height`, the ball bounces when
/// its center x lies within the paddle span, and is lost once it has also
/// dropped past `CANVAS_HEIGHT - radius` outside the span. The bounce fires
/// on the x-range test alone (original geometry preserved, not tightened):
/// the ball is not additionally required to have reached the paddle's
/// rectangle before bouncing.
pub fn resolve_paddle_plane(ball: &mut Ball, paddle: &Paddle) -> PaddleCheck {
    let effective_height = CANVAS_HEIGHT - ball.radius;
    let plane = effective_height - paddle.height;

    if ball.pos.y <= plane {
        return PaddleCheck::Clear;
    }

    if paddle.spans(ball.pos.x) {
        ball.pos.y = mirror_about(ball.pos.y, plane);
        ball.vel.y = -ball.vel.y;
        PaddleCheck::Bounce
    } else if ball.pos.y > effective_height {
        PaddleCheck::Loss
    } else {
        PaddleCheck::Clear
    }
}

/// Horizontal overlap between the ball's bounding square and a rectangle
#[inline]
pub fn horizontally_overlapped(ball: &Ball, rect: &Rect) -> bool {
    ball.pos.x - ball.radius <= rect.right() && ball.pos.x + ball.radius >= rect.x
}

/// Vertical overlap between the ball's bounding square and a rectangle
#[inline]
pub fn vertically_overlapped(ball: &Ball, rect: &Rect) -> bool {
    ball.pos.y - ball.radius <= rect.bottom() && ball.pos.y + ball.radius >= rect.y
}

/// Full overlap test: both axis predicates must hold
#[inline]
pub fn ball_overlaps(ball: &Ball, rect: &Rect) -> bool {
    horizontally_overlapped(ball, rect) && vertically_overlapped(ball, rect)
}

/// Strike a brick with the ball.
///
/// The active -> inactive transition is one-way and happens at most once;
/// the ball's velocity is not reflected (bricks are pass-through, as in the
/// original game).
pub fn strike_brick(brick: &mut Brick, ball: &Ball) -> BrickStrike {
    if !brick.active {
        return BrickStrike::AlreadyInactive;
    }
    if !ball_overlaps(ball, &brick.rect) {
        return BrickStrike::Miss;
    }
    brick.active = false;
    BrickStrike::Hit
}
