//! Game state and core simulation types
//!
//! The full per-run state lives in [`GameState`]; everything here is plain
//! data with no rendering or platform dependencies.

use glam::Vec2;

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Run ended; terminal and absorbing
    Over(GameOutcome),
}

/// The two terminal outcomes of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// Every brick destroyed
    Win,
    /// Ball passed the paddle
    Loss,
}

/// Axis-aligned rectangle (top-left anchored, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// The ball entity
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    /// Velocity in pixels per tick
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Ball at the serve position, moving up and to the right
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT - 20.0),
            vel: Vec2::new(BALL_START_VEL.0, BALL_START_VEL.1),
            radius: BALL_RADIUS,
        }
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

/// The player's paddle; moves horizontally along the bottom edge
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    /// Left edge x coordinate
    pub x: f32,
    pub width: f32,
    pub height: f32,
    /// Travel per tick when a key is held
    pub speed: f32,
}

impl Paddle {
    /// Paddle centered at the bottom of the canvas
    pub fn new() -> Self {
        Self {
            x: (CANVAS_WIDTH - PADDLE_WIDTH) / 2.0,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            speed: PADDLE_SPEED,
        }
    }

    /// Top edge y coordinate (paddle sits flush with the bottom)
    #[inline]
    pub fn y(&self) -> f32 {
        CANVAS_HEIGHT - self.height
    }

    /// Largest x that keeps the paddle fully on the canvas
    #[inline]
    pub fn max_x(&self) -> f32 {
        CANVAS_WIDTH - self.width
    }

    /// Clamp an x into the on-canvas range; every input path goes through this
    #[inline]
    pub fn clamp_x(&self, x: f32) -> f32 {
        x.clamp(0.0, self.max_x())
    }

    /// Whether an x coordinate lies within the paddle's horizontal span
    #[inline]
    pub fn spans(&self, x: f32) -> bool {
        x >= self.x && x <= self.x + self.width
    }
}

impl Default for Paddle {
    fn default() -> Self {
        Self::new()
    }
}

/// A destructible brick; `active` flips to false at most once and never back
#[derive(Debug, Clone, Copy)]
pub struct Brick {
    pub rect: Rect,
    pub active: bool,
}

impl Brick {
    pub fn new(rect: Rect) -> Self {
        Self { rect, active: true }
    }
}

/// Brick grid layout parameters
#[derive(Debug, Clone, Copy)]
pub struct GridLayout {
    pub rows: usize,
    pub cols: usize,
    pub brick_width: f32,
    pub brick_height: f32,
    pub padding: f32,
    pub offset_top: f32,
    pub offset_left: f32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            rows: BRICK_ROWS,
            cols: BRICK_COLS,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            padding: BRICK_PADDING,
            offset_top: BRICK_OFFSET_TOP,
            offset_left: BRICK_OFFSET_LEFT,
        }
    }
}

impl GridLayout {
    /// Build the brick field: column-major outer loop, row-major inner,
    /// so brick ordering is deterministic
    pub fn build(&self) -> Vec<Brick> {
        let mut bricks = Vec::with_capacity(self.cols * self.rows);
        for col in 0..self.cols {
            for row in 0..self.rows {
                let x = col as f32 * (self.brick_width + self.padding) + self.offset_left;
                let y = row as f32 * (self.brick_height + self.padding) + self.offset_top;
                bricks.push(Brick::new(Rect::new(x, y, self.brick_width, self.brick_height)));
            }
        }
        bricks
    }
}

/// Complete game state for one run
#[derive(Debug, Clone)]
pub struct GameState {
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: Vec<Brick>,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Fresh state built entirely from inline constants
    pub fn new() -> Self {
        Self {
            ball: Ball::new(),
            paddle: Paddle::new(),
            bricks: GridLayout::default().build(),
            phase: GamePhase::Running,
            time_ticks: 0,
        }
    }

    /// Number of bricks still standing
    pub fn active_bricks(&self) -> usize {
        self.bricks.iter().filter(|b| b.active).count()
    }

    /// Score derived from brick state alone: 10 points per destroyed brick
    pub fn score(&self) -> u32 {
        let destroyed = self.bricks.len() - self.active_bricks();
        destroyed as u32 * POINTS_PER_BRICK
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, GamePhase::Over(_))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_init_counts_and_positions() {
        let bricks = GridLayout::default().build();
        assert_eq!(bricks.len(), 15);
        assert!(bricks.iter().all(|b| b.active));

        // First brick of the first column sits at the configured offsets
        assert_eq!(bricks[0].rect.x, BRICK_OFFSET_LEFT);
        assert_eq!(bricks[0].rect.y, BRICK_OFFSET_TOP);

        // Column-major ordering: first three bricks share a column
        assert_eq!(bricks[1].rect.x, BRICK_OFFSET_LEFT);
        assert_eq!(bricks[1].rect.y, BRICK_OFFSET_TOP + BRICK_HEIGHT + BRICK_PADDING);
        assert_eq!(bricks[3].rect.x, BRICK_OFFSET_LEFT + BRICK_WIDTH + BRICK_PADDING);
    }

    #[test]
    fn test_grid_bricks_do_not_overlap() {
        let bricks = GridLayout::default().build();
        for (i, a) in bricks.iter().enumerate() {
            for b in bricks.iter().skip(i + 1) {
                let separated = a.rect.right() <= b.rect.x
                    || b.rect.right() <= a.rect.x
                    || a.rect.bottom() <= b.rect.y
                    || b.rect.bottom() <= a.rect.y;
                assert!(separated, "bricks {:?} and {:?} overlap", a.rect, b.rect);
            }
        }
    }

    #[test]
    fn test_score_tracks_inactive_count() {
        let mut state = GameState::new();
        assert_eq!(state.score(), 0);

        state.bricks[0].active = false;
        state.bricks[7].active = false;
        assert_eq!(state.score(), 20);

        for brick in &mut state.bricks {
            brick.active = false;
        }
        assert_eq!(state.score(), 150);
    }

    #[test]
    fn test_paddle_starts_centered_and_in_bounds() {
        let paddle = Paddle::new();
        assert_eq!(paddle.x, (CANVAS_WIDTH - PADDLE_WIDTH) / 2.0);
        assert!(paddle.x >= 0.0 && paddle.x <= paddle.max_x());
    }
}
