//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Fixed timestep only
//! - No rendering or platform dependencies
//! - Same inputs always produce the same state

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{BrickStrike, PaddleCheck, ball_overlaps, strike_brick};
pub use state::{Ball, Brick, GameOutcome, GamePhase, GameState, GridLayout, Paddle, Rect};
pub use tick::{TickInput, tick};
