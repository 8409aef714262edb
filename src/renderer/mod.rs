//! Frame rendering
//!
//! The renderer composes one frame per tick from the game state. It draws
//! through [`DrawSurface`], a minimal primitive set (clear, filled circle,
//! filled rect, text), so frame composition is testable without a browser;
//! the wasm build supplies a 2D canvas implementation in [`canvas`].

#[cfg(target_arch = "wasm32")]
pub mod canvas;

use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH, ENTITY_COLOR};
use crate::sim::GameState;

/// Draw primitives the game needs from its render surface
pub trait DrawSurface {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: &str);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str);
    fn fill_text(&mut self, text: &str, x: f32, y: f32, color: &str);
}

/// Clear and redraw every entity plus the score readout
pub fn draw_frame<S: DrawSurface>(state: &GameState, surface: &mut S) {
    surface.clear_rect(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT);

    surface.fill_circle(
        state.ball.pos.x,
        state.ball.pos.y,
        state.ball.radius,
        ENTITY_COLOR,
    );

    surface.fill_rect(
        state.paddle.x,
        state.paddle.y(),
        state.paddle.width,
        state.paddle.height,
        ENTITY_COLOR,
    );

    for brick in state.bricks.iter().filter(|b| b.active) {
        surface.fill_rect(
            brick.rect.x,
            brick.rect.y,
            brick.rect.width,
            brick.rect.height,
            ENTITY_COLOR,
        );
    }

    surface.fill_text(&format!("Score: {}", state.score()), 8.0, 20.0, ENTITY_COLOR);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Cmd {
        Clear,
        Circle { x: f32, y: f32 },
        Rect { x: f32, y: f32 },
        Text(String),
    }

    #[derive(Default)]
    struct Recorder {
        cmds: Vec<Cmd>,
    }

    impl DrawSurface for Recorder {
        fn clear_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32) {
            self.cmds.push(Cmd::Clear);
        }
        fn fill_circle(&mut self, x: f32, y: f32, _r: f32, _c: &str) {
            self.cmds.push(Cmd::Circle { x, y });
        }
        fn fill_rect(&mut self, x: f32, y: f32, _w: f32, _h: f32, _c: &str) {
            self.cmds.push(Cmd::Rect { x, y });
        }
        fn fill_text(&mut self, text: &str, _x: f32, _y: f32, _c: &str) {
            self.cmds.push(Cmd::Text(text.to_string()));
        }
    }

    #[test]
    fn test_frame_clears_then_draws_all_entities() {
        let state = GameState::new();
        let mut rec = Recorder::default();
        draw_frame(&state, &mut rec);

        assert_eq!(rec.cmds[0], Cmd::Clear);
        let circles = rec.cmds.iter().filter(|c| matches!(c, Cmd::Circle { .. })).count();
        let rects = rec.cmds.iter().filter(|c| matches!(c, Cmd::Rect { .. })).count();
        assert_eq!(circles, 1);
        // Paddle plus all 15 bricks
        assert_eq!(rects, 16);
        assert_eq!(*rec.cmds.last().unwrap(), Cmd::Text("Score: 0".to_string()));
    }

    #[test]
    fn test_inactive_bricks_are_not_drawn() {
        let mut state = GameState::new();
        state.bricks[0].active = false;
        state.bricks[1].active = false;

        let mut rec = Recorder::default();
        draw_frame(&state, &mut rec);

        let rects = rec.cmds.iter().filter(|c| matches!(c, Cmd::Rect { .. })).count();
        assert_eq!(rects, 14);
        assert_eq!(*rec.cmds.last().unwrap(), Cmd::Text("Score: 20".to_string()));
    }
}
