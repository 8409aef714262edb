//! 2D canvas backend for [`DrawSurface`]
//!
//! Thin wrapper over `CanvasRenderingContext2d`. Context calls that return
//! `Result` cannot meaningfully fail mid-frame, so errors are dropped.

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::DrawSurface;

/// Font used for the score readout
const HUD_FONT: &str = "16px Arial";

/// Render surface backed by a browser 2D canvas context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl DrawSurface for CanvasSurface {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ctx
            .clear_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: &str) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(x as f64, y as f64, radius as f64, 0.0, TAU);
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
        self.ctx.close_path();
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx
            .fill_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, color: &str) {
        self.ctx.set_font(HUD_FONT);
        self.ctx.set_fill_style_str(color);
        let _ = self.ctx.fill_text(text, x as f64, y as f64);
    }
}
