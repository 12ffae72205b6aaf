//! Browser canvas backend (`CanvasRenderingContext2d`)

use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::surface::{Color, DrawSurface, Font};
use crate::consts::{SURFACE_HEIGHT, SURFACE_WIDTH};

/// Failures while attaching to the page's canvas
#[derive(thiserror::Error, Debug)]
pub enum SurfaceError {
    #[error("no browser window")]
    NoWindow,

    #[error("no document")]
    NoDocument,

    #[error("no <canvas id=\"{0}\"> element")]
    NoCanvas(String),

    #[error("2D context unavailable")]
    NoContext,
}

/// A 2D canvas sized to the logical surface
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Look up the canvas by element id, size it, and grab its 2D context
    pub fn attach(canvas_id: &str) -> Result<Self, SurfaceError> {
        let window = web_sys::window().ok_or(SurfaceError::NoWindow)?;
        let document = window.document().ok_or(SurfaceError::NoDocument)?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(canvas_id)
            .and_then(|el| el.dyn_into().ok())
            .ok_or_else(|| SurfaceError::NoCanvas(canvas_id.to_string()))?;

        canvas.set_width(SURFACE_WIDTH as u32);
        canvas.set_height(SURFACE_HEIGHT as u32);

        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or(SurfaceError::NoContext)?;

        Ok(Self { ctx })
    }
}

impl DrawSurface for CanvasSurface {
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.clear_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.begin_path();
        if self.ctx.arc(cx as f64, cy as f64, r as f64, 0.0, TAU).is_ok() {
            self.ctx.fill();
        }
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: Font, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.set_font(&font.to_css());
        let _ = self.ctx.fill_text(text, x as f64, y as f64);
    }
}
