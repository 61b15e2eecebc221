//! [`Surface`] backed by a browser `<canvas>` element.
//!
//! This is the only module that touches [`web_sys::CanvasRenderingContext2d`].
//! Fallible `Canvas2D` calls map their `JsValue` error into
//! [`SurfaceError::Host`] naming the call that failed.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::surface::{RadialGradient, Surface, SurfaceError};

fn host(call: &'static str) -> impl FnOnce(JsValue) -> SurfaceError {
    move |err| SurfaceError::Host { call, detail: format!("{err:?}") }
}

pub struct Canvas2dSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Canvas2dSurface {
    /// Bind to the canvas's 2D context.
    ///
    /// # Errors
    ///
    /// Fails if the canvas has no 2D context (for example, when another
    /// context type was already requested).
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, SurfaceError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(host("getContext"))?
            .ok_or_else(|| SurfaceError::Host { call: "getContext", detail: "no 2d context".to_owned() })?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|obj| SurfaceError::Host { call: "getContext", detail: format!("{obj:?}") })?;
        Ok(Self { canvas, ctx })
    }

    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for Canvas2dSurface {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn configure_size(&mut self, width: f64, height: f64) {
        self.canvas.set_width(width.max(0.0).round() as u32);
        self.canvas.set_height(height.max(0.0).round() as u32);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x, y, width, height);
    }

    #[allow(clippy::cast_possible_truncation)]
    fn fill_rect_radial_gradient(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        gradient: &RadialGradient,
    ) -> Result<(), SurfaceError> {
        let center = gradient.center;
        let fill = self
            .ctx
            .create_radial_gradient(
                center.x,
                center.y,
                gradient.inner_radius,
                center.x,
                center.y,
                gradient.outer_radius,
            )
            .map_err(host("createRadialGradient"))?;
        for stop in &gradient.stops {
            fill.add_color_stop(stop.offset as f32, &stop.color).map_err(host("addColorStop"))?;
        }
        self.ctx.set_fill_style_canvas_gradient(&fill);
        self.ctx.fill_rect(x, y, width, height);
        Ok(())
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn fill(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
    }

    /// Canvas ignores a non-positive `lineWidth` and keeps the previous one,
    /// so such strokes are skipped.
    fn stroke(&mut self, color: &str, width: f64) {
        if width <= 0.0 {
            return;
        }
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(width);
        self.ctx.stroke();
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, dx: f64, dy: f64) -> Result<(), SurfaceError> {
        self.ctx.translate(dx, dy).map_err(host("translate"))
    }

    fn rotate(&mut self, angle: f64) -> Result<(), SurfaceError> {
        self.ctx.rotate(angle).map_err(host("rotate"))
    }
}
