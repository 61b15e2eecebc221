//! Headless [`Surface`] that records every call instead of drawing.
//!
//! Used for native runs and tests: the scene can be driven frame by frame and
//! the resulting call list inspected. It also tracks the save/restore depth
//! and the current translation so assertions can check that drawing state is
//! balanced.

#[cfg(test)]
#[path = "recording_test.rs"]
mod recording_test;

use crate::geom::Point;
use crate::surface::{RadialGradient, Surface, SurfaceError};

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    ConfigureSize { width: f64, height: f64 },
    FillRect { x: f64, y: f64, width: f64, height: f64, color: String },
    FillRectRadialGradient { x: f64, y: f64, width: f64, height: f64, gradient: RadialGradient },
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    ClosePath,
    Fill { color: String },
    Stroke { color: String, width: f64 },
    Save,
    Restore,
    Translate { dx: f64, dy: f64 },
    Rotate(f64),
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    calls: Vec<DrawCall>,
    size: Option<(f64, f64)>,
    offset: Point,
    stack: Vec<Point>,
    fail_gradients: bool,
    fail_transforms: bool,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every gradient fill fail with [`SurfaceError::GradientUnsupported`].
    #[must_use]
    pub fn without_gradients(mut self) -> Self {
        self.fail_gradients = true;
        self
    }

    /// Make every transform fail with [`SurfaceError::Host`].
    #[must_use]
    pub fn with_failing_transforms(mut self) -> Self {
        self.fail_transforms = true;
        self
    }

    #[must_use]
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Drain the recorded calls, keeping size and drawing state.
    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }

    /// Size set by the last `configure_size`, if any.
    #[must_use]
    pub fn size(&self) -> Option<(f64, f64)> {
        self.size
    }

    /// Number of unmatched `save` calls.
    #[must_use]
    pub fn save_depth(&self) -> usize {
        self.stack.len()
    }

    /// Current translation applied by `translate`.
    #[must_use]
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Count of recorded calls matching `pred`.
    pub fn count(&self, pred: impl Fn(&DrawCall) -> bool) -> usize {
        self.calls.iter().filter(|call| pred(call)).count()
    }

    /// All recorded `stroke` calls as `(color, width)`.
    #[must_use]
    pub fn strokes(&self) -> Vec<(&str, f64)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Stroke { color, width } => Some((color.as_str(), *width)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn configure_size(&mut self, width: f64, height: f64) {
        self.size = Some((width, height));
        self.offset = Point::default();
        self.stack.clear();
        self.calls.push(DrawCall::ConfigureSize { width, height });
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str) {
        self.calls.push(DrawCall::FillRect { x, y, width, height, color: color.to_owned() });
    }

    fn fill_rect_radial_gradient(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        gradient: &RadialGradient,
    ) -> Result<(), SurfaceError> {
        if self.fail_gradients {
            return Err(SurfaceError::GradientUnsupported);
        }
        self.calls.push(DrawCall::FillRectRadialGradient { x, y, width, height, gradient: gradient.clone() });
        Ok(())
    }

    fn begin_path(&mut self) {
        self.calls.push(DrawCall::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.calls.push(DrawCall::MoveTo(Point::new(x, y)));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.calls.push(DrawCall::LineTo(Point::new(x, y)));
    }

    fn close_path(&mut self) {
        self.calls.push(DrawCall::ClosePath);
    }

    fn fill(&mut self, color: &str) {
        self.calls.push(DrawCall::Fill { color: color.to_owned() });
    }

    fn stroke(&mut self, color: &str, width: f64) {
        self.calls.push(DrawCall::Stroke { color: color.to_owned(), width });
    }

    fn save(&mut self) {
        self.stack.push(self.offset);
        self.calls.push(DrawCall::Save);
    }

    fn restore(&mut self) {
        if let Some(offset) = self.stack.pop() {
            self.offset = offset;
        }
        self.calls.push(DrawCall::Restore);
    }

    fn translate(&mut self, dx: f64, dy: f64) -> Result<(), SurfaceError> {
        if self.fail_transforms {
            return Err(SurfaceError::Host { call: "translate", detail: "transform rejected".to_owned() });
        }
        self.offset = Point::new(self.offset.x + dx, self.offset.y + dy);
        self.calls.push(DrawCall::Translate { dx, dy });
        Ok(())
    }

    fn rotate(&mut self, angle: f64) -> Result<(), SurfaceError> {
        if self.fail_transforms {
            return Err(SurfaceError::Host { call: "rotate", detail: "transform rejected".to_owned() });
        }
        self.calls.push(DrawCall::Rotate(angle));
        Ok(())
    }
}
