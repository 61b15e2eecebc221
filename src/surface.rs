//! The drawing-surface abstraction the scene renders through.
//!
//! [`Surface`] mirrors the small subset of the Canvas 2D API the scene uses.
//! Calls that can fail on the host (transforms, gradients) return
//! `Result<(), SurfaceError>`; path construction and plain fills cannot fail.
//! Colors are CSS color strings.

use crate::geom::Point;

/// Error raised by a [`Surface`] implementation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SurfaceError {
    /// The host rejected a drawing call.
    #[error("surface call `{call}` failed: {detail}")]
    Host { call: &'static str, detail: String },
    /// The backend cannot paint radial gradients.
    #[error("radial gradients are not supported by this surface")]
    GradientUnsupported,
}

/// A color stop of a gradient: `offset` in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub color: String,
}

/// Two concentric circles with color stops, as `createRadialGradient` takes them.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub center: Point,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub stops: Vec<ColorStop>,
}

impl RadialGradient {
    #[must_use]
    pub fn new(center: Point, inner_radius: f64, outer_radius: f64) -> Self {
        Self { center, inner_radius, outer_radius, stops: Vec::new() }
    }

    #[must_use]
    pub fn with_stop(mut self, offset: f64, color: &str) -> Self {
        self.stops.push(ColorStop { offset, color: color.to_owned() });
        self
    }
}

/// Primitive 2D drawing operations.
pub trait Surface {
    /// Resize the backing store. Resets all drawing state.
    fn configure_size(&mut self, width: f64, height: f64);

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str);

    /// Fill a rectangle with a radial gradient.
    ///
    /// # Errors
    ///
    /// Fails when the gradient cannot be built or applied.
    fn fill_rect_radial_gradient(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        gradient: &RadialGradient,
    ) -> Result<(), SurfaceError>;

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn close_path(&mut self);

    /// Fill the current path.
    fn fill(&mut self, color: &str);

    /// Stroke the current path.
    ///
    /// `width` is passed through unchanged, including zero or negative values;
    /// implementations decide what a non-positive width means.
    fn stroke(&mut self, color: &str, width: f64);

    fn save(&mut self);
    fn restore(&mut self);

    /// # Errors
    ///
    /// Fails if the host rejects the transform.
    fn translate(&mut self, dx: f64, dy: f64) -> Result<(), SurfaceError>;

    /// Rotate clockwise by `angle` radians.
    ///
    /// # Errors
    ///
    /// Fails if the host rejects the transform.
    fn rotate(&mut self, angle: f64) -> Result<(), SurfaceError>;
}
