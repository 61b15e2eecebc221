//! Stars: generation, per-frame motion, and the five-pointed outline.
//!
//! Stars drift right at their own speed and bend vertically away from the
//! horizontal midline the further they are from the vertical center line.
//! Their radius twinkles every frame within a fixed band around the base
//! radius. A star that leaves the surface re-enters on the opposite edge.

#[cfg(test)]
#[path = "star_test.rs"]
mod star_test;

use rand::Rng;

use crate::consts::{
    FRAC_PI_5, RADIUS_JITTER_MAX, RADIUS_JITTER_MIN, STAR_COLOR, STAR_INNER_RATIO, STAR_RADIUS_MAX, STAR_RADIUS_MIN,
    STAR_SPEED_MAX, STAR_SPEED_MIN, VERTICAL_DRIFT_DIVISOR,
};
use crate::geom::{Point, Viewport};
use crate::surface::{Surface, SurfaceError};

#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    /// Radius the per-frame twinkle is computed from.
    pub base_radius: f64,
    /// Radius for the current frame.
    pub radius: f64,
    /// Horizontal drift per reference frame.
    pub speed: f64,
    pub color: &'static str,
}

impl Star {
    /// A white star at a uniformly random position inside `viewport`.
    pub fn random(rng: &mut impl Rng, viewport: Viewport) -> Self {
        let x = rng.random::<f64>() * viewport.width;
        let y = rng.random::<f64>() * viewport.height;
        let base_radius = rng.random_range(STAR_RADIUS_MIN..STAR_RADIUS_MAX);
        let speed = rng.random_range(STAR_SPEED_MIN..STAR_SPEED_MAX);
        Self { x, y, base_radius, radius: base_radius, speed, color: STAR_COLOR }
    }

    /// Generate `count` stars.
    pub fn populate(rng: &mut impl Rng, viewport: Viewport, count: usize) -> Vec<Self> {
        (0..count).map(|_| Self::random(rng, viewport)).collect()
    }

    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Distance past an edge at which the star wraps around: twice its
    /// current radius.
    #[must_use]
    pub fn wrap_margin(&self) -> f64 {
        2.0 * self.radius
    }

    /// Advance one frame of `delta` reference frames.
    ///
    /// Afterwards both coordinates lie in `[-margin, extent + margin)` for the
    /// new radius's [`Star::wrap_margin`].
    pub fn update(&mut self, delta: f64, viewport: Viewport, rng: &mut impl Rng) {
        let step = self.speed * delta;
        self.x += step;
        let rise = step * (viewport.width / 2.0 - self.x) / VERTICAL_DRIFT_DIVISOR;
        self.y -= rise;
        self.radius = self.base_radius * rng.random_range(RADIUS_JITTER_MIN..RADIUS_JITTER_MAX);

        let margin = self.wrap_margin();
        self.x = wrap_axis(self.x, step, viewport.width, margin);
        self.y = wrap_axis(self.y, -rise, viewport.height, margin);
    }

    /// Fill the star's outline at its current position and radius.
    ///
    /// Drawing state is restored even when a transform fails.
    ///
    /// # Errors
    ///
    /// Propagates the surface's transform failure.
    pub fn draw(&self, surface: &mut dyn Surface) -> Result<(), SurfaceError> {
        surface.save();
        let traced = self.trace(surface);
        surface.restore();
        traced
    }

    fn trace(&self, surface: &mut dyn Surface) -> Result<(), SurfaceError> {
        surface.begin_path();
        surface.translate(self.x, self.y)?;
        let [first, rest @ ..] = outline(self.radius);
        surface.move_to(first.x, first.y);
        for pt in rest {
            surface.line_to(pt.x, pt.y);
        }
        surface.close_path();
        surface.fill(self.color);
        Ok(())
    }
}

/// Keep `pos` inside `[-margin, extent + margin)`.
///
/// A coordinate that left the band moving outward re-enters at the opposite
/// edge. One that is outside only because the twinkle shrank the band, or
/// that did not move, is held at the edge it touches, so a freshly wrapped
/// star never flips straight back.
fn wrap_axis(pos: f64, velocity: f64, extent: f64, margin: f64) -> f64 {
    let low = -margin;
    let high = extent + margin;
    if pos < low {
        if velocity < 0.0 { high.next_down() } else { low }
    } else if pos >= high {
        if velocity > 0.0 { low } else { high.next_down() }
    } else {
        pos
    }
}

/// The 10 vertices of a five-pointed star centred on the origin.
///
/// Starts at the top point and walks clockwise in 36° steps, alternating the
/// outer `radius` and the inner `radius * STAR_INNER_RATIO`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn outline(radius: f64) -> [Point; 10] {
    let inner = radius * STAR_INNER_RATIO;
    let offset = std::f64::consts::FRAC_PI_2;
    std::array::from_fn(|i| {
        let angle = FRAC_PI_5.mul_add(i as f64, -offset);
        let r = if i % 2 == 0 { radius } else { inner };
        Point::new(r * angle.cos(), r * angle.sin())
    })
}
