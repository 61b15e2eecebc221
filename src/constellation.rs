//! Constellations: short fading polylines through nearby stars.
//!
//! A constellation refers to stars by their index in the scene's star list;
//! the scene owns the stars and moves them every frame, so the polyline
//! follows the drift. Selection is positional, not sampled: the first matches
//! in population order win.

#[cfg(test)]
#[path = "constellation_test.rs"]
mod constellation_test;

use rand::Rng;

use crate::consts::{ANCHOR_SPAN, CONSTELLATION_COLOR, CONSTELLATION_STAR_SPREAD, MIN_CONSTELLATION_STARS};
use crate::geom::{Point, SelectionBox, Viewport};
use crate::star::Star;
use crate::surface::Surface;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Constellation {
    /// Indices into the scene's star list, in drawing order.
    pub stars: Vec<usize>,
    /// Whether the path returns to the first star.
    pub closed: bool,
    /// Stroke width; also the fade level. Never negative.
    pub width: f64,
}

impl Constellation {
    /// Pick a random selection box and gather the stars inside it.
    ///
    /// The anchor is drawn from the top-left 80% of the surface and the box
    /// half-size from `[0, height / 4)`. The random draws happen in a fixed
    /// order (anchor x, anchor y, radius, star limit, closed) so a seeded
    /// generator always yields the same constellation.
    pub fn random(rng: &mut impl Rng, stars: &[Star], viewport: Viewport, width: f64) -> Self {
        let anchor = Point::new(
            rng.random::<f64>() * viewport.width * ANCHOR_SPAN,
            rng.random::<f64>() * viewport.height * ANCHOR_SPAN,
        );
        let radius = (viewport.height / 2.0) * rng.random::<f64>() * 0.5;
        let limit = star_limit(rng.random::<f64>());
        let closed = rng.random::<f64>() > 0.5;
        Self::from_box(stars, SelectionBox::new(anchor, radius), limit, closed, width)
    }

    /// Take the first `limit` stars (in population order) inside `bbox`.
    #[must_use]
    pub fn from_box(stars: &[Star], bbox: SelectionBox, limit: usize, closed: bool, width: f64) -> Self {
        let selected = stars
            .iter()
            .enumerate()
            .filter(|(_, star)| bbox.contains(star.position()))
            .map(|(idx, _)| idx)
            .take(limit)
            .collect();
        Self { stars: selected, closed, width: width.max(0.0) }
    }

    /// Whether there are enough stars to form a visible shape.
    #[must_use]
    pub fn is_drawable(&self) -> bool {
        self.stars.len() >= MIN_CONSTELLATION_STARS
    }

    /// Reduce the width by `amount`, stopping at zero.
    pub fn fade(&mut self, amount: f64) {
        self.width = (self.width - amount).max(0.0);
    }

    /// Current star positions in drawing order.
    #[must_use]
    pub fn points(&self, stars: &[Star]) -> Vec<Point> {
        self.stars
            .iter()
            .filter_map(|&idx| stars.get(idx))
            .map(Star::position)
            .collect()
    }

    /// Stroke the polyline. Fewer than three stars draws nothing.
    ///
    /// A fully faded constellation is still stroked, with width zero.
    pub fn draw(&self, stars: &[Star], surface: &mut dyn Surface) {
        if !self.is_drawable() {
            return;
        }
        let points = self.points(stars);
        let Some((first, rest)) = points.split_first() else {
            return;
        };

        surface.begin_path();
        surface.move_to(first.x, first.y);
        for pt in rest {
            surface.line_to(pt.x, pt.y);
        }
        if self.closed {
            surface.line_to(first.x, first.y);
        }
        surface.stroke(CONSTELLATION_COLOR, self.width);
    }
}

/// Star limit for a uniform draw `u` in `[0, 1)`: `round(u * 7 + 3)`, so 3 to 10.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn star_limit(u: f64) -> usize {
    u.mul_add(CONSTELLATION_STAR_SPREAD, MIN_CONSTELLATION_STARS as f64)
        .round() as usize
}
