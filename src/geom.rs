#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

/// A point in surface coordinates (CSS pixels, origin top-left).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Fixed size of the drawing surface.
///
/// Captured once when the scene is initialized; the scene does not follow
/// later window resizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Midpoint of the surface.
    #[must_use]
    pub fn center(&self) -> Point {
        Point { x: self.width * 0.5, y: self.height * 0.5 }
    }

    /// Whether `pt` lies inside `[0, width) x [0, height)`.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        (0.0..self.width).contains(&pt.x) && (0.0..self.height).contains(&pt.y)
    }
}

/// Axis-aligned square of half-size `radius` around `center`, with open edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionBox {
    pub center: Point,
    pub radius: f64,
}

impl SelectionBox {
    #[must_use]
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Strict containment test on both axes.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x > self.center.x - self.radius
            && pt.x < self.center.x + self.radius
            && pt.y > self.center.y - self.radius
            && pt.y < self.center.y + self.radius
    }
}
