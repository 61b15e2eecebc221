//! Shared numeric and color constants for the sky scene.

// ── Timing ──────────────────────────────────────────────────────

/// Reference frame length in milliseconds; a frame of this length has delta 1.
pub const REFERENCE_FRAME_MS: f64 = 16.0;

// ── Stars ───────────────────────────────────────────────────────

/// π / 5 (36°): angular step for a 10-vertex star polygon.
pub const FRAC_PI_5: f64 = std::f64::consts::PI / 5.0;

/// Inner-to-outer radius ratio of the drawn star shape.
pub const STAR_INNER_RATIO: f64 = 0.6;

/// Smallest base radius of a generated star.
pub const STAR_RADIUS_MIN: f64 = 2.0;
/// Upper bound (exclusive) of a generated star's base radius.
pub const STAR_RADIUS_MAX: f64 = 5.0;

/// Slowest drift, in pixels per reference frame.
pub const STAR_SPEED_MIN: f64 = 0.1;
/// Upper bound (exclusive) of the drift speed.
pub const STAR_SPEED_MAX: f64 = 0.9;

/// Smallest twinkle factor applied to the base radius.
pub const RADIUS_JITTER_MIN: f64 = 0.9;
/// Upper bound (exclusive) of the twinkle factor.
pub const RADIUS_JITTER_MAX: f64 = 1.15;

/// Divisor applied to the vertical drift term.
pub const VERTICAL_DRIFT_DIVISOR: f64 = 1000.0;

/// Fill color of every star.
pub const STAR_COLOR: &str = "#fff";

// ── Constellations ──────────────────────────────────────────────

/// Fraction of the surface the selection anchor is drawn from.
pub const ANCHOR_SPAN: f64 = 0.8;

/// Fewest stars a constellation needs before it is drawn.
pub const MIN_CONSTELLATION_STARS: usize = 3;

/// Spread of the star-count draw: `round(U[0,1) * spread + MIN)`.
pub const CONSTELLATION_STAR_SPREAD: f64 = 7.0;

/// Stroke color of constellation lines.
pub const CONSTELLATION_COLOR: &str = "#f7eada";

// ── Frame ───────────────────────────────────────────────────────

/// Color the surface is cleared to each frame.
pub const BACKGROUND_COLOR: &str = "#000";

/// Vignette color at the inner radius: transparent black.
pub const VIGNETTE_INNER_COLOR: &str = "#0000";
/// Vignette color at the outer radius: black at 80% alpha.
pub const VIGNETTE_OUTER_COLOR: &str = "#000C";
