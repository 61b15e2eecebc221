//! Scene state and the per-frame update.
//!
//! [`SceneCore`] owns every piece of mutable scene state: the star list, the
//! active constellation, and the frame/spawn timestamps. It knows nothing
//! about scheduling; the [`crate::animator`] module calls [`SceneCore::draw`]
//! once per frame with the host's timestamp.
//!
//! Each frame runs in a fixed order:
//!
//! 1. clear to black
//! 2. move, twinkle and wrap stars, then draw them
//! 3. stroke the constellation, fade it, and replace it when its time is up
//! 4. darken the edges with the vignette
//!
//! A surface failure aborts only the layer it happened in. State updates
//! always run, so a broken frame does not stall the animation.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use rand::Rng;
use rand::rngs::StdRng;

use crate::config::SkyConfig;
use crate::consts::{BACKGROUND_COLOR, REFERENCE_FRAME_MS, VIGNETTE_INNER_COLOR, VIGNETTE_OUTER_COLOR};
use crate::constellation::Constellation;
use crate::geom::Viewport;
use crate::star::Star;
use crate::surface::{RadialGradient, Surface, SurfaceError};

/// A draw layer that can be skipped when the surface fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Stars,
    Vignette,
}

/// What happened during one call to [`SceneCore::draw`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    /// Elapsed time in reference frames.
    pub delta: f64,
    /// Whether a new constellation replaced the old one.
    pub spawned: bool,
    /// Layers aborted by a surface error.
    pub skipped: Vec<(Layer, SurfaceError)>,
}

pub struct SceneCore<R = StdRng> {
    config: SkyConfig,
    rng: R,
    pub viewport: Viewport,
    pub stars: Vec<Star>,
    pub constellation: Constellation,
    /// Timestamp of the previous frame, in ms.
    pub last_frame_ms: f64,
    /// Timestamp of the last constellation spawn, in ms.
    pub last_spawn_ms: f64,
    /// Time to wait after `last_spawn_ms` before the next spawn, in ms.
    pub spawn_interval_ms: f64,
    pub frames: u64,
}

impl<R: Rng> SceneCore<R> {
    /// Create an empty scene. Stars are generated by [`SceneCore::initialize`].
    pub fn new(config: SkyConfig, viewport: Viewport, mut rng: R) -> Self {
        let spawn_interval_ms = rng.random::<f64>() * config.first_spawn_window_ms;
        Self {
            config,
            rng,
            viewport,
            stars: Vec::new(),
            constellation: Constellation::default(),
            last_frame_ms: 0.0,
            last_spawn_ms: 0.0,
            spawn_interval_ms,
            frames: 0,
        }
    }

    /// Rewind the clock for a fresh run: zero timestamps and frame count,
    /// and draw a new first spawn interval.
    pub fn reset_timing(&mut self) {
        self.last_frame_ms = 0.0;
        self.last_spawn_ms = 0.0;
        self.spawn_interval_ms = self.rng.random::<f64>() * self.config.first_spawn_window_ms;
        self.frames = 0;
    }

    #[must_use]
    pub fn config(&self) -> &SkyConfig {
        &self.config
    }

    /// Size the surface, paint it black, and populate the sky.
    pub fn initialize(&mut self, surface: &mut dyn Surface) {
        surface.configure_size(self.viewport.width, self.viewport.height);
        self.clear(surface);
        self.stars = Star::populate(&mut self.rng, self.viewport, self.config.star_count);
        self.generate_random_constellation();
        log::info!(
            "sky initialized: {} stars on {}x{}",
            self.stars.len(),
            self.viewport.width,
            self.viewport.height
        );
    }

    /// Advance and render one frame at host timestamp `now` (ms).
    ///
    /// Timestamps are expected to be monotonic; a timestamp earlier than the
    /// previous one counts as no elapsed time.
    pub fn draw(&mut self, now: f64, surface: &mut dyn Surface) -> FrameReport {
        let delta = ((now - self.last_frame_ms) / REFERENCE_FRAME_MS).max(0.0);
        let mut report = FrameReport { delta, ..FrameReport::default() };

        self.clear(surface);

        self.update_stars(delta);
        if let Err(err) = self.draw_stars(surface) {
            log::warn!("skipping star layer: {err}");
            report.skipped.push((Layer::Stars, err));
        }

        self.constellation.draw(&self.stars, surface);
        report.spawned = self.update_constellation(now, delta);

        if let Err(err) = self.draw_vignette(surface) {
            log::warn!("skipping vignette: {err}");
            report.skipped.push((Layer::Vignette, err));
        }

        self.last_frame_ms = now;
        self.frames += 1;
        report
    }

    /// Fill the whole surface with opaque black.
    pub fn clear(&self, surface: &mut dyn Surface) {
        surface.fill_rect(0.0, 0.0, self.viewport.width, self.viewport.height, BACKGROUND_COLOR);
    }

    pub fn update_stars(&mut self, delta: f64) {
        let viewport = self.viewport;
        for star in &mut self.stars {
            star.update(delta, viewport, &mut self.rng);
        }
    }

    /// Draw every star; stops at the first surface failure.
    ///
    /// # Errors
    ///
    /// Returns the failing star's surface error.
    pub fn draw_stars(&self, surface: &mut dyn Surface) -> Result<(), SurfaceError> {
        for star in &self.stars {
            star.draw(surface)?;
        }
        Ok(())
    }

    /// Fade the constellation and replace it once the spawn interval elapsed.
    ///
    /// Returns `true` when a new constellation was generated.
    pub fn update_constellation(&mut self, now: f64, delta: f64) -> bool {
        self.constellation.fade(self.config.constellation_fade_rate * delta);

        if now - self.last_spawn_ms <= self.spawn_interval_ms {
            return false;
        }
        self.last_spawn_ms = now;
        self.spawn_interval_ms =
            self.rng.random::<f64>() * self.config.spawn_interval_jitter_ms + self.config.spawn_interval_min_ms;
        self.generate_random_constellation();
        true
    }

    /// Replace the active constellation with a freshly selected one.
    pub fn generate_random_constellation(&mut self) {
        self.constellation = Constellation::random(
            &mut self.rng,
            &self.stars,
            self.viewport,
            self.config.constellation_width,
        );
        log::debug!(
            "new constellation: {} stars, closed={}",
            self.constellation.stars.len(),
            self.constellation.closed
        );
    }

    /// Radial darkening from the inner radius out to half the surface width.
    #[must_use]
    pub fn vignette(&self) -> RadialGradient {
        RadialGradient::new(
            self.viewport.center(),
            self.config.vignette_inner_radius,
            self.viewport.width / 2.0,
        )
        .with_stop(0.0, VIGNETTE_INNER_COLOR)
        .with_stop(1.0, VIGNETTE_OUTER_COLOR)
    }

    /// # Errors
    ///
    /// Returns the surface error when the gradient cannot be painted.
    pub fn draw_vignette(&self, surface: &mut dyn Surface) -> Result<(), SurfaceError> {
        surface.fill_rect_radial_gradient(0.0, 0.0, self.viewport.width, self.viewport.height, &self.vignette())
    }
}
