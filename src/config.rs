//! Scene configuration.
//!
//! Every field has a default matching the classic look of the scene, so an
//! empty JSON object (or no config at all) yields the standard 500-star sky.
//! Hosts pass overrides as a camelCase JSON string.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

pub const DEFAULT_STAR_COUNT: usize = 500;
pub const DEFAULT_VIGNETTE_INNER_RADIUS: f64 = 250.0;
pub const DEFAULT_CONSTELLATION_FADE_RATE: f64 = 0.07;
pub const DEFAULT_CONSTELLATION_WIDTH: f64 = 4.0;
pub const DEFAULT_FIRST_SPAWN_WINDOW_MS: f64 = 3000.0;
pub const DEFAULT_SPAWN_INTERVAL_MIN_MS: f64 = 2000.0;
pub const DEFAULT_SPAWN_INTERVAL_JITTER_MS: f64 = 1000.0;

/// Error returned by [`SkyConfig::from_json`] and [`SkyConfig::validate`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be a finite, non-negative number (got {value})")]
    OutOfRange { field: &'static str, value: f64 },
    #[error("spawnIntervalMinMs must be positive (got {0})")]
    ZeroSpawnInterval(f64),
    #[error("unknown log level: {0}")]
    LogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SkyConfig {
    /// Number of stars generated at startup.
    pub star_count: usize,
    /// Seed for the scene's random generator. `None` seeds from host entropy.
    pub seed: Option<u64>,
    /// Radius at which the vignette starts darkening.
    pub vignette_inner_radius: f64,
    /// Width lost by a constellation per reference frame.
    pub constellation_fade_rate: f64,
    /// Stroke width of a freshly spawned constellation.
    pub constellation_width: f64,
    /// The first respawn happens uniformly within this many ms.
    pub first_spawn_window_ms: f64,
    pub spawn_interval_min_ms: f64,
    pub spawn_interval_jitter_ms: f64,
    /// `log` level name used when the browser logger is installed.
    pub log_level: String,
}

impl Default for SkyConfig {
    fn default() -> Self {
        Self {
            star_count: DEFAULT_STAR_COUNT,
            seed: None,
            vignette_inner_radius: DEFAULT_VIGNETTE_INNER_RADIUS,
            constellation_fade_rate: DEFAULT_CONSTELLATION_FADE_RATE,
            constellation_width: DEFAULT_CONSTELLATION_WIDTH,
            first_spawn_window_ms: DEFAULT_FIRST_SPAWN_WINDOW_MS,
            spawn_interval_min_ms: DEFAULT_SPAWN_INTERVAL_MIN_MS,
            spawn_interval_jitter_ms: DEFAULT_SPAWN_INTERVAL_JITTER_MS,
            log_level: "info".to_owned(),
        }
    }
}

impl SkyConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on malformed JSON, unknown fields, or
    /// out-of-range values.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse an optional JSON config; `None` or a blank string yields defaults.
    ///
    /// # Errors
    ///
    /// Same as [`SkyConfig::from_json`].
    pub fn from_optional_json(raw: Option<&str>) -> Result<Self, ConfigError> {
        match raw.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(raw) => Self::from_json(raw),
        }
    }

    /// Check numeric fields for ranges the scene can animate.
    ///
    /// # Errors
    ///
    /// Returns the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("vignetteInnerRadius", self.vignette_inner_radius),
            ("constellationFadeRate", self.constellation_fade_rate),
            ("constellationWidth", self.constellation_width),
            ("firstSpawnWindowMs", self.first_spawn_window_ms),
            ("spawnIntervalMinMs", self.spawn_interval_min_ms),
            ("spawnIntervalJitterMs", self.spawn_interval_jitter_ms),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::OutOfRange { field, value });
            }
        }
        if self.spawn_interval_min_ms == 0.0 {
            return Err(ConfigError::ZeroSpawnInterval(self.spawn_interval_min_ms));
        }
        self.level_filter()?;
        Ok(())
    }

    /// The configured log level.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::LogLevel`] if the name is not a `log` level.
    pub fn level_filter(&self) -> Result<log::Level, ConfigError> {
        self.log_level
            .parse::<log::Level>()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}
