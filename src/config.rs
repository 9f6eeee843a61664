// Tunables for the particle field. Defaults reproduce the hero canvas of the site;
// every field can be overridden from a JSON object passed in by the page.

use crate::color::Color;
use crate::error::ConfigError;
use serde::Deserialize;

// Links are checked for every pair each frame, so the count stays small.
pub const MAX_PARTICLES: usize = 1_000;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub particle_count: usize,
    pub max_speed: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub link_distance: f64,
    pub link_max_alpha: f64,
    pub link_width: f64,
    pub particle_alpha: f64,
    pub trail_alpha: f64,
    pub background: Color,
    pub accent: Color,
    pub seed: Option<u64>,
    pub profile_frames: bool,
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            particle_count: 50,
            max_speed: 0.25,
            min_radius: 1.0,
            max_radius: 3.0,
            link_distance: 150.0,
            link_max_alpha: 0.2,
            link_width: 1.0,
            particle_alpha: 0.5,
            trail_alpha: 0.1,
            background: Color::NAVY,
            accent: Color::GOLD,
            seed: None,
            profile_frames: false,
        }
    }
}

impl FieldConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: FieldConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), ConfigError> {
            Err(ConfigError::Invalid { field, reason })
        }

        if self.particle_count > MAX_PARTICLES {
            return invalid("particle_count", "must not exceed 1000");
        }
        if !self.max_speed.is_finite() || self.max_speed < 0.0 {
            return invalid("max_speed", "must be a finite non-negative number");
        }
        if !self.min_radius.is_finite() || self.min_radius < 0.0 {
            return invalid("min_radius", "must be a finite non-negative number");
        }
        if !self.max_radius.is_finite() || self.max_radius < self.min_radius {
            return invalid("max_radius", "must not be smaller than min_radius");
        }
        if !self.link_distance.is_finite() || self.link_distance <= 0.0 {
            return invalid("link_distance", "must be positive");
        }
        if !self.link_width.is_finite() || self.link_width <= 0.0 {
            return invalid("link_width", "must be positive");
        }
        for &(field, alpha) in &[
            ("link_max_alpha", self.link_max_alpha),
            ("particle_alpha", self.particle_alpha),
            ("trail_alpha", self.trail_alpha),
        ] {
            if !(0.0..=1.0).contains(&alpha) {
                return invalid(field, "must be within [0, 1]");
            }
        }
        Ok(())
    }
}
