//! Data-driven burst tuning
//!
//! Motion profiles for the two particle kinds spawned by a tap. Ranges are
//! inclusive and sampled uniformly; speed and start radius are multiplied by
//! the burst scale factor.

use std::f32::consts::PI;

use serde::Deserialize;

use crate::consts::{DUST_COUNT, SPARK_COUNT};

/// Inclusive range sampled uniformly
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Spawn parameters for one particle kind
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ParticleProfile {
    /// Particles per burst
    pub count: usize,
    /// Lifetime in seconds (min must be > 0)
    pub lifetime: Span,
    /// Launch angle in radians
    pub angle: Span,
    /// Speed in points/s at scale 1.0
    pub speed: Span,
    /// Starting radius in points at scale 1.0
    pub start_radius: Span,
}

/// Both profiles of a tap burst
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BurstTuning {
    /// Slow, heavy debris that falls sideways and down
    pub dust: ParticleProfile,
    /// Fast bright sparks, full circle, no gravity
    pub spark: ParticleProfile,
}

impl Default for BurstTuning {
    fn default() -> Self {
        Self {
            dust: ParticleProfile {
                count: DUST_COUNT,
                lifetime: Span::new(0.6, 1.0),
                angle: Span::new(0.9 * PI, 2.1 * PI),
                speed: Span::new(40.0, 110.0),
                start_radius: Span::new(3.0, 8.0),
            },
            spark: ParticleProfile {
                count: SPARK_COUNT,
                lifetime: Span::new(0.25, 0.45),
                angle: Span::new(0.0, 2.0 * PI),
                speed: Span::new(120.0, 220.0),
                start_radius: Span::new(1.5, 3.0),
            },
        }
    }
}

impl BurstTuning {
    /// Parse tuning overrides from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Particles spawned per burst
    pub fn burst_size(&self) -> usize {
        self.dust.count + self.spark.count
    }
}
