//! Depth Clicker - tap to dig deeper
//!
//! Core modules:
//! - `awards`: Award catalog and progress math
//! - `sim`: Deterministic simulation (depth counter, award events, particle bursts)
//! - `session`: Game state bound to settings and a persisted counter
//! - `persistence`: Key-value storage backends
//! - `platform`: Browser bindings (wasm32 only)
//! - `tuning`: Data-driven burst profiles
//! - `ui`: Read-only projections for the presentation layer

pub mod awards;
pub mod persistence;
pub mod platform;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use awards::{Award, AwardCatalog, AwardId};
pub use session::{Feedback, Haptic, Session};
pub use settings::{QualityPreset, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Dust particles per burst
    pub const DUST_COUNT: usize = 16;
    /// Spark particles per burst
    pub const SPARK_COUNT: usize = 10;

    /// Downward drift applied to non-spark particles (fraction of travelled distance)
    pub const GRAVITY_BIAS: f32 = 0.35;
    /// Opacity of a freshly spawned particle
    pub const MAX_PARTICLE_OPACITY: f32 = 0.9;
    /// Particles never shrink below this radius
    pub const MIN_PARTICLE_RADIUS: f32 = 0.5;

    /// Burst scale factor floor
    pub const MIN_BURST_SCALE: f32 = 0.5;
    /// Control size (points) at which the burst scale is 1.0
    pub const REFERENCE_CONTROL_SIZE: f32 = 200.0;

    /// Storage key of the persisted depth counter
    pub const DEPTH_KEY: &str = "depth";
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Burst scale factor for a tappable control of the given size (floored at 0.5)
#[inline]
pub fn scale_for_control(size: f32) -> f32 {
    (size / consts::REFERENCE_CONTROL_SIZE).max(consts::MIN_BURST_SCALE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_for_control_floor() {
        assert_eq!(scale_for_control(200.0), 1.0);
        assert_eq!(scale_for_control(300.0), 1.5);
        assert_eq!(scale_for_control(10.0), consts::MIN_BURST_SCALE);
        assert_eq!(scale_for_control(0.0), consts::MIN_BURST_SCALE);
    }

    #[test]
    fn test_polar_to_cartesian() {
        let p = polar_to_cartesian(10.0, std::f32::consts::FRAC_PI_2);
        assert!(p.x.abs() < 1e-4);
        assert!((p.y - 10.0).abs() < 1e-4);
    }
}
