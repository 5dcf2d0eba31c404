//! Player settings and preferences
//!
//! Held in memory for the session only. The depth counter is the one value
//! that is ever written to storage.

use std::str::FromStr;

use thiserror::Error;

/// Quality preset name that did not match any preset
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown quality preset '{0}'")]
pub struct UnknownPreset(pub String);

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    /// Maximum live particles for this preset
    pub fn max_particles(&self) -> usize {
        match self {
            QualityPreset::Low => 100,
            QualityPreset::Medium => 500,
            QualityPreset::High => 2000,
        }
    }
}

impl FromStr for QualityPreset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(QualityPreset::Low),
            "medium" | "med" => Ok(QualityPreset::Medium),
            "high" => Ok(QualityPreset::High),
            _ => Err(UnknownPreset(s.to_string())),
        }
    }
}

/// Player settings/preferences
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,

    // === Tap feedback ===
    /// Dust/spark burst on every tap
    pub particles: bool,
    /// Icon spin on every tap
    pub icon_spin: bool,
    /// Haptic pulse on taps and awards
    pub haptics: bool,

    // === Accessibility ===
    /// Reduced motion (no bursts, no spin)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            particles: true,
            icon_spin: true,
            haptics: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Create settings from a quality preset
    pub fn from_preset(preset: QualityPreset) -> Self {
        Self {
            quality: preset,
            ..Self::default()
        }
    }

    /// Effective particle bursts (respects reduced_motion)
    pub fn effective_particles(&self) -> bool {
        self.particles && !self.reduced_motion
    }

    /// Effective icon spin (respects reduced_motion)
    pub fn effective_icon_spin(&self) -> bool {
        self.icon_spin && !self.reduced_motion
    }

    /// Effective live particle cap
    pub fn max_particles(&self) -> usize {
        if !self.effective_particles() {
            0
        } else {
            self.quality.max_particles()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_parse() {
        assert_eq!("HIGH".parse::<QualityPreset>(), Ok(QualityPreset::High));
        assert_eq!("med".parse::<QualityPreset>(), Ok(QualityPreset::Medium));
        assert_eq!(
            "ultra".parse::<QualityPreset>(),
            Err(UnknownPreset("ultra".to_string()))
        );
        assert_eq!(QualityPreset::Low.as_str(), "Low");
    }

    #[test]
    fn test_unknown_preset_message() {
        let err = "ultra".parse::<QualityPreset>().unwrap_err();
        assert_eq!(err.to_string(), "unknown quality preset 'ultra'");
    }

    #[test]
    fn test_reduced_motion_disables_effects() {
        let settings = Settings {
            reduced_motion: true,
            ..Settings::default()
        };
        assert!(!settings.effective_particles());
        assert!(!settings.effective_icon_spin());
        assert_eq!(settings.max_particles(), 0);
        // Haptics are not motion
        assert!(settings.haptics);
    }

    #[test]
    fn test_max_particles_by_preset() {
        assert_eq!(Settings::from_preset(QualityPreset::Low).max_particles(), 100);
        assert_eq!(Settings::default().max_particles(), 500);
        assert_eq!(Settings::from_preset(QualityPreset::High).max_particles(), 2000);
    }
}
