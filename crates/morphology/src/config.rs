//! Classifier thresholds
//!
//! Defaults carry the calibrated values. All ratios are in normalized
//! landmark units; depths follow the detector convention (smaller z is closer).

use face_mesh::ConfigError;
use serde::{Deserialize, Serialize};

/// Eye shape thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EyeThresholds {
    /// Coverage below this is monolid
    pub monolid_max: f32,
    /// Coverage below this (and above `monolid_max`) is hooded
    pub hooded_max: f32,
    /// Aspect ratio above this is round
    pub round_min: f32,
    /// Almond aspect range; its midpoint is the most confident almond
    pub almond_min: f32,
    pub almond_max: f32,

    /// Corner tilt beyond +/- this is upturned / downturned
    pub tilt_min: f32,
    /// Tilt at which the angle confidence saturates
    pub tilt_full_scale: f32,
    /// Tilt magnitude required for the angle type to become primary
    pub primary_tilt_min: f32,
    /// Angle confidence required for the angle type to become primary
    pub angle_primary_confidence: f32,
    /// Base confidence required to keep a base shape as secondary tag
    pub base_secondary_confidence: f32,
    /// Angle confidence required to add the angle type as secondary tag
    pub angle_secondary_confidence: f32,

    /// Upper-minus-lower lid depth below `-deep_set_depth` is deep set
    pub deep_set_depth: f32,
    /// Upper-minus-lower lid depth above this is prominent
    pub prominent_depth: f32,
    /// Depth difference below this gives the strong hooded confidence
    pub strong_deep_set_depth: f32,

    /// Plausible lid separation band (exclusive)
    pub height_band_min: f32,
    pub height_band_max: f32,
    /// Spread gain for measurement stability
    pub stability_gain: f32,
}

impl Default for EyeThresholds {
    fn default() -> Self {
        Self {
            monolid_max: 0.12,
            hooded_max: 0.30,
            round_min: 0.50,
            almond_min: 0.30,
            almond_max: 0.50,
            tilt_min: 2.0,
            tilt_full_scale: 15.0,
            primary_tilt_min: 3.0,
            angle_primary_confidence: 0.65,
            base_secondary_confidence: 0.65,
            angle_secondary_confidence: 0.60,
            deep_set_depth: 0.01,
            prominent_depth: 0.01,
            strong_deep_set_depth: -0.02,
            height_band_min: 0.001,
            height_band_max: 0.5,
            stability_gain: 10.0,
        }
    }
}

impl EyeThresholds {
    pub fn almond_midpoint(&self) -> f32 {
        (self.almond_min + self.almond_max) / 2.0
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::check_range("eye.monolid_max", self.monolid_max, 0.0, 1.0)?;
        ConfigError::check_range("eye.hooded_max", self.hooded_max, 0.0, 1.0)?;
        ConfigError::check_order("eye.monolid_max", self.monolid_max, "eye.hooded_max", self.hooded_max)?;
        ConfigError::check_range("eye.round_min", self.round_min, 0.0, 1.0)?;
        ConfigError::check_order("eye.almond_min", self.almond_min, "eye.almond_max", self.almond_max)?;
        ConfigError::check_range("eye.tilt_min", self.tilt_min, 0.0, 90.0)?;
        ConfigError::check_order("eye.tilt_min", self.tilt_min, "eye.tilt_full_scale", self.tilt_full_scale)?;
        ConfigError::check_range("eye.primary_tilt_min", self.primary_tilt_min, 0.0, 90.0)?;
        for (field, value) in [
            ("eye.angle_primary_confidence", self.angle_primary_confidence),
            ("eye.base_secondary_confidence", self.base_secondary_confidence),
            ("eye.angle_secondary_confidence", self.angle_secondary_confidence),
        ] {
            ConfigError::check_range(field, value, 0.0, 1.0)?;
        }
        ConfigError::check_range("eye.deep_set_depth", self.deep_set_depth, 0.0, 1.0)?;
        ConfigError::check_range("eye.prominent_depth", self.prominent_depth, 0.0, 1.0)?;
        ConfigError::check_range("eye.strong_deep_set_depth", self.strong_deep_set_depth, -1.0, 0.0)?;
        ConfigError::check_order(
            "eye.height_band_min",
            self.height_band_min,
            "eye.height_band_max",
            self.height_band_max,
        )?;
        ConfigError::check_range("eye.stability_gain", self.stability_gain, 0.0, 1000.0)
    }
}

/// Nose width thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoseThresholds {
    /// Width ratio below this is narrow
    pub narrow_max: f32,
    /// Width ratio above this is wide
    pub medium_max: f32,
    pub stability_gain: f32,

    /// Tip projection above this is prominent
    pub prominent_projection: f32,
    /// Tip projection below this is flat
    pub flat_projection: f32,
    /// Bridge prominence above this is a high bridge
    pub high_bridge: f32,

    /// Multiplier for wide noses with a prominent tip
    pub wide_prominent_boost: f32,
    /// Multiplier for narrow noses with a high bridge
    pub narrow_bridge_boost: f32,
    /// Boosted confidence never exceeds this
    pub boost_cap: f32,
}

impl Default for NoseThresholds {
    fn default() -> Self {
        Self {
            narrow_max: 0.25,
            medium_max: 0.35,
            stability_gain: 5.0,
            prominent_projection: 0.02,
            flat_projection: -0.01,
            high_bridge: 0.015,
            wide_prominent_boost: 1.10,
            narrow_bridge_boost: 1.05,
            boost_cap: 0.95,
        }
    }
}

impl NoseThresholds {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::check_range("nose.narrow_max", self.narrow_max, 0.0, 1.0)?;
        ConfigError::check_range("nose.medium_max", self.medium_max, 0.0, 1.0)?;
        ConfigError::check_order("nose.narrow_max", self.narrow_max, "nose.medium_max", self.medium_max)?;
        ConfigError::check_range("nose.stability_gain", self.stability_gain, 0.0, 1000.0)?;
        ConfigError::check_order(
            "nose.flat_projection",
            self.flat_projection,
            "nose.prominent_projection",
            self.prominent_projection,
        )?;
        ConfigError::check_range("nose.wide_prominent_boost", self.wide_prominent_boost, 1.0, 2.0)?;
        ConfigError::check_range("nose.narrow_bridge_boost", self.narrow_bridge_boost, 1.0, 2.0)?;
        ConfigError::check_range("nose.boost_cap", self.boost_cap, 0.0, 1.0)
    }
}

/// Lip fullness thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LipThresholds {
    /// Fullness ratio below this is thin
    pub thin_max: f32,
    /// Fullness ratio above this is full
    pub medium_max: f32,

    /// Plausible lip thickness band (exclusive)
    pub thickness_band_min: f32,
    pub thickness_band_max: f32,
    pub stability_gain: f32,

    /// Upper/lower ratio difference below this is balanced
    pub balanced_max: f32,
    /// Difference below this (and above `balanced_max`) is slightly dominant
    pub slight_dominance_max: f32,

    /// Corner-to-center projection above this boosts full lips
    pub projection_min: f32,
    pub full_projection_boost: f32,
    pub boost_cap: f32,
}

impl Default for LipThresholds {
    fn default() -> Self {
        Self {
            thin_max: 0.10,
            medium_max: 0.20,
            thickness_band_min: 0.0005,
            thickness_band_max: 0.5,
            stability_gain: 10.0,
            balanced_max: 0.02,
            slight_dominance_max: 0.05,
            projection_min: 0.01,
            full_projection_boost: 1.10,
            boost_cap: 0.95,
        }
    }
}

impl LipThresholds {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::check_range("lip.thin_max", self.thin_max, 0.0, 1.0)?;
        ConfigError::check_range("lip.medium_max", self.medium_max, 0.0, 1.0)?;
        ConfigError::check_order("lip.thin_max", self.thin_max, "lip.medium_max", self.medium_max)?;
        ConfigError::check_order(
            "lip.thickness_band_min",
            self.thickness_band_min,
            "lip.thickness_band_max",
            self.thickness_band_max,
        )?;
        ConfigError::check_range("lip.stability_gain", self.stability_gain, 0.0, 1000.0)?;
        ConfigError::check_range("lip.balanced_max", self.balanced_max, 0.0, 1.0)?;
        ConfigError::check_order(
            "lip.balanced_max",
            self.balanced_max,
            "lip.slight_dominance_max",
            self.slight_dominance_max,
        )?;
        ConfigError::check_range("lip.full_projection_boost", self.full_projection_boost, 1.0, 2.0)?;
        ConfigError::check_range("lip.boost_cap", self.boost_cap, 0.0, 1.0)
    }
}

/// Thresholds for all three feature classifiers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MorphologyConfig {
    pub eye: EyeThresholds,
    pub nose: NoseThresholds,
    pub lip: LipThresholds,
}

impl MorphologyConfig {
    /// Create strict config (angle types and secondary tags need stronger evidence)
    pub fn strict() -> Self {
        Self {
            eye: EyeThresholds {
                primary_tilt_min: 5.0,
                angle_primary_confidence: 0.75,
                base_secondary_confidence: 0.75,
                angle_secondary_confidence: 0.70,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Create lenient config (angle types and secondary tags trigger earlier)
    pub fn lenient() -> Self {
        Self {
            eye: EyeThresholds {
                tilt_min: 1.5,
                primary_tilt_min: 2.5,
                angle_primary_confidence: 0.60,
                base_secondary_confidence: 0.60,
                angle_secondary_confidence: 0.55,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.eye.validate()?;
        self.nose.validate()?;
        self.lip.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        assert!(MorphologyConfig::default().validate().is_ok());
        assert!(MorphologyConfig::strict().validate().is_ok());
        assert!(MorphologyConfig::lenient().validate().is_ok());
    }

    #[test]
    fn test_rejects_inverted_nose_buckets() {
        let config = MorphologyConfig {
            nose: NoseThresholds {
                narrow_max: 0.40,
                medium_max: 0.35,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Ordering { lower: "nose.narrow_max", .. })
        ));
    }

    #[test]
    fn test_rejects_out_of_range_confidence() {
        let eye = EyeThresholds {
            angle_primary_confidence: 1.5,
            ..Default::default()
        };
        assert!(matches!(eye.validate(), Err(ConfigError::OutOfRange { .. })));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: MorphologyConfig =
            serde_json::from_str(r#"{"lip": {"thin_max": 0.08}}"#).unwrap();
        assert_eq!(config.lip.thin_max, 0.08);
        assert_eq!(config.lip.medium_max, 0.20);
        assert_eq!(config.eye, EyeThresholds::default());
    }

    #[test]
    fn test_almond_midpoint() {
        assert!((EyeThresholds::default().almond_midpoint() - 0.40).abs() < 1e-6);
    }
}
