//! Tunable gesture thresholds.
//!
//! All values are normalized to frame width/height (never pixels), except the
//! knee angle which is in degrees. The defaults are hand-tuned and usually need
//! recalibration per deployment (camera angle, child height, frame rate).

use serde::{Deserialize, Serialize};

use crate::error::GestureError;
use crate::threshold_limits::*;

/// JSON of the shipped default preset (validated by build.rs)
pub const DEFAULT_PRESET_JSON: &str = include_str!("../presets/default.json");

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GestureThresholds {
    /// Wrist must be above shoulder minus this margin
    pub hand_raise_margin: f32,
    /// Both knee angles below this (degrees) is a squat
    pub squat_knee_angle_deg: f32,
    /// Hip rise per frame that counts as a jump
    pub jump_velocity: f32,
    /// Hip-to-ankle distance below this counts as a tucked jump
    pub jump_posture_distance: f32,
    /// Maximum wrist separation for a clap
    pub clap_distance: f32,
    /// Maximum wrist/shoulder height offset for a clap
    pub clap_height_tolerance: f32,
    /// Landmarks with a lower visibility are ignored
    pub min_visibility: f32,
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            hand_raise_margin: DEFAULT_HAND_RAISE_MARGIN,
            squat_knee_angle_deg: DEFAULT_SQUAT_KNEE_ANGLE_DEG,
            jump_velocity: DEFAULT_JUMP_VELOCITY,
            jump_posture_distance: DEFAULT_JUMP_POSTURE_DISTANCE,
            clap_distance: DEFAULT_CLAP_DISTANCE,
            clap_height_tolerance: DEFAULT_CLAP_HEIGHT_TOLERANCE,
            min_visibility: DEFAULT_MIN_VISIBILITY,
        }
    }
}

impl GestureThresholds {
    /// Parse from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, GestureError> {
        let thresholds: Self = serde_json::from_str(json)?;
        thresholds.validate()?;
        Ok(thresholds)
    }

    pub fn to_json_string(&self) -> Result<String, GestureError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every value against the shared limits
    pub fn validate(&self) -> Result<(), GestureError> {
        let normalized = [
            ("hand_raise_margin", self.hand_raise_margin),
            ("jump_velocity", self.jump_velocity),
            ("jump_posture_distance", self.jump_posture_distance),
            ("clap_distance", self.clap_distance),
            ("clap_height_tolerance", self.clap_height_tolerance),
            ("min_visibility", self.min_visibility),
        ];
        for (name, value) in normalized {
            if !normalized_in_range(value) {
                return Err(GestureError::InvalidThreshold { name, value });
            }
        }

        if !angle_in_range(self.squat_knee_angle_deg) {
            return Err(GestureError::InvalidThreshold {
                name: "squat_knee_angle_deg",
                value: self.squat_knee_angle_deg,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preset_matches_defaults() {
        let preset = GestureThresholds::from_json(DEFAULT_PRESET_JSON).unwrap();
        assert_eq!(preset, GestureThresholds::default());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let thresholds = GestureThresholds::from_json(r#"{ "clap_distance": 0.12 }"#).unwrap();
        assert_eq!(thresholds.clap_distance, 0.12);
        assert_eq!(thresholds.hand_raise_margin, DEFAULT_HAND_RAISE_MARGIN);
        assert_eq!(thresholds.squat_knee_angle_deg, DEFAULT_SQUAT_KNEE_ANGLE_DEG);
    }

    #[test]
    fn test_rejects_out_of_range() {
        let err = GestureThresholds::from_json(r#"{ "jump_velocity": 1.5 }"#).unwrap_err();
        assert!(matches!(
            err,
            GestureError::InvalidThreshold { name: "jump_velocity", .. }
        ));

        let err = GestureThresholds::from_json(r#"{ "squat_knee_angle_deg": 0.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            GestureError::InvalidThreshold { name: "squat_knee_angle_deg", .. }
        ));
    }

    #[test]
    fn test_rejects_unknown_fields() {
        assert!(matches!(
            GestureThresholds::from_json(r#"{ "clap_distanse": 0.1 }"#),
            Err(GestureError::Json(_))
        ));
    }

    #[test]
    fn test_non_finite_fails_validation() {
        let thresholds = GestureThresholds {
            clap_height_tolerance: f32::NAN,
            ..Default::default()
        };
        assert!(thresholds.validate().is_err());
    }

    #[test]
    fn test_json_roundtrip() {
        let thresholds = GestureThresholds {
            squat_knee_angle_deg: 100.0,
            ..Default::default()
        };
        let json = thresholds.to_json_string().unwrap();
        assert_eq!(GestureThresholds::from_json(&json).unwrap(), thresholds);
    }
}
