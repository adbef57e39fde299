//! Shared threshold constants used by both build.rs and runtime code.
//!
//! This module is included by both the build script and the thresholds module
//! so the presets validated at compile time obey the same limits as runtime config.

// Some constants are only used by build.rs for validation
#![allow(dead_code)]

/// Wrist must be this far above the shoulder (normalized height) to count as raised.
pub const DEFAULT_HAND_RAISE_MARGIN: f32 = 0.10;
/// Both knees must bend below this angle (degrees) for a squat.
pub const DEFAULT_SQUAT_KNEE_ANGLE_DEG: f32 = 95.0;
/// Upward hip movement per frame (normalized height) that counts as a jump.
pub const DEFAULT_JUMP_VELOCITY: f32 = 0.05;
/// Hip-to-ankle vertical distance below which legs look tucked.
pub const DEFAULT_JUMP_POSTURE_DISTANCE: f32 = 0.30;
/// Maximum wrist separation for a clap.
pub const DEFAULT_CLAP_DISTANCE: f32 = 0.08;
/// Maximum vertical offset between wrists and shoulders for a clap.
pub const DEFAULT_CLAP_HEIGHT_TOLERANCE: f32 = 0.15;
/// Landmarks reporting a lower visibility are treated as absent.
pub const DEFAULT_MIN_VISIBILITY: f32 = 0.0;

/// Inclusive range for normalized distances and margins
pub const NORMALIZED_RANGE: (f32, f32) = (0.0, 1.0);

/// Knee angle range in degrees (exclusive lower bound)
pub const ANGLE_RANGE_DEG: (f32, f32) = (0.0, 180.0);

/// Check a normalized distance value
pub fn normalized_in_range(value: f32) -> bool {
    value.is_finite() && value >= NORMALIZED_RANGE.0 && value <= NORMALIZED_RANGE.1
}

/// Check an angle threshold
pub fn angle_in_range(value: f32) -> bool {
    value.is_finite() && value > ANGLE_RANGE_DEG.0 && value <= ANGLE_RANGE_DEG.1
}
